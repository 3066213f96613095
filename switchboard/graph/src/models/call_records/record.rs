use chrono::{DateTime, Utc};
use switchboard::backed_model;

use super::endpoint::EndpointKind;
use super::enums::{CallType, FailureStage};
use super::media::Media;
use crate::models::enums::Modality;
use crate::models::identity::IdentitySet;

backed_model! {
    /// Summary of a completed call.
    pub struct CallRecord {
        odata_type: "#microsoft.graph.callRecords.callRecord";
        properties {
            id, set_id: String => "id";
            end_date_time, set_end_date_time: DateTime<Utc> => "endDateTime";
            join_web_url, set_join_web_url: String => "joinWebUrl";
            last_modified_date_time, set_last_modified_date_time: DateTime<Utc> => "lastModifiedDateTime";
            modalities, set_modalities: Vec<Modality> => "modalities";
            organizer, set_organizer: IdentitySet => "organizer";
            participants, set_participants: Vec<IdentitySet> => "participants";
            sessions, set_sessions: Vec<Session> => "sessions";
            start_date_time, set_start_date_time: DateTime<Utc> => "startDateTime";
            call_type, set_call_type: CallType => "type";
            /// Incremented whenever the record changes.
            version, set_version: i64 => "version";
        }
    }
}

backed_model! {
    /// Communication between two endpoints within a call.
    pub struct Session {
        odata_type: "#microsoft.graph.callRecords.session";
        properties {
            id, set_id: String => "id";
            callee, set_callee: EndpointKind => "callee";
            caller, set_caller: EndpointKind => "caller";
            end_date_time, set_end_date_time: DateTime<Utc> => "endDateTime";
            failure_info, set_failure_info: FailureInfo => "failureInfo";
            is_test, set_is_test: bool => "isTest";
            modalities, set_modalities: Vec<Modality> => "modalities";
            segments, set_segments: Vec<Segment> => "segments";
            start_date_time, set_start_date_time: DateTime<Utc> => "startDateTime";
        }
    }
}

backed_model! {
    /// A single leg of a session.
    pub struct Segment {
        odata_type: "#microsoft.graph.callRecords.segment";
        properties {
            id, set_id: String => "id";
            callee, set_callee: EndpointKind => "callee";
            caller, set_caller: EndpointKind => "caller";
            end_date_time, set_end_date_time: DateTime<Utc> => "endDateTime";
            failure_info, set_failure_info: FailureInfo => "failureInfo";
            media, set_media: Vec<Media> => "media";
            start_date_time, set_start_date_time: DateTime<Utc> => "startDateTime";
        }
    }
}

backed_model! {
    pub struct FailureInfo {
        odata_type: "#microsoft.graph.callRecords.failureInfo";
        properties {
            reason, set_reason: String => "reason";
            stage, set_stage: FailureStage => "stage";
        }
    }
}
