//! Call participants.

use switchboard::backed_model;

use super::call::ParticipantInfo;
use super::enums::{MediaDirection, Modality, RecordingStatus};
use super::identity::IdentitySet;

backed_model! {
    /// A participant in a call.
    pub struct Participant {
        odata_type: "#microsoft.graph.participant";
        properties {
            id, set_id: String => "id";
            info, set_info: ParticipantInfo => "info";
            /// Whether the participant is in the lobby.
            is_in_lobby, set_is_in_lobby: bool => "isInLobby";
            is_muted, set_is_muted: bool => "isMuted";
            media_streams, set_media_streams: Vec<MediaStream> => "mediaStreams";
            metadata, set_metadata: String => "metadata";
            recording_info, set_recording_info: RecordingInfo => "recordingInfo";
            removed_state, set_removed_state: RemovedState => "removedState";
            restricted_experience, set_restricted_experience: OnlineMeetingRestricted => "restrictedExperience";
            roster_sequence_number, set_roster_sequence_number: i64 => "rosterSequenceNumber";
        }
    }
}

backed_model! {
    /// A media stream a participant sends or receives.
    pub struct MediaStream {
        odata_type: "#microsoft.graph.mediaStream";
        properties {
            direction, set_direction: MediaDirection => "direction";
            label, set_label: String => "label";
            media_type, set_media_type: Modality => "mediaType";
            /// Whether the media is muted by the server.
            server_muted, set_server_muted: bool => "serverMuted";
            source_id, set_source_id: String => "sourceId";
        }
    }
}

backed_model! {
    pub struct RecordingInfo {
        odata_type: "#microsoft.graph.recordingInfo";
        properties {
            initiator, set_initiator: IdentitySet => "initiator";
            recording_status, set_recording_status: RecordingStatus => "recordingStatus";
        }
    }
}

backed_model! {
    /// Why a participant left the call.
    pub struct RemovedState {
        odata_type: "#microsoft.graph.removedState";
        properties {
            reason, set_reason: String => "reason";
        }
    }
}

backed_model! {
    /// Media a participant is blocked from using in a meeting.
    ///
    /// Both reasons are flag sets on the wire, such as
    /// `"watermarkProtection,unknownFutureValue"`.
    pub struct OnlineMeetingRestricted {
        odata_type: "#microsoft.graph.onlineMeetingRestricted";
        properties {
            content_sharing_disabled, set_content_sharing_disabled: String => "contentSharingDisabled";
            video_disabled, set_video_disabled: String => "videoDisabled";
        }
    }
}
