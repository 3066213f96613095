//! The `/communications` singleton.

use switchboard::backed_model;

use super::call::Call;
use super::call_records::CallRecord;
use super::online_meeting::OnlineMeetingKind;
use super::presence::Presence;

backed_model! {
    /// Root of the communications API; its navigation properties are only
    /// populated through `$expand`.
    pub struct CloudCommunications {
        odata_type: "#microsoft.graph.cloudCommunications";
        properties {
            id, set_id: String => "id";
            call_records, set_call_records: Vec<CallRecord> => "callRecords";
            calls, set_calls: Vec<Call> => "calls";
            online_meetings, set_online_meetings: Vec<OnlineMeetingKind> => "onlineMeetings";
            presences, set_presences: Vec<Presence> => "presences";
        }
    }
}
