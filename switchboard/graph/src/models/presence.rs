//! Presence of users.

use chrono::{DateTime, Utc};
use switchboard::backed_model;

use super::common::{DateTimeTimeZone, ItemBody};

backed_model! {
    /// A user's availability and activity.
    pub struct Presence {
        odata_type: "#microsoft.graph.presence";
        properties {
            id, set_id: String => "id";
            /// Supplemental information to availability, such as `InACall`.
            activity, set_activity: String => "activity";
            /// Base presence, such as `Available` or `Busy`.
            availability, set_availability: String => "availability";
            out_of_office_settings, set_out_of_office_settings: OutOfOfficeSettings => "outOfOfficeSettings";
            status_message, set_status_message: PresenceStatusMessage => "statusMessage";
        }
        read_only {
            sequence_number, set_sequence_number: String => "sequenceNumber";
        }
    }
}

backed_model! {
    /// A status message shown next to a user's presence.
    pub struct PresenceStatusMessage {
        odata_type: "#microsoft.graph.presenceStatusMessage";
        properties {
            /// When the message stops showing; absent means never.
            expiry_date_time, set_expiry_date_time: DateTimeTimeZone => "expiryDateTime";
            message, set_message: ItemBody => "message";
        }
        read_only {
            published_date_time, set_published_date_time: DateTime<Utc> => "publishedDateTime";
        }
    }
}

backed_model! {
    /// Out-of-office state of a user.
    pub struct OutOfOfficeSettings {
        odata_type: "#microsoft.graph.outOfOfficeSettings";
        properties {
            is_out_of_office, set_is_out_of_office: bool => "isOutOfOffice";
            message, set_message: String => "message";
        }
    }
}
