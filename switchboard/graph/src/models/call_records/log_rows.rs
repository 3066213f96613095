use chrono::{DateTime, Utc};
use switchboard::backed_model;

use super::enums::PstnCallDurationSource;

backed_model! {
    /// A Direct Routing call, as returned by `getDirectRoutingCalls`.
    pub struct DirectRoutingLogRow {
        odata_type: "#microsoft.graph.callRecords.directRoutingLogRow";
        properties {
            id, set_id: String => "id";
            call_end_sub_reason, set_call_end_sub_reason: i32 => "callEndSubReason";
            call_type, set_call_type: String => "callType";
            callee_number, set_callee_number: String => "calleeNumber";
            caller_number, set_caller_number: String => "callerNumber";
            correlation_id, set_correlation_id: String => "correlationId";
            /// Seconds.
            duration, set_duration: i32 => "duration";
            end_date_time, set_end_date_time: DateTime<Utc> => "endDateTime";
            failure_date_time, set_failure_date_time: DateTime<Utc> => "failureDateTime";
            final_sip_code, set_final_sip_code: i32 => "finalSipCode";
            final_sip_code_phrase, set_final_sip_code_phrase: String => "finalSipCodePhrase";
            invite_date_time, set_invite_date_time: DateTime<Utc> => "inviteDateTime";
            media_bypass_enabled, set_media_bypass_enabled: bool => "mediaBypassEnabled";
            media_path_location, set_media_path_location: String => "mediaPathLocation";
            signaling_location, set_signaling_location: String => "signalingLocation";
            start_date_time, set_start_date_time: DateTime<Utc> => "startDateTime";
            successful_call, set_successful_call: bool => "successfulCall";
            trunk_fully_qualified_domain_name, set_trunk_fully_qualified_domain_name: String => "trunkFullyQualifiedDomainName";
            user_display_name, set_user_display_name: String => "userDisplayName";
            user_id, set_user_id: String => "userId";
            user_principal_name, set_user_principal_name: String => "userPrincipalName";
        }
    }
}

backed_model! {
    /// A PSTN call, as returned by `getPstnCalls`.
    pub struct PstnCallLogRow {
        odata_type: "#microsoft.graph.callRecords.pstnCallLogRow";
        properties {
            id, set_id: String => "id";
            call_duration_source, set_call_duration_source: PstnCallDurationSource => "callDurationSource";
            call_id, set_call_id: String => "callId";
            call_type, set_call_type: String => "callType";
            callee_number, set_callee_number: String => "calleeNumber";
            caller_number, set_caller_number: String => "callerNumber";
            charge, set_charge: f64 => "charge";
            conference_id, set_conference_id: String => "conferenceId";
            connection_charge, set_connection_charge: f64 => "connectionCharge";
            currency, set_currency: String => "currency";
            destination_context, set_destination_context: String => "destinationContext";
            destination_name, set_destination_name: String => "destinationName";
            /// Seconds.
            duration, set_duration: i32 => "duration";
            end_date_time, set_end_date_time: DateTime<Utc> => "endDateTime";
            inventory_type, set_inventory_type: String => "inventoryType";
            license_capability, set_license_capability: String => "licenseCapability";
            operator, set_operator: String => "operator";
            start_date_time, set_start_date_time: DateTime<Utc> => "startDateTime";
            tenant_country_code, set_tenant_country_code: String => "tenantCountryCode";
            usage_country_code, set_usage_country_code: String => "usageCountryCode";
            user_display_name, set_user_display_name: String => "userDisplayName";
            user_id, set_user_id: String => "userId";
            user_principal_name, set_user_principal_name: String => "userPrincipalName";
        }
    }
}
