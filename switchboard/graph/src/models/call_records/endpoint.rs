use switchboard::{backed_model, discriminated_union, BackedModel, StoreError};

use super::enums::{ClientPlatform, ProductFamily};
use crate::models::identity::IdentitySet;

backed_model! {
    /// An endpoint of unspecified kind.
    pub struct Endpoint {
        odata_type: "#microsoft.graph.callRecords.endpoint";
        properties {
            user_agent, set_user_agent: UserAgentKind => "userAgent";
        }
    }
}

backed_model! {
    /// An endpoint operated by a participant.
    pub struct ParticipantEndpoint {
        odata_type: "#microsoft.graph.callRecords.participantEndpoint";
        properties {
            user_agent, set_user_agent: UserAgentKind => "userAgent";
            feedback, set_feedback: UserFeedback => "feedback";
            identity, set_identity: IdentitySet => "identity";
        }
    }
}

backed_model! {
    /// An endpoint operated by a service, such as a conferencing bridge.
    pub struct ServiceEndpoint {
        odata_type: "#microsoft.graph.callRecords.serviceEndpoint";
        properties {
            user_agent, set_user_agent: UserAgentKind => "userAgent";
        }
    }
}

backed_model! {
    /// Rating given by a participant at the end of a call.
    pub struct UserFeedback {
        odata_type: "#microsoft.graph.callRecords.userFeedback";
        properties {
            /// One of `notRated`, `bad`, `poor`, `fair`, `good`, `excellent`.
            rating, set_rating: String => "rating";
            text, set_text: String => "text";
            tokens, set_tokens: FeedbackTokenSet => "tokens";
        }
    }
}

backed_model! {
    /// Opaque tokens attached to user feedback; kept as additional data.
    pub struct FeedbackTokenSet {
        odata_type: "#microsoft.graph.callRecords.feedbackTokenSet";
        properties {}
    }
}

backed_model! {
    /// User agent of unspecified kind.
    pub struct UserAgent {
        odata_type: "#microsoft.graph.callRecords.userAgent";
        properties {
            application_version, set_application_version: String => "applicationVersion";
            header_value, set_header_value: String => "headerValue";
        }
    }
}

backed_model! {
    /// User agent of a client application.
    pub struct ClientUserAgent {
        odata_type: "#microsoft.graph.callRecords.clientUserAgent";
        properties {
            application_version, set_application_version: String => "applicationVersion";
            header_value, set_header_value: String => "headerValue";
            azure_ad_app_id, set_azure_ad_app_id: String => "azureADAppId";
            communication_service_id, set_communication_service_id: String => "communicationServiceId";
            platform, set_platform: ClientPlatform => "platform";
            product_family, set_product_family: ProductFamily => "productFamily";
        }
    }
}

backed_model! {
    /// User agent of a service endpoint.
    pub struct ServiceUserAgent {
        odata_type: "#microsoft.graph.callRecords.serviceUserAgent";
        properties {
            application_version, set_application_version: String => "applicationVersion";
            header_value, set_header_value: String => "headerValue";
            /// Service role, such as `conferencingAnnouncementService` or `skypeForBusinessCallQueues`.
            role, set_role: String => "role";
        }
    }
}

discriminated_union! {
    /// A user agent, selected by `@odata.type`.
    pub enum UserAgentKind {
        property: "@odata.type";
        base: Base(UserAgent);
        variants {
            "#microsoft.graph.callRecords.clientUserAgent" => Client(ClientUserAgent),
            "#microsoft.graph.callRecords.serviceUserAgent" => Service(ServiceUserAgent),
        }
    }
}

impl UserAgentKind {
    pub fn header_value(&self) -> Result<Option<String>, StoreError> {
        self.backing_store().get("headerValue")
    }
}

discriminated_union! {
    /// A call endpoint, selected by `@odata.type`.
    pub enum EndpointKind {
        property: "@odata.type";
        base: Base(Endpoint);
        variants {
            "#microsoft.graph.callRecords.participantEndpoint" => Participant(ParticipantEndpoint),
            "#microsoft.graph.callRecords.serviceEndpoint" => Service(ServiceEndpoint),
        }
    }
}

impl EndpointKind {
    /// Returns the user agent of any endpoint kind.
    pub fn user_agent(&self) -> Result<Option<UserAgentKind>, StoreError> {
        self.backing_store().get("userAgent")
    }
}
