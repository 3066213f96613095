use switchboard::{backed_model, RequestAdapter};

use crate::models::{Presence, PresenceStatusMessage};

request_builder! {
    /// Builds requests against `/communications/presences`.
    PresencesRequestBuilder => "{+baseurl}/communications/presences{?%24count,%24expand,%24filter,%24orderby,%24search,%24select,%24skip,%24top}"
}

collection_operations!(PresencesRequestBuilder, Presence);

impl<A: RequestAdapter> PresencesRequestBuilder<A> {
    /// Addresses the presence of one user, keyed by the user's object id.
    pub fn by_presence_id(&self, presence_id: &str) -> PresenceItemRequestBuilder<A> {
        self.child_by("presence%2Did", presence_id, PresenceItemRequestBuilder::new)
    }
}

request_builder! {
    PresenceItemRequestBuilder => "{+baseurl}/communications/presences/{presence%2Did}{?%24expand,%24select}"
}

item_operations!(PresenceItemRequestBuilder, Presence);

impl<A: RequestAdapter> PresenceItemRequestBuilder<A> {
    /// Sets the presence of an application session.
    pub fn set_presence(&self) -> SetPresenceRequestBuilder<A> {
        self.child(SetPresenceRequestBuilder::new)
    }

    pub fn clear_presence(&self) -> ClearPresenceRequestBuilder<A> {
        self.child(ClearPresenceRequestBuilder::new)
    }

    /// Sets the presence the user chose, overriding session presence.
    pub fn set_user_preferred_presence(&self) -> SetUserPreferredPresenceRequestBuilder<A> {
        self.child(SetUserPreferredPresenceRequestBuilder::new)
    }

    pub fn clear_user_preferred_presence(&self) -> ClearUserPreferredPresenceRequestBuilder<A> {
        self.child(ClearUserPreferredPresenceRequestBuilder::new)
    }

    pub fn set_status_message(&self) -> SetStatusMessageRequestBuilder<A> {
        self.child(SetStatusMessageRequestBuilder::new)
    }
}

backed_model! {
    pub struct SetPresencePostRequestBody {
        properties {
            activity, set_activity: String => "activity";
            availability, set_availability: String => "availability";
            /// ISO 8601 duration, 5 minutes to 4 hours; defaults to 5 minutes.
            expiration_duration, set_expiration_duration: String => "expirationDuration";
            /// Application id of the caller.
            session_id, set_session_id: String => "sessionId";
        }
    }
}

backed_model! {
    pub struct ClearPresencePostRequestBody {
        properties {
            session_id, set_session_id: String => "sessionId";
        }
    }
}

backed_model! {
    pub struct SetUserPreferredPresencePostRequestBody {
        properties {
            activity, set_activity: String => "activity";
            availability, set_availability: String => "availability";
            /// ISO 8601 duration; absent means until cleared.
            expiration_duration, set_expiration_duration: String => "expirationDuration";
        }
    }
}

backed_model! {
    pub struct SetStatusMessagePostRequestBody {
        properties {
            status_message, set_status_message: PresenceStatusMessage => "statusMessage";
        }
    }
}

action_builder! {
    /// `POST /communications/presences/{id}/setPresence`
    SetPresenceRequestBuilder => "{+baseurl}/communications/presences/{presence%2Did}/setPresence",
    body: SetPresencePostRequestBody
}

action_builder! {
    /// `POST /communications/presences/{id}/clearPresence`
    ClearPresenceRequestBuilder => "{+baseurl}/communications/presences/{presence%2Did}/clearPresence",
    body: ClearPresencePostRequestBody
}

action_builder! {
    /// `POST /communications/presences/{id}/setUserPreferredPresence`
    SetUserPreferredPresenceRequestBuilder => "{+baseurl}/communications/presences/{presence%2Did}/setUserPreferredPresence",
    body: SetUserPreferredPresencePostRequestBody
}

action_builder! {
    /// `POST /communications/presences/{id}/clearUserPreferredPresence`
    ClearUserPreferredPresenceRequestBuilder => "{+baseurl}/communications/presences/{presence%2Did}/clearUserPreferredPresence"
}

action_builder! {
    /// `POST /communications/presences/{id}/setStatusMessage`
    SetStatusMessageRequestBuilder => "{+baseurl}/communications/presences/{presence%2Did}/setStatusMessage",
    body: SetStatusMessagePostRequestBody
}
