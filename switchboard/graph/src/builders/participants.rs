use switchboard::{backed_model, RequestAdapter};

use super::ClientContextPostRequestBody;
use crate::models::{InvitationParticipantInfo, InviteParticipantsOperation, MuteParticipantOperation, Participant};

request_builder! {
    /// Builds requests against `/communications/calls/{id}/participants`.
    ParticipantsRequestBuilder => "{+baseurl}/communications/calls/{call%2Did}/participants{?%24count,%24expand,%24filter,%24orderby,%24search,%24select,%24skip,%24top}"
}

collection_operations!(ParticipantsRequestBuilder, Participant);

impl<A: RequestAdapter> ParticipantsRequestBuilder<A> {
    pub fn by_participant_id(&self, participant_id: &str) -> ParticipantItemRequestBuilder<A> {
        self.child_by("participant%2Did", participant_id, ParticipantItemRequestBuilder::new)
    }

    pub fn count(&self) -> ParticipantsCountRequestBuilder<A> {
        self.child(ParticipantsCountRequestBuilder::new)
    }

    /// Invites participants to the active call.
    pub fn invite(&self) -> InviteRequestBuilder<A> {
        self.child(InviteRequestBuilder::new)
    }
}

count_builder! {
    ParticipantsCountRequestBuilder => "{+baseurl}/communications/calls/{call%2Did}/participants/$count{?%24filter,%24search}"
}

backed_model! {
    pub struct InvitePostRequestBody {
        properties {
            client_context, set_client_context: String => "clientContext";
            participants, set_participants: Vec<InvitationParticipantInfo> => "participants";
        }
    }
}

action_builder! {
    /// `POST /communications/calls/{id}/participants/invite`
    InviteRequestBuilder => "{+baseurl}/communications/calls/{call%2Did}/participants/invite",
    body: InvitePostRequestBody,
    returns: InviteParticipantsOperation
}

request_builder! {
    /// Builds requests against one participant of a call.
    ParticipantItemRequestBuilder => "{+baseurl}/communications/calls/{call%2Did}/participants/{participant%2Did}{?%24expand,%24select}"
}

item_operations!(ParticipantItemRequestBuilder, Participant);

impl<A: RequestAdapter> ParticipantItemRequestBuilder<A> {
    /// Mutes another participant.
    pub fn mute(&self) -> ParticipantMuteRequestBuilder<A> {
        self.child(ParticipantMuteRequestBuilder::new)
    }
}

action_builder! {
    /// `POST /communications/calls/{id}/participants/{id}/mute`
    ParticipantMuteRequestBuilder => "{+baseurl}/communications/calls/{call%2Did}/participants/{participant%2Did}/mute",
    body: ClientContextPostRequestBody,
    returns: MuteParticipantOperation
}
