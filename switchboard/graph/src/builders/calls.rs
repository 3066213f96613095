use switchboard::RequestAdapter;

use super::{
    AddLargeGalleryViewRequestBuilder, AnswerRequestBuilder, CancelMediaProcessingRequestBuilder,
    ChangeScreenSharingRoleRequestBuilder, KeepAliveRequestBuilder, MuteRequestBuilder, OperationsRequestBuilder,
    ParticipantsRequestBuilder, PlayPromptRequestBuilder, RecordResponseRequestBuilder, RedirectRequestBuilder,
    RejectRequestBuilder, SendDtmfTonesRequestBuilder, SubscribeToToneRequestBuilder, TransferRequestBuilder,
    UnmuteRequestBuilder, UpdateRecordingStatusRequestBuilder,
};
use crate::models::Call;

request_builder! {
    /// Builds requests against `/communications/calls`.
    CallsRequestBuilder => "{+baseurl}/communications/calls{?%24count,%24expand,%24filter,%24orderby,%24search,%24select,%24skip,%24top}"
}

collection_operations!(CallsRequestBuilder, Call);

impl<A: RequestAdapter> CallsRequestBuilder<A> {
    /// Addresses one call.
    pub fn by_call_id(&self, call_id: &str) -> CallItemRequestBuilder<A> {
        self.child_by("call%2Did", call_id, CallItemRequestBuilder::new)
    }

    pub fn count(&self) -> CallsCountRequestBuilder<A> {
        self.child(CallsCountRequestBuilder::new)
    }
}

count_builder! {
    /// Counts calls.
    CallsCountRequestBuilder => "{+baseurl}/communications/calls/$count{?%24filter,%24search}"
}

request_builder! {
    /// Builds requests against `/communications/calls/{id}`.
    CallItemRequestBuilder => "{+baseurl}/communications/calls/{call%2Did}{?%24expand,%24select}"
}

item_operations!(CallItemRequestBuilder, Call);

impl<A: RequestAdapter> CallItemRequestBuilder<A> {
    pub fn participants(&self) -> ParticipantsRequestBuilder<A> {
        self.child(ParticipantsRequestBuilder::new)
    }

    pub fn operations(&self) -> OperationsRequestBuilder<A> {
        self.child(OperationsRequestBuilder::new)
    }

    pub fn add_large_gallery_view(&self) -> AddLargeGalleryViewRequestBuilder<A> {
        self.child(AddLargeGalleryViewRequestBuilder::new)
    }

    /// Answers an incoming call.
    pub fn answer(&self) -> AnswerRequestBuilder<A> {
        self.child(AnswerRequestBuilder::new)
    }

    pub fn cancel_media_processing(&self) -> CancelMediaProcessingRequestBuilder<A> {
        self.child(CancelMediaProcessingRequestBuilder::new)
    }

    pub fn change_screen_sharing_role(&self) -> ChangeScreenSharingRoleRequestBuilder<A> {
        self.child(ChangeScreenSharingRoleRequestBuilder::new)
    }

    /// Keeps the call alive; calls without a request for 45 minutes end.
    pub fn keep_alive(&self) -> KeepAliveRequestBuilder<A> {
        self.child(KeepAliveRequestBuilder::new)
    }

    /// Mutes the application itself.
    pub fn mute(&self) -> MuteRequestBuilder<A> {
        self.child(MuteRequestBuilder::new)
    }

    pub fn play_prompt(&self) -> PlayPromptRequestBuilder<A> {
        self.child(PlayPromptRequestBuilder::new)
    }

    pub fn record_response(&self) -> RecordResponseRequestBuilder<A> {
        self.child(RecordResponseRequestBuilder::new)
    }

    pub fn redirect(&self) -> RedirectRequestBuilder<A> {
        self.child(RedirectRequestBuilder::new)
    }

    pub fn reject(&self) -> RejectRequestBuilder<A> {
        self.child(RejectRequestBuilder::new)
    }

    pub fn send_dtmf_tones(&self) -> SendDtmfTonesRequestBuilder<A> {
        self.child(SendDtmfTonesRequestBuilder::new)
    }

    pub fn subscribe_to_tone(&self) -> SubscribeToToneRequestBuilder<A> {
        self.child(SubscribeToToneRequestBuilder::new)
    }

    pub fn transfer(&self) -> TransferRequestBuilder<A> {
        self.child(TransferRequestBuilder::new)
    }

    pub fn unmute(&self) -> UnmuteRequestBuilder<A> {
        self.child(UnmuteRequestBuilder::new)
    }

    pub fn update_recording_status(&self) -> UpdateRecordingStatusRequestBuilder<A> {
        self.child(UpdateRecordingStatusRequestBuilder::new)
    }
}
