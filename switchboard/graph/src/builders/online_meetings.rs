use switchboard::RequestAdapter;

use crate::models::OnlineMeetingKind;

request_builder! {
    /// Builds requests against `/communications/onlineMeetings`.
    OnlineMeetingsRequestBuilder => "{+baseurl}/communications/onlineMeetings{?%24count,%24expand,%24filter,%24orderby,%24search,%24select,%24skip,%24top}"
}

collection_operations!(OnlineMeetingsRequestBuilder, OnlineMeetingKind);

impl<A: RequestAdapter> OnlineMeetingsRequestBuilder<A> {
    pub fn by_online_meeting_id(&self, online_meeting_id: &str) -> OnlineMeetingItemRequestBuilder<A> {
        self.child_by("onlineMeeting%2Did", online_meeting_id, OnlineMeetingItemRequestBuilder::new)
    }
}

request_builder! {
    OnlineMeetingItemRequestBuilder => "{+baseurl}/communications/onlineMeetings/{onlineMeeting%2Did}{?%24expand,%24select}"
}

item_operations!(OnlineMeetingItemRequestBuilder, OnlineMeetingKind);
