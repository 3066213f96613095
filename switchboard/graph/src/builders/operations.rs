use switchboard::RequestAdapter;

use crate::models::CommsOperationKind;

request_builder! {
    /// Builds requests against `/communications/calls/{id}/operations`.
    ///
    /// Items decode to the concrete operation named by `@odata.type`.
    OperationsRequestBuilder => "{+baseurl}/communications/calls/{call%2Did}/operations{?%24count,%24expand,%24filter,%24orderby,%24search,%24select,%24skip,%24top}"
}

collection_operations!(OperationsRequestBuilder, CommsOperationKind);

impl<A: RequestAdapter> OperationsRequestBuilder<A> {
    pub fn by_comms_operation_id(&self, operation_id: &str) -> OperationItemRequestBuilder<A> {
        self.child_by("commsOperation%2Did", operation_id, OperationItemRequestBuilder::new)
    }
}

request_builder! {
    OperationItemRequestBuilder => "{+baseurl}/communications/calls/{call%2Did}/operations/{commsOperation%2Did}{?%24expand,%24select}"
}

item_operations!(OperationItemRequestBuilder, CommsOperationKind);
