use std::collections::BTreeMap;
use std::sync::Arc;

use chrono::{DateTime, SecondsFormat, Utc};
use switchboard::{RequestAdapter, RequestConfiguration, RequestInformation, RestMethod, TemplateValue};

use super::LogFunctionQueryParameters;
use crate::models::call_records::{CallRecord, DirectRoutingLogRow, PstnCallLogRow, Segment, Session};
use crate::models::CollectionResponse;

request_builder! {
    /// Builds requests against `/communications/callRecords`.
    CallRecordsRequestBuilder => "{+baseurl}/communications/callRecords{?%24count,%24expand,%24filter,%24orderby,%24search,%24select,%24skip,%24top}"
}

collection_operations!(CallRecordsRequestBuilder, CallRecord);

impl<A: RequestAdapter> CallRecordsRequestBuilder<A> {
    pub fn by_call_record_id(&self, call_record_id: &str) -> CallRecordItemRequestBuilder<A> {
        self.child_by("callRecord%2Did", call_record_id, CallRecordItemRequestBuilder::new)
    }

    /// Direct Routing calls between `from` and `to`.
    pub fn get_direct_routing_calls(
        &self,
        from: DateTime<Utc>,
        to: DateTime<Utc>,
    ) -> GetDirectRoutingCallsRequestBuilder<A> {
        GetDirectRoutingCallsRequestBuilder::new(Arc::clone(self.base.adapter()), self.window(from, to))
    }

    /// PSTN calls between `from` and `to`.
    pub fn get_pstn_calls(&self, from: DateTime<Utc>, to: DateTime<Utc>) -> GetPstnCallsRequestBuilder<A> {
        GetPstnCallsRequestBuilder::new(Arc::clone(self.base.adapter()), self.window(from, to))
    }

    fn window(&self, from: DateTime<Utc>, to: DateTime<Utc>) -> BTreeMap<String, TemplateValue> {
        let mut parameters = self.path_parameters().clone();
        parameters.insert(
            "fromDateTime".to_string(),
            from.to_rfc3339_opts(SecondsFormat::Secs, true).into(),
        );
        parameters.insert(
            "toDateTime".to_string(),
            to.to_rfc3339_opts(SecondsFormat::Secs, true).into(),
        );
        parameters
    }
}

macro_rules! log_function {
    ($(#[$meta:meta])* $name:ident => $template:literal, $row:ty) => {
        request_builder! {
            $(#[$meta])*
            $name => $template
        }

        impl<A: RequestAdapter> $name<A> {
            pub async fn get(
                &self,
                config: Option<&RequestConfiguration<LogFunctionQueryParameters>>,
            ) -> Result<Option<CollectionResponse<$row>>, switchboard::ApiError> {
                let info = self.to_get_request_information(config);
                self.base.adapter().send(info, super::graph_errors()).await
            }

            pub fn to_get_request_information(
                &self,
                config: Option<&RequestConfiguration<LogFunctionQueryParameters>>,
            ) -> RequestInformation {
                self.base.request_information(RestMethod::Get, config)
            }
        }
    };
}

log_function! {
    /// `GET /communications/callRecords/getDirectRoutingCalls(...)`
    GetDirectRoutingCallsRequestBuilder => "{+baseurl}/communications/callRecords/microsoft.graph.callRecords.getDirectRoutingCalls(fromDateTime={fromDateTime},toDateTime={toDateTime}){?%24count,%24filter,%24search,%24skip,%24top}",
    DirectRoutingLogRow
}

log_function! {
    /// `GET /communications/callRecords/getPstnCalls(...)`
    GetPstnCallsRequestBuilder => "{+baseurl}/communications/callRecords/microsoft.graph.callRecords.getPstnCalls(fromDateTime={fromDateTime},toDateTime={toDateTime}){?%24count,%24filter,%24search,%24skip,%24top}",
    PstnCallLogRow
}

request_builder! {
    CallRecordItemRequestBuilder => "{+baseurl}/communications/callRecords/{callRecord%2Did}{?%24expand,%24select}"
}

item_operations!(CallRecordItemRequestBuilder, CallRecord);

impl<A: RequestAdapter> CallRecordItemRequestBuilder<A> {
    pub fn sessions(&self) -> SessionsRequestBuilder<A> {
        self.child(SessionsRequestBuilder::new)
    }
}

request_builder! {
    SessionsRequestBuilder => "{+baseurl}/communications/callRecords/{callRecord%2Did}/sessions{?%24count,%24expand,%24filter,%24orderby,%24search,%24select,%24skip,%24top}"
}

collection_operations!(SessionsRequestBuilder, Session);

impl<A: RequestAdapter> SessionsRequestBuilder<A> {
    pub fn by_session_id(&self, session_id: &str) -> SessionItemRequestBuilder<A> {
        self.child_by("session%2Did", session_id, SessionItemRequestBuilder::new)
    }
}

request_builder! {
    SessionItemRequestBuilder => "{+baseurl}/communications/callRecords/{callRecord%2Did}/sessions/{session%2Did}{?%24expand,%24select}"
}

item_operations!(SessionItemRequestBuilder, Session);

impl<A: RequestAdapter> SessionItemRequestBuilder<A> {
    pub fn segments(&self) -> SegmentsRequestBuilder<A> {
        self.child(SegmentsRequestBuilder::new)
    }
}

request_builder! {
    SegmentsRequestBuilder => "{+baseurl}/communications/callRecords/{callRecord%2Did}/sessions/{session%2Did}/segments{?%24count,%24expand,%24filter,%24orderby,%24search,%24select,%24skip,%24top}"
}

collection_operations!(SegmentsRequestBuilder, Segment);

impl<A: RequestAdapter> SegmentsRequestBuilder<A> {
    pub fn by_segment_id(&self, segment_id: &str) -> SegmentItemRequestBuilder<A> {
        self.child_by("segment%2Did", segment_id, SegmentItemRequestBuilder::new)
    }
}

request_builder! {
    SegmentItemRequestBuilder => "{+baseurl}/communications/callRecords/{callRecord%2Did}/sessions/{session%2Did}/segments/{segment%2Did}{?%24expand,%24select}"
}

item_operations!(SegmentItemRequestBuilder, Segment);
