use switchboard::{backed_model, RequestAdapter, RequestConfiguration, RequestInformation, RestMethod};

use super::{CallRecordsRequestBuilder, CallsRequestBuilder, OnlineMeetingsRequestBuilder, PresencesRequestBuilder};
use crate::models::{CloudCommunications, CollectionResponse, Presence};

request_builder! {
    /// Builds requests against the `/communications` singleton.
    CommunicationsRequestBuilder => "{+baseurl}/communications{?%24expand,%24select}"
}

impl<A: RequestAdapter> CommunicationsRequestBuilder<A> {
    pub fn calls(&self) -> CallsRequestBuilder<A> {
        self.child(CallsRequestBuilder::new)
    }

    pub fn call_records(&self) -> CallRecordsRequestBuilder<A> {
        self.child(CallRecordsRequestBuilder::new)
    }

    pub fn online_meetings(&self) -> OnlineMeetingsRequestBuilder<A> {
        self.child(OnlineMeetingsRequestBuilder::new)
    }

    pub fn presences(&self) -> PresencesRequestBuilder<A> {
        self.child(PresencesRequestBuilder::new)
    }

    pub fn get_presences_by_user_id(&self) -> GetPresencesByUserIdRequestBuilder<A> {
        self.child(GetPresencesByUserIdRequestBuilder::new)
    }

    /// Reads the singleton.
    pub async fn get(
        &self,
        config: Option<&RequestConfiguration<super::ItemQueryParameters>>,
    ) -> Result<Option<CloudCommunications>, switchboard::ApiError> {
        let info = self.to_get_request_information(config);
        self.base.adapter().send(info, super::graph_errors()).await
    }

    pub fn to_get_request_information(
        &self,
        config: Option<&RequestConfiguration<super::ItemQueryParameters>>,
    ) -> RequestInformation {
        self.base.request_information(RestMethod::Get, config)
    }

    /// Updates the singleton, sending only changed properties.
    pub async fn patch(
        &self,
        mut body: CloudCommunications,
        config: Option<&RequestConfiguration<()>>,
    ) -> Result<Option<CloudCommunications>, switchboard::ApiError> {
        switchboard::BackedModel::send_only_changes(&mut body);
        let mut info = self.base.request_information(RestMethod::Patch, config);
        info.set_content_from_parsable(&body)?;
        self.base.adapter().send(info, super::graph_errors()).await
    }
}

backed_model! {
    /// Body of `getPresencesByUserId`.
    pub struct GetPresencesByUserIdPostRequestBody {
        properties {
            /// Object ids of the users, at most 650.
            ids, set_ids: Vec<String> => "ids";
        }
    }
}

request_builder! {
    /// Reads the presence of many users in one request.
    GetPresencesByUserIdRequestBuilder => "{+baseurl}/communications/getPresencesByUserId"
}

impl<A: RequestAdapter> GetPresencesByUserIdRequestBuilder<A> {
    pub async fn post(
        &self,
        body: &GetPresencesByUserIdPostRequestBody,
        config: Option<&RequestConfiguration<()>>,
    ) -> Result<Option<CollectionResponse<Presence>>, switchboard::ApiError> {
        let info = self.to_post_request_information(body, config)?;
        self.base.adapter().send(info, super::graph_errors()).await
    }

    pub fn to_post_request_information(
        &self,
        body: &GetPresencesByUserIdPostRequestBody,
        config: Option<&RequestConfiguration<()>>,
    ) -> Result<RequestInformation, switchboard::ApiError> {
        let mut info = self.base.request_information(RestMethod::Post, config);
        info.set_content_from_parsable(body)?;
        Ok(info)
    }
}
