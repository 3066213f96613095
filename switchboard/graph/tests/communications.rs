use std::sync::Arc;

use serde_json::json;
use switchboard::{ApiAuthMethod, ApiError, BackedModel, HttpRequestAdapter, RequestConfiguration, ValidationError};
use switchboard_graph::builders::{
    AnswerPostRequestBody, ClientContextPostRequestBody, GetPresencesByUserIdPostRequestBody, PlayPromptPostRequestBody,
    RejectPostRequestBody, SetPresencePostRequestBody,
};
use switchboard_graph::models::{
    Call, CallOptionsKind, CallState, CommsOperationKind, IncomingCallOptions, OutgoingCallOptions, MediaPrompt, ODataError, OperationStatus, PromptKind, RejectReason,
};
use switchboard_graph::{CollectionQueryParameters, GraphServiceClient, PageIterator};
use wiremock::matchers::{body_json, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client(server: &MockServer) -> GraphServiceClient<HttpRequestAdapter> {
    let adapter = HttpRequestAdapter::builder(format!("{}/v1.0", server.uri()))
        .auth(ApiAuthMethod::BearerToken, "token-123")
        .build()
        .unwrap();
    GraphServiceClient::new(Arc::new(adapter))
}

#[tokio::test]
async fn test_get_call_by_id() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1.0/communications/calls/57dab8b1"))
        .and(header("authorization", "Bearer token-123"))
        .and(header("accept", "application/json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "@odata.type": "#microsoft.graph.call",
            "id": "57dab8b1",
            "state": "established",
            "direction": "outgoing",
            "requestedModalities": ["audio"],
            "mediaConfig": {
                "@odata.type": "#microsoft.graph.serviceHostedMediaConfig",
                "preFetchMedia": []
            }
        })))
        .expect(1)
        .mount(&server)
        .await;

    let call = client(&server)
        .communications()
        .calls()
        .by_call_id("57dab8b1")
        .get(None)
        .await
        .unwrap()
        .unwrap();

    assert_eq!(call.state().unwrap(), Some(CallState::Established));
    assert!(matches!(
        call.media_config().unwrap(),
        Some(switchboard_graph::models::MediaConfigKind::ServiceHosted(_))
    ));
}

#[tokio::test]
async fn test_error_response_maps_to_odata_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1.0/communications/calls/missing"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({
            "error": {
                "code": "8506",
                "message": "Call not found",
                "innerError": {"request-id": "r-1"}
            }
        })))
        .mount(&server)
        .await;

    let err = client(&server)
        .communications()
        .calls()
        .by_call_id("missing")
        .get(None)
        .await
        .unwrap_err();

    assert_eq!(err.status_code(), Some(404));
    let odata = err.mapped::<ODataError>().expect("odata error");
    assert_eq!(odata.code(), "8506");
    assert_eq!(odata.request_id(), Some("r-1"));
}

#[tokio::test]
async fn test_server_error_also_maps_to_odata_error() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path("/v1.0/communications/presences/p1"))
        .respond_with(ResponseTemplate::new(503).set_body_json(json!({
            "error": {"code": "serviceUnavailable", "message": "try later"}
        })))
        .mount(&server)
        .await;

    let err = client(&server)
        .communications()
        .presences()
        .by_presence_id("p1")
        .delete(None)
        .await
        .unwrap_err();
    assert!(err.mapped::<ODataError>().is_some());
}

#[tokio::test]
async fn test_list_calls_with_query_parameters() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1.0/communications/calls"))
        .and(query_param("$top", "2"))
        .and(query_param("$filter", "state eq 'established'"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "value": [{"id": "c1"}, {"id": "c2"}]
        })))
        .mount(&server)
        .await;

    let config = RequestConfiguration::new().with_query(CollectionQueryParameters {
        top: Some(2),
        filter: Some("state eq 'established'".to_string()),
        ..Default::default()
    });
    let page = client(&server)
        .communications()
        .calls()
        .get(Some(&config))
        .await
        .unwrap()
        .unwrap();

    assert_eq!(page.value.len(), 2);
    assert!(!page.has_next());
}

#[tokio::test]
async fn test_count_is_plain_text() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1.0/communications/calls/$count"))
        .respond_with(ResponseTemplate::new(200).set_body_string("7"))
        .mount(&server)
        .await;

    let count = client(&server)
        .communications()
        .calls()
        .count()
        .get(None)
        .await
        .unwrap();
    assert_eq!(count, Some(7));
}

#[tokio::test]
async fn test_reject_answers_no_content() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1.0/communications/calls/c1/reject"))
        .and(body_json(json!({"reason": "busy"})))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    let mut body = RejectPostRequestBody::new();
    body.set_reason(Some(RejectReason::Busy)).unwrap();
    client(&server)
        .communications()
        .calls()
        .by_call_id("c1")
        .reject()
        .post(&body, None)
        .await
        .unwrap();
}

#[tokio::test]
async fn test_play_prompt_returns_operation() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1.0/communications/calls/c1/playPrompt"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "@odata.type": "#microsoft.graph.playPromptOperation",
            "id": "op1",
            "status": "running",
            "clientContext": "ctx-1"
        })))
        .mount(&server)
        .await;

    let mut body = PlayPromptPostRequestBody::new();
    body.set_client_context(Some("ctx-1".to_string())).unwrap();
    body.set_prompts(Some(vec![PromptKind::from(
        MediaPrompt::from_uri("https://cdn.example.com/beep.wav", None).unwrap(),
    )]))
    .unwrap();

    let op = client(&server)
        .communications()
        .calls()
        .by_call_id("c1")
        .play_prompt()
        .post(&body, None)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(op.status().unwrap(), Some(OperationStatus::Running));
    assert_eq!(op.client_context().unwrap().as_deref(), Some("ctx-1"));
}

#[tokio::test]
async fn test_participant_mute() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1.0/communications/calls/c1/participants/p9/mute"))
        .and(body_json(json!({"clientContext": "m"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "@odata.type": "#microsoft.graph.muteParticipantOperation",
            "id": "op2",
            "status": "completed"
        })))
        .mount(&server)
        .await;

    let body = ClientContextPostRequestBody::with_client_context("m").unwrap();
    let op = client(&server)
        .communications()
        .calls()
        .by_call_id("c1")
        .participants()
        .by_participant_id("p9")
        .mute()
        .post(&body, None)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(op.status().unwrap(), Some(OperationStatus::Completed));
}

#[tokio::test]
async fn test_operations_decode_polymorphically() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1.0/communications/calls/c1/operations"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "value": [
                {"@odata.type": "#microsoft.graph.recordOperation", "id": "a", "recordingLocation": "https://x/r"},
                {"@odata.type": "#microsoft.graph.subscribeToToneOperation", "id": "b"},
                {"@odata.type": "#microsoft.graph.futureOperation", "id": "c"}
            ]
        })))
        .mount(&server)
        .await;

    let page = client(&server)
        .communications()
        .calls()
        .by_call_id("c1")
        .operations()
        .get(None)
        .await
        .unwrap()
        .unwrap();

    assert!(matches!(page.value[0], CommsOperationKind::Record(_)));
    assert!(matches!(page.value[1], CommsOperationKind::SubscribeToTone(_)));
    assert!(matches!(page.value[2], CommsOperationKind::Base(_)));
    assert_eq!(page.value[2].id().unwrap().as_deref(), Some("c"));
}

#[tokio::test]
async fn test_patch_sends_only_changed_properties() {
    let server = MockServer::start().await;
    Mock::given(method("PATCH"))
        .and(path("/v1.0/communications/presences/p1"))
        .and(body_json(json!({"availability": "Away"})))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    let mut presence: switchboard_graph::models::Presence = serde_json::from_value(json!({
        "id": "p1",
        "availability": "Available",
        "activity": "Available"
    }))
    .unwrap();
    presence.set_availability(Some("Away".to_string())).unwrap();

    let updated = client(&server)
        .communications()
        .presences()
        .by_presence_id("p1")
        .patch(presence, None)
        .await
        .unwrap();
    assert!(updated.is_none());
}

#[tokio::test]
async fn test_presence_actions_and_bulk_lookup() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1.0/communications/presences/u1/setPresence"))
        .and(body_json(json!({
            "sessionId": "app-1",
            "availability": "Busy",
            "activity": "InACall",
            "expirationDuration": "PT1H"
        })))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/v1.0/communications/presences/u1/clearUserPreferredPresence"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/v1.0/communications/getPresencesByUserId"))
        .and(body_json(json!({"ids": ["u1", "u2"]})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "value": [
                {"id": "u1", "availability": "Busy"},
                {"id": "u2", "availability": "Offline"}
            ]
        })))
        .mount(&server)
        .await;

    let graph = client(&server);
    let presence = graph.communications().presences().by_presence_id("u1");

    let mut body = SetPresencePostRequestBody::new();
    body.set_session_id(Some("app-1".to_string())).unwrap();
    body.set_availability(Some("Busy".to_string())).unwrap();
    body.set_activity(Some("InACall".to_string())).unwrap();
    body.set_expiration_duration(Some("PT1H".to_string())).unwrap();
    presence.set_presence().post(&body, None).await.unwrap();
    presence.clear_user_preferred_presence().post(None).await.unwrap();

    let mut lookup = GetPresencesByUserIdPostRequestBody::new();
    lookup.set_ids(Some(vec!["u1".to_string(), "u2".to_string()])).unwrap();
    let page = graph
        .communications()
        .get_presences_by_user_id()
        .post(&lookup, None)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(page.value[1].availability().unwrap().as_deref(), Some("Offline"));
}

#[tokio::test]
async fn test_page_iterator_follows_next_link() {
    let server = MockServer::start().await;
    let next = format!("{}/v1.0/communications/callRecords?$skiptoken=page2", server.uri());
    Mock::given(method("GET"))
        .and(path("/v1.0/communications/callRecords"))
        .and(query_param("$skiptoken", "page2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "value": [{"id": "r3"}]
        })))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/v1.0/communications/callRecords"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "value": [{"id": "r1"}, {"id": "r2"}],
            "@odata.nextLink": next
        })))
        .mount(&server)
        .await;

    let graph = client(&server);
    let first = graph
        .communications()
        .call_records()
        .get(None)
        .await
        .unwrap()
        .unwrap();
    let mut pages = PageIterator::new(Arc::clone(graph.adapter()), first);

    let mut ids = Vec::new();
    while let Some(record) = pages.next().await.unwrap() {
        ids.push(record.id().unwrap().unwrap());
    }
    assert_eq!(ids, vec!["r1", "r2", "r3"]);
    assert_eq!(pages.pages(), 2);
}

#[tokio::test]
async fn test_page_iterator_stops_on_self_link() {
    let server = MockServer::start().await;
    let next = format!("{}/v1.0/communications/callRecords?$skiptoken=loop", server.uri());
    Mock::given(method("GET"))
        .and(path("/v1.0/communications/callRecords"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "value": [{"id": "r1"}],
            "@odata.nextLink": next
        })))
        .expect(2)
        .mount(&server)
        .await;

    let graph = client(&server);
    let first = graph
        .communications()
        .call_records()
        .get(None)
        .await
        .unwrap()
        .unwrap();
    let mut pages = PageIterator::new(Arc::clone(graph.adapter()), first);

    assert!(pages.next().await.unwrap().is_some());
    let err = pages.next().await.unwrap_err();
    assert!(matches!(
        err,
        ApiError::Validation(ValidationError::RepeatedPageLink { ref link }) if link.ends_with("$skiptoken=loop")
    ));
    assert!(pages.next().await.unwrap().is_none());
}

#[tokio::test]
async fn test_post_call_serializes_writable_properties() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1.0/communications/calls"))
        .and(body_json(json!({
            "@odata.type": "#microsoft.graph.call",
            "callbackUri": "https://bot.example.com/callback",
            "requestedModalities": ["audio"],
            "tenantId": "t1"
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "id": "new-call",
            "state": "establishing"
        })))
        .mount(&server)
        .await;

    let mut call = Call::new();
    call.set_callback_uri(Some("https://bot.example.com/callback".to_string())).unwrap();
    call.set_requested_modalities(Some(vec![switchboard_graph::models::Modality::Audio])).unwrap();
    call.set_tenant_id(Some("t1".to_string())).unwrap();
    call.set_state(Some(CallState::Incoming)).unwrap();

    let created = client(&server)
        .communications()
        .calls()
        .post(&call, None)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(created.id().unwrap().as_deref(), Some("new-call"));
    assert_eq!(created.odata_type().unwrap(), None);
}

#[tokio::test]
async fn test_create_call_with_outgoing_options() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1.0/communications/calls"))
        .and(body_json(json!({
            "@odata.type": "#microsoft.graph.call",
            "callbackUri": "https://bot.example.com/callback",
            "callOptions": {
                "@odata.type": "#microsoft.graph.outgoingCallOptions",
                "isContentSharingNotificationEnabled": true
            }
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "@odata.type": "#microsoft.graph.call",
            "id": "new-call",
            "state": "establishing",
            "callOptions": {
                "@odata.type": "#microsoft.graph.outgoingCallOptions",
                "isContentSharingNotificationEnabled": true,
                "isDeltaRosterEnabled": false
            }
        })))
        .mount(&server)
        .await;

    let mut options = OutgoingCallOptions::new();
    options.set_is_content_sharing_notification_enabled(Some(true)).unwrap();
    let mut call = Call::new();
    call.set_callback_uri(Some("https://bot.example.com/callback".to_string())).unwrap();
    call.set_call_options(Some(options.into())).unwrap();

    let created = client(&server)
        .communications()
        .calls()
        .post(&call, None)
        .await
        .unwrap()
        .unwrap();
    let Some(CallOptionsKind::Outgoing(options)) = created.call_options().unwrap() else {
        panic!("expected outgoing call options");
    };
    assert_eq!(options.is_content_sharing_notification_enabled().unwrap(), Some(true));
    assert_eq!(options.is_delta_roster_enabled().unwrap(), Some(false));
}

#[tokio::test]
async fn test_answer_sends_incoming_options() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1.0/communications/calls/c1/answer"))
        .and(body_json(json!({
            "callbackUri": "https://bot.example.com/callback",
            "acceptedModalities": ["audio"],
            "callOptions": {
                "@odata.type": "#microsoft.graph.incomingCallOptions",
                "isDeltaRosterEnabled": true
            }
        })))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    let mut options = IncomingCallOptions::new();
    options.set_is_delta_roster_enabled(Some(true)).unwrap();
    let mut body = AnswerPostRequestBody::new();
    body.set_callback_uri(Some("https://bot.example.com/callback".to_string())).unwrap();
    body.set_accepted_modalities(Some(vec![switchboard_graph::models::Modality::Audio])).unwrap();
    body.set_call_options(Some(options)).unwrap();

    client(&server)
        .communications()
        .calls()
        .by_call_id("c1")
        .answer()
        .post(&body, None)
        .await
        .unwrap();
}
