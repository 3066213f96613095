use std::time::Duration;

use serde_json::json;
use switchboard_oci::models::{
    ChangeStackCompartmentDetails, ConfigSource, CreateConfigSourceDetails,
    CreateJobDetails, CreateJobOperationDetails, CreateStackDetails, JobLifecycleState,
    JobOperationDetails, LogEntryLevel, StackLifecycleState, UpdateStackDetails,
};
use switchboard_oci::{
    BearerTokenSigner, ClientConfiguration, GetJobLogsRequest, ListJobsRequest,
    ListStacksRequest, ListWorkRequestsRequest, OciError, RequestOptions, ResourceManagerClient,
    RetryPolicy, WorkRequestPageRequest, RETRY_TOKEN_LENGTH,
};
use wiremock::matchers::{body_json, header, header_exists, method, path, query_param, query_param_is_missing};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client(server: &MockServer) -> ResourceManagerClient {
    let config = ClientConfiguration::default()
        .with_endpoint(server.uri())
        .with_signer(BearerTokenSigner::new("session-token"));
    ResourceManagerClient::new(config).unwrap()
}

fn fast_retries(attempts: u32) -> RetryPolicy {
    RetryPolicy::default_policy()
        .with_max_attempts(attempts)
        .with_delays(Duration::from_millis(1), Duration::from_millis(5))
}

fn stack_json(id: &str) -> serde_json::Value {
    json!({
        "id": id,
        "compartmentId": "ocid1.compartment.oc1..c",
        "displayName": "network",
        "lifecycleState": "ACTIVE",
        "timeCreated": "2024-05-01T10:00:00.000Z",
        "configSource": {"configSourceType": "ZIP_UPLOAD", "workingDirectory": "vcn"}
    })
}

#[tokio::test]
async fn test_get_stack() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/20180917/stacks/ocid1.ormstack.oc1..s"))
        .and(header("authorization", "Bearer session-token"))
        .and(header("opc-request-id", "req-42"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(stack_json("ocid1.ormstack.oc1..s"))
                .insert_header("etag", "\"e1\"")
                .insert_header("opc-request-id", "req-42/srv"),
        )
        .expect(1)
        .mount(&server)
        .await;

    let response = client(&server)
        .get_stack(
            "ocid1.ormstack.oc1..s",
            &RequestOptions::default().request_id("req-42"),
        )
        .await
        .unwrap();

    assert_eq!(response.body.lifecycle_state, Some(StackLifecycleState::Active));
    assert!(matches!(response.body.config_source, Some(ConfigSource::ZipUpload(_))));
    assert_eq!(response.headers.etag.as_deref(), Some("\"e1\""));
    assert_eq!(response.headers.opc_request_id.as_deref(), Some("req-42/srv"));
}

#[tokio::test]
async fn test_create_stack_generates_retry_token() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/20180917/stacks"))
        .and(header_exists("opc-retry-token"))
        .and(body_json(json!({
            "compartmentId": "ocid1.compartment.oc1..c",
            "configSource": {"configSourceType": "ZIP_UPLOAD", "zipFileBase64Encoded": "UEsDBA=="},
            "displayName": "network"
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(stack_json("ocid1.ormstack.oc1..new")))
        .expect(1)
        .mount(&server)
        .await;

    let mut details = CreateStackDetails::new(
        "ocid1.compartment.oc1..c",
        CreateConfigSourceDetails::zip_upload("UEsDBA=="),
    );
    details.display_name = Some("network".to_string());

    let stack = client(&server)
        .create_stack(&details, &RequestOptions::default())
        .await
        .unwrap()
        .into_body();
    assert_eq!(stack.id, "ocid1.ormstack.oc1..new");

    let requests = server.received_requests().await.unwrap();
    let token = requests[0].headers.get("opc-retry-token").unwrap().to_str().unwrap();
    assert_eq!(token.len(), RETRY_TOKEN_LENGTH);
}

#[tokio::test]
async fn test_service_error_is_typed() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/20180917/jobs/missing"))
        .respond_with(
            ResponseTemplate::new(404)
                .set_body_json(json!({
                    "code": "NotAuthorizedOrNotFound",
                    "message": "Authorization failed or requested resource not found."
                }))
                .insert_header("opc-request-id", "srv-1"),
        )
        .expect(1)
        .mount(&server)
        .await;

    let err = client(&server)
        .get_job("missing", &RequestOptions::default())
        .await
        .unwrap_err();

    let service = err.service_error().unwrap();
    assert_eq!(service.status, 404);
    assert_eq!(service.code, "NotAuthorizedOrNotFound");
    assert_eq!(service.operation, "get_job");
    assert_eq!(service.opc_request_id.as_deref(), Some("srv-1"));
}

#[tokio::test]
async fn test_no_retry_by_default() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/20180917/jobs/j1"))
        .respond_with(ResponseTemplate::new(503).set_body_string("unavailable"))
        .expect(1)
        .mount(&server)
        .await;

    let err = client(&server)
        .get_job("j1", &RequestOptions::default())
        .await
        .unwrap_err();
    assert_eq!(err.status_code(), Some(503));
}

#[tokio::test]
#[tracing_test::traced_test]
async fn test_retry_policy_recovers_from_server_errors() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/20180917/jobs"))
        .respond_with(ResponseTemplate::new(503).set_body_json(json!({
            "code": "ServiceUnavailable",
            "message": "try again"
        })))
        .up_to_n_times(2)
        .expect(2)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/20180917/jobs"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": "ocid1.ormjob.oc1..j",
            "lifecycleState": "ACCEPTED",
            "jobOperationDetails": {"operation": "PLAN"}
        })))
        .expect(1)
        .mount(&server)
        .await;

    let details = CreateJobDetails::new("ocid1.ormstack.oc1..s", CreateJobOperationDetails::plan());
    let job = client(&server)
        .create_job(&details, &RequestOptions::default().retry_policy(fast_retries(5)))
        .await
        .unwrap()
        .into_body();

    assert_eq!(job.lifecycle_state, Some(JobLifecycleState::Accepted));
    assert!(matches!(job.job_operation_details, Some(JobOperationDetails::Plan(_))));

    let requests = server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 3);
    let tokens: Vec<_> = requests
        .iter()
        .map(|r| r.headers.get("opc-retry-token").unwrap().to_str().unwrap().to_string())
        .collect();
    assert!(tokens.iter().all(|t| t == &tokens[0]));
    assert!(logs_contain("retrying request"));
}

#[tokio::test]
async fn test_retry_stops_at_max_attempts() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/20180917/stacks/s1"))
        .respond_with(ResponseTemplate::new(500))
        .expect(3)
        .mount(&server)
        .await;

    let mut client = client(&server);
    client.set_retry_policy(fast_retries(3));
    let err = client
        .get_stack("s1", &RequestOptions::default())
        .await
        .unwrap_err();
    assert!(matches!(err, OciError::Service(ref e) if e.status == 500));
}

#[tokio::test]
async fn test_conflict_is_not_retried_unless_incorrect_state() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path("/20180917/stacks/s1"))
        .and(header("if-match", "\"e1\""))
        .respond_with(ResponseTemplate::new(409).set_body_json(json!({
            "code": "Conflict",
            "message": "etag mismatch"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let options = RequestOptions::default()
        .if_match("\"e1\"")
        .retry_policy(fast_retries(4));
    let err = client(&server).delete_stack("s1", &options).await.unwrap_err();
    assert_eq!(err.service_error().map(|e| e.code.as_str()), Some("Conflict"));
}

#[tokio::test]
async fn test_list_all_stacks_follows_next_page() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/20180917/stacks"))
        .and(query_param("compartmentId", "ocid1.compartment.oc1..c"))
        .and(query_param_is_missing("page"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!([stack_json("s1"), stack_json("s2")]))
                .insert_header("opc-next-page", "p2"),
        )
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/20180917/stacks"))
        .and(query_param("page", "p2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([stack_json("s3")])))
        .expect(1)
        .mount(&server)
        .await;

    let stacks = client(&server)
        .list_all_stacks(
            &ListStacksRequest::in_compartment("ocid1.compartment.oc1..c"),
            &RequestOptions::default(),
        )
        .await
        .unwrap();
    let ids: Vec<_> = stacks.iter().map(|s| s.id.as_str()).collect();
    assert_eq!(ids, ["s1", "s2", "s3"]);
}

#[tokio::test]
async fn test_list_all_stacks_rejects_repeated_page_token() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/20180917/stacks"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!([stack_json("s1")]))
                .insert_header("opc-next-page", "same-token"),
        )
        .expect(2)
        .mount(&server)
        .await;

    let result = tokio::time::timeout(
        Duration::from_secs(5),
        client(&server).list_all_stacks(
            &ListStacksRequest::in_compartment("ocid1.compartment.oc1..c"),
            &RequestOptions::default(),
        ),
    )
    .await
    .expect("listing should stop on its own");

    let err = result.unwrap_err();
    assert!(matches!(
        err,
        OciError::RepeatedPage { operation: "list_stacks", ref token } if token == "same-token"
    ));
}

#[tokio::test]
async fn test_list_jobs_sends_filters() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/20180917/jobs"))
        .and(query_param("stackId", "s1"))
        .and(query_param("lifecycleState", "SUCCEEDED"))
        .and(query_param("sortOrder", "DESC"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"id": "j1", "stackId": "s1", "operation": "APPLY", "lifecycleState": "SUCCEEDED"}
        ])))
        .expect(1)
        .mount(&server)
        .await;

    let request = ListJobsRequest {
        lifecycle_state: Some(JobLifecycleState::Succeeded),
        sort_order: Some(switchboard_oci::models::SortOrder::Desc),
        ..ListJobsRequest::for_stack("s1")
    };
    let jobs = client(&server)
        .list_all_jobs(&request, &RequestOptions::default())
        .await
        .unwrap();
    assert_eq!(jobs.len(), 1);
}

#[tokio::test]
async fn test_job_logs_and_artifacts() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/20180917/jobs/j1/logs"))
        .and(query_param("levelGreaterThanOrEqualTo", "WARN"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([{
            "type": "TERRAFORM_CONSOLE",
            "level": "ERROR",
            "timestamp": "2024-05-01T10:00:01Z",
            "message": "Error: quota exceeded"
        }])))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/20180917/jobs/j1/logs/content"))
        .and(header("accept", "text/plain"))
        .respond_with(ResponseTemplate::new(200).set_body_string("Plan: 1 to add"))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/20180917/jobs/j1/tfConfig"))
        .respond_with(ResponseTemplate::new(200).set_body_bytes(vec![0x50, 0x4b, 0x03, 0x04]))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/20180917/jobs/j1/tfState"))
        .respond_with(ResponseTemplate::new(200).set_body_string("{\"version\":4}"))
        .mount(&server)
        .await;

    let client = client(&server);
    let options = RequestOptions::default();

    let request = GetJobLogsRequest {
        level_greater_than_or_equal_to: Some(LogEntryLevel::Warn),
        ..GetJobLogsRequest::new("j1")
    };
    let logs = client.get_job_logs(&request, &options).await.unwrap().body;
    assert_eq!(logs[0].level, LogEntryLevel::Error);

    let content = client.get_job_logs_content("j1", &options).await.unwrap().body;
    assert_eq!(content, "Plan: 1 to add");

    let config = client.get_job_tf_config("j1", &options).await.unwrap().body;
    assert_eq!(&config[..2], b"PK");

    let state = client.get_job_tf_state("j1", &options).await.unwrap().body;
    assert_eq!(&state[..], b"{\"version\":4}");
}

#[tokio::test]
async fn test_update_and_cancel() {
    let server = MockServer::start().await;
    Mock::given(method("PUT"))
        .and(path("/20180917/stacks/s1"))
        .and(header("if-match", "\"e1\""))
        .and(body_json(json!({"description": "core network"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(stack_json("s1")))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("DELETE"))
        .and(path("/20180917/jobs/j1"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    let client = client(&server);
    let details = UpdateStackDetails {
        description: Some("core network".to_string()),
        ..UpdateStackDetails::default()
    };
    client
        .update_stack("s1", &details, &RequestOptions::default().if_match("\"e1\""))
        .await
        .unwrap();
    client.cancel_job("j1", &RequestOptions::default()).await.unwrap();
}

#[tokio::test]
async fn test_change_compartment_returns_work_request() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/20180917/stacks/s1/actions/changeCompartment"))
        .and(header("opc-retry-token", "move-1"))
        .and(body_json(json!({"compartmentId": "ocid1.compartment.oc1..target"})))
        .respond_with(ResponseTemplate::new(202).insert_header("opc-work-request-id", "wr-1"))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/20180917/workRequests/wr-1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": "wr-1",
            "operationType": "MOVE_STACK",
            "status": "SUCCEEDED",
            "compartmentId": "ocid1.compartment.oc1..target",
            "percentComplete": 100.0,
            "timeAccepted": "2024-05-01T10:00:00Z"
        })))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/20180917/workRequests/wr-1/errors"))
        .and(query_param("limit", "10"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .expect(1)
        .mount(&server)
        .await;

    let client = client(&server);
    let details = ChangeStackCompartmentDetails {
        compartment_id: "ocid1.compartment.oc1..target".to_string(),
    };
    let moved = client
        .change_stack_compartment("s1", &details, &RequestOptions::default().retry_token("move-1"))
        .await
        .unwrap();
    let work_request_id = moved.headers.opc_work_request_id.unwrap();

    let work_request = client
        .get_work_request(&work_request_id, &RequestOptions::default())
        .await
        .unwrap()
        .body;
    assert_eq!(work_request.percent_complete, 100.0);

    let request = WorkRequestPageRequest {
        limit: Some(10),
        ..WorkRequestPageRequest::new(work_request_id)
    };
    let errors = client
        .list_work_request_errors(&request, &RequestOptions::default())
        .await
        .unwrap()
        .body;
    assert!(errors.is_empty());
}

#[tokio::test]
async fn test_list_all_work_requests_and_logs() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/20180917/workRequests"))
        .and(query_param("compartmentId", "c1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([{
            "id": "wr-1",
            "operationType": "MOVE_STACK",
            "status": "IN_PROGRESS",
            "compartmentId": "c1",
            "timeAccepted": "2024-05-01T10:00:00Z"
        }])))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/20180917/workRequests/wr-1/logs"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"message": "moving stack", "timestamp": "2024-05-01T10:00:01Z"}
        ])))
        .expect(1)
        .mount(&server)
        .await;

    let client = client(&server);
    let options = RequestOptions::default();
    let work_requests = client
        .list_all_work_requests(&ListWorkRequestsRequest::new("c1"), &options)
        .await
        .unwrap();
    assert_eq!(work_requests.len(), 1);

    let logs = client
        .list_work_request_logs(&WorkRequestPageRequest::new("wr-1"), &options)
        .await
        .unwrap()
        .body;
    assert_eq!(logs[0].message, "moving stack");
}

#[tokio::test]
async fn test_stack_tf_config_and_update_job() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/20180917/stacks/s1/tfConfig"))
        .and(header("accept", "application/zip"))
        .respond_with(ResponseTemplate::new(200).set_body_bytes(b"PK\x03\x04".to_vec()))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("PUT"))
        .and(path("/20180917/jobs/j1"))
        .and(body_json(json!({"displayName": "nightly plan"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": "j1",
            "displayName": "nightly plan"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = client(&server);
    let options = RequestOptions::default();
    let zip = client.get_stack_tf_config("s1", &options).await.unwrap().body;
    assert_eq!(zip.len(), 4);

    let details = switchboard_oci::models::UpdateJobDetails {
        display_name: Some("nightly plan".to_string()),
        ..Default::default()
    };
    let job = client.update_job("j1", &details, &options).await.unwrap().body;
    assert_eq!(job.display_name.as_deref(), Some("nightly plan"));
}

#[tokio::test]
async fn test_malformed_body_is_decode_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/20180917/stacks/s1"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .mount(&server)
        .await;

    let err = client(&server)
        .get_stack("s1", &RequestOptions::default())
        .await
        .unwrap_err();
    assert!(matches!(err, OciError::Decode { operation: "get_stack", .. }));
}
