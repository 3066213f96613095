//! Work requests track asynchronous operations such as compartment moves.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::enums::{WorkRequestResourceActionType, WorkRequestStatus};

/// A resource touched by a work request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkRequestResource {
    pub entity_type: String,
    pub action_type: WorkRequestResourceActionType,
    pub identifier: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub entity_uri: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkRequest {
    pub id: String,
    pub operation_type: String,
    pub status: WorkRequestStatus,
    pub compartment_id: String,
    #[serde(default)]
    pub resources: Vec<WorkRequestResource>,
    #[serde(default)]
    pub percent_complete: f32,
    pub time_accepted: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time_started: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time_finished: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkRequestSummary {
    pub id: String,
    pub operation_type: String,
    pub status: WorkRequestStatus,
    pub compartment_id: String,
    #[serde(default)]
    pub resources: Vec<WorkRequestResource>,
    #[serde(default)]
    pub percent_complete: f32,
    pub time_accepted: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time_started: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time_finished: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkRequestError {
    pub code: String,
    pub message: String,
    pub timestamp: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkRequestLogEntry {
    pub message: String,
    pub timestamp: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_work_request_decodes() {
        let wr: WorkRequest = serde_json::from_value(json!({
            "id": "ocid1.ormworkrequest",
            "operationType": "MOVE_STACK",
            "status": "IN_PROGRESS",
            "compartmentId": "ocid1.compartment",
            "percentComplete": 50.0,
            "timeAccepted": "2024-05-01T10:00:00Z",
            "resources": [{
                "entityType": "ormstack",
                "actionType": "IN_PROGRESS",
                "identifier": "ocid1.ormstack"
            }]
        }))
        .unwrap();
        assert_eq!(wr.status, WorkRequestStatus::InProgress);
        assert_eq!(wr.resources[0].action_type, WorkRequestResourceActionType::InProgress);
        assert!(wr.time_finished.is_none());
    }
}
