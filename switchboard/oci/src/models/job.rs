//! Jobs: Terraform plan, apply, destroy and state import runs.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::enums::{
    ExecutionPlanStrategy, FailureCode, JobLifecycleState, JobOperation, LogEntryLevel,
    LogEntryType,
};
use super::{DefinedTags, FreeformTags};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanJobOperationDetails {}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApplyJobOperationDetails {
    pub execution_plan_strategy: ExecutionPlanStrategy,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub execution_plan_job_id: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DestroyJobOperationDetails {
    pub execution_plan_strategy: ExecutionPlanStrategy,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImportTfStateJobOperationDetails {}

polymorphic! {
    /// Operation-specific settings of an existing job.
    pub enum JobOperationDetails {
        tag: "operation";
        "PLAN" => Plan(PlanJobOperationDetails),
        "APPLY" => Apply(ApplyJobOperationDetails),
        "DESTROY" => Destroy(DestroyJobOperationDetails),
        "IMPORT_TF_STATE" => ImportTfState(ImportTfStateJobOperationDetails),
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatePlanJobOperationDetails {}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateApplyJobOperationDetails {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub execution_plan_strategy: Option<ExecutionPlanStrategy>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub execution_plan_job_id: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateDestroyJobOperationDetails {
    pub execution_plan_strategy: ExecutionPlanStrategy,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateImportTfStateJobOperationDetails {
    pub tf_state_base64_encoded: String,
}

polymorphic! {
    /// Operation-specific settings for a new job.
    pub enum CreateJobOperationDetails {
        tag: "operation";
        "PLAN" => Plan(CreatePlanJobOperationDetails),
        "APPLY" => Apply(CreateApplyJobOperationDetails),
        "DESTROY" => Destroy(CreateDestroyJobOperationDetails),
        "IMPORT_TF_STATE" => ImportTfState(CreateImportTfStateJobOperationDetails),
    }
}

impl CreateJobOperationDetails {
    pub fn plan() -> Self {
        Self::Plan(CreatePlanJobOperationDetails {})
    }

    /// Applies the plan produced by `plan_job_id`.
    pub fn apply_from_plan(plan_job_id: impl Into<String>) -> Self {
        Self::Apply(CreateApplyJobOperationDetails {
            execution_plan_strategy: Some(ExecutionPlanStrategy::FromPlanJobId),
            execution_plan_job_id: Some(plan_job_id.into()),
        })
    }

    pub fn destroy_auto_approved() -> Self {
        Self::Destroy(CreateDestroyJobOperationDetails {
            execution_plan_strategy: ExecutionPlanStrategy::AutoApproved,
        })
    }
}

/// Legacy way of choosing the plan an apply job executes.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApplyJobPlanResolution {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub plan_job_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_use_latest_job_id: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_auto_approved: Option<bool>,
}

/// Why a job failed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FailureDetails {
    pub code: FailureCode,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Job {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stack_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub compartment_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub operation: Option<JobOperation>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub job_operation_details: Option<JobOperationDetails>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub apply_job_plan_resolution: Option<ApplyJobPlanResolution>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resolved_plan_job_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time_created: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time_finished: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lifecycle_state: Option<JobLifecycleState>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub failure_details: Option<FailureDetails>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub working_directory: Option<String>,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub variables: BTreeMap<String, String>,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub freeform_tags: FreeformTags,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub defined_tags: DefinedTags,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobSummary {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stack_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub compartment_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub operation: Option<JobOperation>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub job_operation_details: Option<JobOperationDetails>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub apply_job_plan_resolution: Option<ApplyJobPlanResolution>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resolved_plan_job_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time_created: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time_finished: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lifecycle_state: Option<JobLifecycleState>,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub freeform_tags: FreeformTags,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub defined_tags: DefinedTags,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateJobDetails {
    pub stack_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    /// Legacy operation selector; prefer `job_operation_details`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub operation: Option<JobOperation>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub job_operation_details: Option<CreateJobOperationDetails>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub apply_job_plan_resolution: Option<ApplyJobPlanResolution>,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub freeform_tags: FreeformTags,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub defined_tags: DefinedTags,
}

impl CreateJobDetails {
    pub fn new(stack_id: impl Into<String>, details: CreateJobOperationDetails) -> Self {
        Self {
            stack_id: stack_id.into(),
            display_name: None,
            operation: None,
            job_operation_details: Some(details),
            apply_job_plan_resolution: None,
            freeform_tags: FreeformTags::new(),
            defined_tags: DefinedTags::new(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateJobDetails {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub freeform_tags: Option<FreeformTags>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub defined_tags: Option<DefinedTags>,
}

/// One line of Terraform output.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LogEntry {
    #[serde(rename = "type")]
    pub entry_type: LogEntryType,
    pub level: LogEntryLevel,
    pub timestamp: DateTime<Utc>,
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_job_decodes_operation_details() {
        let job: Job = serde_json::from_value(json!({
            "id": "ocid1.ormjob.oc1..a",
            "stackId": "ocid1.ormstack.oc1..s",
            "operation": "APPLY",
            "jobOperationDetails": {
                "operation": "APPLY",
                "executionPlanStrategy": "FROM_PLAN_JOB_ID",
                "executionPlanJobId": "ocid1.ormjob.oc1..p"
            },
            "lifecycleState": "FAILED",
            "failureDetails": {"code": "TERRAFORM_EXECUTION_ERROR", "message": "boom"},
            "timeCreated": "2024-05-01T10:00:00.000Z",
            "variables": {"region": "us-ashburn-1"}
        }))
        .unwrap();

        let Some(JobOperationDetails::Apply(apply)) = &job.job_operation_details else {
            panic!("expected apply details, got {:?}", job.job_operation_details);
        };
        assert_eq!(apply.execution_plan_job_id.as_deref(), Some("ocid1.ormjob.oc1..p"));
        assert_eq!(
            job.failure_details.as_ref().map(|f| f.code),
            Some(FailureCode::TerraformExecutionError)
        );
        assert_eq!(job.variables["region"], "us-ashburn-1");
    }

    #[test]
    fn test_create_job_body() {
        let body = CreateJobDetails::new("ocid1.ormstack", CreateJobOperationDetails::apply_from_plan("p1"));
        assert_eq!(
            serde_json::to_value(&body).unwrap(),
            json!({
                "stackId": "ocid1.ormstack",
                "jobOperationDetails": {
                    "operation": "APPLY",
                    "executionPlanStrategy": "FROM_PLAN_JOB_ID",
                    "executionPlanJobId": "p1"
                }
            })
        );
    }

    #[test]
    fn test_plan_details_serialize_with_tag_only() {
        assert_eq!(
            serde_json::to_value(CreateJobOperationDetails::plan()).unwrap(),
            json!({"operation": "PLAN"})
        );
    }

    #[test]
    fn test_log_entry_type_field() {
        let entry: LogEntry = serde_json::from_value(json!({
            "type": "TERRAFORM_CONSOLE",
            "level": "INFO",
            "timestamp": "2024-05-01T10:00:01Z",
            "message": "Apply complete!"
        }))
        .unwrap();
        assert_eq!(entry.entry_type, LogEntryType::TerraformConsole);
        assert_eq!(entry.level, LogEntryLevel::Info);
    }
}
