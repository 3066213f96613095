//! Stacks: Terraform configurations and their variables.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::config_source::{ConfigSource, CreateConfigSourceDetails, UpdateConfigSourceDetails};
use super::enums::StackLifecycleState;
use super::{DefinedTags, FreeformTags};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Stack {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub compartment_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time_created: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lifecycle_state: Option<StackLifecycleState>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub config_source: Option<ConfigSource>,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub variables: BTreeMap<String, String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub terraform_version: Option<String>,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub freeform_tags: FreeformTags,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub defined_tags: DefinedTags,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StackSummary {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub compartment_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time_created: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lifecycle_state: Option<StackLifecycleState>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub terraform_version: Option<String>,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub freeform_tags: FreeformTags,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub defined_tags: DefinedTags,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateStackDetails {
    pub compartment_id: String,
    pub config_source: CreateConfigSourceDetails,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub variables: BTreeMap<String, String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub terraform_version: Option<String>,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub freeform_tags: FreeformTags,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub defined_tags: DefinedTags,
}

impl CreateStackDetails {
    pub fn new(compartment_id: impl Into<String>, config_source: CreateConfigSourceDetails) -> Self {
        Self {
            compartment_id: compartment_id.into(),
            config_source,
            display_name: None,
            description: None,
            variables: BTreeMap::new(),
            terraform_version: None,
            freeform_tags: FreeformTags::new(),
            defined_tags: DefinedTags::new(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateStackDetails {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub config_source: Option<UpdateConfigSourceDetails>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub variables: Option<BTreeMap<String, String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub terraform_version: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub freeform_tags: Option<FreeformTags>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub defined_tags: Option<DefinedTags>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChangeStackCompartmentDetails {
    pub compartment_id: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_stack_decodes_config_source() {
        let stack: Stack = serde_json::from_value(json!({
            "id": "ocid1.ormstack.oc1..s",
            "displayName": "network",
            "lifecycleState": "ACTIVE",
            "configSource": {"configSourceType": "ZIP_UPLOAD", "workingDirectory": "vcn"},
            "terraformVersion": "1.2.x",
            "freeformTags": {"team": "net"},
            "definedTags": {"Ops": {"CostCenter": "42"}}
        }))
        .unwrap();
        assert_eq!(stack.lifecycle_state, Some(StackLifecycleState::Active));
        assert_eq!(
            stack.config_source.as_ref().and_then(ConfigSource::working_directory),
            Some("vcn")
        );
        assert_eq!(stack.defined_tags["Ops"]["CostCenter"], json!("42"));
    }

    #[test]
    fn test_update_body_omits_untouched_fields() {
        let body = UpdateStackDetails {
            display_name: Some("renamed".to_string()),
            ..UpdateStackDetails::default()
        };
        assert_eq!(serde_json::to_value(&body).unwrap(), json!({"displayName": "renamed"}));
    }
}
