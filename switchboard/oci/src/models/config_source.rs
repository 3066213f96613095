//! Terraform configuration sources.

use serde::{Deserialize, Serialize};

/// Configuration uploaded as a base64 zip archive.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ZipUploadConfigSource {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub working_directory: Option<String>,
}

/// Configuration cloned from a Git repository.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GitConfigSource {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub working_directory: Option<String>,
    pub configuration_source_provider_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub repository_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub branch_name: Option<String>,
}

/// Configuration read from an Object Storage bucket.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ObjectStorageConfigSource {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub working_directory: Option<String>,
    pub region: String,
    pub namespace: String,
    pub bucket_name: String,
}

/// Configuration discovered from resources in a compartment.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompartmentConfigSource {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub working_directory: Option<String>,
    pub compartment_id: String,
    pub region: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub services_to_discover: Vec<String>,
}

polymorphic! {
    /// Where a stack's Terraform configuration lives.
    pub enum ConfigSource {
        tag: "configSourceType";
        "ZIP_UPLOAD" => ZipUpload(ZipUploadConfigSource),
        "GIT_CONFIG_SOURCE" => Git(GitConfigSource),
        "OBJECT_STORAGE_CONFIG_SOURCE" => ObjectStorage(ObjectStorageConfigSource),
        "COMPARTMENT_CONFIG_SOURCE" => Compartment(CompartmentConfigSource),
    }
}

impl ConfigSource {
    pub fn working_directory(&self) -> Option<&str> {
        match self {
            Self::ZipUpload(s) => s.working_directory.as_deref(),
            Self::Git(s) => s.working_directory.as_deref(),
            Self::ObjectStorage(s) => s.working_directory.as_deref(),
            Self::Compartment(s) => s.working_directory.as_deref(),
            Self::Unknown(node) => node.get("workingDirectory").and_then(|v| v.as_str()),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateZipUploadConfigSourceDetails {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub working_directory: Option<String>,
    pub zip_file_base64_encoded: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateGitConfigSourceDetails {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub working_directory: Option<String>,
    pub configuration_source_provider_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub repository_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub branch_name: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateObjectStorageConfigSourceDetails {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub working_directory: Option<String>,
    pub region: String,
    pub namespace: String,
    pub bucket_name: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateCompartmentConfigSourceDetails {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub working_directory: Option<String>,
    pub compartment_id: String,
    pub region: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub services_to_discover: Vec<String>,
}

polymorphic! {
    /// Configuration source supplied when creating a stack.
    pub enum CreateConfigSourceDetails {
        tag: "configSourceType";
        "ZIP_UPLOAD" => ZipUpload(CreateZipUploadConfigSourceDetails),
        "GIT_CONFIG_SOURCE" => Git(CreateGitConfigSourceDetails),
        "OBJECT_STORAGE_CONFIG_SOURCE" => ObjectStorage(CreateObjectStorageConfigSourceDetails),
        "COMPARTMENT_CONFIG_SOURCE" => Compartment(CreateCompartmentConfigSourceDetails),
    }
}

impl CreateConfigSourceDetails {
    /// A zip upload from an already base64-encoded archive.
    pub fn zip_upload(zip_file_base64_encoded: impl Into<String>) -> Self {
        Self::ZipUpload(CreateZipUploadConfigSourceDetails {
            working_directory: None,
            zip_file_base64_encoded: zip_file_base64_encoded.into(),
        })
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateZipUploadConfigSourceDetails {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub working_directory: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub zip_file_base64_encoded: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateGitConfigSourceDetails {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub working_directory: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub configuration_source_provider_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub repository_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub branch_name: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateObjectStorageConfigSourceDetails {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub working_directory: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub namespace: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bucket_name: Option<String>,
}

polymorphic! {
    /// Configuration source changes for an existing stack.
    pub enum UpdateConfigSourceDetails {
        tag: "configSourceType";
        "ZIP_UPLOAD" => ZipUpload(UpdateZipUploadConfigSourceDetails),
        "GIT_CONFIG_SOURCE" => Git(UpdateGitConfigSourceDetails),
        "OBJECT_STORAGE_CONFIG_SOURCE" => ObjectStorage(UpdateObjectStorageConfigSourceDetails),
    }
}
