//! Audio prompts played into calls.

use switchboard::{backed_model, discriminated_union};

backed_model! {
    /// A media file reference.
    pub struct MediaInfo {
        odata_type: "#microsoft.graph.mediaInfo";
        properties {
            /// Unique identifier used to cache the prompt.
            resource_id, set_resource_id: String => "resourceId";
            /// Location of the media, a WAV file (PCM 16 kHz mono).
            uri, set_uri: String => "uri";
        }
    }
}

backed_model! {
    /// A prompt of unspecified shape.
    pub struct Prompt {
        odata_type: "#microsoft.graph.prompt";
        properties {}
    }
}

backed_model! {
    /// A prompt that plays a media file.
    pub struct MediaPrompt {
        odata_type: "#microsoft.graph.mediaPrompt";
        properties {
            media_info, set_media_info: MediaInfo => "mediaInfo";
        }
    }
}

impl MediaPrompt {
    /// Creates a prompt for the media at `uri`.
    pub fn from_uri(uri: impl Into<String>, resource_id: Option<String>) -> Result<Self, switchboard::StoreError> {
        let mut info = MediaInfo::new();
        info.set_uri(Some(uri.into()))?;
        info.set_resource_id(resource_id)?;
        let mut prompt = Self::new();
        prompt.set_media_info(Some(info))?;
        Ok(prompt)
    }
}

discriminated_union! {
    /// A prompt, selected by `@odata.type`.
    pub enum PromptKind {
        property: "@odata.type";
        base: Base(Prompt);
        variants {
            "#microsoft.graph.mediaPrompt" => Media(MediaPrompt),
        }
    }
}
