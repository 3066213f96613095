//! Enumerations shared across communications models.
//!
//! Values use the Graph wire spelling. Strings a newer service version adds
//! decode as `UnknownFutureValue` instead of failing.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

/// State of a call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString)]
#[serde(rename_all = "camelCase")]
#[strum(serialize_all = "camelCase")]
pub enum CallState {
    Incoming,
    Establishing,
    Established,
    Hold,
    Transferring,
    TransferAccepted,
    Redirecting,
    Terminating,
    Terminated,
    #[serde(other)]
    UnknownFutureValue,
}

/// Direction of a call relative to the application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString)]
#[serde(rename_all = "camelCase")]
#[strum(serialize_all = "camelCase")]
pub enum CallDirection {
    Incoming,
    Outgoing,
    #[serde(other)]
    UnknownFutureValue,
}

/// Media modality of a call or stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString)]
#[serde(rename_all = "camelCase")]
#[strum(serialize_all = "camelCase")]
pub enum Modality {
    Unknown,
    Audio,
    Video,
    VideoBasedScreenSharing,
    ScreenSharing,
    Data,
    #[serde(other)]
    UnknownFutureValue,
}

/// Progress of a long-running communications operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString)]
#[serde(rename_all = "camelCase")]
#[strum(serialize_all = "camelCase")]
pub enum OperationStatus {
    NotStarted,
    Running,
    Completed,
    Failed,
    #[serde(other)]
    UnknownFutureValue,
}

impl OperationStatus {
    /// Returns `true` once the operation can no longer change.
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Completed | Self::Failed)
    }
}

/// Screen sharing role of the application in a call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString)]
#[serde(rename_all = "camelCase")]
#[strum(serialize_all = "camelCase")]
pub enum ScreenSharingRole {
    Viewer,
    Sharer,
}

/// Recording state reported by the application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString)]
#[serde(rename_all = "camelCase")]
#[strum(serialize_all = "camelCase")]
pub enum RecordingStatus {
    Unknown,
    NotRecording,
    Recording,
    Failed,
    #[serde(other)]
    UnknownFutureValue,
}

/// Reason given when rejecting an incoming call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString)]
#[serde(rename_all = "camelCase")]
#[strum(serialize_all = "camelCase")]
pub enum RejectReason {
    None,
    Busy,
    Forbidden,
    #[serde(other)]
    UnknownFutureValue,
}

/// DTMF tone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString)]
#[serde(rename_all = "camelCase")]
#[strum(serialize_all = "camelCase")]
pub enum Tone {
    Tone0,
    Tone1,
    Tone2,
    Tone3,
    Tone4,
    Tone5,
    Tone6,
    Tone7,
    Tone8,
    Tone9,
    Star,
    Pound,
    A,
    B,
    C,
    D,
    Flash,
}

/// Who may present in an online meeting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString)]
#[serde(rename_all = "camelCase")]
#[strum(serialize_all = "camelCase")]
pub enum OnlineMeetingPresenters {
    Everyone,
    Organization,
    RoleIsPresenter,
    Organizer,
    #[serde(other)]
    UnknownFutureValue,
}

/// Meeting chat availability.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString)]
#[serde(rename_all = "camelCase")]
#[strum(serialize_all = "camelCase")]
pub enum MeetingChatMode {
    Enabled,
    Disabled,
    Limited,
    #[serde(other)]
    UnknownFutureValue,
}

/// Format of an item body.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString)]
#[serde(rename_all = "camelCase")]
#[strum(serialize_all = "camelCase")]
pub enum BodyType {
    Text,
    Html,
}

/// Whether a media stream is flowing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString)]
#[serde(rename_all = "camelCase")]
#[strum(serialize_all = "camelCase")]
pub enum MediaState {
    Active,
    Inactive,
    #[serde(other)]
    UnknownFutureValue,
}

/// Direction of a participant's media stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString)]
#[serde(rename_all = "camelCase")]
#[strum(serialize_all = "camelCase")]
pub enum MediaDirection {
    Inactive,
    SendOnly,
    ReceiveOnly,
    SendReceive,
}

/// How a call reached its final target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString)]
#[serde(rename_all = "camelCase")]
#[strum(serialize_all = "camelCase")]
pub enum RoutingType {
    Forwarded,
    Lookup,
    SelfFork,
    #[serde(other)]
    UnknownFutureValue,
}

/// Audio routing group mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString)]
#[serde(rename_all = "camelCase")]
#[strum(serialize_all = "camelCase")]
pub enum RoutingMode {
    OneToOne,
    Multicast,
    #[serde(other)]
    UnknownFutureValue,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString)]
#[serde(rename_all = "camelCase")]
#[strum(serialize_all = "camelCase")]
pub enum CallTranscriptionState {
    NotStarted,
    Active,
    Inactive,
    #[serde(other)]
    UnknownFutureValue,
}

/// Who may attend a broadcast meeting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString)]
#[serde(rename_all = "camelCase")]
#[strum(serialize_all = "camelCase")]
pub enum BroadcastMeetingAudience {
    RoleIsAttendee,
    Organization,
    Everyone,
    #[serde(other)]
    UnknownFutureValue,
}
