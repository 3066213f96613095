use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

/// Shape of a recorded call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString)]
#[serde(rename_all = "camelCase")]
#[strum(serialize_all = "camelCase")]
pub enum CallType {
    Unknown,
    GroupCall,
    PeerToPeer,
    #[serde(other)]
    UnknownFutureValue,
}

/// Where in the call a failure happened.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString)]
#[serde(rename_all = "camelCase")]
#[strum(serialize_all = "camelCase")]
pub enum FailureStage {
    Unknown,
    CallSetup,
    Midcall,
    #[serde(other)]
    UnknownFutureValue,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString)]
#[serde(rename_all = "camelCase")]
#[strum(serialize_all = "camelCase")]
pub enum MediaStreamDirection {
    CallerToCallee,
    CalleeToCaller,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString)]
#[serde(rename_all = "camelCase")]
#[strum(serialize_all = "camelCase")]
pub enum NetworkConnectionType {
    Unknown,
    Wired,
    Wifi,
    Mobile,
    Tunnel,
    #[serde(other)]
    UnknownFutureValue,
}

/// Who reported the duration of a PSTN call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString)]
#[serde(rename_all = "camelCase")]
#[strum(serialize_all = "camelCase")]
pub enum PstnCallDurationSource {
    Microsoft,
    Operator,
}

/// Platform of a client endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString)]
#[serde(rename_all = "camelCase")]
#[strum(serialize_all = "camelCase")]
pub enum ClientPlatform {
    Unknown,
    Windows,
    #[serde(rename = "macOS")]
    #[strum(serialize = "macOS")]
    MacOs,
    #[serde(rename = "iOS")]
    #[strum(serialize = "iOS")]
    IOs,
    Android,
    Web,
    IpPhone,
    RoomSystem,
    SurfaceHub,
    HoloLens,
    #[serde(other)]
    UnknownFutureValue,
}

/// Product a client endpoint belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString)]
#[serde(rename_all = "camelCase")]
#[strum(serialize_all = "camelCase")]
pub enum ProductFamily {
    Unknown,
    Teams,
    SkypeForBusiness,
    Lync,
    AzureCommunicationServices,
    #[serde(other)]
    UnknownFutureValue,
}
