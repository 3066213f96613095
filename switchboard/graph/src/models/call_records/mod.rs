//! Call quality records (`microsoft.graph.callRecords` namespace).
//!
//! A record is created once a call ends; sessions and segments break it
//! down per peer-to-peer leg.

mod endpoint;
mod enums;
mod log_rows;
mod media;
mod record;

pub use endpoint::{
    ClientUserAgent, Endpoint, EndpointKind, FeedbackTokenSet, ParticipantEndpoint, ServiceEndpoint,
    ServiceUserAgent, UserAgent, UserAgentKind, UserFeedback,
};
pub use enums::{
    CallType, ClientPlatform, FailureStage, MediaStreamDirection, NetworkConnectionType, ProductFamily,
    PstnCallDurationSource,
};
pub use log_rows::{DirectRoutingLogRow, PstnCallLogRow};
pub use media::{DeviceInfo, Media, MediaStream, NetworkInfo};
pub use record::{CallRecord, FailureInfo, Segment, Session};
