//! Models of the `/communications` API.

pub mod call_records;
mod call;
mod cloud_communications;
mod collection;
mod common;
mod enums;
mod identity;
mod odata_error;
mod online_meeting;
mod operation;
mod participant;
mod presence;
mod prompt;

pub use call::{
    AppHostedMediaConfig, AudioRoutingGroup, Call, CallMediaState, CallOptions, CallOptionsKind, CallRoute,
    CallTranscriptionInfo, ChatInfo, ContentSharingSession, IncomingCallOptions, IncomingContext,
    InvitationParticipantInfo, JoinMeetingIdMeetingInfo, MediaConfig, MediaConfigKind, MeetingInfo, MeetingInfoKind,
    OrganizerMeetingInfo, OutgoingCallOptions, ParticipantInfo, ResultInfo, ServiceHostedMediaConfig, ToneInfo,
};
pub use cloud_communications::CloudCommunications;
pub use collection::CollectionResponse;
pub use common::{DateTimeTimeZone, ItemBody};
pub use enums::{
    BodyType, BroadcastMeetingAudience, CallDirection, CallState, CallTranscriptionState, MediaDirection, MediaState,
    MeetingChatMode, Modality, OnlineMeetingPresenters, OperationStatus, RecordingStatus, RejectReason, RoutingMode,
    RoutingType, ScreenSharingRole, Tone,
};
pub use identity::{Identity, IdentitySet};
pub use odata_error::{ErrorDetails, InnerError, MainError, ODataError};
pub use online_meeting::{
    AudioConferencing, BroadcastMeetingCaptionSettings, BroadcastMeetingSettings, JoinMeetingIdSettings, LobbyBypassSettings, MeetingParticipantInfo, MeetingParticipants,
    OnlineMeeting, OnlineMeetingBase, OnlineMeetingKind, VirtualEventSession,
};
pub use operation::{
    AddLargeGalleryViewOperation, CancelMediaProcessingOperation, CommsOperation, CommsOperationKind,
    InviteParticipantsOperation, MuteParticipantOperation, PlayPromptOperation, RecordOperation,
    SendDtmfTonesOperation, SubscribeToToneOperation, UnmuteParticipantOperation, UpdateRecordingStatusOperation,
};
pub use participant::{MediaStream, OnlineMeetingRestricted, Participant, RecordingInfo, RemovedState};
pub use presence::{OutOfOfficeSettings, Presence, PresenceStatusMessage};
pub use prompt::{MediaInfo, MediaPrompt, Prompt, PromptKind};
