//! Actions invoked on a single call.

use switchboard::backed_model;

use crate::models::{
    AddLargeGalleryViewOperation, CancelMediaProcessingOperation, IncomingCallOptions, InvitationParticipantInfo, MediaConfigKind,
    Modality, ParticipantInfo, PlayPromptOperation, PromptKind, RecordOperation, RecordingStatus, RejectReason,
    MuteParticipantOperation, ScreenSharingRole, SendDtmfTonesOperation, SubscribeToToneOperation, Tone, UnmuteParticipantOperation,
    UpdateRecordingStatusOperation,
};

backed_model! {
    pub struct AnswerPostRequestBody {
        properties {
            accepted_modalities, set_accepted_modalities: Vec<Modality> => "acceptedModalities";
            callback_uri, set_callback_uri: String => "callbackUri";
            call_options, set_call_options: IncomingCallOptions => "callOptions";
            media_config, set_media_config: MediaConfigKind => "mediaConfig";
            /// Concurrent calls the application can handle on this instance.
            participant_capacity, set_participant_capacity: i32 => "participantCapacity";
        }
    }
}

backed_model! {
    pub struct RejectPostRequestBody {
        properties {
            callback_uri, set_callback_uri: String => "callbackUri";
            reason, set_reason: RejectReason => "reason";
        }
    }
}

backed_model! {
    pub struct RedirectPostRequestBody {
        properties {
            callback_uri, set_callback_uri: String => "callbackUri";
            targets, set_targets: Vec<InvitationParticipantInfo> => "targets";
            /// Seconds to wait for the targets to pick up, 15 to 90.
            timeout, set_timeout: i32 => "timeout";
        }
    }
}

backed_model! {
    pub struct TransferPostRequestBody {
        properties {
            transfer_target, set_transfer_target: InvitationParticipantInfo => "transferTarget";
            /// The participant being transferred; required for consultative transfer.
            transferee, set_transferee: ParticipantInfo => "transferee";
        }
    }
}

backed_model! {
    pub struct ChangeScreenSharingRolePostRequestBody {
        properties {
            role, set_role: ScreenSharingRole => "role";
        }
    }
}

backed_model! {
    /// Body shared by actions that only carry a client context.
    pub struct ClientContextPostRequestBody {
        properties {
            client_context, set_client_context: String => "clientContext";
        }
    }
}

impl ClientContextPostRequestBody {
    /// Creates a body carrying `client_context`.
    pub fn with_client_context(client_context: impl Into<String>) -> Result<Self, switchboard::StoreError> {
        let mut body = Self::new();
        body.set_client_context(Some(client_context.into()))?;
        Ok(body)
    }
}

backed_model! {
    pub struct PlayPromptPostRequestBody {
        properties {
            client_context, set_client_context: String => "clientContext";
            prompts, set_prompts: Vec<PromptKind> => "prompts";
        }
    }
}

backed_model! {
    pub struct RecordResponsePostRequestBody {
        properties {
            barge_in_allowed, set_barge_in_allowed: bool => "bargeInAllowed";
            client_context, set_client_context: String => "clientContext";
            initial_silence_timeout_in_seconds, set_initial_silence_timeout_in_seconds: i32 => "initialSilenceTimeoutInSeconds";
            max_record_duration_in_seconds, set_max_record_duration_in_seconds: i32 => "maxRecordDurationInSeconds";
            max_silence_timeout_in_seconds, set_max_silence_timeout_in_seconds: i32 => "maxSilenceTimeoutInSeconds";
            play_beep, set_play_beep: bool => "playBeep";
            prompts, set_prompts: Vec<PromptKind> => "prompts";
            /// DTMF tones that end the recording.
            stop_tones, set_stop_tones: Vec<String> => "stopTones";
        }
    }
}

backed_model! {
    pub struct UpdateRecordingStatusPostRequestBody {
        properties {
            client_context, set_client_context: String => "clientContext";
            status, set_status: RecordingStatus => "status";
        }
    }
}

backed_model! {
    pub struct SendDtmfTonesPostRequestBody {
        properties {
            client_context, set_client_context: String => "clientContext";
            delay_between_tones_ms, set_delay_between_tones_ms: i32 => "delayBetweenTonesMs";
            tones, set_tones: Vec<Tone> => "tones";
        }
    }
}

action_builder! {
    /// `POST /communications/calls/{id}/answer`
    AnswerRequestBuilder => "{+baseurl}/communications/calls/{call%2Did}/answer",
    body: AnswerPostRequestBody
}

action_builder! {
    /// `POST /communications/calls/{id}/reject`
    RejectRequestBuilder => "{+baseurl}/communications/calls/{call%2Did}/reject",
    body: RejectPostRequestBody
}

action_builder! {
    /// `POST /communications/calls/{id}/redirect`
    RedirectRequestBuilder => "{+baseurl}/communications/calls/{call%2Did}/redirect",
    body: RedirectPostRequestBody
}

action_builder! {
    /// `POST /communications/calls/{id}/transfer`
    TransferRequestBuilder => "{+baseurl}/communications/calls/{call%2Did}/transfer",
    body: TransferPostRequestBody
}

action_builder! {
    /// `POST /communications/calls/{id}/keepAlive`
    KeepAliveRequestBuilder => "{+baseurl}/communications/calls/{call%2Did}/keepAlive"
}

action_builder! {
    /// `POST /communications/calls/{id}/changeScreenSharingRole`
    ChangeScreenSharingRoleRequestBuilder => "{+baseurl}/communications/calls/{call%2Did}/changeScreenSharingRole",
    body: ChangeScreenSharingRolePostRequestBody
}

action_builder! {
    /// `POST /communications/calls/{id}/mute`
    MuteRequestBuilder => "{+baseurl}/communications/calls/{call%2Did}/mute",
    body: ClientContextPostRequestBody,
    returns: MuteParticipantOperation
}

action_builder! {
    /// `POST /communications/calls/{id}/unmute`
    UnmuteRequestBuilder => "{+baseurl}/communications/calls/{call%2Did}/unmute",
    body: ClientContextPostRequestBody,
    returns: UnmuteParticipantOperation
}

action_builder! {
    /// `POST /communications/calls/{id}/playPrompt`
    PlayPromptRequestBuilder => "{+baseurl}/communications/calls/{call%2Did}/playPrompt",
    body: PlayPromptPostRequestBody,
    returns: PlayPromptOperation
}

action_builder! {
    /// `POST /communications/calls/{id}/recordResponse`
    RecordResponseRequestBuilder => "{+baseurl}/communications/calls/{call%2Did}/recordResponse",
    body: RecordResponsePostRequestBody,
    returns: RecordOperation
}

action_builder! {
    /// `POST /communications/calls/{id}/cancelMediaProcessing`
    CancelMediaProcessingRequestBuilder => "{+baseurl}/communications/calls/{call%2Did}/cancelMediaProcessing",
    body: ClientContextPostRequestBody,
    returns: CancelMediaProcessingOperation
}

action_builder! {
    /// `POST /communications/calls/{id}/subscribeToTone`
    SubscribeToToneRequestBuilder => "{+baseurl}/communications/calls/{call%2Did}/subscribeToTone",
    body: ClientContextPostRequestBody,
    returns: SubscribeToToneOperation
}

action_builder! {
    /// `POST /communications/calls/{id}/updateRecordingStatus`
    UpdateRecordingStatusRequestBuilder => "{+baseurl}/communications/calls/{call%2Did}/updateRecordingStatus",
    body: UpdateRecordingStatusPostRequestBody,
    returns: UpdateRecordingStatusOperation
}

action_builder! {
    /// `POST /communications/calls/{id}/sendDtmfTones`
    SendDtmfTonesRequestBuilder => "{+baseurl}/communications/calls/{call%2Did}/sendDtmfTones",
    body: SendDtmfTonesPostRequestBody,
    returns: SendDtmfTonesOperation
}

action_builder! {
    /// `POST /communications/calls/{id}/addLargeGalleryView`
    AddLargeGalleryViewRequestBuilder => "{+baseurl}/communications/calls/{call%2Did}/addLargeGalleryView",
    body: ClientContextPostRequestBody,
    returns: AddLargeGalleryViewOperation
}
