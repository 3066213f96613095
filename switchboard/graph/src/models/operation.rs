//! Long-running communications operations.
//!
//! Every call action that does not complete synchronously returns an
//! operation; its final state arrives later through the call's
//! notification callback or by reading `/calls/{id}/operations/{id}`.

use switchboard::{backed_model, discriminated_union, BackedModel, StoreError};

use super::call::{InvitationParticipantInfo, ResultInfo};
use super::enums::OperationStatus;

/// Declares an operation type with the properties every operation shares.
macro_rules! comms_operation {
    ($(#[$meta:meta])* $name:ident => $odata:literal { $($extra:tt)* }) => {
        backed_model! {
            $(#[$meta])*
            pub struct $name {
                odata_type: $odata;
                properties {
                    id, set_id: String => "id";
                    /// Opaque value echoed back in notifications.
                    client_context, set_client_context: String => "clientContext";
                    result_info, set_result_info: ResultInfo => "resultInfo";
                    status, set_status: OperationStatus => "status";
                    $($extra)*
                }
            }
        }
    };
}

comms_operation! {
    /// An operation of unspecified kind.
    CommsOperation => "#microsoft.graph.commsOperation" {}
}

comms_operation! {
    /// Result of `playPrompt`.
    PlayPromptOperation => "#microsoft.graph.playPromptOperation" {
        completion_reason, set_completion_reason: String => "completionReason";
    }
}

comms_operation! {
    /// Result of `recordResponse`.
    RecordOperation => "#microsoft.graph.recordOperation" {
        completion_reason, set_completion_reason: String => "completionReason";
        /// Token needed to download the recording.
        recording_access_token, set_recording_access_token: String => "recordingAccessToken";
        recording_location, set_recording_location: String => "recordingLocation";
    }
}

comms_operation! {
    /// Result of muting a participant.
    MuteParticipantOperation => "#microsoft.graph.muteParticipantOperation" {}
}

comms_operation! {
    /// Result of unmuting a participant.
    UnmuteParticipantOperation => "#microsoft.graph.unmuteParticipantOperation" {}
}

comms_operation! {
    /// Result of `cancelMediaProcessing`.
    CancelMediaProcessingOperation => "#microsoft.graph.cancelMediaProcessingOperation" {}
}

comms_operation! {
    /// Result of inviting participants.
    InviteParticipantsOperation => "#microsoft.graph.inviteParticipantsOperation" {
        participants, set_participants: Vec<InvitationParticipantInfo> => "participants";
    }
}

comms_operation! {
    /// Result of `subscribeToTone`.
    SubscribeToToneOperation => "#microsoft.graph.subscribeToToneOperation" {}
}

comms_operation! {
    /// Result of `updateRecordingStatus`.
    UpdateRecordingStatusOperation => "#microsoft.graph.updateRecordingStatusOperation" {}
}

comms_operation! {
    /// Result of `addLargeGalleryView`.
    AddLargeGalleryViewOperation => "#microsoft.graph.addLargeGalleryViewOperation" {}
}

comms_operation! {
    /// Result of `sendDtmfTones`.
    SendDtmfTonesOperation => "#microsoft.graph.sendDtmfTonesOperation" {
        completion_reason, set_completion_reason: String => "completionReason";
    }
}

discriminated_union! {
    /// A communications operation, selected by `@odata.type`.
    pub enum CommsOperationKind {
        property: "@odata.type";
        base: Base(CommsOperation);
        variants {
            "#microsoft.graph.playPromptOperation" => PlayPrompt(PlayPromptOperation),
            "#microsoft.graph.recordOperation" => Record(RecordOperation),
            "#microsoft.graph.muteParticipantOperation" => MuteParticipant(MuteParticipantOperation),
            "#microsoft.graph.unmuteParticipantOperation" => UnmuteParticipant(UnmuteParticipantOperation),
            "#microsoft.graph.cancelMediaProcessingOperation" => CancelMediaProcessing(CancelMediaProcessingOperation),
            "#microsoft.graph.inviteParticipantsOperation" => InviteParticipants(InviteParticipantsOperation),
            "#microsoft.graph.subscribeToToneOperation" => SubscribeToTone(SubscribeToToneOperation),
            "#microsoft.graph.updateRecordingStatusOperation" => UpdateRecordingStatus(UpdateRecordingStatusOperation),
            "#microsoft.graph.addLargeGalleryViewOperation" => AddLargeGalleryView(AddLargeGalleryViewOperation),
            "#microsoft.graph.sendDtmfTonesOperation" => SendDtmfTones(SendDtmfTonesOperation),
        }
    }
}

impl CommsOperationKind {
    /// Returns the operation id, whatever the concrete kind.
    pub fn id(&self) -> Result<Option<String>, StoreError> {
        self.backing_store().get("id")
    }

    /// Returns the operation status, whatever the concrete kind.
    pub fn status(&self) -> Result<Option<OperationStatus>, StoreError> {
        self.backing_store().get("status")
    }

    /// Returns the client context, whatever the concrete kind.
    pub fn client_context(&self) -> Result<Option<String>, StoreError> {
        self.backing_store().get("clientContext")
    }

    /// Returns the result info, whatever the concrete kind.
    pub fn result_info(&self) -> Result<Option<ResultInfo>, StoreError> {
        self.backing_store().get("resultInfo")
    }
}
