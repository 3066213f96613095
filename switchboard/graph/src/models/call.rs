//! Calls and the complex types they carry.

use chrono::{DateTime, Utc};
use switchboard::{backed_model, discriminated_union, BackedModel, StoreError};

use super::enums::{
    CallDirection, CallState, CallTranscriptionState, MediaState, Modality, RoutingMode, RoutingType, Tone,
};
use super::identity::IdentitySet;
use super::operation::CommsOperationKind;
use super::participant::Participant;

backed_model! {
    /// A voice or video call handled by an application.
    pub struct Call {
        odata_type: "#microsoft.graph.call";
        properties {
            id, set_id: String => "id";
            audio_routing_groups, set_audio_routing_groups: Vec<AudioRoutingGroup> => "audioRoutingGroups";
            /// The callback URL on which callbacks are delivered. Must be HTTPS.
            callback_uri, set_callback_uri: String => "callbackUri";
            call_options, set_call_options: CallOptionsKind => "callOptions";
            chat_info, set_chat_info: ChatInfo => "chatInfo";
            content_sharing_sessions, set_content_sharing_sessions: Vec<ContentSharingSession> => "contentSharingSessions";
            media_config, set_media_config: MediaConfigKind => "mediaConfig";
            meeting_info, set_meeting_info: MeetingInfoKind => "meetingInfo";
            operations, set_operations: Vec<CommsOperationKind> => "operations";
            participants, set_participants: Vec<Participant> => "participants";
            requested_modalities, set_requested_modalities: Vec<Modality> => "requestedModalities";
            /// The originator of the call.
            source, set_source: ParticipantInfo => "source";
            subject, set_subject: String => "subject";
            /// The targets of the call.
            targets, set_targets: Vec<InvitationParticipantInfo> => "targets";
            tenant_id, set_tenant_id: String => "tenantId";
        }
        read_only {
            call_chain_id, set_call_chain_id: String => "callChainId";
            call_routes, set_call_routes: Vec<CallRoute> => "callRoutes";
            direction, set_direction: CallDirection => "direction";
            incoming_context, set_incoming_context: IncomingContext => "incomingContext";
            media_state, set_media_state: CallMediaState => "mediaState";
            my_participant_id, set_my_participant_id: String => "myParticipantId";
            result_info, set_result_info: ResultInfo => "resultInfo";
            state, set_state: CallState => "state";
            tone_info, set_tone_info: ToneInfo => "toneInfo";
            transcription, set_transcription: CallTranscriptionInfo => "transcription";
        }
    }
}

backed_model! {
    /// Call options common to incoming and outgoing calls.
    pub struct CallOptions {
        odata_type: "#microsoft.graph.callOptions";
        properties {
            hide_bot_after_escalation, set_hide_bot_after_escalation: bool => "hideBotAfterEscalation";
            is_content_sharing_notification_enabled, set_is_content_sharing_notification_enabled: bool => "isContentSharingNotificationEnabled";
            is_delta_roster_enabled, set_is_delta_roster_enabled: bool => "isDeltaRosterEnabled";
        }
    }
}

backed_model! {
    /// Options for answering an incoming call.
    pub struct IncomingCallOptions {
        odata_type: "#microsoft.graph.incomingCallOptions";
        properties {
            hide_bot_after_escalation, set_hide_bot_after_escalation: bool => "hideBotAfterEscalation";
            is_content_sharing_notification_enabled, set_is_content_sharing_notification_enabled: bool => "isContentSharingNotificationEnabled";
            is_delta_roster_enabled, set_is_delta_roster_enabled: bool => "isDeltaRosterEnabled";
        }
    }
}

backed_model! {
    /// Options for placing an outgoing call.
    pub struct OutgoingCallOptions {
        odata_type: "#microsoft.graph.outgoingCallOptions";
        properties {
            hide_bot_after_escalation, set_hide_bot_after_escalation: bool => "hideBotAfterEscalation";
            is_content_sharing_notification_enabled, set_is_content_sharing_notification_enabled: bool => "isContentSharingNotificationEnabled";
            is_delta_roster_enabled, set_is_delta_roster_enabled: bool => "isDeltaRosterEnabled";
        }
    }
}

discriminated_union! {
    /// Call options, selected by `@odata.type`.
    pub enum CallOptionsKind {
        property: "@odata.type";
        base: Base(CallOptions);
        variants {
            "#microsoft.graph.incomingCallOptions" => Incoming(IncomingCallOptions),
            "#microsoft.graph.outgoingCallOptions" => Outgoing(OutgoingCallOptions),
        }
    }
}

impl CallOptionsKind {
    /// Returns whether the bot leaves the roster once the call escalates to a group call.
    pub fn hide_bot_after_escalation(&self) -> Result<Option<bool>, StoreError> {
        self.backing_store().get("hideBotAfterEscalation")
    }

    pub fn is_delta_roster_enabled(&self) -> Result<Option<bool>, StoreError> {
        self.backing_store().get("isDeltaRosterEnabled")
    }
}

backed_model! {
    pub struct CallMediaState {
        odata_type: "#microsoft.graph.callMediaState";
        properties {
            audio, set_audio: MediaState => "audio";
        }
    }
}

backed_model! {
    /// Who an incoming call is really from, when it arrives through a transfer or on someone's behalf.
    pub struct IncomingContext {
        odata_type: "#microsoft.graph.incomingContext";
        properties {
            observed_participant_id, set_observed_participant_id: String => "observedParticipantId";
            on_behalf_of, set_on_behalf_of: IdentitySet => "onBehalfOf";
            source_participant_id, set_source_participant_id: String => "sourceParticipantId";
            transferor, set_transferor: IdentitySet => "transferor";
        }
    }
}

backed_model! {
    /// One hop in the routing of an incoming call.
    pub struct CallRoute {
        odata_type: "#microsoft.graph.callRoute";
        properties {
            final_identity, set_final_identity: IdentitySet => "final";
            original, set_original: IdentitySet => "original";
            routing_type, set_routing_type: RoutingType => "routingType";
        }
    }
}

backed_model! {
    /// A group of participants whose audio is routed to each other.
    pub struct AudioRoutingGroup {
        odata_type: "#microsoft.graph.audioRoutingGroup";
        properties {
            id, set_id: String => "id";
            receivers, set_receivers: Vec<String> => "receivers";
            routing_mode, set_routing_mode: RoutingMode => "routingMode";
            sources, set_sources: Vec<String> => "sources";
        }
    }
}

backed_model! {
    pub struct CallTranscriptionInfo {
        odata_type: "#microsoft.graph.callTranscriptionInfo";
        properties {
            last_modified_date_time, set_last_modified_date_time: DateTime<Utc> => "lastModifiedDateTime";
            state, set_state: CallTranscriptionState => "state";
        }
    }
}

backed_model! {
    /// A content sharing session in a call.
    pub struct ContentSharingSession {
        odata_type: "#microsoft.graph.contentSharingSession";
        properties {
            id, set_id: String => "id";
        }
    }
}

backed_model! {
    /// A participant as seen in call signaling.
    pub struct ParticipantInfo {
        odata_type: "#microsoft.graph.participantInfo";
        properties {
            country_code, set_country_code: String => "countryCode";
            endpoint_type, set_endpoint_type: String => "endpointType";
            identity, set_identity: IdentitySet => "identity";
            language_id, set_language_id: String => "languageId";
            participant_id, set_participant_id: String => "participantId";
            region, set_region: String => "region";
        }
    }
}

backed_model! {
    /// A party to invite or transfer to.
    pub struct InvitationParticipantInfo {
        odata_type: "#microsoft.graph.invitationParticipantInfo";
        properties {
            hidden, set_hidden: bool => "hidden";
            identity, set_identity: IdentitySet => "identity";
            participant_id, set_participant_id: String => "participantId";
            remove_from_default_audio_routing_group, set_remove_from_default_audio_routing_group: bool => "removeFromDefaultAudioRoutingGroup";
            replaces_call_id, set_replaces_call_id: String => "replacesCallId";
        }
    }
}

backed_model! {
    /// Result of a call or operation.
    pub struct ResultInfo {
        odata_type: "#microsoft.graph.resultInfo";
        properties {
            code, set_code: i32 => "code";
            message, set_message: String => "message";
            subcode, set_subcode: i32 => "subcode";
        }
    }
}

backed_model! {
    /// Teams chat thread a meeting call is attached to.
    pub struct ChatInfo {
        odata_type: "#microsoft.graph.chatInfo";
        properties {
            message_id, set_message_id: String => "messageId";
            reply_chain_message_id, set_reply_chain_message_id: String => "replyChainMessageId";
            thread_id, set_thread_id: String => "threadId";
        }
    }
}

backed_model! {
    /// The last tone received on a call.
    pub struct ToneInfo {
        odata_type: "#microsoft.graph.toneInfo";
        properties {
            sequence_id, set_sequence_id: i64 => "sequenceId";
            tone, set_tone: Tone => "tone";
        }
    }
}

backed_model! {
    /// Meeting information of unspecified shape.
    pub struct MeetingInfo {
        odata_type: "#microsoft.graph.meetingInfo";
        properties {}
    }
}

backed_model! {
    /// Identifies a meeting by its organizer.
    pub struct OrganizerMeetingInfo {
        odata_type: "#microsoft.graph.organizerMeetingInfo";
        properties {
            organizer, set_organizer: IdentitySet => "organizer";
        }
    }
}

backed_model! {
    /// Identifies a meeting by its join meeting ID and passcode.
    pub struct JoinMeetingIdMeetingInfo {
        odata_type: "#microsoft.graph.joinMeetingIdMeetingInfo";
        properties {
            join_meeting_id, set_join_meeting_id: String => "joinMeetingId";
            passcode, set_passcode: String => "passcode";
        }
    }
}

discriminated_union! {
    /// Meeting information, selected by `@odata.type`.
    pub enum MeetingInfoKind {
        property: "@odata.type";
        base: Base(MeetingInfo);
        variants {
            "#microsoft.graph.organizerMeetingInfo" => Organizer(OrganizerMeetingInfo),
            "#microsoft.graph.joinMeetingIdMeetingInfo" => JoinMeetingId(JoinMeetingIdMeetingInfo),
        }
    }
}

backed_model! {
    /// Media configuration of unspecified shape.
    pub struct MediaConfig {
        odata_type: "#microsoft.graph.mediaConfig";
        properties {
            remove_from_default_audio_group, set_remove_from_default_audio_group: bool => "removeFromDefaultAudioGroup";
        }
    }
}

backed_model! {
    /// Media hosted by the application itself.
    pub struct AppHostedMediaConfig {
        odata_type: "#microsoft.graph.appHostedMediaConfig";
        properties {
            blob, set_blob: String => "blob";
            remove_from_default_audio_group, set_remove_from_default_audio_group: bool => "removeFromDefaultAudioGroup";
        }
    }
}

backed_model! {
    /// Media hosted by the Graph calling service.
    pub struct ServiceHostedMediaConfig {
        odata_type: "#microsoft.graph.serviceHostedMediaConfig";
        properties {
            /// Prompts to pre-fetch so they play without delay.
            pre_fetch_media, set_pre_fetch_media: Vec<super::prompt::MediaInfo> => "preFetchMedia";
            remove_from_default_audio_group, set_remove_from_default_audio_group: bool => "removeFromDefaultAudioGroup";
        }
    }
}

discriminated_union! {
    /// Media configuration, selected by `@odata.type`.
    pub enum MediaConfigKind {
        property: "@odata.type";
        base: Base(MediaConfig);
        variants {
            "#microsoft.graph.appHostedMediaConfig" => AppHosted(AppHostedMediaConfig),
            "#microsoft.graph.serviceHostedMediaConfig" => ServiceHosted(ServiceHostedMediaConfig),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, Value};

    fn payload() -> Value {
        json!({
            "@odata.type": "#microsoft.graph.call",
            "id": "2f1a0b00-3ef3-4f0c-8d3b-f0c1a4e0a6d1",
            "state": "established",
            "direction": "outgoing",
            "subject": "Daily sync",
            "callbackUri": "https://bot.contoso.com/callback",
            "requestedModalities": ["audio", "video"],
            "mediaConfig": {
                "@odata.type": "#microsoft.graph.serviceHostedMediaConfig",
                "preFetchMedia": []
            },
            "meetingInfo": {
                "@odata.type": "#microsoft.graph.organizerMeetingInfo",
                "organizer": {"user": {"id": "u1"}}
            },
            "resultInfo": {"code": 200, "subcode": 0},
            "tenantId": "t1",
            "callChainId": "chain"
        })
    }

    #[test]
    fn test_decodes_typed_properties() {
        let call: Call = serde_json::from_value(payload()).unwrap();
        assert_eq!(call.state().unwrap(), Some(CallState::Established));
        assert_eq!(call.direction().unwrap(), Some(CallDirection::Outgoing));
        assert_eq!(
            call.requested_modalities().unwrap(),
            Some(vec![Modality::Audio, Modality::Video])
        );
        assert!(matches!(
            call.media_config().unwrap(),
            Some(MediaConfigKind::ServiceHosted(_))
        ));
        let Some(MeetingInfoKind::Organizer(info)) = call.meeting_info().unwrap() else {
            panic!("expected organizer meeting info");
        };
        assert!(info.organizer().unwrap().is_some());
        assert_eq!(call.result_info().unwrap().unwrap().code().unwrap(), Some(200));
    }

    #[test]
    fn test_round_trip_omits_read_only() {
        let call: Call = serde_json::from_value(payload()).unwrap();
        let json = serde_json::to_value(&call).unwrap();

        for key in Call::READ_ONLY {
            assert!(json.get(*key).is_none(), "{key} should not be serialized");
        }
        let back: Call = serde_json::from_value(json).unwrap();
        assert_eq!(back.subject().unwrap(), call.subject().unwrap());
        assert_eq!(back.media_config().unwrap(), call.media_config().unwrap());
        assert_eq!(back.state().unwrap(), None);
    }

    #[test]
    fn test_outgoing_call_body() {
        let mut call = Call::new();
        call.set_callback_uri(Some("https://bot.contoso.com/callback".to_string()))
            .unwrap();
        call.set_requested_modalities(Some(vec![Modality::Audio])).unwrap();
        call.set_media_config(Some(ServiceHostedMediaConfig::new().into()))
            .unwrap();

        let mut target = InvitationParticipantInfo::new();
        target
            .set_identity(Some(IdentitySet::for_user("u2", None).unwrap()))
            .unwrap();
        call.set_targets(Some(vec![target])).unwrap();

        let json = serde_json::to_value(&call).unwrap();
        assert_eq!(json["@odata.type"], "#microsoft.graph.call");
        assert_eq!(
            json["mediaConfig"]["@odata.type"],
            "#microsoft.graph.serviceHostedMediaConfig"
        );
        assert_eq!(json["targets"][0]["identity"]["user"]["id"], "u2");
        assert!(call.additional_data().is_empty());
    }

    #[test]
    fn test_decodes_call_signaling_properties() {
        let call: Call = serde_json::from_value(json!({
            "@odata.type": "#microsoft.graph.call",
            "callOptions": {
                "@odata.type": "#microsoft.graph.outgoingCallOptions",
                "hideBotAfterEscalation": true
            },
            "mediaState": {"audio": "active"},
            "incomingContext": {
                "sourceParticipantId": "p1",
                "transferor": {"user": {"id": "u9"}}
            },
            "callRoutes": [{
                "routingType": "forwarded",
                "final": {"user": {"id": "u2"}},
                "original": {"user": {"id": "u1"}}
            }],
            "audioRoutingGroups": [{"id": "g1", "routingMode": "oneToOne", "sources": ["p1"], "receivers": ["p2"]}],
            "transcription": {"state": "active", "lastModifiedDateTime": "2024-05-01T10:00:00Z"},
            "contentSharingSessions": [{"id": "s1"}]
        }))
        .unwrap();

        let options = call.call_options().unwrap().unwrap();
        assert!(matches!(options, CallOptionsKind::Outgoing(_)));
        assert_eq!(options.hide_bot_after_escalation().unwrap(), Some(true));
        assert_eq!(
            call.media_state().unwrap().unwrap().audio().unwrap(),
            Some(MediaState::Active)
        );
        let context = call.incoming_context().unwrap().unwrap();
        assert_eq!(context.source_participant_id().unwrap().as_deref(), Some("p1"));
        let routes = call.call_routes().unwrap().unwrap();
        assert_eq!(routes[0].routing_type().unwrap(), Some(RoutingType::Forwarded));
        assert!(routes[0].final_identity().unwrap().is_some());
        let groups = call.audio_routing_groups().unwrap().unwrap();
        assert_eq!(groups[0].routing_mode().unwrap(), Some(RoutingMode::OneToOne));
        assert_eq!(
            call.transcription().unwrap().unwrap().state().unwrap(),
            Some(CallTranscriptionState::Active)
        );
        assert_eq!(call.content_sharing_sessions().unwrap().unwrap().len(), 1);
    }

    #[test]
    fn test_call_options_carry_their_type() {
        let mut options = OutgoingCallOptions::new();
        options.set_is_content_sharing_notification_enabled(Some(true)).unwrap();
        let mut call = Call::new();
        call.set_call_options(Some(options.into())).unwrap();

        let json = serde_json::to_value(&call).unwrap();
        assert_eq!(
            json["callOptions"]["@odata.type"],
            "#microsoft.graph.outgoingCallOptions"
        );
        assert_eq!(json["callOptions"]["isContentSharingNotificationEnabled"], true);
    }
}
