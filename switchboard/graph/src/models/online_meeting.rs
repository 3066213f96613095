//! Online meetings and virtual event sessions.

use chrono::{DateTime, Utc};
use switchboard::{backed_model, discriminated_union, BackedModel, StoreError};

use super::call::ChatInfo;
use super::common::{DateTimeTimeZone, ItemBody};
use super::enums::{BroadcastMeetingAudience, MeetingChatMode, OnlineMeetingPresenters};
use super::identity::IdentitySet;

backed_model! {
    /// Meeting settings shared by every kind of online meeting.
    pub struct OnlineMeetingBase {
        odata_type: "#microsoft.graph.onlineMeetingBase";
        properties {
            id, set_id: String => "id";
            allow_attendee_to_enable_camera, set_allow_attendee_to_enable_camera: bool => "allowAttendeeToEnableCamera";
            allow_attendee_to_enable_mic, set_allow_attendee_to_enable_mic: bool => "allowAttendeeToEnableMic";
            allowed_presenters, set_allowed_presenters: OnlineMeetingPresenters => "allowedPresenters";
            allow_meeting_chat, set_allow_meeting_chat: MeetingChatMode => "allowMeetingChat";
            allow_teamwork_reactions, set_allow_teamwork_reactions: bool => "allowTeamworkReactions";
            audio_conferencing, set_audio_conferencing: AudioConferencing => "audioConferencing";
            chat_info, set_chat_info: ChatInfo => "chatInfo";
            is_entry_exit_announced, set_is_entry_exit_announced: bool => "isEntryExitAnnounced";
            join_information, set_join_information: ItemBody => "joinInformation";
            join_meeting_id_settings, set_join_meeting_id_settings: JoinMeetingIdSettings => "joinMeetingIdSettings";
            join_web_url, set_join_web_url: String => "joinWebUrl";
            lobby_bypass_settings, set_lobby_bypass_settings: LobbyBypassSettings => "lobbyBypassSettings";
            record_automatically, set_record_automatically: bool => "recordAutomatically";
            subject, set_subject: String => "subject";
            video_teleconference_id, set_video_teleconference_id: String => "videoTeleconferenceId";
        }
    }
}

backed_model! {
    /// A Teams meeting.
    pub struct OnlineMeeting {
        odata_type: "#microsoft.graph.onlineMeeting";
        properties {
            id, set_id: String => "id";
            allow_attendee_to_enable_camera, set_allow_attendee_to_enable_camera: bool => "allowAttendeeToEnableCamera";
            allow_attendee_to_enable_mic, set_allow_attendee_to_enable_mic: bool => "allowAttendeeToEnableMic";
            allowed_presenters, set_allowed_presenters: OnlineMeetingPresenters => "allowedPresenters";
            allow_meeting_chat, set_allow_meeting_chat: MeetingChatMode => "allowMeetingChat";
            allow_teamwork_reactions, set_allow_teamwork_reactions: bool => "allowTeamworkReactions";
            audio_conferencing, set_audio_conferencing: AudioConferencing => "audioConferencing";
            chat_info, set_chat_info: ChatInfo => "chatInfo";
            is_entry_exit_announced, set_is_entry_exit_announced: bool => "isEntryExitAnnounced";
            join_information, set_join_information: ItemBody => "joinInformation";
            join_meeting_id_settings, set_join_meeting_id_settings: JoinMeetingIdSettings => "joinMeetingIdSettings";
            join_web_url, set_join_web_url: String => "joinWebUrl";
            lobby_bypass_settings, set_lobby_bypass_settings: LobbyBypassSettings => "lobbyBypassSettings";
            record_automatically, set_record_automatically: bool => "recordAutomatically";
            subject, set_subject: String => "subject";
            video_teleconference_id, set_video_teleconference_id: String => "videoTeleconferenceId";
            broadcast_settings, set_broadcast_settings: BroadcastMeetingSettings => "broadcastSettings";
            end_date_time, set_end_date_time: DateTime<Utc> => "endDateTime";
            /// Caller-supplied key for idempotent creation.
            external_id, set_external_id: String => "externalId";
            is_broadcast, set_is_broadcast: bool => "isBroadcast";
            participants, set_participants: MeetingParticipants => "participants";
            start_date_time, set_start_date_time: DateTime<Utc> => "startDateTime";
        }
        read_only {
            creation_date_time, set_creation_date_time: DateTime<Utc> => "creationDateTime";
        }
    }
}

backed_model! {
    /// A session of a virtual event such as a webinar or town hall.
    pub struct VirtualEventSession {
        odata_type: "#microsoft.graph.virtualEventSession";
        properties {
            id, set_id: String => "id";
            allow_attendee_to_enable_camera, set_allow_attendee_to_enable_camera: bool => "allowAttendeeToEnableCamera";
            allow_attendee_to_enable_mic, set_allow_attendee_to_enable_mic: bool => "allowAttendeeToEnableMic";
            allowed_presenters, set_allowed_presenters: OnlineMeetingPresenters => "allowedPresenters";
            allow_meeting_chat, set_allow_meeting_chat: MeetingChatMode => "allowMeetingChat";
            allow_teamwork_reactions, set_allow_teamwork_reactions: bool => "allowTeamworkReactions";
            audio_conferencing, set_audio_conferencing: AudioConferencing => "audioConferencing";
            chat_info, set_chat_info: ChatInfo => "chatInfo";
            is_entry_exit_announced, set_is_entry_exit_announced: bool => "isEntryExitAnnounced";
            join_information, set_join_information: ItemBody => "joinInformation";
            join_meeting_id_settings, set_join_meeting_id_settings: JoinMeetingIdSettings => "joinMeetingIdSettings";
            join_web_url, set_join_web_url: String => "joinWebUrl";
            lobby_bypass_settings, set_lobby_bypass_settings: LobbyBypassSettings => "lobbyBypassSettings";
            record_automatically, set_record_automatically: bool => "recordAutomatically";
            subject, set_subject: String => "subject";
            video_teleconference_id, set_video_teleconference_id: String => "videoTeleconferenceId";
            end_date_time, set_end_date_time: DateTimeTimeZone => "endDateTime";
            start_date_time, set_start_date_time: DateTimeTimeZone => "startDateTime";
        }
    }
}

discriminated_union! {
    /// An online meeting, selected by `@odata.type`.
    pub enum OnlineMeetingKind {
        property: "@odata.type";
        base: Base(OnlineMeetingBase);
        variants {
            "#microsoft.graph.onlineMeeting" => Meeting(OnlineMeeting),
            "#microsoft.graph.virtualEventSession" => VirtualEventSession(VirtualEventSession),
        }
    }
}

impl OnlineMeetingKind {
    pub fn id(&self) -> Result<Option<String>, StoreError> {
        self.backing_store().get("id")
    }

    pub fn subject(&self) -> Result<Option<String>, StoreError> {
        self.backing_store().get("subject")
    }

    pub fn join_web_url(&self) -> Result<Option<String>, StoreError> {
        self.backing_store().get("joinWebUrl")
    }
}

backed_model! {
    /// Dial-in details of a meeting.
    pub struct AudioConferencing {
        odata_type: "#microsoft.graph.audioConferencing";
        properties {
            conference_id, set_conference_id: String => "conferenceId";
            dialin_url, set_dialin_url: String => "dialinUrl";
            toll_free_numbers, set_toll_free_numbers: Vec<String> => "tollFreeNumbers";
            toll_numbers, set_toll_numbers: Vec<String> => "tollNumbers";
        }
    }
}

backed_model! {
    /// Settings of a live event (broadcast) meeting.
    pub struct BroadcastMeetingSettings {
        odata_type: "#microsoft.graph.broadcastMeetingSettings";
        properties {
            allowed_audience, set_allowed_audience: BroadcastMeetingAudience => "allowedAudience";
            captions, set_captions: BroadcastMeetingCaptionSettings => "captions";
            is_attendee_report_enabled, set_is_attendee_report_enabled: bool => "isAttendeeReportEnabled";
            is_question_and_answer_enabled, set_is_question_and_answer_enabled: bool => "isQuestionAndAnswerEnabled";
            is_recording_enabled, set_is_recording_enabled: bool => "isRecordingEnabled";
            is_video_on_demand_enabled, set_is_video_on_demand_enabled: bool => "isVideoOnDemandEnabled";
        }
    }
}

backed_model! {
    pub struct BroadcastMeetingCaptionSettings {
        odata_type: "#microsoft.graph.broadcastMeetingCaptionSettings";
        properties {
            is_caption_enabled, set_is_caption_enabled: bool => "isCaptionEnabled";
            spoken_language, set_spoken_language: String => "spokenLanguage";
            translation_languages, set_translation_languages: Vec<String> => "translationLanguages";
        }
    }
}

backed_model! {
    /// Join meeting ID and passcode of a meeting.
    pub struct JoinMeetingIdSettings {
        odata_type: "#microsoft.graph.joinMeetingIdSettings";
        properties {
            is_passcode_required, set_is_passcode_required: bool => "isPasscodeRequired";
            join_meeting_id, set_join_meeting_id: String => "joinMeetingId";
            passcode, set_passcode: String => "passcode";
        }
    }
}

backed_model! {
    /// Who skips the lobby.
    pub struct LobbyBypassSettings {
        odata_type: "#microsoft.graph.lobbyBypassSettings";
        properties {
            is_dial_in_bypass_enabled, set_is_dial_in_bypass_enabled: bool => "isDialInBypassEnabled";
            /// One of `organizer`, `organization`, `organizationAndFederated`,
            /// `everyone`, `invited` or `organizationExcludingGuests`.
            scope, set_scope: String => "scope";
        }
    }
}

backed_model! {
    /// Organizer and attendees of a meeting.
    pub struct MeetingParticipants {
        odata_type: "#microsoft.graph.meetingParticipants";
        properties {
            attendees, set_attendees: Vec<MeetingParticipantInfo> => "attendees";
            organizer, set_organizer: MeetingParticipantInfo => "organizer";
        }
    }
}

backed_model! {
    /// One meeting participant.
    pub struct MeetingParticipantInfo {
        odata_type: "#microsoft.graph.meetingParticipantInfo";
        properties {
            identity, set_identity: IdentitySet => "identity";
            role, set_role: String => "role";
            upn, set_upn: String => "upn";
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_meeting_decodes_by_type() {
        let meeting: OnlineMeetingKind = serde_json::from_value(json!({
            "@odata.type": "#microsoft.graph.onlineMeeting",
            "id": "m1",
            "subject": "Design review",
            "startDateTime": "2024-05-01T15:00:00Z",
            "creationDateTime": "2024-04-30T10:00:00Z",
            "allowedPresenters": "organization",
            "joinWebUrl": "https://teams.example.com/l/meetup-join/x"
        }))
        .unwrap();

        assert_eq!(meeting.subject().unwrap().as_deref(), Some("Design review"));
        let OnlineMeetingKind::Meeting(inner) = &meeting else {
            panic!("expected online meeting");
        };
        assert_eq!(
            inner.allowed_presenters().unwrap(),
            Some(OnlineMeetingPresenters::Organization)
        );
        assert!(inner.start_date_time().unwrap().is_some());
    }

    #[test]
    fn test_creation_time_is_not_sent() {
        let mut meeting: OnlineMeeting = serde_json::from_value(json!({
            "id": "m1",
            "creationDateTime": "2024-04-30T10:00:00Z"
        }))
        .unwrap();
        meeting.set_subject(Some("Renamed".to_string())).unwrap();
        let json = serde_json::to_value(&meeting).unwrap();
        assert!(json.get("creationDateTime").is_none());
        assert_eq!(json["subject"], "Renamed");
    }

    #[test]
    fn test_virtual_event_session_times() {
        let session: OnlineMeetingKind = serde_json::from_value(json!({
            "@odata.type": "#microsoft.graph.virtualEventSession",
            "id": "s1",
            "startDateTime": {"dateTime": "2024-05-01T15:00:00.0000000", "timeZone": "UTC"}
        }))
        .unwrap();
        let OnlineMeetingKind::VirtualEventSession(inner) = session else {
            panic!("expected virtual event session");
        };
        let start = inner.start_date_time().unwrap().unwrap();
        assert!(start.to_utc().unwrap().is_some());
    }

    #[test]
    fn test_broadcast_settings() {
        let meeting: OnlineMeeting = serde_json::from_value(json!({
            "isBroadcast": true,
            "broadcastSettings": {
                "allowedAudience": "organization",
                "isRecordingEnabled": true,
                "captions": {"isCaptionEnabled": true, "translationLanguages": ["fr", "de"]}
            }
        }))
        .unwrap();
        let settings = meeting.broadcast_settings().unwrap().unwrap();
        assert_eq!(
            settings.allowed_audience().unwrap(),
            Some(BroadcastMeetingAudience::Organization)
        );
        let captions = settings.captions().unwrap().unwrap();
        assert_eq!(captions.translation_languages().unwrap().unwrap(), vec!["fr", "de"]);
    }
}
