use chrono::{DateTime, Utc};
use switchboard::backed_model;

use super::enums::{MediaStreamDirection, NetworkConnectionType};

backed_model! {
    /// Media exchanged in a segment, with device and network on each side.
    pub struct Media {
        odata_type: "#microsoft.graph.callRecords.media";
        properties {
            callee_device, set_callee_device: DeviceInfo => "calleeDevice";
            callee_network, set_callee_network: NetworkInfo => "calleeNetwork";
            caller_device, set_caller_device: DeviceInfo => "callerDevice";
            caller_network, set_caller_network: NetworkInfo => "callerNetwork";
            /// `main-audio`, `main-video` or `applicationsharing-video`.
            label, set_label: String => "label";
            streams, set_streams: Vec<MediaStream> => "streams";
        }
    }
}

backed_model! {
    /// Quality statistics of one direction of a media stream.
    ///
    /// Durations are ISO 8601 strings such as `PT0.02S`.
    pub struct MediaStream {
        odata_type: "#microsoft.graph.callRecords.mediaStream";
        properties {
            average_audio_degradation, set_average_audio_degradation: f32 => "averageAudioDegradation";
            average_jitter, set_average_jitter: String => "averageJitter";
            average_packet_loss_rate, set_average_packet_loss_rate: f32 => "averagePacketLossRate";
            average_round_trip_time, set_average_round_trip_time: String => "averageRoundTripTime";
            end_date_time, set_end_date_time: DateTime<Utc> => "endDateTime";
            max_jitter, set_max_jitter: String => "maxJitter";
            max_packet_loss_rate, set_max_packet_loss_rate: f32 => "maxPacketLossRate";
            max_round_trip_time, set_max_round_trip_time: String => "maxRoundTripTime";
            packet_utilization, set_packet_utilization: i64 => "packetUtilization";
            start_date_time, set_start_date_time: DateTime<Utc> => "startDateTime";
            stream_direction, set_stream_direction: MediaStreamDirection => "streamDirection";
            stream_id, set_stream_id: String => "streamId";
            was_media_bypassed, set_was_media_bypassed: bool => "wasMediaBypassed";
        }
    }
}

backed_model! {
    /// Capture and render devices of an endpoint.
    pub struct DeviceInfo {
        odata_type: "#microsoft.graph.callRecords.deviceInfo";
        properties {
            capture_device_driver, set_capture_device_driver: String => "captureDeviceDriver";
            capture_device_name, set_capture_device_name: String => "captureDeviceName";
            low_speech_level_event_ratio, set_low_speech_level_event_ratio: f32 => "lowSpeechLevelEventRatio";
            render_device_driver, set_render_device_driver: String => "renderDeviceDriver";
            render_device_name, set_render_device_name: String => "renderDeviceName";
        }
    }
}

backed_model! {
    /// Network conditions of an endpoint.
    pub struct NetworkInfo {
        odata_type: "#microsoft.graph.callRecords.networkInfo";
        properties {
            bandwidth_low_event_ratio, set_bandwidth_low_event_ratio: f32 => "bandwidthLowEventRatio";
            connection_type, set_connection_type: NetworkConnectionType => "connectionType";
            ip_address, set_ip_address: String => "ipAddress";
            link_speed, set_link_speed: i64 => "linkSpeed";
            reflexive_ip_address, set_reflexive_ip_address: String => "reflexiveIPAddress";
            subnet, set_subnet: String => "subnet";
            wifi_signal_strength, set_wifi_signal_strength: i32 => "wifiSignalStrength";
        }
    }
}
