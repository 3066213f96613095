//! Small complex types shared by meetings and presence.

use chrono::{DateTime, NaiveDateTime, Utc};
use switchboard::{backed_model, StoreError};

use super::enums::BodyType;

backed_model! {
    /// Rich text content.
    pub struct ItemBody {
        odata_type: "#microsoft.graph.itemBody";
        properties {
            content, set_content: String => "content";
            content_type, set_content_type: BodyType => "contentType";
        }
    }
}

impl ItemBody {
    /// Creates a plain-text body.
    pub fn text(content: impl Into<String>) -> Result<Self, StoreError> {
        let mut body = Self::new();
        body.set_content(Some(content.into()))?;
        body.set_content_type(Some(BodyType::Text))?;
        Ok(body)
    }
}

backed_model! {
    /// A wall-clock time in a named time zone.
    pub struct DateTimeTimeZone {
        odata_type: "#microsoft.graph.dateTimeTimeZone";
        properties {
            /// Local time in `yyyy-MM-ddTHH:mm:ss.fffffff` form.
            date_time, set_date_time: String => "dateTime";
            /// Windows or IANA time zone name.
            time_zone, set_time_zone: String => "timeZone";
        }
    }
}

impl DateTimeTimeZone {
    /// Expresses a UTC instant.
    pub fn utc(instant: DateTime<Utc>) -> Result<Self, StoreError> {
        let mut value = Self::new();
        value.set_date_time(Some(instant.format("%Y-%m-%dT%H:%M:%S%.7f").to_string()))?;
        value.set_time_zone(Some("UTC".to_string()))?;
        Ok(value)
    }

    /// Parses `dateTime` as a UTC instant when the zone is UTC.
    ///
    /// Returns `Ok(None)` for other zones or unparseable times.
    pub fn to_utc(&self) -> Result<Option<DateTime<Utc>>, StoreError> {
        if self.time_zone()?.as_deref() != Some("UTC") {
            return Ok(None);
        }
        Ok(self
            .date_time()?
            .and_then(|raw| NaiveDateTime::parse_from_str(&raw, "%Y-%m-%dT%H:%M:%S%.f").ok())
            .map(|naive| naive.and_utc()))
    }
}
