use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};
use time::OffsetDateTime;

use crate::entities::guest_activities;
use crate::errors::domain::DomainError;

/// Free-form key/value payload attached to an activity.
pub type ActivityData = Map<String, Value>;

/// Append-only analytics event recorded for a guest.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GuestActivity {
    pub id: i64,
    pub guest_id: i64,
    pub activity_type: String,
    #[serde(default, deserialize_with = "null_as_zero")]
    pub session_duration: i32,
    #[serde(default)]
    pub additional_data: ActivityData,
    #[serde(with = "time::serde::rfc3339")]
    pub timestamp: OffsetDateTime,
}

impl TryFrom<guest_activities::Model> for GuestActivity {
    type Error = DomainError;

    fn try_from(model: guest_activities::Model) -> Result<Self, Self::Error> {
        let additional_data = match model.additional_data {
            Value::Object(map) => map,
            Value::Null => ActivityData::new(),
            other => {
                return Err(DomainError::data_corruption(format!(
                    "activity {} additional_data is not an object: {other}",
                    model.id
                )))
            }
        };

        Ok(Self {
            id: model.id,
            guest_id: model.guest_id,
            activity_type: model.activity_type,
            session_duration: model.session_duration,
            additional_data,
            timestamp: model.timestamp,
        })
    }
}

/// Activity to record. Duration defaults to 0 and data to an empty object.
///
/// An explicit `null` duration is read as 0; fractional durations are
/// rejected.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewActivity {
    pub activity_type: String,
    #[serde(default, deserialize_with = "null_as_zero")]
    pub session_duration: i32,
    #[serde(default)]
    pub additional_data: ActivityData,
}

impl NewActivity {
    pub fn new(activity_type: impl Into<String>) -> Self {
        Self {
            activity_type: activity_type.into(),
            session_duration: 0,
            additional_data: ActivityData::new(),
        }
    }

    pub fn with_session_duration(mut self, seconds: i32) -> Self {
        self.session_duration = seconds;
        self
    }

    pub fn with_additional_data(mut self, data: ActivityData) -> Self {
        self.additional_data = data;
        self
    }
}

fn null_as_zero<'de, D>(deserializer: D) -> Result<i32, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<i32>::deserialize(deserializer).map(Option::unwrap_or_default)
}
