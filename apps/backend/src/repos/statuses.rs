use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

pub use crate::entities::invitation_status::StatusName;
use crate::entities::invitation_status;
use crate::errors::domain::DomainError;

impl StatusName {
    pub const ALL: [StatusName; 3] = [Self::Pending, Self::Accepted, Self::Rejected];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Accepted => "accepted",
            Self::Rejected => "rejected",
        }
    }
}

impl fmt::Display for StatusName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Exact, case-sensitive match. Anything else is reported as an unknown status.
impl FromStr for StatusName {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|status| status.as_str() == s)
            .ok_or_else(DomainError::status_not_found)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InvitationStatus {
    pub id: i32,
    pub status_name: StatusName,
}

impl From<invitation_status::Model> for InvitationStatus {
    fn from(model: invitation_status::Model) -> Self {
        Self {
            id: model.id,
            status_name: model.status_name,
        }
    }
}
