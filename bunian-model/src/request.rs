use bunian_types::{Record, RecordId};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::ParseEnumError;

/// An inbound property inquiry captured from the public request form.
///
/// Requests are produced externally; the admin side only transitions their
/// status. Free-text fields (notes in particular) may contain commas and
/// newlines and must be escaped on export.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PropertyRequest {
    pub id: RecordId,
    pub property_type: String,
    pub location: String,
    pub budget: String,
    pub purpose: RequestPurpose,
    pub notes: String,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub status: RequestStatus,
    /// Submission date as `YYYY-MM-DD`.
    pub created_at: String,
}

impl Record for PropertyRequest {
    fn id(&self) -> &RecordId {
        &self.id
    }
}

/// Whether the requester wants to buy or lease.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RequestPurpose {
    Buy,
    Lease,
}

impl RequestPurpose {
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Buy => "buy",
            Self::Lease => "lease",
        }
    }
}

impl fmt::Display for RequestPurpose {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RequestPurpose {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "buy" => Ok(Self::Buy),
            "lease" => Ok(Self::Lease),
            other => Err(ParseEnumError::new("request purpose", other)),
        }
    }
}

/// Triage state of a request in the admin inbox.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RequestStatus {
    Pending,
    Handled,
    Archived,
}

impl RequestStatus {
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Handled => "handled",
            Self::Archived => "archived",
        }
    }
}

impl fmt::Display for RequestStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RequestStatus {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(Self::Pending),
            "handled" => Ok(Self::Handled),
            "archived" => Ok(Self::Archived),
            other => Err(ParseEnumError::new("request status", other)),
        }
    }
}

/// Input captured by the public request form. The producer assigns the id,
/// stamps the submission date, and starts the request as pending.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewPropertyRequest {
    pub property_type: String,
    pub location: String,
    pub budget: String,
    pub purpose: RequestPurpose,
    pub notes: String,
    pub name: String,
    pub email: String,
    pub phone: String,
}

impl NewPropertyRequest {
    /// Builds the stored record with an assigned id and submission date.
    #[must_use]
    pub fn into_record(self, id: RecordId, created_at: String) -> PropertyRequest {
        PropertyRequest {
            id,
            property_type: self.property_type,
            location: self.location,
            budget: self.budget,
            purpose: self.purpose,
            notes: self.notes,
            name: self.name,
            email: self.email,
            phone: self.phone,
            status: RequestStatus::Pending,
            created_at,
        }
    }
}
