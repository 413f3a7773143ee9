use bunian_types::{Record, RecordId};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::ParseEnumError;

/// A farming or agro-processing operation in the portfolio.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AgricultureProject {
    pub id: RecordId,
    pub title: String,
    pub description: String,
    pub full_description: String,
    #[serde(rename = "type")]
    pub kind: AgricultureType,
    pub status: AgricultureStatus,
    pub location: String,
    pub image: String,
    pub images: Vec<String>,
    pub featured: bool,
    pub specifications: AgricultureSpecifications,
}

impl Record for AgricultureProject {
    fn id(&self) -> &RecordId {
        &self.id
    }
}

/// Capacity figures shown on an agriculture detail page. Which fields are
/// present depends on the operation: farms report area, facilities capacity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AgricultureSpecifications {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub area: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub capacity: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub output: Option<String>,
    pub year_started: String,
}

/// Kind of agricultural operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AgricultureType {
    Crop,
    Livestock,
    Processing,
}

impl AgricultureType {
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Crop => "crop",
            Self::Livestock => "livestock",
            Self::Processing => "processing",
        }
    }
}

impl fmt::Display for AgricultureType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AgricultureType {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "crop" => Ok(Self::Crop),
            "livestock" => Ok(Self::Livestock),
            "processing" => Ok(Self::Processing),
            other => Err(ParseEnumError::new("agriculture type", other)),
        }
    }
}

/// Operational state of an agriculture project.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AgricultureStatus {
    Active,
    Completed,
    Planned,
}

impl AgricultureStatus {
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Completed => "completed",
            Self::Planned => "planned",
        }
    }
}

impl fmt::Display for AgricultureStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AgricultureStatus {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "active" => Ok(Self::Active),
            "completed" => Ok(Self::Completed),
            "planned" => Ok(Self::Planned),
            other => Err(ParseEnumError::new("agriculture status", other)),
        }
    }
}

/// Input for creating an agriculture project; the collection assigns the id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewAgricultureProject {
    pub title: String,
    pub description: String,
    pub full_description: String,
    #[serde(rename = "type")]
    pub kind: AgricultureType,
    pub status: AgricultureStatus,
    pub location: String,
    pub image: String,
    pub images: Vec<String>,
    pub featured: bool,
    pub specifications: AgricultureSpecifications,
}

impl NewAgricultureProject {
    /// Builds the stored record once an id has been assigned.
    #[must_use]
    pub fn into_record(self, id: RecordId) -> AgricultureProject {
        AgricultureProject {
            id,
            title: self.title,
            description: self.description,
            full_description: self.full_description,
            kind: self.kind,
            status: self.status,
            location: self.location,
            image: self.image,
            images: self.images,
            featured: self.featured,
            specifications: self.specifications,
        }
    }
}

/// Partial update for an agriculture project. Only supplied fields change;
/// a supplied `specifications` replaces the whole block.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AgricultureProjectPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub full_description: Option<String>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<AgricultureType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<AgricultureStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub images: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub featured: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub specifications: Option<AgricultureSpecifications>,
}

impl AgricultureProjectPatch {
    /// Applies the patch, leaving unset fields untouched.
    pub fn apply(self, project: &mut AgricultureProject) {
        if let Some(v) = self.title {
            project.title = v;
        }
        if let Some(v) = self.description {
            project.description = v;
        }
        if let Some(v) = self.full_description {
            project.full_description = v;
        }
        if let Some(v) = self.kind {
            project.kind = v;
        }
        if let Some(v) = self.status {
            project.status = v;
        }
        if let Some(v) = self.location {
            project.location = v;
        }
        if let Some(v) = self.image {
            project.image = v;
        }
        if let Some(v) = self.images {
            project.images = v;
        }
        if let Some(v) = self.featured {
            project.featured = v;
        }
        if let Some(v) = self.specifications {
            project.specifications = v;
        }
    }
}
