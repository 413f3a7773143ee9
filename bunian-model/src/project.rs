use bunian_types::{Record, RecordId};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::ParseEnumError;

/// A real-estate development in the portfolio.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: RecordId,
    pub title: String,
    pub description: String,
    pub full_description: String,
    pub category: ProjectCategory,
    pub status: ProjectStatus,
    pub location: String,
    /// Primary display image URL.
    pub image: String,
    pub images: Vec<String>,
    pub featured: bool,
    pub specifications: ProjectSpecifications,
}

impl Record for Project {
    fn id(&self) -> &RecordId {
        &self.id
    }
}

/// Physical characteristics shown on a project detail page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectSpecifications {
    pub area: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bedrooms: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bathrooms: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub floors: Option<u32>,
    pub year_completed: String,
}

/// Market segment a project belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProjectCategory {
    Residential,
    Commercial,
}

impl ProjectCategory {
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Residential => "residential",
            Self::Commercial => "commercial",
        }
    }
}

impl fmt::Display for ProjectCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ProjectCategory {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "residential" => Ok(Self::Residential),
            "commercial" => Ok(Self::Commercial),
            other => Err(ParseEnumError::new("project category", other)),
        }
    }
}

/// Sales lifecycle state of a project.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProjectStatus {
    Sold,
    Leased,
    Completed,
}

impl ProjectStatus {
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Sold => "sold",
            Self::Leased => "leased",
            Self::Completed => "completed",
        }
    }
}

impl fmt::Display for ProjectStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ProjectStatus {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "sold" => Ok(Self::Sold),
            "leased" => Ok(Self::Leased),
            "completed" => Ok(Self::Completed),
            other => Err(ParseEnumError::new("project status", other)),
        }
    }
}

/// Input for creating a project; the collection assigns the id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewProject {
    pub title: String,
    pub description: String,
    pub full_description: String,
    pub category: ProjectCategory,
    pub status: ProjectStatus,
    pub location: String,
    pub image: String,
    pub images: Vec<String>,
    pub featured: bool,
    pub specifications: ProjectSpecifications,
}

impl NewProject {
    /// Builds the stored record once an id has been assigned.
    #[must_use]
    pub fn into_record(self, id: RecordId) -> Project {
        Project {
            id,
            title: self.title,
            description: self.description,
            full_description: self.full_description,
            category: self.category,
            status: self.status,
            location: self.location,
            image: self.image,
            images: self.images,
            featured: self.featured,
            specifications: self.specifications,
        }
    }
}

/// Partial update for a project. Only supplied fields change; a supplied
/// `specifications` replaces the whole block.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProjectPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub full_description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<ProjectCategory>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<ProjectStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub images: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub featured: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub specifications: Option<ProjectSpecifications>,
}

impl ProjectPatch {
    /// Applies the patch, leaving unset fields untouched.
    pub fn apply(self, project: &mut Project) {
        if let Some(v) = self.title {
            project.title = v;
        }
        if let Some(v) = self.description {
            project.description = v;
        }
        if let Some(v) = self.full_description {
            project.full_description = v;
        }
        if let Some(v) = self.category {
            project.category = v;
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
