//! Entity model for the Bunian admin panel.
//!
//! Defines the four persisted record families:
//! - [`Project`] — real-estate portfolio entries
//! - [`AgricultureProject`] — farm and processing operations
//! - [`PropertyRequest`] — inbound property inquiries
//! - [`MarketTrend`] — the single market-snapshot record
//!
//! Collection entities carry a `New*` input type (everything but the id) and
//! a `*Patch` partial update whose unset fields leave the record untouched.
//! Serialized field names stay camelCase and enum values stay lowercase so
//! stored JSON remains byte-compatible with what earlier deployments wrote.

mod agriculture;
mod project;
mod request;
mod trends;

pub use agriculture::{
    AgricultureProject, AgricultureProjectPatch, AgricultureSpecifications, AgricultureStatus,
    AgricultureType, NewAgricultureProject,
};
pub use project::{
    NewProject, Project, ProjectCategory, ProjectPatch, ProjectSpecifications, ProjectStatus,
};
pub use request::{NewPropertyRequest, PropertyRequest, RequestPurpose, RequestStatus};
pub use trends::{AverageBudget, BudgetTrend, MarketMood, MarketTrend, MarketTrendPatch};

/// Error returned when an enum value's wire form is not recognized.
#[derive(Debug, thiserror::Error)]
#[error("unrecognized {kind} value: {value:?}")]
pub struct ParseEnumError {
    kind: &'static str,
    value: String,
}

impl ParseEnumError {
    pub(crate) fn new(kind: &'static str, value: &str) -> Self {
        Self {
            kind,
            value: value.to_string(),
        }
    }
}
