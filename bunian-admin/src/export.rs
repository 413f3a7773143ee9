//! CSV export of property requests.
//!
//! The column set and order match the spreadsheet the sales team already
//! works with, so they are fixed here rather than derived from the record
//! shape. Cells are quoted per RFC 4180, which the ad-hoc exports this
//! replaces never did.

use std::io;

use bunian_model::PropertyRequest;
use bunian_types::today;

use crate::error::AdminResult;

/// Header row of the request export, in column order.
pub const REQUEST_CSV_HEADERS: [&str; 10] = [
    "Name",
    "Email",
    "Phone",
    "Property Type",
    "Location",
    "Budget",
    "Purpose",
    "Notes",
    "Status",
    "Date",
];

/// Renders the requests as a CSV document with the fixed header row.
pub fn requests_to_csv(requests: &[PropertyRequest]) -> AdminResult<String> {
    let mut wtr = csv::Writer::from_writer(Vec::new());
    wtr.write_record(REQUEST_CSV_HEADERS)?;
    for req in requests {
        wtr.write_record([
            req.name.as_str(),
            req.email.as_str(),
            req.phone.as_str(),
            req.property_type.as_str(),
            req.location.as_str(),
            req.budget.as_str(),
            req.purpose.as_str(),
            req.notes.as_str(),
            req.status.as_str(),
            req.created_at.as_str(),
        ])?;
    }
    let buf = wtr.into_inner().map_err(|e| e.into_error())?;
    let csv = String::from_utf8(buf)
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
    Ok(csv)
}

/// The download filename for today's export: `property-requests-YYYY-MM-DD.csv`.
#[must_use]
pub fn export_filename() -> String {
    format!("property-requests-{}.csv", today())
}
