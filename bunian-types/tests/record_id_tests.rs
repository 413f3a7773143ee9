use bunian_types::{month_year, now_millis, today, RecordId};
use proptest::prelude::*;

// ── Construction ─────────────────────────────────────────────────

#[test]
fn new_is_decimal_millis() {
    let id = RecordId::new();
    assert!(!id.as_str().is_empty());
    assert!(id.as_str().chars().all(|c| c.is_ascii_digit()));
}

#[test]
fn from_millis_formats_decimal() {
    let id = RecordId::from_millis(1_734_000_000_000);
    assert_eq!(id.as_str(), "1734000000000");
}

#[test]
fn default_is_fresh() {
    let id = RecordId::default();
    assert!(!id.as_str().is_empty());
}

// ── Parsing ──────────────────────────────────────────────────────

#[test]
fn parse_accepts_seed_ordinals() {
    let id = RecordId::parse("1").unwrap();
    assert_eq!(id.as_str(), "1");
}

#[test]
fn parse_rejects_empty() {
    assert!(RecordId::parse("").is_err());
}

#[test]
fn from_str_matches_parse() {
    let id: RecordId = "42".parse().unwrap();
    assert_eq!(id, RecordId::parse("42").unwrap());
}

// ── Display / serde ──────────────────────────────────────────────

#[test]
fn display_is_raw_string() {
    let id = RecordId::parse("1734000000000").unwrap();
    assert_eq!(id.to_string(), "1734000000000");
}

#[test]
fn serializes_as_bare_string() {
    let id = RecordId::parse("7").unwrap();
    assert_eq!(serde_json::to_string(&id).unwrap(), "\"7\"");
}

#[test]
fn deserializes_from_bare_string() {
    let id: RecordId = serde_json::from_str("\"1734000000000\"").unwrap();
    assert_eq!(id.as_str(), "1734000000000");
}

// ── Date helpers ─────────────────────────────────────────────────

#[test]
fn today_is_iso_shaped() {
    let d = today();
    assert_eq!(d.len(), 10);
    assert_eq!(&d[4..5], "-");
    assert_eq!(&d[7..8], "-");
}

#[test]
fn month_year_is_long_form() {
    let m = month_year();
    let (month, year) = m.split_once(' ').unwrap();
    assert!(month.chars().next().unwrap().is_ascii_uppercase());
    assert_eq!(year.len(), 4);
    assert!(year.chars().all(|c| c.is_ascii_digit()));
}

#[test]
fn now_millis_is_positive() {
    assert!(now_millis() > 0);
}

// ── Properties ───────────────────────────────────────────────────

proptest! {
    #[test]
    fn millis_roundtrip_through_string(n in 0i64..=i64::MAX) {
        let id = RecordId::from_millis(n);
        let reparsed = RecordId::parse(id.as_str()).unwrap();
        prop_assert_eq!(id, reparsed);
    }

    #[test]
    fn nonempty_strings_parse(s in "[a-z0-9]{1,20}") {
        prop_assert!(RecordId::parse(&s).is_ok());
    }
}
