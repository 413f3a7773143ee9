use bunian_model::{
    AgricultureProjectPatch, AgricultureType, AverageBudget, BudgetTrend, MarketMood, MarketTrend,
    MarketTrendPatch, NewProject, NewPropertyRequest, Project, ProjectCategory, ProjectPatch,
    ProjectSpecifications, ProjectStatus, RequestPurpose, RequestStatus,
};
use bunian_types::RecordId;
use pretty_assertions::assert_eq;

fn make_project() -> Project {
    Project {
        id: RecordId::parse("1").unwrap(),
        title: "Lekki Oceanview Residence".to_string(),
        description: "Luxury villa".to_string(),
        full_description: "An exquisite waterfront property.".to_string(),
        category: ProjectCategory::Residential,
        status: ProjectStatus::Sold,
        location: "Lekki Phase 1, Lagos".to_string(),
        image: "a.jpg".to_string(),
        images: vec!["a.jpg".to_string(), "b.jpg".to_string()],
        featured: true,
        specifications: ProjectSpecifications {
            area: "850 sqm".to_string(),
            bedrooms: Some(5),
            bathrooms: Some(6),
            floors: Some(3),
            year_completed: "2023".to_string(),
        },
    }
}

fn make_trend() -> MarketTrend {
    MarketTrend {
        trending_areas: vec!["Lekki Phase 1".to_string(), "Ikoyi".to_string()],
        market_mood: MarketMood::Bullish,
        market_mood_value: 72,
        most_requested_type: "3-4 Bedroom Apartments".to_string(),
        average_budget: AverageBudget {
            min: "₦80M".to_string(),
            max: "₦250M".to_string(),
            trend: BudgetTrend::Up,
        },
        insights: vec!["Luxury apartments seeing 15% YoY growth".to_string()],
        last_updated: "December 2024".to_string(),
    }
}

// ── Project patches ──────────────────────────────────────────────

#[test]
fn patch_changes_only_set_fields() {
    let mut p = make_project();
    let patch = ProjectPatch {
        title: Some("Renamed Villa".to_string()),
        status: Some(ProjectStatus::Completed),
        ..Default::default()
    };
    patch.apply(&mut p);

    let original = make_project();
    assert_eq!(p.title, "Renamed Villa");
    assert_eq!(p.status, ProjectStatus::Completed);
    assert_eq!(p.description, original.description);
    assert_eq!(p.category, original.category);
    assert_eq!(p.specifications, original.specifications);
}

#[test]
fn empty_patch_is_identity() {
    let mut p = make_project();
    ProjectPatch::default().apply(&mut p);
    assert_eq!(p, make_project());
}

#[test]
fn patch_specifications_replaces_whole_block() {
    let mut p = make_project();
    let patch = ProjectPatch {
        specifications: Some(ProjectSpecifications {
            area: "900 sqm".to_string(),
            bedrooms: None,
            bathrooms: None,
            floors: None,
            year_completed: "2024".to_string(),
        }),
        ..Default::default()
    };
    patch.apply(&mut p);

    // The old bedrooms/bathrooms do not survive a specifications replacement.
    assert_eq!(p.specifications.area, "900 sqm");
    assert_eq!(p.specifications.bedrooms, None);
    assert_eq!(p.specifications.bathrooms, None);
}

#[test]
fn patch_decodes_from_camel_case_json() {
    let patch: ProjectPatch =
        serde_json::from_str(r#"{"fullDescription": "Updated copy", "featured": false}"#).unwrap();
    assert_eq!(patch.full_description, Some("Updated copy".to_string()));
    assert_eq!(patch.featured, Some(false));
    assert_eq!(patch.title, None);
}

// ── Agriculture patches ──────────────────────────────────────────

#[test]
fn agriculture_patch_decodes_type_field() {
    let patch: AgricultureProjectPatch =
        serde_json::from_str(r#"{"type": "processing"}"#).unwrap();
    assert_eq!(patch.kind, Some(AgricultureType::Processing));
}

// ── New-record inputs ────────────────────────────────────────────

#[test]
fn new_project_carries_fields_into_record() {
    let new = NewProject {
        title: "Test Villa".to_string(),
        description: "d".to_string(),
        full_description: "fd".to_string(),
        category: ProjectCategory::Residential,
        status: ProjectStatus::Completed,
        location: "Ikoyi".to_string(),
        image: "x.jpg".to_string(),
        images: vec![],
        featured: false,
        specifications: ProjectSpecifications {
            area: "300 sqm".to_string(),
            bedrooms: Some(4),
            bathrooms: None,
            floors: None,
            year_completed: "2025".to_string(),
        },
    };
    let id = RecordId::from_millis(1_734_000_000_000);
    let p = new.into_record(id.clone());
    assert_eq!(p.id, id);
    assert_eq!(p.title, "Test Villa");
    assert_eq!(p.specifications.bedrooms, Some(4));
}

#[test]
fn new_request_starts_pending_with_stamp() {
    let new = NewPropertyRequest {
        property_type: "Warehouse".to_string(),
        location: "Apapa".to_string(),
        budget: "₦25,000,000/year".to_string(),
        purpose: RequestPurpose::Lease,
        notes: "Needs port access".to_string(),
        name: "Oluwaseun Adeyemi".to_string(),
        email: "olu@logisticsng.com".to_string(),
        phone: "+234 804 567 8901".to_string(),
    };
    let r = new.into_record(RecordId::parse("99").unwrap(), "2025-01-15".to_string());
    assert_eq!(r.status, RequestStatus::Pending);
    assert_eq!(r.created_at, "2025-01-15");
    assert_eq!(r.purpose, RequestPurpose::Lease);
}

// ── Trend patches ────────────────────────────────────────────────

#[test]
fn trend_patch_changes_only_set_fields() {
    let mut t = make_trend();
    let patch = MarketTrendPatch {
        most_requested_type: Some("Detached Duplexes".to_string()),
        ..Default::default()
    };
    patch.apply(&mut t);

    let original = make_trend();
    assert_eq!(t.most_requested_type, "Detached Duplexes");
    assert_eq!(t.trending_areas, original.trending_areas);
    assert_eq!(t.market_mood, original.market_mood);
    assert_eq!(t.average_budget, original.average_budget);
    // apply never touches the stamp; that is the panel's job
    assert_eq!(t.last_updated, original.last_updated);
}

#[test]
fn trend_patch_ignores_last_updated_in_json() {
    // A caller-supplied stamp has no field to land in and is dropped.
    let patch: MarketTrendPatch =
        serde_json::from_str(r#"{"marketMoodValue": 55, "lastUpdated": "January 1990"}"#).unwrap();
    assert_eq!(patch.market_mood_value, Some(55));

    let mut t = make_trend();
    patch.apply(&mut t);
    assert_eq!(t.market_mood_value, 55);
    assert_eq!(t.last_updated, "December 2024");
}

#[test]
fn trend_patch_replaces_budget_block() {
    let mut t = make_trend();
    let patch = MarketTrendPatch {
        average_budget: Some(AverageBudget {
            min: "₦100M".to_string(),
            max: "₦300M".to_string(),
            trend: BudgetTrend::Stable,
        }),
        ..Default::default()
    };
    patch.apply(&mut t);
    assert_eq!(t.average_budget.min, "₦100M");
    assert_eq!(t.average_budget.trend, BudgetTrend::Stable);
}
