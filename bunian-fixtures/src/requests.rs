use bunian_model::{PropertyRequest, RequestPurpose, RequestStatus};

/// The four sample inquiries the requests inbox starts with.
#[must_use]
pub fn property_requests() -> Vec<PropertyRequest> {
    vec![
        PropertyRequest {
            id: "1".into(),
            property_type: "3-Bedroom Apartment".into(),
            location: "Lekki Phase 1".into(),
            budget: "₦80,000,000 - ₦120,000,000".into(),
            purpose: RequestPurpose::Buy,
            notes: "Looking for a modern apartment with ocean view. Preferably in a gated \
                community."
                .into(),
            name: "Chukwuemeka Okafor".into(),
            email: "c.okafor@email.com".into(),
            phone: "+234 801 234 5678".into(),
            status: RequestStatus::Pending,
            created_at: "2024-12-10".into(),
        },
        PropertyRequest {
            id: "2".into(),
            property_type: "Commercial Office Space".into(),
            location: "Victoria Island".into(),
            budget: "₦15,000,000/year".into(),
            purpose: RequestPurpose::Lease,
            notes: "Need 500sqm office space for tech startup. Open floor plan preferred.".into(),
            name: "Adaeze Nwachukwu".into(),
            email: "adaeze.n@techcorp.ng".into(),
            phone: "+234 802 345 6789".into(),
            status: RequestStatus::Pending,
            created_at: "2024-12-08".into(),
        },
        PropertyRequest {
            id: "3".into(),
            property_type: "5-Bedroom Duplex".into(),
            location: "Ikoyi".into(),
            budget: "₦200,000,000 - ₦350,000,000".into(),
            purpose: RequestPurpose::Buy,
            notes: "Executive home with pool and garden. Diplomatic zone preferred.".into(),
            name: "Ibrahim Mohammed".into(),
            email: "i.mohammed@diplo.gov".into(),
            phone: "+234 803 456 7890".into(),
            status: RequestStatus::Handled,
            created_at: "2024-12-05".into(),
        },
        PropertyRequest {
            id: "4".into(),
            property_type: "Warehouse".into(),
            location: "Apapa".into(),
            budget: "₦25,000,000/year".into(),
            purpose: RequestPurpose::Lease,
            notes: "Logistics company needs 2000sqm warehouse near port.".into(),
            name: "Oluwaseun Adeyemi".into(),
            email: "olu@logisticsng.com".into(),
            phone: "+234 804 567 8901".into(),
            status: RequestStatus::Pending,
            created_at: "2024-12-12".into(),
        },
    ]
}
