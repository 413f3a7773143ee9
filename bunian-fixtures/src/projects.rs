use bunian_model::{Project, ProjectCategory, ProjectSpecifications, ProjectStatus};

/// The six portfolio projects shown before any admin edits.
#[must_use]
pub fn projects() -> Vec<Project> {
    vec![
        Project {
            id: "1".into(),
            title: "Lekki Oceanview Residence".into(),
            description: "Luxury 5-bedroom waterfront villa with panoramic ocean views".into(),
            full_description: "An exquisite waterfront property featuring contemporary \
                architecture, infinity pool, smart home technology, and private beach access. \
                This masterpiece combines luxury living with sustainable design principles."
                .into(),
            category: ProjectCategory::Residential,
            status: ProjectStatus::Sold,
            location: "Lekki Phase 1, Lagos".into(),
            image: "https://images.unsplash.com/photo-1613490493576-7fde63acd811?w=800&q=80"
                .into(),
            images: vec![
                "https://images.unsplash.com/photo-1613490493576-7fde63acd811?w=800&q=80".into(),
                "https://images.unsplash.com/photo-1600596542815-ffad4c1539a9?w=800&q=80".into(),
                "https://images.unsplash.com/photo-1600607687939-ce8a6c25118c?w=800&q=80".into(),
            ],
            featured: true,
            specifications: ProjectSpecifications {
                area: "850 sqm".into(),
                bedrooms: Some(5),
                bathrooms: Some(6),
                floors: Some(3),
                year_completed: "2023".into(),
            },
        },
        Project {
            id: "2".into(),
            title: "Victoria Island Corporate Tower".into(),
            description: "Premium Grade A office complex in the heart of Lagos business district"
                .into(),
            full_description: "A state-of-the-art commercial development featuring flexible \
                floor plates, advanced building management systems, and LEED certification. \
                Perfect for multinational corporations seeking premium office space."
                .into(),
            category: ProjectCategory::Commercial,
            status: ProjectStatus::Leased,
            location: "Victoria Island, Lagos".into(),
            image: "https://images.unsplash.com/photo-1486406146926-c627a92ad1ab?w=800&q=80"
                .into(),
            images: vec![
                "https://images.unsplash.com/photo-1486406146926-c627a92ad1ab?w=800&q=80".into(),
                "https://images.unsplash.com/photo-1497366216548-37526070297c?w=800&q=80".into(),
            ],
            featured: true,
            specifications: ProjectSpecifications {
                area: "15,000 sqm".into(),
                bedrooms: None,
                bathrooms: None,
                floors: Some(18),
                year_completed: "2022".into(),
            },
        },
        Project {
            id: "3".into(),
            title: "Ikoyi Garden Estate".into(),
            description: "Exclusive gated community with 12 premium detached homes".into(),
            full_description: "A carefully curated residential development offering privacy, \
                security, and luxury. Each home features custom finishes, private gardens, and \
                access to shared amenities including a clubhouse and tennis courts."
                .into(),
            category: ProjectCategory::Residential,
            status: ProjectStatus::Completed,
            location: "Ikoyi, Lagos".into(),
            image: "https://images.unsplash.com/photo-1600585154340-be6161a56a0c?w=800&q=80"
                .into(),
            images: vec![
                "https://images.unsplash.com/photo-1600585154340-be6161a56a0c?w=800&q=80".into(),
                "https://images.unsplash.com/photo-1600566753190-17f0baa2a6c3?w=800&q=80".into(),
            ],
            featured: true,
            specifications: ProjectSpecifications {
                area: "600 sqm per unit".into(),
                bedrooms: Some(4),
                bathrooms: Some(5),
                floors: Some(2),
                year_completed: "2023".into(),
            },
        },
        Project {
            id: "4".into(),
            title: "Abuja Retail Plaza".into(),
            description: "Modern shopping complex with mixed-use development potential".into(),
            full_description: "Strategic retail development in Abuja's growing commercial \
                corridor. Features include anchor tenant spaces, boutique retail units, food \
                court, and underground parking."
                .into(),
            category: ProjectCategory::Commercial,
            status: ProjectStatus::Completed,
            location: "Wuse 2, Abuja".into(),
            image: "https://images.unsplash.com/photo-1441986300917-64674bd600d8?w=800&q=80"
                .into(),
            images: vec![
                "https://images.unsplash.com/photo-1441986300917-64674bd600d8?w=800&q=80".into(),
            ],
            featured: false,
            specifications: ProjectSpecifications {
                area: "8,500 sqm".into(),
                bedrooms: None,
                bathrooms: None,
                floors: Some(4),
                year_completed: "2021".into(),
            },
        },
        Project {
            id: "5".into(),
            title: "Banana Island Penthouse".into(),
            description: "Ultra-luxury penthouse with private rooftop terrace".into(),
            full_description: "The pinnacle of Lagos luxury living. This penthouse spans the \
                top two floors with 360-degree views, private elevator access, wine cellar, and \
                dedicated concierge services."
                .into(),
            category: ProjectCategory::Residential,
            status: ProjectStatus::Sold,
            location: "Banana Island, Lagos".into(),
            image: "https://images.unsplash.com/photo-1600607687920-4e2a09cf159d?w=800&q=80"
                .into(),
            images: vec![
                "https://images.unsplash.com/photo-1600607687920-4e2a09cf159d?w=800&q=80".into(),
            ],
            featured: false,
            specifications: ProjectSpecifications {
                area: "1,200 sqm".into(),
                bedrooms: Some(6),
                bathrooms: Some(7),
                floors: Some(2),
                year_completed: "2024".into(),
            },
        },
        Project {
            id: "6".into(),
            title: "Port Harcourt Business Hub".into(),
            description: "Modern co-working and office space in the oil capital".into(),
            full_description: "A flexible workspace solution designed for the modern business. \
                Features hot desks, private offices, meeting rooms, and event spaces with 24/7 \
                access and comprehensive business support services."
                .into(),
            category: ProjectCategory::Commercial,
            status: ProjectStatus::Leased,
            location: "GRA Phase 2, Port Harcourt".into(),
            image: "https://images.unsplash.com/photo-1497366216548-37526070297c?w=800&q=80"
                .into(),
            images: vec![
                "https://images.unsplash.com/photo-1497366216548-37526070297c?w=800&q=80".into(),
            ],
            featured: false,
            specifications: ProjectSpecifications {
                area: "3,200 sqm".into(),
                bedrooms: None,
                bathrooms: None,
                floors: Some(5),
                year_completed: "2023".into(),
            },
        },
    ]
}
