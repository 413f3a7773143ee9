use bunian_model::{
    AgricultureProject, AgricultureSpecifications, AgricultureStatus, AgricultureType,
};

/// The four agriculture operations shown before any admin edits.
#[must_use]
pub fn agriculture_projects() -> Vec<AgricultureProject> {
    vec![
        AgricultureProject {
            id: "1".into(),
            title: "Kaduna Rice Farm".into(),
            description: "500-hectare integrated rice farming operation with modern irrigation \
                systems"
                .into(),
            full_description: "Our flagship rice production facility utilizing precision \
                agriculture techniques, mechanized harvesting, and sustainable water management. \
                The farm produces high-quality paddy rice for both domestic consumption and \
                export markets."
                .into(),
            kind: AgricultureType::Crop,
            status: AgricultureStatus::Active,
            location: "Kaduna State".into(),
            image: "https://images.unsplash.com/photo-1500937386664-56d1dfef3854?w=800&q=80"
                .into(),
            images: vec![
                "https://images.unsplash.com/photo-1500937386664-56d1dfef3854?w=800&q=80".into(),
                "https://images.unsplash.com/photo-1574323347407-f5e1ad6d020b?w=800&q=80".into(),
            ],
            featured: true,
            specifications: AgricultureSpecifications {
                area: Some("500 hectares".into()),
                capacity: None,
                output: Some("4,000 tons/year".into()),
                year_started: "2019".into(),
            },
        },
        AgricultureProject {
            id: "2".into(),
            title: "Oyo Poultry Complex".into(),
            description: "Modern poultry facility with 50,000 bird capacity for egg and meat \
                production"
                .into(),
            full_description: "State-of-the-art poultry farm featuring climate-controlled \
                housing, automated feeding systems, and integrated processing facilities. We \
                supply major retailers across the Southwest region."
                .into(),
            kind: AgricultureType::Livestock,
            status: AgricultureStatus::Active,
            location: "Oyo State".into(),
            image: "https://images.unsplash.com/photo-1548550023-2bdb3c5beed7?w=800&q=80".into(),
            images: vec![
                "https://images.unsplash.com/photo-1548550023-2bdb3c5beed7?w=800&q=80".into(),
            ],
            featured: true,
            specifications: AgricultureSpecifications {
                area: None,
                capacity: Some("50,000 birds".into()),
                output: Some("2M eggs/month".into()),
                year_started: "2020".into(),
            },
        },
        AgricultureProject {
            id: "3".into(),
            title: "Plateau Greenhouse Project".into(),
            description: "Climate-controlled greenhouse for year-round vegetable production"
                .into(),
            full_description: "Advanced greenhouse facility producing premium vegetables \
                including tomatoes, peppers, and leafy greens. The controlled environment \
                ensures consistent quality and year-round availability."
                .into(),
            kind: AgricultureType::Crop,
            status: AgricultureStatus::Completed,
            location: "Plateau State".into(),
            image: "https://images.unsplash.com/photo-1416879595882-3373a0480b5b?w=800&q=80"
                .into(),
            images: vec![
                "https://images.unsplash.com/photo-1416879595882-3373a0480b5b?w=800&q=80".into(),
            ],
            featured: true,
            specifications: AgricultureSpecifications {
                area: Some("10 hectares".into()),
                capacity: None,
                output: Some("500 tons/year".into()),
                year_started: "2021".into(),
            },
        },
        AgricultureProject {
            id: "4".into(),
            title: "Niger Cassava Processing Plant".into(),
            description: "Industrial cassava processing facility for flour and starch production"
                .into(),
            full_description: "Modern processing plant that transforms raw cassava into \
                high-quality flour, starch, and ethanol. The facility supports over 2,000 local \
                farmers through our outgrower scheme."
                .into(),
            kind: AgricultureType::Processing,
            status: AgricultureStatus::Active,
            location: "Niger State".into(),
            image: "https://images.unsplash.com/photo-1625246333195-78d9c38ad449?w=800&q=80"
                .into(),
            images: vec![
                "https://images.unsplash.com/photo-1625246333195-78d9c38ad449?w=800&q=80".into(),
            ],
            featured: false,
            specifications: AgricultureSpecifications {
                area: None,
                capacity: Some("100 tons/day".into()),
                output: Some("30,000 tons/year".into()),
                year_started: "2022".into(),
            },
        },
    ]
}
