//! The curated, corpus-independent facet vocabulary.
//!
//! Values here are shown whether or not any record uses them. Spelling must
//! match the corpus exactly, since filtering is exact string equality
//! (difficulty is `Med`, not `Medium`, in the corpus).

pub const TECHNOLOGY: &str = "Technology";
pub const DIFFICULTY: &str = "Difficulty";
pub const STAKEHOLDERS: &str = "Stakeholders";
pub const IMPACT_AREA: &str = "Impact Area";
pub const DATA_RESOURCE_TYPE: &str = "Data/Resource Type";
pub const SOLUTION_TYPE: &str = "Solution Type";

pub const THEME: &str = "Theme";
pub const CATEGORY: &str = "Category";
pub const ORGANIZATION: &str = "Organization";
pub const DEPARTMENT: &str = "Department";

/// Fixed categories in display order, each with its full vocabulary.
pub const FIXED_TAXONOMY: &[(&str, &[&str])] = &[
    (
        TECHNOLOGY,
        &[
            "Artificial Intelligence (AI)",
            "Machine Learning (ML)",
            "Deep Learning (DL)",
            "Natural Language Processing (NLP)",
            "Computer Vision",
            "Robotics",
            "IoT (Internet of Things)",
            "Blockchain",
            "Augmented Reality (AR)",
            "Virtual Reality (VR)",
            "Frontend Dev",
            "Backend Dev",
            "Full Stack Development",
            "Web Development",
            "Mobile App Development",
            "Game Dev",
            "Cloud Computing",
            "Edge Computing",
            "Data Analytics",
            "Cybersecurity",
            "GIS / Remote Sensing",
            "Embedded Systems",
        ],
    ),
    (DIFFICULTY, &["Easy", "Med", "Hard"]),
    (
        STAKEHOLDERS,
        &[
            "Government Agencies",
            "NGOs",
            "Farmers",
            "Students / Teachers",
            "Doctors / Patients",
            "Industry / Enterprises",
            "Local Communities",
            "Citizens",
            "Travelers",
            "Law Enforcement",
            "Military / Defense",
        ],
    ),
    (
        IMPACT_AREA,
        &[
            "Cost Reduction",
            "Efficiency Improvement",
            "Accessibility",
            "Sustainability",
            "Inclusivity",
            "Transparency",
            "Security",
            "Safety",
            "Awareness & Education",
            "Productivity",
        ],
    ),
    (
        DATA_RESOURCE_TYPE,
        &[
            "Open Data",
            "Sensor Data",
            "Image Data",
            "Video Data",
            "Text Data",
            "Audio Data",
            "Social Media Data",
            "Satellite Data",
            "Geospatial Data",
            "Real-time Streaming",
        ],
    ),
    (
        SOLUTION_TYPE,
        &["Mobile Solutions", "Web Solutions", "Mobile and Web Solutions"],
    ),
];

/// Categories discovered from the corpus, in the order they are appended.
pub const CORPUS_CATEGORIES: [&str; 4] = [THEME, CATEGORY, ORGANIZATION, DEPARTMENT];
