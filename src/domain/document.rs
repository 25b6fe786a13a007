use std::fmt;

use serde::{Deserialize, Serialize};

use super::palette::{self, ColorPalette, DEFAULT_SCHEME};

/// Page sections that can be reordered in the editor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Section {
    Bio,
    Photo,
    Skills,
    Projects,
    Contact,
    Social,
}

impl Section {
    pub const ALL: [Section; 6] = [
        Section::Bio,
        Section::Photo,
        Section::Skills,
        Section::Projects,
        Section::Contact,
        Section::Social,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Section::Bio => "bio",
            Section::Photo => "photo",
            Section::Skills => "skills",
            Section::Projects => "projects",
            Section::Contact => "contact",
            Section::Social => "social",
        }
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Bio {
    pub name: String,
    pub title: String,
    pub summary: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Photo {
    pub url: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Project {
    pub title: String,
    pub description: String,
    pub link: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Contact {
    pub email: String,
    pub phone: String,
    pub location: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Social {
    pub linkedin: String,
    pub github: String,
    pub instagram: String,
}

/// The single persisted portfolio document.
///
/// Fields missing from a stored file are filled from [`PortfolioDocument::default`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PortfolioDocument {
    pub github_username: String,
    /// Palette key. Kept verbatim even when unknown; resolved at render time.
    pub color_scheme: String,
    pub section_order: Vec<Section>,
    pub bio: Bio,
    pub photo: Photo,
    pub projects: Vec<Project>,
    pub skills: Vec<String>,
    pub contact: Contact,
    pub social: Social,
}

impl PortfolioDocument {
    /// Palette for this document's scheme, falling back to the default palette.
    pub fn palette(&self) -> &'static ColorPalette {
        palette::resolve(&self.color_scheme)
    }
}

impl Default for PortfolioDocument {
    fn default() -> Self {
        let placeholder_project = |title: &str| Project {
            title: title.to_string(),
            description: "Describe your project here.".to_string(),
            link: String::new(),
        };

        Self {
            github_username: String::new(),
            color_scheme: DEFAULT_SCHEME.to_string(),
            section_order: Section::ALL.to_vec(),
            bio: Bio {
                name: "Your Name".to_string(),
                title: "Your Professional Title".to_string(),
                summary: "Write a brief professional summary about yourself. What do you do? \
                          What are you passionate about?"
                    .to_string(),
            },
            photo: Photo { url: "https://via.placeholder.com/200x200?text=Your+Photo".to_string() },
            projects: vec![placeholder_project("Project One"), placeholder_project("Project Two")],
            skills: (1..=4).map(|i| format!("Skill {i}")).collect(),
            contact: Contact {
                email: "your.email@example.com".to_string(),
                phone: String::new(),
                location: "City, State".to_string(),
            },
            social: Social::default(),
        }
    }
}
