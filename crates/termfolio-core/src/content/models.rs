use serde::{Deserialize, Serialize};
use std::path::Path;

/// Everything the page renders. Loaded from a TOML file when the user
/// points `content_path` at one, otherwise the built-in profile.
///
/// Validation is presence-only: missing fields deserialize to empty
/// strings and lists, and empty lists render as empty sections.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PortfolioContent {
    #[serde(default)]
    pub profile: Profile,
    #[serde(default)]
    pub about: About,
    #[serde(default)]
    pub skills: Vec<SkillCategory>,
    #[serde(default)]
    pub projects: Vec<Project>,
    #[serde(default)]
    pub experience: Vec<ExperienceEntry>,
    #[serde(default)]
    pub education: Vec<EducationEntry>,
    #[serde(default)]
    pub footer: Footer,
}

/// Hero section identity block
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Profile {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub tagline: String,
    /// Typed out character by character on first view
    #[serde(default)]
    pub subtitle: String,
    #[serde(default)]
    pub links: Vec<ContactLink>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ContactLink {
    #[serde(default)]
    pub label: String,
    #[serde(default)]
    pub url: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct About {
    #[serde(default)]
    pub paragraphs: Vec<String>,
    #[serde(default)]
    pub facts: Vec<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SkillCategory {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub icon: String,
    #[serde(default)]
    pub skills: Vec<Skill>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Skill {
    #[serde(default)]
    pub name: String,
    /// Proficiency in percent (0-100); drives the counted-up bar fill
    #[serde(default)]
    pub level: u8,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Project {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub badges: Vec<Badge>,
    #[serde(default)]
    pub technologies: Vec<String>,
    #[serde(default)]
    pub demo: Option<String>,
    #[serde(default)]
    pub repo: Option<String>,
}

/// Small colored label shown on a project card
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Badge {
    #[serde(default)]
    pub text: String,
    /// Semantic color name resolved by the theme (e.g. "blue", "purple")
    #[serde(default)]
    pub color: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ExperienceEntry {
    #[serde(default)]
    pub role: String,
    #[serde(default)]
    pub company: String,
    #[serde(default)]
    pub period: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub responsibilities: Vec<String>,
    #[serde(default)]
    pub technologies: Vec<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EducationEntry {
    #[serde(default)]
    pub degree: String,
    #[serde(default)]
    pub school: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub period: String,
    #[serde(default)]
    pub gpa: String,
    #[serde(default)]
    pub courses: Vec<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Footer {
    #[serde(default)]
    pub heading: String,
    #[serde(default)]
    pub links: Vec<ContactLink>,
    #[serde(default)]
    pub note: String,
}

impl PortfolioContent {
    /// Load content from a TOML file, or the built-in profile when no
    /// path is configured.
    pub fn load(path: Option<&Path>) -> crate::Result<Self> {
        match path {
            Some(path) => {
                let text = std::fs::read_to_string(path)?;
                Ok(toml::from_str(&text)?)
            }
            None => Ok(Self::builtin()),
        }
    }

    /// Skill proficiency values flattened in display order, for the
    /// counted-up bar fills.
    pub fn skill_levels(&self) -> Vec<f64> {
        self.skills
            .iter()
            .flat_map(|category| category.skills.iter().map(|skill| f64::from(skill.level)))
            .collect()
    }

    /// Characters in the typed hero subtitle.
    pub fn subtitle_chars(&self) -> usize {
        self.profile.subtitle.chars().count()
    }
}
