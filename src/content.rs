use rust_embed::Embed;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;
use thiserror::Error;

/// The three content documents baked into the binary. Everything the site
/// renders comes from here; there is no other data source.
#[derive(Embed)]
#[folder = "content"]
pub struct Assets;

pub static PROFILE: LazyLock<Profile> =
    LazyLock::new(|| load("profile.json").expect("profile.json should parse"));
pub static SKILLS: LazyLock<SkillsDoc> =
    LazyLock::new(|| load("skills.json").expect("skills.json should parse"));
pub static PROJECTS: LazyLock<ProjectsDoc> =
    LazyLock::new(|| load("projects.json").expect("projects.json should parse"));

#[derive(Error, Debug)]
pub enum ContentError {
    #[error("content document not found: {0}")]
    NotFound(String),
    #[error("couldn't parse content document {name}: {source}")]
    Parse {
        name: String,
        #[source]
        source: serde_json::Error,
    },
}

fn load<T: for<'de> Deserialize<'de>>(name: &str) -> Result<T, ContentError> {
    let file = Assets::get(name).ok_or_else(|| ContentError::NotFound(name.to_string()))?;
    serde_json::from_slice(&file.data).map_err(|source| ContentError::Parse {
        name: name.to_string(),
        source,
    })
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    pub name: String,
    pub role: String,
    pub headline: String,
    pub short_bio: String,
    pub experience_years: u32,
    pub education: String,
    pub resume_path: String,
    pub contact: ContactInfo,
    pub achievements: Vec<String>,
    /// Chronologically ascending; renderers reverse for most-recent-first
    /// display. The last entry is the current role.
    pub positions: Vec<Position>,
}

impl Profile {
    pub fn current_position(&self) -> Option<&Position> {
        self.positions.last()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContactInfo {
    pub email: String,
    pub phone: String,
    pub location: String,
    pub linkedin: String,
    pub github: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub title: String,
    pub company: String,
    pub period: String,
    pub bullets: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkillsDoc {
    /// Ordered; flattening preserves this order, then within-category order.
    pub categories: Vec<SkillCategory>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkillCategory {
    pub name: String,
    pub skills: Vec<Skill>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Skill {
    pub name: String,
    pub proficiency: u8,
    pub tools: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectsDoc {
    pub featured: Vec<Project>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    /// Unique across the collection; render key and modal-selection identity.
    pub id: String,
    pub title: String,
    pub summary: String,
    pub role: String,
    pub stack: Vec<String>,
    pub impact: String,
    pub period: String,
    pub images: Vec<String>,
    /// Empty string means "no repository link"; the card omits the button.
    #[serde(default)]
    pub repo: String,
    /// Empty string means "no live deployment"; the card omits the button.
    #[serde(default)]
    pub live: String,
    pub problem: String,
    pub solution: String,
    pub tech_details: Vec<String>,
    pub metrics: Vec<String>,
}

/// A skill annotated with the category it came from, for the flat grid view.
#[derive(Debug, Clone, PartialEq)]
pub struct CategorizedSkill {
    pub category: String,
    pub name: String,
    pub proficiency: u8,
    pub tools: Vec<String>,
}

/// Projects every category's skills into one flat sequence, each record
/// tagged with its category name. Pure projection: no filtering, no
/// deduplication of same-named skills across categories.
pub fn flatten_skills(categories: &[SkillCategory]) -> Vec<CategorizedSkill> {
    categories
        .iter()
        .flat_map(|category| {
            category.skills.iter().map(|skill| CategorizedSkill {
                category: category.name.clone(),
                name: skill.name.clone(),
                proficiency: skill.proficiency,
                tools: skill.tools.clone(),
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn skill(name: &str, proficiency: u8) -> Skill {
        Skill {
            name: name.to_string(),
            proficiency,
            tools: Vec::new(),
        }
    }

    #[test]
    fn embedded_documents_parse() {
        assert!(!PROFILE.name.is_empty());
        assert!(!SKILLS.categories.is_empty());
        assert!(!PROJECTS.featured.is_empty());
    }

    #[test]
    fn positions_are_present_and_current_role_is_last() {
        assert!(!PROFILE.positions.is_empty());
        let current = PROFILE
            .current_position()
            .expect("profile should have at least one position");
        assert_eq!(
            current.title,
            PROFILE.positions[PROFILE.positions.len() - 1].title
        );
    }

    #[test]
    fn project_ids_are_unique() {
        let mut ids = PROJECTS
            .featured
            .iter()
            .map(|p| p.id.as_str())
            .collect::<Vec<_>>();
        ids.sort_unstable();
        let before = ids.len();
        ids.dedup();
        assert_eq!(before, ids.len());
    }

    #[test]
    fn embedded_proficiencies_are_in_range() {
        for category in &SKILLS.categories {
            for skill in &category.skills {
                assert!(
                    skill.proficiency <= 100,
                    "{} has out-of-range proficiency {}",
                    skill.name,
                    skill.proficiency
                );
            }
        }
    }

    #[test]
    fn flatten_preserves_category_then_skill_order() {
        let categories = vec![
            SkillCategory {
                name: "Frontend".to_string(),
                skills: vec![skill("A", 90), skill("B", 80)],
            },
            SkillCategory {
                name: "Backend".to_string(),
                skills: vec![skill("C", 70)],
            },
        ];

        let flat = flatten_skills(&categories);
        let tagged = flat
            .iter()
            .map(|s| (s.name.as_str(), s.category.as_str()))
            .collect::<Vec<_>>();
        assert_eq!(
            tagged,
            vec![("A", "Frontend"), ("B", "Frontend"), ("C", "Backend")]
        );
    }

    #[test]
    fn flatten_keeps_duplicate_names_across_categories() {
        let categories = vec![
            SkillCategory {
                name: "Frontend".to_string(),
                skills: vec![skill("TypeScript", 90)],
            },
            SkillCategory {
                name: "Tooling".to_string(),
                skills: vec![skill("TypeScript", 60)],
            },
        ];

        let flat = flatten_skills(&categories);
        assert_eq!(flat.len(), 2);
        assert_eq!(flat[0].category, "Frontend");
        assert_eq!(flat[1].category, "Tooling");
    }

    #[test]
    fn missing_document_reports_name() {
        let err = load::<Profile>("nope.json").unwrap_err();
        assert!(matches!(err, ContentError::NotFound(ref name) if name == "nope.json"));
    }
}
