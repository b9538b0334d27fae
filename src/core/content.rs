//! Read-only content registry: the sections a session browses, in tab order.
//!
//! A registry is built once at process start (either the built-in sample or
//! a TOML document) and shared behind an `Arc` by every session. Nothing in
//! this module knows how records are drawn.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::error::Error as StdError;
use std::fmt;
use std::path::Path;

use crate::core::toml_file::{parse_toml, read_toml, TomlFileError};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EducationRecord {
    pub school: String,
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub date_range: String,
    #[serde(default)]
    pub details: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExperienceRecord {
    pub company: String,
    #[serde(default)]
    pub date_range: String,
    #[serde(default)]
    pub role: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub reporting_line: String,
    #[serde(default)]
    pub bullets: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectRecord {
    pub name: String,
    #[serde(default)]
    pub date_range: String,
    #[serde(default)]
    pub bullets: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillsRecord {
    pub category: String,
    #[serde(default)]
    pub details: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactLine {
    pub text: String,
}

/// One structured content entry. Records have no identity beyond their
/// position in a section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Record {
    Education(EducationRecord),
    Experience(ExperienceRecord),
    Project(ProjectRecord),
    Skills(SkillsRecord),
    Contact(ContactLine),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RecordKind {
    Education,
    Experience,
    Project,
    Skills,
    Contact,
}

impl RecordKind {
    pub const ALL: [RecordKind; 5] = [
        RecordKind::Education,
        RecordKind::Experience,
        RecordKind::Project,
        RecordKind::Skills,
        RecordKind::Contact,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            RecordKind::Education => "education",
            RecordKind::Experience => "experience",
            RecordKind::Project => "project",
            RecordKind::Skills => "skills",
            RecordKind::Contact => "contact",
        }
    }
}

impl Record {
    pub fn kind(&self) -> RecordKind {
        match self {
            Record::Education(_) => RecordKind::Education,
            Record::Experience(_) => RecordKind::Experience,
            Record::Project(_) => RecordKind::Project,
            Record::Skills(_) => RecordKind::Skills,
            Record::Contact(_) => RecordKind::Contact,
        }
    }

    /// Key used for filtering; not consulted by the default key bindings.
    pub fn filter_value(&self) -> String {
        match self {
            Record::Education(e) => e.school.clone(),
            Record::Experience(e) => format!("{} {}", e.company, e.role),
            Record::Project(p) => p.name.clone(),
            Record::Skills(s) => s.category.clone(),
            Record::Contact(c) => c.text.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Section {
    pub name: String,
    #[serde(default)]
    pub records: Vec<Record>,
}

impl Section {
    pub fn new(name: impl Into<String>, records: Vec<Record>) -> Self {
        Self {
            name: name.into(),
            records,
        }
    }

    /// Variant shared by every record, `None` for an empty section.
    pub fn kind(&self) -> Option<RecordKind> {
        self.records.first().map(Record::kind)
    }
}

#[derive(Debug)]
pub enum ContentError {
    File(TomlFileError),
    NoSections,
    DuplicateSection {
        name: String,
    },
    MixedSection {
        name: String,
        expected: RecordKind,
        found: RecordKind,
    },
}

impl fmt::Display for ContentError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ContentError::File(err) => write!(f, "{err}"),
            ContentError::NoSections => write!(f, "Content defines no sections"),
            ContentError::DuplicateSection { name } => {
                write!(f, "Section '{name}' is defined more than once")
            }
            ContentError::MixedSection {
                name,
                expected,
                found,
            } => write!(
                f,
                "Section '{name}' mixes record kinds ({} and {})",
                expected.as_str(),
                found.as_str()
            ),
        }
    }
}

impl From<TomlFileError> for ContentError {
    fn from(err: TomlFileError) -> Self {
        ContentError::File(err)
    }
}

impl StdError for ContentError {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        match self {
            ContentError::File(err) => err.source(),
            _ => None,
        }
    }
}

#[derive(Debug, Deserialize)]
struct ContentFile {
    title: Option<String>,
    splash_title: Option<String>,
    #[serde(default)]
    sections: Vec<Section>,
}

pub const DEFAULT_TITLE: &str = "Alex Rivera - SSH Portfolio";
pub const DEFAULT_SPLASH_TITLE: &str = "Alex Rivera - Portfolio";

/// Immutable mapping from section name to records. Iteration order is tab order.
#[derive(Debug, Clone)]
pub struct ContentRegistry {
    title: String,
    splash_title: String,
    sections: Vec<Section>,
}

impl ContentRegistry {
    pub fn new(
        title: impl Into<String>,
        splash_title: impl Into<String>,
        sections: Vec<Section>,
    ) -> Result<Self, ContentError> {
        if sections.is_empty() {
            return Err(ContentError::NoSections);
        }
        let mut seen = HashSet::new();
        for section in &sections {
            if !seen.insert(section.name.as_str()) {
                return Err(ContentError::DuplicateSection {
                    name: section.name.clone(),
                });
            }
            if let Some(expected) = section.kind() {
                if let Some(other) = section.records.iter().find(|r| r.kind() != expected) {
                    return Err(ContentError::MixedSection {
                        name: section.name.clone(),
                        expected,
                        found: other.kind(),
                    });
                }
            }
        }
        Ok(Self {
            title: title.into(),
            splash_title: splash_title.into(),
            sections,
        })
    }

    pub fn from_toml_str(contents: &str, path: &Path) -> Result<Self, ContentError> {
        Self::from_file(parse_toml("content", contents, path)?)
    }

    pub fn load_from_path(path: &Path) -> Result<Self, ContentError> {
        Self::from_file(read_toml("content", path)?)
    }

    fn from_file(file: ContentFile) -> Result<Self, ContentError> {
        Self::new(
            file.title.unwrap_or_else(|| DEFAULT_TITLE.to_string()),
            file.splash_title
                .unwrap_or_else(|| DEFAULT_SPLASH_TITLE.to_string()),
            file.sections,
        )
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn splash_title(&self) -> &str {
        &self.splash_title
    }

    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    pub fn section(&self, index: usize) -> Option<&Section> {
        self.sections.get(index)
    }

    pub fn get(&self, name: &str) -> Option<&Section> {
        self.sections.iter().find(|s| s.name == name)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.sections.iter().map(|s| s.name.as_str())
    }

    pub fn len(&self) -> usize {
        self.sections.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    /// Sample portfolio shipped with the binary.
    pub fn builtin() -> Self {
        Self {
            title: DEFAULT_TITLE.to_string(),
            splash_title: DEFAULT_SPLASH_TITLE.to_string(),
            sections: builtin_sections(),
        }
    }
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn builtin_sections() -> Vec<Section> {
    vec![
        Section::new(
            "Education",
            vec![Record::Education(EducationRecord {
                school: "Riverside Polytechnic".to_string(),
                status: "Senior".to_string(),
                date_range: "Present".to_string(),
                details: strings(&[
                    "Relevant Coursework: Data Structures, Operating Systems, Compilers, Linear Algebra",
                ]),
            })],
        ),
        Section::new(
            "Experience",
            vec![
                Record::Experience(ExperienceRecord {
                    company: "Northwind Cloud".to_string(),
                    date_range: "February 2025 - May 2025".to_string(),
                    role: "Platform Engineering Intern".to_string(),
                    location: "Portland, OR".to_string(),
                    reporting_line: "Reported to the Director of Infrastructure".to_string(),
                    bullets: strings(&[
                        "Containerized a legacy API and deployed it behind a managed load balancer",
                        "Provisioned a replicated Postgres cluster",
                        "Wrote runbooks for schema migrations and on-call handoff",
                    ]),
                }),
                Record::Experience(ExperienceRecord {
                    company: "Signal Harbor".to_string(),
                    date_range: "January 2025".to_string(),
                    role: "Data Analyst Intern".to_string(),
                    location: "Boston, MA".to_string(),
                    reporting_line: "Reported to the Research Manager".to_string(),
                    bullets: strings(&[
                        "Classified suspicious network traffic by origin and intent",
                        "Joined results across several relational databases",
                        "Flagged a cluster of fraudulent payout domains",
                    ]),
                }),
                Record::Experience(ExperienceRecord {
                    company: "Greenleaf Labs".to_string(),
                    date_range: "June 2024 - August 2024".to_string(),
                    role: "Software Development Intern".to_string(),
                    location: "Remote".to_string(),
                    reporting_line: "Worked with the Head of Engineering".to_string(),
                    bullets: strings(&[
                        "Built a headless crawler that extracts page features for automated site classification.",
                        "Clustered the extracted features with a self-organizing map",
                    ]),
                }),
                Record::Experience(ExperienceRecord {
                    company: "Open Ledger Foundation".to_string(),
                    date_range: "June 2023 - August 2023".to_string(),
                    role: "Software Development Intern".to_string(),
                    location: "Remote".to_string(),
                    reporting_line: "Reported to the Executive Director".to_string(),
                    bullets: strings(&[
                        "Created a budgeting simulation that lets students plan a first year of college expenses.",
                        "Shipped weekly revisions driven by classroom feedback",
                    ]),
                }),
            ],
        ),
        Section::new(
            "Projects",
            vec![
                Record::Project(ProjectRecord {
                    name: "Pantry Planner".to_string(),
                    date_range: "February 2025 - Present".to_string(),
                    bullets: strings(&[
                        "App that tracks pantry contents and suggests recipes",
                        "Backend written as serverless functions",
                    ]),
                }),
                Record::Project(ProjectRecord {
                    name: "Personal Site".to_string(),
                    date_range: "January 2022 - Present".to_string(),
                    bullets: strings(&[
                        "Showcase and archive of past work",
                        "Migrated from static hosting to a server-rendered framework",
                    ]),
                }),
                Record::Project(ProjectRecord {
                    name: "Wake On LAN Server".to_string(),
                    date_range: "September - October 2023".to_string(),
                    bullets: strings(&[
                        "Containerized service that sends magic packets to wake a desktop remotely",
                        "Hosted alongside a VPN and a password manager on a home server",
                    ]),
                }),
                Record::Project(ProjectRecord {
                    name: "Board Game Engine".to_string(),
                    date_range: "June 2023".to_string(),
                    bullets: strings(&[
                        "Self-play reinforcement learning agent",
                        "Trained on rented accelerators",
                    ]),
                }),
                Record::Project(ProjectRecord {
                    name: "Primality Tester".to_string(),
                    date_range: "October 2022".to_string(),
                    bullets: strings(&["Miller-Rabin implementation written to learn Rust"]),
                }),
            ],
        ),
        Section::new(
            "Skills & Interests",
            vec![
                Record::Skills(SkillsRecord {
                    category: "Programming Languages".to_string(),
                    details: strings(&["Rust", "Python", "TypeScript", "Java", "Shell scripting"]),
                }),
                Record::Skills(SkillsRecord {
                    category: "Tools".to_string(),
                    details: strings(&[
                        "Git", "Docker", "Postgres", "WireGuard", "Linux", "Cloud platforms",
                    ]),
                }),
                Record::Skills(SkillsRecord {
                    category: "Interests".to_string(),
                    details: strings(&["Cooking, and collecting kitchen tools to go with it"]),
                }),
                Record::Skills(SkillsRecord {
                    category: "Volunteering".to_string(),
                    details: strings(&["Peer tutoring", "Community food bank"]),
                }),
            ],
        ),
        Section::new(
            "Contact",
            vec![
                Record::Contact(ContactLine {
                    text: "Alex Rivera".to_string(),
                }),
                Record::Contact(ContactLine {
                    text: "alex@example.com".to_string(),
                }),
                Record::Contact(ContactLine {
                    text: "https://example.com".to_string(),
                }),
            ],
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"
title = "Jo Doe - Portfolio"

[[sections]]
name = "Projects"

[[sections.records]]
kind = "project"
name = "Compiler"
date_range = "2024"
bullets = ["Parser", "Codegen"]

[[sections]]
name = "Contact"

[[sections.records]]
kind = "contact"
text = "jo@example.com"
"#;

    #[test]
    fn builtin_registry_is_consistent() {
        let registry = ContentRegistry::builtin();
        let rebuilt = ContentRegistry::new(
            registry.title(),
            registry.splash_title(),
            registry.sections().to_vec(),
        );
        assert!(rebuilt.is_ok());
        assert_eq!(
            registry.names().collect::<Vec<_>>(),
            vec!["Education", "Experience", "Projects", "Skills & Interests", "Contact"]
        );
    }

    #[test]
    fn parses_toml_document() {
        let registry = ContentRegistry::from_toml_str(SAMPLE, Path::new("content.toml"))
            .expect("valid content");
        assert_eq!(registry.title(), "Jo Doe - Portfolio");
        assert_eq!(registry.splash_title(), DEFAULT_SPLASH_TITLE);
        assert_eq!(registry.len(), 2);
        let projects = registry.get("Projects").expect("projects section");
        assert_eq!(projects.kind(), Some(RecordKind::Project));
        assert_eq!(projects.records[0].filter_value(), "Compiler");
    }

    #[test]
    fn rejects_mixed_sections() {
        let section = Section::new(
            "Mixed",
            vec![
                Record::Contact(ContactLine {
                    text: "a".to_string(),
                }),
                Record::Skills(SkillsRecord {
                    category: "b".to_string(),
                    details: Vec::new(),
                }),
            ],
        );
        let err = ContentRegistry::new("t", "s", vec![section]).unwrap_err();
        assert!(matches!(err, ContentError::MixedSection { .. }));
    }

    #[test]
    fn rejects_duplicate_and_missing_sections() {
        let err = ContentRegistry::new("t", "s", Vec::new()).unwrap_err();
        assert!(matches!(err, ContentError::NoSections));

        let dup = vec![Section::new("A", Vec::new()), Section::new("A", Vec::new())];
        let err = ContentRegistry::new("t", "s", dup).unwrap_err();
        assert!(matches!(err, ContentError::DuplicateSection { name } if name == "A"));
    }

    #[test]
    fn missing_file_reports_path() {
        let err = ContentRegistry::load_from_path(Path::new("/definitely/not/here.toml"))
            .unwrap_err();
        assert!(err.to_string().starts_with("Failed to read content at "));
        assert!(err.to_string().contains("here.toml"));
        assert!(err.source().is_some());
    }

    #[test]
    fn malformed_document_is_a_parse_error() {
        let err = ContentRegistry::from_toml_str("[[sections]]\nname = 3", Path::new("bad.toml"))
            .unwrap_err();
        match err {
            ContentError::File(file) => {
                assert!(matches!(file.fault, crate::core::toml_file::Fault::Parse(_)));
                assert_eq!(file.document, "content");
            }
            other => panic!("expected a file error, got {other:?}"),
        }
    }

    #[test]
    fn experience_filter_value_joins_company_and_role() {
        let record = Record::Experience(ExperienceRecord {
            company: "Acme".to_string(),
            date_range: String::new(),
            role: "Engineer".to_string(),
            location: String::new(),
            reporting_line: String::new(),
            bullets: Vec::new(),
        });
        assert_eq!(record.filter_value(), "Acme Engineer");
    }
}
