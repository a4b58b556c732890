//! Role catalog: the role → required-skills and role → priority tables the
//! matcher reads. Loaded once at startup and shared read-only.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("failed to read role catalog {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse role catalog: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("role '{0}' has an empty requirement list")]
    EmptyRequirements(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoleCatalog {
    /// Role name (exact key) → required skills, in table order.
    pub requirements: HashMap<String, Vec<String>>,
    /// Role name → skill name → learning rank (lower is learned first).
    #[serde(default)]
    pub priorities: HashMap<String, HashMap<String, u32>>,
}

impl RoleCatalog {
    pub fn from_json_str(json: &str) -> Result<Self, CatalogError> {
        let catalog: RoleCatalog = serde_json::from_str(json)?;
        catalog.validate()?;
        Ok(catalog)
    }

    pub fn from_path(path: &Path) -> Result<Self, CatalogError> {
        let text = std::fs::read_to_string(path).map_err(|source| CatalogError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&text)
    }

    /// Every role must list at least one skill, so the match percentage is
    /// always well defined.
    pub fn validate(&self) -> Result<(), CatalogError> {
        match self.requirements.iter().find(|(_, skills)| skills.is_empty()) {
            Some((role, _)) => Err(CatalogError::EmptyRequirements(role.clone())),
            None => Ok(()),
        }
    }

    pub fn required_skills(&self, role: &str) -> Option<&[String]> {
        self.requirements.get(role).map(Vec::as_slice)
    }

    /// Rank of `skill` in `role`'s learning order, if the role ranks it.
    pub fn priority(&self, role: &str, skill: &str) -> Option<u32> {
        self.priorities.get(role).and_then(|ranks| ranks.get(skill)).copied()
    }

    pub fn roles(&self) -> impl Iterator<Item = &str> {
        self.requirements.keys().map(String::as_str)
    }
}

impl Default for RoleCatalog {
    fn default() -> Self {
        let mut requirements = HashMap::new();
        let mut priorities = HashMap::new();

        for (role, ranked) in BUILTIN_ROLES {
            requirements.insert(
                role.to_string(),
                ranked.iter().map(|(skill, _)| skill.to_string()).collect(),
            );
            priorities.insert(
                role.to_string(),
                ranked
                    .iter()
                    .map(|(skill, rank)| (skill.to_string(), *rank))
                    .collect(),
            );
        }

        RoleCatalog {
            requirements,
            priorities,
        }
    }
}

/// Built-in roles: required skills in table order, each with its learning rank.
const BUILTIN_ROLES: &[(&str, &[(&str, u32)])] = &[
    (
        "Frontend Developer",
        &[
            ("HTML", 1),
            ("CSS", 2),
            ("JavaScript", 3),
            ("React", 5),
            ("Git", 4),
        ],
    ),
    (
        "Backend Developer",
        &[
            ("Java", 1),
            ("Spring Boot", 5),
            ("SQL", 3),
            ("APIs", 4),
            ("Git", 2),
        ],
    ),
    // The Data Scientist ranks are not inherited from an older table: the
    // previous rank table only keyed "Data Analyst", so this role's learning
    // order used to be unranked. Ranks mirror the Data Analyst ordering.
    (
        "Data Scientist",
        &[
            ("Excel", 1),
            ("SQL", 3),
            ("Python", 4),
            ("Dashboards", 5),
            ("Statistics", 2),
        ],
    ),
];
