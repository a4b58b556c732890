//! Request-side normalization shared by every endpoint that takes a role and
//! a skill list.

use serde::{Deserialize, Serialize};

use crate::errors::AppError;

/// `currentSkills` as clients send it: a comma-delimited string or a list.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum SkillsInput {
    Text(String),
    List(Vec<String>),
}

impl SkillsInput {
    /// Trimmed skill names with empty entries dropped.
    pub fn normalized(&self) -> Vec<String> {
        let entries: Vec<&str> = match self {
            SkillsInput::Text(text) => text.split(',').collect(),
            SkillsInput::List(items) => items.iter().map(String::as_str).collect(),
        };
        entries
            .into_iter()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_string)
            .collect()
    }

    /// The raw form stored with an analysis record.
    pub fn raw(&self) -> String {
        match self {
            SkillsInput::Text(text) => text.clone(),
            SkillsInput::List(items) => items.join(", "),
        }
    }

    fn is_blank(&self) -> bool {
        matches!(self, SkillsInput::Text(text) if text.trim().is_empty())
    }
}

/// Picks `role`, falling back to `target_role`, and trims it.
pub fn resolve_role(role: Option<&str>, target_role: Option<&str>) -> Result<String, AppError> {
    role.map(str::trim)
        .filter(|r| !r.is_empty())
        .or(target_role.map(str::trim).filter(|r| !r.is_empty()))
        .map(str::to_string)
        .ok_or_else(|| AppError::Validation("role (or targetRole) is required".to_string()))
}

pub fn require_skills(skills: Option<&SkillsInput>) -> Result<&SkillsInput, AppError> {
    match skills {
        Some(s) if !s.is_blank() => Ok(s),
        _ => Err(AppError::Validation("currentSkills is required".to_string())),
    }
}
