//! Skill Matcher — computes the gap between a role's required skills and the
//! skills a user already has.
//!
//! Pure and synchronous. The catalog is injected at construction and never
//! mutated, so a `SkillMatcher` is cheap to clone into handler state.

use std::collections::HashSet;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::skills::catalog::RoleCatalog;
use crate::skills::recommendations::{recommendations_for, unrecognized_role};

/// Result of one gap analysis. Field names on the wire follow the public API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GapResult {
    #[serde(rename = "targetRole")]
    pub role: String,
    pub matched_skills: Vec<String>,
    pub missing_skills: Vec<String>,
    pub recommendations: Vec<String>,
    #[serde(rename = "suggestedLearningOrder")]
    pub learning_order: Vec<String>,
    pub match_percentage: u32, // 0 – 100
}

#[derive(Debug, Clone)]
pub struct SkillMatcher {
    catalog: Arc<RoleCatalog>,
}

impl SkillMatcher {
    pub fn new(catalog: Arc<RoleCatalog>) -> Self {
        Self { catalog }
    }

    /// Computes the gap for `role` given already-normalized `skills`.
    ///
    /// `role` is trimmed and then looked up exactly (case-sensitive). An unknown
    /// role yields an empty result with a single explanatory recommendation.
    pub fn compute_gap(&self, role: &str, skills: &[String]) -> GapResult {
        let role = role.trim();

        let Some(required) = self.catalog.required_skills(role) else {
            return GapResult {
                role: role.to_string(),
                matched_skills: vec![],
                missing_skills: vec![],
                recommendations: vec![unrecognized_role(role)],
                learning_order: vec![],
                match_percentage: 0,
            };
        };

        let owned: HashSet<String> = skills.iter().map(|s| s.trim().to_lowercase()).collect();

        let (matched_skills, missing_skills): (Vec<String>, Vec<String>) = required
            .iter()
            .cloned()
            .partition(|req| owned.contains(&req.to_lowercase()));

        let match_percentage = rounded_percentage(matched_skills.len(), required.len());
        let recommendations = recommendations_for(role, &missing_skills, match_percentage);
        let learning_order = self.learning_order(role, &missing_skills);

        GapResult {
            role: role.to_string(),
            matched_skills,
            missing_skills,
            recommendations,
            learning_order,
            match_percentage,
        }
    }

    /// Missing skills ordered by the role's priority ranks. Unranked skills go
    /// last; the sort is stable so ties keep their input order.
    fn learning_order(&self, role: &str, missing: &[String]) -> Vec<String> {
        let mut ordered = missing.to_vec();
        ordered.sort_by_key(|skill| self.catalog.priority(role, skill).unwrap_or(u32::MAX));
        ordered
    }
}

/// round(100 × part / whole), halves rounded up. `whole` must be non-zero.
fn rounded_percentage(part: usize, whole: usize) -> u32 {
    ((200 * part + whole) / (2 * whole)) as u32
}
