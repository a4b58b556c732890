//! Roadmap Provider — phased learning plans per role, with a generic plan for
//! roles that have no canned entry. Attached to saved analyses as opaque JSON.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

pub mod handlers;
pub mod plans;

const GENERIC_NOTE: &str =
    "This is a generic roadmap. Research specific requirements for your target role.";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Phase {
    pub phase: u8,
    pub title: String,
    pub duration: String,
    pub skills: Vec<String>,
    pub description: String,
    pub milestones: Vec<String>,
}

/// A plan as stored in the table, before it is bound to a requested role.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoadmapPlan {
    pub phases: Vec<Phase>,
    pub total_duration: String,
    pub career_tips: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Roadmap {
    pub target_role: String,
    #[serde(flatten)]
    pub plan: RoadmapPlan,
    /// Present only on the generic fallback plan.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub note: Option<String>,
}

impl Roadmap {
    pub fn is_generic(&self) -> bool {
        self.note.is_some()
    }
}

pub struct RoadmapProvider {
    plans: HashMap<String, RoadmapPlan>,
}

impl RoadmapProvider {
    pub fn new(plans: impl IntoIterator<Item = (String, RoadmapPlan)>) -> Self {
        Self {
            plans: plans.into_iter().collect(),
        }
    }

    /// Plan for `role` (trimmed, exact key), or the generic plan.
    pub fn roadmap_for(&self, role: &str) -> Roadmap {
        let role = role.trim();
        match self.plans.get(role) {
            Some(plan) => Roadmap {
                target_role: role.to_string(),
                plan: plan.clone(),
                note: None,
            },
            None => Roadmap {
                target_role: role.to_string(),
                plan: plans::generic_plan(role),
                note: Some(GENERIC_NOTE.to_string()),
            },
        }
    }
}

impl Default for RoadmapProvider {
    fn default() -> Self {
        Self::new(
            plans::builtin_plans()
                .into_iter()
                .map(|(role, plan)| (role.to_string(), plan)),
        )
    }
}
