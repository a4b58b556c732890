// Skill gap analysis: role catalog, input normalization, matching and the
// recommendation tiers layered on top of the match percentage.

pub mod catalog;
pub mod handlers;
pub mod input;
pub mod matcher;
pub mod recommendations;
