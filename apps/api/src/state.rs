use std::sync::Arc;

use crate::headlines::HeadlineClient;
use crate::history::AnalysisStore;
use crate::roadmap::RoadmapProvider;
use crate::skills::matcher::SkillMatcher;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Holds the role catalog loaded at startup.
    pub matcher: SkillMatcher,
    pub roadmaps: Arc<RoadmapProvider>,
    /// Pluggable analysis log. Default: JsonFileStore. Swap via ANALYSIS_STORE.
    pub store: Arc<dyn AnalysisStore>,
    pub headlines: HeadlineClient,
}
