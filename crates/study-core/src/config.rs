//! Tool configuration from environment variables.

use std::env;

/// Settings for the study-info tool.
#[derive(Clone, Debug)]
pub struct StudyConfig {
    /// Deepest variation nesting to list (STUDY_MAX_VARIATION_DEPTH).
    pub max_variation_depth: usize,

    /// FEN to replay from instead of the standard start (STUDY_START_FEN).
    pub start_fen: Option<String>,
}

impl StudyConfig {
    pub fn from_env() -> Self {
        let max_variation_depth = env::var("STUDY_MAX_VARIATION_DEPTH")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(10);

        let start_fen = env::var("STUDY_START_FEN").ok();

        Self {
            max_variation_depth,
            start_fen,
        }
    }
}
