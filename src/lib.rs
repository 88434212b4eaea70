pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::CliConfig;

pub use crate::config::{storage::LocalStorage, toml_config::MatchConfig};
pub use crate::core::{
    catalog::JobCatalog,
    engine::MatchEngine,
    pipeline::MatchPipeline,
    recommend::recommend,
    scorer::{evaluate, normalize_skill, ELIGIBILITY_THRESHOLD},
};
pub use crate::domain::model::{Company, JobRole, MatchOutcome, MatchRequest, MatchResult, Recommendation};
pub use crate::utils::error::{MatchError, Result};
