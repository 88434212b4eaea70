pub mod catalog;
pub mod engine;
pub mod pipeline;
pub mod recommend;
pub mod report;
pub mod scorer;

pub use crate::domain::model::{Company, JobRole, MatchOutcome, MatchRequest, MatchResult, Recommendation};
pub use crate::domain::ports::{ConfigProvider, Pipeline, Storage};
pub use crate::utils::error::Result;
