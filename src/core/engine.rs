use crate::core::{MatchOutcome, Pipeline};
use crate::utils::error::Result;

pub struct MatchEngine<P: Pipeline> {
    pipeline: P,
}

impl<P: Pipeline> MatchEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self { pipeline }
    }

    pub fn pipeline(&self) -> &P {
        &self.pipeline
    }

    /// 載入目錄並評估，不寫出任何檔案
    pub async fn evaluate_only(&self) -> Result<MatchOutcome> {
        tracing::info!("📂 Loading job catalog...");
        let catalog = self.pipeline.extract().await?;
        tracing::info!(
            "📂 Loaded {} roles across {} domains",
            catalog.job_roles().len(),
            catalog.domains().len()
        );

        tracing::info!("🧮 Scoring skill match...");
        let outcome = self.pipeline.transform(&catalog).await?;
        tracing::info!(
            "🧮 {} matched, {} missing ({:.2}%)",
            outcome.result.matched.len(),
            outcome.result.missing.len(),
            outcome.result.percent
        );

        Ok(outcome)
    }

    pub async fn run(&self) -> Result<String> {
        let outcome = self.evaluate_only().await?;

        tracing::info!("💾 Writing report...");
        let output_path = self.pipeline.load(outcome).await?;
        tracing::info!("💾 Report saved to: {}", output_path);

        Ok(output_path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::catalog::JobCatalog;
    use crate::domain::model::{JobRole, MatchRequest, MatchResult};
    use crate::utils::error::MatchError;
    use chrono::Utc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[derive(Default)]
    struct MockPipeline {
        loads: AtomicUsize,
        fail_extract: bool,
    }

    #[async_trait::async_trait]
    impl Pipeline for MockPipeline {
        async fn extract(&self) -> Result<JobCatalog> {
            if self.fail_extract {
                return Err(MatchError::EmptyCatalog {
                    source_name: "mock".to_string(),
                });
            }
            JobCatalog::new(
                vec![JobRole {
                    domain: "Data".to_string(),
                    role: "Data Analyst".to_string(),
                    required_skills: vec!["SQL".to_string()],
                }],
                vec![],
            )
        }

        async fn transform(&self, _catalog: &JobCatalog) -> Result<MatchOutcome> {
            Ok(MatchOutcome {
                request: MatchRequest::default(),
                result: MatchResult {
                    matched: vec!["SQL".to_string()],
                    missing: vec![],
                    percent: 100.0,
                    eligible: true,
                },
                companies: vec![],
                recommendations: vec![],
                generated_at: Utc::now(),
            })
        }

        async fn load(&self, _outcome: MatchOutcome) -> Result<String> {
            self.loads.fetch_add(1, Ordering::SeqCst);
            Ok("mock-output".to_string())
        }
    }

    #[tokio::test]
    async fn test_run_goes_through_every_phase() {
        let engine = MatchEngine::new(MockPipeline::default());
        assert_eq!(engine.run().await.unwrap(), "mock-output");
        assert_eq!(engine.pipeline().loads.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_evaluate_only_does_not_load() {
        let engine = MatchEngine::new(MockPipeline::default());
        let outcome = engine.evaluate_only().await.unwrap();
        assert!(outcome.result.eligible);
        assert_eq!(engine.pipeline().loads.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_extract_failure_stops_run() {
        let engine = MatchEngine::new(MockPipeline {
            fail_extract: true,
            ..Default::default()
        });
        assert!(engine.run().await.is_err());
        assert_eq!(engine.pipeline().loads.load(Ordering::SeqCst), 0);
    }
}
