use crate::core::catalog::JobCatalog;
use crate::core::recommend::recommend;
use crate::core::report::{self, ReportFormat};
use crate::core::scorer::{evaluate, normalize_skill_set};
use crate::core::{ConfigProvider, MatchOutcome, Pipeline, Storage};
use crate::utils::error::{MatchError, Result};
use chrono::Utc;
use std::path::Path;

/// 載入目錄、評估請求並寫出報表
pub struct MatchPipeline<S: Storage, C: ConfigProvider> {
    storage: S,
    config: C,
}

impl<S: Storage, C: ConfigProvider> MatchPipeline<S, C> {
    pub fn new(storage: S, config: C) -> Self {
        Self { storage, config }
    }

    pub fn config(&self) -> &C {
        &self.config
    }

    fn output_file(&self, name: &str) -> String {
        Path::new(self.config.output_path())
            .join(name)
            .to_string_lossy()
            .into_owned()
    }
}

#[async_trait::async_trait]
impl<S: Storage, C: ConfigProvider> Pipeline for MatchPipeline<S, C> {
    async fn extract(&self) -> Result<JobCatalog> {
        let roles_file = self.config.roles_file();
        tracing::debug!("Reading role catalog from: {}", roles_file);
        let data = self.storage.read_file(roles_file).await?;
        let mut catalog = JobCatalog::from_csv_bytes(&data, roles_file)?;

        if let Some(companies_file) = self.config.companies_file() {
            tracing::debug!("Reading company directory from: {}", companies_file);
            let data = self.storage.read_file(companies_file).await?;
            catalog = catalog.with_companies_csv(data.as_slice(), companies_file)?;
        }

        Ok(catalog)
    }

    async fn transform(&self, catalog: &JobCatalog) -> Result<MatchOutcome> {
        let request = self.config.request();
        let required = [
            ("evaluate.domain", &request.domain),
            ("evaluate.role", &request.role),
        ];
        for (field, value) in required {
            if value.trim().is_empty() {
                return Err(MatchError::MissingConfigError {
                    field: field.to_string(),
                });
            }
        }

        let job = catalog.find_role(&request.domain, &request.role)?;
        let result = evaluate(&job.required_skills, &request.selected)?;

        let companies = catalog
            .companies(&job.role)
            .into_iter()
            .cloned()
            .collect();

        // 推薦只是參考資訊，沒有可用的技能時直接略過
        let recommendations = match request.top_k {
            Some(k) if !normalize_skill_set(&request.selected).is_empty() => {
                match recommend(catalog, &request.selected, k) {
                    Ok(picks) => picks,
                    Err(MatchError::NoSkillsSelected) => {
                        tracing::debug!("Selected skills are not in the catalog, skipping recommendations");
                        Vec::new()
                    }
                    Err(e) => return Err(e),
                }
            }
            _ => Vec::new(),
        };

        // 報表使用目錄中的標準名稱
        let mut request = request.clone();
        request.domain = job.domain.clone();
        request.role = job.role.clone();

        Ok(MatchOutcome {
            request,
            result,
            companies,
            recommendations,
            generated_at: Utc::now(),
        })
    }

    async fn load(&self, outcome: MatchOutcome) -> Result<String> {
        let formats = self
            .config
            .output_formats()
            .iter()
            .map(|f| f.parse::<ReportFormat>())
            .collect::<Result<Vec<_>>>()?;

        let files = report::render(&outcome, &formats)?;

        if self.config.compress_output() {
            let archive = report::bundle(&files)?;
            let path = self.output_file(self.config.archive_name());
            tracing::debug!("Writing ZIP file ({} bytes) to {}", archive.len(), path);
            self.storage.write_file(&path, &archive).await?;
            return Ok(path);
        }

        for (name, data) in &files {
            let path = self.output_file(name);
            tracing::debug!("Writing {} ({} bytes)", path, data.len());
            self.storage.write_file(&path, data).await?;
        }

        Ok(self.config.output_path().to_string())
    }
}
