use crate::core::report::ReportFormat;
use crate::core::{ConfigProvider, MatchRequest};
use crate::utils::error::{MatchError, Result};
use crate::utils::validation::{validate_choices, validate_path, validate_positive_number, Validate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;

pub const LOG_FORMATS: [&str; 2] = ["text", "json"];

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct MatchConfig {
    pub catalog: CatalogConfig,
    #[serde(rename = "evaluate")]
    pub request: MatchRequest,
    pub output: OutputConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CatalogConfig {
    pub roles_file: String,
    pub companies_file: Option<String>,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            roles_file: "roles.csv".to_string(),
            companies_file: None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub path: String,
    pub formats: Vec<String>,
    pub compress: bool,
    pub archive_name: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            path: "./output".to_string(),
            formats: vec!["csv".to_string(), "json".to_string()],
            compress: false,
            archive_name: "match_report.zip".to_string(),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: Option<String>,
    pub format: Option<String>,
}

impl MatchConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| MatchError::ConfigParseError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${DATA_DIR})，未設定的變數保留原樣
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| MatchError::ConfigParseError {
            field: "env_substitution".to_string(),
            message: e.to_string(),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.into_owned())
    }

    pub fn log_as_json(&self) -> bool {
        self.logging.format.as_deref() == Some("json")
    }
}

impl ConfigProvider for MatchConfig {
    fn roles_file(&self) -> &str {
        &self.catalog.roles_file
    }

    fn companies_file(&self) -> Option<&str> {
        self.catalog.companies_file.as_deref()
    }

    fn output_path(&self) -> &str {
        &self.output.path
    }

    fn output_formats(&self) -> &[String] {
        &self.output.formats
    }

    fn compress_output(&self) -> bool {
        self.output.compress
    }

    fn archive_name(&self) -> &str {
        &self.output.archive_name
    }

    fn request(&self) -> &MatchRequest {
        &self.request
    }
}

impl Validate for MatchConfig {
    fn validate(&self) -> Result<()> {
        validate_path("catalog.roles_file", &self.catalog.roles_file)?;
        if let Some(companies_file) = &self.catalog.companies_file {
            validate_path("catalog.companies_file", companies_file)?;
        }

        validate_path("output.path", &self.output.path)?;
        validate_path("output.archive_name", &self.output.archive_name)?;
        validate_choices("output.formats", &self.output.formats, &ReportFormat::ALL)?;
        if self.output.formats.is_empty() {
            return Err(MatchError::InvalidConfigValueError {
                field: "output.formats".to_string(),
                value: String::new(),
                reason: "At least one output format is required".to_string(),
            });
        }

        if let Some(top_k) = self.request.top_k {
            validate_positive_number("evaluate.top_k", top_k, 1)?;
        }

        if let Some(format) = &self.logging.format {
            validate_choices("logging.format", std::slice::from_ref(format), &LOG_FORMATS)?;
        }

        Ok(())
    }
}
