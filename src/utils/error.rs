use thiserror::Error;

#[derive(Error, Debug)]
pub enum MatchError {
    #[error("Required skill list is empty")]
    EmptyRequiredSkills,

    #[error("No skills selected")]
    NoSkillsSelected,

    #[error("Unknown domain: {domain}")]
    UnknownDomain { domain: String },

    #[error("Unknown role '{role}' in domain '{domain}'")]
    UnknownRole { domain: String, role: String },

    #[error("Catalog '{source_name}' has no usable rows")]
    EmptyCatalog { source_name: String },

    #[error("Catalog '{source_name}' is missing column: {expected}")]
    MissingColumn { source_name: String, expected: String },

    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Zip operation failed: {0}")]
    ZipError(#[from] zip::result::ZipError),

    #[error("Configuration parse error in {field}: {message}")]
    ConfigParseError { field: String, message: String },

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required configuration: {field}")]
    MissingConfigError { field: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Input,
    Data,
    Configuration,
    System,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl MatchError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            MatchError::NoSkillsSelected
            | MatchError::UnknownDomain { .. }
            | MatchError::UnknownRole { .. } => ErrorCategory::Input,
            MatchError::EmptyRequiredSkills
            | MatchError::EmptyCatalog { .. }
            | MatchError::MissingColumn { .. }
            | MatchError::CsvError(_) => ErrorCategory::Data,
            MatchError::ConfigParseError { .. }
            | MatchError::InvalidConfigValueError { .. }
            | MatchError::MissingConfigError { .. } => ErrorCategory::Configuration,
            MatchError::IoError(_)
            | MatchError::SerializationError(_)
            | MatchError::ZipError(_) => ErrorCategory::System,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Input => ErrorSeverity::Low,
            ErrorCategory::Configuration => ErrorSeverity::Medium,
            ErrorCategory::Data => ErrorSeverity::High,
            ErrorCategory::System => ErrorSeverity::Critical,
        }
    }

    /// 給終端使用者看的訊息
    pub fn user_friendly_message(&self) -> String {
        match self {
            MatchError::NoSkillsSelected => "Please select at least one skill!".to_string(),
            MatchError::EmptyRequiredSkills => {
                "The selected role has no required skills in the catalog".to_string()
            }
            MatchError::UnknownDomain { domain } => format!("Domain '{}' was not found", domain),
            MatchError::UnknownRole { domain, role } => {
                format!("Role '{}' was not found under domain '{}'", role, domain)
            }
            MatchError::EmptyCatalog { source_name } => {
                format!("No job data could be read from '{}'", source_name)
            }
            MatchError::MissingColumn { source_name, expected } => {
                format!("'{}' does not have a '{}' column", source_name, expected)
            }
            MatchError::IoError(e) if e.kind() == std::io::ErrorKind::NotFound => {
                format!("File not found: {}", e)
            }
            other => other.to_string(),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            MatchError::NoSkillsSelected => "Pass one or more skills with --skills a,b,c",
            MatchError::UnknownDomain { .. } => "Run `skill-match domains` to see valid domains",
            MatchError::UnknownRole { .. } => {
                "Run `skill-match roles --domain <DOMAIN>` to see valid roles"
            }
            MatchError::EmptyRequiredSkills | MatchError::EmptyCatalog { .. } => {
                "Check that the roles file has non-empty required_skills cells"
            }
            MatchError::MissingColumn { .. } | MatchError::CsvError(_) => {
                "Check the CSV header and that every row has the same number of fields"
            }
            MatchError::IoError(_) => "Make sure the data files exist and are readable",
            MatchError::SerializationError(_) | MatchError::ZipError(_) => {
                "Check free disk space and permissions on the output directory"
            }
            MatchError::ConfigParseError { .. }
            | MatchError::InvalidConfigValueError { .. }
            | MatchError::MissingConfigError { .. } => {
                "Review the configuration file and command line arguments"
            }
        }
    }

    /// 依嚴重程度決定 CLI 結束碼
    pub fn exit_code(&self) -> i32 {
        match self.severity() {
            ErrorSeverity::Low | ErrorSeverity::Medium => 1,
            ErrorSeverity::High => 2,
            ErrorSeverity::Critical => 3,
        }
    }
}

pub type Result<T> = std::result::Result<T, MatchError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_categories() {
        assert_eq!(MatchError::NoSkillsSelected.category(), ErrorCategory::Input);
        assert_eq!(MatchError::EmptyRequiredSkills.category(), ErrorCategory::Data);
        assert_eq!(
            MatchError::MissingConfigError {
                field: "catalog.roles_file".to_string()
            }
            .category(),
            ErrorCategory::Configuration
        );
    }

    #[test]
    fn test_exit_codes_follow_severity() {
        assert_eq!(MatchError::NoSkillsSelected.exit_code(), 1);
        assert_eq!(MatchError::EmptyRequiredSkills.exit_code(), 2);
        let io = MatchError::IoError(std::io::Error::new(std::io::ErrorKind::NotFound, "x"));
        assert_eq!(io.exit_code(), 3);
        assert!(io.user_friendly_message().starts_with("File not found"));
    }
}
