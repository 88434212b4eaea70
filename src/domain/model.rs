use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use url::Url;

/// 一次評估的結果，每次請求都重新計算，不保存
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchResult {
    pub matched: Vec<String>,
    pub missing: Vec<String>,
    pub percent: f64,
    pub eligible: bool,
}

/// 職缺目錄中的一列
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobRole {
    pub domain: String,
    pub role: String,
    pub required_skills: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Company {
    pub name: String,
    pub role: String,
    pub apply_link: Option<Url>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recommendation {
    pub domain: String,
    pub role: String,
    pub distance: f64,
    pub percent: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MatchRequest {
    pub domain: String,
    pub role: String,
    pub selected: Vec<String>,
    pub top_k: Option<usize>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchOutcome {
    pub request: MatchRequest,
    pub result: MatchResult,
    pub companies: Vec<Company>,
    pub recommendations: Vec<Recommendation>,
    pub generated_at: DateTime<Utc>,
}
