use crate::domain::model::MatchOutcome;
use crate::utils::error::{MatchError, Result};
use csv::WriterBuilder;
use std::fmt::Write as _;
use std::io::Write;
use std::str::FromStr;
use zip::write::{FileOptions, ZipWriter};

pub const REPORT_STEM: &str = "match_report";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportFormat {
    Csv,
    Tsv,
    Json,
}

impl ReportFormat {
    pub const ALL: [&'static str; 3] = ["csv", "tsv", "json"];

    pub fn extension(&self) -> &'static str {
        match self {
            ReportFormat::Csv => "csv",
            ReportFormat::Tsv => "tsv",
            ReportFormat::Json => "json",
        }
    }

    pub fn file_name(&self) -> String {
        format!("{}.{}", REPORT_STEM, self.extension())
    }
}

impl FromStr for ReportFormat {
    type Err = MatchError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "csv" => Ok(ReportFormat::Csv),
            "tsv" => Ok(ReportFormat::Tsv),
            "json" => Ok(ReportFormat::Json),
            other => Err(MatchError::InvalidConfigValueError {
                field: "output.formats".to_string(),
                value: other.to_string(),
                reason: format!("Unsupported format. Valid formats: {}", Self::ALL.join(", ")),
            }),
        }
    }
}

/// 顯示用：四捨五入到小數點後兩位
pub fn round_percent(percent: f64) -> f64 {
    (percent * 100.0).round() / 100.0
}

/// 每段英文字首大寫，例如 `"machine learning"` 轉為 `"Machine Learning"`
pub fn title_case(label: &str) -> String {
    let mut out = String::with_capacity(label.len());
    let mut in_word = false;

    for c in label.chars() {
        if c.is_alphabetic() {
            if in_word {
                out.extend(c.to_lowercase());
            } else {
                out.extend(c.to_uppercase());
            }
            in_word = true;
        } else {
            out.push(c);
            in_word = false;
        }
    }

    out
}

fn render_delimited(outcome: &MatchOutcome, delimiter: u8) -> Result<Vec<u8>> {
    let mut writer = WriterBuilder::new()
        .delimiter(delimiter)
        .from_writer(Vec::new());

    writer.write_record(["domain", "role", "skill", "status", "match_percent", "eligible"])?;

    let percent = format!("{:.2}", round_percent(outcome.result.percent));
    let eligible = outcome.result.eligible.to_string();
    let rows = outcome
        .result
        .matched
        .iter()
        .map(|s| (s, "matched"))
        .chain(outcome.result.missing.iter().map(|s| (s, "missing")));

    for (skill, status) in rows {
        writer.write_record([
            outcome.request.domain.as_str(),
            outcome.request.role.as_str(),
            skill.as_str(),
            status,
            percent.as_str(),
            eligible.as_str(),
        ])?;
    }

    writer
        .into_inner()
        .map_err(|e| MatchError::IoError(e.into_error()))
}

/// Renders one report file per requested format.
pub fn render(outcome: &MatchOutcome, formats: &[ReportFormat]) -> Result<Vec<(String, Vec<u8>)>> {
    let mut files = Vec::with_capacity(formats.len());

    for format in formats {
        let data = match format {
            ReportFormat::Csv => render_delimited(outcome, b',')?,
            ReportFormat::Tsv => render_delimited(outcome, b'\t')?,
            ReportFormat::Json => serde_json::to_vec_pretty(outcome)?,
        };
        files.push((format.file_name(), data));
    }

    Ok(files)
}

/// 將多個報表檔案打包成單一 ZIP
pub fn bundle(files: &[(String, Vec<u8>)]) -> Result<Vec<u8>> {
    let mut zip = ZipWriter::new(std::io::Cursor::new(Vec::new()));

    for (name, data) in files {
        zip.start_file::<_, ()>(name.as_str(), FileOptions::default())?;
        zip.write_all(data)?;
    }

    let cursor = zip.finish()?;
    Ok(cursor.into_inner())
}

/// Terminal summary of an outcome.
pub fn render_text(outcome: &MatchOutcome) -> String {
    let result = &outcome.result;
    let mut out = String::new();

    let _ = writeln!(
        out,
        "🎯 {} / {}",
        outcome.request.domain, outcome.request.role
    );
    let _ = writeln!(out, "📊 Skill match: {:.2}%", round_percent(result.percent));

    if result.eligible {
        let _ = writeln!(out, "✅ You are eligible for this role");
    } else {
        let _ = writeln!(out, "❌ You are not eligible for this role yet");
    }

    if !result.missing.is_empty() {
        let _ = writeln!(out, "📚 Skills to learn:");
        for skill in &result.missing {
            let _ = writeln!(out, "  - {}", title_case(skill));
        }
    }

    if !outcome.companies.is_empty() {
        let _ = writeln!(out, "🏢 Companies hiring:");
        for company in &outcome.companies {
            match &company.apply_link {
                Some(link) => {
                    let _ = writeln!(out, "  - {} ({})", company.name, link);
                }
                None => {
                    let _ = writeln!(out, "  - {}", company.name);
                }
            }
        }
    }

    if !outcome.recommendations.is_empty() {
        let _ = writeln!(out, "🔎 Closest roles:");
        for rec in &outcome.recommendations {
            let _ = writeln!(
                out,
                "  - {} ({}) → Distance: {:.2}, Match: {:.2}%",
                rec.role,
                rec.domain,
                rec.distance,
                round_percent(rec.percent)
            );
        }
    }

    out
}
