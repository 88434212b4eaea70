use crate::core::scorer::normalize_skill;
use crate::domain::model::{Company, JobRole};
use crate::utils::error::{MatchError, Result};
use crate::utils::validation::validate_url;
use csv::{ReaderBuilder, StringRecord, Trim};
use std::collections::HashSet;
use std::io::Read;

const DOMAIN_COLUMNS: &[&str] = &["domain"];
const ROLE_COLUMNS: &[&str] = &["job_role", "recommended_career"];
const SKILL_COLUMNS: &[&str] = &["required_skills", "skills"];
const COMPANY_COLUMNS: &[&str] = &["company", "company_name"];
const LINK_COLUMNS: &[&str] = &["apply_link"];

/// 職缺目錄：角色、必要技能與招募公司
#[derive(Debug, Clone, Default)]
pub struct JobCatalog {
    roles: Vec<JobRole>,
    companies: Vec<Company>,
}

/// 欄位名稱清理：去空白、轉小寫、空格換成底線
pub fn clean_header(header: &str) -> String {
    header.trim().to_lowercase().replace(' ', "_")
}

/// 以逗號分隔的技能欄位
pub fn split_skills(cell: &str) -> Vec<String> {
    cell.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

fn find_column(headers: &[String], aliases: &[&str]) -> Option<usize> {
    aliases
        .iter()
        .find_map(|alias| headers.iter().position(|h| h == alias))
}

fn require_column(headers: &[String], aliases: &[&str], source_name: &str) -> Result<usize> {
    find_column(headers, aliases).ok_or_else(|| MatchError::MissingColumn {
        source_name: source_name.to_string(),
        expected: aliases.join(" | "),
    })
}

fn cell(record: &StringRecord, index: usize) -> Option<&str> {
    record.get(index).map(str::trim).filter(|v| !v.is_empty())
}

fn read_headers<R: Read>(reader: &mut csv::Reader<R>) -> Result<Vec<String>> {
    Ok(reader.headers()?.iter().map(clean_header).collect())
}

fn company_from_row(
    record: &StringRecord,
    company_idx: usize,
    role_idx: usize,
    link_idx: Option<usize>,
) -> Option<Company> {
    let name = cell(record, company_idx)?;
    let role = cell(record, role_idx)?;

    let apply_link = link_idx
        .and_then(|idx| cell(record, idx))
        .and_then(|raw| match validate_url("apply_link", raw) {
            Ok(url) => Some(url),
            Err(e) => {
                tracing::warn!("⚠️ Dropping apply link for {}: {}", name, e);
                None
            }
        });

    Some(Company {
        name: name.to_string(),
        role: role.to_string(),
        apply_link,
    })
}

fn reader_for<R: Read>(source: R) -> csv::Reader<R> {
    ReaderBuilder::new().trim(Trim::All).from_reader(source)
}

impl JobCatalog {
    /// 由已解析的資料建立目錄
    pub fn new(roles: Vec<JobRole>, companies: Vec<Company>) -> Result<Self> {
        let mut catalog = Self::default();
        for role in roles {
            catalog.push_role(role);
        }
        catalog.companies = companies;

        if catalog.roles.is_empty() {
            return Err(MatchError::EmptyCatalog {
                source_name: "<in-memory>".to_string(),
            });
        }
        Ok(catalog)
    }

    pub fn from_csv_bytes(data: &[u8], source_name: &str) -> Result<Self> {
        Self::from_csv_reader(data, source_name)
    }

    pub fn from_csv_reader<R: Read>(source: R, source_name: &str) -> Result<Self> {
        let mut reader = reader_for(source);
        let headers = read_headers(&mut reader)?;

        let domain_idx = require_column(&headers, DOMAIN_COLUMNS, source_name)?;
        let role_idx = require_column(&headers, ROLE_COLUMNS, source_name)?;
        let skills_idx = require_column(&headers, SKILL_COLUMNS, source_name)?;
        let company_idx = find_column(&headers, COMPANY_COLUMNS);
        let link_idx = find_column(&headers, LINK_COLUMNS);

        let mut catalog = Self::default();
        let mut dropped = 0usize;

        for (line, record) in reader.records().enumerate() {
            let record = record?;

            if let Some(company_idx) = company_idx {
                if let Some(company) = company_from_row(&record, company_idx, role_idx, link_idx) {
                    catalog.companies.push(company);
                }
            }

            let (Some(domain), Some(role), Some(skills)) = (
                cell(&record, domain_idx),
                cell(&record, role_idx),
                cell(&record, skills_idx),
            ) else {
                tracing::debug!("Dropping incomplete row {} in {}", line + 2, source_name);
                dropped += 1;
                continue;
            };

            let required_skills = split_skills(skills);
            if required_skills.is_empty() {
                dropped += 1;
                continue;
            }

            catalog.push_role(JobRole {
                domain: domain.to_string(),
                role: role.to_string(),
                required_skills,
            });
        }

        if catalog.roles.is_empty() {
            return Err(MatchError::EmptyCatalog {
                source_name: source_name.to_string(),
            });
        }

        tracing::debug!(
            "Loaded {} roles and {} companies from {} ({} rows dropped)",
            catalog.roles.len(),
            catalog.companies.len(),
            source_name,
            dropped
        );

        Ok(catalog)
    }

    /// 載入獨立的公司 CSV
    pub fn with_companies_csv<R: Read>(mut self, source: R, source_name: &str) -> Result<Self> {
        let mut reader = reader_for(source);
        let headers = read_headers(&mut reader)?;

        let company_idx = require_column(&headers, COMPANY_COLUMNS, source_name)?;
        let role_idx = require_column(&headers, ROLE_COLUMNS, source_name)?;
        let link_idx = find_column(&headers, LINK_COLUMNS);

        let before = self.companies.len();
        for record in reader.records() {
            let record = record?;
            if let Some(company) = company_from_row(&record, company_idx, role_idx, link_idx) {
                self.companies.push(company);
            }
        }

        tracing::debug!(
            "Loaded {} companies from {}",
            self.companies.len() - before,
            source_name
        );
        Ok(self)
    }

    fn push_role(&mut self, mut role: JobRole) {
        role.required_skills = role
            .required_skills
            .iter()
            .map(|s| s.trim())
            .filter(|s| !s.is_empty())
            .map(str::to_string)
            .collect();
        if role.required_skills.is_empty() {
            tracing::debug!("Skipping role without skills {} / {}", role.domain, role.role);
            return;
        }

        // 重複的 (domain, role) 保留第一筆
        if self.lookup(&role.domain, &role.role).is_some() {
            tracing::debug!("Skipping duplicate role {} / {}", role.domain, role.role);
            return;
        }
        self.roles.push(role);
    }

    fn lookup(&self, domain: &str, role: &str) -> Option<&JobRole> {
        let domain_key = normalize_skill(domain);
        let role_key = normalize_skill(role);
        self.roles.iter().find(|r| {
            normalize_skill(&r.domain) == domain_key && normalize_skill(&r.role) == role_key
        })
    }

    pub fn job_roles(&self) -> &[JobRole] {
        &self.roles
    }

    /// 依首次出現順序列出領域
    pub fn domains(&self) -> Vec<&str> {
        let mut seen = HashSet::new();
        self.roles
            .iter()
            .filter(|r| seen.insert(normalize_skill(&r.domain)))
            .map(|r| r.domain.as_str())
            .collect()
    }

    pub fn roles(&self, domain: &str) -> Result<Vec<&str>> {
        let domain_key = normalize_skill(domain);
        let roles: Vec<&str> = self
            .roles
            .iter()
            .filter(|r| normalize_skill(&r.domain) == domain_key)
            .map(|r| r.role.as_str())
            .collect();

        if roles.is_empty() {
            return Err(MatchError::UnknownDomain {
                domain: domain.to_string(),
            });
        }
        Ok(roles)
    }

    pub fn find_role(&self, domain: &str, role: &str) -> Result<&JobRole> {
        // 先確認領域存在，錯誤訊息才會指向正確的欄位
        self.roles(domain)?;
        self.lookup(domain, role).ok_or_else(|| MatchError::UnknownRole {
            domain: domain.to_string(),
            role: role.to_string(),
        })
    }

    pub fn required_skills(&self, domain: &str, role: &str) -> Result<&[String]> {
        Ok(&self.find_role(domain, role)?.required_skills)
    }

    pub fn companies(&self, role: &str) -> Vec<&Company> {
        let role_key = normalize_skill(role);
        self.companies
            .iter()
            .filter(|c| normalize_skill(&c.role) == role_key)
            .collect()
    }

    /// 所有角色的技能，同一比對鍵只保留一個
    pub fn skill_vocabulary(&self) -> Vec<&str> {
        let mut seen = HashSet::new();
        self.roles
            .iter()
            .flat_map(|r| r.required_skills.iter())
            .filter(|s| seen.insert(normalize_skill(s)))
            .map(String::as_str)
            .collect()
    }
}
