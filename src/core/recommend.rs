use crate::core::catalog::JobCatalog;
use crate::core::scorer::{evaluate, normalize_skill, normalize_skill_set};
use crate::domain::model::Recommendation;
use crate::utils::error::{MatchError, Result};
use std::collections::HashSet;

pub const DEFAULT_TOP_K: usize = 5;

/// 以技能向量的歐氏距離找出最接近的角色，僅供參考
pub fn recommend<S: AsRef<str>>(
    catalog: &JobCatalog,
    selected: &[S],
    k: usize,
) -> Result<Vec<Recommendation>> {
    if k == 0 {
        return Err(MatchError::InvalidConfigValueError {
            field: "top".to_string(),
            value: k.to_string(),
            reason: "Value must be at least 1".to_string(),
        });
    }

    let selected_keys = normalize_skill_set(selected);
    if selected_keys.is_empty() {
        return Err(MatchError::NoSkillsSelected);
    }

    let vocabulary: Vec<String> = catalog
        .skill_vocabulary()
        .into_iter()
        .map(normalize_skill)
        .collect();
    let user_vector = encode(&vocabulary, &selected_keys);
    // 所選技能都不在詞彙表內時，向量全為零
    if !user_vector.contains(&1) {
        return Err(MatchError::NoSkillsSelected);
    }

    let mut ranked = Vec::with_capacity(catalog.job_roles().len());
    for job in catalog.job_roles() {
        let role_keys = normalize_skill_set(&job.required_skills);
        let distance = euclidean(&user_vector, &encode(&vocabulary, &role_keys));
        let percent = evaluate(&job.required_skills, selected)?.percent;

        ranked.push(Recommendation {
            domain: job.domain.clone(),
            role: job.role.clone(),
            distance,
            percent,
        });
    }

    // sort_by 為穩定排序，距離相同時維持目錄順序
    ranked.sort_by(|a, b| a.distance.total_cmp(&b.distance));
    ranked.truncate(k);

    tracing::debug!(
        "Recommended {} roles for {} selected skills",
        ranked.len(),
        selected_keys.len()
    );

    Ok(ranked)
}

fn encode(vocabulary: &[String], keys: &HashSet<String>) -> Vec<u8> {
    vocabulary
        .iter()
        .map(|skill| u8::from(keys.contains(skill)))
        .collect()
}

fn euclidean(a: &[u8], b: &[u8]) -> f64 {
    a.iter()
        .zip(b)
        .map(|(x, y)| {
            let d = f64::from(x.abs_diff(*y));
            d * d
        })
        .sum::<f64>()
        .sqrt()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::JobRole;

    fn role(domain: &str, name: &str, skills: &[&str]) -> JobRole {
        JobRole {
            domain: domain.to_string(),
            role: name.to_string(),
            required_skills: skills.iter().map(|s| s.to_string()).collect(),
        }
    }

    fn catalog() -> JobCatalog {
        JobCatalog::new(
            vec![
                role("Data", "Data Scientist", &["Python", "SQL", "Machine Learning"]),
                role("Data", "Data Analyst", &["SQL", "Excel", "Tableau"]),
                role("Web", "Frontend Developer", &["HTML", "CSS", "JavaScript"]),
            ],
            vec![],
        )
        .unwrap()
    }

    #[test]
    fn test_exact_match_ranks_first() {
        let picks = recommend(&catalog(), &["sql", "excel", "TABLEAU"], 2).unwrap();

        assert_eq!(picks.len(), 2);
        assert_eq!(picks[0].role, "Data Analyst");
        assert_eq!(picks[0].distance, 0.0);
        assert_eq!(picks[0].percent, 100.0);
        assert_eq!(picks[1].role, "Data Scientist");
    }

    #[test]
    fn test_ties_keep_catalog_order() {
        // 兩個資料角色與 SQL 的距離都是 sqrt(2)
        let picks = recommend(&catalog(), &["sql"], 3).unwrap();
        assert_eq!(
            picks.iter().map(|r| r.role.as_str()).collect::<Vec<_>>(),
            vec!["Data Scientist", "Data Analyst", "Frontend Developer"]
        );
        assert_eq!(picks[0].distance, picks[1].distance);
        assert_eq!(picks[2].distance, 2.0);
    }

    #[test]
    fn test_rejects_selection_outside_vocabulary() {
        assert!(matches!(
            recommend(&catalog(), &["Rust", "Go"], 2),
            Err(MatchError::NoSkillsSelected)
        ));
    }

    #[test]
    fn test_rejects_empty_selection_and_zero_k() {
        let none: [&str; 0] = [];
        assert!(matches!(
            recommend(&catalog(), &none, 3),
            Err(MatchError::NoSkillsSelected)
        ));
        assert!(recommend(&catalog(), &["sql"], 0).is_err());
    }

    #[test]
    fn test_euclidean() {
        assert_eq!(euclidean(&[1, 0, 1], &[1, 0, 1]), 0.0);
        assert_eq!(euclidean(&[1, 1, 0, 0], &[0, 0, 1, 1]), 2.0);
    }
}
