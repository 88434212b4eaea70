use skill_match::{evaluate, normalize_skill, MatchError, ELIGIBILITY_THRESHOLD};
use std::collections::HashSet;

const REQUIRED: [&str; 5] = ["Python", "SQL", "Machine Learning", "Data Visualization", "Statistics"];

fn keys(labels: &[String]) -> HashSet<String> {
    labels.iter().map(|s| normalize_skill(s)).collect()
}

/// 所有子集合都要滿足分割與百分比的性質
#[test]
fn test_every_subset_partitions_required() {
    let candidates = ["python", " SQL", "machinelearning", "data visualization", "STATISTICS"];

    for mask in 0u32..(1 << candidates.len()) {
        let selected: Vec<&str> = candidates
            .iter()
            .enumerate()
            .filter(|(i, _)| mask & (1 << i) != 0)
            .map(|(_, s)| *s)
            .collect();

        let result = evaluate(&REQUIRED, &selected).unwrap();
        let hits = selected.len();

        assert_eq!(result.matched.len() + result.missing.len(), REQUIRED.len());
        assert!(keys(&result.matched).is_disjoint(&keys(&result.missing)));
        assert_eq!(result.matched.len(), hits);
        assert_eq!(result.percent, 100.0 * hits as f64 / 5.0);
        assert_eq!(result.percent == 100.0, hits == REQUIRED.len());
        assert_eq!(result.percent == 0.0, hits == 0);
        assert_eq!(result.eligible, result.percent >= ELIGIBILITY_THRESHOLD);
    }
}

#[test]
fn test_unrelated_skills_score_zero() {
    let result = evaluate(&REQUIRED, &["Rust", "Kubernetes"]).unwrap();
    assert_eq!(result.percent, 0.0);
    assert!(!result.eligible);
    assert_eq!(result.missing, REQUIRED.to_vec());
}

#[test]
fn test_threshold_is_inclusive() {
    assert_eq!(ELIGIBILITY_THRESHOLD, 60.0);

    let three = evaluate(&REQUIRED, &["python", "sql", "statistics"]).unwrap();
    assert_eq!(three.percent, 60.0);
    assert!(three.eligible);

    let two = evaluate(&REQUIRED, &["python", "sql"]).unwrap();
    assert_eq!(two.percent, 40.0);
    assert!(!two.eligible);
}

#[test]
fn test_labels_keep_original_spelling() {
    let result = evaluate(&["Machine Learning"], &[" MachineLearning "]).unwrap();
    assert_eq!(result.matched, vec!["Machine Learning"]);
    assert_eq!(result.percent, 100.0);
}

#[test]
fn test_empty_required_is_a_precondition_error() {
    let none: [&str; 0] = [];
    let err = evaluate(&none, &["python"]).unwrap_err();
    assert!(matches!(err, MatchError::EmptyRequiredSkills));
}
