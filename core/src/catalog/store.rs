//! Bundled use case records, loaded once at process start.

use lazy_static::lazy_static;

use super::types::UseCase;

const USE_CASES_JSON: &str = include_str!("../../data/use_cases.json");

lazy_static! {
    static ref USE_CASES: Vec<UseCase> =
        serde_json::from_str(USE_CASES_JSON).expect("bundled use_cases.json is valid");
}

pub fn all() -> &'static [UseCase] {
    &USE_CASES
}

pub fn find(id: &str) -> Option<&'static UseCase> {
    USE_CASES.iter().find(|uc| uc.id == id)
}

pub fn search(query: &str) -> Vec<&'static UseCase> {
    let q = query.trim();
    if q.is_empty() {
        return USE_CASES.iter().collect();
    }
    USE_CASES.iter().filter(|uc| uc.matches(q)).collect()
}

/// Distinct categories in catalog order, for the filter UI.
pub fn categories() -> Vec<&'static str> {
    let mut out: Vec<&'static str> = Vec::new();
    for uc in USE_CASES.iter() {
        if !out.contains(&uc.category.as_str()) {
            out.push(uc.category.as_str());
        }
    }
    out
}
