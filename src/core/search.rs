use super::types::FamilyRecord;

/// Families whose head's name contains `term` (case-insensitive) or whose
/// national id contains it. An empty or blank term matches every family.
/// Input order is preserved.
pub fn search_families<'a>(families: &'a [FamilyRecord], term: &str) -> Vec<&'a FamilyRecord> {
    let term = term.trim();
    if term.is_empty() {
        return families.iter().collect();
    }
    let needle = term.to_lowercase();
    families
        .iter()
        .filter(|f| f.full_name.to_lowercase().contains(&needle) || f.national_id.contains(term))
        .collect()
}
