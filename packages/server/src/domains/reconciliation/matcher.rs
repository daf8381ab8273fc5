use super::models::ReferenceCompany;
use super::normalize::normalize_company_name;

/// Minimum normalized length for the whole-word prefix rules. Shorter
/// names only match exactly.
pub const PREFIX_MIN_LEN: usize = 5;

/// Minimum normalized length for the unrestricted substring rules.
/// Short tokens appear inside unrelated longer names far too often.
pub const SUBSTRING_MIN_LEN: usize = 8;

/// Resolve a search-side employer name against the reference snapshot.
///
/// Candidates are scanned in the order given (the order the snapshot
/// was loaded in); the first one satisfying any rule wins. Returns
/// `None` when nothing matches.
pub fn find_match<'a>(
    search_name: &str,
    companies: &'a [ReferenceCompany],
) -> Option<&'a ReferenceCompany> {
    let search = normalize_company_name(search_name);
    companies
        .iter()
        .find(|company| is_name_match(&search, &normalize_company_name(&company.name)))
}

/// Tiered matching rules over two normalized names, in precedence order:
///
/// 1. Exact equality
/// 2. Reference (len >= 5) is a leading whole word of the search name
/// 3. Search (len >= 5) is a leading whole word of the reference name
/// 4. Reference (len >= 8) appears anywhere in the search name
/// 5. Search (len >= 8) appears anywhere in the reference name
///
/// The 5/8 thresholds are exact; they are what keeps short names from
/// spuriously matching inside longer unrelated ones.
fn is_name_match(search: &str, reference: &str) -> bool {
    if search == reference {
        return true;
    }
    if reference.len() >= PREFIX_MIN_LEN && search.starts_with(&format!("{reference} ")) {
        return true;
    }
    if search.len() >= PREFIX_MIN_LEN && reference.starts_with(&format!("{search} ")) {
        return true;
    }
    if reference.len() >= SUBSTRING_MIN_LEN && search.contains(reference) {
        return true;
    }
    if search.len() >= SUBSTRING_MIN_LEN && reference.contains(search) {
        return true;
    }
    false
}

#[cfg(test)]
mod tests {
    use super::*;

    fn company(id: &str, name: &str) -> ReferenceCompany {
        ReferenceCompany {
            id: id.to_string(),
            name: name.to_string(),
            tier: "A".to_string(),
            has_active_role: false,
        }
    }

    #[test]
    fn test_exact_match_case_insensitive() {
        let companies = vec![company("rec1", "Acme Manufacturing")];
        let hit = find_match("ACME MANUFACTURING", &companies);
        assert_eq!(hit.map(|c| c.id.as_str()), Some("rec1"));
    }

    #[test]
    fn test_exact_match_through_suffix_and_punctuation() {
        let companies = vec![company("rec1", "Acme Manufacturing, Inc.")];
        assert!(find_match("Acme Manufacturing LLC", &companies).is_some());
    }

    #[test]
    fn test_reference_as_whole_word_prefix_of_search() {
        let companies = vec![company("rec1", "Intel")];
        assert!(find_match("Intel Corporation", &companies).is_some());
    }

    #[test]
    fn test_no_match_without_word_boundary() {
        // "intellivation" contains "intel" but not "intel " — rejected.
        let companies = vec![company("rec1", "Intel")];
        assert!(find_match("Intellivation", &companies).is_none());
    }

    #[test]
    fn test_search_as_whole_word_prefix_of_reference() {
        let companies = vec![company("rec1", "Graco Minnesota")];
        assert!(find_match("Graco", &companies).is_some());
    }

    #[test]
    fn test_prefix_rule_needs_five_chars() {
        // "olin" (4 chars) is not long enough for the prefix rule.
        let companies = vec![company("rec1", "Olin")];
        assert!(find_match("Olin Chlor Alkali", &companies).is_none());
    }

    #[test]
    fn test_long_reference_substring_anywhere() {
        let companies = vec![company("rec1", "Johnson Controls")];
        assert!(find_match("ABC Johnson Controls Midwest", &companies).is_some());
    }

    #[test]
    fn test_long_search_substring_anywhere() {
        let companies = vec![company("rec1", "North Star Boeing Services")];
        assert!(find_match("Boeing Services", &companies).is_some());
    }

    #[test]
    fn test_short_name_never_matches_by_substring() {
        // A 4-char name is below both containment thresholds; only an
        // exact hit can match it.
        let companies = vec![company("rec1", "Ball")];
        assert!(find_match("Ballistic Devices", &companies).is_none());
        assert!(find_match("Herball Remedies", &companies).is_none());
        assert!(find_match("Ball, Inc.", &companies).is_some());
    }

    #[test]
    fn test_first_match_wins_in_scan_order() {
        let companies = vec![
            company("rec1", "Acme Manufacturing"),
            company("rec2", "Acme Manufacturing, Inc."),
        ];
        // Both normalize to the same name; the scan stops at the first.
        let hit = find_match("ACME Manufacturing", &companies).unwrap();
        assert_eq!(hit.id, "rec1");

        let reordered: Vec<_> = companies.into_iter().rev().collect();
        let hit = find_match("ACME Manufacturing", &reordered).unwrap();
        assert_eq!(hit.id, "rec2");
    }

    #[test]
    fn test_no_candidates_no_match() {
        assert!(find_match("Acme", &[]).is_none());
    }

    #[test]
    fn test_unrelated_names_do_not_match() {
        let companies = vec![company("rec1", "Honeywell")];
        assert!(find_match("General Mills", &companies).is_none());
    }
}
