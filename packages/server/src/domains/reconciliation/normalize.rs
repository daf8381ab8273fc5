/// Corporate suffix tokens stripped from the end of a company name.
///
/// The list is closed. Notably "corporation" is absent (only "corp"),
/// and that is intentional: widening the list changes which employer
/// names match which companies.
const CORPORATE_SUFFIXES: &[&str] = &[
    "inc",
    "llc",
    "corp",
    "co",
    "ltd",
    "engineering",
    "engineers",
    "group",
    "company",
    "technologies",
    "consulting",
];

/// Canonicalize a raw company name for comparison.
///
/// Steps, in order:
/// 1. Lowercase
/// 2. Separator punctuation (`, . - ( )`) becomes a space
/// 3. At most one trailing corporate-suffix token is removed
///    (optional trailing period tolerated)
/// 4. Whitespace runs collapse to single spaces
/// 5. Leading/trailing whitespace trimmed
///
/// Pure function, no side effects. Empty or whitespace-only input
/// normalizes to the empty string.
pub fn normalize_company_name(name: &str) -> String {
    let lowered: String = name
        .to_lowercase()
        .chars()
        .map(|c| match c {
            ',' | '.' | '-' | '(' | ')' => ' ',
            other => other,
        })
        .collect();

    let mut tokens: Vec<&str> = lowered.split_whitespace().collect();

    if let Some(last) = tokens.last() {
        let candidate = last.strip_suffix('.').unwrap_or(last);
        if CORPORATE_SUFFIXES.contains(&candidate) {
            tokens.pop();
        }
    }

    tokens.join(" ")
}
