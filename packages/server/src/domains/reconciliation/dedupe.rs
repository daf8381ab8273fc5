use std::collections::HashSet;

use super::models::{EmployerCandidate, RawJobListing};

/// Collapse raw listings into one candidate per distinct employer.
///
/// The key is the employer name lower-cased — case-folded only, not
/// normalized, so "Acme" and "ACME" collapse but "Acme" and
/// "Acme, Inc." stay separate. First-seen order is preserved and the
/// first listing for an employer supplies the representative title,
/// location, and URL.
pub fn dedupe_employers(listings: Vec<RawJobListing>) -> Vec<EmployerCandidate> {
    let mut seen = HashSet::new();
    let mut candidates = Vec::new();

    for listing in listings {
        let key = listing.employer_name.to_lowercase();
        if seen.insert(key) {
            candidates.push(EmployerCandidate {
                name: listing.employer_name,
                title: listing.job_title,
                location: listing.city,
                url: listing.apply_url,
            });
        }
    }

    candidates
}
