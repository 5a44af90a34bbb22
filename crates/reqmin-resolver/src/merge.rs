//! Collapse requirements that share a version into a single requirement.

use reqmin_core::Requirement;

use crate::conflict::Conflict;

/// Combine two requirements on the same version.
pub fn combine(left: &Requirement, right: &Requirement) -> Result<Requirement, Conflict> {
    left.combine_same_pin(right)
        .ok_or_else(|| Conflict::NoCombination(left.clone(), right.clone()))
}

/// Merge a version-sorted sequence so that no two requirements share a version.
///
/// Adjacent requirements on the same version are combined left to right in
/// input order; the combined requirement then takes part in the next
/// combination. Every combination shrinks the sequence by one.
pub fn merge(mut reqs: Vec<Requirement>) -> Result<Vec<Requirement>, Conflict> {
    let mut i = 0;
    while i + 1 < reqs.len() {
        if reqs[i].version() != reqs[i + 1].version() {
            i += 1;
            continue;
        }
        let next = reqs.remove(i + 1);
        let combined = combine(&reqs[i], &next)?;
        tracing::trace!("combined {} and {} into {}", reqs[i], next, combined);
        // Everything before `i` still has distinct neighbours, so the scan
        // resumes at `i` rather than at the start.
        reqs[i] = combined;
    }
    Ok(reqs)
}
