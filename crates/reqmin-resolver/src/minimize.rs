//! Drop requirements implied by tighter ones.
//!
//! The input is sorted by version and has no two requirements on the same
//! version (the output of [`crate::merge::merge`]).

use reqmin_core::{Operator, Requirement};

use crate::conflict::Conflict;

/// Reduce a merged, version-sorted sequence to its minimal equivalent.
pub fn minimize(reqs: Vec<Requirement>) -> Result<Vec<Requirement>, Conflict> {
    if reqs.len() <= 1 {
        return Ok(reqs);
    }
    match reqs.iter().position(|r| r.operator() == Operator::Equal) {
        Some(pin_at) => minimize_pinned(reqs, pin_at),
        None => minimize_unpinned(reqs),
    }
}

/// A single `==` implies every other requirement it is consistent with.
fn minimize_pinned(
    mut reqs: Vec<Requirement>,
    pin_at: usize,
) -> Result<Vec<Requirement>, Conflict> {
    let pin = &reqs[pin_at];
    for (i, req) in reqs.iter().enumerate() {
        let op = req.operator();
        if i < pin_at && op.is_upper() {
            return Err(Conflict::UpperBelowPin(req.clone(), pin.clone()));
        }
        if i > pin_at && op == Operator::Equal {
            return Err(Conflict::MultiplePins(pin.clone(), req.clone()));
        }
        if i > pin_at && op.is_lower() {
            return Err(Conflict::LowerAbovePin(pin.clone(), req.clone()));
        }
    }
    Ok(vec![reqs.swap_remove(pin_at)])
}

/// Keeps the tightest lower bound, the first upper bound, and the `!=`
/// exclusions between them.
fn minimize_unpinned(reqs: Vec<Requirement>) -> Result<Vec<Requirement>, Conflict> {
    let last_lower = reqs.iter().rposition(|r| r.operator().is_lower());
    let mut keep = vec![false; reqs.len()];
    // Exclusions from `start` on are kept unless a later lower bound drops them.
    let mut start = 0;
    let mut end = reqs.len();

    for (i, req) in reqs.iter().enumerate() {
        let op = req.operator();
        if op.is_upper() {
            if let Some(lower) = reqs[i + 1..].iter().find(|r| r.operator().is_lower()) {
                return Err(Conflict::UpperBelowLower(req.clone(), lower.clone()));
            }
            end = i + 1;
            break;
        }
        if op.is_lower() {
            keep[i] = last_lower == Some(i);
            start = i + 1;
        }
    }
    keep[start..end].fill(true);

    Ok(reqs
        .into_iter()
        .zip(keep)
        .filter_map(|(req, kept)| kept.then_some(req))
        .collect())
}
