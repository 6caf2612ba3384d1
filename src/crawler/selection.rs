//! Selection policy for (target, subtarget) pairs
//!
//! Two modes are recognised:
//! - automatic: no filters at all, every discovered pair is selected
//! - manual: both filter lists given, a pair is selected only when its target
//!   and subtarget are both listed
//!
//! Giving exactly one filter list selects nothing. Callers must supply both
//! lists together or neither.

use crate::config::FilterSet;

/// Target-level gate, evaluated before a target's listing is fetched
///
/// Rejects a target only when target filters are given and do not list it.
/// A target that passes may still contribute no jobs.
pub fn passes_target_gate(target: &str, filters: &FilterSet) -> bool {
    filters.targets.is_empty() || filters.contains_target(target)
}

/// Subtarget-level gate
pub fn passes_subtarget_gate(subtarget: &str, filters: &FilterSet) -> bool {
    filters.subtargets.is_empty() || filters.contains_subtarget(subtarget)
}

/// Decides whether a pair becomes a job
///
/// Pure function of its inputs. Applies the target and subtarget gates, then
/// requires automatic mode or a full manual match.
pub fn should_include(target: &str, subtarget: &str, filters: &FilterSet) -> bool {
    if !passes_target_gate(target, filters) || !passes_subtarget_gate(subtarget, filters) {
        return false;
    }

    let manual_match =
        filters.is_manual() && filters.contains_target(target) && filters.contains_subtarget(subtarget);

    filters.is_automatic() || manual_match
}
