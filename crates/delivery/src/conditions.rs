//! Condition construction for delivery statuses.
//!
//! Each cycle replaces the condition set wholesale, so exactly one condition
//! per type survives a run. Transition timestamps are carried forward when a
//! condition did not actually change, which keeps re-runs with an unchanged
//! spec byte-identical.

use caravel_api::{Condition, ConditionStatus, ConditionType};
use itertools::Itertools;

/// Reason set when all referenced templates resolve.
pub const REASON_READY: &str = "Ready";
/// Reason set when one or more referenced templates are unresolved.
pub const REASON_TEMPLATES_NOT_FOUND: &str = "TemplatesNotFound";

/// Ready=True: the delivery is fully reconciled.
pub fn ready() -> Condition {
    Condition::new(ConditionType::Ready, ConditionStatus::True, REASON_READY)
}

/// TemplatesReady=True: every referenced template resolves.
pub fn templates_ready() -> Condition {
    Condition::new(
        ConditionType::TemplatesReady,
        ConditionStatus::True,
        REASON_READY,
    )
}

/// Ready=False: readiness is blocked on unresolved templates.
pub fn not_ready_templates_not_found() -> Condition {
    Condition::new(
        ConditionType::Ready,
        ConditionStatus::False,
        REASON_TEMPLATES_NOT_FOUND,
    )
    .with_message("one or more referenced templates could not be fetched")
}

/// TemplatesReady=False: at least one referenced template is unresolved.
pub fn templates_not_found() -> Condition {
    Condition::new(
        ConditionType::TemplatesReady,
        ConditionStatus::False,
        REASON_TEMPLATES_NOT_FOUND,
    )
    .with_message("one or more referenced templates could not be fetched")
}

/// The full condition set for a cycle's outcome.
pub fn readiness(all_resolved: bool) -> Vec<Condition> {
    if all_resolved {
        vec![ready(), templates_ready()]
    } else {
        vec![not_ready_templates_not_found(), templates_not_found()]
    }
}

/// Replace a condition set, preserving `last_transition_time` for any
/// condition whose type, status, and reason are unchanged.
pub fn replace(previous: &[Condition], next: Vec<Condition>) -> Vec<Condition> {
    next.into_iter()
        .map(|mut condition| {
            let unchanged = previous.iter().find(|prior| {
                prior.type_ == condition.type_
                    && prior.status == condition.status
                    && prior.reason == condition.reason
            });
            if let Some(prior) = unchanged {
                condition.last_transition_time = prior.last_transition_time;
            }
            condition
        })
        .collect_vec()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_readiness_success_set() {
        let conditions = readiness(true);

        let summary: Vec<(ConditionType, ConditionStatus, &str)> = conditions
            .iter()
            .map(|c| (c.type_, c.status, c.reason.as_str()))
            .collect_vec();
        assert_eq!(
            summary,
            vec![
                (ConditionType::Ready, ConditionStatus::True, REASON_READY),
                (
                    ConditionType::TemplatesReady,
                    ConditionStatus::True,
                    REASON_READY
                ),
            ]
        );
    }

    #[test]
    fn test_readiness_failure_set_shares_reason() {
        let conditions = readiness(false);

        assert_eq!(conditions.len(), 2);
        assert!(conditions
            .iter()
            .all(|c| c.status == ConditionStatus::False
                && c.reason == REASON_TEMPLATES_NOT_FOUND));
    }

    #[test]
    fn test_replace_preserves_transition_time_when_unchanged() {
        let first = readiness(true);
        let second = replace(&first, readiness(true));

        assert_eq!(first, second);
    }

    #[test]
    fn test_replace_stamps_new_time_on_transition() {
        let first = readiness(true);
        let second = replace(&first, readiness(false));

        let prior_ready = first.iter().find(|c| c.type_ == ConditionType::Ready);
        let next_ready = second.iter().find(|c| c.type_ == ConditionType::Ready);
        assert_eq!(
            next_ready.map(|c| c.status),
            Some(ConditionStatus::False)
        );
        // A real transition must not inherit the prior timestamp blindly.
        assert!(prior_ready
            .zip(next_ready)
            .map(|(p, n)| n.last_transition_time >= p.last_transition_time)
            .unwrap_or(false));
    }

    #[test]
    fn test_replace_never_accumulates_duplicate_types() {
        let stale = vec![ready(), ready(), templates_ready()];
        let replaced = replace(&stale, readiness(false));

        let ready_count = replaced
            .iter()
            .filter(|c| c.type_ == ConditionType::Ready)
            .count();
        assert_eq!(ready_count, 1);
        assert_eq!(replaced.len(), 2);
    }
}
