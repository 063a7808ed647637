//! Step status transitions.
//!
//! A status change is first planned as a list of named [`StepAction`]s over a
//! snapshot of the roadmap, then executed. Planning is pure, so the whole
//! transition table can be exercised without a database; the persistence
//! layer replays the actions in the emitted order inside one transaction.
//!
//! | target        | target step                         | other steps                                   |
//! |---------------|-------------------------------------|-----------------------------------------------|
//! | `in_progress` | `Start` (clears `completed_at`)     | `ResetActive` for every other in-progress step |
//! | `completed`   | `Complete` (keeps first timestamp)  | `ResetActive` others, then `AutoAdvance` the step at `order + 1` unless completed |
//! | `not_started` | `Reopen` (clears `completed_at`)    | untouched                                     |
//!
//! Requesting the status a step already has plans no status actions at all.
//! Notes, when given, always produce an `Annotate` action.

use jiff::Timestamp;

use crate::models::StepStatus;

/// The slice of a step instance the state machine reasons about.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepSnapshot {
    /// Template step ID
    pub step_id: u64,
    /// Template step order
    pub order: u32,
    pub status: StepStatus,
    pub completed_at: Option<Timestamp>,
}

/// One named mutation of one step instance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StepAction {
    /// Put another in-progress step back to not started
    ResetActive { step_id: u64 },
    /// Mark the target step in progress
    Start { step_id: u64 },
    /// Mark the target step completed at `completed_at`
    Complete {
        step_id: u64,
        completed_at: Timestamp,
    },
    /// Mark the target step not started again
    Reopen { step_id: u64 },
    /// Promote the successor of a completed step to in progress
    AutoAdvance { step_id: u64 },
    /// Overwrite the target step's notes
    Annotate { step_id: u64, notes: String },
}

impl StepAction {
    /// Template step ID the action applies to.
    pub fn step_id(&self) -> u64 {
        match self {
            StepAction::ResetActive { step_id }
            | StepAction::Start { step_id }
            | StepAction::Complete { step_id, .. }
            | StepAction::Reopen { step_id }
            | StepAction::AutoAdvance { step_id }
            | StepAction::Annotate { step_id, .. } => *step_id,
        }
    }

    /// Status and completion timestamp the action leaves behind, or `None`
    /// for actions that do not touch the status.
    pub fn effect(&self) -> Option<(StepStatus, Option<Timestamp>)> {
        match self {
            StepAction::ResetActive { .. } | StepAction::Reopen { .. } => {
                Some((StepStatus::NotStarted, None))
            }
            StepAction::Start { .. } | StepAction::AutoAdvance { .. } => {
                Some((StepStatus::InProgress, None))
            }
            StepAction::Complete { completed_at, .. } => {
                Some((StepStatus::Completed, Some(*completed_at)))
            }
            StepAction::Annotate { .. } => None,
        }
    }
}

/// Plans the actions for moving `step_id` to `target`.
///
/// Returns `None` when the roadmap has no instance for `step_id`.
pub fn plan_transition(
    steps: &[StepSnapshot],
    step_id: u64,
    target: StepStatus,
    notes: Option<&str>,
    now: Timestamp,
) -> Option<Vec<StepAction>> {
    let current = steps.iter().find(|s| s.step_id == step_id)?;
    let mut actions = Vec::new();

    if current.status != target {
        match target {
            StepStatus::InProgress => {
                actions.extend(reset_other_active(steps, step_id));
                actions.push(StepAction::Start { step_id });
            }
            StepStatus::Completed => {
                actions.extend(reset_other_active(steps, step_id));
                actions.push(StepAction::Complete {
                    step_id,
                    completed_at: current.completed_at.unwrap_or(now),
                });
                let successor = current.order.checked_add(1).and_then(|next| {
                    steps
                        .iter()
                        .find(|s| s.order == next && s.status != StepStatus::Completed)
                });
                if let Some(successor) = successor {
                    actions.push(StepAction::AutoAdvance {
                        step_id: successor.step_id,
                    });
                }
            }
            StepStatus::NotStarted => actions.push(StepAction::Reopen { step_id }),
        }
    }

    if let Some(notes) = notes {
        actions.push(StepAction::Annotate {
            step_id,
            notes: notes.to_string(),
        });
    }

    Some(actions)
}

fn reset_other_active(
    steps: &[StepSnapshot],
    step_id: u64,
) -> impl Iterator<Item = StepAction> + '_ {
    steps
        .iter()
        .filter(move |s| s.step_id != step_id && s.status == StepStatus::InProgress)
        .map(|s| StepAction::ResetActive { step_id: s.step_id })
}

/// Applies planned actions to an in-memory snapshot.
///
/// `Annotate` actions are ignored; snapshots carry no notes.
pub fn apply_actions(steps: &mut [StepSnapshot], actions: &[StepAction]) {
    for action in actions {
        let Some((status, completed_at)) = action.effect() else {
            continue;
        };
        if let Some(step) = steps.iter_mut().find(|s| s.step_id == action.step_id()) {
            step.status = status;
            step.completed_at = completed_at;
        }
    }
}


#[cfg(test)]
mod property_tests {
    use proptest::prelude::*;

    use super::*;

    fn any_status() -> impl Strategy<Value = StepStatus> {
        prop_oneof![
            Just(StepStatus::NotStarted),
            Just(StepStatus::InProgress),
            Just(StepStatus::Completed),
        ]
    }

    /// Strictly increasing orders starting at 1, with occasional gaps.
    fn any_roadmap() -> impl Strategy<Value = Vec<StepSnapshot>> {
        prop::collection::vec(1u32..=2, 1..12).prop_map(|gaps| {
            let mut order = 0;
            gaps.into_iter()
                .enumerate()
                .map(|(i, gap)| {
                    order += gap;
                    StepSnapshot {
                        step_id: 10 + i as u64,
                        order,
                        status: StepStatus::NotStarted,
                        completed_at: None,
                    }
                })
                .collect()
        })
    }

    fn at(second: i64) -> Timestamp {
        Timestamp::from_second(1_700_000_000 + second).unwrap()
    }

    proptest! {
        #[test]
        fn single_active_step_and_timestamp_invariants_hold(
            mut steps in any_roadmap(),
            ops in prop::collection::vec((0usize..16, any_status()), 0..40),
        ) {
            for (tick, (index, target)) in ops.into_iter().enumerate() {
                let step_id = steps[index % steps.len()].step_id;
                let actions = plan_transition(&steps, step_id, target, None, at(tick as i64))
                    .expect("step exists");
                apply_actions(&mut steps, &actions);

                let active = steps.iter().filter(|s| s.status == StepStatus::InProgress).count();
                prop_assert!(active <= 1);
                for step in &steps {
                    prop_assert_eq!(
                        step.completed_at.is_some(),
                        step.status == StepStatus::Completed
                    );
                }
                let target_status = steps.iter().find(|s| s.step_id == step_id).unwrap().status;
                prop_assert_eq!(target_status, target);
            }
        }

        #[test]
        fn completing_advances_successor_iff_not_completed(
            mut steps in any_roadmap(),
            statuses in prop::collection::vec(any_status(), 12),
            index in 0usize..12,
        ) {
            // Seed a consistent starting state with at most one active step.
            let mut seen_active = false;
            for (step, status) in steps.iter_mut().zip(statuses) {
                let status = if status == StepStatus::InProgress && seen_active {
                    StepStatus::NotStarted
                } else {
                    status
                };
                seen_active |= status == StepStatus::InProgress;
                step.status = status;
                step.completed_at = (status == StepStatus::Completed).then(|| at(0));
            }

            let target = steps[index % steps.len()].clone();
            prop_assume!(target.status != StepStatus::Completed);
            let successor_before = steps
                .iter()
                .find(|s| s.order == target.order + 1)
                .map(|s| s.status);

            let actions = plan_transition(&steps, target.step_id, StepStatus::Completed, None, at(1))
                .expect("step exists");
            apply_actions(&mut steps, &actions);

            let successor_after = steps
                .iter()
                .find(|s| s.order == target.order + 1)
                .map(|s| s.status);
            match successor_before {
                None => prop_assert_eq!(successor_after, None),
                Some(StepStatus::Completed) => {
                    prop_assert_eq!(successor_after, Some(StepStatus::Completed))
                }
                Some(_) => prop_assert_eq!(successor_after, Some(StepStatus::InProgress)),
            }
        }
    }
}
