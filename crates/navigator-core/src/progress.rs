//! Progress statistics derived from a roadmap's step instances.

use crate::models::{CurrentStep, Roadmap, RoadmapStep, RoadmapSummary, StepStatus};

/// Builds the progress summary for a roadmap.
///
/// Steps are considered in template order regardless of the order they are
/// stored in. The summary is recomputed on every call and never persisted.
pub fn summarize(mut roadmap: Roadmap) -> RoadmapSummary {
    roadmap.steps.sort_by_key(RoadmapStep::order);

    let count = |status: StepStatus| {
        roadmap.steps.iter().filter(|s| s.status == status).count() as u32
    };
    let total_steps = roadmap.steps.len() as u32;
    let completed_steps = count(StepStatus::Completed);
    let in_progress_steps = count(StepStatus::InProgress);
    let not_started_steps = count(StepStatus::NotStarted);

    let current_step = find_current_step(&roadmap.steps);

    RoadmapSummary {
        completion_percentage: completion_percentage(completed_steps, total_steps),
        total_steps,
        completed_steps,
        in_progress_steps,
        not_started_steps,
        current_step,
        roadmap,
    }
}

/// `completed / total * 100` rounded to two decimal places, `0.0` when the
/// roadmap has no steps.
///
/// Exact ties round to the even hundredth, so 1 of 32 steps is `3.12`.
pub fn completion_percentage(completed: u32, total: u32) -> f64 {
    if total == 0 {
        return 0.0;
    }
    let percentage = f64::from(completed) / f64::from(total) * 100.0;
    (percentage * 100.0).round_ties_even() / 100.0
}

/// First in-progress step, otherwise first not-started step, by order.
fn find_current_step(steps: &[RoadmapStep]) -> Option<CurrentStep> {
    let first_with = |status: StepStatus| steps.iter().find(|s| s.status == status);

    first_with(StepStatus::InProgress)
        .or_else(|| first_with(StepStatus::NotStarted))
        .map(|s| CurrentStep {
            step_id: s.step_id,
            title: s.step.title.clone(),
            order: s.step.order,
        })
}
