use thiserror::Error;

use crate::catalog::ResourceCatalog;
use crate::models::{LearnerGoal, Phase, Plan};

pub const MIN_TOTAL_DAYS: u32 = 30;
pub const MAX_TOTAL_DAYS: u32 = 365;

/// Daily time budgets the wizard offers. Anything else is rejected.
pub const HOURS_PER_DAY_MENU: &[f64] = &[0.5, 1.0, 2.0, 3.0, 4.0];

const FOUNDATION_DAYS: u32 = 7;
const CORE_CONCEPTS_DAYS: u32 = 14;
const ADVANCED_TOPICS_DAYS: u32 = 10;

#[derive(Debug, Error, PartialEq)]
pub enum InvalidInput {
    #[error("skill must not be empty")]
    EmptySkill,
    #[error("total days must be between {MIN_TOTAL_DAYS} and {MAX_TOTAL_DAYS}, got {0}")]
    TotalDaysOutOfRange(u32),
    #[error("hours per day must be one of 0.5, 1, 2, 3, or 4, got {0}")]
    HoursPerDayNotOnMenu(f64),
}

/// Derives a phased study plan from a learner goal. Pure and deterministic:
/// the same goal always yields a structurally identical plan. Validation runs
/// before any phase is built, so a failure never leaves a partial plan.
pub fn plan(goal: &LearnerGoal, catalog: &ResourceCatalog) -> Result<Plan, InvalidInput> {
    validate(goal)?;

    let skill = goal.skill.trim();
    let phases = vec![
        Phase {
            position: 1,
            title: "Foundation".to_string(),
            duration_days: FOUNDATION_DAYS,
            description: "Build strong fundamentals".to_string(),
            resources: catalog.foundation_bundle(skill),
        },
        Phase {
            position: 2,
            title: "Core Concepts".to_string(),
            duration_days: CORE_CONCEPTS_DAYS,
            description: "Master intermediate concepts".to_string(),
            resources: catalog.core_concepts_bundle(skill),
        },
        Phase {
            position: 3,
            title: "Advanced Topics".to_string(),
            duration_days: ADVANCED_TOPICS_DAYS,
            description: "Advanced concepts and best practices".to_string(),
            resources: catalog.advanced_topics_bundle(skill),
        },
        Phase {
            position: 4,
            title: "Real-World Projects".to_string(),
            duration_days: final_phase_days(goal.total_days),
            description: "Build portfolio projects".to_string(),
            resources: catalog.projects_bundle(skill),
        },
    ];

    Ok(Plan {
        title: format!("{skill} Learning Path"),
        description: format!(
            "Complete {skill} roadmap from {} to {} in {} days",
            goal.current_level, goal.target_level, goal.total_days
        ),
        total_days: goal.total_days,
        total_estimated_hours: estimated_hours(goal.total_days, goal.hours_per_day),
        phases,
    })
}

fn validate(goal: &LearnerGoal) -> Result<(), InvalidInput> {
    if goal.skill.trim().is_empty() {
        return Err(InvalidInput::EmptySkill);
    }
    if !(MIN_TOTAL_DAYS..=MAX_TOTAL_DAYS).contains(&goal.total_days) {
        return Err(InvalidInput::TotalDaysOutOfRange(goal.total_days));
    }
    if !HOURS_PER_DAY_MENU.contains(&goal.hours_per_day) {
        return Err(InvalidInput::HoursPerDayNotOnMenu(goal.hours_per_day));
    }
    Ok(())
}

/// Remainder after the three fixed phases, floored at one week. Below 38
/// total days the phase durations intentionally sum past the total; the
/// floor is documented policy, not rounding error.
pub fn final_phase_days(total_days: u32) -> u32 {
    total_days.saturating_sub(FOUNDATION_DAYS + CORE_CONCEPTS_DAYS + ADVANCED_TOPICS_DAYS).max(7)
}

pub fn estimated_hours(total_days: u32, hours_per_day: f64) -> u32 {
    (total_days as f64 * hours_per_day).floor() as u32
}
