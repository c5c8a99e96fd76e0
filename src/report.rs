use std::fmt::Write;

use crate::cohort;
use crate::models::{Plan, ProgressRecord, Resource, ResourceKind};

/// Teacher-facing markdown overview of a cohort snapshot.
pub fn build_cohort_report(records: &[ProgressRecord], top: usize) -> String {
    let summary = cohort::summarize(records);

    let mut output = String::new();
    let _ = writeln!(output, "# Student Progress Overview");
    let _ = writeln!(
        output,
        "Cohort of {} learners (avg {} XP, avg {}-day streak, {} problems solved)",
        summary.total_learners,
        summary.average_experience_points,
        summary.average_streak_days,
        summary.total_problems_solved
    );
    let _ = writeln!(output);
    let _ = writeln!(output, "## Leaderboard");

    if summary.ranking.is_empty() {
        let _ = writeln!(output, "No learners in this snapshot.");
    } else {
        for record in summary.ranking.iter().take(top) {
            let _ = writeln!(
                output,
                "- {} ({}) {} XP, {} problems, {}-day streak [{}]",
                record.full_name,
                record.email,
                record.experience_points,
                record.problems_solved,
                record.learning_streak_days,
                record.current_level
            );
        }
    }

    let mut recent = records.to_vec();
    recent.sort_by(|a, b| b.last_activity_at.cmp(&a.last_activity_at));
    let _ = writeln!(output);
    let _ = writeln!(output, "## Recently Active");

    if recent.is_empty() {
        let _ = writeln!(output, "No learners in this snapshot.");
    } else {
        for record in recent.iter().take(5) {
            let last_active = record
                .last_activity_at
                .map(|at| at.format("%b %-d, %H:%M").to_string())
                .unwrap_or_else(|| "Never".to_string());
            let _ = writeln!(
                output,
                "- {} last active {} ({:.1}h studied)",
                record.full_name, last_active, record.total_study_hours
            );
        }
    }

    output
}

/// Markdown rendering of a generated plan, for terminals and report files.
pub fn render_plan(plan: &Plan) -> String {
    let mut output = String::new();
    let _ = writeln!(output, "# {}", plan.title);
    let _ = writeln!(output, "{}", plan.description);
    let _ = writeln!(
        output,
        "Total: {} days, ~{} hours of study",
        plan.total_days, plan.total_estimated_hours
    );

    for phase in &plan.phases {
        let _ = writeln!(output);
        let _ = writeln!(
            output,
            "## Phase {}: {} ({} days)",
            phase.position, phase.title, phase.duration_days
        );
        let _ = writeln!(output, "{}", phase.description);
        for resource in &phase.resources {
            let _ = writeln!(output, "- {}", describe_resource(resource));
        }
    }

    output
}

fn describe_resource(resource: &Resource) -> String {
    let duration = format_minutes(resource.duration_minutes);
    match &resource.kind {
        ResourceKind::Video { author } => {
            format!("[video] {} by {author} ({duration})", resource.title)
        }
        ResourceKind::OnlineCourse { instructor } => {
            format!("[course] {} by {instructor} ({duration})", resource.title)
        }
        ResourceKind::PracticeSet { problem_count } => {
            format!(
                "[practice] {} ({problem_count} problems, {duration})",
                resource.title
            )
        }
        ResourceKind::Project { brief } => {
            format!("[project] {}: {brief} ({duration})", resource.title)
        }
    }
}

fn format_minutes(minutes: u32) -> String {
    match (minutes / 60, minutes % 60) {
        (0, m) => format!("{m}m"),
        (h, 0) => format!("{h}h"),
        (h, m) => format!("{h}h {m}m"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::ResourceCatalog;
    use crate::models::{LearnerGoal, Level};
    use crate::planner;
    use crate::store;

    #[test]
    fn minutes_format_matches_listing_style() {
        assert_eq!(format_minutes(150), "2h 30m");
        assert_eq!(format_minutes(45), "45m");
        assert_eq!(format_minutes(1200), "20h");
    }

    #[test]
    fn cohort_report_lists_leaderboard_in_rank_order() {
        let records = store::seed_records().unwrap();
        let report = build_cohort_report(&records, 10);
        assert!(report.contains("# Student Progress Overview"));
        let kiara = report.find("Kiara Patel").unwrap();
        let avery = report.find("Avery Lee").unwrap();
        assert!(kiara < avery, "highest XP must rank first");
        assert!(report.contains("last active Never"));
    }

    #[test]
    fn empty_snapshot_report_has_placeholders() {
        let report = build_cohort_report(&[], 10);
        assert!(report.contains("Cohort of 0 learners"));
        assert!(report.contains("No learners in this snapshot."));
    }

    #[test]
    fn plan_rendering_covers_all_phases() {
        let goal = LearnerGoal {
            skill: "python".to_string(),
            current_level: Level::Beginner,
            target_level: Level::Advanced,
            total_days: 90,
            hours_per_day: 2.0,
            purpose: None,
        };
        let plan = planner::plan(&goal, &ResourceCatalog).unwrap();
        let rendered = render_plan(&plan);
        assert!(rendered.contains("# python Learning Path"));
        assert!(rendered.contains("## Phase 1: Foundation (7 days)"));
        assert!(rendered.contains("## Phase 4: Real-World Projects (59 days)"));
        assert!(rendered.contains("2h 30m"));
    }
}
