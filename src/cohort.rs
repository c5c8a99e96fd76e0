use crate::models::{CohortSummary, ProgressRecord};

/// Summarizes a snapshot of learner progress for the teacher-facing
/// overview. Total over any input: an empty cohort yields a zero-valued
/// summary, never a division by zero.
pub fn summarize(records: &[ProgressRecord]) -> CohortSummary {
    let total_learners = records.len();
    let total_experience: u64 = records.iter().map(|r| r.experience_points).sum();
    let total_streak: u64 = records.iter().map(|r| r.learning_streak_days).sum();
    let total_problems_solved: u64 = records.iter().map(|r| r.problems_solved).sum();

    // Averages floor; documented alongside the wire format.
    let (average_experience_points, average_streak_days) = if total_learners == 0 {
        (0, 0)
    } else {
        (
            total_experience / total_learners as u64,
            total_streak / total_learners as u64,
        )
    };

    CohortSummary {
        total_learners,
        average_experience_points,
        total_problems_solved,
        average_streak_days,
        ranking: rank(records),
    }
}

/// Descending by experience points. The sort must be stable: equal scores
/// keep their snapshot order.
pub fn rank(records: &[ProgressRecord]) -> Vec<ProgressRecord> {
    let mut ranked = records.to_vec();
    ranked.sort_by(|a, b| b.experience_points.cmp(&a.experience_points));
    ranked
}

/// The slice of a snapshot a single learner is allowed to see.
pub fn own_record<'a>(records: &'a [ProgressRecord], email: &str) -> Option<&'a ProgressRecord> {
    records.iter().find(|r| r.email == email)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Level;
    use uuid::Uuid;

    fn record(name: &str, email: &str, experience_points: u64) -> ProgressRecord {
        ProgressRecord {
            id: Uuid::new_v4(),
            full_name: name.to_string(),
            email: email.to_string(),
            experience_points,
            learning_streak_days: 5,
            total_study_hours: 20.0,
            problems_solved: 40,
            current_level: Level::Beginner,
            last_activity_at: None,
        }
    }

    #[test]
    fn empty_cohort_is_all_zeroes() {
        let summary = summarize(&[]);
        assert_eq!(summary.total_learners, 0);
        assert_eq!(summary.average_experience_points, 0);
        assert_eq!(summary.average_streak_days, 0);
        assert_eq!(summary.total_problems_solved, 0);
        assert!(summary.ranking.is_empty());
    }

    #[test]
    fn averages_floor_and_totals_sum() {
        let records = vec![
            record("Avery Lee", "avery@example.com", 500),
            record("Jules Moreno", "jules@example.com", 500),
            record("Kiara Patel", "kiara@example.com", 900),
        ];
        let summary = summarize(&records);
        assert_eq!(summary.total_learners, 3);
        assert_eq!(summary.average_experience_points, 633);
        assert_eq!(summary.average_streak_days, 5);
        assert_eq!(summary.total_problems_solved, 120);
    }

    #[test]
    fn ranking_is_descending_and_stable() {
        let records = vec![
            record("Avery Lee", "avery@example.com", 500),
            record("Jules Moreno", "jules@example.com", 500),
            record("Kiara Patel", "kiara@example.com", 900),
        ];
        let ranked = rank(&records);
        assert_eq!(ranked[0].full_name, "Kiara Patel");
        assert_eq!(ranked[1].full_name, "Avery Lee");
        assert_eq!(ranked[2].full_name, "Jules Moreno");
    }

    #[test]
    fn summarize_does_not_reorder_input() {
        let records = vec![
            record("Avery Lee", "avery@example.com", 100),
            record("Kiara Patel", "kiara@example.com", 900),
        ];
        let snapshot = records.clone();
        let _ = summarize(&records);
        assert_eq!(records, snapshot);
    }

    #[test]
    fn own_record_matches_on_email() {
        let records = vec![
            record("Avery Lee", "avery@example.com", 100),
            record("Kiara Patel", "kiara@example.com", 900),
        ];
        assert_eq!(
            own_record(&records, "kiara@example.com").map(|r| r.full_name.as_str()),
            Some("Kiara Patel")
        );
        assert!(own_record(&records, "missing@example.com").is_none());
    }
}
