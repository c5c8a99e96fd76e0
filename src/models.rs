use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Proficiency ladder. Ordering follows declaration order, so
/// `Level::Beginner < Level::Expert` holds.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "camelCase")]
pub enum Level {
    #[serde(alias = "absolute_beginner", alias = "Absolute Beginner")]
    AbsoluteBeginner,
    #[serde(alias = "Beginner")]
    Beginner,
    #[serde(alias = "Intermediate")]
    Intermediate,
    #[serde(alias = "Advanced")]
    Advanced,
    #[serde(alias = "Expert")]
    Expert,
}

impl Default for Level {
    fn default() -> Self {
        Level::Beginner
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Level::AbsoluteBeginner => "Absolute Beginner",
            Level::Beginner => "Beginner",
            Level::Intermediate => "Intermediate",
            Level::Advanced => "Advanced",
            Level::Expert => "Expert",
        };
        f.write_str(label)
    }
}

/// Why the learner wants the skill. Stored for display only; the planner
/// never branches on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "camelCase")]
pub enum Purpose {
    CareerChange,
    JobInterviewPrep,
    PersonalProject,
    AcademicStudy,
    Freelancing,
    StartupIdea,
    SkillEnhancement,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LearnerGoal {
    pub skill: String,
    pub current_level: Level,
    pub target_level: Level,
    pub total_days: u32,
    pub hours_per_day: f64,
    pub purpose: Option<Purpose>,
}

impl LearnerGoal {
    /// A target below the current level is accepted input, not an error.
    /// Callers surface it as a warning.
    pub fn is_level_regression(&self) -> bool {
        self.target_level < self.current_level
    }
}

/// Two-state completion flag. The only transition is
/// NotStarted -> Completed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum CompletionState {
    NotStarted,
    Completed,
}

impl CompletionState {
    pub fn complete(&mut self) {
        *self = CompletionState::Completed;
    }
}

impl Default for CompletionState {
    fn default() -> Self {
        CompletionState::NotStarted
    }
}

/// Kind-specific metadata for a learning resource.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum ResourceKind {
    Video {
        author: String,
    },
    OnlineCourse {
        instructor: String,
    },
    #[serde(rename_all = "camelCase")]
    PracticeSet {
        problem_count: u32,
    },
    Project {
        brief: String,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Resource {
    pub title: String,
    pub duration_minutes: u32,
    #[serde(default)]
    pub status: CompletionState,
    #[serde(flatten)]
    pub kind: ResourceKind,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Phase {
    /// 1-based position in the plan; order is significant.
    pub position: u32,
    pub title: String,
    pub duration_days: u32,
    pub description: String,
    pub resources: Vec<Resource>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Plan {
    pub title: String,
    pub description: String,
    pub total_days: u32,
    pub total_estimated_hours: u32,
    pub phases: Vec<Phase>,
}

/// A learner's progress as exported by the profile store. The engine reads
/// snapshots of these and never writes them back.
///
/// Field aliases accept the store's snake_case column names alongside the
/// camelCase wire names.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProgressRecord {
    pub id: Uuid,
    #[serde(alias = "full_name")]
    pub full_name: String,
    pub email: String,
    #[serde(alias = "experience_points")]
    pub experience_points: u64,
    #[serde(alias = "learning_streak_days", alias = "learning_streak")]
    pub learning_streak_days: u64,
    #[serde(alias = "total_study_hours")]
    pub total_study_hours: f64,
    #[serde(alias = "problems_solved")]
    pub problems_solved: u64,
    #[serde(default, alias = "current_level")]
    pub current_level: Level,
    #[serde(default, alias = "last_activity_at")]
    pub last_activity_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CohortSummary {
    pub total_learners: usize,
    pub average_experience_points: u64,
    pub total_problems_solved: u64,
    pub average_streak_days: u64,
    pub ranking: Vec<ProgressRecord>,
}
