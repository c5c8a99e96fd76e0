use crate::models::{CompletionState, Resource, ResourceKind};

/// Static reference data behind the planner. One bundle of curated resource
/// placeholders per phase, parameterized only by skill: levels and purpose
/// never change the bundle shape.
#[derive(Debug, Clone, Default)]
pub struct ResourceCatalog;

/// Online course listings quote content in weeks; stored as minutes at a
/// nominal 300 content-minutes per week so durations stay comparable.
const MINUTES_PER_COURSE_WEEK: u32 = 300;

/// Skills the catalog knows bundles for. Any non-empty skill produces a
/// plan; this list backs the selection menu.
pub const KNOWN_SKILLS: &[&str] = &[
    "Python",
    "JavaScript",
    "Java",
    "C++",
    "C Programming",
    "React",
    "Node.js",
    "Machine Learning",
    "Data Science",
    "Web Development",
    "Mobile Development",
    "DevOps",
    "Cybersecurity",
    "UI/UX Design",
];

impl ResourceCatalog {
    pub fn foundation_bundle(&self, skill: &str) -> Vec<Resource> {
        vec![
            video(
                format!("{skill} Crash Course for Beginners"),
                "Programming with Mosh",
                150,
            ),
            course(
                format!("Introduction to {skill}"),
                "University of Michigan",
                4 * MINUTES_PER_COURSE_WEEK,
            ),
            practice("Basic Syntax Practice", 50, 180),
        ]
    }

    pub fn core_concepts_bundle(&self, skill: &str) -> Vec<Resource> {
        vec![
            video(format!("{skill} OOP Concepts"), "Derek Banas", 195),
            course(
                format!("{skill} Data Structures"),
                "Stanford University",
                6 * MINUTES_PER_COURSE_WEEK,
            ),
            project(
                "Build a Calculator App",
                "Apply core concepts in a real project",
                300,
            ),
        ]
    }

    pub fn advanced_topics_bundle(&self, skill: &str) -> Vec<Resource> {
        vec![
            video(format!("Advanced {skill} Patterns"), "Tech With Tim", 285),
            course(
                format!("{skill} for Software Engineering"),
                "Google",
                8 * MINUTES_PER_COURSE_WEEK,
            ),
        ]
    }

    pub fn projects_bundle(&self, _skill: &str) -> Vec<Resource> {
        vec![
            project(
                "Full-Stack Web Application",
                "Build a complete application with backend and frontend",
                1200,
            ),
            project(
                "API Integration Project",
                "Work with external APIs and databases",
                600,
            ),
        ]
    }
}

fn video(title: String, author: &str, duration_minutes: u32) -> Resource {
    Resource {
        title,
        duration_minutes,
        status: CompletionState::NotStarted,
        kind: ResourceKind::Video {
            author: author.to_string(),
        },
    }
}

fn course(title: String, instructor: &str, duration_minutes: u32) -> Resource {
    Resource {
        title,
        duration_minutes,
        status: CompletionState::NotStarted,
        kind: ResourceKind::OnlineCourse {
            instructor: instructor.to_string(),
        },
    }
}

fn practice(title: &str, problem_count: u32, duration_minutes: u32) -> Resource {
    Resource {
        title: title.to_string(),
        duration_minutes,
        status: CompletionState::NotStarted,
        kind: ResourceKind::PracticeSet { problem_count },
    }
}

fn project(title: &str, brief: &str, duration_minutes: u32) -> Resource {
    Resource {
        title: title.to_string(),
        duration_minutes,
        status: CompletionState::NotStarted,
        kind: ResourceKind::Project {
            brief: brief.to_string(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bundles_interpolate_skill_into_titles() {
        let catalog = ResourceCatalog;
        let bundle = catalog.foundation_bundle("Rust");
        assert_eq!(bundle[0].title, "Rust Crash Course for Beginners");
        assert_eq!(bundle[1].title, "Introduction to Rust");
    }

    #[test]
    fn bundle_shapes_are_fixed() {
        let catalog = ResourceCatalog;
        assert_eq!(catalog.foundation_bundle("Python").len(), 3);
        assert_eq!(catalog.core_concepts_bundle("Python").len(), 3);
        assert_eq!(catalog.advanced_topics_bundle("Python").len(), 2);
        assert_eq!(catalog.projects_bundle("Python").len(), 2);
    }

    #[test]
    fn every_resource_starts_not_started() {
        let catalog = ResourceCatalog;
        for resource in catalog
            .foundation_bundle("Go")
            .into_iter()
            .chain(catalog.projects_bundle("Go"))
        {
            assert_eq!(resource.status, CompletionState::NotStarted);
        }
    }

    #[test]
    fn skill_menu_is_populated() {
        assert!(KNOWN_SKILLS.contains(&"Python"));
        assert!(!KNOWN_SKILLS.is_empty());
    }
}
