use thiserror::Error;

/// Caller-supplied role tag from the auth collaborator. No session or token
/// lifecycle here; each call is judged on its own.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum Role {
    Learner,
    Teacher,
}

/// What the caller is asking to see.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Scope<'a> {
    /// A single learner's record, identified by email.
    Learner(&'a str),
    /// The full cohort.
    Cohort,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("forbidden: {reason}")]
pub struct Forbidden {
    pub reason: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Decision {
    Allow,
    Deny(Forbidden),
}

impl Decision {
    pub fn into_result(self) -> Result<(), Forbidden> {
        match self {
            Decision::Allow => Ok(()),
            Decision::Deny(forbidden) => Err(forbidden),
        }
    }
}

/// Teachers may read any scope; learners only their own record.
pub fn authorize(role: Role, requester_email: &str, scope: &Scope<'_>) -> Decision {
    match (role, scope) {
        (Role::Teacher, _) => Decision::Allow,
        (Role::Learner, Scope::Learner(email)) if *email == requester_email => Decision::Allow,
        (Role::Learner, Scope::Learner(_)) => Decision::Deny(Forbidden {
            reason: "learners may only view their own progress record".to_string(),
        }),
        (Role::Learner, Scope::Cohort) => Decision::Deny(Forbidden {
            reason: "cohort summaries require the teacher role".to_string(),
        }),
    }
}
