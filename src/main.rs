use std::path::PathBuf;

use anyhow::{bail, Context};
use clap::{Parser, Subcommand};

mod access;
mod catalog;
mod cohort;
mod models;
mod planner;
mod report;
mod store;

use access::{Role, Scope};
use catalog::ResourceCatalog;
use models::{LearnerGoal, Level, Purpose};

#[derive(Parser)]
#[command(name = "roadmap-engine")]
#[command(about = "Curriculum planning and cohort progress engine for CodeLadder", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a phased study plan for a learner goal
    Plan {
        #[arg(long)]
        skill: String,
        #[arg(long, value_enum)]
        current_level: Level,
        #[arg(long, value_enum)]
        target_level: Level,
        #[arg(long)]
        days: u32,
        #[arg(long)]
        hours_per_day: f64,
        #[arg(long, value_enum)]
        purpose: Option<Purpose>,
        /// Write the plan as JSON instead of printing it
        #[arg(long)]
        out: Option<PathBuf>,
        /// Print a markdown rendering instead of JSON
        #[arg(long, default_value_t = false)]
        markdown: bool,
    },
    /// Summarize a progress snapshot for the requesting role
    Summarize {
        /// Snapshot exported by the profile store (.csv or .json)
        #[arg(long)]
        records: PathBuf,
        #[arg(long, value_enum)]
        role: Role,
        /// Requester identity; required for the learner role
        #[arg(long)]
        email: Option<String>,
        /// Restrict the request to a single learner's record
        #[arg(long)]
        learner: Option<String>,
        #[arg(long, default_value_t = 10)]
        limit: usize,
        /// Write the full cohort summary as JSON
        #[arg(long)]
        out: Option<PathBuf>,
    },
    /// Generate a markdown progress report for teachers
    Report {
        #[arg(long)]
        records: PathBuf,
        #[arg(long, default_value_t = 10)]
        top: usize,
        #[arg(long, default_value = "report.md")]
        out: PathBuf,
    },
    /// List the skills the resource catalog covers
    Skills,
    /// Write a sample progress snapshot
    Seed {
        #[arg(long, default_value = "records.csv")]
        out: PathBuf,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Plan {
            skill,
            current_level,
            target_level,
            days,
            hours_per_day,
            purpose,
            out,
            markdown,
        } => {
            let goal = LearnerGoal {
                skill,
                current_level,
                target_level,
                total_days: days,
                hours_per_day,
                purpose,
            };
            if goal.is_level_regression() {
                eprintln!("warning: target level is below current level");
            }
            let plan = planner::plan(&goal, &ResourceCatalog)?;

            if let Some(path) = out {
                let json = serde_json::to_string_pretty(&plan)?;
                std::fs::write(&path, json)
                    .with_context(|| format!("failed to write {}", path.display()))?;
                println!("Plan written to {}.", path.display());
            } else if markdown {
                print!("{}", report::render_plan(&plan));
            } else {
                println!("{}", serde_json::to_string_pretty(&plan)?);
            }
        }
        Commands::Summarize {
            records,
            role,
            email,
            learner,
            limit,
            out,
        } => {
            if role == Role::Learner && email.is_none() {
                bail!("--email is required for the learner role");
            }
            let requester = email.unwrap_or_default();
            let snapshot = store::load_records(&records)?;

            let scope = match learner.as_deref() {
                Some(target) => Scope::Learner(target),
                None => Scope::Cohort,
            };
            access::authorize(role, &requester, &scope).into_result()?;

            match scope {
                Scope::Learner(target) => match cohort::own_record(&snapshot, target) {
                    Some(record) => println!("{}", serde_json::to_string_pretty(record)?),
                    None => println!("No record found for {target}."),
                },
                Scope::Cohort => {
                    let summary = cohort::summarize(&snapshot);
                    println!(
                        "Cohort of {} learners: avg {} XP, avg {}-day streak, {} problems solved",
                        summary.total_learners,
                        summary.average_experience_points,
                        summary.average_streak_days,
                        summary.total_problems_solved
                    );
                    for record in summary.ranking.iter().take(limit) {
                        println!(
                            "- {} ({}) {} XP across {} problems",
                            record.full_name,
                            record.email,
                            record.experience_points,
                            record.problems_solved
                        );
                    }
                    if let Some(path) = out {
                        let json = serde_json::to_string_pretty(&summary)?;
                        std::fs::write(&path, json)
                            .with_context(|| format!("failed to write {}", path.display()))?;
                        println!("Summary written to {}.", path.display());
                    }
                }
            }
        }
        Commands::Report { records, top, out } => {
            let snapshot = store::load_records(&records)?;
            let rendered = report::build_cohort_report(&snapshot, top);
            std::fs::write(&out, rendered)
                .with_context(|| format!("failed to write {}", out.display()))?;
            println!("Report written to {}.", out.display());
        }
        Commands::Skills => {
            for skill in catalog::KNOWN_SKILLS {
                println!("{skill}");
            }
        }
        Commands::Seed { out } => {
            let written = store::write_seed_csv(&out)?;
            println!("Wrote {written} sample records to {}.", out.display());
        }
    }

    Ok(())
}
