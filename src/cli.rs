use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

const VERSION: &str = concat!(env!("CARGO_PKG_VERSION"), " (", env!("GIT_COMMIT_SHORT"), ")");

/// Course advisor: prerequisite-aware course recommendations from a catalog export.
#[derive(Parser, Debug)]
#[command(name = "advisor", version = VERSION, about)]
pub struct Args {
    /// Log output format
    #[arg(long, value_enum, default_value_t = default_tracing_format(), global = true)]
    pub tracing: TracingFormat,

    /// Catalog JSON file (overrides CATALOG_PATH)
    #[arg(long, global = true)]
    pub catalog: Option<PathBuf>,

    /// Print JSON instead of formatted text
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Recommend courses whose prerequisites are satisfied
    Recommend {
        /// Courses per set (1-5)
        #[arg(short = 'n', long, default_value_t = 3)]
        count: i64,
        /// Completed course, e.g. "CSC 101" (repeatable, or comma-separated)
        #[arg(short, long = "completed", value_delimiter = ',')]
        completed: Vec<String>,
        /// Which set to show: 0 is the initial set, 1.. are regenerated sets
        #[arg(long, default_value_t = 0)]
        batch: usize,
        /// Seed for picking backup instructors (overrides BACKUP_SEED)
        #[arg(long)]
        seed: Option<u64>,
    },
    /// List all courses
    Courses,
    /// Show one course by course number, with its professors
    Course { identifier: String },
    /// List all professors
    Professors,
    /// Show one professor by id
    Professor { id: String },
    /// List the courses taught by a professor
    ProfessorCourses { id: String },
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum TracingFormat {
    /// Human-readable, colored output
    Pretty,
    /// One JSON object per line
    Json,
}

/// Pretty in debug builds, JSON in release builds.
fn default_tracing_format() -> TracingFormat {
    if cfg!(debug_assertions) {
        TracingFormat::Pretty
    } else {
        TracingFormat::Json
    }
}
