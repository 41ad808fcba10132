use crate::core::CourseId;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Clone, Parser)]
#[command(name = "course-overview")]
#[command(about = "List a user's courses in their saved order, capped by their preferred limit")]
pub struct CliArgs {
    /// Path to the TOML block configuration (defaults apply when omitted)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// JSON file holding the user's preferences
    #[arg(long, default_value = "preferences.json")]
    pub prefs: PathBuf,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,

    /// Emit logs as JSON lines
    #[arg(long)]
    pub json_logs: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Print the sorted course list
    List {
        /// Enrolment CSV with columns id,shortname,fullname,visible
        #[arg(long)]
        courses: Option<PathBuf>,

        /// Cached navigation tree as JSON
        #[arg(long)]
        navigation: Option<PathBuf>,

        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },
    /// Save the maximum number of courses to show (0 = all)
    SetLimit { number: usize },
    /// Save a custom course order, e.g. `3,1,2`
    SetOrder {
        #[arg(value_delimiter = ',', required = true)]
        order: Vec<CourseId>,
    },
}
