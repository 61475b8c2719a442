use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

/// FitBox: physiological profile calculator (BMI, BMR, TDEE, calorie targets, macros).
#[derive(Parser, Debug)]
#[command(name = "fitbox")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Log output format (logs go to stderr).
    #[arg(long, value_enum, default_value_t = LogFormat::Pretty, global = true)]
    pub log_format: LogFormat,

    /// Enable debug logging (overridden by RUST_LOG).
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogFormat {
    Pretty,
    Json,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Menu-driven calculator.
    Interactive,

    /// Compute a full physiological profile.
    Profile {
        #[arg(long)]
        age: u32,

        /// male/female (or m/f).
        #[arg(long)]
        sex: String,

        /// Weight in kg.
        #[arg(long)]
        weight: f64,

        /// Height in meters.
        #[arg(long)]
        height: f64,

        /// Activity level key (see `fitbox levels`).
        #[arg(long)]
        activity: String,

        /// Goal key (see `fitbox goals`).
        #[arg(long)]
        goal: String,

        /// Print the profile as JSON instead of a text report.
        #[arg(long)]
        json: bool,

        /// Also save the output to this file.
        #[arg(long)]
        save: Option<PathBuf>,
    },

    /// Print the text report for a profile saved with `profile --json --save`.
    Report {
        /// Path to a saved profile JSON file.
        #[arg(long)]
        from: PathBuf,
    },

    /// Compute BMI and its category.
    Bmi {
        #[arg(long)]
        weight: f64,

        #[arg(long)]
        height: f64,
    },

    /// Compute basal metabolic rate (Mifflin-St Jeor).
    Bmr {
        #[arg(long)]
        age: u32,

        #[arg(long)]
        sex: String,

        #[arg(long)]
        weight: f64,

        #[arg(long)]
        height: f64,
    },

    /// Compute total daily energy expenditure from a BMR.
    Tdee {
        #[arg(long)]
        bmr: f64,

        #[arg(long)]
        activity: String,
    },

    /// List activity levels.
    Levels,

    /// List goals.
    Goals,

    /// Profile every row of a gym-members CSV.
    Batch {
        /// Input CSV path.
        #[arg(long)]
        input: PathBuf,

        /// Output CSV path.
        #[arg(long, default_value = "profiles.csv")]
        output: PathBuf,
    },
}

impl Default for Command {
    fn default() -> Self {
        Command::Interactive
    }
}
