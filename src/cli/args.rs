//! Command-line argument parsing for Sehat Saathi
//!
//! Provides clap-based CLI with subcommands and verbosity control.

use clap::{Args as ClapArgs, Parser, Subcommand};
use std::path::PathBuf;

/// Sehat Saathi - symptom triage, reminders and medical history
#[derive(Parser, Debug)]
#[command(name = "sehat")]
#[command(version)]
#[command(
    about = "Symptom triage, medicine reminders and medical history in your terminal",
    long_about = None
)]
pub struct Args {
    /// Configuration file path
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Verbosity level: -q (quiet), default (normal), -v (verbose), -vv (very verbose)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Quiet mode (only print results)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Classify symptoms into a severity tier
    Triage {
        /// Symptom labels, e.g. "chest pain" fatigue
        #[arg(value_name = "SYMPTOM")]
        symptoms: Vec<String>,

        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },

    /// List the symptom labels the triage rules recognise
    Symptoms,

    /// Manage reminders
    #[command(subcommand)]
    Reminders(ReminderCommand),

    /// Manage medical history
    #[command(subcommand)]
    History(HistoryCommand),

    /// Display current configuration
    Config {
        /// Write the default configuration file instead of displaying it
        #[arg(long)]
        init: bool,
    },
}

#[derive(Subcommand, Debug)]
pub enum ReminderCommand {
    /// Show every stored reminder
    List,

    /// Show reminders that have not fired yet, soonest first
    Upcoming,

    /// Add a reminder
    Add {
        #[arg(long)]
        title: String,

        /// Date as YYYY-MM-DD
        #[arg(long)]
        date: String,

        /// Time as HH:MM
        #[arg(long)]
        time: String,
    },

    /// Remove a reminder by id
    Remove {
        id: String,
    },
}

#[derive(Subcommand, Debug)]
pub enum HistoryCommand {
    /// Print the stored medical history
    Show,

    /// Update fields of the medical history; omitted fields keep their value
    Set(HistoryFields),

    /// Delete the stored medical history
    Clear,
}

#[derive(ClapArgs, Debug, Default, Clone)]
pub struct HistoryFields {
    #[arg(long)]
    pub blood_group: Option<String>,

    #[arg(long)]
    pub allergies: Option<String>,

    #[arg(long)]
    pub chronic_conditions: Option<String>,

    #[arg(long)]
    pub surgeries: Option<String>,

    #[arg(long)]
    pub medications: Option<String>,
}

/// Verbosity level enum
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verbosity {
    Quiet,
    Normal,
    Verbose,
    VeryVerbose,
}

impl Args {
    /// Get verbosity level based on flags, falling back to the configured default
    pub fn verbosity(&self, configured: Verbosity) -> Verbosity {
        if self.quiet {
            Verbosity::Quiet
        } else {
            match self.verbose {
                0 => configured,
                1 => Verbosity::Verbose,
                _ => Verbosity::VeryVerbose,
            }
        }
    }
}

impl Verbosity {
    /// Parse the config file spelling; unknown values read as `Normal`
    pub fn from_config(value: &str) -> Self {
        match value {
            "quiet" => Verbosity::Quiet,
            "verbose" => Verbosity::Verbose,
            "very_verbose" => Verbosity::VeryVerbose,
            _ => Verbosity::Normal,
        }
    }

    /// Convert to string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Verbosity::Quiet => "quiet",
            Verbosity::Normal => "normal",
            Verbosity::Verbose => "verbose",
            Verbosity::VeryVerbose => "very_verbose",
        }
    }

    /// Log level handed to env_logger
    pub fn log_level(&self) -> log::LevelFilter {
        match self {
            Verbosity::Quiet => log::LevelFilter::Error,
            Verbosity::Normal => log::LevelFilter::Warn,
            Verbosity::Verbose => log::LevelFilter::Info,
            Verbosity::VeryVerbose => log::LevelFilter::Debug,
        }
    }

    /// Check if should list every matching rule
    pub fn show_details(&self) -> bool {
        matches!(self, Verbosity::Verbose | Verbosity::VeryVerbose)
    }
}

impl HistoryFields {
    pub fn is_empty(&self) -> bool {
        self.blood_group.is_none()
            && self.allergies.is_none()
            && self.chronic_conditions.is_none()
            && self.surgeries.is_none()
            && self.medications.is_none()
    }
}
