//! Sehat Saathi - Main CLI Entry Point

use anyhow::{Context, Result};
use clap::Parser;
use colored::Colorize;
use sehat_saathi::{
    cli::{Args, Commands, Config, HistoryCommand, HistoryFields, ReminderCommand, Verbosity},
    display,
    storage::{FileStore, MedicalHistoryStore, ReminderStore},
    triage,
};

fn main() -> Result<()> {
    let args = Args::parse();

    let config = Config::load(args.config.as_deref()).context("Failed to load configuration")?;
    let verbosity = args.verbosity(Verbosity::from_config(&config.display.default_verbosity));

    env_logger::Builder::new()
        .filter_level(verbosity.log_level())
        .parse_default_env()
        .init();

    if !config.display.color_output {
        colored::control::set_override(false);
    }

    match &args.command {
        Commands::Triage { symptoms, json } => run_triage(symptoms, *json, verbosity)?,
        Commands::Symptoms => list_symptoms(),
        Commands::Reminders(command) => run_reminders(&config, command)?,
        Commands::History(command) => run_history(&config, command)?,
        Commands::Config { init } => {
            if *init {
                init_config(&args)?;
            } else {
                show_config(&args, &config)?;
            }
        }
    }

    Ok(())
}

fn run_triage(raw: &[String], json: bool, verbosity: Verbosity) -> Result<()> {
    let symptoms = triage::normalize_all(raw);

    for label in symptoms.iter().filter(|s| !triage::is_known(s)) {
        log::warn!("Unrecognised symptom '{}' does not match any rule", label);
    }

    let result = triage::evaluate(symptoms.as_slice());

    if json {
        let out = serde_json::to_string_pretty(&result).context("Failed to serialize result")?;
        println!("{}", out);
        return Ok(());
    }

    println!("{}", display::render_result(&result));

    if verbosity.show_details() {
        println!("\n{}", "Matching rules:".bold());
        println!("{}", display::render_rules(&triage::matching_rules(symptoms.as_slice())));
    }

    Ok(())
}

fn list_symptoms() {
    for label in triage::known_symptoms() {
        println!("{}", label);
    }
}

fn open_store(config: &Config) -> Result<FileStore> {
    let dir = config.data_dir();
    FileStore::new(dir.clone())
        .with_context(|| format!("Failed to open data directory {}", dir.display()))
}

fn run_reminders(config: &Config, command: &ReminderCommand) -> Result<()> {
    let mut reminders = ReminderStore::new(open_store(config)?);

    match command {
        ReminderCommand::List => {
            println!("{}", display::render_reminders(&reminders.get_reminders()));
        }
        ReminderCommand::Upcoming => {
            let now = chrono::Local::now().naive_local();
            println!("{}", display::render_reminders(&reminders.upcoming(now)));
        }
        ReminderCommand::Add { title, date, time } => {
            let reminder = reminders
                .add_reminder(title, date, time)
                .context("Failed to add reminder")?;
            println!("{} Reminder saved ({})", "✓".green(), reminder.id.dimmed());
        }
        ReminderCommand::Remove { id } => {
            if reminders.remove_reminder(id).context("Failed to remove reminder")? {
                println!("{} Reminder removed", "✓".green());
            } else {
                println!("{} No reminder with id {}", "!".yellow(), id);
            }
        }
    }

    Ok(())
}

fn run_history(config: &Config, command: &HistoryCommand) -> Result<()> {
    let mut history_store = MedicalHistoryStore::new(open_store(config)?);

    match command {
        HistoryCommand::Show => match history_store.get_medical_history() {
            Some(history) => println!("{}", display::render_history(&history)),
            None => println!("{}", "No medical history saved".dimmed()),
        },
        HistoryCommand::Set(fields) => {
            if fields.is_empty() {
                anyhow::bail!("Nothing to update; pass at least one field such as --blood-group");
            }
            let mut history = history_store
                .load_medical_history()
                .context("Stored medical history is unreadable; refusing to overwrite it")?
                .unwrap_or_default();
            apply_fields(&mut history, fields);
            history_store
                .save_medical_history(&history)
                .context("Failed to save medical history")?;
            println!("{} Medical history saved", "✓".green());
        }
        HistoryCommand::Clear => {
            history_store
                .clear_medical_history()
                .context("Failed to clear medical history")?;
            println!("{} Medical history cleared", "✓".green());
        }
    }

    Ok(())
}

fn apply_fields(history: &mut sehat_saathi::storage::MedicalHistory, fields: &HistoryFields) {
    let updates = [
        (&mut history.blood_group, &fields.blood_group),
        (&mut history.allergies, &fields.allergies),
        (&mut history.chronic_conditions, &fields.chronic_conditions),
        (&mut history.surgeries, &fields.surgeries),
        (&mut history.medications, &fields.medications),
    ];
    for (slot, value) in updates {
        if let Some(value) = value {
            *slot = value.clone();
        }
    }
}

fn init_config(args: &Args) -> Result<()> {
    let path = match &args.config {
        Some(path) => path.clone(),
        None => Config::default_path().context("Could not determine home directory")?,
    };

    Config::init(&path).context("Failed to write default configuration")?;
    println!("{} Wrote default configuration to {}", "✓".green(), path.display());

    Ok(())
}

fn show_config(args: &Args, config: &Config) -> Result<()> {
    let source = match &args.config {
        Some(path) => path.display().to_string(),
        None => Config::default_path()
            .filter(|p| p.exists())
            .map(|p| p.display().to_string())
            .unwrap_or_else(|| "built-in defaults".to_string()),
    };

    println!("{} {}", "Configuration:".bold(), source.dimmed());
    println!("{}", toml::to_string_pretty(config).context("Failed to serialize config")?);
    println!("{} {}", "Data directory:".bold(), config.data_dir().display());

    Ok(())
}
