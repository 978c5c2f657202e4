//! RepTrack CLI - weekly workout tracker.

use anyhow::Result;
use chrono::{Local, NaiveDate};
use clap::{Parser, Subcommand};
use reptrack_core::{catalog, DayPlan, Locale, ProgressDocument, UserId, WeekKey};
use reptrack_report::WorkoutTracker;
use reptrack_storage::{HttpStore, JsonStore, ProgressStore};
use std::sync::Arc;
use tracing::Level;

#[derive(Parser)]
#[command(name = "reptrack")]
#[command(about = "Weekly workout tracker", long_about = None)]
struct Cli {
    /// User id the progress documents belong to
    #[arg(long, default_value = "local")]
    user: String,

    /// Directory for local JSON progress documents
    #[arg(long, default_value = ".reptrack")]
    data_dir: std::path::PathBuf,

    /// Base URL of a remote document API; overrides --data-dir
    #[arg(long)]
    remote: Option<String>,

    /// Display locale (en or fr)
    #[arg(long, default_value = "en")]
    locale: String,

    /// Date to act on (YYYY-MM-DD); defaults to today
    #[arg(long)]
    date: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the plan with completion marks
    Plan {
        /// Day index (1-5); omit for the whole week
        #[arg(long)]
        day: Option<u8>,
    },
    /// Toggle an exercise's completion for the current week
    Toggle {
        /// Exercise name, canonical or in the display locale
        name: String,
    },
    /// Show the weekly report
    Report,
    /// Print the current week key
    Week,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(Level::WARN)
        .init();

    let cli = Cli::parse();

    let locale = parse_locale(&cli.locale)
        .ok_or_else(|| anyhow::anyhow!("unsupported locale: {}", cli.locale))?;
    let user = UserId::new(cli.user.clone());
    let today = match &cli.date {
        Some(s) => s.parse::<NaiveDate>()?,
        None => Local::now().date_naive(),
    };

    // Open storage
    let store: Arc<dyn ProgressStore> = match &cli.remote {
        Some(url) => Arc::new(HttpStore::new(url.clone())),
        None => Arc::new(JsonStore::new(&cli.data_dir).await?),
    };
    let tracker = WorkoutTracker::new(store);

    match cli.command {
        Commands::Plan { day } => {
            let snapshot = tracker.progress(&user, today).await;
            if let Some(e) = &snapshot.fetch_error {
                eprintln!("warning: could not load stored progress ({e})");
            }

            let plan = catalog::weekly_plan(locale);
            match day {
                Some(index) => {
                    let Some(day_plan) = plan.day(index) else {
                        anyhow::bail!("no day {index} in the plan (valid: 1-5)");
                    };
                    print_day(day_plan, &snapshot.document, locale, true);
                }
                None => {
                    for day_plan in plan.days {
                        print_day(day_plan, &snapshot.document, locale, false);
                    }
                }
            }
        }
        Commands::Toggle { name } => {
            let Some(canonical) = catalog::canonical_name(&name, locale) else {
                anyhow::bail!("unknown exercise: {name}");
            };

            let snapshot = tracker.progress(&user, today).await;
            if let Some(e) = &snapshot.fetch_error {
                eprintln!("warning: could not load stored progress ({e}), toggling from a blank slate");
            }

            let last_seen = snapshot.document.is_done(canonical);
            let done = tracker
                .toggle(&user, &snapshot.week_key, canonical, last_seen)
                .await?;

            if done {
                let messages = catalog::motivation_messages(locale);
                let completed = snapshot.document.completed() + 1;
                println!("{}", messages[completed % messages.len()]);
                println!("Completed: {canonical} ({})", snapshot.week_key);
            } else {
                println!("Unmarked: {canonical} ({})", snapshot.week_key);
            }
        }
        Commands::Report => {
            let outcome = tracker.report(&user, today, locale).await;
            if let Some(e) = &outcome.fetch_error {
                eprintln!("warning: progress fetch failed ({e}); report shows an empty week");
            }

            let report = &outcome.report;
            println!("Weekly report ({})", report.week_key);
            println!("  Completion: {}%", report.completion_percentage);
            println!(
                "  Completed: {} / {}",
                report.completed_exercises, report.total_exercises
            );
            for (day_index, day) in &report.per_day {
                println!(
                    "  Day {} | {:<34} {}/{}",
                    day_index, day.day_name, day.completed, day.total
                );
            }
            println!(
                "  Suggestion: {}",
                catalog::suggestion_text(locale, report.suggestion_tier)
            );
        }
        Commands::Week => {
            println!("{}", WeekKey::for_date(today));
        }
    }

    Ok(())
}

fn print_day(day: &DayPlan, progress: &ProgressDocument, locale: Locale, with_advice: bool) {
    println!("Day {} | {} ({})", day.day_index, day.day_name, day.focus);
    for exercise in day.exercises {
        let done = catalog::canonical_name(exercise.name, locale)
            .map(|name| progress.is_done(name))
            .unwrap_or(false);
        let mark = if done { "x" } else { " " };
        println!(
            "  [{mark}] {} - {}, {}",
            exercise.name, exercise.sets, exercise.reps
        );
        if with_advice {
            println!("      {}", exercise.advice);
        }
    }
}

fn parse_locale(s: &str) -> Option<Locale> {
    match s.to_lowercase().as_str() {
        "en" => Some(Locale::En),
        "fr" => Some(Locale::Fr),
        _ => None,
    }
}
