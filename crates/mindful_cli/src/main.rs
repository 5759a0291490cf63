//! Command-line front end for the journal core.
//!
//! # Responsibility
//! - Map subcommands to store, view, insights and export operations.
//! - Print notices and listings; all rules live in `mindful_core`.

use anyhow::{bail, Context, Result};
use chrono::Local;
use clap::{Parser, Subcommand};
use log::info;
use mindful_core::db::open_db;
use mindful_core::service::affirmation;
use mindful_core::service::notice::{ENTRIES_EXPORTED, NOTHING_TO_EXPORT};
use mindful_core::{
    init_logging, parse_mood_selection, project, summarize, write_export, ConfirmationGate,
    EntryComposer, EntryId, EntryStore, ExportError, JournalConfig, KeyValueStore, MoodFilter,
    Notice, PendingAction, SqliteKeyValueStore, JOURNAL_PROMPTS,
};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "mindful", version, about = "Mood-tagged personal journal")]
struct Args {
    /// Directory holding the journal database and logs.
    ///
    /// Defaults to $MINDFUL_JOURNAL_DIR, then ~/.mindful_journal.
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    /// Log level: trace|debug|info|warn|error.
    #[arg(long, global = true)]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Write a new entry.
    Add {
        #[arg(long)]
        title: String,
        #[arg(long)]
        content: String,
        /// great|good|neutral|worried|sad or the matching emoji.
        #[arg(long, default_value = "...")]
        mood: String,
        /// Prepend one of the writing prompts (see `prompts`).
        #[arg(long)]
        prompt: Option<usize>,
    },
    /// Edit an existing entry; omitted fields keep their value.
    Edit {
        id: String,
        #[arg(long)]
        title: Option<String>,
        #[arg(long)]
        content: Option<String>,
        #[arg(long)]
        mood: Option<String>,
    },
    /// Delete one entry.
    Delete {
        id: String,
        /// Confirm the deletion.
        #[arg(long)]
        yes: bool,
    },
    /// Delete every entry.
    Clear {
        /// Confirm clearing the journal.
        #[arg(long)]
        yes: bool,
    },
    /// List entries, newest activity first.
    List {
        /// `all` or a mood.
        #[arg(long, default_value = "all")]
        mood: MoodFilter,
    },
    /// Weekly insights, 7-day trend and an affirmation.
    Insights {
        /// Seed the affirmation choice.
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Export all entries as JSON.
    Export {
        #[arg(long, default_value = ".")]
        out: PathBuf,
    },
    /// Show the writing prompts.
    Prompts,
}

impl Command {
    fn name(&self) -> &'static str {
        match self {
            Self::Add { .. } => "add",
            Self::Edit { .. } => "edit",
            Self::Delete { .. } => "delete",
            Self::Clear { .. } => "clear",
            Self::List { .. } => "list",
            Self::Insights { .. } => "insights",
            Self::Export { .. } => "export",
            Self::Prompts => "prompts",
        }
    }
}

fn main() -> Result<()> {
    let args = Args::parse();
    let config = JournalConfig::resolve(args.data_dir.clone(), args.log_level.as_deref())
        .map_err(anyhow::Error::msg)?;

    if let Err(err) = init_logging(config.log_level, &config.log_dir()) {
        eprintln!("warning: file logging disabled: {err}");
    }

    let conn = open_db(config.db_path())
        .with_context(|| format!("opening {}", config.db_path().display()))?;
    let mut store = EntryStore::open(SqliteKeyValueStore::new(&conn));
    info!(
        "event=cli_command module=cli status=start command={}",
        args.command.name()
    );

    run(args.command, &mut store)
}

fn run<K: KeyValueStore>(command: Command, store: &mut EntryStore<K>) -> Result<()> {
    match command {
        Command::Add {
            title,
            content,
            mood,
            prompt,
        } => {
            let mut composer = EntryComposer::new();
            composer.set_title(title);
            composer.set_content(content);
            if let Some(mood) = parse_mood_selection(&mood)? {
                composer.select_mood(mood);
            }
            if let Some(index) = prompt {
                let Some(text) = index.checked_sub(1).and_then(|i| JOURNAL_PROMPTS.get(i)) else {
                    bail!("prompt must be between 1 and {}", JOURNAL_PROMPTS.len());
                };
                composer.apply_prompt(text);
            }
            report(composer.submit(store))
        }
        Command::Edit {
            id,
            title,
            content,
            mood,
        } => {
            let id = EntryId::from(id);
            let Some(entry) = store.get(&id) else {
                bail!("entry not found: {id}");
            };
            let mut composer = EntryComposer::new();
            composer.begin_edit(entry);
            if let Some(title) = title {
                composer.set_title(title);
            }
            if let Some(content) = content {
                composer.set_content(content);
            }
            if let Some(mood) = mood.as_deref().map(parse_mood_selection).transpose()? {
                match mood {
                    Some(mood) => composer.select_mood(mood),
                    None => bail!("a mood must be selected"),
                }
            }
            report(composer.submit(store))
        }
        Command::Delete { id, yes } => {
            confirm_destructive(store, PendingAction::Delete(EntryId::from(id)), yes)
        }
        Command::Clear { yes } => confirm_destructive(store, PendingAction::ClearAll, yes),
        Command::List { mood } => {
            let view = project(store.list(), mood);
            if let Some(empty) = view.empty_state {
                println!("{}", empty.message());
                return Ok(());
            }
            for entry in view.items {
                let when = entry.effective_timestamp().with_timezone(&Local);
                println!(
                    "{}  {} {}  ({})",
                    entry.id,
                    entry.mood,
                    entry.title,
                    when.format("%a, %b %-d %H:%M")
                );
                println!("    {}", entry.content.replace('\n', "\n    "));
            }
            Ok(())
        }
        Command::Insights { seed } => {
            let now = Local::now();
            let insights = summarize(store.list(), &now);
            println!("{}", insights.narrative);

            let chart = insights.chart_series();
            for (label, point) in chart.labels.iter().zip(chart.series.iter()) {
                match point {
                    Some(value) => println!("  {label}  {value:.1}"),
                    None => println!("  {label}  -"),
                }
            }

            let message = match seed {
                Some(seed) => affirmation::pick(
                    insights.dominant_mood,
                    &mut StdRng::seed_from_u64(seed),
                ),
                None => affirmation::pick(insights.dominant_mood, &mut rand::rng()),
            };
            println!("\n{message}");
            Ok(())
        }
        Command::Export { out } => {
            match write_export(&out, store.list(), Local::now().date_naive()) {
                Ok(path) => {
                    report(Notice::success(ENTRIES_EXPORTED))?;
                    println!("{}", path.display());
                    Ok(())
                }
                Err(ExportError::NothingToExport) => report(Notice::error(NOTHING_TO_EXPORT)),
                Err(err) => Err(err.into()),
            }
        }
        Command::Prompts => {
            for (index, prompt) in JOURNAL_PROMPTS.iter().enumerate() {
                println!("{}. {prompt}", index + 1);
            }
            Ok(())
        }
    }
}

fn confirm_destructive<K: KeyValueStore>(
    store: &mut EntryStore<K>,
    action: PendingAction,
    confirmed: bool,
) -> Result<()> {
    let mut gate = ConfirmationGate::new();
    let prompt = gate.request(action);
    if !confirmed {
        println!("{prompt} Re-run with --yes to confirm.");
        gate.cancel();
        return Ok(());
    }
    match gate.confirm(store) {
        Some(notice) => report(notice),
        None => Ok(()),
    }
}

fn report(notice: Notice) -> Result<()> {
    if notice.is_error() {
        bail!("{}", notice.message);
    }
    println!("{}", notice.message);
    Ok(())
}
