//! jstamp CLI — timestamps with daily-journal cross-references
//!
//! Commands: insert, fragment, config, completions

use std::io;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use clap::{CommandFactory, Parser};
use serde::Serialize;

use jstamp_core::link::{
    cross_reference_fragment, cross_reference_line, daily_note_file_path, self_fragment,
};
use jstamp_core::{insert_timestamp, Settings, Stamp};
use jstamp_vault::{NoteWorkspace, Vault};

#[derive(Parser)]
#[command(name = "jstamp")]
#[command(version)]
#[command(about = "Timestamps with daily-journal cross-references")]
struct Cli {
    /// Log level (error, warn, info, debug, trace); overrides the vault setting
    #[arg(long, global = true)]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(clap::Subcommand)]
enum Commands {
    /// Insert a timestamp into a note
    #[command(alias = "i")]
    Insert {
        /// Vault root directory
        #[arg(long, default_value = ".")]
        vault: PathBuf,
        /// Note to stamp, absolute or relative to the vault
        #[arg(long)]
        note: Option<PathBuf>,
        /// Byte offset of the caret (default: end of note)
        #[arg(long)]
        at: Option<usize>,
        /// Length in bytes of the selection to replace
        #[arg(long, default_value_t = 0, requires = "at")]
        len: usize,
        /// Instant to stamp, RFC 3339 (default: now)
        #[arg(long)]
        now: Option<DateTime<Utc>>,
    },
    /// Print what `insert` would write, without touching any file
    Fragment {
        /// Base name of the note being stamped (default: today's daily note)
        #[arg(long)]
        note_name: Option<String>,
        /// Instant to stamp, RFC 3339 (default: now)
        #[arg(long)]
        now: Option<DateTime<Utc>>,
    },
    /// Show or change vault settings
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
    /// Generate shell completions
    Completions {
        shell: clap_complete::Shell,
    },
}

#[derive(clap::Subcommand)]
enum ConfigAction {
    /// Print the effective settings as TOML
    Show {
        #[arg(long, default_value = ".")]
        vault: PathBuf,
    },
    /// Change settings and save them
    Set {
        #[arg(long, default_value = ".")]
        vault: PathBuf,
        /// New value of the free-form setting
        #[arg(required_unless_present = "level")]
        value: Option<String>,
        /// New log level (error, warn, info, debug, trace)
        #[arg(long)]
        level: Option<String>,
    },
}

/// Preview printed by `jstamp fragment`.
#[derive(Serialize)]
struct FragmentPreview {
    stamp: Stamp,
    fragment: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    daily_note: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    line: Option<String>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let log_level = cli.log_level.as_deref();

    match cli.command {
        Some(Commands::Insert {
            vault,
            note,
            at,
            len,
            now,
        }) => {
            let (vault, settings) = open_vault(&vault, log_level)?;
            let selection = at.map(|start| (start, start.saturating_add(len)));
            run_insert(vault, &settings, note.as_deref(), selection, now)
        }
        Some(Commands::Fragment { note_name, now }) => {
            init_logging(log_level.unwrap_or("info"))?;
            run_fragment(note_name.as_deref(), now.unwrap_or_else(Utc::now))
        }
        Some(Commands::Config { action }) => match action {
            ConfigAction::Show { vault } => {
                let (_, settings) = open_vault(&vault, log_level)?;
                print!("{}", settings.to_toml()?);
                Ok(())
            }
            ConfigAction::Set {
                vault,
                value,
                level,
            } => {
                let (vault, mut settings) = open_vault(&vault, log_level)?;
                if let Some(value) = value {
                    settings.setting = value;
                }
                if let Some(level) = level {
                    parse_level(&level)?;
                    settings.log_level = level;
                }
                settings
                    .save(&vault.settings_path())
                    .context("failed to save settings")?;
                print!("{}", settings.to_toml()?);
                Ok(())
            }
        },
        Some(Commands::Completions { shell }) => {
            clap_complete::generate(shell, &mut Cli::command(), "jstamp", &mut io::stdout());
            Ok(())
        }
        None => {
            println!(
                "jstamp v{} — timestamps with daily-journal cross-references",
                env!("CARGO_PKG_VERSION")
            );
            println!("Run `jstamp --help` for usage.");
            Ok(())
        }
    }
}

/// Open the vault, load its settings, and start logging at the effective level.
fn open_vault(root: &Path, log_level: Option<&str>) -> Result<(Vault, Settings)> {
    let vault = Vault::open(root).context("failed to open vault")?;
    let settings = Settings::load(&vault.settings_path()).context("failed to load settings")?;

    // An invalid --log-level is an error; an invalid stored level falls back.
    if let Some(level) = log_level {
        init_logging(level)?;
    } else if parse_level(&settings.log_level).is_ok() {
        init_logging(&settings.log_level)?;
    } else {
        init_logging(&Settings::default().log_level)?;
        tracing::warn!(
            level = %settings.log_level,
            "invalid log level in settings, using the default"
        );
    }
    Ok((vault, settings))
}

fn parse_level(level: &str) -> Result<tracing::Level> {
    level
        .parse()
        .with_context(|| format!("invalid log level '{level}'"))
}

/// Log to stderr; stdout carries command output only.
fn init_logging(level: &str) -> Result<()> {
    let level = parse_level(level)?;
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
    Ok(())
}

fn run_insert(
    mut vault: Vault,
    settings: &Settings,
    note: Option<&Path>,
    selection: Option<(usize, usize)>,
    now: Option<DateTime<Utc>>,
) -> Result<()> {
    tracing::debug!(setting = %settings.setting, root = %vault.root().display(), "insert");

    let mut workspace = match note {
        Some(note) => {
            let path = if note.is_absolute() {
                note.to_path_buf()
            } else {
                vault.root().join(note)
            };
            NoteWorkspace::open(&path)
                .with_context(|| format!("failed to open {}", path.display()))?
        }
        None => NoteWorkspace::empty(),
    };

    if let (Some((start, end)), Some(editor)) = (selection, workspace.editor_mut()) {
        editor.select(start, end)?;
    }

    let outcome = insert_timestamp(now.unwrap_or_else(Utc::now), &mut workspace, &mut vault)
        .context("timestamp insertion failed")?;

    println!("{}", serde_json::to_string_pretty(&outcome)?);
    Ok(())
}

fn run_fragment(note_name: Option<&str>, now: DateTime<Utc>) -> Result<()> {
    let stamp = Stamp::from_instant(now);

    let preview = match note_name {
        Some(name) if name != stamp.date => FragmentPreview {
            fragment: cross_reference_fragment(&stamp),
            daily_note: Some(daily_note_file_path(&stamp.date)),
            line: Some(cross_reference_line(&stamp, name)),
            stamp,
        },
        _ => FragmentPreview {
            fragment: self_fragment(&stamp),
            daily_note: None,
            line: None,
            stamp,
        },
    };

    println!("{}", serde_json::to_string_pretty(&preview)?);
    Ok(())
}
