//! Contains all the definition of command line arguments.

mod common;
mod confirm;
mod message;

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::Result;
use clap::{Parser, Subcommand, ValueHint};

use crate::core::catalog::{BundledCatalog, LayeredCatalog, TomlCatalog};
use crate::core::locales::Language;
use crate::core::prompt::{Answer, MessageType, OptionSet, Prompt, RunMode};
use crate::utils;

/// Ask confirmation questions and show messages the way an installer does.
#[derive(Parser, Debug)]
#[command(version, about)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, conflicts_with = "quiet")]
    pub verbose: bool,
    /// Suppress non-critical messages
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,
    /// Disable interaction and answer 'yes' to all prompts
    #[arg(short, long = "yes")]
    yes_to_all: bool,
    /// Disable interaction and answer every prompt with its default
    #[arg(long)]
    non_interactive: bool,
    /// Specify another language to display
    #[arg(short, long, value_name = "LANG", value_parser = Language::possible_values())]
    pub lang: Option<String>,
    /// A TOML file of messages overriding the bundled ones
    #[arg(long, value_name = "PATH", value_hint = ValueHint::FilePath)]
    catalog: Option<PathBuf>,
    /// Also write log messages into this file
    #[arg(hide = true, long, value_name = "PATH", value_hint = ValueHint::FilePath)]
    log_file: Option<PathBuf>,
    #[command(subcommand)]
    command: Subcommands,
}

#[derive(Subcommand, Debug)]
enum Subcommands {
    /// Ask a question and print the chosen answer
    ///
    /// The exit code tells the answer as well: `0` for ok or yes, `1` for no
    /// and `2` for cancel.
    Confirm {
        /// Title shown above the question
        #[arg(short, long)]
        title: Option<String>,
        /// The answers to offer
        #[arg(short, long, value_enum, default_value_t = OptionSet::YesNo)]
        options: OptionSet,
        /// The answer picked when nothing is entered
        #[arg(short, long, value_enum)]
        default: Option<Answer>,
        /// Kind of the question
        #[arg(long = "type", value_enum, default_value_t = MessageType::Question)]
        kind: MessageType,
        /// The question to ask
        message: String,
    },
    /// Show a message, optionally followed by the errors that caused it
    Message {
        /// Title shown above the message
        #[arg(short, long)]
        title: Option<String>,
        /// Kind of the message
        #[arg(long = "type", value_enum, default_value_t = MessageType::Information)]
        kind: MessageType,
        /// An error that led to this message, repeat to describe a chain of causes
        #[arg(long, value_name = "ERROR")]
        cause: Vec<String>,
        /// The message to show
        message: String,
    },
}

impl Cli {
    pub fn run_mode(&self) -> RunMode {
        RunMode::from_flags(self.yes_to_all, self.non_interactive)
    }

    pub fn catalog_path(&self) -> Option<&Path> {
        self.catalog.as_deref()
    }

    pub fn execute(&self) -> Result<ExitCode> {
        setup(
            self.verbose,
            self.quiet,
            self.lang.as_deref(),
            self.log_file.as_deref(),
        )?;

        let catalog = load_catalog(self.lang.as_deref(), self.catalog_path())?;
        let mut prompt = self.run_mode().prompt(&catalog)?;
        self.command.execute(prompt.as_mut())
    }
}

impl Subcommands {
    fn execute(&self, prompt: &mut dyn Prompt) -> Result<ExitCode> {
        match self {
            Self::Confirm {
                title,
                options,
                default,
                kind,
                message,
            } => confirm::execute(
                prompt,
                confirm::Question {
                    kind: *kind,
                    title: title.as_deref(),
                    message,
                    options: *options,
                    default: *default,
                },
            ),
            Self::Message {
                title,
                kind,
                cause,
                message: text,
            } => message::execute(prompt, *kind, title.as_deref(), text, cause),
        }
    }
}

pub fn parse_cli() -> Cli {
    Cli::parse()
}

pub fn run() -> Result<ExitCode> {
    parse_cli().execute()
}

/// Bundled messages of the chosen language, overridden by the entries of `path` if given.
fn load_catalog(
    lang: Option<&str>,
    path: Option<&Path>,
) -> Result<LayeredCatalog<TomlCatalog, BundledCatalog>> {
    let bundled = match lang {
        Some(lang_str) => BundledCatalog::new(lang_str.parse()?),
        None => BundledCatalog::with_locale(&rust_i18n::locale())?,
    };
    let overrides = match path {
        Some(p) => TomlCatalog::load(p)?,
        None => TomlCatalog::default(),
    };
    Ok(LayeredCatalog::new(overrides, bundled))
}

fn setup(verbose: bool, quiet: bool, lang: Option<&str>, log_file: Option<&Path>) -> Result<()> {
    // Setup locale
    if let Some(lang_str) = lang {
        let parsed: Language = lang_str.parse()?;
        utils::set_locale(parsed.locale_str());
    }
    // Setup logger
    utils::Logger::new()
        .verbose(verbose)
        .quiet(quiet)
        .log_file(log_file)
        .setup()?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn verify_cli() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parse_confirm() {
        let cli = Cli::try_parse_from([
            "install-prompt",
            "--non-interactive",
            "confirm",
            "--options",
            "yes-no-cancel",
            "--default",
            "no",
            "Remove old files?",
        ])
        .unwrap();
        assert_eq!(cli.run_mode(), RunMode::Unattended);
        match cli.command {
            Subcommands::Confirm {
                options,
                default,
                kind,
                ..
            } => {
                assert_eq!(options, OptionSet::YesNoCancel);
                assert_eq!(default, Some(Answer::No));
                assert_eq!(kind, MessageType::Question);
            }
            _ => panic!("expecting a confirm command"),
        }
    }

    #[test]
    fn verbose_conflicts_with_quiet() {
        assert!(Cli::try_parse_from(["install-prompt", "-v", "-q", "message", "hi"]).is_err());
    }

    #[test]
    fn catalog_file_overrides_labels() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("messages.toml");
        std::fs::write(&path, "prompt_yes = \"J\"\n").unwrap();

        let catalog = load_catalog(Some("en"), Some(path.as_path())).unwrap();
        let labels = crate::core::prompt::Labels::resolve(&catalog).unwrap();
        assert_eq!(labels.label(Answer::Yes), "J");
        assert_eq!(labels.label(Answer::No), "N");
    }
}
