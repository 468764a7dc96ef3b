//! Asking the user for confirmation, independent of where the question is shown.
//!
//! A [`Prompt`] is created once per run (see [`RunMode::prompt`]) and then used to
//! display messages and to ask questions whose answers are limited to one of the
//! fixed [`OptionSet`]s.

mod auto;
mod console;

pub use auto::NonInteractivePrompt;
pub use console::{ConsolePrompt, Labels};

use std::fmt::Display;

use anyhow::Result;
use clap::ValueEnum;

use super::catalog::MessageCatalog;
use super::console::{Console, TextConsole};
use super::trace::ErrorInfo;

/// Classification of a message, only used as a hint for presenting it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum MessageType {
    Error,
    Warning,
    #[default]
    Information,
    Question,
}

/// The fixed combinations of answers a question may offer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OptionSet {
    OkCancel,
    YesNo,
    YesNoCancel,
}

/// One answer to a question.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum)]
pub enum Answer {
    Ok,
    Cancel,
    Yes,
    No,
}

impl OptionSet {
    pub const ALL: [OptionSet; 3] = [Self::OkCancel, Self::YesNo, Self::YesNoCancel];

    /// The answers this set may produce, in the order they are offered.
    pub const fn answers(self) -> &'static [Answer] {
        match self {
            Self::OkCancel => &[Answer::Ok, Answer::Cancel],
            Self::YesNo => &[Answer::Yes, Answer::No],
            Self::YesNoCancel => &[Answer::Yes, Answer::No, Answer::Cancel],
        }
    }

    pub fn allows(self, answer: Answer) -> bool {
        self.answers().contains(&answer)
    }

    /// The answer picked when the caller gave no usable default, which is
    /// always the one that changes nothing.
    pub const fn safe_default(self) -> Answer {
        match self {
            Self::OkCancel | Self::YesNoCancel => Answer::Cancel,
            Self::YesNo => Answer::No,
        }
    }

    /// The answer that agrees to go on.
    pub const fn affirmative(self) -> Answer {
        match self {
            Self::OkCancel => Answer::Ok,
            Self::YesNo | Self::YesNoCancel => Answer::Yes,
        }
    }

    /// Keep `default` if this set allows it, otherwise fall back to
    /// [`safe_default`](OptionSet::safe_default).
    pub fn resolve_default(self, default: Option<Answer>) -> Answer {
        match default {
            Some(answer) if self.allows(answer) => answer,
            _ => self.safe_default(),
        }
    }
}

impl Answer {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Ok => "ok",
            Self::Cancel => "cancel",
            Self::Yes => "yes",
            Self::No => "no",
        }
    }

    /// Whether this answer agrees to go on.
    pub fn is_affirmative(&self) -> bool {
        matches!(self, Self::Ok | Self::Yes)
    }
}

impl Display for Answer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Displays messages and asks questions.
pub trait Prompt {
    /// Show a message, optionally with a title and the error that led to it.
    fn message(
        &mut self,
        kind: MessageType,
        title: Option<&str>,
        message: &str,
        cause: Option<&ErrorInfo>,
    ) -> Result<()>;

    /// Ask a question and block until it is answered.
    ///
    /// The returned answer is always one that `options` allows. A `default` not
    /// allowed by `options` is ignored in favor of [`OptionSet::safe_default`].
    fn confirm(
        &mut self,
        kind: MessageType,
        title: Option<&str>,
        message: &str,
        options: OptionSet,
        default: Option<Answer>,
    ) -> Result<Answer>;

    fn info(&mut self, message: &str) -> Result<()> {
        self.message(MessageType::Information, None, message, None)
    }

    fn warn(&mut self, title: Option<&str>, message: &str) -> Result<()> {
        self.message(MessageType::Warning, title, message, None)
    }

    fn error(&mut self, message: &str, cause: Option<&ErrorInfo>) -> Result<()> {
        self.message(MessageType::Error, None, message, cause)
    }

    /// Report a failure using its own message as the text.
    fn report(&mut self, error: &anyhow::Error) -> Result<()> {
        let info = ErrorInfo::from(error);
        self.message(MessageType::Error, None, &error.to_string(), Some(&info))
    }

    /// Ask a question with no title and no explicit default.
    fn ask(&mut self, message: &str, options: OptionSet) -> Result<Answer> {
        self.confirm(MessageType::Question, None, message, options, None)
    }
}

impl<P: Prompt + ?Sized> Prompt for Box<P> {
    fn message(
        &mut self,
        kind: MessageType,
        title: Option<&str>,
        message: &str,
        cause: Option<&ErrorInfo>,
    ) -> Result<()> {
        (**self).message(kind, title, message, cause)
    }

    fn confirm(
        &mut self,
        kind: MessageType,
        title: Option<&str>,
        message: &str,
        options: OptionSet,
        default: Option<Answer>,
    ) -> Result<Answer> {
        (**self).confirm(kind, title, message, options, default)
    }
}

/// How the current run interacts with its user, decided once at startup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RunMode {
    /// Ask on the text console.
    #[default]
    Console,
    /// Nobody is there to answer, take the default of every question.
    Unattended,
    /// Nobody is there to answer, agree to every question.
    AssumeYes,
}

impl RunMode {
    pub fn from_flags(yes_to_all: bool, non_interactive: bool) -> Self {
        if yes_to_all {
            Self::AssumeYes
        } else if non_interactive {
            Self::Unattended
        } else {
            Self::Console
        }
    }

    /// Build the prompt of this mode, bound to the process' standard input and output.
    pub fn prompt<C: MessageCatalog>(self, catalog: &C) -> Result<Box<dyn Prompt>> {
        self.prompt_with(catalog, TextConsole::stdio())
    }

    /// Like [`prompt`](RunMode::prompt) but bound to the given console.
    pub fn prompt_with<C, T>(self, catalog: &C, console: T) -> Result<Box<dyn Prompt>>
    where
        C: MessageCatalog,
        T: Console + 'static,
    {
        Ok(match self {
            Self::Console => Box::new(ConsolePrompt::new(console, catalog)?),
            Self::Unattended => Box::new(NonInteractivePrompt::new()),
            Self::AssumeYes => Box::new(NonInteractivePrompt::assume_yes()),
        })
    }
}
