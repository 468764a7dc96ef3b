use anyhow::{Context, Result};

use super::{Answer, MessageType, OptionSet, Prompt};
use crate::core::catalog::MessageCatalog;
use crate::core::console::Console;
use crate::core::trace::ErrorInfo;

const OK_CANCEL_KEY: &str = "prompt_ok_cancel";
const YES_NO_KEY: &str = "prompt_yes_no";
const YES_NO_CANCEL_KEY: &str = "prompt_yes_no_cancel";
const OK_KEY: &str = "prompt_ok";
const CANCEL_KEY: &str = "prompt_cancel";
const YES_KEY: &str = "prompt_yes";
const NO_KEY: &str = "prompt_no";

/// Localized text of a console prompt, resolved once from a message catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Labels {
    ok_cancel_prompt: String,
    yes_no_prompt: String,
    yes_no_cancel_prompt: String,
    ok: String,
    cancel: String,
    yes: String,
    no: String,
}

impl Labels {
    /// Look up every label in `catalog`.
    ///
    /// # Error
    /// Fails on the first label missing from `catalog`.
    pub fn resolve<C: MessageCatalog + ?Sized>(catalog: &C) -> Result<Self> {
        Ok(Self {
            ok_cancel_prompt: catalog.require(OK_CANCEL_KEY)?,
            yes_no_prompt: catalog.require(YES_NO_KEY)?,
            yes_no_cancel_prompt: catalog.require(YES_NO_CANCEL_KEY)?,
            ok: catalog.require(OK_KEY)?,
            cancel: catalog.require(CANCEL_KEY)?,
            yes: catalog.require(YES_KEY)?,
            no: catalog.require(NO_KEY)?,
        })
    }

    /// The line asking for a choice among `options`.
    pub fn prompt_line(&self, options: OptionSet) -> &str {
        match options {
            OptionSet::OkCancel => &self.ok_cancel_prompt,
            OptionSet::YesNo => &self.yes_no_prompt,
            OptionSet::YesNoCancel => &self.yes_no_cancel_prompt,
        }
    }

    /// The word a user types to pick `answer`.
    pub fn label(&self, answer: Answer) -> &str {
        match answer {
            Answer::Ok => &self.ok,
            Answer::Cancel => &self.cancel,
            Answer::Yes => &self.yes,
            Answer::No => &self.no,
        }
    }

    /// Labels offered for `options`, in order.
    pub fn choices(&self, options: OptionSet) -> Vec<&str> {
        options.answers().iter().map(|a| self.label(*a)).collect()
    }

    /// Map a selected label back to its answer.
    ///
    /// Labels are compared in a fixed order so that any input, even one that is
    /// not a label of `options` at all, ends up as an answer `options` allows.
    pub fn answer_for(&self, options: OptionSet, selected: &str) -> Answer {
        match options {
            OptionSet::OkCancel if selected == self.ok => Answer::Ok,
            OptionSet::OkCancel => Answer::Cancel,
            OptionSet::YesNo if selected == self.yes => Answer::Yes,
            OptionSet::YesNo => Answer::No,
            OptionSet::YesNoCancel if selected == self.yes => Answer::Yes,
            OptionSet::YesNoCancel if selected == self.no => Answer::No,
            OptionSet::YesNoCancel => Answer::Cancel,
        }
    }
}

/// [`Prompt`] shown on a line oriented text console.
#[derive(Debug)]
pub struct ConsolePrompt<C> {
    console: C,
    labels: Labels,
}

impl<C: Console> ConsolePrompt<C> {
    /// Bind a prompt to `console`, taking its labels from `catalog`.
    pub fn new<M: MessageCatalog + ?Sized>(console: C, catalog: &M) -> Result<Self> {
        let labels = Labels::resolve(catalog).context("unable to set up console prompt")?;
        Ok(Self::with_labels(console, labels))
    }

    pub fn with_labels(console: C, labels: Labels) -> Self {
        Self { console, labels }
    }

    pub fn labels(&self) -> &Labels {
        &self.labels
    }

    pub fn into_console(self) -> C {
        self.console
    }
}

impl<C: Console> Prompt for ConsolePrompt<C> {
    fn message(
        &mut self,
        _kind: MessageType,
        title: Option<&str>,
        message: &str,
        cause: Option<&ErrorInfo>,
    ) -> Result<()> {
        if let Some(title) = title {
            self.console.println(&format!("{title}:"))?;
        }
        self.console.println(message)?;
        if let Some(cause) = cause {
            self.console.println(cause.render().trim_end_matches('\n'))?;
        }
        Ok(())
    }

    fn confirm(
        &mut self,
        _kind: MessageType,
        _title: Option<&str>,
        message: &str,
        options: OptionSet,
        default: Option<Answer>,
    ) -> Result<Answer> {
        self.console.println(message)?;

        let default_label = self.labels.label(options.resolve_default(default));
        let selected = self.console.prompt_selection(
            self.labels.prompt_line(options),
            &self.labels.choices(options),
            default_label,
        )?;
        Ok(self.labels.answer_for(options, &selected))
    }
}
