use std::io::{self, Write};
use std::process::ExitCode;

use anyhow::Result;
use log::debug;

use super::common;
use crate::core::prompt::{Answer, MessageType, OptionSet, Prompt};

/// Arguments of the `confirm` subcommand.
pub(super) struct Question<'a> {
    pub(super) kind: MessageType,
    pub(super) title: Option<&'a str>,
    pub(super) message: &'a str,
    pub(super) options: OptionSet,
    pub(super) default: Option<Answer>,
}

pub(super) fn execute(prompt: &mut dyn Prompt, question: Question<'_>) -> Result<ExitCode> {
    if let Some(default) = question.default {
        if !question.options.allows(default) {
            debug!(
                "'{default}' is not one of the {:?} answers, using '{}' as default",
                question.options,
                question.options.safe_default()
            );
        }
    }

    let answer = prompt.confirm(
        question.kind,
        question.title,
        question.message,
        question.options,
        question.default,
    )?;

    let mut stdout = io::stdout();
    writeln!(&mut stdout, "{answer}")?;
    Ok(common::exit_code(answer))
}
