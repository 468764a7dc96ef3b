use std::process::ExitCode;

use anyhow::Result;

use super::common;
use crate::core::prompt::{MessageType, Prompt};

pub(super) fn execute(
    prompt: &mut dyn Prompt,
    kind: MessageType,
    title: Option<&str>,
    message: &str,
    causes: &[String],
) -> Result<ExitCode> {
    let cause = common::cause_chain(causes);
    prompt.message(kind, title, message, cause.as_ref())?;
    Ok(ExitCode::SUCCESS)
}
