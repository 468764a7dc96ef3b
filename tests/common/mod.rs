//! Helpers shared by the integration tests.
#![allow(dead_code)]

use std::collections::VecDeque;

use anyhow::Result;
use install_prompt::Console;

pub const BIN: &str = env!("CARGO_BIN_EXE_install-prompt");

/// What a [`ScriptedConsole`] does when asked for a selection.
#[derive(Debug, Clone)]
pub enum Pick {
    /// Take the default label, as if the user just pressed enter.
    Default,
    /// Take this exact label.
    Label(String),
}

/// A recorded call of [`Console::prompt_selection`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection {
    pub prompt: String,
    pub allowed: Vec<String>,
    pub default: String,
}

/// Console answering from a script and recording everything it is shown.
#[derive(Debug, Default)]
pub struct ScriptedConsole {
    pub lines: Vec<String>,
    pub selections: Vec<Selection>,
    picks: VecDeque<Pick>,
}

impl ScriptedConsole {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn picking(picks: impl IntoIterator<Item = Pick>) -> Self {
        Self {
            picks: picks.into_iter().collect(),
            ..Default::default()
        }
    }

    pub fn output(&self) -> String {
        self.lines.join("\n")
    }
}

impl Console for ScriptedConsole {
    fn println(&mut self, line: &str) -> Result<()> {
        self.lines.push(line.to_string());
        Ok(())
    }

    fn prompt_selection(&mut self, prompt: &str, allowed: &[&str], default: &str) -> Result<String> {
        self.selections.push(Selection {
            prompt: prompt.to_string(),
            allowed: allowed.iter().map(|s| s.to_string()).collect(),
            default: default.to_string(),
        });
        Ok(match self.picks.pop_front().unwrap_or(Pick::Default) {
            Pick::Default => default.to_string(),
            Pick::Label(label) => label,
        })
    }
}
