#![deny(unused_must_use)]

#[macro_use]
extern crate rust_i18n;

i18n!("locales", fallback = "en");

pub mod cli;
mod core;
pub mod utils;

// Exports
pub use core::catalog::{BundledCatalog, LayeredCatalog, MessageCatalog, TomlCatalog};
pub use core::console::{Console, TextConsole};
pub use core::locales::Language;
pub use core::prompt::{
    Answer, ConsolePrompt, Labels, MessageType, NonInteractivePrompt, OptionSet, Prompt, RunMode,
};
pub use core::trace::{ErrorInfo, StackFrame};
