use std::process::ExitCode;

use anyhow::Result;
use install_prompt::cli;

fn main() -> Result<ExitCode> {
    cli::run()
}
