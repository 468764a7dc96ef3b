use anyhow::{Context, Result};
use chrono::Local;
use fern::colors::{Color, ColoredLevelConfig};
use log::LevelFilter;
use std::io;
use std::path::{Path, PathBuf};

#[derive(Debug)]
pub struct Logger {
    log_file: Option<PathBuf>,
    dispatcher_: fern::Dispatch,
}

impl Default for Logger {
    fn default() -> Self {
        Self::new()
    }
}

impl Logger {
    pub fn new() -> Self {
        #[cfg(not(debug_assertions))]
        let level = LevelFilter::Info;
        #[cfg(debug_assertions)]
        let level = LevelFilter::Debug;

        Self {
            log_file: None,
            dispatcher_: fern::Dispatch::new().level(level),
        }
    }
    /// Set verbose output, this will print `debug!` messages as well.
    pub fn verbose(mut self, v: bool) -> Self {
        if v {
            self.dispatcher_ = self.dispatcher_.level(LevelFilter::Debug);
        }
        self
    }
    /// Ignore most output, keep only the `error` messages.
    pub fn quiet(mut self, q: bool) -> Self {
        if q {
            self.dispatcher_ = self.dispatcher_.level(LevelFilter::Error);
        }
        self
    }
    /// Also write every message into a file at `path`, creating its parent directory if needed.
    pub fn log_file(mut self, path: Option<&Path>) -> Self {
        self.log_file = path.map(Path::to_path_buf);
        self
    }

    /// Setup logger using [`log`] and [`fern`], this must be called first before
    /// any of the `info!`, `warn!`, `trace!`, `debug!`, `error!` macros.
    ///
    /// Messages are printed on `stderr`, leaving `stdout` to the prompts and
    /// their answers.
    ///
    /// - If [`verbose`](Logger::verbose) was called with `true`, this will output more
    ///     detailed log messages including `debug!`.
    /// - If [`quiet`](Logger::quiet) was called with `true`, this will only output errors.
    pub fn setup(self) -> Result<()> {
        let mut output = fern::Dispatch::new()
            .format(|out, msg, rec| {
                out.finish(format_args!(
                    "{}: {msg}",
                    ColoredLevelConfig::new()
                        .info(Color::BrightBlue)
                        .debug(Color::Magenta)
                        .color(rec.level())
                        .to_string()
                        .to_lowercase(),
                ));
            })
            .chain(io::stderr());

        if let Some(path) = &self.log_file {
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                super::ensure_dir(parent)?;
            }
            let file_config = fern::Dispatch::new()
                .format(|out, msg, rec| {
                    out.finish(format_args!(
                        "[{} {}] {msg}",
                        Local::now().to_rfc3339(),
                        rec.target(),
                    ))
                })
                .chain(
                    fern::log_file(path)
                        .with_context(|| format!("unable to open log file '{}'", path.display()))?,
                );
            output = output.chain(file_config);
        }

        self.dispatcher_.chain(output).apply()?;
        Ok(())
    }
}
