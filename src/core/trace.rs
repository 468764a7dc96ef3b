//! Traceable errors and their textual rendering.
//!
//! A failure reported to the user may wrap the error that caused it, which may
//! in turn wrap another one. Each link carries a kind, a message and the call
//! frames captured where it was raised.

use std::fmt;

/// One captured call frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StackFrame {
    pub unit: String,
    pub operation: String,
    pub source: String,
    pub line: u32,
}

impl StackFrame {
    pub fn new(unit: &str, operation: &str, source: &str, line: u32) -> Self {
        Self {
            unit: unit.to_string(),
            operation: operation.to_string(),
            source: source.to_string(),
            line,
        }
    }
}

impl fmt::Display for StackFrame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "- in {}.{}() at {}:{}",
            self.unit, self.operation, self.source, self.line
        )
    }
}

/// An error together with the chain of errors that caused it.
///
/// Frames are ordered innermost first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorInfo {
    kind: String,
    message: String,
    frames: Vec<StackFrame>,
    cause: Option<Box<ErrorInfo>>,
}

impl ErrorInfo {
    pub fn new(kind: &str, message: &str) -> Self {
        Self {
            kind: kind.to_string(),
            message: message.to_string(),
            frames: vec![],
            cause: None,
        }
    }

    /// Append a frame, the first one pushed is the innermost.
    pub fn frame(mut self, frame: StackFrame) -> Self {
        self.frames.push(frame);
        self
    }

    pub fn frames(mut self, frames: impl IntoIterator<Item = StackFrame>) -> Self {
        self.frames.extend(frames);
        self
    }

    pub fn caused_by(mut self, cause: ErrorInfo) -> Self {
        self.cause = Some(Box::new(cause));
        self
    }

    /// Build a chain from any [`std::error::Error`] by following its `source`s.
    ///
    /// Rust errors do not expose their call frames, so the resulting chain has
    /// none. The top level kind is the type name of `E`, sources are named
    /// after the leading identifier of their `Debug` output.
    pub fn from_error<E: std::error::Error + 'static>(err: &E) -> Self {
        let mut info = Self::new(std::any::type_name::<E>(), &err.to_string());
        let mut causes = vec![];
        let mut source = err.source();
        while let Some(e) = source {
            causes.push(Self::new(&debug_kind(e), &e.to_string()));
            source = e.source();
        }
        if let Some(chain) = causes
            .into_iter()
            .rev()
            .reduce(|inner, outer| outer.caused_by(inner))
        {
            info = info.caused_by(chain);
        }
        info
    }

    pub fn kind(&self) -> &str {
        &self.kind
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn stack(&self) -> &[StackFrame] {
        &self.frames
    }

    pub fn cause(&self) -> Option<&ErrorInfo> {
        self.cause.as_deref()
    }

    /// Iterate this error and all its causes, outermost first.
    pub fn chain(&self) -> impl Iterator<Item = &ErrorInfo> {
        std::iter::successors(Some(self), |e| e.cause())
    }

    /// Pair every error of the chain with the number of trailing frames to
    /// leave out when printing it.
    ///
    /// The first error skips `1` (so every frame gets printed), each following
    /// error skips as many as its predecessor had in total.
    pub fn chain_with_skips(&self) -> Vec<(&ErrorInfo, usize)> {
        self.chain()
            .fold((vec![], 1), |(mut pairs, skip), err| {
                pairs.push((err, skip));
                (pairs, err.frames.len())
            })
            .0
    }

    /// Frames of this error left after skipping, in printing order.
    ///
    /// Printing starts at index `len - skip` and walks down to the innermost
    /// frame, nothing is printed when `skip` exceeds `len`. A `skip` of `0`
    /// (the predecessor had no frames) prints everything.
    pub fn visible_frames(&self, skip: usize) -> impl Iterator<Item = &StackFrame> {
        let len = self.frames.len();
        let count = (len + 1).saturating_sub(skip).min(len);
        self.frames[..count].iter().rev()
    }

    /// Render the whole chain as text, one line per error header or frame.
    pub fn render(&self) -> String {
        let mut out = String::new();
        for (idx, (err, skip)) in self.chain_with_skips().into_iter().enumerate() {
            if idx > 0 {
                out.push_str("Caused by: ");
            }
            out.push_str(&format!("{}: {}\n", err.kind, err.message));
            for frame in err.visible_frames(skip) {
                out.push_str(&format!("{frame}\n"));
            }
        }
        out
    }
}

impl fmt::Display for ErrorInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.kind, self.message)
    }
}

/// Follows [`anyhow::Error::chain`]. When the error was given context the
/// outermost kind is `anyhow::Error`, since context messages have no type of
/// their own; a bare wrapped error keeps the kind of the error it wraps, and a
/// bare `anyhow!` message is of kind `error`.
impl From<&anyhow::Error> for ErrorInfo {
    fn from(err: &anyhow::Error) -> Self {
        let mut links = err
            .chain()
            .map(|e| Self::new(&debug_kind(e), &e.to_string()))
            .collect::<Vec<_>>();
        if links.len() > 1 {
            links[0].kind = "anyhow::Error".to_string();
        }
        links
            .into_iter()
            .rev()
            .reduce(|inner, outer| outer.caused_by(inner))
            .unwrap_or_else(|| Self::new("anyhow::Error", &err.to_string()))
    }
}

fn debug_kind(err: &dyn std::error::Error) -> String {
    let debug = format!("{err:?}");
    let kind = debug
        .split(|c: char| !(c.is_alphanumeric() || c == '_' || c == ':'))
        .next()
        .unwrap_or_default();
    if kind.is_empty() {
        "error".to_string()
    } else {
        kind.to_string()
    }
}
