use anyhow::Result;
use log::{debug, error, info, warn};

use super::{Answer, MessageType, OptionSet, Prompt};
use crate::core::trace::ErrorInfo;

/// [`Prompt`] for runs without a user, messages go to the log and every
/// question is answered without asking.
#[derive(Debug, Clone, Copy, Default)]
pub struct NonInteractivePrompt {
    yes_to_all: bool,
}

impl NonInteractivePrompt {
    /// Answer every question with its default.
    pub fn new() -> Self {
        Self::default()
    }

    /// Answer every question with [`OptionSet::affirmative`].
    pub fn assume_yes() -> Self {
        Self { yes_to_all: true }
    }

    /// The answer this prompt gives to a question, without asking it.
    pub fn answer(&self, options: OptionSet, default: Option<Answer>) -> Answer {
        if self.yes_to_all {
            options.affirmative()
        } else {
            options.resolve_default(default)
        }
    }
}

impl Prompt for NonInteractivePrompt {
    fn message(
        &mut self,
        kind: MessageType,
        title: Option<&str>,
        message: &str,
        cause: Option<&ErrorInfo>,
    ) -> Result<()> {
        let text = match title {
            Some(title) => format!("{title}: {message}"),
            None => message.to_string(),
        };
        match kind {
            MessageType::Error => error!("{text}"),
            MessageType::Warning => warn!("{text}"),
            MessageType::Information | MessageType::Question => info!("{text}"),
        }
        if let Some(cause) = cause {
            debug!("{}", cause.render().trim_end());
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
        let answer = self.answer(options, default);
        info!(
            "{}",
            t!("auto_answer", question = message, answer = answer.as_str())
        );
        Ok(answer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn takes_default_when_legal() {
        let mut prompt = NonInteractivePrompt::new();
        let answer = prompt
            .confirm(
                MessageType::Question,
                None,
                "overwrite?",
                OptionSet::YesNo,
                Some(Answer::Yes),
            )
            .unwrap();
        assert_eq!(answer, Answer::Yes);
    }

    #[test]
    fn falls_back_to_safe_default() {
        let prompt = NonInteractivePrompt::new();
        assert_eq!(prompt.answer(OptionSet::OkCancel, None), Answer::Cancel);
        assert_eq!(
            prompt.answer(OptionSet::YesNoCancel, Some(Answer::Ok)),
            Answer::Cancel
        );
    }

    #[test]
    fn assume_yes_ignores_default() {
        let prompt = NonInteractivePrompt::assume_yes();
        assert_eq!(
            prompt.answer(OptionSet::OkCancel, Some(Answer::Cancel)),
            Answer::Ok
        );
        assert_eq!(prompt.answer(OptionSet::YesNoCancel, None), Answer::Yes);
    }

    #[test]
    fn messages_never_fail() {
        let mut prompt = NonInteractivePrompt::new();
        let cause = ErrorInfo::new("Io", "denied");
        assert!(prompt
            .message(MessageType::Error, Some("Failure"), "boom", Some(&cause))
            .is_ok());
    }
}
