//! Common helpers shared by the subcommands.

use std::process::ExitCode;

use crate::core::prompt::Answer;
use crate::core::trace::ErrorInfo;

/// Exit code reporting an answer to scripts: `0` agrees, `1` declines, `2` cancels.
pub(crate) fn exit_code(answer: Answer) -> ExitCode {
    ExitCode::from(answer_code(answer))
}

fn answer_code(answer: Answer) -> u8 {
    match answer {
        Answer::Ok | Answer::Yes => 0,
        Answer::No => 1,
        Answer::Cancel => 2,
    }
}

/// Turn error messages given on the command line into a cause chain,
/// the first one being the outermost.
pub(crate) fn cause_chain(causes: &[String]) -> Option<ErrorInfo> {
    causes
        .iter()
        .rev()
        .map(|msg| ErrorInfo::new("error", msg))
        .reduce(|inner, outer| outer.caused_by(inner))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn answer_codes() {
        assert_eq!(answer_code(Answer::Ok), 0);
        assert_eq!(answer_code(Answer::Yes), 0);
        assert_eq!(answer_code(Answer::No), 1);
        assert_eq!(answer_code(Answer::Cancel), 2);
    }

    #[test]
    fn chain_keeps_order() {
        assert!(cause_chain(&[]).is_none());

        let chain = cause_chain(&["copy failed".into(), "disk full".into()]).unwrap();
        let messages = chain.chain().map(|e| e.message()).collect::<Vec<_>>();
        assert_eq!(messages, vec!["copy failed", "disk full"]);
    }
}
