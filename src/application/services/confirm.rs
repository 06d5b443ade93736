//! Confirmation gate for irreversible actions

use std::sync::Arc;

use tracing::{debug, warn};

use crate::application::{ApplicationError, ApplicationResult};
use crate::infrastructure::traits::Prompter;

/// Asks the operator before a destructive action runs.
///
/// Only `y` or `yes` (any case) count as consent. A blank line, any other
/// answer, end of input or a failed read all count as "no".
#[derive(Clone)]
pub struct ConfirmationGate {
    prompter: Arc<dyn Prompter>,
}

impl ConfirmationGate {
    pub fn new(prompter: Arc<dyn Prompter>) -> Self {
        Self { prompter }
    }

    /// Ask `question` and report whether the operator agreed.
    pub fn confirm(&self, question: &str) -> bool {
        let prompt = format!("{} [y/N]", question);
        match self.prompter.ask(&prompt) {
            Ok(Some(answer)) => is_affirmative(&answer),
            Ok(None) => {
                debug!("confirm: end of input, treating as no");
                false
            }
            Err(e) => {
                warn!("confirm: cannot read answer: {}", e);
                false
            }
        }
    }

    /// Pass when `explicit_confirm` is set or the operator agrees.
    ///
    /// Must run before the mutation it guards; on `Err(Aborted)` the caller
    /// must not touch any state.
    pub fn require(&self, explicit_confirm: bool, question: &str) -> ApplicationResult<()> {
        if explicit_confirm {
            debug!("require: confirmed by flag");
            return Ok(());
        }
        if self.confirm(question) {
            Ok(())
        } else {
            Err(ApplicationError::Aborted)
        }
    }
}

/// True for `y` / `yes`, ignoring case and surrounding whitespace.
fn is_affirmative(answer: &str) -> bool {
    matches!(answer.trim().to_ascii_lowercase().as_str(), "y" | "yes")
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::io;
    use std::sync::Mutex;

    /// Replays canned answers and records the prompts it was shown.
    struct Scripted {
        answer: io::Result<Option<String>>,
        asked: Mutex<Vec<String>>,
    }

    impl Scripted {
        fn new(answer: io::Result<Option<String>>) -> Arc<Self> {
            Arc::new(Self {
                answer,
                asked: Mutex::new(Vec::new()),
            })
        }
    }

    impl Prompter for Scripted {
        fn ask(&self, prompt: &str) -> io::Result<Option<String>> {
            self.asked.lock().unwrap().push(prompt.to_string());
            match &self.answer {
                Ok(a) => Ok(a.clone()),
                Err(e) => Err(io::Error::new(e.kind(), e.to_string())),
            }
        }
    }

    #[rstest]
    #[case("y\n", true)]
    #[case("YES\n", true)]
    #[case("  yes  ", true)]
    #[case("n\n", false)]
    #[case("\n", false)]
    #[case("yep\n", false)]
    fn given_answer_when_confirm_then_only_yes_passes(#[case] answer: &str, #[case] expected: bool) {
        let gate = ConfirmationGate::new(Scripted::new(Ok(Some(answer.to_string()))));
        assert_eq!(gate.confirm("Delete?"), expected);
    }

    #[test]
    fn given_explicit_confirm_when_require_then_never_prompts() {
        let prompter = Scripted::new(Ok(Some("n\n".into())));
        let gate = ConfirmationGate::new(prompter.clone());

        gate.require(true, "Delete alias 'x'?").unwrap();

        assert!(prompter.asked.lock().unwrap().is_empty());
    }

    #[test]
    fn given_end_of_input_when_require_then_aborted() {
        let gate = ConfirmationGate::new(Scripted::new(Ok(None)));
        assert!(matches!(
            gate.require(false, "Delete?"),
            Err(ApplicationError::Aborted)
        ));
    }

    #[test]
    fn given_read_error_when_require_then_aborted() {
        let gate = ConfirmationGate::new(Scripted::new(Err(io::Error::new(
            io::ErrorKind::BrokenPipe,
            "closed",
        ))));
        assert!(matches!(
            gate.require(false, "Delete?"),
            Err(ApplicationError::Aborted)
        ));
    }

    #[test]
    fn given_prompt_when_asking_then_shows_default_no_hint() {
        let prompter = Scripted::new(Ok(Some("y".into())));
        let gate = ConfirmationGate::new(prompter.clone());

        gate.require(false, "Delete alias 'x'?").unwrap();

        assert_eq!(
            prompter.asked.lock().unwrap().as_slice(),
            ["Delete alias 'x'? [y/N]".to_string()]
        );
    }
}
