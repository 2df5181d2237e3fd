use crate::Result;

/// Blocking interactive prompt collaborator.
///
/// Injected so conflict resolution can be exercised in tests without a
/// real terminal. Only one prompt is ever pending; callers re-ask until
/// the answer is one they accept.
pub trait Prompt {
    fn ask(&mut self, question: &str) -> Result<String>;

    /// Warning line shown before a prompt (or a forced replacement).
    fn warn(&mut self, message: &str);

    /// Informational line tied to the prompt flow (paths, outcomes).
    fn log(&mut self, message: &str);
}

/// Prompt fed from a fixed script of answers.
///
/// Exhausting the script is an error rather than a silent default, so a
/// test with a wrong answer count fails instead of looping.
pub struct ScriptedPrompt {
    answers: Vec<String>,
    pub questions: Vec<String>,
    pub warnings: Vec<String>,
    pub logs: Vec<String>,
}

impl ScriptedPrompt {
    pub fn new(answers: &[&str]) -> Self {
        Self {
            answers: answers.iter().rev().map(|s| s.to_string()).collect(),
            questions: Vec::new(),
            warnings: Vec::new(),
            logs: Vec::new(),
        }
    }
}

impl Prompt for ScriptedPrompt {
    fn ask(&mut self, question: &str) -> Result<String> {
        self.questions.push(question.to_string());
        self.answers
            .pop()
            .ok_or_else(|| crate::error::Error::internal_unexpected("prompt script exhausted"))
    }

    fn warn(&mut self, message: &str) {
        self.warnings.push(message.to_string());
    }

    fn log(&mut self, message: &str) {
        self.logs.push(message.to_string());
    }
}
