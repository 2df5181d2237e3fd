//! Per-file overwrite resolution.
//!
//! Decides whether a target path gets written, prompting the user when an
//! existing file would be replaced and `--force` was not given. The same
//! protocol runs as a preflight on the theme directory itself before any
//! generation begins.

use std::path::Path;

use crate::local_files::FileSystem;
use crate::prompt::Prompt;
use crate::Result;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution {
    Write,
    Skip,
}

pub const ANSWER_SKIP: &str = "s";
pub const ANSWER_REPLACE: &str = "r";

const QUESTION: &str = "Skip this file, or replace it with scaffolding? [s/r]: ";

/// Resolve whether `path` should be written.
///
/// A missing path writes without prompting. An existing path writes
/// without prompting under `force`. Otherwise the user is asked until the
/// answer is exactly `s` or `r` — anything else re-prompts, so a typo is
/// never misread as a skip.
pub fn resolve(
    fs: &dyn FileSystem,
    prompt: &mut dyn Prompt,
    path: &Path,
    force: bool,
) -> Result<Resolution> {
    if !fs.exists(path) {
        return Ok(Resolution::Write);
    }

    prompt.warn("File already exists.");
    prompt.log(&path.display().to_string());

    if force {
        prompt.log("Replacing");
        return Ok(Resolution::Write);
    }

    loop {
        let answer = prompt.ask(QUESTION)?;
        match answer.trim() {
            ANSWER_REPLACE => {
                prompt.log("Replacing");
                return Ok(Resolution::Write);
            }
            ANSWER_SKIP => {
                prompt.log("Skipping");
                return Ok(Resolution::Skip);
            }
            _ => continue,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::local_files::{local, FileSystem};
    use crate::prompt::ScriptedPrompt;
    use tempfile::tempdir;

    #[test]
    fn missing_path_writes_without_prompting() {
        let dir = tempdir().unwrap();
        let fs = local();
        let mut prompt = ScriptedPrompt::new(&[]);

        let resolution = resolve(&fs, &mut prompt, &dir.path().join("new.php"), false).unwrap();

        assert_eq!(resolution, Resolution::Write);
        assert!(prompt.questions.is_empty());
        assert!(prompt.warnings.is_empty());
    }

    #[test]
    fn force_writes_existing_without_prompting() {
        let dir = tempdir().unwrap();
        let fs = local();
        let path = dir.path().join("style.css");
        fs.write(&path, "body {}").unwrap();

        let mut prompt = ScriptedPrompt::new(&[]);
        let resolution = resolve(&fs, &mut prompt, &path, true).unwrap();

        assert_eq!(resolution, Resolution::Write);
        assert!(prompt.questions.is_empty());
        // Replacement is still logged.
        assert!(prompt.logs.iter().any(|l| l == "Replacing"));
    }

    #[test]
    fn existing_path_maps_answers() {
        let dir = tempdir().unwrap();
        let fs = local();
        let path = dir.path().join("style.css");
        fs.write(&path, "body {}").unwrap();

        let mut prompt = ScriptedPrompt::new(&["s"]);
        assert_eq!(
            resolve(&fs, &mut prompt, &path, false).unwrap(),
            Resolution::Skip
        );

        let mut prompt = ScriptedPrompt::new(&["r"]);
        assert_eq!(
            resolve(&fs, &mut prompt, &path, false).unwrap(),
            Resolution::Write
        );
    }

    #[test]
    fn invalid_answers_reprompt() {
        let dir = tempdir().unwrap();
        let fs = local();
        let path = dir.path().join("style.css");
        fs.write(&path, "body {}").unwrap();

        // Uppercase is not accepted; only exact `s` or `r` terminate.
        let mut prompt = ScriptedPrompt::new(&["yes", "", "R", "s"]);
        let resolution = resolve(&fs, &mut prompt, &path, false).unwrap();

        assert_eq!(resolution, Resolution::Skip);
        assert_eq!(prompt.questions.len(), 4);
    }

    #[test]
    fn chosen_outcome_is_logged() {
        let dir = tempdir().unwrap();
        let fs = local();
        let path = dir.path().join("style.css");
        fs.write(&path, "body {}").unwrap();

        let mut prompt = ScriptedPrompt::new(&["r"]);
        resolve(&fs, &mut prompt, &path, false).unwrap();

        assert!(prompt.logs.iter().any(|l| l.contains("style.css")));
        assert!(prompt.logs.iter().any(|l| l == "Replacing"));
    }
}
