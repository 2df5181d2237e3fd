//! Batch theme generation.
//!
//! Orchestrates a full scaffold run: slug validation, containment
//! checking, the preflight overwrite decision on the theme directory,
//! template data assembly, then the ordered per-file resolve/render/write
//! walk over the manifest.

use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::conflict::{self, Resolution};
use crate::containment;
use crate::error::{Error, ErrorCode};
use crate::local_files::FileSystem;
use crate::manifest;
use crate::prompt::Prompt;
use crate::slug;
use crate::templates::TemplateSource;
use crate::theme_data::{ThemeData, ThemeOptions};
use crate::utils::template::render_map;
use crate::Result;

/// One scaffold invocation, fully parsed.
#[derive(Debug, Clone)]
pub struct ScaffoldRequest {
    pub slug: String,
    pub options: ThemeOptions,
    pub force: bool,
    /// Allowed parent directory; the theme directory must be its direct
    /// child.
    pub themes_dir: String,
}

/// What a scaffold run actually did.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScaffoldOutcome {
    pub theme_name: String,
    pub theme_dir: String,
    /// Relative paths written, in manifest order.
    pub written: Vec<String>,
    /// Relative paths the user chose to keep, in manifest order.
    pub skipped: Vec<String>,
    /// True when the user declined the preflight prompt on the theme
    /// directory; nothing was created.
    pub declined: bool,
}

/// Run a full scaffold.
///
/// Step order is load-bearing: validation and the containment check run
/// before any filesystem access, and the preflight decision on the theme
/// directory runs before any file content is rendered. A per-file skip is
/// never fatal; a failed write of a chosen file always is.
pub fn scaffold(
    request: &ScaffoldRequest,
    fs: &dyn FileSystem,
    prompt: &mut dyn Prompt,
    templates: &dyn TemplateSource,
) -> Result<ScaffoldOutcome> {
    slug::validate(&request.slug)?;

    let themes_dir = request.themes_dir.trim_end_matches('/').to_string();
    let theme_dir = format!("{}/{}", themes_dir, request.slug);
    containment::check_containment(&theme_dir, &themes_dir)?;

    let data = ThemeData::build(&request.slug, &request.options);

    let theme_dir_path = PathBuf::from(&theme_dir);
    if conflict::resolve(fs, prompt, &theme_dir_path, request.force)? == Resolution::Skip {
        return Ok(ScaffoldOutcome {
            theme_name: data.theme_name().to_string(),
            theme_dir,
            written: Vec::new(),
            skipped: Vec::new(),
            declined: true,
        });
    }

    fs.ensure_dir(Path::new(&themes_dir))?;

    let mut written = Vec::new();
    let mut skipped = Vec::new();

    for entry in manifest::resolve(&data) {
        let full_path = format!("{}/{}", theme_dir, entry.target);
        containment::check_within(&full_path, &theme_dir)?;

        let content = match entry.source {
            manifest::ContentSource::Raw(name) => templates.content(name)?.to_string(),
            manifest::ContentSource::Templated(name) => {
                render_map(templates.content(name)?, data.vars())
            }
        };

        let path = PathBuf::from(&full_path);
        match conflict::resolve(fs, prompt, &path, request.force)? {
            Resolution::Skip => {
                skipped.push(entry.target);
                continue;
            }
            Resolution::Write => {
                if let Some(parent) = path.parent() {
                    fs.ensure_dir(parent)?;
                }
                fs.write(&path, &content).map_err(|e| {
                    Error::new(
                        ErrorCode::InternalIoError,
                        format!("Error creating file: {}", entry.target),
                        e.details,
                    )
                })?;
                written.push(entry.target);
            }
        }
    }

    Ok(ScaffoldOutcome {
        theme_name: data.theme_name().to_string(),
        theme_dir,
        written,
        skipped,
        declined: false,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::local_files::local;
    use crate::prompt::ScriptedPrompt;
    use crate::templates::EmbeddedTemplates;
    use tempfile::tempdir;

    fn request(slug: &str, themes_dir: &str) -> ScaffoldRequest {
        ScaffoldRequest {
            slug: slug.to_string(),
            options: ThemeOptions::default(),
            force: false,
            themes_dir: themes_dir.to_string(),
        }
    }

    #[test]
    fn invalid_slug_aborts_before_any_io() {
        let base = tempdir().unwrap();
        let themes_dir = base.path().join("themes");
        let mut prompt = ScriptedPrompt::new(&[]);

        let err = scaffold(
            &request("../evil", &themes_dir.display().to_string()),
            &local(),
            &mut prompt,
            &EmbeddedTemplates,
        )
        .unwrap_err();

        assert_eq!(err.code.as_str(), "validation.invalid_argument");
        assert!(!themes_dir.exists());
    }

    #[test]
    fn declined_preflight_creates_nothing() {
        let base = tempdir().unwrap();
        let themes_dir = base.path().join("themes");
        let theme_dir = themes_dir.join("sample-theme");
        std::fs::create_dir_all(&theme_dir).unwrap();

        let mut prompt = ScriptedPrompt::new(&["s"]);
        let outcome = scaffold(
            &request("sample-theme", &themes_dir.display().to_string()),
            &local(),
            &mut prompt,
            &EmbeddedTemplates,
        )
        .unwrap();

        assert!(outcome.declined);
        assert!(outcome.written.is_empty());
        assert_eq!(std::fs::read_dir(&theme_dir).unwrap().count(), 0);
    }

    #[test]
    fn fresh_scaffold_writes_full_manifest() {
        let base = tempdir().unwrap();
        let themes_dir = base.path().join("themes");

        let mut prompt = ScriptedPrompt::new(&[]);
        let outcome = scaffold(
            &request("sample-theme", &themes_dir.display().to_string()),
            &local(),
            &mut prompt,
            &EmbeddedTemplates,
        )
        .unwrap();

        assert!(!outcome.declined);
        assert_eq!(outcome.written.len(), manifest::MANIFEST.len());
        assert!(outcome.skipped.is_empty());
        assert!(prompt.questions.is_empty());
        assert!(themes_dir.join("sample-theme/style.css").exists());
        assert!(themes_dir
            .join("sample-theme/languages/sample-theme.pot")
            .exists());
    }

    #[test]
    fn trailing_slash_on_themes_dir_is_tolerated() {
        let base = tempdir().unwrap();
        let themes_dir = format!("{}/themes/", base.path().display());

        let mut prompt = ScriptedPrompt::new(&[]);
        let outcome = scaffold(
            &request("sample-theme", &themes_dir),
            &local(),
            &mut prompt,
            &EmbeddedTemplates,
        )
        .unwrap();

        assert!(!outcome.theme_dir.contains("//"));
        assert_eq!(outcome.written.len(), manifest::MANIFEST.len());
    }
}
