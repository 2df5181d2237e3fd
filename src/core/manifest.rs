//! The scaffold manifest.
//!
//! A fixed, ordered list of target paths and their content sources. The
//! order is a structural guarantee: generation, prompting and reporting
//! all walk the same sequence on every run.

use serde::Serialize;

use crate::theme_data::ThemeData;
use crate::utils::template::{render, TemplateVars};

/// How a manifest entry's content is produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum ContentSource {
    /// Template copied verbatim.
    Raw(&'static str),
    /// Template rendered against the theme data.
    Templated(&'static str),
}

impl ContentSource {
    pub fn template(&self) -> &'static str {
        match self {
            ContentSource::Raw(name) | ContentSource::Templated(name) => name,
        }
    }
}

/// One manifest entry before slug-specific resolution.
///
/// `target` may embed `{{textdomain}}`, rendered when the manifest is
/// resolved for a concrete theme.
#[derive(Debug, Clone, Copy)]
pub struct ManifestSpec {
    pub target: &'static str,
    pub source: ContentSource,
}

/// A manifest entry with its final relative target path.
#[derive(Debug, Clone)]
pub struct ManifestEntry {
    pub target: String,
    pub source: ContentSource,
}

const fn raw(target: &'static str, template: &'static str) -> ManifestSpec {
    ManifestSpec {
        target,
        source: ContentSource::Raw(template),
    }
}

const fn templated(target: &'static str, template: &'static str) -> ManifestSpec {
    ManifestSpec {
        target,
        source: ContentSource::Templated(template),
    }
}

pub static MANIFEST: &[ManifestSpec] = &[
    raw(".editorconfig", ".editorconfig"),
    raw(".eslintrc", ".eslintrc"),
    raw(".stylelintrc.json", ".stylelintrc.json"),
    templated("404.php", "404.php"),
    raw("LICENSE", "LICENSE"),
    raw("README.md", "README.md"),
    templated("archive.php", "archive.php"),
    raw("bin/bundle.js", "bin/bundle.js"),
    templated("comments.php", "comments.php"),
    raw("composer.json", "composer.json"),
    templated("footer.php", "footer.php"),
    templated("functions.php", "functions.php"),
    templated("header.php", "header.php"),
    templated("inc/custom-header.php", "inc/custom-header.php"),
    templated("inc/customizer.php", "inc/customizer.php"),
    templated("inc/jetpack.php", "inc/jetpack.php"),
    templated("inc/template-functions.php", "inc/template-functions.php"),
    templated("inc/template-tags.php", "inc/template-tags.php"),
    templated("index.php", "index.php"),
    raw("js/customizer.js", "js/customizer.js"),
    raw("js/navigation.js", "js/navigation.js"),
    raw("js/skip-link-focus-fix.js", "js/skip-link-focus-fix.js"),
    raw("languages/readme.txt", "languages/readme.txt"),
    raw("languages/{{textdomain}}.pot", "languages/textdomain.pot"),
    raw("package.json", "package.json"),
    templated("page.php", "page.php"),
    raw("phpcs.xml.dist", "phpcs.xml.dist"),
    templated("readme.txt", "readme.txt"),
    templated("search.php", "search.php"),
    templated("sidebar.php", "sidebar.php"),
    templated("single.php", "single.php"),
    templated("style-rtl.css", "style-rtl.css"),
    templated("style.css", "style.css"),
    templated("template-parts/content-none.php", "template-parts/content-none.php"),
    templated("template-parts/content-page.php", "template-parts/content-page.php"),
    templated(
        "template-parts/content-search.php",
        "template-parts/content-search.php",
    ),
    templated("template-parts/content.php", "template-parts/content.php"),
];

/// Resolve the manifest for a concrete theme.
pub fn resolve(data: &ThemeData) -> Vec<ManifestEntry> {
    MANIFEST
        .iter()
        .map(|spec| ManifestEntry {
            target: render(
                spec.target,
                &[(TemplateVars::TEXTDOMAIN, data.textdomain())],
            ),
            source: spec.source,
        })
        .collect()
}
