//! Embedded theme templates.
//!
//! Every asset the scaffolder can materialize is compiled into the binary
//! from the `templates/` directory, so a themeboy install never depends
//! on a template search path at runtime.

use crate::error::Error;
use crate::Result;

/// Source of template content by logical name.
///
/// A name that cannot be located must fail loudly; the scaffolder aborts
/// the whole command rather than emitting an incomplete theme.
pub trait TemplateSource {
    fn content(&self, name: &str) -> Result<&str>;
}

/// Templates embedded at compile time.
pub struct EmbeddedTemplates;

static TEMPLATES: &[(&str, &str)] = &[
    (".editorconfig", include_str!("../../templates/.editorconfig")),
    (".eslintrc", include_str!("../../templates/.eslintrc")),
    (
        ".stylelintrc.json",
        include_str!("../../templates/.stylelintrc.json"),
    ),
    ("404.php", include_str!("../../templates/404.php")),
    ("LICENSE", include_str!("../../templates/LICENSE")),
    ("README.md", include_str!("../../templates/README.md")),
    ("archive.php", include_str!("../../templates/archive.php")),
    ("bin/bundle.js", include_str!("../../templates/bin/bundle.js")),
    ("comments.php", include_str!("../../templates/comments.php")),
    (
        "composer.json",
        include_str!("../../templates/composer.json"),
    ),
    ("footer.php", include_str!("../../templates/footer.php")),
    (
        "functions.php",
        include_str!("../../templates/functions.php"),
    ),
    ("header.php", include_str!("../../templates/header.php")),
    (
        "inc/custom-header.php",
        include_str!("../../templates/inc/custom-header.php"),
    ),
    (
        "inc/customizer.php",
        include_str!("../../templates/inc/customizer.php"),
    ),
    (
        "inc/jetpack.php",
        include_str!("../../templates/inc/jetpack.php"),
    ),
    (
        "inc/template-functions.php",
        include_str!("../../templates/inc/template-functions.php"),
    ),
    (
        "inc/template-tags.php",
        include_str!("../../templates/inc/template-tags.php"),
    ),
    ("index.php", include_str!("../../templates/index.php")),
    (
        "js/customizer.js",
        include_str!("../../templates/js/customizer.js"),
    ),
    (
        "js/navigation.js",
        include_str!("../../templates/js/navigation.js"),
    ),
    (
        "js/skip-link-focus-fix.js",
        include_str!("../../templates/js/skip-link-focus-fix.js"),
    ),
    (
        "languages/readme.txt",
        include_str!("../../templates/languages/readme.txt"),
    ),
    (
        "languages/textdomain.pot",
        include_str!("../../templates/languages/textdomain.pot"),
    ),
    (
        "package.json",
        include_str!("../../templates/package.json"),
    ),
    ("page.php", include_str!("../../templates/page.php")),
    (
        "phpcs.xml.dist",
        include_str!("../../templates/phpcs.xml.dist"),
    ),
    ("readme.txt", include_str!("../../templates/readme.txt")),
    ("search.php", include_str!("../../templates/search.php")),
    ("sidebar.php", include_str!("../../templates/sidebar.php")),
    ("single.php", include_str!("../../templates/single.php")),
    (
        "style-rtl.css",
        include_str!("../../templates/style-rtl.css"),
    ),
    ("style.css", include_str!("../../templates/style.css")),
    (
        "template-parts/content-none.php",
        include_str!("../../templates/template-parts/content-none.php"),
    ),
    (
        "template-parts/content-page.php",
        include_str!("../../templates/template-parts/content-page.php"),
    ),
    (
        "template-parts/content-search.php",
        include_str!("../../templates/template-parts/content-search.php"),
    ),
    (
        "template-parts/content.php",
        include_str!("../../templates/template-parts/content.php"),
    ),
];

impl TemplateSource for EmbeddedTemplates {
    fn content(&self, name: &str) -> Result<&str> {
        TEMPLATES
            .iter()
            .find(|(candidate, _)| *candidate == name)
            .map(|(_, content)| *content)
            .ok_or_else(|| Error::template_not_found(name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_template_resolves() {
        let content = EmbeddedTemplates.content("style.css").unwrap();
        assert!(content.contains("{{theme_name}}"));
    }

    #[test]
    fn unknown_template_fails_loudly() {
        let err = EmbeddedTemplates.content("no-such-file").unwrap_err();
        assert_eq!(err.code.as_str(), "template.not_found");
        assert!(err.message.contains("no-such-file"));
    }

    #[test]
    fn template_names_are_unique() {
        for (i, (name, _)) in TEMPLATES.iter().enumerate() {
            assert!(
                !TEMPLATES[i + 1..].iter().any(|(other, _)| other == name),
                "duplicate template name: {}",
                name
            );
        }
    }
}
