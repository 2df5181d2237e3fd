//! Template data assembly.
//!
//! Merges user-supplied options over defaults and derives the identifiers
//! shared by every generated file. Built once per scaffold invocation and
//! read-only afterwards.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::utils::template::TemplateVars;

/// User-facing scaffold options, already parsed by the CLI layer.
#[derive(Debug, Clone, Default)]
pub struct ThemeOptions {
    pub theme_name: Option<String>,
    pub author: Option<String>,
    pub author_uri: Option<String>,
    pub sassify: bool,
    pub woocommerce: bool,
    /// Unrecognized `--key value` pairs, passed through verbatim.
    pub extra: Vec<(String, String)>,
}

pub const DEFAULT_AUTHOR: &str = "Me";
pub const DEFAULT_AUTHOR_URI: &str = "https://example.com/";

/// Fully-computed template variables for one scaffold run.
#[derive(Debug, Clone, Serialize)]
#[serde(transparent)]
pub struct ThemeData {
    vars: BTreeMap<String, String>,
}

impl ThemeData {
    /// Merge defaults ← options, then derive the computed fields.
    ///
    /// Derived fields (`textdomain`, `package`, `prefix`,
    /// `theme_description`) are always recomputed from the merged
    /// `theme_name`/`author`/slug, so a same-named key in `extra` can
    /// never desynchronize the identifiers across generated files.
    pub fn build(slug: &str, options: &ThemeOptions) -> Self {
        let mut vars = BTreeMap::new();

        vars.insert(TemplateVars::THEME_SLUG.to_string(), slug.to_string());
        vars.insert(TemplateVars::THEME_NAME.to_string(), capitalize(slug));
        vars.insert(TemplateVars::AUTHOR.to_string(), DEFAULT_AUTHOR.to_string());
        vars.insert(
            TemplateVars::AUTHOR_URI.to_string(),
            DEFAULT_AUTHOR_URI.to_string(),
        );

        for (key, value) in &options.extra {
            vars.insert(key.clone(), value.clone());
        }

        if let Some(name) = &options.theme_name {
            vars.insert(TemplateVars::THEME_NAME.to_string(), name.clone());
        }
        if let Some(author) = &options.author {
            vars.insert(TemplateVars::AUTHOR.to_string(), author.clone());
        }
        if let Some(uri) = &options.author_uri {
            vars.insert(TemplateVars::AUTHOR_URI.to_string(), uri.clone());
        }

        let theme_name = vars[TemplateVars::THEME_NAME].clone();
        let author = vars[TemplateVars::AUTHOR].clone();

        vars.insert(TemplateVars::TEXTDOMAIN.to_string(), slug.to_string());
        vars.insert(
            TemplateVars::PACKAGE.to_string(),
            theme_name.replace(' ', "_"),
        );
        vars.insert(TemplateVars::PREFIX.to_string(), slug.replace('-', "_"));
        vars.insert(
            TemplateVars::THEME_DESCRIPTION.to_string(),
            format!("Custom theme: {}, developed by {}", theme_name, author),
        );

        if options.sassify {
            vars.insert(TemplateVars::SASS.to_string(), "1".to_string());
        }
        if options.woocommerce {
            vars.insert(TemplateVars::WOOCOMMERCE.to_string(), "1".to_string());
        }

        Self { vars }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.vars.get(key).map(String::as_str)
    }

    pub fn theme_name(&self) -> &str {
        self.vars[TemplateVars::THEME_NAME].as_str()
    }

    pub fn textdomain(&self) -> &str {
        self.vars[TemplateVars::TEXTDOMAIN].as_str()
    }

    pub fn vars(&self) -> &BTreeMap<String, String> {
        &self.vars
    }
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        None => String::new(),
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
    }
}
