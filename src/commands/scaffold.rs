use clap::Args;
use serde::Serialize;

use themeboy::local_files::local;
use themeboy::log_status;
use themeboy::scaffold::{self, ScaffoldRequest};
use themeboy::templates::EmbeddedTemplates;
use themeboy::theme_data::ThemeOptions;
use themeboy::{paths, validation};

use super::{parse_kv_flags, CmdResult};
use crate::tty::TtyPrompt;

#[derive(Args)]
pub struct ScaffoldArgs {
    /// The slug for the new theme, used for prefixing functions
    pub slug: String,

    /// What to put in the 'Theme Name:' header in style.css
    #[arg(long, value_name = "TITLE")]
    pub theme_name: Option<String>,

    /// What to put in the 'Author:' header in style.css
    #[arg(long, value_name = "FULL_NAME")]
    pub author: Option<String>,

    /// What to put in the 'Author URI:' header in style.css
    #[arg(long, value_name = "URI")]
    pub author_uri: Option<String>,

    /// Include stylesheets as SASS
    #[arg(long)]
    pub sassify: bool,

    /// Include WooCommerce boilerplate files
    #[arg(long)]
    pub woocommerce: bool,

    /// Print the wp-cli command to activate the theme afterwards
    #[arg(long, conflicts_with = "enable_network")]
    pub activate: bool,

    /// Print the wp-cli command to enable the theme network-wide afterwards
    #[arg(long)]
    pub enable_network: bool,

    /// Overwrite files that already exist
    #[arg(long)]
    pub force: bool,

    /// Themes directory to scaffold into
    #[arg(long, value_name = "DIR")]
    pub themes_dir: Option<String>,

    /// Dynamic --key value template overrides. Add a '--' separator
    /// first: `themeboy scaffold my-theme -- --license GPL-2.0`
    #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
    pub extra: Vec<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScaffoldOutput {
    pub command: &'static str,
    pub theme_name: String,
    pub theme_dir: String,
    pub created: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub skipped: Vec<String>,
    pub files_created: usize,
    pub message: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub next_steps: Vec<String>,
}

pub fn run(args: ScaffoldArgs) -> CmdResult<ScaffoldOutput> {
    if let Some(name) = &args.theme_name {
        validation::require_non_empty(name, "theme_name", "Theme name cannot be empty")?;
    }
    if let Some(author) = &args.author {
        validation::require_non_empty(author, "author", "Author cannot be empty")?;
    }

    let request = ScaffoldRequest {
        slug: args.slug.clone(),
        options: ThemeOptions {
            theme_name: args.theme_name.clone(),
            author: args.author.clone(),
            author_uri: args.author_uri.clone(),
            sassify: args.sassify,
            woocommerce: args.woocommerce,
            extra: parse_kv_flags(&args.extra)?,
        },
        force: args.force,
        themes_dir: paths::themes_dir(args.themes_dir.as_deref()),
    };

    log_status!("scaffold", "Scaffolding theme '{}'", request.slug);

    let mut prompt = TtyPrompt;
    let outcome = scaffold::scaffold(&request, &local(), &mut prompt, &EmbeddedTemplates)?;

    if outcome.declined {
        return Ok((
            ScaffoldOutput {
                command: "scaffold",
                theme_name: outcome.theme_name,
                theme_dir: outcome.theme_dir,
                created: Vec::new(),
                skipped: Vec::new(),
                files_created: 0,
                message: "No files created".to_string(),
                next_steps: Vec::new(),
            },
            0,
        ));
    }

    let mut next_steps = Vec::new();
    if args.activate {
        next_steps.push(format!("Run 'wp theme activate {}'", request.slug));
    } else if args.enable_network {
        next_steps.push(format!("Run 'wp theme enable {} --network'", request.slug));
    }

    let message = format!("Created theme '{}'.", outcome.theme_name);
    let files_created = outcome.written.len();

    Ok((
        ScaffoldOutput {
            command: "scaffold",
            theme_name: outcome.theme_name,
            theme_dir: outcome.theme_dir,
            created: outcome.written,
            skipped: outcome.skipped,
            files_created,
            message,
            next_steps,
        },
        0,
    ))
}
