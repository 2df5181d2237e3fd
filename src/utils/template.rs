//! String template rendering utilities.

use std::collections::BTreeMap;

pub struct TemplateVars;

impl TemplateVars {
    pub const THEME_SLUG: &'static str = "theme_slug";
    pub const THEME_NAME: &'static str = "theme_name";
    pub const THEME_DESCRIPTION: &'static str = "theme_description";
    pub const AUTHOR: &'static str = "author";
    pub const AUTHOR_URI: &'static str = "author_uri";
    pub const TEXTDOMAIN: &'static str = "textdomain";
    pub const PACKAGE: &'static str = "package";
    pub const PREFIX: &'static str = "prefix";
    pub const SASS: &'static str = "sass";
    pub const WOOCOMMERCE: &'static str = "woocommerce";
}

pub fn render(template: &str, variables: &[(&str, &str)]) -> String {
    let mut result = template.to_string();

    for (key, value) in variables {
        let placeholder = format!("{{{{{}}}}}", key);
        result = result.replace(&placeholder, value);
    }

    result
}

pub fn render_map(template: &str, variables: &BTreeMap<String, String>) -> String {
    let mut result = render_sections(template, variables);

    for (key, value) in variables {
        let placeholder = format!("{{{{{}}}}}", key);
        result = result.replace(&placeholder, value);
    }

    result
}

pub fn is_present(template: &str, key: &str) -> bool {
    let placeholder = format!("{{{{{}}}}}", key);
    template.contains(&placeholder)
}

/// Resolve `{{#key}}...{{/key}}` blocks against variable presence.
///
/// A block whose key is in the map keeps its body (markers stripped); a
/// block whose key is absent is removed entirely. Absence is the single
/// source of truth for "feature off", so there is no falsy-value check.
fn render_sections(template: &str, variables: &BTreeMap<String, String>) -> String {
    let mut result = template.to_string();

    loop {
        let Some(open_start) = result.find("{{#") else {
            break;
        };
        let Some(open_len) = result[open_start..].find("}}") else {
            break;
        };
        let open_end = open_start + open_len + 2;
        let key = result[open_start + 3..open_end - 2].to_string();

        let close_marker = format!("{{{{/{}}}}}", key);
        let Some(close_offset) = result[open_end..].find(&close_marker) else {
            break;
        };
        let close_start = open_end + close_offset;
        let close_end = close_start + close_marker.len();

        if variables.contains_key(&key) {
            let body = result[open_end..close_start].to_string();
            result.replace_range(open_start..close_end, &body);
        } else {
            result.replace_range(open_start..close_end, "");
        }
    }

    result
}
