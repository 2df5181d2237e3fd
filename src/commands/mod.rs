pub type CmdResult<T> = themeboy::Result<(T, i32)>;

/// Parse trailing `--key value` pairs into opaque template overrides.
///
/// Flag names become template keys with no case conversion; values stay
/// strings because template substitution is string-in, string-out.
pub fn parse_kv_flags(extra: &[String]) -> themeboy::Result<Vec<(String, String)>> {
    let mut pairs = Vec::new();
    let mut iter = extra.iter().peekable();

    while let Some(arg) = iter.next() {
        if let Some(key) = arg.strip_prefix("--") {
            let value = iter.next().ok_or_else(|| {
                themeboy::Error::validation_invalid_argument(
                    key,
                    format!("Missing value for flag --{}", key),
                    None,
                )
            })?;
            pairs.push((key.to_string(), value.clone()));
        }
    }

    Ok(pairs)
}

pub mod manifest;
pub mod scaffold;

/// Dispatch a command to its handler and map result to JSON.
macro_rules! dispatch {
    ($args:expr, $module:ident) => {
        crate::output::map_cmd_result_to_json($module::run($args))
    };
}

pub(crate) fn run_json(command: crate::Commands) -> (themeboy::Result<serde_json::Value>, i32) {
    crate::tty::status("themeboy is working...");

    match command {
        crate::Commands::Scaffold(args) => dispatch!(args, scaffold),
        crate::Commands::Manifest(args) => dispatch!(args, manifest),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_kv_flags_collects_pairs() {
        let extra = vec![
            "--license".to_string(),
            "GPL-2.0".to_string(),
            "--tags".to_string(),
            "blog, one-column".to_string(),
        ];
        let pairs = parse_kv_flags(&extra).unwrap();
        assert_eq!(
            pairs,
            vec![
                ("license".to_string(), "GPL-2.0".to_string()),
                ("tags".to_string(), "blog, one-column".to_string()),
            ]
        );
    }

    #[test]
    fn parse_kv_flags_rejects_missing_value() {
        let extra = vec!["--license".to_string()];
        let err = parse_kv_flags(&extra).unwrap_err();
        assert_eq!(err.code.as_str(), "validation.invalid_argument");
    }

    #[test]
    fn parse_kv_flags_ignores_bare_words() {
        let extra = vec!["stray".to_string()];
        assert!(parse_kv_flags(&extra).unwrap().is_empty());
    }
}
