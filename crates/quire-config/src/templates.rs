//! Starter configuration files for `quire init`.
//!
//! Templates are stored as valid TOML and handed out with every setting commented out, so a
//! fresh file changes nothing until the user opts in.

/// Default local configuration template (valid TOML).
const LOCAL_TEMPLATE: &str = include_str!("../templates/config.toml");

/// Global configuration template (valid TOML).
const GLOBAL_TEMPLATE: &str = include_str!("../templates/config-global.toml");

/// Returns the local configuration template as a commented-out example.
pub fn local_template() -> String {
    comment_out(LOCAL_TEMPLATE)
}

/// Returns the global configuration template as a commented-out example.
pub fn global_template() -> String {
    comment_out(GLOBAL_TEMPLATE)
}

/// Prefixes every non-empty, non-comment line with `# `.
fn comment_out(template: &str) -> String {
    template
        .lines()
        .map(|line| {
            if line.is_empty() || line.starts_with('#') {
                format!("{line}\n")
            } else {
                format!("# {line}\n")
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parse::parse_config;

    #[test]
    fn test_templates_are_valid_config() {
        let local = parse_config(LOCAL_TEMPLATE);
        assert!(local.is_ok(), "local template failed to parse: {local:?}");
        let global = parse_config(GLOBAL_TEMPLATE);
        assert!(global.is_ok(), "global template failed to parse: {global:?}");
    }

    #[test]
    fn test_commented_templates_set_nothing() {
        for template in [local_template(), global_template()] {
            let raw = parse_config(&template).unwrap();
            assert!(raw.site.is_none());
            assert!(raw.posts.is_none());
            assert!(raw.listing.is_none());
        }
    }

    #[test]
    fn test_comment_out() {
        let input = "# heading\n[site]\n\ntitle = \"x\"\n";
        assert_eq!(comment_out(input), "# heading\n# [site]\n\n# title = \"x\"\n");
    }
}
