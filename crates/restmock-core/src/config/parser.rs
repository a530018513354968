//! Config file parsing (YAML/JSON/JSONC).

use crate::config::error::ConfigError;
use serde::de::DeserializeOwned;
use std::path::Path;

/// Config file format
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigFileType {
    Yaml,
    Json,
    Jsonc,
    Unknown,
}

/// Get config file type from path extension
pub fn get_file_type(path: &str) -> ConfigFileType {
    let ext = Path::new(path)
        .extension()
        .and_then(|e| e.to_str())
        .map(|s| s.to_ascii_lowercase())
        .unwrap_or_default();

    match ext.as_str() {
        "yaml" | "yml" => ConfigFileType::Yaml,
        "json" => ConfigFileType::Json,
        "jsonc" => ConfigFileType::Jsonc,
        _ => ConfigFileType::Unknown,
    }
}

/// Remove `//` line comments and `/* */` block comments outside of string literals.
///
/// Line breaks ending a line comment are kept so error positions stay meaningful.
pub fn strip_json_comments(content: &str) -> String {
    let mut out = String::with_capacity(content.len());
    let mut chars = content.chars().peekable();
    let mut in_string = false;

    while let Some(c) = chars.next() {
        if in_string {
            out.push(c);
            match c {
                '\\' => {
                    if let Some(escaped) = chars.next() {
                        out.push(escaped);
                    }
                }
                '"' => in_string = false,
                _ => {}
            }
            continue;
        }

        match (c, chars.peek().copied()) {
            ('"', _) => {
                in_string = true;
                out.push(c);
            }
            ('/', Some('/')) => {
                while let Some(&next) = chars.peek() {
                    if next == '\n' || next == '\r' {
                        break;
                    }
                    chars.next();
                }
            }
            ('/', Some('*')) => {
                chars.next();
                let mut prev = '\0';
                for next in chars.by_ref() {
                    if prev == '*' && next == '/' {
                        break;
                    }
                    prev = next;
                }
            }
            _ => out.push(c),
        }
    }

    out
}

/// Parse config content based on the file type of `path`
pub fn parse_config<T: DeserializeOwned>(content: &str, path: &str) -> Result<T, ConfigError> {
    match get_file_type(path) {
        ConfigFileType::Yaml => serde_yaml::from_str(content).map_err(|source| ConfigError::Yaml {
            path: path.to_string(),
            source,
        }),
        ConfigFileType::Json => serde_json::from_str(content).map_err(|source| ConfigError::Json {
            path: path.to_string(),
            source,
        }),
        ConfigFileType::Jsonc => serde_json::from_str(&strip_json_comments(content)).map_err(
            |source| ConfigError::Json {
                path: path.to_string(),
                source,
            },
        ),
        ConfigFileType::Unknown => Err(ConfigError::UnknownFileType(path.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ClientConfig;
    use rstest::rstest;

    #[rstest]
    #[case("restmock.yaml", ConfigFileType::Yaml)]
    #[case("restmock.YML", ConfigFileType::Yaml)]
    #[case("restmock.json", ConfigFileType::Json)]
    #[case("restmock.Jsonc", ConfigFileType::Jsonc)]
    #[case("restmock.toml", ConfigFileType::Unknown)]
    #[case("restmock", ConfigFileType::Unknown)]
    #[case("", ConfigFileType::Unknown)]
    fn test_get_file_type(#[case] path: &str, #[case] expected: ConfigFileType) {
        assert_eq!(get_file_type(path), expected);
    }

    #[rstest]
    #[case(r#"{"a": 1} // trailing"#, r#"{"a": 1} "#)]
    #[case("{\"a\": 1} // one\n{\"b\": 2}", "{\"a\": 1} \n{\"b\": 2}")]
    #[case(r#"{/* inline */"a": 1}"#, r#"{"a": 1}"#)]
    #[case("{\"a\": /* multi\nline */ 1}", "{\"a\":  1}")]
    #[case(r#"{"url": "http://host/path"}"#, r#"{"url": "http://host/path"}"#)]
    #[case(r#"{"s": "a \"/* quoted */\" b"}"#, r#"{"s": "a \"/* quoted */\" b"}"#)]
    fn test_strip_json_comments(#[case] input: &str, #[case] expected: &str) {
        assert_eq!(strip_json_comments(input), expected);
    }

    #[rstest]
    fn test_strip_json_comments_unterminated_block() {
        assert_eq!(strip_json_comments("{} /* never closed"), "{} ");
    }

    #[rstest]
    fn test_parse_config_yaml() {
        let config: ClientConfig =
            parse_config("base_url: http://mock:8080\npublic_url: /web", "c.yaml").unwrap();
        assert_eq!(config.base_url, "http://mock:8080");
        assert_eq!(config.public_url, "/web");
        assert_eq!(config.timeout_secs, 30);
    }

    #[rstest]
    fn test_parse_config_json() {
        let config: ClientConfig = parse_config(r#"{"timeout_secs": 3}"#, "c.json").unwrap();
        assert_eq!(config.timeout_secs, 3);
        assert_eq!(config.base_url, ClientConfig::default().base_url);
    }

    #[rstest]
    fn test_parse_config_jsonc() {
        let content = r#"{
            // local server
            "base_url": "http://127.0.0.1:8080" /* dev */
        }"#;
        let config: ClientConfig = parse_config(content, "c.jsonc").unwrap();
        assert_eq!(config.base_url, "http://127.0.0.1:8080");
    }

    #[rstest]
    fn test_parse_config_invalid() {
        let result: Result<ClientConfig, _> = parse_config("base_url: [", "c.yaml");
        assert!(matches!(result, Err(ConfigError::Yaml { .. })));

        let result: Result<ClientConfig, _> = parse_config("{", "c.json");
        assert!(matches!(result, Err(ConfigError::Json { .. })));
    }

    #[rstest]
    #[case("c.toml")]
    #[case("")]
    fn test_parse_config_unknown_file_type(#[case] path: &str) {
        let result: Result<ClientConfig, _> = parse_config("{}", path);
        assert!(matches!(result, Err(ConfigError::UnknownFileType(_))));
    }
}
