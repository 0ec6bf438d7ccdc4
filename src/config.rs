use std::path::{Path, PathBuf};

use path_clean::PathClean;
use serde::{Deserialize, Serialize};
use tokio::fs::read_to_string;

use crate::{classify::SourceExtension, cli::Cli, error::Error};

pub const DEFAULT_IGNORES: [&str; 4] = ["node_modules", "dist", "build", "out"];

/// Settings for one run, built once from the command line and an optional
/// config file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub root: PathBuf,
    pub extensions: Vec<SourceExtension>,
    pub ignore_patterns: Vec<String>,
    pub keep_originals: bool,
    pub strict: bool,
    pub max_concurrency: Option<usize>,
}

/// Contents of a JSON config file. Every key is optional.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct FileConfig {
    #[serde(default)]
    pub ignore: Vec<String>,
    #[serde(default)]
    pub keep_originals: bool,
    #[serde(default)]
    pub strict: bool,
    pub max_concurrency: Option<usize>,
}

pub async fn load_config_from_file(path: &Path) -> Result<FileConfig, Error> {
    let content = read_to_string(path).await?;
    Ok(serde_json::from_str(&content)?)
}

/// Defaults first, then each extra token in order, without duplicates or
/// empty tokens.
pub fn merge_ignore_patterns<'a>(extra: impl IntoIterator<Item = &'a str>) -> Vec<String> {
    let mut patterns: Vec<String> = DEFAULT_IGNORES.iter().map(|s| s.to_string()).collect();
    for token in extra {
        if token.is_empty() || patterns.iter().any(|p| p == token) {
            continue;
        }
        patterns.push(token.to_string());
    }
    patterns
}

impl Config {
    pub fn new(cli: &Cli, file: FileConfig) -> Result<Self, Error> {
        let root = cli
            .directory
            .as_deref()
            .filter(|dir| !dir.is_empty())
            .ok_or(Error::Usage)?;

        let max_concurrency = cli.max_concurrency.or(file.max_concurrency);
        if max_concurrency == Some(0) {
            return Err(Error::Config("maxConcurrency must be at least 1".to_string()));
        }

        let ignore_patterns = merge_ignore_patterns(
            cli.ignore
                .iter()
                .chain(file.ignore.iter())
                .map(String::as_str),
        );

        Ok(Self {
            root: PathBuf::from(root).clean(),
            extensions: SourceExtension::ALL.to_vec(),
            ignore_patterns,
            keep_originals: cli.keep_originals || file.keep_originals,
            strict: cli.strict || file.strict,
            max_concurrency,
        })
    }

    /// Build the run configuration, reading `--config` when given.
    pub async fn load(cli: &Cli) -> Result<Self, Error> {
        let file = match &cli.config {
            Some(path) => load_config_from_file(path).await?,
            None => FileConfig::default(),
        };
        Self::new(cli, file)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cli(args: &[&str]) -> Cli {
        clap::Parser::parse_from(std::iter::once("js2ts").chain(args.iter().copied()))
    }

    #[test]
    fn defaults_come_first() {
        let config = Config::new(&cli(&["src", "vendor", "tmp"]), FileConfig::default()).unwrap();
        assert_eq!(
            config.ignore_patterns,
            vec!["node_modules", "dist", "build", "out", "vendor", "tmp"]
        );
        assert_eq!(config.extensions, SourceExtension::ALL.to_vec());
        assert!(!config.keep_originals);
        assert!(!config.strict);
        assert_eq!(config.max_concurrency, None);
    }

    #[test]
    fn duplicate_and_empty_tokens_are_dropped() {
        assert_eq!(
            merge_ignore_patterns(["dist", "", "vendor", "vendor"]),
            vec!["node_modules", "dist", "build", "out", "vendor"]
        );
    }

    #[test]
    fn missing_directory_is_usage_error() {
        let result = Config::new(&cli(&[]), FileConfig::default());
        assert!(matches!(result, Err(Error::Usage)));
    }

    #[test]
    fn empty_directory_is_usage_error() {
        let result = Config::new(&cli(&[""]), FileConfig::default());
        assert!(matches!(result, Err(Error::Usage)));
    }

    #[test]
    fn dash_prefixed_tokens_are_ignore_patterns() {
        let config = Config::new(&cli(&["src", "-legacy", "tmp"]), FileConfig::default()).unwrap();
        assert_eq!(
            config.ignore_patterns,
            vec!["node_modules", "dist", "build", "out", "-legacy", "tmp"]
        );
    }

    #[test]
    fn root_is_cleaned() {
        let config = Config::new(&cli(&["./src//app/"]), FileConfig::default()).unwrap();
        assert_eq!(config.root, PathBuf::from("src/app"));
    }

    #[test]
    fn file_values_merge_with_flags() {
        let file: FileConfig = serde_json::from_str(
            r#"{ "ignore": ["vendor", "dist"], "keepOriginals": true, "maxConcurrency": 8 }"#,
        )
        .unwrap();
        let config = Config::new(&cli(&["--strict", "src", "tmp"]), file).unwrap();
        assert_eq!(
            config.ignore_patterns,
            vec!["node_modules", "dist", "build", "out", "tmp", "vendor"]
        );
        assert!(config.keep_originals);
        assert!(config.strict);
        assert_eq!(config.max_concurrency, Some(8));
    }

    #[test]
    fn cli_concurrency_overrides_file() {
        let file = FileConfig {
            max_concurrency: Some(8),
            ..Default::default()
        };
        let config = Config::new(&cli(&["--max-concurrency", "2", "src"]), file).unwrap();
        assert_eq!(config.max_concurrency, Some(2));
    }

    #[test]
    fn zero_concurrency_is_rejected() {
        let file = FileConfig {
            max_concurrency: Some(0),
            ..Default::default()
        };
        assert!(matches!(
            Config::new(&cli(&["src"]), file),
            Err(Error::Config(_))
        ));
    }

    #[test]
    fn unknown_keys_are_rejected() {
        assert!(serde_json::from_str::<FileConfig>(r#"{ "ignores": [] }"#).is_err());
    }

    #[tokio::test]
    async fn loads_json_file() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("js2ts.json");
        std::fs::write(&path, r#"{ "ignore": ["legacy"], "strict": true }"#).unwrap();

        let file = load_config_from_file(&path).await.unwrap();
        assert_eq!(file.ignore, vec!["legacy"]);
        assert!(file.strict);
        assert!(!file.keep_originals);
    }
}
