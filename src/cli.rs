//! Command-line argument parsing for askdb.

use std::path::PathBuf;

use clap::Parser;

use crate::config::Config;

/// Ask a small student database questions in plain English.
#[derive(Parser, Debug)]
#[command(name = "askdb")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Address to bind the web server to (e.g. 127.0.0.1:8080)
    #[arg(short, long, value_name = "ADDR")]
    pub bind: Option<String>,

    /// SQLite database file path
    #[arg(short, long, value_name = "PATH")]
    pub database: Option<PathBuf>,

    /// Person-name lexicon file
    #[arg(long, value_name = "PATH")]
    pub lexicon: Option<PathBuf>,

    /// URL to download the lexicon from when no file is given
    #[arg(long, value_name = "URL")]
    pub lexicon_url: Option<String>,

    /// Config file path
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,
}

impl Cli {
    /// Parses command-line arguments.
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Returns the config file path to use.
    pub fn config_path(&self) -> PathBuf {
        self.config.clone().unwrap_or_else(Config::default_path)
    }

    /// Applies CLI overrides on top of a loaded config.
    pub fn apply_to(&self, config: &mut Config) {
        if let Some(bind) = &self.bind {
            config.server.bind = bind.clone();
        }
        if let Some(database) = &self.database {
            config.database.path = Some(database.clone());
        }
        if let Some(lexicon) = &self.lexicon {
            config.model.path = Some(lexicon.clone());
        }
        if let Some(url) = &self.lexicon_url {
            config.model.url = Some(url.clone());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse_args(args: &[&str]) -> Cli {
        Cli::parse_from(args)
    }

    #[test]
    fn test_no_args() {
        let cli = parse_args(&["askdb"]);
        assert!(cli.bind.is_none());
        assert!(cli.database.is_none());
        assert!(cli.lexicon.is_none());
    }

    #[test]
    fn test_parse_bind_and_database() {
        let cli = parse_args(&["askdb", "--bind", "0.0.0.0:9000", "-d", "/tmp/s.db"]);
        assert_eq!(cli.bind.as_deref(), Some("0.0.0.0:9000"));
        assert_eq!(cli.database, Some(PathBuf::from("/tmp/s.db")));
    }

    #[test]
    fn test_parse_lexicon_options() {
        let cli = parse_args(&[
            "askdb",
            "--lexicon",
            "names.txt",
            "--lexicon-url",
            "https://example.com/names.txt",
        ]);
        assert_eq!(cli.lexicon, Some(PathBuf::from("names.txt")));
        assert_eq!(
            cli.lexicon_url.as_deref(),
            Some("https://example.com/names.txt")
        );
    }

    #[test]
    fn test_cli_overrides_config() {
        let cli = parse_args(&["askdb", "--bind", "0.0.0.0:9000"]);
        let mut config = Config::default();
        cli.apply_to(&mut config);

        assert_eq!(config.server.bind, "0.0.0.0:9000");
        // Untouched fields keep their defaults.
        assert!(config.database.path.is_none());
    }

    #[test]
    fn test_config_path_default() {
        let cli = parse_args(&["askdb"]);
        assert!(cli.config_path().ends_with("config.toml"));
    }

    #[test]
    fn test_config_path_override() {
        let cli = parse_args(&["askdb", "--config", "/etc/askdb.toml"]);
        assert_eq!(cli.config_path(), PathBuf::from("/etc/askdb.toml"));
    }
}
