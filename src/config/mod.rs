pub mod toml_config;

use crate::core::ConfigProvider;
use crate::domain::model::{OutputFormat, SearchStrategy};
use crate::utils::error::Result;
use crate::utils::validation::{self, Validate};
use serde::{Deserialize, Serialize};

/// Fragments of the reference puzzle.
pub const DEFAULT_FRAGMENTS: [&str; 9] = ["MU", "DI", "TA", "NT", "OV", "DU", "CK", "ER", "SC"];
pub const DEFAULT_ANCHOR: char = 'D';
pub const DEFAULT_MIN_LENGTH: usize = 2;
pub const DEFAULT_MAX_LENGTH: usize = 5;
pub const DEFAULT_TARGET_LENGTH: usize = 8;

/// Plain search settings, used by the library API and tests.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchConfig {
    pub fragments: Vec<String>,
    pub anchor: char,
    pub min_length: usize,
    pub max_length: usize,
    pub target_length: usize,
    pub strategy: SearchStrategy,
    pub output_format: OutputFormat,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            fragments: DEFAULT_FRAGMENTS.iter().map(|f| f.to_string()).collect(),
            anchor: DEFAULT_ANCHOR,
            min_length: DEFAULT_MIN_LENGTH,
            max_length: DEFAULT_MAX_LENGTH,
            target_length: DEFAULT_TARGET_LENGTH,
            strategy: SearchStrategy::default(),
            output_format: OutputFormat::default(),
        }
    }
}

impl ConfigProvider for SearchConfig {
    fn fragments(&self) -> &[String] {
        &self.fragments
    }

    fn anchor(&self) -> char {
        self.anchor
    }

    fn min_length(&self) -> usize {
        self.min_length
    }

    fn max_length(&self) -> usize {
        self.max_length
    }

    fn target_length(&self) -> usize {
        self.target_length
    }

    fn strategy(&self) -> SearchStrategy {
        self.strategy
    }

    fn output_format(&self) -> OutputFormat {
        self.output_format
    }
}

impl Validate for SearchConfig {
    fn validate(&self) -> Result<()> {
        validate_search_settings(self, "")
    }
}

/// Startup checks shared by every config source. `prefix` namespaces the
/// field names in error messages (e.g. `"search."` for TOML).
pub fn validate_search_settings<C: ConfigProvider + ?Sized>(config: &C, prefix: &str) -> Result<()> {
    let field = |name: &str| format!("{}{}", prefix, name);

    validation::validate_non_empty_list(&field("fragments"), config.fragments())?;
    validation::validate_positive_number(&field("min_length"), config.min_length(), 1)?;
    validation::validate_ordered(
        &field("min_length"),
        config.min_length(),
        &field("max_length"),
        config.max_length(),
    )?;
    validation::validate_positive_number(&field("target_length"), config.target_length(), 1)?;

    if config.max_length() > config.fragments().len() {
        tracing::warn!(
            "{} is {} but only {} fragments are configured",
            field("max_length"),
            config.max_length(),
            config.fragments().len()
        );
    }

    Ok(())
}

#[cfg(feature = "cli")]
pub use cli::CliConfig;

#[cfg(feature = "cli")]
mod cli {
    use super::*;
    use clap::Parser;

    #[derive(Debug, Clone, Parser)]
    #[command(name = "fragment-combiner")]
    #[command(about = "Lists every fragment concatenation of the target length that starts with the anchor")]
    pub struct CliConfig {
        /// Comma separated fragments
        #[arg(long, value_delimiter = ',', default_values_t = DEFAULT_FRAGMENTS.map(String::from))]
        pub fragments: Vec<String>,

        #[arg(long, default_value_t = DEFAULT_ANCHOR)]
        pub anchor: char,

        /// Fewest fragments per candidate
        #[arg(long, default_value_t = DEFAULT_MIN_LENGTH)]
        pub min_length: usize,

        /// Most fragments per candidate
        #[arg(long, default_value_t = DEFAULT_MAX_LENGTH)]
        pub max_length: usize,

        /// Exact character length of an accepted word
        #[arg(long, default_value_t = DEFAULT_TARGET_LENGTH)]
        pub target_length: usize,

        #[arg(long, value_enum, default_value_t = SearchStrategy::Exhaustive)]
        pub strategy: SearchStrategy,

        #[arg(long, value_enum, default_value_t = OutputFormat::Plain)]
        pub format: OutputFormat,

        #[arg(long, help = "Log process statistics for each stage")]
        pub monitor: bool,

        #[arg(long, help = "Emit logs as JSON on stderr")]
        pub log_json: bool,

        #[arg(short, long, help = "Enable verbose output")]
        pub verbose: bool,
    }

    impl ConfigProvider for CliConfig {
        fn fragments(&self) -> &[String] {
            &self.fragments
        }

        fn anchor(&self) -> char {
            self.anchor
        }

        fn min_length(&self) -> usize {
            self.min_length
        }

        fn max_length(&self) -> usize {
            self.max_length
        }

        fn target_length(&self) -> usize {
            self.target_length
        }

        fn strategy(&self) -> SearchStrategy {
            self.strategy
        }

        fn output_format(&self) -> OutputFormat {
            self.format
        }
    }

    impl Validate for CliConfig {
        fn validate(&self) -> Result<()> {
            validate_search_settings(self, "")
        }
    }

    #[cfg(test)]
    mod tests {
        use super::*;

        #[test]
        fn test_defaults_match_reference_instance() {
            let config = CliConfig::try_parse_from(["fragment-combiner"]).unwrap();
            let reference = SearchConfig::default();

            assert_eq!(config.fragments(), reference.fragments());
            assert_eq!(config.anchor(), 'D');
            assert_eq!((config.min_length, config.max_length), (2, 5));
            assert_eq!(config.target_length, 8);
            assert_eq!(config.format, OutputFormat::Plain);
            assert!(config.validate().is_ok());
        }

        #[test]
        fn test_overrides() {
            let config = CliConfig::try_parse_from([
                "fragment-combiner",
                "--fragments",
                "DI,NT,TA,OV",
                "--strategy",
                "pruned",
                "--format",
                "json",
                "--min-length",
                "4",
            ])
            .unwrap();

            assert_eq!(config.fragments, vec!["DI", "NT", "TA", "OV"]);
            assert_eq!(config.strategy, SearchStrategy::Pruned);
            assert_eq!(config.format, OutputFormat::Json);
            assert_eq!(config.min_length, 4);
        }

        #[test]
        fn test_rejects_multi_char_anchor() {
            assert!(CliConfig::try_parse_from(["fragment-combiner", "--anchor", "DU"]).is_err());
        }

        #[test]
        fn test_validation_rejects_inverted_range() {
            let config = CliConfig::try_parse_from([
                "fragment-combiner",
                "--min-length",
                "6",
                "--max-length",
                "5",
            ])
            .unwrap();
            let err = config.validate().unwrap_err();
            assert!(err.to_string().contains("min_length"));
        }
    }
}
