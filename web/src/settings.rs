use clap::Parser;
use core::time::Duration;
use memoria_core::{Alphabet, GameConfig};

use crate::theme::Theme;

/// Runtime options, read from the page's URL fragment, e.g. `#--pairs=6&--delay-ms=750&-vv`.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub(crate) struct Settings {
    /// What log level to use
    #[command(flatten)]
    pub verbose: clap_verbosity_flag::Verbosity,

    /// Force the seed of the first round instead of random
    #[arg(short, long)]
    pub seed: Option<u64>,

    /// Number of pairs to deal
    #[arg(short, long, default_value_t = 8, value_parser = clap::value_parser!(u8).range(1..=128))]
    pub pairs: u8,

    /// How long a mismatched pair stays face up, in milliseconds
    #[arg(short, long, default_value_t = 1000)]
    pub delay_ms: u64,

    /// Color scheme, follows the system preference when unset
    #[arg(short, long, value_enum)]
    pub theme: Option<Theme>,
}

impl Settings {
    const BIN_NAME: &'static str = "memoria";

    pub(crate) fn from_fragment(fragment: &str) -> Result<Self, clap::Error> {
        let args = fragment.split(['#', '&']).filter(|arg| !arg.is_empty());
        Self::try_parse_from(core::iter::once(Self::BIN_NAME).chain(args))
    }

    pub(crate) fn game_config(&self) -> GameConfig {
        GameConfig::new(
            Alphabet::default().truncated(self.pairs),
            Duration::from_millis(self.delay_ms),
        )
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self::parse_from([Self::BIN_NAME])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_fragment_uses_defaults() {
        for fragment in ["", "#", "#&"] {
            let settings = Settings::from_fragment(fragment).unwrap();

            assert_eq!(settings.seed, None);
            assert_eq!(settings.theme, None);
            assert_eq!(settings.verbose.log_level(), Some(log::Level::Error));
            assert_eq!(settings.game_config(), GameConfig::default());
        }
    }

    #[test]
    fn fragment_args_are_parsed() {
        let settings =
            Settings::from_fragment("#--pairs=6&--delay-ms=750&--seed=42&--theme=dark&-vv")
                .unwrap();

        assert_eq!(settings.seed, Some(42));
        assert_eq!(settings.theme, Some(Theme::Dark));
        assert_eq!(settings.verbose.log_level(), Some(log::Level::Info));

        let config = settings.game_config();
        assert_eq!(config.pair_count(), 6);
        assert_eq!(config.mismatch_delay, Duration::from_millis(750));
    }

    #[test]
    fn pairs_are_capped_by_default_alphabet() {
        let settings = Settings::from_fragment("#--pairs=20").unwrap();

        assert_eq!(settings.game_config().pair_count(), 8);
    }

    #[test]
    fn invalid_fragment_is_an_error() {
        assert!(Settings::from_fragment("#--pairs=0").is_err());
        assert!(Settings::from_fragment("#--seed=abc").is_err());
        assert!(Settings::from_fragment("#--bogus").is_err());
    }
}
