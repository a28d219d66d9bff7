use std::path::PathBuf;

use crate::settings::DEFAULT_SETTINGS_FILE;

/// Command-line Hangman with save and resume
#[derive(Debug, clap::Parser)]
#[command(version, about)]
pub struct Cli {
    /// Settings file (JSON); missing file means defaults
    #[arg(short, long, default_value = DEFAULT_SETTINGS_FILE)]
    pub config: PathBuf,

    /// Fixed RNG seed, overriding settings
    #[arg(long)]
    pub seed: Option<u64>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn test_defaults() {
        let cli = Cli::try_parse_from(["hangman"]).unwrap();
        assert_eq!(cli.config, PathBuf::from(DEFAULT_SETTINGS_FILE));
        assert_eq!(cli.seed, None);
    }

    #[test]
    fn test_config_and_seed() {
        let cli = Cli::try_parse_from(["hangman", "-c", "alt.json", "--seed", "99"]).unwrap();
        assert_eq!(cli.config, PathBuf::from("alt.json"));
        assert_eq!(cli.seed, Some(99));
    }

    #[test]
    fn test_bad_seed_rejected() {
        assert!(Cli::try_parse_from(["hangman", "--seed", "soon"]).is_err());
    }
}
