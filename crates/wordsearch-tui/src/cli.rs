use crate::render::grid_frame_size;
use anyhow::{bail, Context, Result};
use clap::Parser;
use std::path::PathBuf;
use wordsearch_core::{check_config, Alphabet, CellSize, Difficulty, GeneratorConfig, WordBank};

/// Find the hidden words by dragging across them with the mouse
#[derive(Debug, Parser)]
#[command(name = "wordsearch", version, about)]
pub struct Cli {
    /// Word list tier: easy, medium or hard
    #[arg(short, long, default_value = "medium")]
    pub difficulty: Difficulty,

    /// Cells per side of the grid
    #[arg(short, long, default_value_t = 12)]
    pub size: usize,

    /// Terminal columns per grid cell
    #[arg(long, default_value_t = 3)]
    pub cell_width: u16,

    /// Terminal rows per grid cell
    #[arg(long, default_value_t = 1)]
    pub cell_height: u16,

    /// Seed for reproducible puzzles
    #[arg(long)]
    pub seed: Option<u64>,

    /// Filler letters: "full", "legacy" or an explicit list such as "AEIOU"
    #[arg(long, default_value = "full")]
    pub filler: Alphabet,

    /// Start positions tried per word before giving up
    #[arg(long, default_value_t = 1000)]
    pub max_attempts: usize,

    /// JSON word bank to use instead of the built-in one
    #[arg(long)]
    pub word_bank: Option<PathBuf>,

    /// Directory for log files
    #[arg(long)]
    pub log_dir: Option<PathBuf>,
}

/// Everything the app needs to start and restart games
#[derive(Debug, Clone)]
pub struct Settings {
    pub difficulty: Difficulty,
    pub bank: WordBank,
    pub config: GeneratorConfig,
    pub cell_width: u16,
    pub cell_height: u16,
}

impl Cli {
    /// Validate arguments and load the word bank
    pub fn into_settings(self) -> Result<Settings> {
        let bank = match &self.word_bank {
            Some(path) => WordBank::from_path(path)
                .with_context(|| format!("loading word bank {}", path.display()))?,
            None => WordBank::builtin().context("loading built-in word bank")?,
        };

        let config = GeneratorConfig {
            dimension: self.size,
            filler: self.filler,
            max_attempts: self.max_attempts,
            seed: self.seed,
        };
        check_config(&config).context("invalid grid settings")?;
        CellSize::new(self.cell_width.into(), self.cell_height.into())
            .context("invalid cell size")?;
        if grid_frame_size(self.size, self.cell_width, self.cell_height).is_none() {
            bail!(
                "a {0}x{0} grid with {1}x{2} cells does not fit on a terminal",
                self.size,
                self.cell_width,
                self.cell_height
            );
        }

        Ok(Settings {
            difficulty: self.difficulty,
            bank,
            config,
            cell_width: self.cell_width,
            cell_height: self.cell_height,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cli = Cli::try_parse_from(["wordsearch"]).unwrap();
        assert_eq!(cli.difficulty, Difficulty::Medium);
        assert_eq!(cli.size, 12);
        assert_eq!(cli.cell_width, 3);
        assert_eq!(cli.cell_height, 1);
        assert_eq!(cli.filler, Alphabet::full());
        assert!(cli.seed.is_none());
    }

    #[test]
    fn test_parse_options() {
        let cli = Cli::try_parse_from([
            "wordsearch",
            "--difficulty",
            "hard",
            "--size",
            "15",
            "--seed",
            "42",
            "--filler",
            "legacy",
        ])
        .unwrap();
        assert_eq!(cli.difficulty, Difficulty::Hard);
        assert_eq!(cli.size, 15);
        assert_eq!(cli.seed, Some(42));
        assert_eq!(cli.filler, Alphabet::legacy());

        let settings = cli.into_settings().unwrap();
        assert_eq!(settings.config.dimension, 15);
        assert_eq!(settings.config.seed, Some(42));
    }

    #[test]
    fn test_rejects_bad_values() {
        assert!(Cli::try_parse_from(["wordsearch", "--difficulty", "extreme"]).is_err());
        assert!(Cli::try_parse_from(["wordsearch", "--filler", "A1"]).is_err());

        let cli = Cli::try_parse_from(["wordsearch", "--size", "0"]).unwrap();
        assert!(cli.into_settings().is_err());

        let cli = Cli::try_parse_from(["wordsearch", "--cell-width", "0"]).unwrap();
        assert!(cli.into_settings().is_err());
    }

    #[test]
    fn test_rejects_oversized_layout() {
        let cli = Cli::try_parse_from(["wordsearch", "--cell-width", "40000", "--seed", "1"])
            .unwrap();
        assert!(cli.into_settings().is_err());

        let cli = Cli::try_parse_from(["wordsearch", "--cell-height", "10000"]).unwrap();
        assert!(cli.into_settings().is_err());

        let cli = Cli::try_parse_from(["wordsearch", "--size", "100000"]).unwrap();
        assert!(cli.into_settings().is_err());

        let cli = Cli::try_parse_from(["wordsearch", "--size", "40", "--cell-width", "5"]).unwrap();
        assert!(cli.into_settings().is_ok());
    }
}
