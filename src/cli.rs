use std::io::stdin;
use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use rand::{rngs::StdRng, SeedableRng};
use tracing::info;

use crate::core::engine::Engine;
use crate::core::terminal::TerminalContext;
use crate::games::hangman::words::DEFAULT_WORDS_FILE;
use crate::games::hangman::{HangmanGame, HangmanRenderer, WordSource};

#[derive(Parser, Debug)]
#[command(name = "hangterm")]
#[command(about = "Guess the hidden word one letter at a time before the hangman is complete")]
#[command(version)]
pub struct Cli {
    /// Word list, one word per line
    #[arg(short, long, default_value = DEFAULT_WORDS_FILE)]
    pub words: PathBuf,

    /// Seed for the word picker, for repeatable sessions
    #[arg(short, long)]
    pub seed: Option<u64>,
}

impl Cli {
    pub fn run(self) -> Result<()> {
        let rng = match self.seed {
            Some(seed) => {
                info!(seed, "seeding word picker");
                StdRng::seed_from_u64(seed)
            }
            None => StdRng::from_os_rng(),
        };

        let words = WordSource::load(&self.words);
        let game = HangmanGame::new(words, rng);
        let mut engine = Engine::new(game, HangmanRenderer, TerminalContext::stdout());
        engine.run(stdin().lock())?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_fruits_file() {
        let cli = Cli::try_parse_from(["hangterm"]).unwrap();
        assert_eq!(cli.words, PathBuf::from("fruits.txt"));
        assert_eq!(cli.seed, None);
    }

    #[test]
    fn accepts_word_list_and_seed() {
        let cli = Cli::try_parse_from(["hangterm", "--words", "veg.txt", "-s", "9"]).unwrap();
        assert_eq!(cli.words, PathBuf::from("veg.txt"));
        assert_eq!(cli.seed, Some(9));
    }
}
