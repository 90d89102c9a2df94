use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// A line of player input that is neither a command nor a move.
#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum InputError {
    #[error("no input given")]
    Empty,
    #[error("enter exactly one character")]
    NotSingleCharacter,
    #[error("'{0}' is not a letter")]
    NotAlphabetic(char),
}

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("Round is over, no new guesses are accepted")]
    RoundOver,
}

/// The word list could not be used. Recovered by the fallback list.
#[derive(Error, Debug)]
pub enum WordSourceError {
    #[error("{}: {}", path.display(), source)]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("{}: no words found", path.display())]
    Empty { path: PathBuf },
}
