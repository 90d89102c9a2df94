/// Hangman game module - rules, word list and gallows art
pub mod game;
pub mod renderer;
pub mod words;

pub use game::{HangmanGame, HangmanInput, RoundOutcome, RoundState, HANGMAN_LENGTH};
pub use renderer::HangmanRenderer;
pub use words::WordSource;
