use rand::rngs::StdRng;
use tracing::debug;

use crate::core::error::{GameError, InputError};
use crate::core::game::ConsoleGame;
use crate::games::hangman::words::WordSource;

/// Maximum attempts per round, one per row of the hangman figure.
pub const HANGMAN_LENGTH: usize = 8;

pub const BLANK: char = '_';

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundOutcome {
    Ongoing,
    Won,
    Lost,
}

/// One round of play for a single secret word.
#[derive(Debug, Clone)]
pub struct RoundState {
    word: String,
    template: Vec<char>,
    guesses: Vec<char>,
    attempts: usize,
    outcome: RoundOutcome,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HangmanInput {
    Guess(char),
}

fn same_letter(a: char, b: char) -> bool {
    a == b || a.to_lowercase().eq(b.to_lowercase())
}

impl RoundState {
    /// Spaces are shown from the start and can never be guessed.
    pub fn start(word: impl Into<String>) -> Self {
        let word = word.into();
        let template = word.chars().map(|c| if c == ' ' { ' ' } else { BLANK }).collect();

        Self {
            word,
            template,
            guesses: Vec::new(),
            attempts: 0,
            outcome: RoundOutcome::Ongoing,
        }
    }

    /// Charges one attempt for every guess, right or wrong. The attempt
    /// bound is checked before completion, so a word finished on the last
    /// allowed attempt still counts as a loss.
    pub fn apply_guess(&mut self, letter: char) -> Result<RoundOutcome, GameError> {
        if self.outcome != RoundOutcome::Ongoing {
            return Err(GameError::RoundOver);
        }

        self.attempts += 1;
        self.guesses.push(letter);

        let mut all_blanks_filled = false;
        if self.word.chars().any(|c| same_letter(c, letter)) {
            for (slot, c) in self.template.iter_mut().zip(self.word.chars()) {
                if same_letter(c, letter) {
                    *slot = c;
                }
            }
            all_blanks_filled = !self.template.contains(&BLANK);
        }

        self.outcome = if self.attempts >= HANGMAN_LENGTH {
            RoundOutcome::Lost
        } else if all_blanks_filled {
            RoundOutcome::Won
        } else {
            RoundOutcome::Ongoing
        };

        debug!(%letter, attempts = self.attempts, outcome = ?self.outcome, "guess applied");
        Ok(self.outcome)
    }

    pub fn word(&self) -> &str {
        &self.word
    }

    pub fn template(&self) -> &[char] {
        &self.template
    }

    pub fn masked_word(&self) -> String {
        self.template.iter().collect()
    }

    pub fn guesses(&self) -> &[char] {
        &self.guesses
    }

    pub fn attempts(&self) -> usize {
        self.attempts
    }

    pub fn remaining_attempts(&self) -> usize {
        HANGMAN_LENGTH.saturating_sub(self.attempts)
    }

    pub fn outcome(&self) -> RoundOutcome {
        self.outcome
    }

    pub fn is_finished(&self) -> bool {
        self.outcome != RoundOutcome::Ongoing
    }
}

/// Hangman over a word list, picking words with its own rng.
pub struct HangmanGame<Rg = StdRng> {
    words: WordSource,
    rng: Rg,
}

impl<Rg: rand::Rng> HangmanGame<Rg> {
    pub fn new(words: WordSource, rng: Rg) -> Self {
        Self { words, rng }
    }

    pub fn words(&self) -> &WordSource {
        &self.words
    }
}

impl<Rg: rand::Rng> ConsoleGame for HangmanGame<Rg> {
    type State = RoundState;
    type Input = HangmanInput;

    const NAME: &'static str = "Hangman";
    const PROMPT: &'static str = "Guess a character";

    fn new_round(&mut self) -> RoundState {
        let word = self.words.pick(&mut self.rng);
        debug!(%word, "picked challenge word");
        RoundState::start(word)
    }

    fn parse_line(line: &str) -> Result<HangmanInput, InputError> {
        let mut chars = line.chars();
        match (chars.next(), chars.next()) {
            (None, _) => Err(InputError::Empty),
            (Some(_), Some(_)) => Err(InputError::NotSingleCharacter),
            (Some(c), None) if c.is_alphabetic() => Ok(HangmanInput::Guess(c)),
            (Some(c), None) => Err(InputError::NotAlphabetic(c)),
        }
    }

    fn handle_input(state: &mut RoundState, input: HangmanInput) -> Result<(), GameError> {
        match input {
            HangmanInput::Guess(letter) => state.apply_guess(letter).map(|_| ()),
        }
    }

    fn is_finished(state: &RoundState) -> bool {
        state.is_finished()
    }

    fn startup_notices(&self) -> Vec<String> {
        match self.words.fallback_reason() {
            Some(e) => vec![
                format!("An error occurred: {}", e),
                "Initiating default list - Mango, Apple, Banana".to_string(),
            ],
            None => Vec::new(),
        }
    }
}
