/// Core game interface for line-driven console games
use crate::core::error::{GameError, InputError};

/// Main game trait that all console games implement.
/// The engine owns menu commands and redraws; the game owns its rules.
pub trait ConsoleGame {
    /// State of one round. Replaced wholesale when a new round starts.
    type State;

    /// A parsed player move.
    type Input;

    const NAME: &'static str;

    /// First line of the prompt shown before every read.
    const PROMPT: &'static str;

    /// Set up a fresh round.
    fn new_round(&mut self) -> Self::State;

    /// Game developer controls input parsing - the engine only strips
    /// its own menu commands first.
    fn parse_line(line: &str) -> Result<Self::Input, InputError>;

    /// Apply one move to the round.
    fn handle_input(state: &mut Self::State, input: Self::Input) -> Result<(), GameError>;

    /// True once the round reached a terminal outcome.
    fn is_finished(state: &Self::State) -> bool;

    /// Messages for the player gathered while the game was set up.
    fn startup_notices(&self) -> Vec<String> {
        Vec::new()
    }
}
