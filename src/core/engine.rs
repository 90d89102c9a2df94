use std::io::BufRead;

use anyhow::Result;
use tracing::{debug, info};

use crate::core::error::InputError;
use crate::core::game::ConsoleGame;
use crate::core::renderer::GameRenderer;
use crate::core::terminal::{Screen, TerminalColor};

/// What one line of player input asks the engine to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command<I> {
    Quit,
    NewRound,
    Play(I),
}

/// `1` quits, `2` starts a new round, anything else goes to the game.
pub fn parse_command<G: ConsoleGame>(line: &str) -> Result<Command<G::Input>, InputError> {
    match line {
        "1" => Ok(Command::Quit),
        "2" => Ok(Command::NewRound),
        other => G::parse_line(other).map(Command::Play),
    }
}

/// Drives rounds of a console game: reads a line, dispatches it, redraws.
pub struct Engine<G: ConsoleGame, R: GameRenderer<G::State>, S: Screen> {
    game: G,
    renderer: R,
    screen: S,
}

impl<G, R, S> Engine<G, R, S>
where
    G: ConsoleGame,
    R: GameRenderer<G::State>,
    S: Screen,
{
    pub fn new(game: G, renderer: R, screen: S) -> Self {
        Self { game, renderer, screen }
    }

    pub fn screen(&self) -> &S {
        &self.screen
    }

    /// Play until the player quits or input runs out. Returns the round
    /// that was active at exit.
    pub fn run<I: BufRead>(&mut self, mut input: I) -> Result<G::State> {
        self.screen.clear_screen()?;
        for notice in self.game.startup_notices() {
            self.screen.print_colored_line(&notice, TerminalColor::Yellow)?;
        }

        let mut state = self.start_round()?;
        let mut line = String::new();

        loop {
            self.prompt()?;

            line.clear();
            if input.read_line(&mut line)? == 0 {
                debug!("input closed");
                break;
            }
            let entered = line.trim_end_matches(['\n', '\r']);

            match parse_command::<G>(entered) {
                Ok(Command::Quit) => break,
                Ok(Command::NewRound) => {
                    self.screen.clear_screen()?;
                    state = self.start_round()?;
                }
                Ok(Command::Play(_)) if G::is_finished(&state) => {
                    self.screen.print_colored_line(
                        "Round is over. Press 2 for a new word or 1 to exit",
                        TerminalColor::Yellow,
                    )?;
                }
                Ok(Command::Play(mv)) => {
                    self.screen.clear_screen()?;
                    if let Err(e) = G::handle_input(&mut state, mv) {
                        self.screen.print_colored_line(&e.to_string(), TerminalColor::Yellow)?;
                    }
                    self.renderer.render(&state, &mut self.screen)?;
                }
                Err(e) => {
                    debug!(input = entered, error = %e, "rejected input");
                    self.screen.print_colored_line(
                        &format!("Please only enter an alphabet ({})", e),
                        TerminalColor::Yellow,
                    )?;
                }
            }
        }

        info!("{} session ended", G::NAME);
        self.screen.flush()?;
        Ok(state)
    }

    fn start_round(&mut self) -> Result<G::State> {
        let state = self.game.new_round();
        info!("new {} round", G::NAME);
        self.renderer.render(&state, &mut self.screen)?;
        Ok(state)
    }

    fn prompt(&mut self) -> Result<()> {
        self.screen.empty_line()?;
        self.screen.print_line(G::PROMPT)?;
        self.screen.print_line("Press 1 to exit")?;
        self.screen.print_line("Press 2 to change the challenge")?;
        self.screen.flush()?;
        Ok(())
    }
}
