/// Generic game renderer trait for dependency injection
use std::io;

use crate::core::terminal::Screen;

/// Draws one game state onto a screen. Renderers hold no game logic.
pub trait GameRenderer<State> {
    fn render<S: Screen>(&self, state: &State, ctx: &mut S) -> io::Result<()>;
}
