/// Hangman-specific renderer - injected dependency
use std::io;

use crate::core::renderer::GameRenderer;
use crate::core::terminal::{Screen, TerminalColor};
use crate::games::hangman::game::{RoundOutcome, RoundState, HANGMAN_LENGTH};

const HEADER: &str = "******** HANGMAN ********";

/// Figure parts, drawn one row per attempt.
const FIGURE: [&str; HANGMAN_LENGTH] = [
    "    --",
    "    | ",
    "    O ",
    "    | ",
    "   \\|/",
    "    | ",
    "    | ",
    "   / \\",
];

const POLE: [&str; HANGMAN_LENGTH] = [
    "--|  ",
    "  |  ",
    "  |  ",
    "  |  ",
    "  |  ",
    "  |  ",
    "  |  ",
    "__|__",
];

const BLANK_FIGURE: &str = "      ";

/// Gallows rows for the given attempt count. Row `i` shows its figure part
/// once more than `i` attempts have been made; the pole is always drawn.
pub fn art_rows(attempts: usize) -> Vec<String> {
    FIGURE
        .iter()
        .zip(POLE.iter())
        .enumerate()
        .map(|(i, (figure, pole))| {
            let figure = if i < attempts { figure } else { &BLANK_FIGURE };
            format!("{} {}", figure, pole)
        })
        .collect()
}

fn spaced(chars: &[char]) -> String {
    chars.iter().map(char::to_string).collect::<Vec<_>>().join(" ")
}

/// Dependency-injected renderer for Hangman
#[derive(Debug, Default, Clone, Copy)]
pub struct HangmanRenderer;

impl GameRenderer<RoundState> for HangmanRenderer {
    fn render<S: Screen>(&self, state: &RoundState, ctx: &mut S) -> io::Result<()> {
        ctx.print_line(HEADER)?;
        ctx.empty_line()?;
        ctx.print_line("Input characters -")?;
        if state.guesses().is_empty() {
            ctx.print_line("No input yet")?;
        } else {
            ctx.print_line(&spaced(state.guesses()))?;
        }

        ctx.empty_line()?;
        ctx.print_line("Guess the fruit -")?;
        ctx.print_line(&spaced(state.template()))?;
        ctx.empty_line()?;

        for row in art_rows(state.attempts()) {
            ctx.print_line(&row)?;
        }

        match state.outcome() {
            RoundOutcome::Won => {
                ctx.print_colored_line(&format!("You live, it was: {}", state.word()), TerminalColor::Green)?;
            }
            RoundOutcome::Lost => {
                ctx.print_colored_line(&format!("You died, it was: {}", state.word()), TerminalColor::Red)?;
            }
            RoundOutcome::Ongoing => {}
        }

        ctx.flush()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::terminal::TerminalContext;

    #[test]
    fn no_attempts_draws_only_the_pole() {
        let rows = art_rows(0);
        assert_eq!(rows.len(), HANGMAN_LENGTH);
        assert_eq!(rows[0], "       --|  ");
        assert_eq!(rows[7], "       __|__");
    }

    #[test]
    fn attempts_add_one_figure_row_each() {
        let rows = art_rows(3);
        assert_eq!(rows[0], "    -- --|  ");
        assert_eq!(rows[1], "    |    |  ");
        assert_eq!(rows[2], "    O    |  ");
        assert_eq!(rows[3], "         |  ");
    }

    #[test]
    fn full_figure_at_the_bound() {
        let rows = art_rows(HANGMAN_LENGTH);
        assert_eq!(rows[7], "   / \\ __|__");
        assert!(rows.iter().all(|r| !r.starts_with(BLANK_FIGURE)));
    }

    fn rendered(state: &RoundState) -> String {
        let mut ctx = TerminalContext::new(Vec::new());
        HangmanRenderer.render(state, &mut ctx).unwrap();
        String::from_utf8(ctx.into_inner()).unwrap()
    }

    #[test]
    fn fresh_round_view() {
        let text = rendered(&RoundState::start("Star fruit"));
        assert!(text.starts_with(HEADER));
        assert!(text.contains("Input characters -\nNo input yet\n"));
        assert!(text.contains("Guess the fruit -\n_ _ _ _   _ _ _ _ _\n"));
        assert!(!text.contains("it was"));
    }

    #[test]
    fn finished_round_reveals_the_word() {
        let mut state = RoundState::start("Fig");
        for letter in "fig".chars() {
            state.apply_guess(letter).unwrap();
        }
        let text = rendered(&state);
        assert!(text.contains("f i g\n"));
        assert!(text.contains("F i g\n"));
        assert!(text.contains("You live, it was: Fig"));
    }
}
