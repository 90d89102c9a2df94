/// Terminal rendering context that handles all the low-level terminal stuff
use crossterm::{QueueableCommand, cursor, terminal, style::{SetForegroundColor, ResetColor, Color}};
use std::io::{self, stdout, Stdout, Write};

/// Anything the game loop can draw on. The real terminal implements it,
/// tests swap in a recorder.
pub trait Screen {
    /// Clear the entire screen and position cursor
    fn clear_screen(&mut self) -> io::Result<()>;

    fn print_line(&mut self, text: &str) -> io::Result<()>;

    /// Print a colored line. Screens without color print it plain.
    fn print_colored_line(&mut self, text: &str, _color: TerminalColor) -> io::Result<()> {
        self.print_line(text)
    }

    fn empty_line(&mut self) -> io::Result<()> {
        self.print_line("")
    }

    /// Flush all output at once - call this at the end of render
    fn flush(&mut self) -> io::Result<()>;
}

pub struct TerminalContext<W: Write = Stdout> {
    out: W,
}

impl TerminalContext<Stdout> {
    pub fn stdout() -> Self {
        Self { out: stdout() }
    }
}

impl<W: Write> TerminalContext<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Screen for TerminalContext<W> {
    fn clear_screen(&mut self) -> io::Result<()> {
        self.out.queue(cursor::MoveTo(0, 0))?;
        self.out.queue(terminal::Clear(terminal::ClearType::All))?;
        Ok(())
    }

    fn print_line(&mut self, text: &str) -> io::Result<()> {
        writeln!(self.out, "{}", text)
    }

    fn print_colored_line(&mut self, text: &str, color: TerminalColor) -> io::Result<()> {
        self.out.queue(SetForegroundColor(color.into()))?;
        writeln!(self.out, "{}", text)?;
        self.out.queue(ResetColor)?;
        Ok(())
    }

    fn flush(&mut self) -> io::Result<()> {
        self.out.flush()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TerminalColor {
    Red,
    Green,
    Yellow,
    Default,
}

impl From<TerminalColor> for Color {
    fn from(color: TerminalColor) -> Self {
        match color {
            TerminalColor::Red => Color::Red,
            TerminalColor::Green => Color::Green,
            TerminalColor::Yellow => Color::Yellow,
            TerminalColor::Default => Color::Reset,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn print_line_writes_text_and_newline() {
        let mut ctx = TerminalContext::new(Vec::new());
        ctx.print_line("Guess the fruit -").unwrap();
        ctx.empty_line().unwrap();
        ctx.flush().unwrap();

        let written = String::from_utf8(ctx.into_inner()).unwrap();
        assert_eq!(written, "Guess the fruit -\n\n");
    }

    #[test]
    fn colored_line_keeps_text_between_escape_codes() {
        let mut ctx = TerminalContext::new(Vec::new());
        ctx.print_colored_line("You live", TerminalColor::Green).unwrap();

        let written = String::from_utf8(ctx.into_inner()).unwrap();
        assert!(written.contains("You live\n"));
        assert!(written.starts_with('\u{1b}'));
    }
}
