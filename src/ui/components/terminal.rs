use std::io::{self, Stdout};

use crossterm::event::{self, Event, KeyEventKind};
use crossterm::{cursor, execute, terminal};
use ratatui::{backend::CrosstermBackend, Frame, Terminal};

use crate::error::Result;

/// Full-screen surface for figures. Raw mode and the alternate screen last
/// as long as the value; dropping it hands the shell back even on error.
pub struct FigureScreen {
    terminal: Terminal<CrosstermBackend<Stdout>>,
    closed: bool,
}

impl FigureScreen {
    pub fn open() -> Result<Self> {
        terminal::enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, terminal::EnterAlternateScreen, cursor::Hide)?;
        let terminal = Terminal::new(CrosstermBackend::new(stdout))?;
        Ok(Self {
            terminal,
            closed: false,
        })
    }

    /// Draw with `draw` and block until a key is pressed. Resizes redraw.
    pub fn show_until_key<F>(&mut self, mut draw: F) -> Result<()>
    where
        F: FnMut(&mut Frame),
    {
        self.terminal.clear()?;
        loop {
            self.terminal.draw(&mut draw)?;
            if dismisses(&event::read()?) {
                return Ok(());
            }
        }
    }

    pub fn close(&mut self) -> Result<()> {
        if self.closed {
            return Ok(());
        }
        self.closed = true;
        execute!(
            self.terminal.backend_mut(),
            terminal::LeaveAlternateScreen,
            cursor::Show
        )?;
        terminal::disable_raw_mode()?;
        Ok(())
    }
}

/// Key presses close a figure; releases, resizes and mouse events do not.
fn dismisses(event: &Event) -> bool {
    matches!(event, Event::Key(key) if key.kind == KeyEventKind::Press)
}

impl Drop for FigureScreen {
    fn drop(&mut self) {
        let _ = self.close();
    }
}
