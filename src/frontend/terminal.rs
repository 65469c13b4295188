//! Terminal front end built on crossterm.
//!
//! Raw mode and the alternate screen are entered on construction and
//! restored on drop, so an early return or error still leaves a usable
//! shell behind.

use std::io::{self, Stdout, Write};

use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use crossterm::{cursor, execute, queue, style::Print, terminal};
use log::{debug, warn};

use crate::frontend::keys::{decode_input, is_start_key};
use crate::frontend::{Frontend, Input};
use crate::game::state::GameState;
use crate::game::systems::{render_game_over, render_grid, render_status, render_welcome};

pub struct TerminalFrontend<W: Write = Stdout> {
    out: W,
}

impl TerminalFrontend<Stdout> {
    pub fn new() -> io::Result<Self> {
        Self::with_output(io::stdout())
    }
}

impl<W: Write> TerminalFrontend<W> {
    /// Enter raw mode and the alternate screen on `out`. The value exists
    /// as soon as raw mode is on, so a failure after that point is undone
    /// by `Drop`.
    pub fn with_output(out: W) -> io::Result<Self> {
        terminal::enable_raw_mode()?;
        let mut frontend = Self { out };
        execute!(frontend.out, terminal::EnterAlternateScreen, cursor::Hide)?;
        debug!("[Terminal] Raw mode enabled");
        Ok(frontend)
    }

    /// Clear the screen and draw `text` from the top-left corner.
    fn draw(&mut self, text: &str) -> io::Result<()> {
        queue!(self.out, terminal::Clear(terminal::ClearType::All), cursor::MoveTo(0, 0))?;
        // Raw mode does not translate \n into a carriage return.
        for line in text.split('\n') {
            queue!(self.out, Print(line), Print("\r\n"))?;
        }
        self.out.flush()
    }

    /// Block until a key is pressed. Release and repeat events are skipped.
    fn read_key(&mut self) -> io::Result<KeyCode> {
        loop {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => return Ok(key.code),
                _ => {}
            }
        }
    }
}

impl<W: Write> Frontend for TerminalFrontend<W> {
    fn show_welcome(&mut self) -> io::Result<()> {
        self.draw(&render_welcome())
    }

    fn confirm_start(&mut self) -> io::Result<bool> {
        let code = self.read_key()?;
        Ok(is_start_key(code))
    }

    fn render(&mut self, state: &GameState) -> io::Result<()> {
        let mut text = render_grid(&state.board, state.last_spawn);
        text.push_str(&render_status(state.score, state.last_move));
        self.draw(&text)
    }

    fn read_input(&mut self) -> io::Result<Input> {
        let code = self.read_key()?;
        Ok(decode_input(code))
    }

    fn show_game_over(&mut self, state: &GameState) -> io::Result<()> {
        self.draw(&render_game_over(&state.board, state.score))?;
        self.read_key()?;
        Ok(())
    }
}

impl<W: Write> Drop for TerminalFrontend<W> {
    fn drop(&mut self) {
        if let Err(e) = execute!(self.out, cursor::Show, terminal::LeaveAlternateScreen) {
            warn!("[Terminal] Failed to leave alternate screen: {}", e);
        }
        if let Err(e) = terminal::disable_raw_mode() {
            warn!("[Terminal] Failed to disable raw mode: {}", e);
        }
    }
}
