//! Terminal control helpers for interactive shells around the renderer.
//!
//! The renderer itself only repositions the cursor; everything else about
//! the terminal (clearing once at startup, hiding the cursor, colors,
//! restoring state on exit) lives here so the render loop stays a plain
//! write to a sink.

use std::io::{self, Write};
use std::thread;
use std::time::Duration;

use crossterm::cursor::{Hide, MoveTo, Show};
use crossterm::style::{Color, Print, ResetColor, SetForegroundColor};
use crossterm::terminal::{disable_raw_mode, enable_raw_mode, Clear, ClearType};
use crossterm::{execute, QueueableCommand};

/// Clear the whole screen and home the cursor.
pub fn clear_screen(out: &mut impl Write) -> io::Result<()> {
    execute!(out, Clear(ClearType::All), MoveTo(0, 0))
}

/// Hide the terminal cursor.
pub fn hide_cursor(out: &mut impl Write) -> io::Result<()> {
    execute!(out, Hide)
}

/// Show the terminal cursor.
pub fn show_cursor(out: &mut impl Write) -> io::Result<()> {
    execute!(out, Show)
}

/// Set the foreground color for subsequent output.
pub fn set_color(out: &mut impl Write, color: Color) -> io::Result<()> {
    execute!(out, SetForegroundColor(color))
}

/// Draw an animated bracketed progress bar: `{=====     } 50%`.
///
/// Fills `width` segments spread evenly over `duration`, blocking between
/// increments. The bar redraws in place with carriage returns and ends on
/// its own line.
pub fn progress_bar(out: &mut impl Write, width: u32, duration: Duration) -> io::Result<()> {
    let width = width.max(1);
    let pause = duration / width;

    for filled in 0..=width {
        out.queue(Print("\r"))?;
        out.queue(SetForegroundColor(Color::Yellow))?;
        out.queue(Print("{"))?;
        out.queue(SetForegroundColor(Color::Red))?;
        for _ in 0..filled {
            out.queue(Print("="))?;
        }
        for _ in filled..width {
            out.queue(Print(" "))?;
        }
        out.queue(SetForegroundColor(Color::Yellow))?;
        out.queue(Print("} "))?;
        out.queue(SetForegroundColor(Color::Red))?;
        out.queue(Print(format!("{}%", filled * 100 / width)))?;
        out.flush()?;

        if !pause.is_zero() {
            thread::sleep(pause);
        }
    }

    execute!(out, ResetColor, Print("\r\n"))
}

/// Puts the terminal into rendering shape and restores it on drop.
///
/// Construction hides the cursor and enables raw mode so key presses arrive
/// unbuffered. Dropping reverses both and resets colors; drops also run
/// during panic unwinds, so a crashed animation still hands the terminal
/// back usable.
pub struct TerminalGuard;

impl TerminalGuard {
    pub fn new() -> io::Result<Self> {
        let mut stdout = io::stdout();
        hide_cursor(&mut stdout)?;
        enable_raw_mode()?;
        Ok(Self)
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), Show, ResetColor);
    }
}
