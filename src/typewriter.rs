//! Character-by-character animated text output.
//!
//! A decorative intro effect: each [`Line`] of a script appears one
//! character at a time, with a configurable delay per character and a hold
//! after the line completes. Timing lives in the script data, so a single
//! [`play`] call can mix fast and slow passages.

use std::io::{self, Write};
use std::thread;
use std::time::Duration;

/// One line of a typewriter script.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Line {
    /// Text to type out. May be empty for a silent beat.
    pub text: &'static str,
    /// Delay between characters while typing.
    pub per_char: Duration,
    /// Pause after the line completes.
    pub hold: Duration,
}

impl Line {
    pub const fn new(text: &'static str, per_char_ms: u64, hold_ms: u64) -> Self {
        Self {
            text,
            per_char: Duration::from_millis(per_char_ms),
            hold: Duration::from_millis(hold_ms),
        }
    }
}

/// Type `script` into `out` one character at a time, flushing after every
/// character so the effect is visible through buffered sinks.
pub fn play(out: &mut impl Write, script: &[Line]) -> io::Result<()> {
    for line in script {
        for ch in line.text.chars() {
            write!(out, "{ch}")?;
            out.flush()?;
            if !line.per_char.is_zero() {
                thread::sleep(line.per_char);
            }
        }
        out.write_all(b"\r\n")?;
        out.flush()?;
        if !line.hold.is_zero() {
            thread::sleep(line.hold);
        }
    }
    Ok(())
}
