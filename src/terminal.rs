use std::io::{self, Write};

use crossterm::{
    cursor::Show,
    event::{
        DisableMouseCapture, EnableMouseCapture, KeyboardEnhancementFlags,
        PopKeyboardEnhancementFlags, PushKeyboardEnhancementFlags,
    },
    execute,
    terminal::{disable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};

/// Switch to the alternate screen with mouse capture, and ask for key
/// release events when the terminal can report them.
pub fn enter<W: Write>(out: &mut W, release_events: bool) -> io::Result<()> {
    execute!(out, EnterAlternateScreen, EnableMouseCapture)?;
    if release_events {
        execute!(
            out,
            PushKeyboardEnhancementFlags(KeyboardEnhancementFlags::REPORT_EVENT_TYPES)
        )?;
    }
    Ok(())
}

/// Undo `enter` and raw mode. Every step runs even if an earlier one
/// failed; the first error is returned.
pub fn restore<W: Write>(out: &mut W, release_events: bool) -> io::Result<()> {
    let mut steps = Vec::with_capacity(4);
    if release_events {
        steps.push(execute!(out, PopKeyboardEnhancementFlags));
    }
    steps.push(disable_raw_mode());
    steps.push(execute!(out, LeaveAlternateScreen, DisableMouseCapture));
    steps.push(execute!(out, Show));
    steps.into_iter().collect()
}
