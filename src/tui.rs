//! # Terminal session
//!
//! Enter and leave the alternate screen around the browser. The terminal must
//! be restored however the browser ends, including by panic, or the user's
//! shell is left in raw mode.

use std::{
	io::{self, stdout, Stdout},
	panic,
	sync::{Arc, Mutex},
	thread
};

use crossterm::{
	execute,
	terminal::{
		disable_raw_mode, enable_raw_mode,
		EnterAlternateScreen, LeaveAlternateScreen
	}
};
use log::warn;
use ratatui::{backend::{Backend, CrosstermBackend}, Terminal};

////////////////////////////////////////////////////////////////////////////////
//                             Terminal session.                              //
////////////////////////////////////////////////////////////////////////////////

/// The terminal type driven by the browser.
pub type Tui = Terminal<CrosstermBackend<Stdout>>;

/// Run `f` against the terminal in raw mode on the alternate screen, then put
/// the terminal back. A panic on the calling thread also puts the terminal
/// back before the previous panic hook runs.
///
/// # Arguments
///
/// * `f` - The function to apply to the terminal.
///
/// # Returns
///
/// The result of applying `f` to the terminal.
///
/// # Errors
///
/// Any error that occurs while setting up, driving, or restoring the terminal.
/// An error from `f` takes precedence over an error from restoring.
pub fn with_terminal<F, T>(f: F) -> io::Result<T>
	where F: FnOnce(&mut Tui) -> io::Result<T>
{
	// The previous hook is shared between this thread and the new hook.
	let previous = Arc::new(Mutex::new(Some(panic::take_hook())));
	let hook = Arc::clone(&previous);
	let owner = thread::current().id();
	panic::set_hook(Box::new(move |info| {
		if thread::current().id() == owner
		{
			// Already panicking, so there is nobody to report failure to.
			let _ = restore();
		}
		if let Ok(guard) = hook.lock()
		{
			if let Some(previous) = guard.as_ref()
			{
				previous(info);
			}
		}
	}));
	// Entering is not atomic, so restore even if it fails halfway.
	let result = enter().and_then(|mut terminal| f(&mut terminal));
	let previous = previous.lock().ok().and_then(|mut guard| guard.take());
	match previous
	{
		Some(previous) => panic::set_hook(previous),
		None => warn!("Previous panic hook was lost")
	}
	let restored = restore();
	let value = result?;
	restored?;
	Ok(value)
}

/// Switch to the alternate screen and raw mode.
///
/// # Errors
///
/// Any error that occurs while configuring the terminal.
fn enter() -> io::Result<Tui>
{
	let mut stdout = stdout();
	execute!(stdout, EnterAlternateScreen)?;
	enable_raw_mode()?;
	Terminal::new(CrosstermBackend::new(stdout))
}

/// Leave the alternate screen and raw mode, and show the cursor again.
///
/// # Errors
///
/// Any error that occurs while configuring the terminal.
fn restore() -> io::Result<()>
{
	let mut stdout = stdout();
	execute!(stdout, LeaveAlternateScreen)?;
	disable_raw_mode()?;
	CrosstermBackend::new(stdout).show_cursor()
}
