//! # Browser
//!
//! The interactive front-end: the aligned grid above, the match lists below,
//! and a cursor that moves over either of them.

use std::io;

use crossterm::event::{read, Event, KeyCode, KeyEvent, KeyEventKind};
use keyword_buster::{
	cursor::{Bounds, CursorState, Key, Region, Transition},
	lookup::Lookup,
	present::Presenter
};
use log::{debug, trace};
use ratatui::{
	buffer::Buffer,
	layout::{Constraint, Direction, Layout, Rect},
	style::{Color, Style, Stylize},
	text::{Line, Span},
	widgets::{Block, Borders, List, ListState, Paragraph, StatefulWidget, Widget},
	Frame
};

use crate::tui::{with_terminal, Tui};

////////////////////////////////////////////////////////////////////////////////
//                                Application.                                //
////////////////////////////////////////////////////////////////////////////////

/// The browser state for a single lookup.
#[must_use]
pub struct App<'l, 'd>
{
	/// Whether the browser is running.
	state: ExecutionState,

	/// The lookup being browsed.
	lookup: &'l Lookup<'d>,

	/// The dimensions of the navigable regions.
	bounds: Bounds,

	/// The selected cell.
	cursor: CursorState
}

// Public interface.
impl<'l, 'd> App<'l, 'd>
{
	/// Create a new browser over the given lookup. The cursor starts at the
	/// top-left cell of the grid.
	///
	/// # Arguments
	///
	/// * `lookup` - The lookup to browse.
	///
	/// # Returns
	///
	/// The new browser.
	#[inline]
	pub fn new(lookup: &'l Lookup<'d>) -> Self
	{
		Self {
			state: ExecutionState::Browsing,
			lookup,
			bounds: lookup.bounds(),
			cursor: CursorState::default()
		}
	}

	/// Run the browser until the user quits or picks a word.
	///
	/// # Arguments
	///
	/// * `tui` - The terminal.
	///
	/// # Returns
	///
	/// The picked word, if any.
	///
	/// # Errors
	///
	/// Any error that occurs while drawing or reading events.
	pub fn run(mut self, tui: &mut Tui) -> io::Result<Option<String>>
	{
		while self.is_running()
		{
			tui.draw(|frame| self.render_frame(frame))?;
			self.process_event()?;
		}
		match self.state
		{
			ExecutionState::Exiting { picked } => Ok(picked),
			ExecutionState::Browsing => Ok(None)
		}
	}

	/// Check if the browser is running.
	#[inline]
	#[must_use]
	pub fn is_running(&self) -> bool
	{
		matches!(self.state, ExecutionState::Browsing)
	}
}

// Private implementation details.
impl App<'_, '_>
{
	/// Render the application frame.
	///
	/// # Arguments
	///
	/// * `frame` - The target frame.
	fn render_frame(&self, frame: &mut Frame)
	{
		frame.render_widget(self, frame.area());
	}

	/// Render the [upper](Region::Upper) region: the aligned grid, one
	/// character per cell.
	///
	/// # Arguments
	///
	/// * `area` - The target area.
	/// * `buf` - The target buffer.
	fn render_grid(&self, area: Rect, buf: &mut Buffer)
	{
		let grid = self.lookup.grid();
		let wildcard_row = self.lookup.alignment().wildcard_row();
		let lines = grid.iter_rows().enumerate()
			.map(|(row, cells)| {
				let spans = cells.iter().enumerate()
					.map(|(column, c)| {
						let style =
							if self.is_selected(Region::Upper, row, column)
							{
								Style::default().fg(Color::White).bg(Color::Blue)
							}
							else if row == wildcard_row
							{
								Style::default().fg(Color::Yellow)
							}
							else
							{
								Style::default()
							};
						Span::styled(format!(" {} ", c), style)
					})
					.collect::<Vec<_>>();
				Line::from(spans)
			})
			.collect::<Vec<_>>();
		let block = Block::default()
			.borders(Borders::ALL)
			.border_style(self.region_border(Region::Upper))
			.title_top(Line::from("1 – Patterns").centered())
			.title_top(Line::from("q – exit".yellow().bold()).left_aligned())
			.title_bottom(
				Line::from("←↑↓→ – move  1/2 – switch pane  ↵ – pick".cyan())
					.centered()
			);
		Paragraph::new(lines).block(block).render(area, buf);
	}

	/// Render the [lower](Region::Lower) region: one list of matches per
	/// pattern, side by side.
	///
	/// # Arguments
	///
	/// * `area` - The target area.
	/// * `buf` - The target buffer.
	fn render_matches(&self, area: Rect, buf: &mut Buffer)
	{
		let block = Block::default()
			.borders(Borders::ALL)
			.border_style(self.region_border(Region::Lower))
			.title_top(Line::from("2 – Matches").centered());
		let inner = block.inner(area);
		block.render(area, buf);
		let count = self.lookup.patterns().len().max(1) as u32;
		let columns = Layout::default()
			.direction(Direction::Horizontal)
			.constraints((0 .. count).map(|_| Constraint::Ratio(1, count)))
			.split(inner);
		for (column, (pattern, matches)) in self.lookup.iter().enumerate()
		{
			let mut list_state = ListState::default();
			// A short list has nothing under a cursor below its end.
			if self.cursor.region == Region::Lower
				&& self.cursor.column == column
				&& self.cursor.row < matches.len()
			{
				list_state.select(Some(self.cursor.row));
			}
			let list = List::new(matches.iter().copied())
				.block(
					Block::default()
						.borders(Borders::TOP)
						.title(format!("{} ({})", pattern, matches.len()))
				)
				.style(Style::default().fg(Color::White))
				.highlight_style(
					Style::default()
						.fg(Color::White)
						.bg(Color::Blue)
				);
			StatefulWidget::render(&list, columns[column], buf, &mut list_state);
		}
	}

	/// Check whether the given cell is under the cursor.
	#[inline]
	#[must_use]
	fn is_selected(&self, region: Region, row: usize, column: usize) -> bool
	{
		self.cursor == CursorState { region, row, column }
	}

	/// The border style of a region, brighter when it holds the cursor.
	#[inline]
	#[must_use]
	fn region_border(&self, region: Region) -> Style
	{
		if self.cursor.region == region
		{
			Style::default().fg(Color::Cyan)
		}
		else
		{
			Style::default().fg(Color::DarkGray)
		}
	}

	/// Block until the next event arrives, and process it.
	///
	/// # Errors
	///
	/// Any error that occurs while reading events.
	fn process_event(&mut self) -> io::Result<()>
	{
		match read()?
		{
			Event::Key(event) if event.kind == KeyEventKind::Press =>
				self.process_key_event(event),
			_ => {}
		}
		Ok(())
	}

	/// Process a key event:
	///
	/// * Escape, q - Exit the browser.
	/// * Up, Down, Left, Right - Move the cursor, wrapping around.
	/// * 1 - Move to the grid.
	/// * 2 - Move to the matches.
	/// * Enter - Pick the match under the cursor, and exit.
	///
	/// # Arguments
	///
	/// * `event` - The key event to process.
	fn process_key_event(&mut self, event: KeyEvent)
	{
		let Some(key) = navigation_key(event.code) else { return };
		match self.cursor.transition(key, &self.bounds)
		{
			Transition::Move(cursor) =>
			{
				self.cursor = cursor;
				if cursor.region == Region::Upper
				{
					if let Some(pattern) = self.lookup.selected_pattern(&cursor)
					{
						debug!(
							"Current pattern in column {}: {}",
							cursor.column,
							pattern
						);
					}
				}
			},
			Transition::Pick(cursor) =>
			{
				if let Some(word) = self.lookup.selected_match(&cursor)
				{
					trace!("Picked: {}", word);
					self.state = ExecutionState::Exiting {
						picked: Some(word.to_string())
					};
				}
			},
			Transition::Quit =>
				self.state = ExecutionState::Exiting { picked: None }
		}
	}
}

impl Widget for &App<'_, '_>
{
	fn render(self, area: Rect, buf: &mut Buffer)
	{
		if !self.is_running()
		{
			return
		}
		let panes = Layout::default()
			.direction(Direction::Vertical)
			.constraints([
				Constraint::Length(
					u16::try_from(self.bounds.upper_rows)
						.unwrap_or(u16::MAX)
						.saturating_add(2)
				),
				Constraint::Min(3)
			])
			.split(area);
		self.render_grid(panes[0], buf);
		self.render_matches(panes[1], buf);
	}
}

/// Translate a terminal key code into a navigation key.
///
/// # Arguments
///
/// * `code` - The key code.
///
/// # Returns
///
/// The navigation key, or `None` if the key means nothing to the browser.
#[must_use]
fn navigation_key(code: KeyCode) -> Option<Key>
{
	match code
	{
		KeyCode::Esc | KeyCode::Char('q') => Some(Key::Quit),
		KeyCode::Up => Some(Key::Up),
		KeyCode::Down => Some(Key::Down),
		KeyCode::Left => Some(Key::Left),
		KeyCode::Right => Some(Key::Right),
		KeyCode::Char('1') => Some(Key::SelectUpper),
		KeyCode::Char('2') => Some(Key::SelectLower),
		KeyCode::Enter => Some(Key::Pick),
		_ => None
	}
}

/// The execution state of the browser.
#[derive(Clone, Debug)]
enum ExecutionState
{
	/// The user is moving around.
	Browsing,

	/// The browser is exiting.
	Exiting {
		/// The word the user picked, if any.
		picked: Option<String>
	}
}

////////////////////////////////////////////////////////////////////////////////
//                                Presenter.                                  //
////////////////////////////////////////////////////////////////////////////////

/// Presents a lookup in the interactive browser, on the real terminal.
#[derive(Debug, Default)]
pub struct BrowserPresenter;

impl Presenter for BrowserPresenter
{
	fn present(&mut self, lookup: &Lookup<'_>) -> io::Result<Option<String>>
	{
		with_terminal(|tui| App::new(lookup).run(tui))
	}
}

////////////////////////////////////////////////////////////////////////////////
//                                   Tests.                                   //
////////////////////////////////////////////////////////////////////////////////
