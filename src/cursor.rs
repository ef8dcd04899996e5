//! # Cursor
//!
//! The navigation state of an interactive front-end, as a plain value. A
//! front-end owns a [`CursorState`], feeds it [keys](Key), and paints whatever
//! [`CursorState::transition`] answers. Nothing here knows about terminals or
//! windows.
//!
//! There are two regions: the [upper](Region::Upper) one holds the aligned
//! grid and the [lower](Region::Lower) one holds the match lists. Both share
//! the same columns, one per pattern. Movement wraps around at every edge.

use serde::{Deserialize, Serialize};

////////////////////////////////////////////////////////////////////////////////
//                                  Regions.                                  //
////////////////////////////////////////////////////////////////////////////////

/// A navigable region of the display.
#[derive(
	Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize
)]
pub enum Region
{
	/// The aligned grid.
	#[default]
	Upper,

	/// The match lists.
	Lower
}

/// The dimensions of the two regions.
#[derive(
	Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize
)]
pub struct Bounds
{
	/// The number of rows of the [upper](Region::Upper) region.
	pub upper_rows: usize,

	/// The number of rows of the [lower](Region::Lower) region.
	pub lower_rows: usize,

	/// The number of columns, shared by both regions.
	pub columns: usize
}

impl Bounds
{
	/// The number of rows of the given region.
	#[inline]
	#[must_use]
	pub fn rows(&self, region: Region) -> usize
	{
		match region
		{
			Region::Upper => self.upper_rows,
			Region::Lower => self.lower_rows
		}
	}
}

////////////////////////////////////////////////////////////////////////////////
//                               Cursor state.                                //
////////////////////////////////////////////////////////////////////////////////

/// The navigation input of a front-end, independent of any toolkit's key
/// codes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Key
{
	/// Move one row up.
	Up,

	/// Move one row down.
	Down,

	/// Move one column left.
	Left,

	/// Move one column right.
	Right,

	/// Move to the [upper](Region::Upper) region.
	SelectUpper,

	/// Move to the [lower](Region::Lower) region.
	SelectLower,

	/// Choose the cell under the cursor.
	Pick,

	/// Leave.
	Quit
}

/// The outcome of feeding a [`Key`] to a [`CursorState`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Transition
{
	/// Keep navigating from the given state.
	Move(CursorState),

	/// The user chose the cell under the given state.
	Pick(CursorState),

	/// The user wants to leave.
	Quit
}

/// The selected cell. The origin is the top-left cell of the selected region.
#[derive(
	Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize
)]
#[must_use]
pub struct CursorState
{
	/// The selected region.
	pub region: Region,

	/// The selected row, within the selected region.
	pub row: usize,

	/// The selected column.
	pub column: usize
}

impl CursorState
{
	/// Apply a key to the cursor. Movement wraps around the edges of the
	/// selected region. Switching regions keeps the column and clamps the row
	/// into the new region.
	///
	/// # Arguments
	///
	/// * `key` - The key.
	/// * `bounds` - The dimensions of the regions.
	///
	/// # Returns
	///
	/// The transition.
	pub fn transition(self, key: Key, bounds: &Bounds) -> Transition
	{
		let rows = bounds.rows(self.region);
		let next = match key
		{
			Key::Quit => return Transition::Quit,
			Key::Pick => return Transition::Pick(self),
			Key::Up => Self { row: wrap(self.row, -1, rows), ..self },
			Key::Down => Self { row: wrap(self.row, 1, rows), ..self },
			Key::Left =>
				Self { column: wrap(self.column, -1, bounds.columns), ..self },
			Key::Right =>
				Self { column: wrap(self.column, 1, bounds.columns), ..self },
			Key::SelectUpper => self.enter(Region::Upper, bounds),
			Key::SelectLower => self.enter(Region::Lower, bounds)
		};
		Transition::Move(next)
	}

	/// Move to the given region, clamping the row into it.
	fn enter(self, region: Region, bounds: &Bounds) -> Self
	{
		let last = bounds.rows(region).saturating_sub(1);
		Self { region, row: self.row.min(last), ..self }
	}
}

/// Step a coordinate by ±1 modulo `extent`. An empty extent pins the
/// coordinate at zero.
#[inline]
#[must_use]
fn wrap(coordinate: usize, delta: isize, extent: usize) -> usize
{
	if extent == 0
	{
		return 0
	}
	let coordinate = coordinate % extent;
	if delta < 0
	{
		(coordinate + extent - 1) % extent
	}
	else
	{
		(coordinate + 1) % extent
	}
}

////////////////////////////////////////////////////////////////////////////////
//                                   Tests.                                   //
////////////////////////////////////////////////////////////////////////////////
