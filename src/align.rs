//! # Alignment
//!
//! Herein is the stacking of a batch of patterns so that their wildcards line
//! up. Each pattern is left-padded until its wildcard sits at the largest
//! wildcard index of the batch, and the padded patterns are then written
//! column by column into a [`Grid`], one column per pattern.

use log::debug;

use crate::{
	error::{LookupError, MalformedPattern},
	pattern::Pattern
};

/// The filler of grid cells that no pattern reaches, and of padding.
pub const BLANK: char = ' ';

////////////////////////////////////////////////////////////////////////////////
//                             Aligned patterns.                              //
////////////////////////////////////////////////////////////////////////////////

/// A pattern left-padded with [blanks](BLANK) so that its wildcard lines up
/// with the rest of its batch.
#[derive(Clone, Debug, PartialEq, Eq)]
#[must_use]
pub struct AlignedPattern
{
	/// The number of leading blanks.
	padding: usize,

	/// The padded characters.
	glyphs: Vec<char>
}

impl AlignedPattern
{
	/// Pad the given pattern.
	fn new(pattern: &Pattern, padding: usize) -> Self
	{
		let mut glyphs = Vec::with_capacity(padding + pattern.len());
		glyphs.resize(padding, BLANK);
		glyphs.extend_from_slice(pattern.glyphs());
		Self { padding, glyphs }
	}

	/// The number of leading blanks.
	#[inline]
	#[must_use]
	pub fn padding(&self) -> usize { self.padding }

	/// The padded length, in characters.
	#[inline]
	#[must_use]
	pub fn len(&self) -> usize { self.glyphs.len() }

	/// Check if the aligned pattern is empty.
	#[inline]
	#[must_use]
	pub fn is_empty(&self) -> bool { self.glyphs.is_empty() }

	/// The padded characters.
	#[inline]
	#[must_use]
	pub fn glyphs(&self) -> &[char] { &self.glyphs }

	/// The padded text.
	#[must_use]
	pub fn text(&self) -> String { self.glyphs.iter().collect() }
}

////////////////////////////////////////////////////////////////////////////////
//                                   Grids.                                   //
////////////////////////////////////////////////////////////////////////////////

/// A rectangular character grid. Rows are character offsets within the
/// aligned patterns and columns are pattern indices. Storage is row-major.
#[derive(Clone, Debug, PartialEq, Eq)]
#[must_use]
pub struct Grid
{
	/// The number of rows.
	rows: usize,

	/// The number of columns.
	columns: usize,

	/// The cells, linearized in row-major order.
	cells: Vec<char>
}

impl Grid
{
	/// Construct a grid of the given dimensions, filled with [blanks](BLANK).
	fn blank(rows: usize, columns: usize) -> Self
	{
		Self { rows, columns, cells: vec![BLANK; rows * columns] }
	}

	/// The number of rows.
	#[inline]
	#[must_use]
	pub fn rows(&self) -> usize { self.rows }

	/// The number of columns.
	#[inline]
	#[must_use]
	pub fn columns(&self) -> usize { self.columns }

	/// Get the cell at the given coordinates, if they are in bounds.
	#[inline]
	#[must_use]
	pub fn get(&self, row: usize, column: usize) -> Option<char>
	{
		if row < self.rows && column < self.columns
		{
			Some(self.cells[row * self.columns + column])
		}
		else
		{
			None
		}
	}

	/// Get the given row, left to right.
	///
	/// # Panics
	///
	/// If the row is out of bounds.
	#[inline]
	#[must_use]
	pub fn row(&self, row: usize) -> &[char]
	{
		let start = row * self.columns;
		&self.cells[start .. start + self.columns]
	}

	/// Iterate over the rows, top to bottom.
	#[inline]
	pub fn iter_rows(&self) -> impl Iterator<Item = &[char]> + '_
	{
		(0 .. self.rows).map(|row| self.row(row))
	}

	/// Iterate over the given column, top to bottom.
	#[inline]
	pub fn column(&self, column: usize) -> impl Iterator<Item = char> + '_
	{
		self.cells.iter()
			.skip(column)
			.step_by(self.columns.max(1))
			.take(if column < self.columns { self.rows } else { 0 })
			.copied()
	}

	/// Set the cell at the given coordinates.
	#[inline]
	fn set(&mut self, row: usize, column: usize, c: char)
	{
		self.cells[row * self.columns + column] = c;
	}
}

////////////////////////////////////////////////////////////////////////////////
//                                 Alignment.                                 //
////////////////////////////////////////////////////////////////////////////////

/// The result of aligning a batch of patterns.
#[derive(Clone, Debug, PartialEq, Eq)]
#[must_use]
pub struct Alignment
{
	/// The aligned patterns, in batch order.
	aligned: Vec<AlignedPattern>,

	/// The row that holds every wildcard.
	wildcard_row: usize,

	/// The grid, one column per pattern.
	grid: Grid
}

impl Alignment
{
	/// The aligned patterns, in batch order.
	#[inline]
	#[must_use]
	pub fn aligned(&self) -> &[AlignedPattern] { &self.aligned }

	/// The row that holds every wildcard, i.e., the largest wildcard index of
	/// the batch.
	#[inline]
	#[must_use]
	pub fn wildcard_row(&self) -> usize { self.wildcard_row }

	/// The grid, one column per pattern.
	#[inline]
	pub fn grid(&self) -> &Grid { &self.grid }
}

/// Align a batch of patterns around their wildcards.
///
/// # Arguments
///
/// * `patterns` - The batch. Every pattern must contain exactly one wildcard.
///
/// # Returns
///
/// The aligned patterns and their grid.
///
/// # Errors
///
/// * [`LookupError::EmptyBatch`] if `patterns` is empty.
/// * [`LookupError::PatternFormat`] if any pattern does not contain exactly
///   one wildcard. All such patterns are reported together.
pub fn align(patterns: &[Pattern]) -> Result<Alignment, LookupError>
{
	let indices = wildcard_indices(patterns)?;
	let wildcard_row = indices.iter().copied().max().unwrap_or_default();
	let aligned = patterns.iter()
		.zip(&indices)
		.map(|(pattern, &index)|
			AlignedPattern::new(pattern, wildcard_row - index)
		)
		.collect::<Vec<_>>();
	let rows = aligned.iter().map(AlignedPattern::len).max().unwrap_or_default();
	let mut grid = Grid::blank(rows, aligned.len());
	for (column, pattern) in aligned.iter().enumerate()
	{
		for (row, &c) in pattern.glyphs().iter().enumerate()
		{
			grid.set(row, column, c);
		}
	}
	for pattern in &aligned
	{
		debug!("Aligned pattern: {:?}", pattern.text());
	}
	for row in grid.iter_rows()
	{
		debug!("Grid row: {:?}", row.iter().collect::<String>());
	}
	Ok(Alignment { aligned, wildcard_row, grid })
}

/// Compute the wildcard index of every pattern of a batch, validating the
/// whole batch before answering.
///
/// # Errors
///
/// As for [`align`].
fn wildcard_indices(
	patterns: &[Pattern]
) -> Result<Vec<usize>, LookupError>
{
	if patterns.is_empty()
	{
		return Err(LookupError::EmptyBatch)
	}
	let mut indices = Vec::with_capacity(patterns.len());
	let mut malformed = Vec::<MalformedPattern>::new();
	for pattern in patterns
	{
		match pattern.wildcard_index()
		{
			Ok(index) => indices.push(index),
			Err(e) => malformed.push(e)
		}
	}
	if malformed.is_empty()
	{
		Ok(indices)
	}
	else
	{
		Err(LookupError::PatternFormat(malformed))
	}
}

////////////////////////////////////////////////////////////////////////////////
//                                   Tests.                                   //
////////////////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod test
{
	use crate::{
		align::{align, BLANK},
		error::{LookupError, MalformedPattern},
		pattern::{Pattern, WILDCARD}
	};

	/// Build a batch of patterns.
	fn batch(patterns: &[&str]) -> Vec<Pattern>
	{
		patterns.iter().map(|p| Pattern::new(p)).collect()
	}

	/// Ensure that patterns whose wildcards already agree are not padded.
	#[test]
	fn test_already_aligned()
	{
		let alignment = align(&batch(&["C?T", "D?G"])).unwrap();
		assert_eq!(alignment.wildcard_row(), 1);
		assert!(alignment.aligned().iter().all(|a| a.padding() == 0));
		let grid = alignment.grid();
		assert_eq!((grid.rows(), grid.columns()), (3, 2));
		assert_eq!(grid.row(0), &['C', 'D']);
		assert_eq!(grid.row(1), &['?', '?']);
		assert_eq!(grid.row(2), &['T', 'G']);
	}

	/// Ensure that a pattern with an earlier wildcard is padded.
	#[test]
	fn test_padding()
	{
		let alignment = align(&batch(&["?AT", "D?G"])).unwrap();
		assert_eq!(alignment.wildcard_row(), 1);
		let texts = alignment.aligned().iter()
			.map(|a| a.text())
			.collect::<Vec<_>>();
		assert_eq!(texts, vec![" ?AT", "D?G"]);
		let grid = alignment.grid();
		assert_eq!((grid.rows(), grid.columns()), (4, 2));
		assert_eq!(grid.row(0), &[' ', 'D']);
		assert_eq!(grid.row(1), &['?', '?']);
		assert_eq!(grid.row(2), &['A', 'G']);
		assert_eq!(grid.row(3), &['T', BLANK]);
	}

	/// Ensure the structural laws over a ragged batch: every column
	/// reconstructs its aligned pattern, and the wildcard row holds only
	/// wildcards.
	#[test]
	fn test_laws()
	{
		let patterns = batch(&["ab?", "?", "xyzzy?q", "m?nstrous", "??"]
			.iter()
			.filter(|p| p.matches('?').count() == 1)
			.copied()
			.collect::<Vec<_>>());
		let alignment = align(&patterns).unwrap();
		let grid = alignment.grid();
		assert_eq!(alignment.wildcard_row(), 5);
		for (column, aligned) in alignment.aligned().iter().enumerate()
		{
			let text = grid.column(column).collect::<String>();
			assert_eq!(text.trim_end(), aligned.text().trim_end());
			assert_eq!(aligned.glyphs()[alignment.wildcard_row()], WILDCARD);
		}
		assert!(grid.row(alignment.wildcard_row()).iter()
			.all(|&c| c == WILDCARD));
		let longest = alignment.aligned().iter().map(|a| a.len()).max();
		assert_eq!(Some(grid.rows()), longest);
		// Alignment is deterministic.
		assert_eq!(align(&patterns).unwrap(), alignment);
	}

	/// Ensure that a single pattern is aligned to itself.
	#[test]
	fn test_single()
	{
		let alignment = align(&batch(&["ca?"])).unwrap();
		assert_eq!(alignment.wildcard_row(), 2);
		assert_eq!(alignment.aligned()[0].text(), "CA?");
		assert_eq!(alignment.grid().column(0).collect::<String>(), "CA?");
		assert_eq!(alignment.grid().get(2, 0), Some('?'));
		assert_eq!(alignment.grid().get(3, 0), None);
		assert_eq!(alignment.grid().get(0, 1), None);
	}

	/// Ensure that every malformed pattern is reported, in batch order.
	#[test]
	fn test_malformed()
	{
		match align(&batch(&["c?t", "dog", "?a?", "?og"]))
		{
			Err(LookupError::PatternFormat(malformed)) => assert_eq!(
				malformed,
				vec![
					MalformedPattern { pattern: "DOG".to_string(), wildcards: 0 },
					MalformedPattern { pattern: "?A?".to_string(), wildcards: 2 }
				]
			),
			other => panic!("unexpected result: {:?}", other)
		}
	}

	/// Ensure that an empty batch is rejected.
	#[test]
	fn test_empty()
	{
		assert!(matches!(align(&[]), Err(LookupError::EmptyBatch)));
	}
}
