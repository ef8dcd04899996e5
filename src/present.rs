//! # Presentation
//!
//! Front-ends consume a [`Lookup`] through the [`Presenter`] trait and are
//! responsible only for showing it. The plain [`TextPresenter`] lives here;
//! interactive ones live with the binary.

use std::io::{self, Write};

use crate::{align::Grid, lookup::Lookup};

/// The separator between adjacent grid cells in text output.
const CELL_SEPARATOR: &str = "  ";

/// The indentation of each matching word in text output.
const MATCH_INDENT: &str = "  ";

////////////////////////////////////////////////////////////////////////////////
//                                Presenters.                                 //
////////////////////////////////////////////////////////////////////////////////

/// Something that can show a [`Lookup`] to the user.
pub trait Presenter
{
	/// Show the lookup.
	///
	/// # Arguments
	///
	/// * `lookup` - The lookup to show.
	///
	/// # Returns
	///
	/// The word that the user picked, if the presenter supports picking and
	/// the user picked one.
	///
	/// # Errors
	///
	/// Any error that occurs while writing to the output device.
	fn present(&mut self, lookup: &Lookup<'_>) -> io::Result<Option<String>>;
}

/// Writes a lookup as plain text: first the aligned grid, one line per row,
/// then every pattern followed by its matches, one per line.
#[derive(Debug)]
pub struct TextPresenter<W: Write>
{
	/// The output sink.
	out: W
}

impl<W: Write> TextPresenter<W>
{
	/// Construct a text presenter that writes to the given sink.
	#[inline]
	pub fn new(out: W) -> Self { Self { out } }

	/// Recover the output sink.
	#[inline]
	pub fn into_inner(self) -> W { self.out }
}

impl<W: Write> Presenter for TextPresenter<W>
{
	fn present(&mut self, lookup: &Lookup<'_>) -> io::Result<Option<String>>
	{
		for line in grid_lines(lookup.grid())
		{
			writeln!(self.out, "{}", line)?;
		}
		for (pattern, matches) in lookup.iter()
		{
			writeln!(self.out, "{}", pattern)?;
			for word in matches
			{
				writeln!(self.out, "{}{}", MATCH_INDENT, word)?;
			}
		}
		self.out.flush()?;
		Ok(None)
	}
}

/// Render the grid as text, one line per row. Cells are separated by
/// [`CELL_SEPARATOR`] and trailing whitespace is dropped.
///
/// # Arguments
///
/// * `grid` - The grid to render.
///
/// # Returns
///
/// The lines, top to bottom.
#[must_use]
pub fn grid_lines(grid: &Grid) -> Vec<String>
{
	grid.iter_rows()
		.map(|row| {
			let mut line = String::with_capacity(row.len() * 3);
			for (index, c) in row.iter().enumerate()
			{
				if index > 0
				{
					line.push_str(CELL_SEPARATOR);
				}
				line.push(*c);
			}
			line.truncate(line.trim_end().len());
			line
		})
		.collect()
}

////////////////////////////////////////////////////////////////////////////////
//                                   Tests.                                   //
////////////////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod test
{
	use crate::{
		dictionary::Dictionary,
		lookup::Lookup,
		present::{grid_lines, Presenter, TextPresenter}
	};

	/// Ensure the exact text output for a small batch.
	#[test]
	fn test_text_presenter()
	{
		let dictionary: Dictionary =
			["cat", "cot", "cut", "dog"].into_iter().collect();
		let lookup = Lookup::new(&dictionary, &["?at", "d?g", "x?"]).unwrap();
		let mut presenter = TextPresenter::new(Vec::new());
		assert_eq!(presenter.present(&lookup).unwrap(), None);
		let output = String::from_utf8(presenter.into_inner()).unwrap();
		assert_eq!(
			output,
			"   D  X\n\
			?  ?  ?\n\
			A  G\n\
			T\n\
			?AT\n  CAT\n\
			D?G\n  DOG\n\
			X?\n"
		);
	}

	/// Ensure that leading blanks survive and trailing blanks do not.
	#[test]
	fn test_grid_lines()
	{
		let dictionary = Dictionary::new();
		let lookup = Lookup::new(&dictionary, &["ab?", "?"]).unwrap();
		assert_eq!(grid_lines(lookup.grid()), vec!["A", "B", "?  ?"]);
		let lookup = Lookup::new(&dictionary, &["?", "ab?"]).unwrap();
		assert_eq!(grid_lines(lookup.grid()), vec!["   A", "   B", "?  ?"]);
	}
}
