//! # Lookup
//!
//! A [`Lookup`] is everything a front-end needs to show one batch of
//! patterns: the patterns themselves, their [alignment](Alignment), and the
//! dictionary words matching each of them.

use log::{debug, trace};

use crate::{
	align::{align, Alignment, Grid},
	cursor::{Bounds, CursorState, Region},
	dictionary::Dictionary,
	error::LookupError,
	pattern::Pattern
};

////////////////////////////////////////////////////////////////////////////////
//                                  Lookups.                                  //
////////////////////////////////////////////////////////////////////////////////

/// The complete result of looking up a batch of patterns. Words are borrowed
/// from the dictionary.
#[derive(Clone, Debug)]
#[must_use]
pub struct Lookup<'d>
{
	/// The patterns, uppercased, in batch order.
	patterns: Vec<Pattern>,

	/// The alignment of the patterns.
	alignment: Alignment,

	/// The matching words of each pattern, in dictionary order.
	matches: Vec<Vec<&'d str>>
}

impl<'d> Lookup<'d>
{
	/// Look up a batch of patterns. The whole batch is validated before any
	/// matching takes place, so either every pattern is looked up or none is.
	///
	/// # Arguments
	///
	/// * `dictionary` - The dictionary to search.
	/// * `patterns` - The raw patterns, in any case. Every pattern must contain
	///   exactly one wildcard.
	///
	/// # Returns
	///
	/// The lookup.
	///
	/// # Errors
	///
	/// * [`LookupError::EmptyBatch`] if `patterns` is empty.
	/// * [`LookupError::PatternFormat`] if any pattern does not contain exactly
	///   one wildcard.
	pub fn new<T: AsRef<str>>(
		dictionary: &'d Dictionary,
		patterns: &[T]
	) -> Result<Self, LookupError>
	{
		let patterns = patterns.iter()
			.map(|p| Pattern::new(p.as_ref()))
			.collect::<Vec<_>>();
		let alignment = align(&patterns)?;
		let matches = patterns.iter()
			.map(|pattern| {
				let found = pattern.find_matches(dictionary);
				debug!("{}: {} matches", pattern, found.len());
				found
			})
			.collect::<Vec<_>>();
		trace!(
			"Looked up {} patterns against {} words",
			patterns.len(),
			dictionary.len()
		);
		Ok(Self { patterns, alignment, matches })
	}

	/// The patterns, uppercased, in batch order.
	#[inline]
	#[must_use]
	pub fn patterns(&self) -> &[Pattern] { &self.patterns }

	/// The alignment of the patterns.
	#[inline]
	pub fn alignment(&self) -> &Alignment { &self.alignment }

	/// The aligned grid, one column per pattern.
	#[inline]
	pub fn grid(&self) -> &Grid { self.alignment.grid() }

	/// The matching words of every pattern, in batch order.
	#[inline]
	#[must_use]
	pub fn matches(&self) -> &[Vec<&'d str>] { &self.matches }

	/// Iterate over the patterns together with their matching words.
	#[inline]
	pub fn iter(&self) -> impl Iterator<Item = (&Pattern, &[&'d str])> + '_
	{
		self.patterns.iter()
			.zip(&self.matches)
			.map(|(pattern, matches)| (pattern, matches.as_slice()))
	}

	/// The navigable dimensions of the lookup: the grid above, and below it
	/// one column of matches per pattern.
	#[must_use]
	pub fn bounds(&self) -> Bounds
	{
		Bounds {
			upper_rows: self.grid().rows(),
			lower_rows: self.matches.iter().map(Vec::len).max().unwrap_or(0),
			columns: self.patterns.len()
		}
	}

	/// Answer the matching word under the cursor, if the cursor is in the
	/// [lower](Region::Lower) region and on a word.
	#[must_use]
	pub fn selected_match(&self, cursor: &CursorState) -> Option<&'d str>
	{
		match cursor.region
		{
			Region::Upper => None,
			Region::Lower => self.matches
				.get(cursor.column)
				.and_then(|matches| matches.get(cursor.row))
				.copied()
		}
	}

	/// Answer the pattern in the cursor's column.
	#[must_use]
	pub fn selected_pattern(&self, cursor: &CursorState) -> Option<&Pattern>
	{
		self.patterns.get(cursor.column)
	}
}

////////////////////////////////////////////////////////////////////////////////
//                                   Tests.                                   //
////////////////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod test
{
	use crate::{
		cursor::{Bounds, CursorState, Region},
		dictionary::Dictionary,
		error::LookupError,
		lookup::Lookup
	};

	/// The dictionary used throughout these tests.
	fn dictionary() -> Dictionary
	{
		["cat", "cot", "cut", "dog"].into_iter().collect()
	}

	/// Ensure that a batch is aligned and matched in one go.
	#[test]
	fn test_lookup()
	{
		let dictionary = dictionary();
		let lookup = Lookup::new(&dictionary, &["?at", "d?g", "c?t"]).unwrap();
		let patterns = lookup.patterns().iter()
			.map(|p| p.as_str())
			.collect::<Vec<_>>();
		assert_eq!(patterns, vec!["?AT", "D?G", "C?T"]);
		assert_eq!(lookup.alignment().wildcard_row(), 1);
		assert_eq!(lookup.grid().row(1), &['?', '?', '?']);
		assert_eq!(
			lookup.matches(),
			&[vec!["CAT"], vec!["DOG"], vec!["CAT", "COT", "CUT"]]
		);
		assert_eq!(
			lookup.bounds(),
			Bounds { upper_rows: 4, lower_rows: 3, columns: 3 }
		);
	}

	/// Ensure that a run without matches is still a successful lookup.
	#[test]
	fn test_no_matches()
	{
		let dictionary = dictionary();
		let lookup = Lookup::new(&dictionary, &["z?z"]).unwrap();
		assert_eq!(lookup.matches(), &[Vec::<&str>::new()]);
		assert_eq!(lookup.bounds().lower_rows, 0);
	}

	/// Ensure that a malformed batch fails as a whole.
	#[test]
	fn test_malformed_batch()
	{
		let dictionary = dictionary();
		let result = Lookup::new(&dictionary, &["c?t", "cat", "c??"]);
		match result
		{
			Err(LookupError::PatternFormat(malformed)) =>
				assert_eq!(malformed.len(), 2),
			other => panic!("unexpected result: {:?}", other)
		}
		let empty: [&str; 0] = [];
		assert!(matches!(
			Lookup::new(&dictionary, &empty),
			Err(LookupError::EmptyBatch)
		));
	}

	/// Ensure that the selection follows the cursor.
	#[test]
	fn test_selection()
	{
		let dictionary = dictionary();
		let lookup = Lookup::new(&dictionary, &["?og", "c?t"]).unwrap();
		let cursor = CursorState { region: Region::Lower, row: 2, column: 1 };
		assert_eq!(lookup.selected_match(&cursor), Some("CUT"));
		assert_eq!(lookup.selected_pattern(&cursor).map(|p| p.as_str()), Some("C?T"));
		let cursor = CursorState { region: Region::Lower, row: 1, column: 0 };
		assert_eq!(lookup.selected_match(&cursor), None);
		let cursor = CursorState { region: Region::Upper, row: 0, column: 1 };
		assert_eq!(lookup.selected_match(&cursor), None);
	}
}
