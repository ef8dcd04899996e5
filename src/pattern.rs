//! # Patterns
//!
//! A pattern is a word with holes in it: every [`WILDCARD`] stands for exactly
//! one arbitrary character, and every other character must appear verbatim at
//! the same position. Positions and lengths are counted in characters.

use std::fmt::{self, Display, Formatter};

use crate::{dictionary::Dictionary, error::MalformedPattern};

/// The wildcard marker.
pub const WILDCARD: char = '?';

////////////////////////////////////////////////////////////////////////////////
//                                 Patterns.                                  //
////////////////////////////////////////////////////////////////////////////////

/// An uppercase query pattern.
#[derive(Clone, Debug, PartialEq, Eq)]
#[must_use]
pub struct Pattern
{
	/// The uppercased text of the pattern.
	text: String,

	/// The characters of the pattern, for positional comparison.
	glyphs: Vec<char>
}

impl Pattern
{
	/// Construct a pattern from user input, which is uppercased. Any number of
	/// wildcards is accepted here; alignment is what requires exactly one.
	///
	/// # Arguments
	///
	/// * `text` - The raw pattern.
	///
	/// # Returns
	///
	/// The pattern.
	pub fn new(text: &str) -> Self
	{
		let text = text.to_uppercase();
		let glyphs = text.chars().collect();
		Self { text, glyphs }
	}

	/// The uppercased text of the pattern.
	#[inline]
	#[must_use]
	pub fn as_str(&self) -> &str { &self.text }

	/// The length of the pattern, in characters.
	#[inline]
	#[must_use]
	pub fn len(&self) -> usize { self.glyphs.len() }

	/// Check if the pattern is empty.
	#[inline]
	#[must_use]
	pub fn is_empty(&self) -> bool { self.glyphs.is_empty() }

	/// The characters of the pattern.
	#[inline]
	#[must_use]
	pub fn glyphs(&self) -> &[char] { &self.glyphs }

	/// Count the wildcards in the pattern.
	#[inline]
	#[must_use]
	pub fn wildcards(&self) -> usize
	{
		self.glyphs.iter().filter(|&&c| c == WILDCARD).count()
	}

	/// Answer the character index of the pattern's only wildcard.
	///
	/// # Errors
	///
	/// [`MalformedPattern`] if the pattern contains no wildcard or more than
	/// one.
	pub fn wildcard_index(&self) -> Result<usize, MalformedPattern>
	{
		match self.wildcards()
		{
			1 => Ok(self.glyphs.iter()
				.position(|&c| c == WILDCARD)
				.unwrap_or_default()),
			wildcards => Err(MalformedPattern {
				pattern: self.text.clone(),
				wildcards
			})
		}
	}

	/// Check whether the given word matches the pattern: the lengths must be
	/// equal, and every non-wildcard character must agree positionally.
	///
	/// # Arguments
	///
	/// * `word` - The candidate word, already uppercased.
	///
	/// # Returns
	///
	/// `true` if the word matches, `false` otherwise.
	#[must_use]
	pub fn matches(&self, word: &str) -> bool
	{
		let mut chars = word.chars();
		for &expected in &self.glyphs
		{
			match chars.next()
			{
				Some(c) if expected == WILDCARD || c == expected => {},
				_ => return false
			}
		}
		chars.next().is_none()
	}

	/// Collect every word of the dictionary that matches the pattern.
	///
	/// # Arguments
	///
	/// * `dictionary` - The dictionary to search.
	///
	/// # Returns
	///
	/// The matching words, in dictionary order. Duplicate dictionary entries
	/// yield duplicate matches.
	#[must_use]
	pub fn find_matches<'d>(&self, dictionary: &'d Dictionary) -> Vec<&'d str>
	{
		dictionary.iter().filter(|word| self.matches(word)).collect()
	}
}

impl Display for Pattern
{
	fn fmt(&self, f: &mut Formatter) -> fmt::Result
	{
		f.write_str(&self.text)
	}
}

////////////////////////////////////////////////////////////////////////////////
//                                   Tests.                                   //
////////////////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod test
{
	use crate::{dictionary::Dictionary, error::MalformedPattern, pattern::Pattern};

	/// The dictionary used throughout these tests.
	fn dictionary() -> Dictionary
	{
		["CAT", "COT", "CUT", "DOG"].into_iter().collect()
	}

	/// Ensure the canonical lookups against the small dictionary.
	#[test]
	fn test_find_matches()
	{
		let dictionary = dictionary();
		let cases = [
			("C?T", vec!["CAT", "COT", "CUT"]),
			("?OG", vec!["DOG"]),
			("?????", vec![]),
			("c?t", vec!["CAT", "COT", "CUT"]),
			("???", vec!["CAT", "COT", "CUT", "DOG"]),
			("?", vec![]),
			("CAT?", vec![])
		];
		for (pattern, expected) in cases
		{
			assert_eq!(
				Pattern::new(pattern).find_matches(&dictionary),
				expected,
				"{}",
				pattern
			);
		}
	}

	/// Ensure that a word matches iff the lengths agree and every literal
	/// position agrees.
	#[test]
	fn test_matches()
	{
		let pattern = Pattern::new("B?RD");
		assert!(pattern.matches("BIRD"));
		assert!(pattern.matches("BARD"));
		assert!(!pattern.matches("BIRDS"));
		assert!(!pattern.matches("BIR"));
		assert!(!pattern.matches("BIRT"));
		assert!(!pattern.matches("WORD"));
		// The wildcard is not restricted to letters.
		assert!(pattern.matches("B-RD"));
		// Lengths are measured in characters, not bytes.
		assert!(Pattern::new("?BER").matches("ÜBER"));
		assert!(!Pattern::new("??BER").matches("ÜBER"));
	}

	/// Ensure that the empty pattern only matches the empty word.
	#[test]
	fn test_empty_pattern()
	{
		let pattern = Pattern::new("");
		assert!(pattern.is_empty());
		assert!(pattern.matches(""));
		assert!(!pattern.matches("A"));
	}

	/// Ensure that matches keep dictionary order and multiplicity.
	#[test]
	fn test_order_and_duplicates()
	{
		let dictionary: Dictionary =
			["CUT", "DOG", "CAT", "CUT", "COT"].into_iter().collect();
		assert_eq!(
			Pattern::new("C?T").find_matches(&dictionary),
			vec!["CUT", "CAT", "CUT", "COT"]
		);
	}

	/// Ensure that only patterns with exactly one wildcard have a wildcard
	/// index.
	#[test]
	fn test_wildcard_index()
	{
		assert_eq!(Pattern::new("?AT").wildcard_index(), Ok(0));
		assert_eq!(Pattern::new("da?").wildcard_index(), Ok(2));
		assert_eq!(
			Pattern::new("cat").wildcard_index(),
			Err(MalformedPattern { pattern: "CAT".to_string(), wildcards: 0 })
		);
		assert_eq!(
			Pattern::new("c??").wildcard_index(),
			Err(MalformedPattern { pattern: "C??".to_string(), wildcards: 2 })
		);
	}
}
