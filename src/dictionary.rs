//! # Dictionary
//!
//! Herein is support for loading the word list. All lookups are performed
//! against a [`Dictionary`], which is an ordered sequence of uppercase words.

use std::{
	fs::File,
	io::{BufRead, BufReader},
	path::Path
};

use log::trace;

use crate::error::LookupError;

////////////////////////////////////////////////////////////////////////////////
//                                Definitions.                                //
////////////////////////////////////////////////////////////////////////////////

/// A dictionary is an ordered sequence of uppercase words. Order is the order
/// of the source, and duplicates are kept.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
#[must_use]
pub struct Dictionary(Vec<String>);

impl Dictionary
{
	/// Construct an empty dictionary. Same as [`Default::default`].
	///
	/// # Returns
	///
	/// An empty dictionary.
	#[inline]
	pub fn new() -> Self { Self(Default::default()) }

	/// Check if the dictionary is empty.
	///
	/// # Returns
	///
	/// `true` if the dictionary is empty, `false` otherwise.
	#[inline]
	#[must_use]
	pub fn is_empty(&self) -> bool { self.0.is_empty() }

	/// Answer the number of words in the dictionary, duplicates included.
	#[inline]
	#[must_use]
	pub fn len(&self) -> usize { self.0.len() }

	/// Iterate over the words of the dictionary, in order.
	#[inline]
	pub fn iter(&self) -> impl Iterator<Item = &str> + '_
	{
		self.0.iter().map(String::as_str)
	}

	/// Populate the dictionary with the given words. Each word is trimmed and
	/// uppercased; words that are blank after trimming are skipped.
	///
	/// # Arguments
	///
	/// * `words` - The words to append, in order.
	pub fn populate<T: AsRef<str>>(&mut self, words: &[T])
	{
		for word in words
		{
			self.push(word.as_ref());
		}
	}

	/// Construct a dictionary from the contents of the given file. Each line
	/// in the file is considered a single word.
	///
	/// # Arguments
	///
	/// * `path` - The target file.
	///
	/// # Returns
	///
	/// A dictionary containing the words from the file, in file order.
	///
	/// # Errors
	///
	/// [`LookupError::FileAccess`] if the file cannot be opened or read,
	/// including if it is not valid UTF-8.
	pub fn read_from_file<T: AsRef<Path>>(path: T) -> Result<Self, LookupError>
	{
		let path = path.as_ref();
		let access = |source| LookupError::FileAccess {
			path: path.to_path_buf(),
			source
		};
		let file = File::open(path).map_err(access)?;
		let reader = BufReader::new(file);
		let mut dictionary = Self::new();
		for line in reader.lines()
		{
			dictionary.push(&line.map_err(access)?);
		}
		trace!(
			"Read dictionary: {} ({} words)",
			path.display(),
			dictionary.len()
		);
		Ok(dictionary)
	}

	/// Normalize and append a single word.
	fn push(&mut self, word: &str)
	{
		let word = word.trim();
		if !word.is_empty()
		{
			self.0.push(word.to_uppercase());
		}
	}
}

impl<T: AsRef<str>> FromIterator<T> for Dictionary
{
	fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self
	{
		let mut dictionary = Self::new();
		for word in iter
		{
			dictionary.push(word.as_ref());
		}
		dictionary
	}
}

////////////////////////////////////////////////////////////////////////////////
//                                   Tests.                                   //
////////////////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod test
{
	use std::io::Write;

	use tempfile::NamedTempFile;

	use crate::{dictionary::Dictionary, error::LookupError};

	/// The path to the sample dictionary file.
	#[inline]
	#[must_use]
	const fn test_path() -> &'static str { "dict/sample.txt" }

	/// Test basic functionality of [`Dictionary`]:
	///
	/// * [`Dictionary::new`]
	/// * [`Dictionary::is_empty`]
	/// * [`Dictionary::populate`]
	/// * [`Dictionary::iter`]
	#[test]
	fn test_populate()
	{
		let mut dictionary = Dictionary::new();
		assert!(dictionary.is_empty());
		dictionary.populate(&["  cat ", "Dog", "", "cat"]);
		assert_eq!(dictionary.len(), 3);
		assert_eq!(
			dictionary.iter().collect::<Vec<_>>(),
			vec!["CAT", "DOG", "CAT"]
		);
	}

	/// Test reading a dictionary from a file:
	///
	/// * [`Dictionary::read_from_file`]
	#[test]
	fn test_read_from_file()
	{
		let mut file = NamedTempFile::new().unwrap();
		write!(file, "cat\r\n  Cot\t\n\nCUT\ndog\ncat\n").unwrap();
		let dictionary = Dictionary::read_from_file(file.path()).unwrap();
		assert_eq!(
			dictionary.iter().collect::<Vec<_>>(),
			vec!["CAT", "COT", "CUT", "DOG", "CAT"]
		);
	}

	/// Test reading the sample dictionary that ships with the crate.
	#[test]
	fn test_read_sample()
	{
		let dictionary = Dictionary::read_from_file(test_path()).unwrap();
		assert!(!dictionary.is_empty());
		// These words had better be in the dictionary…
		assert!(dictionary.iter().any(|word| word == "CAT"));
		assert!(dictionary.iter().any(|word| word == "DOG"));
		assert!(dictionary.iter().all(|word| word == word.to_uppercase()));
	}

	/// Ensure that a missing file is reported as a file access error that
	/// names the path.
	#[test]
	fn test_missing_file()
	{
		let dir = tempfile::tempdir().unwrap();
		let path = dir.path().join("absent.txt");
		match Dictionary::read_from_file(&path)
		{
			Err(LookupError::FileAccess { path: reported, .. }) =>
				assert_eq!(reported, path),
			other => panic!("unexpected result: {:?}", other)
		}
	}

	/// Ensure that a file that is not UTF-8 is reported rather than silently
	/// truncated.
	#[test]
	fn test_invalid_utf8()
	{
		let mut file = NamedTempFile::new().unwrap();
		file.write_all(b"cat\n\xff\xfe\n").unwrap();
		assert!(matches!(
			Dictionary::read_from_file(file.path()),
			Err(LookupError::FileAccess { .. })
		));
	}
}
