//! # Errors
//!
//! The complete enumeration of failures that can end a lookup.

use std::{
	error::Error,
	fmt::{self, Display, Formatter},
	io,
	path::PathBuf
};

use crate::pattern::WILDCARD;

////////////////////////////////////////////////////////////////////////////////
//                               Lookup errors.                               //
////////////////////////////////////////////////////////////////////////////////

/// The complete enumeration of lookup errors. Every variant is fatal for the
/// batch that produced it.
#[derive(Debug)]
pub enum LookupError
{
	/// The dictionary file could not be opened or read.
	FileAccess
	{
		/// The path of the dictionary file.
		path: PathBuf,

		/// The underlying I/O error.
		source: io::Error
	},

	/// At least one pattern does not contain exactly one wildcard. Every
	/// offending pattern of the batch is listed, in batch order.
	PatternFormat(Vec<MalformedPattern>),

	/// The batch did not contain any patterns.
	EmptyBatch
}

impl Display for LookupError
{
	fn fmt(&self, f: &mut Formatter) -> fmt::Result
	{
		match self
		{
			Self::FileAccess { path, source } => write!(
				f,
				"cannot read dictionary {}: {}",
				path.display(),
				source
			),
			Self::PatternFormat(malformed) =>
			{
				write!(
					f,
					"every pattern must contain exactly one '{}': ",
					WILDCARD
				)?;
				for (index, pattern) in malformed.iter().enumerate()
				{
					if index > 0
					{
						write!(f, ", ")?;
					}
					write!(f, "{}", pattern)?;
				}
				Ok(())
			},
			Self::EmptyBatch => write!(f, "no patterns supplied")
		}
	}
}

impl Error for LookupError
{
	fn source(&self) -> Option<&(dyn Error + 'static)>
	{
		match self
		{
			Self::FileAccess { source, .. } => Some(source),
			_ => None
		}
	}
}

/// A pattern that was rejected because it does not contain exactly one
/// wildcard.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MalformedPattern
{
	/// The offending pattern, uppercased.
	pub pattern: String,

	/// How many wildcards the pattern actually contains.
	pub wildcards: usize
}

impl Display for MalformedPattern
{
	fn fmt(&self, f: &mut Formatter) -> fmt::Result
	{
		write!(f, "{:?} has {} wildcards", self.pattern, self.wildcards)
	}
}

////////////////////////////////////////////////////////////////////////////////
//                                   Tests.                                   //
////////////////////////////////////////////////////////////////////////////////
