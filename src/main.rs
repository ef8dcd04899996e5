//! # Keyword Buster
//!
//! Find dictionary words that fit patterns with a single hole in them, such
//! as `C?T` or `?OG`. The patterns are stacked so that the holes line up,
//! which makes it easy to read off a word that crosses all of them.
//!
//! Via command line options, the user supplies the patterns and optionally the
//! dictionary. By default the aligned patterns and the matches are written to
//! standard output; with `--browse`, they can be explored in a text-based
//! user interface (TUI) instead, and a picked word is written to standard
//! output afterwards.

mod app;
mod tui;

use std::{io::stdout, process::ExitCode};

use clap::Parser;
use log::{debug, error, trace};

use app::BrowserPresenter;
use keyword_buster::{
	dictionary::Dictionary,
	lookup::Lookup,
	present::{Presenter, TextPresenter}
};

////////////////////////////////////////////////////////////////////////////////
//                           Command line options.                            //
////////////////////////////////////////////////////////////////////////////////

/// Look up dictionary words that fit wildcard patterns.
#[derive(Clone, Debug, Parser)]
#[command(version, author = "Todd L Smith")]
struct Opts
{
	/// The dictionary file: plain text, one word per line.
	#[arg(short = 'd', long, default_value = "/srv/dict/words_alpha.txt")]
	dictionary: String,

	/// Explore the results in the text-based user interface (TUI). A word
	/// picked there is written to standard output.
	#[arg(short = 'b', long)]
	browse: bool,

	/// With --browse, suppress emission of the picked word.
	#[arg(short = 'q', long, requires = "browse")]
	quiet: bool,

	/// The patterns. Each must contain exactly one '?', which stands for any
	/// single character.
	#[arg(required = true, value_name = "PATTERN")]
	patterns: Vec<String>
}

////////////////////////////////////////////////////////////////////////////////
//                               Main program.                                //
////////////////////////////////////////////////////////////////////////////////

/// Parse the command line options, look up the patterns, and present the
/// results.
fn main() -> ExitCode
{
	env_logger::init();
	let opts = Opts::parse();
	debug!("Command line options: {:?}", opts);

	// Any failure is fatal for the whole batch.
	let dictionary = match Dictionary::read_from_file(&opts.dictionary)
	{
		Ok(dictionary) => dictionary,
		Err(e) => return fail(&e)
	};
	let lookup = match Lookup::new(&dictionary, opts.patterns.as_slice())
	{
		Ok(lookup) => lookup,
		Err(e) => return fail(&e)
	};

	let result =
		if opts.browse
		{
			trace!("Opening TUI");
			BrowserPresenter.present(&lookup)
		}
		else
		{
			TextPresenter::new(stdout().lock()).present(&lookup)
		};
	match result
	{
		Ok(picked) =>
		{
			if let Some(word) = picked.filter(|_| !opts.quiet)
			{
				println!("{}", word);
			}
			ExitCode::SUCCESS
		},
		Err(e) => fail(&e)
	}
}

/// Report a fatal error.
///
/// # Arguments
///
/// * `e` - The error.
///
/// # Returns
///
/// The failure exit code.
fn fail(e: &dyn std::error::Error) -> ExitCode
{
	error!("{}", e);
	eprintln!("keyword-buster: {}", e);
	ExitCode::FAILURE
}
