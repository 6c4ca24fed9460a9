use std::fs::File;
use std::io::Read;
use std::io;
use std::path::Path;

/// Reads a text file and returns all its lines as a `Vec<String>`.
///
/// - Reads the entire file into memory
/// - Splits on `\n` / `\r\n`
pub(crate) fn read_file<P: AsRef<Path>>(filename: P) -> io::Result<Vec<String>> {
	let mut contents = String::new();
	File::open(filename)?.read_to_string(&mut contents)?;
	Ok(contents.lines().map(str::to_owned).collect())
}

/// Reads a corpus file into a single string.
///
/// Lines are joined with one space; their original terminators are dropped.
/// The file is closed before returning.
///
/// # Errors
/// Returns the underlying I/O error if the file does not exist or is unreadable.
pub fn read_corpus<P: AsRef<Path>>(filename: P) -> io::Result<String> {
	Ok(read_file(filename)?.join(" "))
}
