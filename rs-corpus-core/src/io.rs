use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use std::env;

use crate::error::{PrepError, PrepResult};

/// Lines of a text source, kept together with where they came from so that
/// decoding errors can point at a file and a line.
#[derive(Debug, Clone)]
pub struct SourceText {
	origin: PathBuf,
	lines: Vec<String>,
}

impl SourceText {
	/// Reads a UTF-8 text file and returns all its lines.
	///
	/// - Reads the entire file into memory
	/// - Splits on `\n` / `\r\n`
	/// - Each line is decoded on its own so a bad byte sequence is reported
	///   with its 1-based line number
	pub fn read<P: AsRef<Path>>(filename: P) -> PrepResult<Self> {
		let origin = filename.as_ref().to_path_buf();
		let bytes = fs::read(&origin).map_err(|e| PrepError::io(&origin, e))?;

		let mut raw: Vec<&[u8]> = bytes.split(|b| *b == b'\n').collect();
		if bytes.ends_with(b"\n") {
			raw.pop();
		}

		let mut lines = Vec::with_capacity(raw.len());
		for (index, line) in raw.into_iter().enumerate() {
			let line = line.strip_suffix(b"\r").unwrap_or(line);
			let text = std::str::from_utf8(line).map_err(|e| PrepError::Decode {
				path: origin.clone(),
				line: index + 1,
				reason: e.to_string(),
			})?;
			lines.push(text.to_owned());
		}

		Ok(Self { origin, lines })
	}

	/// Wraps in-memory lines, `origin` is only used in error messages.
	pub fn from_lines<I, S>(origin: impl Into<PathBuf>, lines: I) -> Self
	where
		I: IntoIterator<Item = S>,
		S: Into<String>,
	{
		Self {
			origin: origin.into(),
			lines: lines.into_iter().map(Into::into).collect(),
		}
	}

	pub fn origin(&self) -> &Path {
		&self.origin
	}

	pub fn len(&self) -> usize {
		self.lines.len()
	}

	pub fn is_empty(&self) -> bool {
		self.lines.is_empty()
	}

	/// Iterates over `(line_number, line)` with 1-based line numbers.
	pub fn numbered(&self) -> impl Iterator<Item = (usize, &str)> {
		self.lines.iter().enumerate().map(|(i, l)| (i + 1, l.as_str()))
	}
}

/// Writes one record per line, newline terminated, UTF-8 encoded.
///
/// Returns the number of records written.
pub fn write_lines<P, I, S>(filename: P, records: I) -> PrepResult<usize>
where
	P: AsRef<Path>,
	I: IntoIterator<Item = S>,
	S: AsRef<str>,
{
	let path = filename.as_ref();
	let file = File::create(path).map_err(|e| PrepError::io(path, e))?;
	let mut out = BufWriter::new(file);

	let mut count = 0;
	for record in records {
		writeln!(out, "{}", record.as_ref()).map_err(|e| PrepError::io(path, e))?;
		count += 1;
	}
	out.flush().map_err(|e| PrepError::io(path, e))?;

	Ok(count)
}

/// Normalize a folder path and make sure it exists.
///
/// - `"."` or `"./"` resolves to the current working directory
/// - Other paths are returned as-is (not canonicalized)
pub fn prepare_folder<P: AsRef<Path>>(input: P) -> PrepResult<PathBuf> {
	let input = input.as_ref();
	let folder = if input == Path::new(".") || input == Path::new("./") {
		env::current_dir().unwrap_or_else(|_| PathBuf::from("."))
	} else {
		input.to_path_buf()
	};

	fs::create_dir_all(&folder).map_err(|e| PrepError::io(&folder, e))?;
	Ok(folder)
}
