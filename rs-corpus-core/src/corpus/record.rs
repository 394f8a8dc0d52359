/// Character that opens and closes every token of a record.
pub const BOUNDARY: char = '_';

/// Separator placed between two consecutive tokens of a record.
pub const TOKEN_SEPARATOR: &str = "_ _";

/// Joins tokens into the record form `_tok_ _tok_ ... _tok_`.
///
/// An empty token list gives the degenerate `__`.
pub fn join<I, S>(tokens: I) -> String
where
	I: IntoIterator<Item = S>,
	S: AsRef<str>,
{
	let mut record = String::new();
	record.push(BOUNDARY);
	for (i, token) in tokens.into_iter().enumerate() {
		if i > 0 {
			record.push_str(TOKEN_SEPARATOR);
		}
		record.push_str(token.as_ref());
	}
	record.push(BOUNDARY);
	record
}

/// Splits a record back into its tokens.
///
/// Strips one outer boundary on each side and splits on the token
/// separator. Returns an empty list for records without content.
pub fn tokens(record: &str) -> Vec<&str> {
	let inner = record.strip_prefix(BOUNDARY).unwrap_or(record);
	let inner = inner.strip_suffix(BOUNDARY).unwrap_or(inner);
	if inner.is_empty() {
		return Vec::new();
	}
	inner.split(TOKEN_SEPARATOR).collect()
}

/// A record has content when something other than boundaries and spaces
/// survives normalization.
pub fn has_content(record: &str) -> bool {
	record.chars().any(|c| c != BOUNDARY && !c.is_whitespace())
}
