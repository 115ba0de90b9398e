//! Case-insensitive glob matching on parameter names
//!
//! `*` matches any run of characters, `?` matches one, everything else is
//! literal. The empty pattern matches every name.

use regex::{Regex, RegexBuilder};

use crate::prelude::*;

#[derive(Debug, Clone)]
pub enum NamePattern {
	All,
	Glob(Regex),
	/// Used when the glob could not be compiled
	Exact(String),
}

impl NamePattern {
	pub fn new(pattern: &str) -> Self {
		if pattern.is_empty() || pattern == "*" {
			return NamePattern::All;
		}

		let mut expr = String::with_capacity(pattern.len() + 8);
		expr.push('^');
		for c in pattern.chars() {
			match c {
				'*' => expr.push_str(".*"),
				'?' => expr.push('.'),
				_ => expr.push_str(&regex::escape(c.encode_utf8(&mut [0; 4]))),
			}
		}
		expr.push('$');

		match RegexBuilder::new(&expr).case_insensitive(true).build() {
			Ok(re) => NamePattern::Glob(re),
			Err(err) => {
				warn!("Falling back to exact match for pattern '{}': {}", pattern, err);
				NamePattern::Exact(pattern.to_ascii_lowercase())
			}
		}
	}

	pub fn matches(&self, name: &str) -> bool {
		match self {
			NamePattern::All => true,
			NamePattern::Glob(re) => re.is_match(name),
			NamePattern::Exact(exact) => name.eq_ignore_ascii_case(exact),
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_empty_and_star_match_all() {
		assert!(NamePattern::new("").matches("anything"));
		assert!(NamePattern::new("*").matches("dump_interval"));
	}

	#[test]
	fn test_literal_is_case_insensitive_and_anchored() {
		let pat = NamePattern::new("pennies");
		assert!(pat.matches("pennies"));
		assert!(pat.matches("PENNIES"));
		assert!(!pat.matches("cpennies"));
		assert!(!pat.matches("pennies_muf_mlev"));
	}

	#[test]
	fn test_wildcards() {
		let pat = NamePattern::new("file_log_*");
		assert!(pat.matches("file_log_commands"));
		assert!(!pat.matches("file_help"));

		let pat = NamePattern::new("*penn?");
		assert!(pat.matches("cpenny"));
		assert!(pat.matches("penny"));
		assert!(!pat.matches("pennies"));
	}

	#[test]
	fn test_regex_metacharacters_are_literal() {
		let pat = NamePattern::new("a.b");
		assert!(pat.matches("a.b"));
		assert!(!pat.matches("axb"));
	}
}

// vim: ts=4
