//! Packed (sequential) arrays handed to the script runtime

use serde::Serialize;

use crate::error::MuckResult;

/// Sequential array of records. A pinned array is shared by reference inside
/// the script runtime instead of being copied on write.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PackedArray<T> {
	pinned: bool,
	items: Vec<T>,
}

impl<T> PackedArray<T> {
	pub fn new(items: Vec<T>, pinned: bool) -> Self {
		Self { pinned, items }
	}

	pub fn is_pinned(&self) -> bool {
		self.pinned
	}

	pub fn len(&self) -> usize {
		self.items.len()
	}

	pub fn is_empty(&self) -> bool {
		self.items.is_empty()
	}

	pub fn get(&self, index: usize) -> Option<&T> {
		self.items.get(index)
	}

	pub fn iter(&self) -> std::slice::Iter<'_, T> {
		self.items.iter()
	}

	pub fn into_vec(self) -> Vec<T> {
		self.items
	}
}

impl<T: Serialize> PackedArray<T> {
	/// Items as a JSON array, the form the script bridge consumes
	pub fn to_json(&self) -> MuckResult<serde_json::Value> {
		Ok(serde_json::to_value(&self.items)?)
	}
}

impl<T> IntoIterator for PackedArray<T> {
	type Item = T;
	type IntoIter = std::vec::IntoIter<T>;

	fn into_iter(self) -> Self::IntoIter {
		self.items.into_iter()
	}
}

impl<'a, T> IntoIterator for &'a PackedArray<T> {
	type Item = &'a T;
	type IntoIter = std::slice::Iter<'a, T>;

	fn into_iter(self) -> Self::IntoIter {
		self.items.iter()
	}
}

// vim: ts=4
