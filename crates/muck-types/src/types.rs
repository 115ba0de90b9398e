//! Core value types: object references, privilege levels, object kinds and flags

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

use crate::error::Error;

/// Database reference: the identity of an object in the world database
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Dbref(pub i32);

impl Dbref {
	/// The null reference, written `#-1`
	pub const NOTHING: Dbref = Dbref(-1);

	pub fn is_nothing(self) -> bool {
		self == Self::NOTHING
	}
}

impl fmt::Display for Dbref {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "#{}", self.0)
	}
}

/// Parses the `#<number>` form. The marker is mandatory.
impl FromStr for Dbref {
	type Err = Error;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		let digits = s.trim().strip_prefix('#').ok_or(Error::Parse)?;
		digits.parse::<i32>().map(Dbref).map_err(|_| Error::Parse)
	}
}

impl Serialize for Dbref {
	fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
		serializer.collect_str(self)
	}
}

impl<'de> Deserialize<'de> for Dbref {
	fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
		let s = String::deserialize(deserializer)?;
		s.parse().map_err(serde::de::Error::custom)
	}
}

/// MUCKER level of a caller, ordered from least to most privileged
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(into = "u8", try_from = "u8")]
pub enum MuckerLevel {
	Mortal = 0,
	Apprentice = 1,
	Journeyman = 2,
	Master = 3,
	Wizard = 4,
	God = 5,
}

impl MuckerLevel {
	pub const ALL: [MuckerLevel; 6] = [
		MuckerLevel::Mortal,
		MuckerLevel::Apprentice,
		MuckerLevel::Journeyman,
		MuckerLevel::Master,
		MuckerLevel::Wizard,
		MuckerLevel::God,
	];

	pub fn as_str(self) -> &'static str {
		match self {
			MuckerLevel::Mortal => "mortal",
			MuckerLevel::Apprentice => "apprentice",
			MuckerLevel::Journeyman => "journeyman",
			MuckerLevel::Master => "master",
			MuckerLevel::Wizard => "wizard",
			MuckerLevel::God => "god",
		}
	}
}

impl From<MuckerLevel> for u8 {
	fn from(level: MuckerLevel) -> Self {
		level as u8
	}
}

impl TryFrom<u8> for MuckerLevel {
	type Error = Error;

	fn try_from(value: u8) -> Result<Self, Self::Error> {
		MuckerLevel::ALL.get(usize::from(value)).copied().ok_or(Error::Parse)
	}
}

/// Accepts a level name ("wizard") or its number ("4")
impl FromStr for MuckerLevel {
	type Err = Error;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		let s = s.trim();
		if let Ok(num) = s.parse::<u8>() {
			return MuckerLevel::try_from(num);
		}
		MuckerLevel::ALL
			.iter()
			.copied()
			.find(|level| level.as_str().eq_ignore_ascii_case(s))
			.ok_or(Error::Parse)
	}
}

impl fmt::Display for MuckerLevel {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

/// Kind of a world object
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ObjectKind {
	Room,
	Thing,
	Exit,
	Player,
	Program,
	/// Recycled object slot
	Garbage,
}

impl ObjectKind {
	pub fn as_str(self) -> &'static str {
		match self {
			ObjectKind::Room => "room",
			ObjectKind::Thing => "thing",
			ObjectKind::Exit => "exit",
			ObjectKind::Player => "player",
			ObjectKind::Program => "program",
			ObjectKind::Garbage => "garbage",
		}
	}
}

/// Restriction on what an object reference may point to
///
/// There is no "unknown" restriction: every dbref parameter names either any
/// object or one kind, so exported `objtype` tags are `any` or a kind name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TypeRestriction {
	Any,
	Only(ObjectKind),
}

impl TypeRestriction {
	/// Tag used in script-facing exports ("any", "room", ...)
	pub fn as_str(self) -> &'static str {
		match self {
			TypeRestriction::Any => "any",
			TypeRestriction::Only(kind) => kind.as_str(),
		}
	}

	/// Garbage never satisfies a restriction, not even `Any`
	pub fn admits(self, kind: ObjectKind) -> bool {
		match (self, kind) {
			(_, ObjectKind::Garbage) => false,
			(TypeRestriction::Any, _) => true,
			(TypeRestriction::Only(want), got) => want == got,
		}
	}
}

bitflags::bitflags! {
	/// Object flag bits
	#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
	pub struct ObjectFlags: u32 {
		const WIZARD = 1 << 0;
		const ABODE = 1 << 1;
		const BUILDER = 1 << 2;
		const CHOWN_OK = 1 << 3;
		const DARK = 1 << 4;
		const GUEST = 1 << 5;
		const HAVEN = 1 << 6;
		const JUMP_OK = 1 << 7;
		const KILL_OK = 1 << 8;
		const LINK_OK = 1 << 9;
		const MUCKER = 1 << 10;
		const SMUCKER = 1 << 11;
		const QUELL = 1 << 12;
		const STICKY = 1 << 13;
		const VEHICLE = 1 << 14;
		const XFORCIBLE = 1 << 15;
		const YIELD = 1 << 16;
		const OVERT = 1 << 17;
		const ZOMBIE = 1 << 18;
	}
}

impl ObjectFlags {
	/// MUCKER level encoded by the MUCKER/SMUCKER bit pair (M1..M3)
	pub fn mucker_level(self) -> MuckerLevel {
		match (self.contains(Self::MUCKER), self.contains(Self::SMUCKER)) {
			(false, false) => MuckerLevel::Mortal,
			(false, true) => MuckerLevel::Apprentice,
			(true, false) => MuckerLevel::Journeyman,
			(true, true) => MuckerLevel::Master,
		}
	}

	/// Flag bits encoding a MUCKER level; levels above Master saturate at M3
	pub fn for_mucker_level(level: MuckerLevel) -> ObjectFlags {
		match level {
			MuckerLevel::Mortal => ObjectFlags::empty(),
			MuckerLevel::Apprentice => ObjectFlags::SMUCKER,
			MuckerLevel::Journeyman => ObjectFlags::MUCKER,
			_ => ObjectFlags::MUCKER | ObjectFlags::SMUCKER,
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_dbref_parse_and_display() {
		assert_eq!("#123".parse::<Dbref>().ok(), Some(Dbref(123)));
		assert_eq!("#-1".parse::<Dbref>().ok(), Some(Dbref::NOTHING));
		assert!("123".parse::<Dbref>().is_err());
		assert!("#abc".parse::<Dbref>().is_err());
		assert!("#".parse::<Dbref>().is_err());
		assert_eq!(Dbref(42).to_string(), "#42");
	}

	#[test]
	fn test_mucker_level_ordering() {
		assert!(MuckerLevel::Mortal < MuckerLevel::Apprentice);
		assert!(MuckerLevel::Wizard < MuckerLevel::God);
		assert_eq!("wizard".parse::<MuckerLevel>().ok(), Some(MuckerLevel::Wizard));
		assert_eq!("GOD".parse::<MuckerLevel>().ok(), Some(MuckerLevel::God));
		assert_eq!("3".parse::<MuckerLevel>().ok(), Some(MuckerLevel::Master));
		assert!("9".parse::<MuckerLevel>().is_err());
		assert!("archwizard".parse::<MuckerLevel>().is_err());
	}

	#[test]
	fn test_mucker_level_serializes_as_number() {
		assert_eq!(serde_json::to_string(&MuckerLevel::Wizard).ok().as_deref(), Some("4"));
		assert_eq!(serde_json::to_string(&Dbref(7)).ok().as_deref(), Some("\"#7\""));
	}

	#[test]
	fn test_type_restriction() {
		assert!(TypeRestriction::Any.admits(ObjectKind::Room));
		assert!(!TypeRestriction::Any.admits(ObjectKind::Garbage));
		assert!(TypeRestriction::Only(ObjectKind::Player).admits(ObjectKind::Player));
		assert!(!TypeRestriction::Only(ObjectKind::Player).admits(ObjectKind::Room));
		assert!(!TypeRestriction::Only(ObjectKind::Garbage).admits(ObjectKind::Garbage));
		assert_eq!(TypeRestriction::Only(ObjectKind::Program).as_str(), "program");
	}

	#[test]
	fn test_restriction_tags_are_known() {
		let kinds = [
			ObjectKind::Room,
			ObjectKind::Thing,
			ObjectKind::Exit,
			ObjectKind::Player,
			ObjectKind::Program,
			ObjectKind::Garbage,
		];
		let mut tags: Vec<&str> = kinds.iter().map(|k| TypeRestriction::Only(*k).as_str()).collect();
		tags.push(TypeRestriction::Any.as_str());
		assert!(!tags.contains(&"unknown"));
		assert_eq!(tags.len(), 7);
	}

	#[test]
	fn test_mucker_flag_bits() {
		for level in [
			MuckerLevel::Mortal,
			MuckerLevel::Apprentice,
			MuckerLevel::Journeyman,
			MuckerLevel::Master,
		] {
			assert_eq!(ObjectFlags::for_mucker_level(level).mucker_level(), level);
		}
		assert_eq!((ObjectFlags::SMUCKER | ObjectFlags::MUCKER).mucker_level(), MuckerLevel::Master);
	}
}

// vim: ts=4
