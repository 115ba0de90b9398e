//! Flag strings: one character per flag, as used by `pcreate_flags`
//!
//! `0`-`3` give MUCKER levels, letters give object flags:
//!
//! ```text
//! 0 1 2 3 A B C D G H J K L M Q S V X Y O Z
//! ```
//!
//! Letters are case-insensitive. Unknown characters are skipped and `W` is
//! never honored. Flags are only ever added.

use muck_types::object_model::ObjectModel;

use crate::prelude::*;
use crate::registry::TuneRegistry;

/// Flag bits for one flag-string character
pub fn flag_for_char(c: char) -> Option<ObjectFlags> {
	let flag = match c.to_ascii_uppercase() {
		'0' => ObjectFlags::for_mucker_level(MuckerLevel::Mortal),
		'1' => ObjectFlags::for_mucker_level(MuckerLevel::Apprentice),
		'2' => ObjectFlags::for_mucker_level(MuckerLevel::Journeyman),
		'3' => ObjectFlags::for_mucker_level(MuckerLevel::Master),
		'A' => ObjectFlags::ABODE,
		'B' => ObjectFlags::BUILDER,
		'C' => ObjectFlags::CHOWN_OK,
		'D' => ObjectFlags::DARK,
		'G' => ObjectFlags::GUEST,
		'H' => ObjectFlags::HAVEN,
		'J' => ObjectFlags::JUMP_OK,
		'K' => ObjectFlags::KILL_OK,
		'L' => ObjectFlags::LINK_OK,
		'M' => ObjectFlags::MUCKER,
		'Q' => ObjectFlags::QUELL,
		'S' => ObjectFlags::STICKY,
		'V' => ObjectFlags::VEHICLE,
		'X' => ObjectFlags::XFORCIBLE,
		'Y' => ObjectFlags::YIELD,
		'O' => ObjectFlags::OVERT,
		'Z' => ObjectFlags::ZOMBIE,
		// wizard ('W') is never granted through a flag string
		_ => return None,
	};
	Some(flag)
}

/// Union of the flags named by `flag_chars`
pub fn parse_flag_string(flag_chars: &str) -> ObjectFlags {
	flag_chars.chars().filter_map(flag_for_char).fold(ObjectFlags::empty(), |acc, f| acc | f)
}

/// Add the flags named by `flag_chars` to `target`. Returns the bits applied.
pub fn apply_flag_string(
	world: &dyn ObjectModel,
	target: Dbref,
	flag_chars: &str,
) -> MuckResult<ObjectFlags> {
	let flags = parse_flag_string(flag_chars);
	if !flags.is_empty() {
		world.add_flags(target, flags)?;
		debug!("Applied flags {:?} to {}", flags, target);
	}
	Ok(flags)
}

impl TuneRegistry {
	/// Give a newly created player the flags in `pcreate_flags`
	pub fn apply_pcreate_flags(&self, player: Dbref) -> MuckResult<ObjectFlags> {
		let flags = self.get_str("pcreate_flags").unwrap_or_default();
		apply_flag_string(self.world().as_ref(), player, flags)
	}
}


// vim: ts=4
