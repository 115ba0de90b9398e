//! Object model and notification collaborator traits
//!
//! Subsystems that validate object references or set flags on objects go
//! through `ObjectModel`; subsystems that report to players go through
//! `Notifier`. `MemWorld` implements both in memory for tools and tests.

use parking_lot::RwLock;
use std::collections::BTreeMap;

use crate::prelude::*;

/// Access to the world database
pub trait ObjectModel: Send + Sync {
	/// Kind of the object, or None if the reference is out of range
	fn kind_of(&self, obj: Dbref) -> Option<ObjectKind>;

	/// Current flags of the object
	fn flags_of(&self, obj: Dbref) -> Option<ObjectFlags>;

	/// Set (never clear) flags on an object
	fn add_flags(&self, obj: Dbref, flags: ObjectFlags) -> MuckResult<()>;

	/// True if `obj` exists, is not garbage and satisfies `allowed`
	fn resolve_and_validate(&self, obj: Dbref, allowed: TypeRestriction) -> bool {
		self.kind_of(obj).is_some_and(|kind| allowed.admits(kind))
	}
}

/// Delivery of text messages to players
pub trait Notifier {
	fn notify(&self, player: Dbref, message: &str);
}

#[derive(Debug, Clone)]
struct MemObject {
	name: String,
	kind: ObjectKind,
	flags: ObjectFlags,
}

/// In-memory world with sequential object numbering and a message log
#[derive(Debug, Default)]
pub struct MemWorld {
	objects: RwLock<BTreeMap<Dbref, MemObject>>,
	messages: RwLock<Vec<(Dbref, String)>>,
}

impl MemWorld {
	pub fn new() -> Self {
		Self::default()
	}

	/// The minimal starting database: #0 the global room, #1 the god player
	pub fn minimal() -> Self {
		let world = Self::new();
		world.create(ObjectKind::Room, "Room Zero");
		world.create(ObjectKind::Player, "One");
		world
	}

	/// Create an object at the next free number
	pub fn create(&self, kind: ObjectKind, name: &str) -> Dbref {
		let mut objects = self.objects.write();
		let next = objects.keys().next_back().map_or(0, |last| last.0 + 1);
		let obj = Dbref(next);
		objects.insert(obj, MemObject { name: name.to_string(), kind, flags: ObjectFlags::empty() });
		debug!("Created {} {} ({})", kind.as_str(), obj, name);
		obj
	}

	/// Turn an object into garbage, keeping its number allocated
	pub fn recycle(&self, obj: Dbref) -> MuckResult<()> {
		let mut objects = self.objects.write();
		let object = objects.get_mut(&obj).ok_or(Error::NotFound)?;
		object.kind = ObjectKind::Garbage;
		object.flags = ObjectFlags::empty();
		debug!("Recycled {} ({})", obj, object.name);
		Ok(())
	}

	/// Messages delivered to `player`, oldest first
	pub fn messages_for(&self, player: Dbref) -> Vec<String> {
		self.messages
			.read()
			.iter()
			.filter(|(to, _)| *to == player)
			.map(|(_, msg)| msg.clone())
			.collect()
	}

	/// Drain the message log
	pub fn take_messages(&self) -> Vec<(Dbref, String)> {
		std::mem::take(&mut *self.messages.write())
	}
}

impl ObjectModel for MemWorld {
	fn kind_of(&self, obj: Dbref) -> Option<ObjectKind> {
		self.objects.read().get(&obj).map(|o| o.kind)
	}

	fn flags_of(&self, obj: Dbref) -> Option<ObjectFlags> {
		self.objects.read().get(&obj).map(|o| o.flags)
	}

	fn add_flags(&self, obj: Dbref, flags: ObjectFlags) -> MuckResult<()> {
		let mut objects = self.objects.write();
		let object = objects.get_mut(&obj).ok_or(Error::NotFound)?;
		if object.kind == ObjectKind::Garbage {
			return Err(Error::ValidationError(format!("{} is garbage", obj)));
		}
		object.flags |= flags;
		Ok(())
	}
}

impl Notifier for MemWorld {
	fn notify(&self, player: Dbref, message: &str) {
		self.messages.write().push((player, message.to_string()));
	}
}


// vim: ts=4
