use std::collections::HashMap;

/// Runtime world type used by the engine: the complete room graph plus the
/// win/lose rules for a session. Topology is immutable after load; only the
/// engine's per-session item placement moves.
#[derive(Debug)]
pub struct World {
    pub id: String,
    pub name: String,
    pub desc: String,
    pub start_room: String,
    /// Room the player must stand in, holding every required part, to win.
    pub win_room: String,
    /// Entering this room without every required part ends the session as a
    /// loss. Worlds without a gated room cannot be lost.
    pub gated_room: Option<String>,
    /// Item names that must all be held for the win condition. Fixed at load
    /// time and a subset of the items placed in the world.
    pub required_parts: Vec<String>,
    pub win_text: String,
    pub lose_text: String,
    pub rooms: HashMap<String, Room>,
    /// Declaration order from the world file; the engine derives per-room
    /// item lists from this, so "You see:" listings stay deterministic.
    pub items: Vec<Item>,
}

#[derive(Debug)]
pub struct Room {
    pub id: String,
    pub name: String,
    pub desc: String,
    /// Declaration order. Exits are one-directional; a return path exists
    /// only if the world file registers one.
    pub exits: Vec<Exit>,
}

#[derive(Debug)]
pub struct Exit {
    pub direction: String,
    pub target: String,
}

/// A collectible. The display name is the canonical identity key, compared
/// exactly and case-sensitively; no world ships two items with one name.
#[derive(Clone, Debug)]
pub struct Item {
    pub name: String,
    pub desc: String,
    /// Room the item sits in when a session begins.
    pub start_room: String,
}

impl Room {
    /// Register a one-directional exit. The reverse path must be connected
    /// explicitly; the validator warns about rooms that forget one.
    pub fn connect(&mut self, direction: impl Into<String>, target: impl Into<String>) {
        self.exits.push(Exit {
            direction: direction.into(),
            target: target.into(),
        });
    }
}

impl World {
    pub fn item(&self, name: &str) -> Option<&Item> {
        self.items.iter().find(|i| i.name == name)
    }
}
