pub mod engine;
pub mod world;

use std::collections::HashMap;
use std::fmt;

use serde::Serialize;
use thiserror::Error;
use tracing::debug;

use engine::{has_all_required_parts, wins_at};
use world::{Room, World, validate_world, validation_errors};

pub use world::{WorldError, crash_site_world, load_world_from_file, load_world_from_str};

/// Session status. Monotonic: `Ongoing` can become `Won` or `Lost`, and the
/// terminal states are absorbing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Status {
    Ongoing,
    Won,
    Lost,
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Status::Ongoing => write!(f, "ongoing"),
            Status::Won => write!(f, "won"),
            Status::Lost => write!(f, "lost"),
        }
    }
}

/// Everything a renderer needs for one frame. The renderer must treat this
/// as the single source of truth; it never reaches into the engine.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Snapshot {
    pub room_name: String,
    pub room_description: String,
    /// Names of items present in the current room, declaration order.
    pub visible_items: Vec<String>,
    /// Exit labels from the current room, declaration order.
    pub available_exits: Vec<String>,
    /// Held item names in acquisition order.
    pub inventory: Vec<String>,
    pub status: Status,
    /// Event text produced by the command that yielded this snapshot, if
    /// any: pickup confirmations, win/lose announcements.
    pub message: Option<String>,
}

/// Command rejections. All non-fatal: the engine state is untouched and the
/// caller decides how to phrase them.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CommandError {
    #[error("there is no exit '{0}' from the current room")]
    InvalidDirection(String),

    #[error("there is no item named '{0}' here")]
    ItemNotPresent(String),

    /// Commands after a win or loss are rejected, not silently ignored.
    #[error("the game has already ended: {0}")]
    SessionOver(Status),
}

/// One play session: the immutable world plus the mutable traversal state.
/// Owned by whatever shell drives it; there is no global instance.
pub struct GameEngine {
    world: World,
    current_room: String,
    /// Item names still lying in each room, declaration order.
    room_items: HashMap<String, Vec<String>>,
    /// Acquisition order; items are never dropped once picked up.
    inventory: Vec<String>,
    status: Status,
}

impl GameEngine {
    /// Build an engine for `world`, validating the graph first. Dangling
    /// exits, missing designated rooms, and unplaced required parts reject
    /// the world; asymmetric exits are logged and allowed.
    pub fn new(world: World) -> Result<GameEngine, WorldError> {
        let issues = validate_world(&world);
        let errors = validation_errors(&issues);
        if !errors.is_empty() {
            let joined = errors
                .iter()
                .map(|i| i.message.as_str())
                .collect::<Vec<_>>()
                .join("; ");
            return Err(WorldError::Invalid(joined));
        }
        for issue in &issues {
            tracing::warn!(world = %world.id, "{}", issue.message);
        }

        let mut engine = GameEngine {
            world,
            current_room: String::new(),
            room_items: HashMap::new(),
            inventory: Vec::new(),
            status: Status::Ongoing,
        };
        engine.reset();
        Ok(engine)
    }

    /// Start the session over: player back at the start room, every item
    /// back where the world file placed it, status `Ongoing`.
    pub fn reset(&mut self) {
        self.current_room = self.world.start_room.clone();
        self.inventory.clear();
        self.status = Status::Ongoing;

        self.room_items.clear();
        for item in &self.world.items {
            self.room_items
                .entry(item.start_room.clone())
                .or_default()
                .push(item.name.clone());
        }
    }

    /// Move through the exit labeled exactly `direction`.
    ///
    /// Unknown labels are rejected without state change. Entering the gated
    /// room without every required part loses the session; the player does
    /// not advance into it. Any successful move re-evaluates the win
    /// condition.
    pub fn go(&mut self, direction: &str) -> Result<Snapshot, CommandError> {
        self.ensure_ongoing()?;

        let room = self.current_room();
        let Some(exit) = room.exits.iter().find(|e| e.direction == direction) else {
            return Err(CommandError::InvalidDirection(direction.to_string()));
        };
        let target = exit.target.clone();

        if engine::entering_loses(&self.world, &self.inventory, &target) {
            self.status = Status::Lost;
            debug!(room = %self.current_room, gated = %target, "session lost at gated room");
            let msg = self.world.lose_text.clone();
            return Ok(self.snapshot_with(Some(msg)));
        }

        debug!(from = %self.current_room, to = %target, %direction, "player moved");
        self.current_room = target;

        let msg = if self.check_win_condition() == Status::Won {
            Some(self.world.win_text.clone())
        } else {
            None
        };
        Ok(self.snapshot_with(msg))
    }

    /// Pick up the item named exactly `item_name` from the current room.
    /// The transfer is atomic, and the win condition is re-evaluated
    /// afterwards so collecting the last part inside the win room counts.
    pub fn pick_up(&mut self, item_name: &str) -> Result<Snapshot, CommandError> {
        self.ensure_ongoing()?;

        let room_items = self
            .room_items
            .entry(self.current_room.clone())
            .or_default();
        if !engine::transfer_to_inventory(room_items, &mut self.inventory, item_name) {
            return Err(CommandError::ItemNotPresent(item_name.to_string()));
        }

        debug!(room = %self.current_room, item = %item_name, "item picked up");
        let mut msg = format!("You picked up the {}.", item_name);
        if self.check_win_condition() == Status::Won {
            msg.push(' ');
            msg.push_str(&self.world.win_text);
        }
        Ok(self.snapshot_with(Some(msg)))
    }

    /// Re-evaluate the win condition against the current room and
    /// inventory. Idempotent: a terminal status is never changed.
    pub fn check_win_condition(&mut self) -> Status {
        if self.status == Status::Ongoing
            && wins_at(&self.world, &self.inventory, &self.current_room)
        {
            debug!(room = %self.current_room, "session won");
            self.status = Status::Won;
        }
        self.status
    }

    /// Pure lose predicate: would entering `room_id` right now lose?
    pub fn entering_loses(&self, room_id: &str) -> bool {
        engine::entering_loses(&self.world, &self.inventory, room_id)
    }

    pub fn has_all_required_parts(&self) -> bool {
        has_all_required_parts(&self.world.required_parts, &self.inventory)
    }

    /// Case-sensitive exact-name inventory check.
    pub fn has_item(&self, name: &str) -> bool {
        self.inventory.iter().any(|held| held == name)
    }

    pub fn status(&self) -> Status {
        self.status
    }

    pub fn world(&self) -> &World {
        &self.world
    }

    /// Display name of the gated room, for lose messaging. The player never
    /// stands in it; losing leaves the current room unchanged.
    pub fn gated_room_name(&self) -> Option<&str> {
        let gated = self.world.gated_room.as_deref()?;
        self.world.rooms.get(gated).map(|r| r.name.as_str())
    }

    /// Read-only state snapshot with no event message.
    pub fn snapshot(&self) -> Snapshot {
        self.snapshot_with(None)
    }

    fn snapshot_with(&self, message: Option<String>) -> Snapshot {
        let room = self.current_room();
        Snapshot {
            room_name: room.name.clone(),
            room_description: room.desc.clone(),
            visible_items: self
                .room_items
                .get(&self.current_room)
                .cloned()
                .unwrap_or_default(),
            available_exits: room.exits.iter().map(|e| e.direction.clone()).collect(),
            inventory: self.inventory.clone(),
            status: self.status,
            message,
        }
    }

    fn current_room(&self) -> &Room {
        // The current room id always names a validated room: `new` rejects
        // worlds with a missing start room or dangling exit targets.
        &self.world.rooms[self.current_room.as_str()]
    }

    fn ensure_ongoing(&self) -> Result<(), CommandError> {
        match self.status {
            Status::Ongoing => Ok(()),
            terminal => Err(CommandError::SessionOver(terminal)),
        }
    }
}

#[cfg(feature = "wasm")]
mod wasm_bindings {
    use super::*;
    use serde_wasm_bindgen::to_value;
    use wasm_bindgen::prelude::*;

    #[wasm_bindgen]
    pub struct WasmGame {
        engine: GameEngine,
    }

    #[wasm_bindgen]
    impl WasmGame {
        /// Create a game from a TOML world string; pass an empty string for
        /// the bundled crash-site world.
        #[wasm_bindgen(constructor)]
        pub fn new(world_toml: &str) -> Result<WasmGame, JsValue> {
            let world = if world_toml.trim().is_empty() {
                crash_site_world()
            } else {
                load_world_from_str(world_toml).map_err(|e| JsValue::from_str(&e.to_string()))?
            };
            let engine =
                GameEngine::new(world).map_err(|e| JsValue::from_str(&e.to_string()))?;
            Ok(WasmGame { engine })
        }

        pub fn snapshot(&self) -> JsValue {
            to_value(&self.engine.snapshot()).unwrap_or(JsValue::NULL)
        }

        pub fn go(&mut self, direction: &str) -> JsValue {
            let result = self.engine.go(direction);
            self.outcome(result)
        }

        pub fn pick_up(&mut self, item_name: &str) -> JsValue {
            let result = self.engine.pick_up(item_name);
            self.outcome(result)
        }

        pub fn reset(&mut self) -> JsValue {
            self.engine.reset();
            self.snapshot()
        }
    }

    impl WasmGame {
        /// Rejected commands come back as the unchanged snapshot carrying
        /// the rejection text, so the DOM side renders one shape.
        fn outcome(&self, result: Result<Snapshot, CommandError>) -> JsValue {
            let snap = match result {
                Ok(snap) => snap,
                Err(e) => self.engine.snapshot_with(Some(e.to_string())),
            };
            to_value(&snap).unwrap_or(JsValue::NULL)
        }
    }
}
