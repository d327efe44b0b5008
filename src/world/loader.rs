use serde::Deserialize;
use std::collections::HashMap;
use std::fs;
use std::path::Path;

use thiserror::Error;

use super::model::{Exit, Item, Room, World};

#[derive(Debug, Error)]
pub enum WorldError {
    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("world file is not valid TOML: {0}")]
    Parse(#[from] toml::de::Error),

    /// Structural problem in an otherwise well-formed file (duplicate ids,
    /// empty names, broken graph references).
    #[error("invalid world: {0}")]
    Invalid(String),
}

////////////////////
/// TOML STRUCTS ///
////////////////////

#[derive(Deserialize)]
struct WorldFile {
    world: WorldHeader,
    #[serde(default)]
    room: Vec<RoomConfig>, // [[room]] blocks
    #[serde(default)]
    item: Vec<ItemConfig>, // [[item]] blocks
}

#[derive(Deserialize)]
struct WorldHeader {
    id: String,
    name: String,
    start_room: String,
    win_room: String,
    #[serde(default)]
    gated_room: Option<String>,
    #[serde(default)]
    required_parts: Vec<String>,
    #[serde(default)]
    desc: String,
    #[serde(default)]
    win_text: String,
    #[serde(default)]
    lose_text: String,
}

#[derive(Deserialize)]
struct RoomConfig {
    id: String,
    name: String,
    #[serde(default)]
    desc: String,

    #[serde(default)]
    exit: Vec<ExitConfig>, // [[room.exit]]
}

#[derive(Deserialize)]
struct ExitConfig {
    direction: String,
    target: String,
}

#[derive(Deserialize)]
struct ItemConfig {
    name: String,
    #[serde(default)]
    desc: String,
    /// Room the item starts in.
    room: String,
}

/////////////////////////////
/// TOML PARSER FUNCTIONS ///
/////////////////////////////

/// Public API: load a world from a .toml file on disk.
pub fn load_world_from_file(path: &Path) -> Result<World, WorldError> {
    let contents = fs::read_to_string(path)?;
    load_world_from_str(&contents)
}

/// Public API: load a world from TOML source held in memory.
pub fn load_world_from_str(contents: &str) -> Result<World, WorldError> {
    let world_file: WorldFile = toml::from_str(contents)?;

    if world_file.world.id.trim().is_empty() {
        return Err(WorldError::Invalid("world.id may not be empty".into()));
    }
    if world_file.world.start_room.trim().is_empty() {
        return Err(WorldError::Invalid(
            "world.start_room may not be empty".into(),
        ));
    }
    if world_file.world.win_room.trim().is_empty() {
        return Err(WorldError::Invalid(
            "world.win_room may not be empty".into(),
        ));
    }

    // Build rooms map
    let mut rooms_map: HashMap<String, Room> = HashMap::new();

    for room_cfg in world_file.room {
        if rooms_map.contains_key(&room_cfg.id) {
            return Err(WorldError::Invalid(format!(
                "duplicate room id: {}",
                room_cfg.id
            )));
        }

        let exits = room_cfg
            .exit
            .into_iter()
            .map(|e| Exit {
                direction: e.direction,
                target: e.target,
            })
            .collect();

        rooms_map.insert(
            room_cfg.id.clone(),
            Room {
                id: room_cfg.id,
                name: room_cfg.name,
                desc: normalize_multiline_desc(&room_cfg.desc),
                exits,
            },
        );
    }

    // Build items in declaration order; names are the identity key.
    let mut items: Vec<Item> = Vec::new();

    for ic in world_file.item {
        if ic.name.trim().is_empty() {
            return Err(WorldError::Invalid("item with an empty name".into()));
        }
        if items.iter().any(|i| i.name == ic.name) {
            return Err(WorldError::Invalid(format!(
                "duplicate item name: {}",
                ic.name
            )));
        }
        if ic.room.trim().is_empty() {
            return Err(WorldError::Invalid(format!(
                "item '{}' has an empty start room",
                ic.name
            )));
        }

        items.push(Item {
            name: ic.name,
            desc: normalize_multiline_desc(&ic.desc),
            start_room: ic.room,
        });
    }

    Ok(World {
        id: world_file.world.id,
        name: world_file.world.name,
        desc: normalize_multiline_desc(&world_file.world.desc),
        start_room: world_file.world.start_room,
        win_room: world_file.world.win_room,
        gated_room: world_file.world.gated_room,
        required_parts: world_file.world.required_parts,
        win_text: normalize_multiline_desc(&world_file.world.win_text),
        lose_text: normalize_multiline_desc(&world_file.world.lose_text),
        rooms: rooms_map,
        items,
    })
}

/// The world this crate ships with: the crash-landing scenario. Compiled in
/// so the binary and the wasm surface work without a file on disk.
pub fn crash_site_world() -> World {
    // Bundled asset; parsing it is covered by the loader tests.
    load_world_from_str(include_str!("../../worlds/crash_site.toml"))
        .expect("bundled crash_site.toml must parse")
}

/// Collapse a TOML multiline string into display text. Lines are trimmed so
/// indentation never leaks to the player; a line wrap joins with a space,
/// one blank line keeps a single break, a wider gap becomes a paragraph
/// break.
fn normalize_multiline_desc(raw: &str) -> String {
    let mut text = String::new();
    let mut gap = 0usize;

    for line in raw.lines().map(str::trim) {
        if line.is_empty() {
            gap += 1;
            continue;
        }

        if !text.is_empty() {
            match gap {
                0 => text.push(' '),
                1 => text.push('\n'),
                _ => text.push_str("\n\n"),
            }
        }
        text.push_str(line);
        gap = 0;
    }

    text
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn loads_minimal_world() {
        let toml = r#"
            [world]
            id = "mini"
            name = "Mini"
            start_room = "a"
            win_room = "a"

            [[room]]
            id = "a"
            name = "A"
            desc = "Just a room."
        "#;

        let world = load_world_from_str(toml).unwrap();
        assert_eq!(world.id, "mini");
        assert_eq!(world.start_room, "a");
        assert!(world.gated_room.is_none());
        assert!(world.required_parts.is_empty());
    }

    #[test]
    fn rejects_duplicate_room_ids() {
        let toml = r#"
            [world]
            id = "dup"
            name = "Dup"
            start_room = "a"
            win_room = "a"

            [[room]]
            id = "a"
            name = "A"

            [[room]]
            id = "a"
            name = "A again"
        "#;

        let err = load_world_from_str(toml).unwrap_err();
        assert!(matches!(err, WorldError::Invalid(_)));
    }

    #[test]
    fn rejects_duplicate_item_names() {
        let toml = r#"
            [world]
            id = "dup"
            name = "Dup"
            start_room = "a"
            win_room = "a"

            [[room]]
            id = "a"
            name = "A"

            [[item]]
            name = "Widget"
            room = "a"

            [[item]]
            name = "Widget"
            room = "a"
        "#;

        let err = load_world_from_str(toml).unwrap_err();
        assert!(matches!(err, WorldError::Invalid(_)));
    }

    #[test]
    fn normalizes_wrapped_description_lines() {
        let toml = r#"
            [world]
            id = "wrap"
            name = "Wrap"
            start_room = "a"
            win_room = "a"

            [[room]]
            id = "a"
            name = "A"
            desc = """
                Tall trees surround you.
                You hear strange noises.

                A path leads south.
            """
        "#;

        let world = load_world_from_str(toml).unwrap();
        let room = &world.rooms["a"];
        assert_eq!(
            room.desc,
            "Tall trees surround you. You hear strange noises.\nA path leads south."
        );
    }

    #[test]
    fn bundled_world_parses() {
        let world = crash_site_world();
        assert_eq!(world.start_room, "crash_site");
        assert_eq!(world.win_room, "crash_site");
        assert_eq!(world.gated_room.as_deref(), Some("lab"));
        assert_eq!(world.required_parts.len(), 3);
        assert_eq!(world.rooms.len(), 5);
        assert_eq!(world.items.len(), 3);
    }
}
