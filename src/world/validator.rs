use std::collections::HashSet;

use super::model::World;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// The world must not be played; the graph or rule set is broken.
    Error,
    /// Suspicious but playable, e.g. an exit with no registered return path.
    Warning,
}

#[derive(Debug, Clone)]
pub struct ValidationIssue {
    pub severity: Severity,
    pub message: String,
}

impl ValidationIssue {
    fn error(msg: impl Into<String>) -> Self {
        ValidationIssue {
            severity: Severity::Error,
            message: msg.into(),
        }
    }

    fn warning(msg: impl Into<String>) -> Self {
        ValidationIssue {
            severity: Severity::Warning,
            message: msg.into(),
        }
    }
}

/// Construction-time checks on a loaded world. Errors cover everything the
/// engine assumes afterwards: every exit resolves, the designated rooms
/// exist, every item sits in a real room, and each required part names a
/// placed item. Missing reverse exits are flagged as warnings only; exits
/// are one-directional by design and an asymmetric graph can be intentional.
pub fn validate_world(world: &World) -> Vec<ValidationIssue> {
    let mut issues: Vec<ValidationIssue> = Vec::new();

    if world.rooms.is_empty() {
        issues.push(ValidationIssue::error("world has no rooms"));
    }

    if !world.rooms.contains_key(&world.start_room) {
        issues.push(ValidationIssue::error(format!(
            "start_room '{}' not found among rooms",
            world.start_room
        )));
    }

    if !world.rooms.contains_key(&world.win_room) {
        issues.push(ValidationIssue::error(format!(
            "win_room '{}' not found among rooms",
            world.win_room
        )));
    }

    if let Some(gated) = &world.gated_room {
        if !world.rooms.contains_key(gated) {
            issues.push(ValidationIssue::error(format!(
                "gated_room '{}' not found among rooms",
                gated
            )));
        }
    }

    // Exits: no dangling targets, no duplicate labels within one room.
    for (room_id, room) in &world.rooms {
        let mut seen_labels: HashSet<&str> = HashSet::new();

        for exit in &room.exits {
            if !world.rooms.contains_key(&exit.target) {
                issues.push(ValidationIssue::error(format!(
                    "room '{}' exit '{}' targets missing room '{}'",
                    room_id, exit.direction, exit.target
                )));
            }

            if !seen_labels.insert(exit.direction.as_str()) {
                issues.push(ValidationIssue::error(format!(
                    "room '{}' declares exit '{}' more than once",
                    room_id, exit.direction
                )));
            }
        }
    }

    // Reverse-path check: for each exit, some exit of the target must lead
    // back. Label symmetry is not required, only reachability back. Edges are
    // kept as a list so every exit is checked individually and warns under its
    // own label, even when two exits of a room point at the same target.
    let edges: Vec<(&str, &str, &str)> = world
        .rooms
        .values()
        .flat_map(|room| {
            room.exits
                .iter()
                .map(move |e| (room.id.as_str(), e.target.as_str(), e.direction.as_str()))
        })
        .collect();
    let connected: HashSet<(&str, &str)> =
        edges.iter().map(|&(from, to, _)| (from, to)).collect();

    for &(from, to, direction) in &edges {
        if world.rooms.contains_key(to) && !connected.contains(&(to, from)) {
            issues.push(ValidationIssue::warning(format!(
                "room '{}' exit '{}' to '{}' has no return path",
                from, direction, to
            )));
        }
    }

    // Item placement
    for item in &world.items {
        if !world.rooms.contains_key(&item.start_room) {
            issues.push(ValidationIssue::error(format!(
                "item '{}' starts in missing room '{}'",
                item.name, item.start_room
            )));
        }
    }

    // Every required part must name a placed item, otherwise the world is
    // unwinnable from the outset.
    for part in &world.required_parts {
        if world.item(part).is_none() {
            issues.push(ValidationIssue::error(format!(
                "required part '{}' names no item placed in the world",
                part
            )));
        }
    }

    issues
}

/// Convenience filter for callers that only reject on hard errors.
pub fn validation_errors(issues: &[ValidationIssue]) -> Vec<&ValidationIssue> {
    issues
        .iter()
        .filter(|i| i.severity == Severity::Error)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::world::model::{Exit, Item, Room, World};
    use std::collections::HashMap;

    fn room(id: &str, exits: Vec<(&str, &str)>) -> Room {
        Room {
            id: id.to_string(),
            name: id.to_uppercase(),
            desc: String::new(),
            exits: exits
                .into_iter()
                .map(|(direction, target)| Exit {
                    direction: direction.to_string(),
                    target: target.to_string(),
                })
                .collect(),
        }
    }

    fn world_with(rooms: Vec<Room>) -> World {
        let rooms: HashMap<String, Room> =
            rooms.into_iter().map(|r| (r.id.clone(), r)).collect();
        World {
            id: "test".into(),
            name: "Test".into(),
            desc: String::new(),
            start_room: "a".into(),
            win_room: "a".into(),
            gated_room: None,
            required_parts: Vec::new(),
            win_text: String::new(),
            lose_text: String::new(),
            rooms,
            items: Vec::new(),
        }
    }

    #[test]
    fn clean_symmetric_world_has_no_issues() {
        let world = world_with(vec![
            room("a", vec![("north", "b")]),
            room("b", vec![("south", "a")]),
        ]);
        assert!(validate_world(&world).is_empty());
    }

    #[test]
    fn dangling_exit_is_an_error() {
        let world = world_with(vec![room("a", vec![("north", "nowhere")])]);
        let issues = validate_world(&world);
        assert_eq!(validation_errors(&issues).len(), 1);
    }

    #[test]
    fn missing_reverse_exit_is_only_a_warning() {
        let world = world_with(vec![
            room("a", vec![("north", "b")]),
            room("b", Vec::new()),
        ]);
        let issues = validate_world(&world);
        assert!(validation_errors(&issues).is_empty());
        assert!(
            issues
                .iter()
                .any(|i| i.severity == Severity::Warning && i.message.contains("no return path"))
        );
    }

    #[test]
    fn reverse_path_may_use_any_label() {
        // "up" answered by "out" still counts as a return path.
        let world = world_with(vec![
            room("a", vec![("up", "b")]),
            room("b", vec![("out", "a")]),
        ]);
        assert!(validate_world(&world).is_empty());
    }

    #[test]
    fn parallel_exits_each_warn_under_their_own_label() {
        // Two labels into the same dead end: both deserve a warning, and
        // each warning names its own label.
        let world = world_with(vec![
            room("a", vec![("north", "b"), ("gate", "b")]),
            room("b", Vec::new()),
        ]);
        let issues = validate_world(&world);
        assert!(validation_errors(&issues).is_empty());
        let warnings: Vec<&str> = issues
            .iter()
            .filter(|i| i.severity == Severity::Warning)
            .map(|i| i.message.as_str())
            .collect();
        assert_eq!(warnings.len(), 2);
        assert!(warnings.iter().any(|m| m.contains("'north'")));
        assert!(warnings.iter().any(|m| m.contains("'gate'")));
    }

    #[test]
    fn duplicate_direction_label_is_an_error() {
        let world = world_with(vec![
            room("a", vec![("north", "b"), ("north", "b")]),
            room("b", vec![("south", "a")]),
        ]);
        let issues = validate_world(&world);
        assert_eq!(validation_errors(&issues).len(), 1);
    }

    #[test]
    fn unplaced_required_part_is_an_error() {
        let mut world = world_with(vec![room("a", Vec::new())]);
        world.required_parts = vec!["Phantom Widget".into()];
        let issues = validate_world(&world);
        assert_eq!(validation_errors(&issues).len(), 1);
    }

    #[test]
    fn item_in_missing_room_is_an_error() {
        let mut world = world_with(vec![room("a", Vec::new())]);
        world.items = vec![Item {
            name: "Widget".into(),
            desc: String::new(),
            start_room: "ghost".into(),
        }];
        let issues = validate_world(&world);
        assert_eq!(validation_errors(&issues).len(), 1);
    }
}
