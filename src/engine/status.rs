use crate::world::World;

/// True iff every required part is held, compared by exact name.
pub fn has_all_required_parts(required: &[String], inventory: &[String]) -> bool {
    required
        .iter()
        .all(|part| inventory.iter().any(|held| held == part))
}

/// Pure lose predicate: entering `target` ends the session when it is the
/// gated room and parts are still missing. Evaluated by the engine on every
/// move; exposed separately so worlds can be probed without mutating state.
pub fn entering_loses(world: &World, inventory: &[String], target: &str) -> bool {
    world.gated_room.as_deref() == Some(target)
        && !has_all_required_parts(&world.required_parts, inventory)
}

/// Pure win predicate: standing in the win room with every required part.
pub fn wins_at(world: &World, inventory: &[String], room_id: &str) -> bool {
    room_id == world.win_room && has_all_required_parts(&world.required_parts, inventory)
}
