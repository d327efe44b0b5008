pub enum ItemMatch<'a> {
    None,
    One(&'a str),
    Many(Vec<&'a str>),
}

/// Find the *best* matching item name by counting full-word overlaps, so
/// "take engine" and "take engine part" both land on "Engine Part".
/// - Highest score wins
/// - Ties => Many (ambiguity)
/// - Score 0 => None
///
/// Shell-side convenience only; the engine's `pick_up` takes the exact name.
pub fn resolve_item<'a>(names: &'a [String], query: &str) -> ItemMatch<'a> {
    let query_words: Vec<String> = query
        .split_whitespace()
        .map(|w| w.to_lowercase())
        .collect();

    if query_words.is_empty() {
        return ItemMatch::None;
    }

    // (name, score)
    let mut scored: Vec<(&str, usize)> = Vec::new();

    for name in names {
        let name_words: Vec<String> = name
            .split_whitespace()
            .map(|w| w.to_lowercase())
            .collect();

        let score = query_words
            .iter()
            .filter(|qw| name_words.iter().any(|nw| nw == *qw))
            .count();

        if score > 0 {
            scored.push((name.as_str(), score));
        }
    }

    let Some(max_score) = scored.iter().map(|(_, s)| *s).max() else {
        return ItemMatch::None;
    };

    let best: Vec<&str> = scored
        .into_iter()
        .filter(|(_, s)| *s == max_score)
        .map(|(n, _)| n)
        .collect();

    match best.len() {
        1 => ItemMatch::One(best[0]),
        _ => ItemMatch::Many(best),
    }
}

/// Move one item from a room's list into the inventory. Atomic: the remove
/// and the append happen together or not at all, so the item is never in
/// both places or neither.
pub fn transfer_to_inventory(
    room_items: &mut Vec<String>,
    inventory: &mut Vec<String>,
    name: &str,
) -> bool {
    match room_items.iter().position(|n| n == name) {
        Some(idx) => {
            let item = room_items.remove(idx);
            inventory.push(item);
            true
        }
        None => false,
    }
}

/// Player-facing inventory line. The empty case gets its own sentinel so a
/// renderer never prints a bare "You have:".
pub fn inventory_line(inventory: &[String]) -> String {
    if inventory.is_empty() {
        "You have nothing.".to_string()
    } else {
        format!("You have: {}", inventory.join(", "))
    }
}
