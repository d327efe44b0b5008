use crate::Snapshot;
use crate::engine::output::Output;

/// Turn a snapshot into printable blocks. Item and exit listings keep the
/// world file's declaration order; nothing here is sorted.
pub fn render_snapshot(out: &mut Output, snap: &Snapshot) {
    out.heading(snap.room_name.clone());
    out.prose(snap.room_description.clone());

    if !snap.visible_items.is_empty() {
        out.prose(format!("You see: {}.", snap.visible_items.join(", ")));
    }

    if let Some(msg) = &snap.message {
        out.event(msg.clone());
    }

    out.exit_list(snap.available_exits.clone());
}

/// Plain-text room description for headless consumers: name, description,
/// present items, exit labels, one per line, in declaration order.
pub fn describe_room(snap: &Snapshot) -> String {
    let mut text = String::new();
    text.push_str(&snap.room_name);
    text.push('\n');
    text.push_str(&snap.room_description);
    text.push('\n');

    if !snap.visible_items.is_empty() {
        text.push_str(&format!("You see: {}.\n", snap.visible_items.join(", ")));
    }

    if snap.available_exits.is_empty() {
        text.push_str("Exits: (none)");
    } else {
        text.push_str(&format!("Exits: {}.", snap.available_exits.join(", ")));
    }

    text
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Status;
    use crate::engine::output::OutputBlock;

    fn snapshot() -> Snapshot {
        Snapshot {
            room_name: "Forest".into(),
            room_description: "Tall trees surround you.".into(),
            visible_items: vec!["Engine Part".into()],
            available_exits: vec!["south".into(), "east".into()],
            inventory: Vec::new(),
            status: Status::Ongoing,
            message: None,
        }
    }

    #[test]
    fn render_keeps_exit_declaration_order() {
        let mut out = Output::new();
        render_snapshot(&mut out, &snapshot());

        let exits = out
            .blocks
            .iter()
            .find_map(|b| match b {
                OutputBlock::ExitList(labels) => Some(labels.clone()),
                _ => None,
            })
            .unwrap();
        // "south" was declared first; alphabetical would put "east" first.
        assert_eq!(exits, vec!["south".to_string(), "east".to_string()]);
    }

    #[test]
    fn describe_room_lists_everything() {
        let text = describe_room(&snapshot());
        assert_eq!(
            text,
            "Forest\nTall trees surround you.\nYou see: Engine Part.\nExits: south, east."
        );
    }

    #[test]
    fn empty_room_omits_the_item_line() {
        let mut snap = snapshot();
        snap.visible_items.clear();
        snap.available_exits.clear();
        assert_eq!(
            describe_room(&snap),
            "Forest\nTall trees surround you.\nExits: (none)"
        );
    }
}
