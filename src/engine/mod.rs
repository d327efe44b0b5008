mod items;
mod movement;
mod output;
mod render;
mod status;

pub use items::{ItemMatch, inventory_line, resolve_item};
pub(crate) use items::transfer_to_inventory;

pub use movement::{DirectionMatch, resolve_direction};
pub use output::{Output, OutputBlock};
pub use render::{describe_room, render_snapshot};

pub use status::{entering_loses, has_all_required_parts, wins_at};
