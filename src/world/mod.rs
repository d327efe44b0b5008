mod loader;
mod model;
mod validator;

pub use loader::{WorldError, crash_site_world, load_world_from_file, load_world_from_str};

// Minimal, intentional surface area: re-export only what the engine uses.
pub use model::{Exit, Item, Room, World};
pub use validator::{Severity, ValidationIssue, validate_world, validation_errors};
