use std::env;
use std::io::{self, Write};
use std::path::PathBuf;

use marooned::engine::{self, DirectionMatch, ItemMatch, Output, OutputBlock};
use marooned::{CommandError, GameEngine, Snapshot, Status, crash_site_world, load_world_from_file};

fn flush_output(out: Output) {
    let mut printed_anything = false;
    let mut started_events = false;

    for block in out.blocks {
        match block {
            OutputBlock::Heading(t) => {
                println!("\n{}", t);
                printed_anything = true;
            }
            OutputBlock::Prose(line) => {
                println!("{}", line);
                printed_anything = true;
            }
            OutputBlock::Event(ev) => {
                if !started_events {
                    if printed_anything {
                        println!(); // visual separation before first event
                    }
                    started_events = true;
                }
                println!("{}", ev);
                printed_anything = true;
            }
            OutputBlock::ExitList(labels) => {
                if labels.is_empty() {
                    println!("\nExits: (none)");
                } else {
                    println!("\nExits: {}", labels.join(", "));
                }
                printed_anything = true;
            }
        }
    }
}

fn init_tracing() {
    use tracing_subscriber::EnvFilter;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_target(false)
        .with_writer(io::stderr)
        .init();
}

/// Render a command result, phrasing rejections the way the player expects.
fn report(out: &mut Output, game: &GameEngine, result: Result<Snapshot, CommandError>) {
    match result {
        Ok(snap) => {
            match snap.status {
                Status::Ongoing => engine::render_snapshot(out, &snap),
                Status::Won => {
                    if let Some(msg) = &snap.message {
                        out.event(msg.clone());
                    }
                    out.event("Type 'restart' to play again, or 'quit' to leave.");
                }
                Status::Lost => {
                    if let Some(msg) = &snap.message {
                        out.event(msg.clone());
                    }
                    if let Some(gated) = game.gated_room_name() {
                        out.prose(format!("The {} was no place for you.", gated));
                    }
                    out.event("Type 'restart' to try again, or 'quit' to leave.");
                }
            }
        }
        Err(CommandError::InvalidDirection(_)) => out.prose("You can't go that way!"),
        Err(CommandError::ItemNotPresent(name)) => {
            out.prose(format!("You don't see any {} here.", name))
        }
        Err(CommandError::SessionOver(_)) => {
            out.prose("The game is over. Type 'restart' to play again, or 'quit' to leave.")
        }
    }
}

fn main() -> io::Result<()> {
    init_tracing();

    let world = match env::args().nth(1).map(PathBuf::from) {
        Some(path) => match load_world_from_file(&path) {
            Ok(w) => {
                println!("Using world file: {}", path.display());
                w
            }
            Err(e) => {
                eprintln!("Failed to load world file '{}': {e}", path.display());
                std::process::exit(1);
            }
        },
        None => crash_site_world(),
    };

    let mut game = match GameEngine::new(world) {
        Ok(engine) => engine,
        Err(e) => {
            eprintln!("World rejected: {e}");
            std::process::exit(1);
        }
    };

    println!("Welcome to {}!", game.world().name);
    if !game.world().desc.trim().is_empty() {
        println!("{}", game.world().desc.trim());
    }
    println!();
    println!("Type 'look' to look around, 'quit' to exit.\n");

    {
        let mut out = Output::new();
        engine::render_snapshot(&mut out, &game.snapshot());
        flush_output(out);
    }

    let stdin = io::stdin();

    loop {
        print!("> ");
        io::stdout().flush()?;

        let mut input = String::new();
        let bytes_read = stdin.read_line(&mut input)?;
        if bytes_read == 0 {
            println!("\nGoodbye.");
            break;
        }

        let input = input.trim();
        if input.is_empty() {
            continue;
        }

        let mut out = Output::new();
        let lower = input.to_lowercase();
        let mut quit = false;

        if lower == "quit" || lower == "exit" {
            out.prose("Goodbye.");
            quit = true;
        } else if lower == "inventory" || lower == "i" {
            out.prose(engine::inventory_line(&game.snapshot().inventory));
        } else if lower == "look" || lower == "l" {
            engine::render_snapshot(&mut out, &game.snapshot());
        } else if lower == "restart" {
            game.reset();
            out.event("You start over.");
            engine::render_snapshot(&mut out, &game.snapshot());
        } else {
            let mut parts = lower.split_whitespace();
            let verb = parts.next().unwrap_or("");
            let mut rest = parts.collect::<Vec<&str>>().join(" ");

            // "pick up X" reads like a single verb
            if verb == "pick" && rest.starts_with("up ") {
                rest = rest.trim_start_matches("up").trim().to_string();
            }

            if verb == "take" || verb == "get" || verb == "pick" {
                if rest.is_empty() {
                    out.prose("Take what?");
                } else {
                    let snap = game.snapshot();
                    match engine::resolve_item(&snap.visible_items, &rest) {
                        ItemMatch::One(name) => {
                            let name = name.to_string();
                            let result = game.pick_up(&name);
                            report(&mut out, &game, result);
                        }
                        ItemMatch::Many(best) => out.prose(format!(
                            "Which do you mean: {}?",
                            best.join(", ")
                        )),
                        // Let the engine produce the rejection.
                        ItemMatch::None => {
                            let result = game.pick_up(&rest);
                            report(&mut out, &game, result);
                        }
                    }
                }
            } else {
                // Movement: "go <dir>", a bare direction, or an abbreviation.
                let query = if verb == "go" { rest } else { lower.clone() };

                if query.is_empty() {
                    out.prose("Go where?");
                } else {
                    let snap = game.snapshot();
                    match engine::resolve_direction(&snap.available_exits, &query) {
                        DirectionMatch::One(label) => {
                            let label = label.to_string();
                            let result = game.go(&label);
                            report(&mut out, &game, result);
                        }
                        DirectionMatch::Ambiguous(matched) => out.prose(format!(
                            "That direction is ambiguous here. Did you mean: {}?",
                            matched.join(", ")
                        )),
                        DirectionMatch::None => {
                            if verb == "go" {
                                // Let the engine produce the rejection.
                                let result = game.go(&query);
                                report(&mut out, &game, result);
                            } else {
                                out.prose("I don't understand that command.");
                            }
                        }
                    }
                }
            }
        }

        flush_output(out);

        if quit {
            break;
        }
    }

    Ok(())
}
