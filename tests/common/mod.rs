//! Shared helpers for integration tests

#![allow(dead_code)]

use std::io::Cursor;
use std::sync::Once;

use team_builder::catalog::{Catalog, Creature, CreatureType};
use team_builder::cli::repl::MenuController;
use team_builder::engine::Backend;

/// Initialize logging for tests (only once per test run)
static INIT: Once = Once::new();

pub fn init_test_logging() {
    INIT.call_once(|| {
        use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

        let _ = tracing_subscriber::registry()
            .with(
                tracing_subscriber::fmt::layer()
                    .with_test_writer()
                    .with_target(true)
                    .with_level(true),
            )
            .with(tracing_subscriber::filter::EnvFilter::from_default_env())
            .try_init();
    });
}

/// Catalog of `count` generation-1 creatures named Mon01, Mon02, ...
///
/// Types cycle through Water, Fire and Grass/Poison so filters have
/// something to bite on.
pub fn numbered_catalog(count: usize) -> Catalog {
    Catalog::from_creatures((1..=count).map(|i| {
        let (one, two) = match i % 3 {
            0 => (CreatureType::Grass, Some(CreatureType::Poison)),
            1 => (CreatureType::Water, None),
            _ => (CreatureType::Fire, None),
        };
        Creature::new(format!("Mon{:02}", i), one, two, 1, i as u32)
    }))
}

pub type ScriptedController = MenuController<Cursor<Vec<u8>>, Vec<u8>>;

/// Controller whose input is the given lines and whose output is captured
pub fn scripted_controller(backend: Backend, lines: &[&str]) -> ScriptedController {
    let mut input = lines.join("\n");
    input.push('\n');
    MenuController::new(backend, Cursor::new(input.into_bytes()), Vec::new())
}

/// Run a whole session over the given input lines, returning the final
/// backend and everything printed
pub fn run_script(backend: Backend, lines: &[&str]) -> (Backend, String) {
    init_test_logging();
    let mut controller = scripted_controller(backend, lines);
    controller.run().expect("session should not fail");
    let (backend, output) = controller.into_parts();
    (backend, String::from_utf8(output).expect("output is utf-8"))
}

/// Controller with no input, driven by calling `handle_token` directly
pub fn manual_controller(backend: Backend) -> ScriptedController {
    init_test_logging();
    MenuController::new(backend, Cursor::new(Vec::new()), Vec::new())
}

pub fn captured(controller: &ScriptedController) -> String {
    String::from_utf8_lossy(controller.output()).into_owned()
}

pub fn roster_names(backend: &Backend) -> Vec<String> {
    backend
        .roster()
        .members()
        .iter()
        .map(|c| c.name.clone())
        .collect()
}
