//! Interactive menu loop
//!
//! One token is read per iteration and mapped to exactly one command of the
//! current menu. Invalid input never ends the session: the controller prints
//! a message and renders the same menu again.

pub mod app;
pub mod command;
pub mod screens;
pub mod state;

pub use app::MenuController;
pub use state::{MenuState, StateTransition};

use std::io::{self, BufRead, Write};

use crate::engine::Backend;
use crate::Result;

/// Run a session over the given streams until the user quits or input ends
pub fn run<R: BufRead, W: Write>(backend: Backend, input: R, output: W) -> Result<Backend> {
    let mut controller = MenuController::new(backend, input, output);
    controller.run()?;
    let (backend, _) = controller.into_parts();
    Ok(backend)
}

/// Run a session on the process's standard input and output
pub fn run_stdio(backend: Backend) -> Result<Backend> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    run(backend, stdin.lock(), stdout.lock())
}
