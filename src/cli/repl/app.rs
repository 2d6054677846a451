use std::io::{BufRead, Write};
use std::sync::Arc;
use tracing::{debug, info, warn};

use super::command::{
    BrowseCommand, GenerationFilterCommand, MainCommand, TeamCommand, TypeFilterCommand,
};
use super::screens::{self, INVALID_RESPONSE};
use super::state::{MenuState, StateTransition};
use crate::catalog::Creature;
use crate::engine::{Backend, Pagination, MAX_TEAM_SIZE};
use crate::error::TeamBuilderError;
use crate::Result;

/// Visible set captured by the last browse render
#[derive(Debug)]
struct BrowseSnapshot {
    page: usize,
    /// Catalog positions of visible creatures, in catalog order
    visible: Vec<usize>,
    pagination: Pagination,
}

/// Drives the read-eval-print loop over a `Backend`.
///
/// Owns no filtering or team logic itself: it renders the current state,
/// reads one token, dispatches it to exactly one handler and applies the
/// resulting transition.
pub struct MenuController<R, W> {
    backend: Backend,
    state: MenuState,
    snapshot: Option<BrowseSnapshot>,
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> MenuController<R, W> {
    pub fn new(backend: Backend, input: R, output: W) -> Self {
        Self {
            backend,
            state: MenuState::default(),
            snapshot: None,
            input,
            output,
        }
    }

    pub fn state(&self) -> MenuState {
        self.state
    }

    pub fn backend(&self) -> &Backend {
        &self.backend
    }

    pub fn output(&self) -> &W {
        &self.output
    }

    /// Tear down the controller, returning the session state and output sink
    pub fn into_parts(self) -> (Backend, W) {
        (self.backend, self.output)
    }

    /// Run until the user quits from the main menu or input ends
    pub fn run(&mut self) -> Result<()> {
        screens::banner(&mut self.output)?;

        let mut buf = Vec::new();
        loop {
            self.render()?;

            buf.clear();
            if self.input.read_until(b'\n', &mut buf)? == 0 {
                info!(state = self.state.name(), "Input closed, ending session");
                writeln!(self.output)?;
                return Ok(());
            }

            // Undecodable bytes become U+FFFD and fall through to the invalid response
            let line = String::from_utf8_lossy(&buf);
            if self.handle_token(&line)? == StateTransition::Exit {
                info!("Session ended by user");
                return Ok(());
            }
        }
    }

    /// Render the current state
    pub fn render(&mut self) -> Result<()> {
        match self.state {
            MenuState::MainMenu => screens::main_menu(&mut self.output)?,
            MenuState::BrowsePage(page) => {
                let snapshot = self.take_snapshot(page);
                let catalog = self.backend.catalog();
                let rows = snapshot.visible[snapshot.pagination.page_range(page)]
                    .iter()
                    .zip(snapshot.pagination.page_range(page).start + 1..)
                    .filter_map(|(position, number)| {
                        catalog.get(*position).map(|c| (number, &**c))
                    });
                screens::browse_page(&mut self.output, page, &snapshot.pagination, rows)?;
                self.snapshot = Some(snapshot);
            }
            MenuState::TypeFilterMenu => {
                screens::type_filters(&mut self.output, self.backend.filters())?
            }
            MenuState::GenerationFilterMenu => {
                screens::generation_filters(&mut self.output, self.backend.filters())?
            }
            MenuState::TeamView => screens::team(&mut self.output, self.backend.roster())?,
        }
        Ok(())
    }

    /// Handle one input token in the current state and apply the transition.
    ///
    /// Invalid input prints a message and leaves the state unchanged. Only
    /// write failures on the output are returned as errors.
    pub fn handle_token(&mut self, token: &str) -> Result<StateTransition> {
        let token = token.trim();
        debug!(state = self.state.name(), token, "Handling input");

        let transition = match self.state {
            MenuState::MainMenu => self.handle_main_menu(token)?,
            MenuState::BrowsePage(page) => self.handle_browse(page, token)?,
            MenuState::TypeFilterMenu => self.handle_type_filter(token)?,
            MenuState::GenerationFilterMenu => self.handle_generation_filter(token)?,
            MenuState::TeamView => self.handle_team(token)?,
        };

        if transition == StateTransition::Exit && !self.state.can_exit() {
            warn!(state = self.state.name(), "Exit requested outside the main menu");
            return self.reject(token, INVALID_RESPONSE);
        }

        if let StateTransition::Goto(next) = transition {
            debug!(from = self.state.name(), to = next.name(), "State transition");
            if !matches!(next, MenuState::BrowsePage(_)) {
                self.snapshot = None;
            }
            self.state = next;
        }
        Ok(transition)
    }

    fn reject(&mut self, token: &str, message: &str) -> Result<StateTransition> {
        debug!(state = self.state.name(), token, message, "Rejected input");
        screens::notice(&mut self.output, message)?;
        Ok(StateTransition::Stay)
    }

    fn handle_main_menu(&mut self, token: &str) -> Result<StateTransition> {
        let Some(command) = MainCommand::parse(token) else {
            return self.reject(token, INVALID_RESPONSE);
        };
        Ok(match command {
            MainCommand::Browse => StateTransition::Goto(MenuState::BrowsePage(0)),
            MainCommand::FilterTypes => StateTransition::Goto(MenuState::TypeFilterMenu),
            MainCommand::FilterGenerations => {
                StateTransition::Goto(MenuState::GenerationFilterMenu)
            }
            MainCommand::ShowTeam => StateTransition::Goto(MenuState::TeamView),
            MainCommand::Quit => StateTransition::Exit,
        })
    }

    fn handle_browse(&mut self, page: usize, token: &str) -> Result<StateTransition> {
        let Some(command) = BrowseCommand::parse(token) else {
            return self.reject(token, INVALID_RESPONSE);
        };

        // Resolve against what was last shown on this page
        let snapshot = match self.snapshot.take() {
            Some(snapshot) if snapshot.page == page => snapshot,
            _ => self.take_snapshot(page),
        };
        let pagination = snapshot.pagination;

        match command {
            BrowseCommand::Next if pagination.has_next(page) => {
                Ok(StateTransition::Goto(MenuState::BrowsePage(page + 1)))
            }
            BrowseCommand::Next => self.reject(token, "There is no next page"),
            BrowseCommand::Previous if pagination.has_previous(page) => {
                Ok(StateTransition::Goto(MenuState::BrowsePage(page - 1)))
            }
            BrowseCommand::Previous => self.reject(token, "There is no previous page"),
            BrowseCommand::Back => Ok(StateTransition::Goto(MenuState::MainMenu)),
            BrowseCommand::Select(number) => {
                let creature = pagination
                    .resolve_selection(page, number)
                    .and_then(|index| snapshot.visible.get(index))
                    .and_then(|position| self.backend.catalog().get(*position))
                    .map(Arc::clone);
                match creature {
                    Some(creature) => self.add_to_team(token, creature),
                    None => self.reject(token, INVALID_RESPONSE),
                }
            }
        }
    }

    fn add_to_team(&mut self, token: &str, creature: Arc<Creature>) -> Result<StateTransition> {
        let name = creature.name.clone();
        match self.backend.roster_mut().add_member(creature) {
            Ok(()) => {
                let message = format!(
                    "Added {} to the team ({}/{})",
                    name,
                    self.backend.roster().len(),
                    MAX_TEAM_SIZE
                );
                screens::notice(&mut self.output, &message)?;
                Ok(StateTransition::Stay)
            }
            Err(TeamBuilderError::TeamFull { capacity }) => {
                let message = format!(
                    "Max team size reached ({}), {} was not added",
                    capacity, name
                );
                self.reject(token, &message)
            }
            Err(e) => {
                warn!(error = %e, "Unexpected roster error");
                self.reject(token, INVALID_RESPONSE)
            }
        }
    }

    fn handle_type_filter(&mut self, token: &str) -> Result<StateTransition> {
        let Some(command) = TypeFilterCommand::parse(token) else {
            return self.reject(token, INVALID_RESPONSE);
        };
        match command {
            TypeFilterCommand::Toggle(creature_type) => {
                if let Err(e) = self.backend.filters_mut().toggle_type(creature_type) {
                    warn!(error = %e, "Type filter is missing an entry");
                    return self.reject(token, INVALID_RESPONSE);
                }
                Ok(StateTransition::Stay)
            }
            TypeFilterCommand::Reset => {
                self.backend.filters_mut().reset_type_filter();
                Ok(StateTransition::Stay)
            }
            TypeFilterCommand::Back => Ok(StateTransition::Goto(MenuState::MainMenu)),
        }
    }

    fn handle_generation_filter(&mut self, token: &str) -> Result<StateTransition> {
        let Some(command) = GenerationFilterCommand::parse(token) else {
            return self.reject(token, INVALID_RESPONSE);
        };
        match command {
            GenerationFilterCommand::Toggle(generation) => {
                if let Err(e) = self.backend.filters_mut().toggle_generation(generation) {
                    warn!(error = %e, "Generation filter is missing an entry");
                    return self.reject(token, INVALID_RESPONSE);
                }
                Ok(StateTransition::Stay)
            }
            GenerationFilterCommand::Reset => {
                self.backend.filters_mut().reset_generation_filter();
                Ok(StateTransition::Stay)
            }
            GenerationFilterCommand::Back => Ok(StateTransition::Goto(MenuState::MainMenu)),
        }
    }

    fn handle_team(&mut self, token: &str) -> Result<StateTransition> {
        let command = TeamCommand::parse(token);
        if self.backend.roster().is_empty() {
            // An empty team only offers the way back
            return match command {
                Some(TeamCommand::Back) => Ok(StateTransition::Goto(MenuState::MainMenu)),
                _ => self.reject(token, INVALID_RESPONSE),
            };
        }

        match command {
            Some(TeamCommand::Remove(number)) => {
                match self.backend.roster_mut().remove_member(number - 1) {
                    Ok(removed) => {
                        let message = format!("Removed {} from the team", removed.name);
                        screens::notice(&mut self.output, &message)?;
                        Ok(StateTransition::Stay)
                    }
                    Err(_) => self.reject(token, INVALID_RESPONSE),
                }
            }
            Some(TeamCommand::Back) => Ok(StateTransition::Goto(MenuState::MainMenu)),
            None => self.reject(token, INVALID_RESPONSE),
        }
    }

    /// Evaluate the visible set once for a render of `page`
    fn take_snapshot(&self, page: usize) -> BrowseSnapshot {
        let visible = self.backend.search_positions();
        let pagination = Pagination::new(visible.len());
        BrowseSnapshot {
            page,
            visible,
            pagination,
        }
    }
}
