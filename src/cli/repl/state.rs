/// Menu state machine for the interactive loop
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MenuState {
    #[default]
    MainMenu,
    /// Zero-based page into the visible set
    BrowsePage(usize),
    TypeFilterMenu,
    GenerationFilterMenu,
    TeamView,
}

/// Outcome of handling one input token
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StateTransition {
    /// Re-render the current state
    Stay,
    /// Move to another state
    Goto(MenuState),
    /// End the session
    Exit,
}

impl MenuState {
    /// Get the name of the current state
    pub fn name(&self) -> &'static str {
        match self {
            MenuState::MainMenu => "MainMenu",
            MenuState::BrowsePage(_) => "BrowsePage",
            MenuState::TypeFilterMenu => "TypeFilterMenu",
            MenuState::GenerationFilterMenu => "GenerationFilterMenu",
            MenuState::TeamView => "TeamView",
        }
    }

    /// Only the main menu can end the session
    pub fn can_exit(&self) -> bool {
        matches!(self, MenuState::MainMenu)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_state_is_main_menu() {
        assert_eq!(MenuState::default(), MenuState::MainMenu);
    }

    #[test]
    fn test_state_names() {
        assert_eq!(MenuState::BrowsePage(3).name(), "BrowsePage");
        assert_eq!(MenuState::TeamView.name(), "TeamView");
    }

    #[test]
    fn test_only_main_menu_can_exit() {
        assert!(MenuState::MainMenu.can_exit());
        assert!(!MenuState::BrowsePage(0).can_exit());
        assert!(!MenuState::TypeFilterMenu.can_exit());
        assert!(!MenuState::GenerationFilterMenu.can_exit());
        assert!(!MenuState::TeamView.can_exit());
    }
}
