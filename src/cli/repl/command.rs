//! Per-menu input commands
//!
//! Each menu parses a trimmed, case-insensitive token into exactly one
//! command. `None` means the token is not valid in that menu.

use crate::catalog::{CreatureType, FIRST_GENERATION, LAST_GENERATION};

fn normalize(token: &str) -> String {
    token.trim().to_ascii_uppercase()
}

/// Positive integers only; zero and signs other than `+` are rejected
fn parse_number(token: &str) -> Option<usize> {
    token.parse::<usize>().ok().filter(|n| *n > 0)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MainCommand {
    Browse,
    FilterTypes,
    FilterGenerations,
    ShowTeam,
    Quit,
}

impl MainCommand {
    pub fn parse(token: &str) -> Option<Self> {
        match normalize(token).as_str() {
            "1" | "P" => Some(MainCommand::Browse),
            "2" | "T" => Some(MainCommand::FilterTypes),
            "3" | "G" => Some(MainCommand::FilterGenerations),
            "4" | "C" => Some(MainCommand::ShowTeam),
            "5" | "Q" => Some(MainCommand::Quit),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BrowseCommand {
    Next,
    Previous,
    Back,
    /// One-based number of a visible creature
    Select(usize),
}

impl BrowseCommand {
    pub fn parse(token: &str) -> Option<Self> {
        match normalize(token).as_str() {
            "N" => Some(BrowseCommand::Next),
            "P" => Some(BrowseCommand::Previous),
            "Q" => Some(BrowseCommand::Back),
            other => parse_number(other).map(BrowseCommand::Select),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TypeFilterCommand {
    Toggle(CreatureType),
    Reset,
    Back,
}

impl TypeFilterCommand {
    pub fn parse(token: &str) -> Option<Self> {
        match normalize(token).as_str() {
            "Q" => Some(TypeFilterCommand::Back),
            "R" => Some(TypeFilterCommand::Reset),
            other => other.parse().ok().map(TypeFilterCommand::Toggle),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GenerationFilterCommand {
    Toggle(u8),
    Reset,
    Back,
}

impl GenerationFilterCommand {
    pub fn parse(token: &str) -> Option<Self> {
        match normalize(token).as_str() {
            "Q" => Some(GenerationFilterCommand::Back),
            "R" => Some(GenerationFilterCommand::Reset),
            other => other
                .parse::<u8>()
                .ok()
                .filter(|g| (FIRST_GENERATION..=LAST_GENERATION).contains(g))
                .map(GenerationFilterCommand::Toggle),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TeamCommand {
    /// One-based position in the roster
    Remove(usize),
    Back,
}

impl TeamCommand {
    pub fn parse(token: &str) -> Option<Self> {
        match normalize(token).as_str() {
            "Q" => Some(TeamCommand::Back),
            other => parse_number(other).map(TeamCommand::Remove),
        }
    }
}
