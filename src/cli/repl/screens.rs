//! Text rendering for each menu

use std::io::{self, Write};

use crate::catalog::Creature;
use crate::engine::{FilterSet, Pagination, TeamRoster, MAX_TEAM_SIZE};

pub const INVALID_RESPONSE: &str = "Invalid response provided";

fn marker(enabled: bool) -> char {
    if enabled {
        'X'
    } else {
        '_'
    }
}

fn entry(out: &mut impl Write, number: usize, creature: &Creature) -> io::Result<()> {
    writeln!(out, "================{}================", number)?;
    writeln!(out, "{}", creature)
}

pub fn banner(out: &mut impl Write) -> io::Result<()> {
    writeln!(out, "Welcome to the Pokemon Team Builder!")?;
    writeln!(out, "=================================")
}

pub fn main_menu(out: &mut impl Write) -> io::Result<()> {
    write!(
        out,
        "\n\t1) Display [P]okemon\n\t2) Filter [T]ypes\n\t3) Filter [G]enerations\n\t4) Display [C]urrent team\n\t5) [Q]uit\nChoose a command from the menu above: "
    )?;
    out.flush()
}

/// One browse page. `rows` are (one-based number, creature) for this page only.
pub fn browse_page<'a>(
    out: &mut impl Write,
    page: usize,
    pagination: &Pagination,
    rows: impl IntoIterator<Item = (usize, &'a Creature)>,
) -> io::Result<()> {
    writeln!(
        out,
        "Showing page {} out of {} ({} visible)",
        page + 1,
        pagination.total_pages(),
        pagination.total_items()
    )?;
    for (number, creature) in rows {
        entry(out, number, creature)?;
    }
    if pagination.total_items() == 0 {
        writeln!(out, "No Pokemon match the current filters")?;
    }
    write!(
        out,
        "\n\t[N]ext page\n\t[P]revious page\n\t[Q]uit to main menu\n\tPokemon number to add to your team\nChoose command from menu above: "
    )?;
    out.flush()
}

pub fn type_filters(out: &mut impl Write, filters: &FilterSet) -> io::Result<()> {
    for (creature_type, enabled) in filters.types() {
        writeln!(out, "\t{} _{}_", creature_type, marker(enabled))?;
    }
    write!(out, "\tSelect type, [q]uit, or [r]eset: ")?;
    out.flush()
}

pub fn generation_filters(out: &mut impl Write, filters: &FilterSet) -> io::Result<()> {
    for (generation, enabled) in filters.generations() {
        writeln!(out, "\tGeneration {} _{}_", generation, marker(enabled))?;
    }
    write!(out, "\tSelect generation, [q]uit, or [r]eset: ")?;
    out.flush()
}

pub fn team(out: &mut impl Write, roster: &TeamRoster) -> io::Result<()> {
    if roster.is_empty() {
        writeln!(out, "No Pokemon have been added to the team")?;
        write!(out, "[Q]uit to main menu: ")?;
        return out.flush();
    }

    writeln!(
        out,
        "Current Pokemon Team ({}/{}):",
        roster.len(),
        MAX_TEAM_SIZE
    )?;
    for (i, member) in roster.members().iter().enumerate() {
        entry(out, i + 1, member)?;
        writeln!(out)?;
    }
    write!(out, "Remove pokemon number from team or [q]uit: ")?;
    out.flush()
}

/// Feedback line printed before the current menu is rendered again
pub fn notice(out: &mut impl Write, message: &str) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "{}", message)
}
