use std::sync::Arc;
use tracing::debug;

use crate::catalog::Creature;
use crate::error::{Result, TeamBuilderError};

/// Maximum number of team members
pub const MAX_TEAM_SIZE: usize = 6;

/// The user's team, ordered by insertion.
///
/// Members are shared with the catalog, never copied.
#[derive(Debug, Clone, Default)]
pub struct TeamRoster {
    members: Vec<Arc<Creature>>,
}

impl TeamRoster {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a member. A full roster rejects the addition and stays unchanged.
    pub fn add_member(&mut self, creature: Arc<Creature>) -> Result<()> {
        if self.is_full() {
            return Err(TeamBuilderError::TeamFull {
                capacity: MAX_TEAM_SIZE,
            });
        }
        debug!(name = %creature.name, position = self.members.len(), "Added team member");
        self.members.push(creature);
        Ok(())
    }

    /// Remove and return the member at zero-based `index`
    pub fn remove_member(&mut self, index: usize) -> Result<Arc<Creature>> {
        if index >= self.members.len() {
            return Err(TeamBuilderError::IndexOutOfRange {
                index,
                len: self.members.len(),
            });
        }
        let removed = self.members.remove(index);
        debug!(name = %removed.name, index, "Removed team member");
        Ok(removed)
    }

    pub fn members(&self) -> &[Arc<Creature>] {
        &self.members
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.members.len() >= MAX_TEAM_SIZE
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::CreatureType;

    fn member(name: &str) -> Arc<Creature> {
        Arc::new(Creature::new(name, CreatureType::Normal, None, 1, 0))
    }

    fn names(roster: &TeamRoster) -> Vec<&str> {
        roster.members().iter().map(|c| c.name.as_str()).collect()
    }

    #[test]
    fn test_add_appends_at_end() {
        let mut roster = TeamRoster::new();
        roster.add_member(member("A")).unwrap();
        roster.add_member(member("B")).unwrap();
        assert_eq!(names(&roster), vec!["A", "B"]);
    }

    #[test]
    fn test_same_creature_may_join_twice() {
        let mut roster = TeamRoster::new();
        let eevee = member("Eevee");
        roster.add_member(Arc::clone(&eevee)).unwrap();
        roster.add_member(eevee).unwrap();
        assert_eq!(roster.len(), 2);
    }

    #[test]
    fn test_full_roster_rejects_addition() {
        let mut roster = TeamRoster::new();
        for i in 0..MAX_TEAM_SIZE {
            roster.add_member(member(&format!("M{i}"))).unwrap();
        }
        assert!(roster.is_full());
        let before = names(&roster).join(",");

        let err = roster.add_member(member("Extra")).unwrap_err();
        assert!(matches!(err, TeamBuilderError::TeamFull { capacity: 6 }));
        assert_eq!(roster.len(), MAX_TEAM_SIZE);
        assert_eq!(names(&roster).join(","), before);
    }

    #[test]
    fn test_remove_member_by_index() {
        let mut roster = TeamRoster::new();
        for name in ["A", "B", "C"] {
            roster.add_member(member(name)).unwrap();
        }
        let removed = roster.remove_member(1).unwrap();
        assert_eq!(removed.name, "B");
        assert_eq!(names(&roster), vec!["A", "C"]);
    }

    #[test]
    fn test_remove_out_of_range_leaves_roster_intact() {
        let mut roster = TeamRoster::new();
        assert!(matches!(
            roster.remove_member(0),
            Err(TeamBuilderError::IndexOutOfRange { index: 0, len: 0 })
        ));

        roster.add_member(member("A")).unwrap();
        assert!(roster.remove_member(1).is_err());
        assert_eq!(names(&roster), vec!["A"]);
    }
}
