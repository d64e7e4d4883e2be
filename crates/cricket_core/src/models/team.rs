use serde::{Deserialize, Serialize};

use crate::error::{MatchError, Result};

/// A side available for selection.
///
/// `flag` is an opaque image reference carried through for front ends; the
/// simulator never looks at it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Team {
    pub name: String,
    pub flag: String,
}

impl Team {
    pub fn new(name: impl Into<String>, flag: impl Into<String>) -> Self {
        Self { name: name.into(), flag: flag.into() }
    }
}

/// Two-slot picker used before a match starts.
///
/// Selection order matters: the first team picked bats first.
#[derive(Debug, Clone, Default)]
pub struct TeamSelection {
    selected: Vec<Team>,
}

impl TeamSelection {
    pub const SLOTS: usize = 2;

    pub fn new() -> Self {
        Self::default()
    }

    /// Toggle a team. Returns whether the team is selected afterwards.
    ///
    /// A third pick is ignored until one of the two selected teams is
    /// toggled off again.
    pub fn toggle(&mut self, team: &Team) -> bool {
        if let Some(pos) = self.selected.iter().position(|t| t == team) {
            self.selected.remove(pos);
            return false;
        }
        if self.selected.len() < Self::SLOTS {
            self.selected.push(team.clone());
            return true;
        }
        false
    }

    pub fn is_selected(&self, team: &Team) -> bool {
        self.selected.contains(team)
    }

    pub fn selected(&self) -> &[Team] {
        &self.selected
    }

    /// True once exactly two teams are picked ("Start Match" enabled).
    pub fn is_ready(&self) -> bool {
        self.selected.len() == Self::SLOTS
    }

    /// Consume the selection, yielding (batting first, chasing).
    pub fn into_pair(self) -> Result<(Team, Team)> {
        if !self.is_ready() {
            return Err(MatchError::IncompleteSelection { found: self.selected.len() });
        }
        let mut teams = self.selected.into_iter();
        match (teams.next(), teams.next()) {
            (Some(first), Some(second)) => Ok((first, second)),
            _ => Err(MatchError::IncompleteSelection { found: 0 }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn team(name: &str) -> Team {
        Team::new(name, format!("https://flags.example/{name}.jpg"))
    }

    #[test]
    fn toggle_adds_and_removes() {
        let mut selection = TeamSelection::new();
        let india = team("India");

        assert!(selection.toggle(&india));
        assert!(selection.is_selected(&india));
        assert!(!selection.toggle(&india));
        assert!(!selection.is_selected(&india));
        assert!(selection.selected().is_empty());
    }

    #[test]
    fn third_pick_is_ignored() {
        let mut selection = TeamSelection::new();
        selection.toggle(&team("India"));
        selection.toggle(&team("England"));
        assert!(selection.is_ready());

        assert!(!selection.toggle(&team("Australia")));
        assert_eq!(selection.selected().len(), 2);
        assert!(!selection.is_selected(&team("Australia")));
    }

    #[test]
    fn pair_keeps_selection_order() {
        let mut selection = TeamSelection::new();
        selection.toggle(&team("Sri Lanka"));
        selection.toggle(&team("Pakistan"));

        let (first, second) = selection.into_pair().unwrap();
        assert_eq!(first.name, "Sri Lanka");
        assert_eq!(second.name, "Pakistan");
    }

    #[test]
    fn incomplete_selection_is_rejected() {
        let mut selection = TeamSelection::new();
        selection.toggle(&team("India"));
        assert!(!selection.is_ready());

        match selection.into_pair() {
            Err(MatchError::IncompleteSelection { found }) => assert_eq!(found, 1),
            other => panic!("unexpected: {other:?}"),
        }
    }

    #[test]
    fn team_json_uses_name_and_flag_fields() {
        let parsed: Team =
            serde_json::from_str(r#"{"name":"India","flag":"https://x/india.jpg"}"#).unwrap();
        assert_eq!(parsed, Team::new("India", "https://x/india.jpg"));
    }
}
