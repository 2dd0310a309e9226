//! The characters that give meaning to a dungeon map.

use std::fmt;

use crate::error::GraphError;

/// What a marker character stands for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Role {
    Start,
    Goal,
    Obstacle,
    Empty,
    Path,
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Start => "start",
            Self::Goal => "goal",
            Self::Obstacle => "obstacle",
            Self::Empty => "empty",
            Self::Path => "path",
        };
        f.write_str(name)
    }
}

/// Marker characters used to read a map and to draw a path on it.
///
/// `path` is never read from the map; it is only used when rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Markers {
    pub start: char,
    pub goal: char,
    pub obstacle: char,
    pub empty: char,
    pub path: char,
}

impl Default for Markers {
    fn default() -> Self {
        Self {
            start: 'A',
            goal: 'B',
            obstacle: '#',
            empty: ' ',
            path: '*',
        }
    }
}

impl Markers {
    /// Build markers from strings, each of which must hold exactly one
    /// character.
    pub fn try_new(
        start: &str,
        goal: &str,
        obstacle: &str,
        empty: &str,
        path: &str,
    ) -> Result<Self, GraphError> {
        let markers = Self {
            start: single_char(Role::Start, start)?,
            goal: single_char(Role::Goal, goal)?,
            obstacle: single_char(Role::Obstacle, obstacle)?,
            empty: single_char(Role::Empty, empty)?,
            path: single_char(Role::Path, path)?,
        };
        markers.validate()?;
        Ok(markers)
    }

    /// The character assigned to `role`.
    pub fn get(&self, role: Role) -> char {
        match role {
            Role::Start => self.start,
            Role::Goal => self.goal,
            Role::Obstacle => self.obstacle,
            Role::Empty => self.empty,
            Role::Path => self.path,
        }
    }

    /// Check that the four map markers are pairwise distinct.
    pub fn validate(&self) -> Result<(), GraphError> {
        const MAP_ROLES: [Role; 4] = [Role::Start, Role::Goal, Role::Obstacle, Role::Empty];
        for (i, &first) in MAP_ROLES.iter().enumerate() {
            for &second in &MAP_ROLES[i + 1..] {
                if self.get(first) == self.get(second) {
                    return Err(GraphError::AmbiguousMarkers {
                        first,
                        second,
                        ch: self.get(first),
                    });
                }
            }
        }
        Ok(())
    }

    /// Whether `ch` designates the start or goal cell.
    ///
    /// Unlike every other marker comparison this one upper-cases `ch`
    /// first.
    pub(crate) fn designates(&self, role: Role, ch: char) -> bool {
        ch.to_uppercase().eq(std::iter::once(self.get(role)))
    }
}

fn single_char(role: Role, s: &str) -> Result<char, GraphError> {
    let mut chars = s.chars();
    match (chars.next(), chars.next()) {
        (Some(ch), None) => Ok(ch),
        _ => Err(GraphError::InvalidMarker {
            role,
            value: s.to_string(),
        }),
    }
}


#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn markers_round_trip() {
        let m = Markers::try_new("S", "G", "X", ".", "o").unwrap();
        let json = serde_json::to_string(&m).unwrap();
        let back: Markers = serde_json::from_str(&json).unwrap();
        assert_eq!(m, back);
    }

    #[test]
    fn missing_fields_take_defaults() {
        let m: Markers = serde_json::from_str(r#"{"obstacle":"X"}"#).unwrap();
        assert_eq!(m.obstacle, 'X');
        assert_eq!(m.start, 'A');
        assert_eq!(m.path, '*');
    }
}
