//! Declarative level table.
//!
//! `assets/levels.json` is embedded at compile time and lists, per level
//! index, the placements the level builder turns into entities:
//!
//! ```json
//! { "levels": [ { "index": 0, "placements": [
//!     { "kind": "pointer", "x": 0, "y": 0 },
//!     { "kind": "start", "x": 0, "y": 0, "rotation": 0, "groups": "p1" },
//!     { "kind": "quit", "x": 0, "y": 160, "rotation": 0, "groups": "p1", "side": "left" }
//! ] } ] }
//! ```
//!
//! Coordinates are entity centres in world space. `groups` is a
//! space-separated list of tags; `rotation` counts clockwise quarter turns.

use bevy_ecs::prelude::Resource;
use serde::{Deserialize, Serialize};

const EMBEDDED_LEVELS: &str = include_str!("../../assets/levels.json");

/// Which side of its button a quit or options menu slides out of.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum MenuSide {
    #[default]
    Right,
    Left,
}

impl MenuSide {
    /// Slide direction, in quarter turns, for a button rotated `rotation`
    /// times.
    pub fn direction(self, rotation: u8) -> u8 {
        match self {
            MenuSide::Right => rotation % 4,
            MenuSide::Left => (rotation + 2) % 4,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Placement {
    Title {
        x: f32,
        y: f32,
        #[serde(default)]
        text: Option<String>,
    },
    Player {
        x: f32,
        y: f32,
    },
    Pointer {
        x: f32,
        y: f32,
    },
    Button {
        x: f32,
        y: f32,
        width: f32,
        #[serde(default)]
        rotation: u8,
        #[serde(default)]
        groups: String,
        #[serde(default)]
        text: Option<String>,
    },
    Start {
        x: f32,
        y: f32,
        #[serde(default)]
        rotation: u8,
        #[serde(default)]
        groups: String,
    },
    Quit {
        x: f32,
        y: f32,
        #[serde(default)]
        rotation: u8,
        #[serde(default)]
        groups: String,
        #[serde(default)]
        side: MenuSide,
        /// Open the menu right after the build, over this many ms.
        #[serde(default)]
        open_ms: Option<u32>,
    },
    Options {
        x: f32,
        y: f32,
        #[serde(default)]
        rotation: u8,
        #[serde(default)]
        groups: String,
        #[serde(default)]
        side: MenuSide,
    },
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct LevelLayout {
    pub index: u32,
    pub placements: Vec<Placement>,
}

#[derive(Resource, Serialize, Deserialize, Debug, Clone, Default)]
pub struct LevelTable {
    pub levels: Vec<LevelLayout>,
}

impl LevelTable {
    pub fn parse(text: &str) -> Result<Self, String> {
        serde_json::from_str(text).map_err(|e| format!("Failed to parse level table: {}", e))
    }

    /// The table shipped with the game.
    pub fn embedded() -> Result<Self, String> {
        Self::parse(EMBEDDED_LEVELS)
    }

    pub fn get(&self, index: u32) -> Option<&LevelLayout> {
        self.levels.iter().find(|l| l.index == index)
    }

    pub fn len(&self) -> usize {
        self.levels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.levels.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn count(layout: &LevelLayout, pred: impl Fn(&Placement) -> bool) -> usize {
        layout.placements.iter().filter(|p| pred(p)).count()
    }

    #[test]
    fn test_embedded_table_has_levels_zero_to_six() {
        let table = LevelTable::embedded().unwrap();
        assert_eq!(table.len(), 7);
        for i in 0..=6 {
            assert!(table.get(i).is_some(), "level {} missing", i);
        }
        assert!(table.get(7).is_none());
    }

    #[test]
    fn test_level_zero_is_the_menu() {
        let table = LevelTable::embedded().unwrap();
        let l0 = table.get(0).unwrap();
        assert_eq!(count(l0, |p| matches!(p, Placement::Player { .. })), 0);
        assert_eq!(count(l0, |p| matches!(p, Placement::Pointer { .. })), 1);
        assert_eq!(count(l0, |p| matches!(p, Placement::Start { .. })), 1);
        assert_eq!(count(l0, |p| matches!(p, Placement::Options { .. })), 1);
        assert_eq!(count(l0, |p| matches!(p, Placement::Quit { .. })), 1);
    }

    #[test]
    fn test_every_playable_level_has_one_player_and_one_start() {
        let table = LevelTable::embedded().unwrap();
        for i in 1..=6 {
            let l = table.get(i).unwrap();
            assert_eq!(count(l, |p| matches!(p, Placement::Player { .. })), 1, "level {}", i);
            assert_eq!(count(l, |p| matches!(p, Placement::Start { .. })), 1, "level {}", i);
        }
    }

    #[test]
    fn test_level_five_opens_its_quit_menu() {
        let table = LevelTable::embedded().unwrap();
        let l5 = table.get(5).unwrap();
        let opened: Vec<_> = l5
            .placements
            .iter()
            .filter_map(|p| match p {
                Placement::Quit { open_ms, groups, .. } => open_ms.map(|ms| (ms, groups.clone())),
                _ => None,
            })
            .collect();
        assert_eq!(opened, vec![(100, "p1 p2".to_string())]);
    }

    #[test]
    fn test_defaults_fill_missing_fields() {
        let table = LevelTable::parse(
            r#"{"levels":[{"index":3,"placements":[
                {"kind":"quit","x":1,"y":2},
                {"kind":"button","x":0,"y":0,"width":70}
            ]}]}"#,
        )
        .unwrap();
        match &table.get(3).unwrap().placements[0] {
            Placement::Quit {
                rotation,
                groups,
                side,
                open_ms,
                ..
            } => {
                assert_eq!(*rotation, 0);
                assert!(groups.is_empty());
                assert_eq!(*side, MenuSide::Right);
                assert_eq!(*open_ms, None);
            }
            other => panic!("unexpected placement {:?}", other),
        }
    }

    #[test]
    fn test_unknown_kind_is_an_error() {
        let err = LevelTable::parse(r#"{"levels":[{"index":0,"placements":[{"kind":"boss","x":0,"y":0}]}]}"#)
            .unwrap_err();
        assert!(err.contains("level table"));
    }

    #[test]
    fn test_menu_side_direction() {
        assert_eq!(MenuSide::Right.direction(0), 0);
        assert_eq!(MenuSide::Left.direction(0), 2);
        assert_eq!(MenuSide::Left.direction(3), 1);
        assert_eq!(MenuSide::Right.direction(3), 3);
    }
}
