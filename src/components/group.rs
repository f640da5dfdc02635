//! Group tags attached to an entity.
//!
//! Tags are free-form strings used as a multicast address: "q" for quit
//! buttons, "o" for options buttons, "m" for slider bars, "s" for start
//! buttons, and "p1"/"p2" for the resolving body allowed to touch the entity.
//! Membership is set at build time and mirrored in
//! [`SceneIndex`](crate::resources::sceneindex::SceneIndex).

use bevy_ecs::prelude::Component;
use smallvec::SmallVec;

pub const START: &str = "s";
pub const QUIT: &str = "q";
pub const OPTIONS: &str = "o";
pub const MUSIC_BARS: &str = "m";
/// Resolve-against tag of the player.
pub const PLAYER_LAYER: &str = "p1";
/// Resolve-against tag of the pointer.
pub const POINTER_LAYER: &str = "p2";

#[derive(Component, Clone, Debug, Default, PartialEq, Eq)]
pub struct Groups(pub SmallVec<[String; 4]>);

impl Groups {
    /// Parse a whitespace separated tag list, e.g. `"p1 p2"`.
    pub fn parse(tags: &str) -> Self {
        let mut groups = Self::default();
        for tag in tags.split_whitespace() {
            groups.insert(tag);
        }
        groups
    }

    /// Add a tag. Duplicates are ignored.
    pub fn insert(&mut self, tag: impl Into<String>) {
        let tag = tag.into();
        if !self.contains(&tag) {
            self.0.push(tag);
        }
    }

    pub fn with(mut self, tag: impl Into<String>) -> Self {
        self.insert(tag);
        self
    }

    pub fn contains(&self, tag: impl AsRef<str>) -> bool {
        let tag = tag.as_ref();
        self.0.iter().any(|t| t == tag)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}
