// File: crates/diamond-core/src/highlight.rs
// Summary: Per-cell color overrides; insertion-ordered store resolved last-write-wins.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::color::Color;

/// Grid cell coordinate. Padding cells around the pattern use -1 and `rows`/`cols`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct GridPos {
    pub row: i32,
    pub col: i32,
}

impl GridPos {
    pub const fn new(row: i32, col: i32) -> Self { Self { row, col } }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Highlight {
    pub position: GridPos,
    pub color: Color,
    #[serde(default)]
    pub is_background: bool,
}

/// Ordered override list. Duplicates are kept; [`HighlightStore::resolve`] dedups.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct HighlightStore {
    highlights: Vec<Highlight>,
}

impl HighlightStore {
    pub fn new() -> Self { Self::default() }

    /// Append an override; no dedup on insert.
    pub fn add(&mut self, position: GridPos, color: Color) {
        self.push(Highlight { position, color, is_background: false });
    }

    pub fn push(&mut self, highlight: Highlight) {
        self.highlights.push(highlight);
    }

    /// Drop every entry at `position`, then append one. Mirrors the color picker.
    pub fn assign(&mut self, position: GridPos, color: Color) {
        self.remove_at(position);
        self.add(position, color);
    }

    /// Remove all entries for `position`. No-op when there are none.
    pub fn remove_at(&mut self, position: GridPos) {
        self.highlights.retain(|h| h.position != position);
    }

    pub fn clear(&mut self) { self.highlights.clear(); }

    /// Position -> color, taking the last inserted entry per position.
    pub fn resolve(&self) -> HashMap<GridPos, Color> {
        let mut map = HashMap::with_capacity(self.highlights.len());
        for h in &self.highlights {
            map.insert(h.position, h.color);
        }
        map
    }

    pub fn len(&self) -> usize { self.highlights.len() }
    pub fn is_empty(&self) -> bool { self.highlights.is_empty() }
    pub fn iter(&self) -> impl Iterator<Item = &Highlight> { self.highlights.iter() }
    pub fn as_slice(&self) -> &[Highlight] { &self.highlights }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Palette;

    #[test]
    fn last_write_wins() {
        let mut store = HighlightStore::new();
        let p = GridPos::new(1, 3);
        store.add(p, Palette::LIGHTEST);
        store.add(GridPos::new(0, 0), Palette::WHITE);
        store.add(p, Palette::DEBUG);
        assert_eq!(store.len(), 3);
        let map = store.resolve();
        assert_eq!(map.len(), 2);
        assert_eq!(map[&p], Palette::DEBUG);
    }

    #[test]
    fn resolve_is_idempotent() {
        let mut store = HighlightStore::new();
        store.add(GridPos::new(2, 2), Palette::LIGHT);
        store.add(GridPos::new(2, 2), Palette::DARK);
        assert_eq!(store.resolve(), store.resolve());
    }

    #[test]
    fn remove_drops_every_entry_at_position() {
        let mut store = HighlightStore::new();
        let p = GridPos::new(-1, 4);
        store.add(p, Palette::LIGHT);
        store.add(p, Palette::DARK);
        store.add(GridPos::new(0, 1), Palette::WHITE);
        store.remove_at(p);
        assert_eq!(store.len(), 1);
        assert!(!store.resolve().contains_key(&p));
        // absent position is a no-op
        store.remove_at(GridPos::new(9, 9));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn assign_replaces_instead_of_appending() {
        let mut store = HighlightStore::new();
        let p = GridPos::new(0, 0);
        store.add(p, Palette::LIGHT);
        store.add(p, Palette::LIGHT);
        store.assign(p, Palette::DEBUG);
        assert_eq!(store.len(), 1);
        assert_eq!(store.resolve()[&p], Palette::DEBUG);
    }
}
