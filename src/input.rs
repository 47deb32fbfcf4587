use std::collections::HashMap;

use crate::engine::Direction;

const ESC: char = '\u{1b}';

/// Maps input keys to directions. Anything unmapped is ignored.
///
/// Defaults cover arrow-key escape sequences, `up`/`down`/`left`/`right`,
/// WASD, and vi keys.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyMap {
    bindings: HashMap<String, Direction>,
}

impl Default for KeyMap {
    fn default() -> Self {
        let mut map = KeyMap::empty();
        for (keys, dir) in [
            (["\u{1b}[a", "up", "w", "k"], Direction::Up),
            (["\u{1b}[b", "down", "s", "j"], Direction::Down),
            (["\u{1b}[d", "left", "a", "h"], Direction::Left),
            (["\u{1b}[c", "right", "d", "l"], Direction::Right),
        ] {
            for key in keys {
                map.bind(key, dir);
            }
        }
        map
    }
}

impl KeyMap {
    /// A key map with no bindings.
    pub fn empty() -> Self {
        KeyMap { bindings: HashMap::new() }
    }

    /// Bind `key` (case-insensitive) to `direction`, replacing any previous binding.
    pub fn bind(&mut self, key: &str, direction: Direction) {
        self.bindings.insert(key.to_lowercase(), direction);
    }

    /// Add every binding in `extra` on top of the current ones.
    pub fn extend<'a, I>(&mut self, extra: I)
    where
        I: IntoIterator<Item = (&'a String, &'a Direction)>,
    {
        for (key, dir) in extra {
            self.bind(key, *dir);
        }
    }

    /// Direction bound to a single key, if any.
    pub fn lookup(&self, key: &str) -> Option<Direction> {
        self.bindings.get(&key.to_lowercase()).copied()
    }

    /// Directions for every recognised key in `line`, in input order.
    ///
    /// Keys are whitespace-separated words; raw arrow escape sequences may
    /// also appear back to back (`"\x1b[A\x1b[D"`).
    pub fn directions(&self, line: &str) -> Vec<Direction> {
        line.split_whitespace()
            .flat_map(split_escapes)
            .filter_map(|key| self.lookup(key))
            .collect()
    }
}

// "w\x1b[A\x1b[B" -> ["w", "\x1b[A", "\x1b[B"]
fn split_escapes(token: &str) -> Vec<&str> {
    let mut parts = Vec::new();
    let mut start = 0;
    for (idx, ch) in token.char_indices() {
        if ch == ESC && idx > start {
            parts.push(&token[start..idx]);
            start = idx;
        }
    }
    if start < token.len() {
        parts.push(&token[start..]);
    }
    parts
}
