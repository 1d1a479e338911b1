//! Eingabe-History
//!
//! Ringpuffer mit fester Kapazität `N`, älteste Einträge fallen raus.
//! Lebt nur im RAM, nach einem Neustart ist sie leer.

use heapless::Deque;

use crate::traits::Line;

pub struct History<const N: usize> {
    entries: Deque<Line, N>,
    max_len: usize,
}

impl<const N: usize> Default for History<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const N: usize> History<N> {
    pub const fn new() -> Self {
        Self {
            entries: Deque::new(),
            max_len: N,
        }
    }

    pub fn max_len(&self) -> usize {
        self.max_len
    }

    /// Begrenzt die History (höchstens `N`), überzählige alte Einträge werden sofort entfernt
    pub fn set_max_len(&mut self, max_len: usize) {
        self.max_len = max_len.min(N);
        while self.entries.len() > self.max_len {
            self.entries.pop_front();
        }
    }

    /// Fügt eine Zeile hinzu
    ///
    /// Leere Zeilen und Wiederholungen des neuesten Eintrags werden ignoriert.
    /// Gibt `true` zurück wenn die Zeile gespeichert wurde.
    pub fn push(&mut self, line: &str) -> bool {
        if line.is_empty() || self.max_len == 0 {
            return false;
        }
        if self.entries.back().is_some_and(|last| last.as_str() == line) {
            return false;
        }

        let mut entry = Line::new();
        if entry.push_str(line).is_err() {
            return false;
        }

        while self.entries.len() >= self.max_len {
            self.entries.pop_front();
        }
        self.entries.push_back(entry).is_ok()
    }

    /// Eintrag relativ zum neuesten (0 = neuester)
    pub fn get(&self, offset: usize) -> Option<&str> {
        let len = self.entries.len();
        if offset >= len {
            return None;
        }
        self.entries
            .iter()
            .nth(len - 1 - offset)
            .map(|entry| entry.as_str())
    }

    /// Alle Einträge, ältester zuerst
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|entry| entry.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}
