//! Pairing of interleaved type 24 static data reports
//!
//! A Class B transponder sends its static data in two halves: Part A
//! carries the ship name, Part B everything else. The halves arrive
//! as separate messages, in either order and possibly interleaved
//! with other vessels' halves. [`Type24Queue`] caches recent Part As
//! so an arriving Part B can be joined with its name.

use arraydeque::{ArrayDeque, Wrapping};
use arrayvec::ArrayString;

#[cfg(not(test))]
use log::debug;
#[cfg(test)]
use std::println as debug;

/// Maximum ship name length, in characters
pub(crate) const SHIPNAME_CHARS: usize = 20;

/// Number of Part A reports remembered per session
pub const PART_A_CAPACITY: usize = 8;

#[derive(Clone, Debug, PartialEq, Eq)]
struct PartAEntry {
    mmsi: u32,
    shipname: ArrayString<SHIPNAME_CHARS>,
}

/// Fixed-capacity cache of type 24 Part A reports
///
/// Holds the [`PART_A_CAPACITY`] most recent entries. When a new
/// vessel arrives while the cache is full, the oldest entry is
/// evicted. A Part B match does *not* remove the entry; later
/// Part Bs from the same vessel keep merging against the cached name.
#[derive(Clone, Debug, Default)]
pub struct Type24Queue {
    ships: ArrayDeque<PartAEntry, PART_A_CAPACITY, Wrapping>,
}

impl Type24Queue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of cached Part A entries
    pub fn len(&self) -> usize {
        self.ships.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ships.is_empty()
    }

    /// Cache a Part A report
    ///
    /// A repeat report from a known MMSI overwrites its name in
    /// place. A new MMSI is appended, evicting the oldest entry if
    /// the cache is full. Names longer than [`SHIPNAME_CHARS`] are
    /// truncated.
    pub fn record_part_a(&mut self, mmsi: u32, shipname: &str) {
        let mut name = ArrayString::<SHIPNAME_CHARS>::new();
        for ch in shipname.chars().take(SHIPNAME_CHARS) {
            // capacity is in bytes, so a multi-byte char can still overflow
            if name.try_push(ch).is_err() {
                break;
            }
        }

        if let Some(entry) = self.ships.iter_mut().find(|entry| entry.mmsi == mmsi) {
            entry.shipname = name;
            return;
        }

        if let Some(evicted) = self.ships.push_back(PartAEntry { mmsi, shipname: name }) {
            debug!("type 24 queue full, dropping mmsi {}", evicted.mmsi);
        }
    }

    /// Ship name cached for `mmsi`, if any
    pub fn lookup(&self, mmsi: u32) -> Option<&str> {
        self.ships
            .iter()
            .find(|entry| entry.mmsi == mmsi)
            .map(|entry| entry.shipname.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn part_b_finds_cached_name() {
        let mut queue = Type24Queue::new();
        queue.record_part_a(123456789, "EXAMPLE");
        assert_eq!(queue.lookup(123456789), Some("EXAMPLE"));
        assert_eq!(queue.lookup(987654321), None);
    }

    #[test]
    fn match_does_not_consume() {
        let mut queue = Type24Queue::new();
        queue.record_part_a(123456789, "EXAMPLE");
        assert_eq!(queue.lookup(123456789), Some("EXAMPLE"));
        assert_eq!(queue.lookup(123456789), Some("EXAMPLE"));
        assert_eq!(queue.len(), 1);
    }

    #[test]
    fn repeat_part_a_overwrites_in_place() {
        let mut queue = Type24Queue::new();
        queue.record_part_a(111, "OLD NAME");
        queue.record_part_a(222, "OTHER");
        queue.record_part_a(111, "NEW NAME");
        assert_eq!(queue.len(), 2);
        assert_eq!(queue.lookup(111), Some("NEW NAME"));
    }

    #[test]
    fn oldest_entry_evicted_when_full() {
        let mut queue = Type24Queue::new();
        for n in 0..=PART_A_CAPACITY as u32 {
            queue.record_part_a(1000 + n, "SHIP");
        }
        assert_eq!(queue.len(), PART_A_CAPACITY);
        assert_eq!(queue.lookup(1000), None);
        assert_eq!(queue.lookup(1001), Some("SHIP"));
        assert_eq!(queue.lookup(1000 + PART_A_CAPACITY as u32), Some("SHIP"));
    }

    #[test]
    fn long_names_truncate() {
        let mut queue = Type24Queue::new();
        queue.record_part_a(1, "ABCDEFGHIJKLMNOPQRSTUVWXYZ");
        assert_eq!(queue.lookup(1), Some("ABCDEFGHIJKLMNOPQRST"));
    }

    #[test]
    fn multibyte_names_truncate_without_panic() {
        let mut queue = Type24Queue::new();
        // 20 chars but more than 20 bytes; the last char must not fit
        queue.record_part_a(1, "ØSTENSJØVANNET ØØØØØ");
        let name = queue.lookup(1).unwrap();
        assert!(name.len() <= SHIPNAME_CHARS);
        assert!(name.starts_with("ØSTENSJØVANNET"));
    }
}
