//! Base occupancy

use serde::{Deserialize, Serialize};
use std::fmt;

/// Which of first, second and third base hold a runner
///
/// Bases are addressed 1..=3 everywhere in the public API.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BaseState {
    occupied: [bool; 3],
}

impl BaseState {
    /// Number of bases on the diamond (home plate excluded)
    pub const COUNT: u8 = 3;

    /// All bases empty
    pub fn empty() -> Self {
        BaseState::default()
    }

    /// Build from explicit flags for first, second and third
    pub fn from_flags(first: bool, second: bool, third: bool) -> Self {
        BaseState {
            occupied: [first, second, third],
        }
    }

    pub fn loaded() -> Self {
        BaseState::from_flags(true, true, true)
    }

    /// Is there a runner on `base` (1 = first)?
    pub fn is_occupied(&self, base: u8) -> bool {
        self.occupied[Self::index(base)]
    }

    pub fn set(&mut self, base: u8, occupied: bool) {
        self.occupied[Self::index(base)] = occupied;
    }

    pub fn clear(&mut self) {
        self.occupied = [false; 3];
    }

    pub fn runner_count(&self) -> usize {
        self.occupied.iter().filter(|&&o| o).count()
    }

    pub fn is_empty(&self) -> bool {
        self.runner_count() == 0
    }

    /// Flags for first, second and third
    pub fn flags(&self) -> [bool; 3] {
        self.occupied
    }

    fn index(base: u8) -> usize {
        assert!(
            (1..=Self::COUNT).contains(&base),
            "base {} out of range 1..=3",
            base
        );
        usize::from(base - 1)
    }
}

impl fmt::Display for BaseState {
    /// Renders as `1 _ 3`: the base number when occupied, `_` when empty
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let marks: Vec<String> = (1..=Self::COUNT)
            .map(|base| {
                if self.is_occupied(base) {
                    base.to_string()
                } else {
                    "_".to_string()
                }
            })
            .collect();
        f.write_str(&marks.join(" "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_bases() {
        let bases = BaseState::empty();
        assert!(bases.is_empty());
        assert_eq!(bases.flags(), [false, false, false]);
        assert_eq!(bases.to_string(), "_ _ _");
    }

    #[test]
    fn test_set_and_clear() {
        let mut bases = BaseState::empty();
        bases.set(1, true);
        bases.set(3, true);
        assert!(bases.is_occupied(1));
        assert!(!bases.is_occupied(2));
        assert!(bases.is_occupied(3));
        assert_eq!(bases.runner_count(), 2);
        assert_eq!(bases.to_string(), "1 _ 3");

        bases.clear();
        assert!(bases.is_empty());
    }

    #[test]
    #[should_panic(expected = "out of range")]
    fn test_base_zero_panics() {
        BaseState::empty().is_occupied(0);
    }
}
