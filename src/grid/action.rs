use std::ops::{Index, IndexMut};

use strum::{Display, EnumIter, FromRepr, VariantArray};

/// One of the four moves available in every cell
///
/// The declaration order is the iteration order everywhere in the crate,
/// so it also decides ties in greedy selection.
#[derive(EnumIter, VariantArray, FromRepr, Display, Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Action {
    #[strum(serialize = "N")]
    North = 0,
    #[strum(serialize = "E")]
    East = 1,
    #[strum(serialize = "S")]
    South = 2,
    #[strum(serialize = "W")]
    West = 3,
}

impl Action {
    pub const COUNT: usize = 4;

    /// The action pointing the other way
    pub fn opposite(self) -> Self {
        match self {
            Action::North => Action::South,
            Action::East => Action::West,
            Action::South => Action::North,
            Action::West => Action::East,
        }
    }

    /// Row and column offset of a step in this direction
    pub(crate) fn offset(self) -> (isize, isize) {
        match self {
            Action::North => (-1, 0),
            Action::East => (0, 1),
            Action::South => (1, 0),
            Action::West => (0, -1),
        }
    }
}

/// Per-action value estimates of a single cell
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ActionValues([f32; Action::COUNT]);

impl ActionValues {
    pub fn new(values: [f32; Action::COUNT]) -> Self {
        Self(values)
    }

    /// Iterate `(action, value)` pairs in declaration order
    pub fn iter(&self) -> impl Iterator<Item = (Action, f32)> + '_ {
        Action::VARIANTS.iter().map(|&a| (a, self[a]))
    }

    /// The largest estimate
    pub fn max(&self) -> f32 {
        self.0.iter().copied().fold(f32::NEG_INFINITY, f32::max)
    }

    /// The action with the strictly largest estimate, the earliest one on ties
    pub fn greedy(&self) -> Action {
        let mut best = Action::North;
        for (action, value) in self.iter().skip(1) {
            if value > self[best] {
                best = action;
            }
        }
        best
    }

    pub fn as_array(&self) -> &[f32; Action::COUNT] {
        &self.0
    }
}

impl Index<Action> for ActionValues {
    type Output = f32;

    fn index(&self, action: Action) -> &Self::Output {
        &self.0[action as usize]
    }
}

impl IndexMut<Action> for ActionValues {
    fn index_mut(&mut self, action: Action) -> &mut Self::Output {
        &mut self.0[action as usize]
    }
}

#[cfg(test)]
mod tests {
    use strum::IntoEnumIterator;

    use super::*;

    #[test]
    fn opposites() {
        for a in Action::iter() {
            assert_ne!(a, a.opposite());
            assert_eq!(a, a.opposite().opposite(), "Opposite is an involution");
        }
        assert_eq!(Action::North.opposite(), Action::South);
        assert_eq!(Action::East.opposite(), Action::West);
    }

    #[test]
    fn ordinal_matches_declaration() {
        for (i, a) in Action::VARIANTS.iter().enumerate() {
            assert_eq!(Action::from_repr(i), Some(*a));
        }
    }

    #[test]
    fn greedy_ties_go_to_first_declared() {
        let values = ActionValues::default();
        assert_eq!(values.greedy(), Action::North, "All zero picks North");

        let values = ActionValues::new([-1.0, 3.0, 3.0, 2.0]);
        assert_eq!(values.greedy(), Action::East, "Tie between East and South");
        assert_eq!(values.max(), 3.0);

        let values = ActionValues::new([-5.0, -4.0, -3.0, -2.0]);
        assert_eq!(values.greedy(), Action::West);
    }

    #[test]
    fn indexing() {
        let mut values = ActionValues::default();
        values[Action::South] = 1.5;
        assert_eq!(values.as_array(), &[0.0, 0.0, 1.5, 0.0]);
    }
}
