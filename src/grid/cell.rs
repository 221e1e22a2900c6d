use super::{Action, ActionValues, CellKind};

/// Index of a cell in its [`Grid`](super::Grid)'s arena
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CellId(pub(crate) usize);

impl CellId {
    pub fn index(self) -> usize {
        self.0
    }
}

/// A single position of the grid, or a piece of its padding border
#[derive(Debug, Clone)]
pub struct Cell {
    kind: CellKind,
    padding: bool,
    values: ActionValues,
    neighbors: Option<[CellId; Action::COUNT]>,
}

impl Cell {
    pub(crate) fn new(kind: CellKind) -> Self {
        Self {
            kind,
            padding: false,
            values: ActionValues::default(),
            neighbors: None,
        }
    }

    pub(crate) fn padding(kind: CellKind) -> Self {
        Self {
            padding: true,
            ..Self::new(kind)
        }
    }

    pub fn symbol(&self) -> char {
        self.kind.symbol
    }

    pub fn reward(&self) -> f32 {
        self.kind.reward
    }

    pub fn is_steppable(&self) -> bool {
        self.kind.steppable
    }

    pub fn is_terminal(&self) -> bool {
        self.kind.terminal
    }

    pub fn is_padding(&self) -> bool {
        self.padding
    }

    /// Steppable and not terminal
    pub fn is_eligible_start(&self) -> bool {
        self.kind.steppable && !self.kind.terminal
    }

    pub fn values(&self) -> &ActionValues {
        &self.values
    }

    pub(crate) fn values_mut(&mut self) -> &mut ActionValues {
        &mut self.values
    }

    /// The neighbor in direction `action`
    ///
    /// **Panics** on padding cells, which have no neighbors
    pub fn neighbor(&self, action: Action) -> CellId {
        let neighbors = self
            .neighbors
            .expect("Only padding cells lack neighbors and they are never walked from");
        neighbors[action as usize]
    }

    pub(crate) fn set_neighbors(&mut self, neighbors: [CellId; Action::COUNT]) {
        self.neighbors = Some(neighbors);
    }

    pub fn has_neighbors(&self) -> bool {
        self.neighbors.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn eligibility() {
        let empty = Cell::new(CellKind::new('+', -1.0, true, false));
        let wall = Cell::new(CellKind::new('W', -1.0, false, false));
        let pit = Cell::new(CellKind::new('O', -20.0, true, true));
        assert!(empty.is_eligible_start());
        assert!(!wall.is_eligible_start(), "Walls are not steppable");
        assert!(!pit.is_eligible_start(), "Terminal cells are not starts");
    }

    #[test]
    fn terminal_cells_start_at_zero() {
        let treasure = Cell::new(CellKind::new('T', 10.0, true, true));
        assert_eq!(treasure.values().as_array(), &[0.0; 4]);
    }

    #[test]
    #[should_panic(expected = "padding")]
    fn padding_has_no_neighbors() {
        let border = Cell::padding(CellKind::new('|', -1.0, false, false));
        assert!(border.is_padding());
        border.neighbor(Action::East);
    }
}
