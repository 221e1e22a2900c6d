use std::fmt;

use log::{debug, warn};
use rand::{rngs::StdRng, Rng, SeedableRng};
use strum::VariantArray;

use crate::{Error, Result};

mod action;
mod cell;
pub mod layouts;
mod symbol;

pub use action::{Action, ActionValues};
pub use cell::{Cell, CellId};
pub use symbol::{CellKind, SymbolTable, PADDING_SYMBOL};

/// Upper bound on random draws when looking for a start cell
pub const MAX_START_ATTEMPTS: usize = 10_000;

/// A rectangular grid world
///
/// Cells live in a single row-major arena that includes a one cell thick
/// border of padding, so every real cell has four neighbors and movement
/// never needs bounds checks. Neighbors are stored as [`CellId`]s into the
/// arena. Only the cells' value estimates change after construction.
#[derive(Debug, Clone)]
pub struct Grid {
    cells: Vec<Cell>,
    rows: usize,
    cols: usize,
    start: Option<CellId>,
    rng: StdRng,
}

impl Grid {
    /// Parse a layout, seeding the start sampler from system entropy
    pub fn parse(layout: &str, symbols: &SymbolTable) -> Result<Self> {
        Self::parse_with_rng(layout, symbols, StdRng::from_entropy())
    }

    /// Parse a layout with an explicit random source for start sampling
    pub fn parse_with_rng(layout: &str, symbols: &SymbolTable, rng: StdRng) -> Result<Self> {
        let lines = layout_lines(layout);
        let rows = lines.len();
        let cols = lines.first().map_or(0, |l| l.chars().count());
        if rows == 0 || cols == 0 {
            return Err(Error::EmptyLayout);
        }

        let width = cols + 2;
        let padding = *symbols.padding();
        let mut cells = Vec::with_capacity((rows + 2) * width);
        let mut start: Option<(usize, usize)> = None;

        cells.extend((0..width).map(|_| Cell::padding(padding)));
        for (row, line) in lines.iter().enumerate() {
            let found = line.chars().count();
            if found != cols {
                return Err(Error::NonRectangularLayout {
                    row,
                    expected: cols,
                    found,
                });
            }

            cells.push(Cell::padding(padding));
            for (col, symbol) in line.chars().enumerate() {
                let kind = symbols
                    .get(symbol)
                    .ok_or(Error::UnknownSymbol { symbol, row, col })?;
                if symbols.is_start(symbol) {
                    if let Some(first) = start {
                        return Err(Error::MultipleStarts {
                            first,
                            second: (row, col),
                        });
                    }
                    start = Some((row, col));
                }
                cells.push(Cell::new(*kind));
            }
            cells.push(Cell::padding(padding));
        }
        cells.extend((0..width).map(|_| Cell::padding(padding)));

        let mut grid = Self {
            cells,
            rows,
            cols,
            start: None,
            rng,
        };
        grid.start = start.map(|(row, col)| grid.id_at(row, col));
        grid.link_neighbors();

        debug!(
            "Parsed {}x{} grid, start: {}",
            rows,
            cols,
            start.map_or_else(|| "random".to_string(), |p| format!("{p:?}")),
        );
        Ok(grid)
    }

    fn link_neighbors(&mut self) {
        let width = self.cols + 2;
        for row in 1..=self.rows {
            for col in 1..=self.cols {
                let neighbors = std::array::from_fn(|i| {
                    let (dr, dc) = Action::VARIANTS[i].offset();
                    let r = row.wrapping_add_signed(dr);
                    let c = col.wrapping_add_signed(dc);
                    CellId(r * width + c)
                });
                self.cells[row * width + col].set_neighbors(neighbors);
            }
        }
    }

    /// Number of layout rows, padding excluded
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of layout columns, padding excluded
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// The designated start cell, if the layout has one
    pub fn start(&self) -> Option<CellId> {
        self.start
    }

    pub fn cell(&self, id: CellId) -> &Cell {
        &self.cells[id.0]
    }

    pub fn cell_mut(&mut self, id: CellId) -> &mut Cell {
        &mut self.cells[id.0]
    }

    /// Id of the cell at layout coordinates `(row, col)`
    ///
    /// **Panics** if the coordinates are outside the layout
    pub fn id_at(&self, row: usize, col: usize) -> CellId {
        assert!(
            row < self.rows && col < self.cols,
            "({row}, {col}) is outside a {}x{} layout",
            self.rows,
            self.cols
        );
        CellId((row + 1) * (self.cols + 2) + col + 1)
    }

    /// The cell at layout coordinates `(row, col)`
    pub fn cell_at(&self, row: usize, col: usize) -> &Cell {
        self.cell(self.id_at(row, col))
    }

    /// Position of a cell in the padded arena, where `(1, 1)` is the first layout cell
    pub fn position(&self, id: CellId) -> (usize, usize) {
        let width = self.cols + 2;
        (id.0 / width, id.0 % width)
    }

    /// Iterate the non-padding cells in row-major order with their layout coordinates
    pub fn cells(&self) -> impl Iterator<Item = ((usize, usize), &Cell)> + '_ {
        (0..self.rows)
            .flat_map(move |row| (0..self.cols).map(move |col| (row, col)))
            .map(move |(row, col)| ((row, col), self.cell_at(row, col)))
    }

    /// Resolve where an episode begins
    ///
    /// Returns the designated start cell if there is one. Otherwise draws
    /// uniformly random layout cells until one is steppable and not terminal.
    /// After [`MAX_START_ATTEMPTS`] misses it picks uniformly among the
    /// eligible cells directly, so it only fails when there are none.
    pub fn starting_position(&mut self) -> Result<CellId> {
        if let Some(start) = self.start {
            return Ok(start);
        }

        let eligible: Vec<CellId> = self
            .cells()
            .filter(|(_, cell)| cell.is_eligible_start())
            .map(|((row, col), _)| self.id_at(row, col))
            .collect();
        if eligible.is_empty() {
            return Err(Error::NoEligibleStart);
        }

        for _ in 0..MAX_START_ATTEMPTS {
            let row = self.rng.gen_range(0..self.rows);
            let col = self.rng.gen_range(0..self.cols);
            let id = self.id_at(row, col);
            if self.cell(id).is_eligible_start() {
                return Ok(id);
            }
        }

        warn!(
            "No start found in {MAX_START_ATTEMPTS} draws, picking among {} eligible cells",
            eligible.len()
        );
        Ok(eligible[self.rng.gen_range(0..eligible.len())])
    }

    /// Move from `from` in direction `action`
    ///
    /// Returns the neighbor if it can be stepped on, otherwise `from` itself:
    /// bumping into a wall or the border leaves the agent in place.
    pub fn take_action(&self, from: CellId, action: Action) -> CellId {
        let to = self.cell(from).neighbor(action);
        if self.cell(to).is_steppable() {
            to
        } else {
            from
        }
    }

    /// The action a fully greedy policy takes in `id`
    pub fn greedy_action(&self, id: CellId) -> Action {
        self.cell(id).values().greedy()
    }

    /// Follow the greedy policy from `from` until a terminal cell or `max_steps` moves
    pub fn greedy_path(&self, from: CellId, max_steps: usize) -> Trajectory {
        let mut steps = Vec::new();
        let mut current = from;
        while !self.cell(current).is_terminal() && steps.len() < max_steps {
            let action = self.greedy_action(current);
            steps.push((current, action));
            current = self.take_action(current, action);
        }

        Trajectory {
            steps,
            end: current,
            terminated: self.cell(current).is_terminal(),
        }
    }

    /// Zero every value estimate
    pub fn reset_values(&mut self) {
        for cell in self.cells.iter_mut() {
            *cell.values_mut() = ActionValues::default();
        }
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..self.rows {
            for col in 0..self.cols {
                write!(f, "{}", self.cell_at(row, col).symbol())?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// A walk through the grid
#[derive(Debug, Clone, PartialEq)]
pub struct Trajectory {
    /// Each visited cell with the action taken there
    pub steps: Vec<(CellId, Action)>,
    /// Where the walk stopped
    pub end: CellId,
    /// Whether `end` is a terminal cell
    pub terminated: bool,
}

impl Trajectory {
    pub fn actions(&self) -> impl Iterator<Item = Action> + '_ {
        self.steps.iter().map(|&(_, a)| a)
    }
}

/// Rows of a layout with surrounding blank lines and carriage returns removed
fn layout_lines(layout: &str) -> Vec<&str> {
    let lines: Vec<&str> = layout.lines().map(|l| l.trim_end_matches('\r')).collect();
    let first = lines.iter().position(|l| !l.is_empty());
    let last = lines.iter().rposition(|l| !l.is_empty());
    match (first, last) {
        (Some(first), Some(last)) => lines[first..=last].to_vec(),
        _ => Vec::new(),
    }
}

#[cfg(test)]
mod tests {
    use strum::IntoEnumIterator;

    use super::*;

    fn seeded(layout: &str) -> Grid {
        Grid::parse_with_rng(layout, &SymbolTable::standard(), StdRng::seed_from_u64(7)).unwrap()
    }

    #[test]
    fn padding_surrounds_layout() {
        let grid = seeded(layouts::GRIDWORLD);
        assert_eq!((grid.rows(), grid.cols()), (8, 8));
        assert_eq!(grid.cells.len(), 10 * 10, "One cell of padding on each side");

        let padded: Vec<_> = grid
            .cells
            .iter()
            .enumerate()
            .filter(|(_, c)| c.is_padding())
            .map(|(i, _)| grid.position(CellId(i)))
            .collect();
        assert_eq!(padded.len(), 4 * 10 - 4);
        for (r, c) in padded {
            assert!(r == 0 || r == 9 || c == 0 || c == 9, "({r}, {c}) is on the border");
        }
        assert!(grid.cells.iter().filter(|c| c.is_padding()).all(|c| !c.is_steppable()));
    }

    #[test]
    fn neighbors_are_offset_cells() {
        let grid = seeded(layouts::CLIFF_WALKING);
        let width = grid.cols() + 2;
        for (i, cell) in grid.cells.iter().enumerate() {
            if cell.is_padding() {
                assert!(!cell.has_neighbors(), "Padding is never linked");
                continue;
            }
            let (r, c) = grid.position(CellId(i));
            assert_eq!(cell.neighbor(Action::North), CellId((r - 1) * width + c));
            assert_eq!(cell.neighbor(Action::East), CellId(r * width + c + 1));
            assert_eq!(cell.neighbor(Action::South), CellId((r + 1) * width + c));
            assert_eq!(cell.neighbor(Action::West), CellId(r * width + c - 1));
        }
    }

    #[test]
    fn values_start_at_zero() {
        let grid = seeded(layouts::GRIDWORLD);
        for (_, cell) in grid.cells() {
            for action in Action::iter() {
                assert_eq!(cell.values()[action], 0.0, "{} {action}", cell.symbol());
            }
        }
    }

    #[test]
    fn blocked_moves_stay_in_place() {
        let grid = seeded("+W\n++");
        let origin = grid.id_at(0, 0);
        assert_eq!(grid.take_action(origin, Action::North), origin, "Padding blocks");
        assert_eq!(grid.take_action(origin, Action::West), origin, "Padding blocks");
        assert_eq!(grid.take_action(origin, Action::East), origin, "Wall blocks");
        assert_eq!(grid.take_action(origin, Action::South), grid.id_at(1, 0));
        assert_eq!(grid.take_action(grid.id_at(1, 0), Action::East), grid.id_at(1, 1));
    }

    #[test]
    fn designated_start() {
        let mut grid = seeded(layouts::CLIFF_WALKING);
        let start = grid.id_at(5, 0);
        assert_eq!(grid.start(), Some(start));
        assert_eq!(grid.starting_position().unwrap(), start);
    }

    #[test]
    fn random_starts_are_eligible() {
        let mut grid = seeded(layouts::GRIDWORLD);
        assert_eq!(grid.start(), None);
        for _ in 0..2000 {
            let id = grid.starting_position().unwrap();
            let cell = grid.cell(id);
            assert!(cell.is_eligible_start(), "{} is not a valid start", cell.symbol());
            assert!(!cell.is_padding());
        }
    }

    #[test]
    fn no_eligible_start() {
        let mut grid = seeded("WT\nOW");
        let err = grid.starting_position().unwrap_err();
        assert!(matches!(err, Error::NoEligibleStart), "Got {err:?}");
    }

    #[test]
    fn sparse_grid_always_finds_its_start() {
        let layout: Vec<String> = (0..100)
            .map(|row| {
                (0..100)
                    .map(|col| if (row, col) == (50, 50) { '+' } else { 'W' })
                    .collect()
            })
            .collect();
        let mut grid = Grid::parse_with_rng(
            &layout.join("\n"),
            &SymbolTable::standard(),
            StdRng::seed_from_u64(1),
        )
        .unwrap();

        let only = grid.id_at(50, 50);
        for _ in 0..100 {
            assert_eq!(grid.starting_position().unwrap(), only, "The single open cell");
        }
    }

    #[test]
    fn parse_errors() {
        let symbols = SymbolTable::standard();

        let err = Grid::parse("++\n+X", &symbols).unwrap_err();
        assert!(matches!(
            err,
            Error::UnknownSymbol { symbol: 'X', row: 1, col: 1 }
        ));

        let err = Grid::parse("+++\n++", &symbols).unwrap_err();
        assert!(matches!(
            err,
            Error::NonRectangularLayout { row: 1, expected: 3, found: 2 }
        ));

        let err = Grid::parse("S++\n++S", &symbols).unwrap_err();
        assert!(matches!(
            err,
            Error::MultipleStarts { first: (0, 0), second: (1, 2) }
        ));

        let err = Grid::parse("\n\n", &symbols).unwrap_err();
        assert!(matches!(err, Error::EmptyLayout));

        let err = Grid::parse("+|+", &symbols).unwrap_err();
        assert!(matches!(err, Error::UnknownSymbol { symbol: '|', .. }));
    }

    #[test]
    fn surrounding_blank_lines_are_ignored() {
        let grid = seeded("\nS+T\r\n\n");
        assert_eq!((grid.rows(), grid.cols()), (1, 3));
        assert_eq!(grid.to_string(), "S+T\n");
    }

    #[test]
    fn greedy_path_stops_at_terminal() {
        let mut grid = seeded("S+T");
        let start = grid.id_at(0, 0);
        let middle = grid.id_at(0, 1);
        grid.cell_mut(start).values_mut()[Action::East] = 1.0;
        grid.cell_mut(middle).values_mut()[Action::East] = 1.0;

        let path = grid.greedy_path(start, 10);
        assert!(path.terminated);
        assert_eq!(path.end, grid.id_at(0, 2));
        assert_eq!(path.actions().collect::<Vec<_>>(), [Action::East, Action::East]);

        grid.reset_values();
        let path = grid.greedy_path(start, 10);
        assert!(!path.terminated, "All-zero values walk North into the border");
        assert_eq!(path.steps.len(), 10);
    }
}
