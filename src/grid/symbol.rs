use std::collections::HashMap;

/// Symbol used for the padding border around every layout
pub const PADDING_SYMBOL: char = '|';

/// Static properties shared by all cells drawn with the same symbol
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CellKind {
    pub symbol: char,
    /// Reward returned to an agent entering the cell
    pub reward: f32,
    /// Whether an agent may move onto the cell
    pub steppable: bool,
    /// Whether entering the cell ends the episode
    pub terminal: bool,
}

impl CellKind {
    pub fn new(symbol: char, reward: f32, steppable: bool, terminal: bool) -> Self {
        Self {
            symbol,
            reward,
            steppable,
            terminal,
        }
    }
}

/// Mapping from layout symbols to [`CellKind`]s
///
/// The padding kind is kept apart from the layout alphabet: it is only ever
/// used for the border and cannot appear in a layout.
#[derive(Debug, Clone)]
pub struct SymbolTable {
    kinds: HashMap<char, CellKind>,
    padding: CellKind,
    start: Option<char>,
}

impl SymbolTable {
    /// Create an empty table with the given padding reward
    pub fn new(padding_reward: f32) -> Self {
        Self {
            kinds: HashMap::new(),
            padding: CellKind::new(PADDING_SYMBOL, padding_reward, false, false),
            start: None,
        }
    }

    /// The alphabet of the built-in layouts
    ///
    /// | symbol | meaning  | reward | steppable | terminal |
    /// |--------|----------|--------|-----------|----------|
    /// | `+`    | empty    | -1     | yes       | no       |
    /// | `W`    | wall     | -1     | no        | no       |
    /// | `O`    | pit      | -20    | yes       | yes      |
    /// | `C`    | cliff    | -100   | yes       | yes      |
    /// | `T`    | treasure | 10     | yes       | yes      |
    /// | `S`    | start    | -1     | yes       | no       |
    pub fn standard() -> Self {
        Self::new(-1.0)
            .insert(CellKind::new('+', -1.0, true, false))
            .insert(CellKind::new('W', -1.0, false, false))
            .insert(CellKind::new('O', -20.0, true, true))
            .insert(CellKind::new('C', -100.0, true, true))
            .insert(CellKind::new('T', 10.0, true, true))
            .insert(CellKind::new('S', -1.0, true, false))
            .with_start('S')
    }

    /// Add or replace a kind, keyed by its symbol
    ///
    /// **Panics** if the kind uses the reserved padding symbol
    pub fn insert(mut self, kind: CellKind) -> Self {
        assert_ne!(
            kind.symbol, PADDING_SYMBOL,
            "`{PADDING_SYMBOL}` is reserved for padding"
        );
        self.kinds.insert(kind.symbol, kind);
        self
    }

    /// Mark a symbol as the designated start cell
    pub fn with_start(mut self, symbol: char) -> Self {
        self.start = Some(symbol);
        self
    }

    pub fn get(&self, symbol: char) -> Option<&CellKind> {
        self.kinds.get(&symbol)
    }

    pub fn padding(&self) -> &CellKind {
        &self.padding
    }

    pub fn is_start(&self, symbol: char) -> bool {
        self.start == Some(symbol)
    }
}

impl Default for SymbolTable {
    fn default() -> Self {
        Self::standard()
    }
}
