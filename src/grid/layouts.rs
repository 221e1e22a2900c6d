//! Built-in layouts for [`SymbolTable::standard`](super::SymbolTable::standard)

/// An 8x8 maze with walls, a pit and a treasure in the far corner
///
/// There is no start cell, so every episode starts at a random empty cell.
pub const GRIDWORLD: &str = "\
++++++++
++WWWW++
+++++W++
+++++W++
+++++W++
++++O+++
+WWW++++
+++++++T";

/// Example 6.6 Cliff Walking from Reinforcement Learning: An Introduction by
/// Richard S. Sutton and Andrew G. Barto
pub const CLIFF_WALKING: &str = "\
++++++++++
++++++++++
++++++++++
++++++++++
++++++++++
SCCCCCCCCT";
