//! Dump learned value tables for external plotting

use std::{fs::File, io::Write, path::Path};

use crate::{
    grid::{Action, Grid},
    Result,
};

const HEADER: [&str; 11] = [
    "row",
    "col",
    "symbol",
    "reward",
    "steppable",
    "terminal",
    "north",
    "east",
    "south",
    "west",
    "greedy",
];

/// Write one CSV record per layout cell, padding excluded, in row-major order
pub fn write_values<W: Write>(grid: &Grid, writer: W) -> Result<()> {
    let mut wtr = csv::Writer::from_writer(writer);
    wtr.write_record(HEADER)?;

    for ((row, col), cell) in grid.cells() {
        let values = cell.values();
        wtr.write_record([
            row.to_string(),
            col.to_string(),
            cell.symbol().to_string(),
            cell.reward().to_string(),
            cell.is_steppable().to_string(),
            cell.is_terminal().to_string(),
            values[Action::North].to_string(),
            values[Action::East].to_string(),
            values[Action::South].to_string(),
            values[Action::West].to_string(),
            values.greedy().to_string(),
        ])?;
    }

    wtr.flush()?;
    Ok(())
}

/// Write the value table to a CSV file, creating parent directories as needed
pub fn write_values_to_path(grid: &Grid, path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    write_values(grid, File::create(path)?)
}
