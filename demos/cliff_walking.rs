use std::{error::Error, path::Path};

use gridworld_td::{
    algo::{q_learning, sarsa},
    exploration::{DecayingEpsilonGreedy, EpsilonGreedy},
    export,
    grid::{layouts, Grid, SymbolTable},
};

const NUM_EPISODES: u32 = 10_000;

fn describe(name: &str, grid: &Grid) {
    let start = grid.start().expect("Cliff walking has a start cell");
    let path = grid.greedy_path(start, 100);
    let cells: Vec<_> = path.steps.iter().map(|&(id, _)| grid.position(id)).collect();
    println!(
        "{name}: {} greedy steps, reaches goal: {}\n  {:?}",
        path.steps.len(),
        path.terminated,
        cells
    );
}

fn main() -> Result<(), Box<dyn Error>> {
    let out = Path::new("demos/out");
    let symbols = SymbolTable::standard();

    // Q-learning learns the optimal path along the cliff edge
    let mut grid = Grid::parse(layouts::CLIFF_WALKING, &symbols)?;
    q_learning(&mut grid, EpsilonGreedy::new(0.1), 1.0, 1.0, NUM_EPISODES)?;
    describe("Q-learning", &grid);
    export::write_values_to_path(&grid, out.join("cliff_q_learning.csv"))?;

    // SARSA with a fixed epsilon prefers the safer path away from the edge
    let mut grid = Grid::parse(layouts::CLIFF_WALKING, &symbols)?;
    sarsa(&mut grid, EpsilonGreedy::new(0.1), 0.1, 1.0, NUM_EPISODES)?;
    describe("SARSA", &grid);
    export::write_values_to_path(&grid, out.join("cliff_sarsa.csv"))?;

    // With GLIE exploration SARSA converges to the optimal path as well
    let mut grid = Grid::parse(layouts::CLIFF_WALKING, &symbols)?;
    sarsa(&mut grid, DecayingEpsilonGreedy::glie(), 0.1, 1.0, NUM_EPISODES)?;
    describe("SARSA (GLIE)", &grid);
    export::write_values_to_path(&grid, out.join("cliff_sarsa_glie.csv"))?;

    Ok(())
}
