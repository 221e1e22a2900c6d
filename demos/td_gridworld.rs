use std::{error::Error, path::Path};

use gridworld_td::{
    algo::{Algorithm, TdAgent, TdConfig},
    exploration::{EpsilonGreedy, Policy},
    export,
    grid::{layouts, Action, Grid, SymbolTable},
};

const NUM_EPISODES: u32 = 10_000;
const EPSILON: f32 = 0.1;

/// Render the greedy action of every open cell as an arrow
fn policy_map(grid: &Grid) -> String {
    let mut out = String::new();
    for row in 0..grid.rows() {
        for col in 0..grid.cols() {
            let cell = grid.cell_at(row, col);
            let c = if cell.is_terminal() || !cell.is_steppable() {
                cell.symbol()
            } else {
                match grid.greedy_action(grid.id_at(row, col)) {
                    Action::North => '^',
                    Action::East => '>',
                    Action::South => 'v',
                    Action::West => '<',
                }
            };
            out.push(c);
        }
        out.push('\n');
    }
    out
}

fn run(algorithm: Algorithm, policy: impl Policy, out: &Path) -> Result<(), Box<dyn Error>> {
    let mut grid = Grid::parse(layouts::GRIDWORLD, &SymbolTable::standard())?;
    let config = match algorithm {
        Algorithm::QLearning => TdConfig::q_learning(),
        Algorithm::Sarsa => TdConfig::sarsa(),
    };

    let mut agent = TdAgent::new(config, policy);
    let summaries = agent.train(&mut grid, NUM_EPISODES)?;
    let tail = &summaries[summaries.len() - 100..];
    let mean = tail.iter().map(|s| s.reward).sum::<f32>() / tail.len() as f32;

    println!("{algorithm}: mean reward over the last 100 episodes {mean:.2}");
    println!("{}", policy_map(&grid));

    let file = format!("gridworld_{}.csv", algorithm.to_string().to_lowercase());
    export::write_values_to_path(&grid, out.join(file))?;
    Ok(())
}

fn main() -> Result<(), Box<dyn Error>> {
    let out = Path::new("demos/out");

    run(Algorithm::QLearning, EpsilonGreedy::new(EPSILON), out)?;
    run(Algorithm::Sarsa, EpsilonGreedy::new(EPSILON), out)?;

    Ok(())
}
