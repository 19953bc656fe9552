use clap::Parser;
use log::info;

use mazesearch::{config::Config, render, solve, util, TextView};

fn main() -> Result<(), anyhow::Error> {
    env_logger::init();

    let config = Config::parse();
    let maze = util::load_maze(&config.maze, &config.parse_options())?;
    info!(
        "loaded {} ({}x{}), start {}, goal {}",
        config.maze.display(),
        maze.rows,
        maze.columns,
        maze.start,
        maze.goal
    );

    println!("Maze:");
    println!("{}", maze);

    println!("Solving...");
    let result = solve(&maze, config.policy)?;
    println!("States Explored: {}", result.explored_count);
    println!("Solution:");
    println!("{}", TextView::new(&maze).with_result(&result));

    if !config.no_image {
        render::save_image(&maze, Some(&result), &config.image_options(), &config.output)?;
        info!("wrote {}", config.output.display());
    }

    if let Some(path) = &config.report {
        util::Report::new(&maze, config.policy, &result).write(path)?;
        info!("wrote {}", path.display());
    }

    Ok(())
}
