use std::path::PathBuf;
use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use log::{debug, LevelFilter};
use gridlife::*;

/// Run Conway's Game of Life on a fixed grid and count live-cell communities.
#[derive(Parser, Debug)]
#[command(name = "gridlife", version)]
struct Args {
  /// Grid file: `.rle` for RLE, anything else for the plain
  /// `rows columns true false ...` format. Without it the 5x5 seed is used.
  file: Option<PathBuf>,

  /// Number of generations to advance.
  #[arg(short, long, default_value_t = 0, allow_negative_numbers = true)]
  generations: i64,

  /// Edge handling when counting neighbors.
  #[arg(long, value_enum, default_value_t = Policy::Bounded)]
  neighbors: Policy,

  /// Edge handling when joining cells into communities.
  #[arg(long, value_enum, default_value_t = Policy::Bounded)]
  communities: Policy,

  /// Print the final grid.
  #[arg(short, long)]
  print: bool,

  /// Format used by `--print`.
  #[arg(long, value_enum, default_value_t = Format::Text)]
  format: Format,

  /// Log at debug level.
  #[arg(short, long)]
  verbose: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum Policy {
  Bounded,
  Toroidal,
}

impl From<Policy> for Adjacency {
  fn from(policy: Policy) -> Self {
    match policy {
      Policy::Bounded => Adjacency::Bounded,
      Policy::Toroidal => Adjacency::Toroidal,
    }
  }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum Format {
  Text,
  Rle,
}

fn main() -> Result<()> {
  let args = Args::parse();

  let mut logger = env_logger::Builder::from_env(
    env_logger::Env::default().default_filter_or("warn"));
  if args.verbose {
    logger.filter_level(LevelFilter::Debug);
  }
  logger.init();

  let config = Config::new(args.neighbors.into(), args.communities.into());

  let mut uni = match &args.file {
    Some(path) => Universe::load(path)
      .with_context(|| format!("failed to load grid from {}", path.display()))?,
    None => Universe::seed(),
  };
  config.apply(&mut uni);
  debug!("running with {:?}, rule {}", config, uni.rule());

  uni.advance(args.generations)
    .context("failed to advance the simulation")?;

  println!("generation: {}", uni.generation());
  println!("size: {}x{}", uni.rows(), uni.columns());
  println!("alive cells: {}", uni.total_alive_cells());
  println!("alive: {}", uni.is_alive());
  println!("communities: {}", config.num_of_communities(&uni));

  if args.print {
    match args.format {
      Format::Text => print!("{}", text::write(uni.grid())),
      Format::Rle => print!("{}", rle::write(uni.grid(), uni.rule())),
    }
  }

  Ok(())
}
