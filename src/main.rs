use clap::Parser;
use plate_change_rs::{direction::Direction, pool::Pool, solver};

#[derive(Parser)]
struct Args {
    /// Plates currently loaded on one side of the bar, comma-separated.
    #[arg(long, default_value = "2.5, 1")]
    current: String,

    /// Plate denominations available to add, comma-separated.
    #[arg(long, default_value = "1, 1.25, 2, 2.5")]
    available: String,

    /// Whether to increase or decrease the weight.
    #[arg(long, default_value = "increase", value_parser = clap::value_parser!(Direction))]
    direction: Direction,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let current = Pool::parse(&args.current);
    let available = Pool::parse(&args.available);

    let solution = solver::solve(&current, &available, args.direction)?;

    println!(
        "Smallest {} per side: {}kg",
        solution.direction(),
        solution.magnitude()
    );

    for (i, change) in solution.changes().iter().enumerate() {
        println!();
        println!("Option {}", i + 1);
        print!("{change}");
    }

    Ok(())
}
