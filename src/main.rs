use std::io;

use anyhow::Result;
use clap::Parser;
use log::debug;

use train_cars::train::{prompt_range, PassengerRange, TokenReader, Train};

#[derive(Parser)]
#[command(name = "train_cars")]
#[command(about = "Inspect a train of passenger, baggage and luxury cars")]
struct Cli {
    /// Minimum passenger count for the range query (skips the prompt)
    #[arg(long, requires = "max", allow_negative_numbers = true)]
    min: Option<i64>,

    /// Maximum passenger count for the range query (skips the prompt)
    #[arg(long, requires = "min", allow_negative_numbers = true)]
    max: Option<i64>,

    /// Keep the cars in their original order
    #[arg(long)]
    no_sort: bool,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logger(cli.verbose);

    let mut train = Train::create_default_train();

    println!("All cars:");
    train.print_all_cars();

    println!("Total passengers: {}", train.total_passengers());
    println!("Total luggage: {}", train.total_luggage());

    if !cli.no_sort {
        train.sort_cars_by_comfort();
        println!();
        println!("Cars sorted by comfort:");
        train.print_all_cars();
    }

    let range = match (cli.min, cli.max) {
        (Some(min), Some(max)) => PassengerRange::new(min, max),
        _ => {
            println!();
            let stdin = io::stdin();
            let mut reader = TokenReader::new(stdin.lock());
            prompt_range(&mut reader, &mut io::stdout())?
        }
    };
    debug!("Range query: {:?}", range);

    println!();
    println!(
        "Cars with passenger count from {} to {}:",
        range.min, range.max
    );
    train.find_cars_by_passenger_range(&range);

    Ok(())
}

fn init_logger(verbose: bool) {
    let default_filter = if verbose { "train_cars=debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();
}
