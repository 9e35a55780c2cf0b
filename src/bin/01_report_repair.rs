use std::process;

use anyhow::{Context, Result};

use adventofcode::day01::find_pair;

fn run() -> Result<bool> {
    let nums = adventofcode::read_input_lines(|line| line.parse::<i64>()).with_context(|| {
        format!("couldn't load puzzle input from {:?}", adventofcode::INPUT_PATH)
    })?;

    match find_pair(&nums) {
        Some(pair) => {
            println!("{}", pair);
            Ok(true)
        }
        None => Ok(false),
    }
}

fn main() {
    adventofcode::init_logging();

    match run() {
        Ok(true) => {}
        Ok(false) => {
            println!("Not found");
            process::exit(1);
        }
        Err(err) => {
            eprintln!("Error: {err:#}");
            process::exit(1);
        }
    }
}
