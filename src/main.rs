use colored::Colorize;
use log4rs;
use std::error::Error;
use subnet_calculator::output::{render_error, render_record};
use subnet_calculator::{calculate_subnet, SubnetError};

fn main() -> Result<(), Box<dyn Error>> {
    // Do as little as possible in main.rs as it can't contain any tests
    log4rs::init_file("log4rs.yml", Default::default()).expect("Error initializing log4rs");
    log::info!("#Start main()");

    let args: Vec<String> = std::env::args().skip(1).collect();
    if args.len() != 2 {
        eprintln!("Usage: subnet-calculator <address> <prefix>");
        std::process::exit(2);
    }

    let result = match args[1].parse::<u8>() {
        Ok(prefix) => calculate_subnet(&args[0], prefix),
        Err(_) => Err(SubnetError::InvalidPrefix),
    };

    match result {
        Ok(record) => println!("{}", render_record(&record)?),
        Err(e) => {
            log::warn!(
                "{} to calculate subnet for {:?}: {e}",
                "failed".on_red(),
                args
            );
            println!("{}", render_error(&e));
            std::process::exit(1);
        }
    }

    Ok(())
}
