use std::process;
use log::error;

use cskit::utils::logger::Logger;
use cskit::commands::{build_cli, CommandFactory, CskitCommandFactory};

fn main() {
    let matches = build_cli().get_matches();

    let logger = match matches.get_one::<String>("log-file") {
        Some(log_file) => match Logger::init_global_logger(log_file) {
            Ok(l) => l,
            Err(e) => {
                eprintln!("Error setting up global logger: {}", e);
                process::exit(1);
            }
        },
        None => {
            env_logger::init();
            Logger::disabled()
        }
    };

    let factory = CskitCommandFactory::new();

    match factory.create_command(&matches, &logger) {
        Ok(command) => match command.execute() {
            Ok(report) => print!("{}", report),
            Err(e) => {
                error!("Command execution error: {}", e);
                eprintln!("Error: {}", e);
                process::exit(1);
            }
        },
        Err(e) => {
            error!("Failed to create command: {}", e);
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    };
}
