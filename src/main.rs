use clap::Parser;
use fitledger::cli::{Cli, Commands, ConfigAction};
use fitledger::{cmd, output};
use std::process;

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Init { skip } => cmd::init::run(skip),
        Commands::Log { entry } => cmd::log::run(entry, cli.date, cli.human),
        Commands::Show { history } => cmd::show::run(history, cli.human),
        Commands::Delete { target } => cmd::delete::run(target, cli.human),
        Commands::Status => cmd::status::run(cli.date, cli.human),
        Commands::Achievements => cmd::achievements::run(cli.date, cli.human),
        Commands::Config { action } => match action {
            ConfigAction::Show => cmd::config::run_show(cli.human),
            ConfigAction::Set { key, value } => cmd::config::run_set(&key, &value),
        },
    };

    if let Err(e) = result {
        let err = output::error("", "general_error", &e.to_string());
        eprintln!("{}", serde_json::to_string(&err).unwrap());
        process::exit(1);
    }
}
