//! CLI entry point - the composition root.
//!
//! This is the ONLY place where infrastructure is wired together via
//! bootstrap. Command dispatch routes to handlers which delegate to
//! `GroupProvider`.

use std::io::{self, Write};
use std::process::ExitCode;

use clap::{CommandFactory, Parser};
use dsgroup_core::GroupAction;
use tracing_subscriber::EnvFilter;

use dsgroup_cli::{Cli, CliConfig, CliContext, CliError, Commands, bootstrap, handlers};

fn init_tracing(verbose: bool) {
    let fallback = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn dispatch(ctx: &CliContext, command: Commands, out: &mut impl Write) -> Result<(), CliError> {
    match command {
        Commands::Create(args) => {
            handlers::converge::execute(ctx, args.to_spec(), GroupAction::Create, out)?;
        }
        Commands::Manage(args) => {
            handlers::converge::execute(ctx, args.to_spec(), GroupAction::Manage, out)?;
        }
        Commands::Modify(args) => {
            handlers::converge::execute(ctx, args.to_spec(), GroupAction::Modify, out)?;
        }
        Commands::Remove { name } => {
            handlers::converge::remove(ctx, &name, out)?;
        }
        Commands::Apply { file, action } => {
            handlers::converge::apply_file(ctx, &file, action.into(), out)?;
        }
        Commands::Show { name, json } => {
            handlers::show::execute(ctx, &name, json, out)?;
        }
        Commands::FreeGid => {
            handlers::free_gid::execute(ctx, out)?;
        }
    }
    Ok(())
}

fn run(mut cli: Cli) -> Result<(), CliError> {
    // No command provided - show help
    let Some(command) = cli.command.take() else {
        Cli::command().print_help()?;
        return Ok(());
    };

    let config = CliConfig::from_cli(&cli).map_err(|err| CliError::Config(format!("{err:#}")))?;
    tracing::debug!(settings = ?config.settings, "resolved provider settings");
    let ctx = bootstrap(config);

    let stdout = io::stdout();
    dispatch(&ctx, command, &mut stdout.lock())
}

fn main() -> ExitCode {
    // Load environment variables before clap reads DSGROUP_* defaults
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {err}");
            ExitCode::from(err.exit_code())
        }
    }
}
