//! `fincalc` -- financial formula calculator CLI.
//!
//! Parses CLI arguments with clap, resolves the runtime context, and
//! dispatches to command handlers.

mod cli;
mod commands;
mod context;
mod output;

use std::sync::atomic::{AtomicBool, Ordering};

use clap::Parser;
use tracing_subscriber::EnvFilter;

use cli::{Cli, Commands};
use context::RuntimeContext;

/// Tracks whether a Ctrl+C has already been received.
static CTRLC_RECEIVED: AtomicBool = AtomicBool::new(false);

/// Log filter used by `--verbose` when `RUST_LOG` is unset.
const VERBOSE_FILTER: &str =
    "fincalc=debug,fincalc_core=debug,fincalc_registry=debug,fincalc_config=debug";

fn main() {
    // First Ctrl+C: exit cleanly. Second: force exit.
    let _ = ctrlc::set_handler(|| {
        if CTRLC_RECEIVED.swap(true, Ordering::SeqCst) {
            std::process::exit(1);
        }
        std::process::exit(0);
    });

    let cli = Cli::parse();

    // Logging comes first so configuration discovery is traced too.
    if cli.global.verbose {
        let filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(VERBOSE_FILTER));
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .init();
    }

    let result = RuntimeContext::from_global_args(&cli.global).and_then(|ctx| {
        match cli.command {
            Some(Commands::List(args)) => commands::list::run(&ctx, &args),
            Some(Commands::Show(args)) => commands::show::run(&ctx, &args),
            Some(Commands::Solve(args)) => commands::solve::run(&ctx, &args),
            Some(Commands::Transfer(args)) => commands::transfer::run(&ctx, &args),
            Some(Commands::Calc(args)) => commands::calc::run(&ctx, &args),
            Some(Commands::Config(args)) => commands::config_cmd::run(&ctx, &args),
            Some(Commands::Completion(args)) => commands::completion::run(&ctx, &args),
            Some(Commands::Version) => commands::version::run(&ctx),
            None => {
                // No subcommand -- print help
                use clap::CommandFactory;
                Cli::command().print_help().ok();
                println!();
                Ok(())
            }
        }
    });

    if let Err(e) = result {
        if cli.global.json {
            let err_json = serde_json::json!({
                "error": format!("{:#}", e),
            });
            if let Ok(s) = serde_json::to_string_pretty(&err_json) {
                eprintln!("{}", s);
            }
        } else {
            eprintln!("Error: {:#}", e);
        }
        std::process::exit(1);
    }
}
