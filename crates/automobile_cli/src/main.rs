//! `automobiles` binary.
//!
//! - `serve`: open the store once and run both adapters over it.
//! - `load`: one-shot CSV import on an independent connection.

mod config;

use anyhow::Context;
use automobile_api::AppState;
use automobile_core::{load_csv, open_db, share_connection};
use clap::Parser;
use config::{Cli, Command, LoadArgs, ServeArgs};
use log::{error, info};
use std::process::ExitCode;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    if let Err(err) = automobile_core::init_logging(cli.logging.level(), cli.logging.target()) {
        eprintln!("failed to initialize logging: {err}");
        return ExitCode::FAILURE;
    }

    let result = match cli.command {
        Command::Serve(args) => serve(args).await,
        Command::Load(args) => load(args),
    };
    exit_code(result)
}

/// The error is reported through the logger only.
fn exit_code(result: anyhow::Result<()>) -> ExitCode {
    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("event=command module=cli status=error error={err:#}");
            ExitCode::FAILURE
        }
    }
}

async fn serve(args: ServeArgs) -> anyhow::Result<()> {
    let conn = open_db(&args.store.db_path)
        .with_context(|| format!("opening `{}`", args.store.db_path.display()))?;
    let state = AppState::from_connection(share_connection(conn));

    automobile_api::serve(state, &args.bind)
        .await
        .with_context(|| format!("serving on `{}`", args.bind))
}

fn load(args: LoadArgs) -> anyhow::Result<()> {
    let mut conn = open_db(&args.store.db_path)
        .with_context(|| format!("opening `{}`", args.store.db_path.display()))?;

    let report = load_csv(&mut conn, &args.csv)?;
    conn.close().map_err(|(_, err)| err)?;

    info!(
        "event=bulk_load module=cli status=ok inserted={} csv={}",
        report.inserted,
        args.csv.display()
    );
    println!("Imported {} automobiles from {}", report.inserted, args.csv.display());
    Ok(())
}
