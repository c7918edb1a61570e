mod cli;
mod commands;

use std::process::ExitCode;

use clap::Parser;

use cli::{Cli, Command};

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();
    productdesk_observability::init(cli.log_format);

    let mut stdout = std::io::stdout().lock();
    let ok = match &cli.command {
        Command::Create {
            fields,
            dry_run,
            reset_on_success,
        } => commands::create(fields, *dry_run, *reset_on_success, &mut stdout).await?,
        Command::Validate { fields } => commands::check(fields, &mut stdout)?,
        Command::Schema => commands::schema(&mut stdout)?,
    };

    Ok(if ok { ExitCode::SUCCESS } else { ExitCode::FAILURE })
}
