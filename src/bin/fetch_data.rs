use std::io;
use std::process::ExitCode;

use clap::Parser;

use trading_bench::app::run_fetch;
use trading_bench::cli::FetchCli;
use trading_bench::fetch::ChartClient;
use trading_bench::Result;

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = FetchCli::parse();
    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {err}");
            ExitCode::from(err.exit_code())
        }
    }
}

fn run(cli: &FetchCli) -> Result<()> {
    let config = cli.resolve()?;
    let client = ChartClient::new(&config)?;
    let mut stdout = io::stdout().lock();
    run_fetch(&client, &config, &mut stdout)?;
    Ok(())
}
