use std::io;
use std::process::ExitCode;

use trading_bench::app::{run_plot, should_display};
use trading_bench::cli::{parse_plot_args, PlotCli, PlotInvocation, PLOT_USAGE};
use trading_bench::Result;

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = match parse_plot_args(std::env::args_os()) {
        PlotInvocation::Run(cli) => cli,
        PlotInvocation::Usage => {
            println!("{PLOT_USAGE}");
            return ExitCode::from(1);
        }
        PlotInvocation::Info(info) => info.exit(),
    };

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            println!("{err}");
            ExitCode::from(err.exit_code())
        }
    }
}

fn run(cli: &PlotCli) -> Result<()> {
    let config = cli.resolve()?;
    let mut stdout = io::stdout().lock();
    run_plot(
        &cli.csv_file,
        &config.plot,
        should_display(cli.no_display),
        &mut stdout,
    )
}
