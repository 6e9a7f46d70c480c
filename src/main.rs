use anyhow::Context;
use clap::{ CommandFactory, Parser };
use stacksearch::print::DEFAULT_WIDTH;
use stacksearch::{ Args, HttpFetcher, Outcome, Printer, Session, StackSearch };
use std::io::{ self, IsTerminal };
use std::process::ExitCode;
use tracing::{ error, info };

fn main() -> ExitCode {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_max_level(args.log_level())
        .with_target(false)
        .init();

    match run(args) {
        Ok(code) => code,
        Err(err) => {
            error!("{:#}", err);
            ExitCode::FAILURE
        }
    }
}

fn run(args: Args) -> anyhow::Result<ExitCode> {
    let Some(query) = args.query() else {
        Args::command().print_help()?;
        return Ok(ExitCode::SUCCESS);
    };

    let fetcher = HttpFetcher::new().context("Failed to build HTTP client")?;
    let client = StackSearch::new(fetcher).with_filters(args.filters());

    let stdout = io::stdout();
    let styled = stdout.is_terminal();
    let width = crossterm::terminal::size()
        .map(|(cols, _)| usize::from(cols))
        .unwrap_or(DEFAULT_WIDTH);
    let printer = Printer::new(stdout.lock(), styled, width);

    let mut session = Session::new(client, io::stdin().lock(), printer)
        .with_mode(args.search_mode())
        .with_progress(io::stderr().is_terminal());
    let outcome = session.run(&query).context("Terminal I/O failed")?;
    info!("Session finished: {:?}", outcome);

    Ok(match outcome {
        Outcome::Failed => ExitCode::FAILURE,
        Outcome::NoResults | Outcome::Closed => ExitCode::SUCCESS,
    })
}
