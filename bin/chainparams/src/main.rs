use chain_args::ArgsManager;
use chainparams::{run, setup_node_args, Outcome, APP_NAME};
use common::init_logger;
use snafu::{ResultExt, Whatever};

fn main() -> Result<(), Whatever> {
    let args = ArgsManager::new(APP_NAME);
    setup_node_args(&args);
    args.parse_parameters(std::env::args_os())
        .whatever_context("Error parsing command line arguments")?;

    init_logger(&args.get_arg_or("loglevel", "info"))
        .whatever_context("Failed to initialize logger")?;

    match run(&args).whatever_context("Startup failed")? {
        Outcome::Help(help) => print!("{help}"),
        Outcome::Report(report) => {
            let json = serde_json::to_string_pretty(&report)
                .whatever_context("Failed to serialize chain report")?;
            println!("{json}");
        }
    }

    Ok(())
}
