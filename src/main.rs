use urlutils::cli::CliCommand;
use urlutils::logging;

fn main() {
    // Initialize logging as early as possible.
    if let Err(err) = logging::init_logging() {
        eprintln!("urlutils: {:#}", err);
    }

    if let Err(err) = CliCommand::run_from_args() {
        tracing::error!("{:#}", err);
        eprintln!("urlutils error: {:#}", err);
        std::process::exit(1);
    }
}
