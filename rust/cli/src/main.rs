use std::io;

fn main() {
    let filter = gunslinger_cli::config::load()
        .map(|cfg| cfg.log_filter)
        .unwrap_or_else(|_| gunslinger_cli::config::DEFAULT_LOG_FILTER.to_string());
    gunslinger_cli::logging::init_logging(&filter);

    let code = gunslinger_cli::run(std::env::args(), &mut io::stdout(), &mut io::stderr());
    std::process::exit(code);
}
