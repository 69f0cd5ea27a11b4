use colored::Colorize;
use schema_gbnf::cli::CommandLineInterface;
use tracing_subscriber::EnvFilter;

fn main() {
    let command_line_interface = CommandLineInterface::load();

    let default_level = if command_line_interface.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)))
        .with_writer(std::io::stderr)
        .init();

    if let Err(error) = command_line_interface.run() {
        eprintln!("{} {error:#}", "Error:".red().bold());
        std::process::exit(1);
    }
}
