use colored::Colorize;
use dbload::cli::CommandLineInterface;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let command_line_interface = CommandLineInterface::load();
    log::debug!("{command_line_interface:#?}");
    if let Err(error) = command_line_interface.run() {
        eprintln!("{} {error:#}", "error:".red().bold());
        std::process::exit(1);
    }
}
