mod commands;
mod terminal;

use commands::{CommandLine, Commands, check, form, lookup};
use ipterm_common::config::Config;
use terminal::{logging, print};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let commands = CommandLine::parse_args();

    logging::init_logging(commands.verbose)?;

    let cfg = Config {
        endpoint: commands.endpoint,
        quiet: commands.quiet,
        no_banner: commands.no_banner,
    };

    print::banner(cfg.no_banner, cfg.quiet);

    match commands.command.unwrap_or(Commands::Form) {
        Commands::Check { address } => {
            print::header("address check", cfg.quiet);
            check::check(&address);
            Ok(())
        }
        Commands::Lookup { address, json } => {
            print::header("ip lookup", cfg.quiet);
            lookup::lookup(&address, json, &cfg).await
        }
        Commands::Form => {
            print::header("ip terminal", cfg.quiet);
            form::form(&cfg).await
        }
    }
}
