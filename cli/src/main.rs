mod commands;
mod terminal;

use commands::{CommandLine, Commands, interfaces, scan};

use arpwarden_common::config::Config;

use crate::terminal::{logging, print, spinner};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let commands = CommandLine::parse_args();

    let cfg = Config {
        no_banner: commands.no_banner,
        quiet: commands.quiet,
        redact: commands.redact,
        disable_input: commands.no_input,
    };

    logging::init(&cfg);
    print::initialize();
    print::banner(cfg.no_banner, cfg.quiet);

    let result = match commands.command {
        Commands::Scan {
            duration,
            interface,
            gateway,
        } => {
            print::header("preparing the scan", cfg.quiet);
            scan::scan(duration, interface, gateway, &cfg).await
        }
        Commands::Interfaces => {
            print::header("capture interfaces", cfg.quiet);
            interfaces::interfaces(&cfg)
        }
    };

    spinner::stop();
    result
}
