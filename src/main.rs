use clap::Parser;
use record_autofill::cli::commands::{cmd_aliases, cmd_extract, cmd_resolve, cmd_taxonomy};
use record_autofill::cli::config::{Cli, Commands, init_logging, load_config};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    let config = load_config(cli.config.as_deref());

    let report = match cli.command {
        Commands::Resolve { extraction, fill } => cmd_resolve(&extraction, &fill, &config)?,
        Commands::Extract {
            document,
            endpoint,
            fill,
        } => cmd_extract(&document, endpoint.as_deref(), &fill, &config)?,
        Commands::Taxonomy => cmd_taxonomy(),
        Commands::Aliases { form_type } => cmd_aliases(&form_type)?,
    };

    print!("{}", report);
    Ok(())
}
