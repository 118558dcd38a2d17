use clap::Parser;
use form_binding::cli::commands::{cmd_apply, cmd_check, cmd_extract};
use form_binding::cli::config::{Cli, Commands, load_config};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let config = load_config(cli.config.as_deref());

    // Resolve trace sink: CLI > config
    let trace = cli.trace.as_deref().or(config.trace.file.as_deref());

    match cli.command {
        Commands::Extract {
            schema,
            output,
            pretty,
        } => {
            cmd_extract(
                &schema,
                output.as_deref(),
                pretty || config.output.pretty,
                cli.verbose,
                trace,
            )?;
        }
        Commands::Apply {
            schema,
            values,
            output,
            pretty,
        } => {
            cmd_apply(
                &schema,
                &values,
                output.as_deref(),
                pretty || config.output.pretty,
                cli.verbose,
                trace,
            )?;
        }
        Commands::Check { schema, values } => {
            let ok = cmd_check(&schema, &values, cli.verbose, trace)?;
            if !ok {
                std::process::exit(1);
            }
        }
    }

    Ok(())
}
