use clap::Parser;
use screen_layout::cli::commands::{cmd_check, cmd_demo, cmd_render};
use screen_layout::cli::config::{Cli, Commands, load_config};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let config = load_config(cli.config.as_deref());

    match cli.command {
        Commands::Demo { format, output } => {
            // Resolve demo settings: CLI > config > defaults
            let format = format.as_deref().unwrap_or(&config.demo.format);
            let output = output.as_deref().or(config.demo.output.as_deref());
            cmd_demo(format, output, cli.verbose)?;
        }
        Commands::Render { input } => {
            cmd_render(&input, cli.verbose)?;
        }
        Commands::Check { input } => {
            let all_unique = cmd_check(&input, cli.verbose)?;
            if !all_unique {
                std::process::exit(1);
            }
        }
    }

    Ok(())
}
