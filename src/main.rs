use clap::Parser;
use formfix::cli::{Cli, Commands};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "formfix=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Init { path }) => {
            formfix::cli::init::run(path)?;
        }
        Some(Commands::Slug { titles }) => {
            formfix::cli::slug::run(titles)?;
        }
        Some(Commands::Check { alias }) => {
            formfix::cli::check::run(&alias)?;
        }
        Some(Commands::Apply {
            page,
            events,
            assume_yes,
        }) => {
            formfix::cli::apply::run(&cli.config, &page, events.as_deref(), assume_yes)?;
        }
        None => {
            // No subcommand provided, print help
            use clap::CommandFactory;
            Cli::command().print_help()?;
        }
    }

    Ok(())
}
