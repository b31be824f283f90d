use anyhow::{Context, Result};
use clap::Parser;

use booklist::cli::handlers::{
    CommandContext, handle_mutate, handle_query, handle_schema, handle_serve,
};
use booklist::cli::{Cli, Commands};
use booklist::config::BooklistConfig;

fn main() -> Result<()> {
    let cli = Cli::parse();
    booklist::logging::init(cli.verbose, cli.log_file.clone());

    let config = BooklistConfig::load_or_default(cli.config.as_deref())
        .context("Failed to load booklist configuration")?;
    let ctx = CommandContext::new(config);

    match cli.command {
        Commands::Serve {
            host,
            port,
            no_graphiql,
        } => handle_serve(ctx, host, port, no_graphiql),
        Commands::Query { query, variables } => handle_query(ctx, query, variables),
        Commands::Mutate {
            mutation,
            variables,
        } => handle_mutate(ctx, mutation, variables),
        Commands::Schema => handle_schema(ctx),
    }
}
