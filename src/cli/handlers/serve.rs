use crate::graphql::{GRAPHQL_PATH, run_server};
use anyhow::Result;
use colored::Colorize;

use super::CommandContext;

pub fn handle_serve(
    ctx: CommandContext,
    host: Option<String>,
    port: Option<u16>,
    no_graphiql: bool,
) -> Result<()> {
    let mut settings = ctx.config.server.clone();
    if let Some(h) = host {
        settings.host = h;
    }
    if let Some(p) = port {
        settings.port = p;
    }
    if no_graphiql {
        settings.graphiql = false;
    }

    let schema = ctx.schema();
    let url = format!("http://{}{}", settings.bind_address(), GRAPHQL_PATH);

    println!("{} GraphQL server on {}", "Starting".green(), url.cyan());
    if settings.graphiql {
        println!("GraphiQL: {}", url.cyan());
    }

    tokio::runtime::Runtime::new()?.block_on(run_server(schema, &settings))?;
    Ok(())
}
