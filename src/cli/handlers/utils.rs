use anyhow::{Context, Result};

use super::CommandContext;

pub fn parse_variables(variables: Option<String>) -> Result<async_graphql::Variables> {
    match variables {
        Some(v) => serde_json::from_str(&v).context("Variables must be a JSON object"),
        None => Ok(async_graphql::Variables::default()),
    }
}

/// Run `query` against a fresh library and print the JSON response.
pub fn execute_and_print(
    ctx: &CommandContext,
    query: &str,
    variables: Option<String>,
) -> Result<()> {
    let schema = ctx.schema();
    let vars = parse_variables(variables)?;

    let request = async_graphql::Request::new(query).variables(vars);
    let response = tokio::runtime::Runtime::new()?.block_on(schema.execute(request));

    if response.is_err() {
        tracing::debug!(errors = response.errors.len(), "GraphQL request returned errors");
    }
    println!("{}", serde_json::to_string_pretty(&response)?);
    Ok(())
}
