use anyhow::Result;

use super::CommandContext;
use super::utils::execute_and_print;

pub fn handle_mutate(
    ctx: CommandContext,
    mutation: String,
    variables: Option<String>,
) -> Result<()> {
    // Auto-wrap in mutation { }
    let query = wrap_mutation(&mutation);
    execute_and_print(&ctx, &query, variables)
}

fn wrap_mutation(body: &str) -> String {
    let trimmed = body.trim_start();
    if trimmed.starts_with("mutation") {
        body.to_string()
    } else {
        format!("mutation {{ {} }}", body)
    }
}
