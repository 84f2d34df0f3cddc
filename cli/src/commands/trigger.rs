//! `socrange trigger <id>` - exercise the trigger endpoint once.

use socrange_core::api::{AppContext, CliError};

use super::cli::TriggerArgs;

pub async fn handle_trigger(args: TriggerArgs, ctx: &AppContext) -> Result<i32, CliError> {
    let services = ctx.build_services(ctx.cfg()).await?;

    let receipt = services
        .trigger
        .simulate(&args.id)
        .await
        .map_err(|e| CliError::Command(format!("trigger request failed: {e}")))?;

    println!("status:   {}", receipt.status);
    if let Some(delay) = receipt.delay {
        println!("delay:    {delay}ms");
    }
    if let Some(script_id) = receipt.script_id.as_deref() {
        println!("scriptId: {script_id}");
    }
    println!("message:  {}", receipt.message);

    Ok(if receipt.is_success() { 0 } else { 1 })
}
