//! Session commands.

use anyhow::{Context as _, Result};
use loom_cache::Cache;
use loom_commerce::cart::CART_SLOT;
use serde_json::json;

use super::{SessionArgs, SessionCommand};
use crate::context::Context;

/// Run the session command.
pub fn run(args: SessionArgs, ctx: &Context) -> Result<()> {
    let storage = ctx.storage()?;

    match args.command.unwrap_or(SessionCommand::Show) {
        SessionCommand::Show => {
            let id = ctx.session_id(&storage)?;
            if ctx.output.is_json() {
                ctx.output.json(&json!({ "session": id }));
            } else {
                ctx.output.kv("Session", id.as_str());
            }
        }
        SessionCommand::New => {
            let id = ctx.start_session(&storage)?;
            if ctx.output.is_json() {
                ctx.output.json(&json!({ "session": id }));
            } else {
                ctx.output.success(&format!("Started session {}", id));
            }
        }
        SessionCommand::End => {
            let id = ctx.session_id(&storage)?;
            Cache::new(&storage)
                .delete(&id.slot_key(CART_SLOT))
                .context("Failed to delete cart slot")?;
            ctx.output.success(&format!("Ended session {}", id));
        }
    }

    Ok(())
}
