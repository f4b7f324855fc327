//! shouldupdate remove - Stop tracking an application

use clap::Args;
use colored::Colorize;
use serde::Serialize;

use crate::app::AppContext;
use crate::cli::output::{emit_info, emit_robot, emit_success, robot_ok};
use crate::error::Result;

#[derive(Args, Debug)]
pub struct RemoveArgs {
    /// Application identifier to remove
    pub name: String,
}

#[derive(Debug, Serialize)]
struct RemoveReport<'a> {
    name: &'a str,
    removed: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    version: Option<String>,
}

pub fn run(ctx: &AppContext, args: &RemoveArgs) -> Result<()> {
    let removed = ctx.store.remove(&args.name)?;

    if ctx.is_json() {
        return emit_robot(&robot_ok(RemoveReport {
            name: &args.name,
            removed: removed.is_some(),
            version: removed,
        }));
    }

    if removed.is_some() {
        emit_success(&format!("Application '{}' removed.", args.name.yellow()));
    } else {
        emit_info(&format!(
            "Application '{}' not found in configuration. Nothing to remove.",
            args.name.magenta()
        ));
    }
    Ok(())
}
