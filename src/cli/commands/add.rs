//! shouldupdate add - Track an application or update its recorded version

use clap::Args;
use colored::Colorize;
use serde::Serialize;

use crate::app::AppContext;
use crate::cli::output::{emit_robot, emit_success, robot_ok};
use crate::error::Result;

#[derive(Args, Debug)]
pub struct AddArgs {
    /// Application identifier, usually `owner/repo`
    pub name: String,

    /// Currently installed version
    #[arg(id = "app_version", value_name = "VERSION")]
    pub version: String,
}

#[derive(Debug, Serialize)]
struct AddReport<'a> {
    name: &'a str,
    version: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    previous_version: Option<String>,
    action: &'static str,
}

pub fn run(ctx: &AppContext, args: &AddArgs) -> Result<()> {
    let previous = ctx.store.upsert(&args.name, &args.version)?;

    if ctx.is_json() {
        let action = if previous.is_some() { "updated" } else { "added" };
        return emit_robot(&robot_ok(AddReport {
            name: &args.name,
            version: &args.version,
            previous_version: previous,
            action,
        }));
    }

    let message = match previous {
        Some(old) => format!(
            "Application '{}' updated from version '{}' to '{}'.",
            args.name.yellow(),
            old.magenta(),
            args.version.cyan()
        ),
        None => format!(
            "Application '{}' added with version '{}'.",
            args.name.yellow(),
            args.version.cyan()
        ),
    };
    emit_success(&message);
    Ok(())
}
