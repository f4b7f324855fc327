//! shouldupdate list - List tracked applications

use clap::Args;
use colored::Colorize;
use serde::Serialize;

use crate::app::AppContext;
use crate::cli::output::{emit_info, emit_robot, header_line, robot_ok};
use crate::error::Result;

#[derive(Args, Debug)]
pub struct ListArgs {}

#[derive(Debug, Serialize)]
struct ListEntry<'a> {
    name: &'a str,
    version: &'a str,
}

pub fn run(ctx: &AppContext, _args: &ListArgs) -> Result<()> {
    let versions = ctx.store.load()?;

    if ctx.is_json() {
        let entries: Vec<_> = versions
            .iter()
            .map(|(name, version)| ListEntry { name, version })
            .collect();
        return emit_robot(&robot_ok(serde_json::json!({
            "count": entries.len(),
            "applications": entries,
        })));
    }

    if versions.is_empty() {
        emit_info("No applications currently managed. Use the 'add' command to add some.");
        return Ok(());
    }

    println!("{}", header_line("Managed Applications"));
    for (name, version) in &versions {
        println!(
            "  - Application: {}, Version: {}",
            name.yellow(),
            version.cyan()
        );
    }
    Ok(())
}
