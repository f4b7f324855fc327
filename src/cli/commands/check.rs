//! shouldupdate check - Check tracked applications for newer releases

use clap::Args;
use colored::{ColoredString, Colorize};
use serde::Serialize;

use crate::app::AppContext;
use crate::check::{CheckOutcome, CheckReport, CheckSummary, Checker, Comparison};
use crate::cli::output::{emit_error, emit_info, emit_robot, robot_ok};
use crate::error::{Result, StructuredError};

#[derive(Args, Debug)]
pub struct CheckArgs {
    /// Check only this application (default: all tracked applications)
    pub name: Option<String>,
}

/// JSON view of one [`CheckReport`].
#[derive(Debug, Serialize)]
struct ReportView<'a> {
    name: &'a str,
    current: &'a str,
    status: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    latest: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    reason: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<StructuredError>,
}

impl<'a> From<&'a CheckReport> for ReportView<'a> {
    fn from(report: &'a CheckReport) -> Self {
        let mut view = Self {
            name: &report.name,
            current: &report.current,
            status: "failed",
            latest: None,
            reason: None,
            error: None,
        };
        match &report.outcome {
            CheckOutcome::Compared { latest, comparison } => {
                view.status = match comparison {
                    Comparison::UpToDate => "up_to_date",
                    Comparison::UpdateAvailable => "update_available",
                    Comparison::Discrepancy => "discrepancy",
                };
                view.latest = Some(latest);
            }
            CheckOutcome::Skipped { reason } => {
                view.status = "skipped";
                view.reason = Some(reason);
            }
            CheckOutcome::Failed(err) => view.error = Some(err.to_structured()),
        }
        view
    }
}

pub fn run(ctx: &AppContext, args: &CheckArgs) -> Result<()> {
    let versions = ctx.store.load()?;
    let releases = ctx.releases()?;
    let checker = Checker::new(&releases);

    if let Some(name) = &args.name {
        let report = checker.check_named(&versions, name)?;
        if ctx.is_json() {
            return emit_robot(&robot_ok(ReportView::from(&report)));
        }
        print_report(&report);
        return Ok(());
    }

    if ctx.is_json() {
        let reports = checker.check_all(&versions);
        let summary = CheckSummary::from_reports(&reports);
        let views: Vec<ReportView<'_>> = reports.iter().map(ReportView::from).collect();
        return emit_robot(&robot_ok(serde_json::json!({
            "summary": summary,
            "applications": views,
        })));
    }

    if versions.is_empty() {
        emit_info("No applications currently managed. Use the 'add' command to add some.");
        return Ok(());
    }

    println!("{}", "Checking all managed applications for updates...".blue());
    let mut failed = 0_usize;
    checker.check_each(&versions, |report| {
        if matches!(report.outcome, CheckOutcome::Failed(_)) {
            failed += 1;
        }
        print_report(&report);
    });
    tracing::debug!(total = versions.len(), failed, "check finished");
    Ok(())
}

fn print_report(report: &CheckReport) {
    match &report.outcome {
        CheckOutcome::Skipped { reason } => {
            emit_info(&format!("Skipping {}: {reason}", report.name.magenta()));
        }
        CheckOutcome::Failed(err) => {
            println!("Checking {}...", report.name.yellow());
            emit_error(&format!("Failed to check {}: {err}", report.name.magenta()));
        }
        CheckOutcome::Compared { latest, comparison } => {
            let (latest, label) = paint(latest, *comparison);
            println!(
                "Checking {}... Current: {}, Latest: {latest} ({label})",
                report.name.yellow(),
                report.current.cyan()
            );
        }
    }
}

fn paint(latest: &str, comparison: Comparison) -> (ColoredString, ColoredString) {
    let label = comparison.label();
    match comparison {
        Comparison::UpToDate => (latest.green(), label.green()),
        Comparison::UpdateAvailable => (latest.red(), label.red()),
        Comparison::Discrepancy => (latest.yellow(), label.yellow()),
    }
}
