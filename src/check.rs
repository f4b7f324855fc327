//! Update check flow.
//!
//! Compares each recorded version with the latest one reported by a
//! [`ReleaseSource`]. Versions are compared as plain strings, so `"10.0.0"`
//! sorts below `"2.0.0"`.

use std::cmp::Ordering;

use serde::Serialize;

use crate::error::{Result, SuError};
use crate::releases::ReleaseSource;
use crate::store::Versions;

/// How the latest version relates to the recorded one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Comparison {
    UpToDate,
    UpdateAvailable,
    /// The recorded version sorts above the latest release.
    Discrepancy,
}

impl Comparison {
    /// Lexicographic comparison of `latest` against `current`.
    #[must_use]
    pub fn between(current: &str, latest: &str) -> Self {
        match latest.cmp(current) {
            Ordering::Equal => Self::UpToDate,
            Ordering::Greater => Self::UpdateAvailable,
            Ordering::Less => Self::Discrepancy,
        }
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::UpToDate => "Up to date",
            Self::UpdateAvailable => "Update Available!",
            Self::Discrepancy => "Version discrepancy",
        }
    }
}

/// Result of checking one tracked application.
#[derive(Debug)]
pub enum CheckOutcome {
    Compared {
        latest: String,
        comparison: Comparison,
    },
    Skipped {
        reason: String,
    },
    Failed(SuError),
}

#[derive(Debug)]
pub struct CheckReport {
    pub name: String,
    pub current: String,
    pub outcome: CheckOutcome,
}

impl CheckReport {
    #[must_use]
    pub const fn comparison(&self) -> Option<Comparison> {
        match &self.outcome {
            CheckOutcome::Compared { comparison, .. } => Some(*comparison),
            _ => None,
        }
    }
}

/// Tallies over a batch of reports.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct CheckSummary {
    pub up_to_date: usize,
    pub updates_available: usize,
    pub discrepancies: usize,
    pub skipped: usize,
    pub failed: usize,
}

impl CheckSummary {
    #[must_use]
    pub fn from_reports(reports: &[CheckReport]) -> Self {
        let mut summary = Self::default();
        for report in reports {
            match &report.outcome {
                CheckOutcome::Compared { comparison, .. } => match comparison {
                    Comparison::UpToDate => summary.up_to_date += 1,
                    Comparison::UpdateAvailable => summary.updates_available += 1,
                    Comparison::Discrepancy => summary.discrepancies += 1,
                },
                CheckOutcome::Skipped { .. } => summary.skipped += 1,
                CheckOutcome::Failed(_) => summary.failed += 1,
            }
        }
        summary
    }
}

/// Runs checks against an injected release source.
pub struct Checker<'a> {
    source: &'a dyn ReleaseSource,
}

impl<'a> Checker<'a> {
    pub fn new(source: &'a dyn ReleaseSource) -> Self {
        Self { source }
    }

    /// Check a single application.
    ///
    /// Names outside the `owner/repo` form are skipped rather than failed.
    pub fn check_one(&self, name: &str, current: &str) -> CheckReport {
        let outcome = if name.contains('/') {
            tracing::debug!(%name, %current, "checking for updates");
            match self.source.latest_version(name) {
                Ok(latest) => {
                    let comparison = Comparison::between(current, &latest);
                    tracing::debug!(%name, %latest, ?comparison, "compared versions");
                    CheckOutcome::Compared { latest, comparison }
                }
                Err(err) => {
                    tracing::debug!(%name, error = %err, "check failed");
                    CheckOutcome::Failed(err)
                }
            }
        } else {
            CheckOutcome::Skipped {
                reason: "Not in 'owner/repo' format. Cannot check for updates via GitHub."
                    .to_string(),
            }
        };

        CheckReport {
            name: name.to_string(),
            current: current.to_string(),
            outcome,
        }
    }

    /// Check one tracked application by name.
    pub fn check_named(&self, versions: &Versions, name: &str) -> Result<CheckReport> {
        let current = versions
            .get(name)
            .ok_or_else(|| SuError::AppNotFound(name.to_string()))?;
        Ok(self.check_one(name, current))
    }

    /// Check every tracked application in identifier order, handing each
    /// report to `on_report` as soon as it is ready.
    pub fn check_each<F>(&self, versions: &Versions, mut on_report: F)
    where
        F: FnMut(CheckReport),
    {
        for (name, current) in versions {
            on_report(self.check_one(name, current));
        }
    }

    /// Check every tracked application in identifier order.
    pub fn check_all(&self, versions: &Versions) -> Vec<CheckReport> {
        let mut reports = Vec::with_capacity(versions.len());
        self.check_each(versions, |report| reports.push(report));
        reports
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{StubAnswer, StubReleases};

    fn versions(pairs: &[(&str, &str)]) -> Versions {
        pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect()
    }

    #[test]
    fn comparison_is_lexicographic() {
        assert_eq!(Comparison::between("1.0.0", "1.0.0"), Comparison::UpToDate);
        assert_eq!(
            Comparison::between("1.0.0", "1.1.0"),
            Comparison::UpdateAvailable
        );
        assert_eq!(
            Comparison::between("1.2.0", "1.1.0"),
            Comparison::Discrepancy
        );
        // String ordering, not semantic versioning.
        assert_eq!(
            Comparison::between("2.0.0", "10.0.0"),
            Comparison::Discrepancy
        );
    }

    #[test]
    fn comparison_labels() {
        assert_eq!(Comparison::UpToDate.label(), "Up to date");
        assert_eq!(Comparison::UpdateAvailable.label(), "Update Available!");
        assert_eq!(Comparison::Discrepancy.label(), "Version discrepancy");
    }

    #[test]
    fn check_one_compares_against_latest() {
        let source = StubReleases::new().with_version("owner/repo", "1.1.0");
        let checker = Checker::new(&source);

        let report = checker.check_one("owner/repo", "1.0.0");
        assert_eq!(report.comparison(), Some(Comparison::UpdateAvailable));
        match report.outcome {
            CheckOutcome::Compared { latest, .. } => assert_eq!(latest, "1.1.0"),
            other => panic!("unexpected outcome {other:?}"),
        }
    }

    #[test]
    fn check_one_skips_unqualified_names_without_lookup() {
        let source = StubReleases::new();
        let checker = Checker::new(&source);

        let report = checker.check_one("localtool", "1.0");
        assert!(matches!(report.outcome, CheckOutcome::Skipped { .. }));
        assert!(source.calls().is_empty());
    }

    #[test]
    fn check_one_reports_lookup_failure() {
        let source = StubReleases::new().with_answer("owner/repo", StubAnswer::Status(404));
        let checker = Checker::new(&source);

        let report = checker.check_one("owner/repo", "1.0.0");
        assert!(matches!(
            report.outcome,
            CheckOutcome::Failed(SuError::Api { status: 404, .. })
        ));
    }

    #[test]
    fn check_all_skips_only_unqualified_entry() {
        let source = StubReleases::new()
            .with_version("a/one", "1.0.0")
            .with_version("c/three", "3.1.0");
        let checker = Checker::new(&source);
        let tracked = versions(&[("a/one", "1.0.0"), ("b-local", "2.0.0"), ("c/three", "3.0.0")]);

        let reports = checker.check_all(&tracked);
        assert_eq!(reports.len(), 3);
        assert_eq!(reports[0].comparison(), Some(Comparison::UpToDate));
        assert!(matches!(reports[1].outcome, CheckOutcome::Skipped { .. }));
        assert_eq!(reports[2].comparison(), Some(Comparison::UpdateAvailable));
        assert_eq!(source.calls(), vec!["a/one", "c/three"]);
    }

    #[test]
    fn check_all_continues_after_failure() {
        let source = StubReleases::new()
            .with_answer("a/broken", StubAnswer::MissingTag)
            .with_version("b/fine", "1.0.0");
        let checker = Checker::new(&source);
        let tracked = versions(&[("a/broken", "1.0"), ("b/fine", "1.0.0")]);

        let reports = checker.check_all(&tracked);
        assert!(matches!(
            reports[0].outcome,
            CheckOutcome::Failed(SuError::MissingTag { .. })
        ));
        assert_eq!(reports[1].comparison(), Some(Comparison::UpToDate));

        let summary = CheckSummary::from_reports(&reports);
        assert_eq!(summary.failed, 1);
        assert_eq!(summary.up_to_date, 1);
    }

    #[test]
    fn check_all_on_empty_store_is_empty() {
        let source = StubReleases::new();
        let checker = Checker::new(&source);
        assert!(checker.check_all(&Versions::new()).is_empty());
        assert!(source.calls().is_empty());
    }

    #[test]
    fn check_named_requires_tracked_app() {
        let source = StubReleases::new().with_version("owner/repo", "2.0");
        let checker = Checker::new(&source);
        let tracked = versions(&[("owner/repo", "1.0")]);

        let err = checker.check_named(&tracked, "other/repo").unwrap_err();
        assert!(matches!(err, SuError::AppNotFound(ref name) if name == "other/repo"));
        assert!(source.calls().is_empty());

        let report = checker.check_named(&tracked, "owner/repo").unwrap();
        assert_eq!(report.comparison(), Some(Comparison::UpdateAvailable));
    }

    #[test]
    fn summary_counts_every_outcome() {
        let source = StubReleases::new()
            .with_version("a/a", "1")
            .with_version("b/b", "2")
            .with_version("c/c", "0");
        let checker = Checker::new(&source);
        let tracked = versions(&[("a/a", "1"), ("b/b", "1"), ("c/c", "1"), ("d", "1"), ("e/e", "1")]);

        let summary = CheckSummary::from_reports(&checker.check_all(&tracked));
        assert_eq!(
            summary,
            CheckSummary {
                up_to_date: 1,
                updates_available: 1,
                discrepancies: 1,
                skipped: 1,
                failed: 1,
            }
        );
    }
}
