use std::fmt;

use chrono::{DateTime, Local};
use serde::Serialize;

/// Outcome of a single check
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", content = "message", rename_all = "snake_case")]
pub enum CheckStatus {
    /// Check passed
    Ok,
    /// The table is viewable but some records will render degraded
    Warning(String),
    /// The table cannot be viewed
    Failed(String),
}

impl CheckStatus {
    fn symbol(&self) -> &'static str {
        match self {
            CheckStatus::Ok => "✓",
            CheckStatus::Warning(_) => "⚠",
            CheckStatus::Failed(_) => "✗",
        }
    }
}

/// A named check with its outcome
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationCheck {
    /// Short check name
    pub name: String,
    /// Outcome
    #[serde(flatten)]
    pub status: CheckStatus,
}

impl ValidationCheck {
    pub(crate) fn ok(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            status: CheckStatus::Ok,
        }
    }

    pub(crate) fn warning(name: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            status: CheckStatus::Warning(message.into()),
        }
    }

    pub(crate) fn failed(name: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            status: CheckStatus::Failed(message.into()),
        }
    }
}

/// Whole-table validation report
#[derive(Debug, Clone, Serialize)]
pub struct ValidationReport {
    /// Table origin
    pub source: String,
    /// When the report was produced
    pub generated_at: DateTime<Local>,
    /// Checks in execution order
    pub checks: Vec<ValidationCheck>,
}

impl ValidationReport {
    /// Start an empty report for `source`
    pub fn new(source: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            generated_at: Local::now(),
            checks: Vec::new(),
        }
    }

    /// Append a check
    pub fn add_check(&mut self, check: ValidationCheck) {
        self.checks.push(check);
    }

    /// Look a check up by name
    pub fn check(&self, name: &str) -> Option<&ValidationCheck> {
        self.checks.iter().find(|c| c.name == name)
    }

    fn count(&self, pred: impl Fn(&CheckStatus) -> bool) -> usize {
        self.checks.iter().filter(|c| pred(&c.status)).count()
    }

    /// Any check failed
    pub fn has_failures(&self) -> bool {
        self.failure_count() > 0
    }

    /// Any check warned
    pub fn has_warnings(&self) -> bool {
        self.warning_count() > 0
    }

    /// Passed checks
    pub fn success_count(&self) -> usize {
        self.count(|s| matches!(s, CheckStatus::Ok))
    }

    /// Warnings
    pub fn warning_count(&self) -> usize {
        self.count(|s| matches!(s, CheckStatus::Warning(_)))
    }

    /// Failures
    pub fn failure_count(&self) -> usize {
        self.count(|s| matches!(s, CheckStatus::Failed(_)))
    }

    fn verdict(&self) -> &'static str {
        if self.has_failures() {
            "Validation FAILED"
        } else if self.has_warnings() {
            "Validation PASSED with warnings"
        } else {
            "Validation PASSED"
        }
    }

    /// Format the report with terminal colors when the `colorized_output`
    /// feature is enabled, plain text otherwise
    pub fn format_colored(&self) -> String {
        #[cfg(feature = "colorized_output")]
        {
            use console::{style, Emoji};

            let mut out = String::new();
            out.push_str(&format!("{}\n", style("geoview Validation Report").bold().cyan()));
            out.push_str(&format!("{}\n", style("=========================").cyan()));
            out.push_str(&format!("{}: {}\n\n", style("Source").bold(), self.source));

            for check in &self.checks {
                let symbol = Emoji(check.status.symbol(), match check.status {
                    CheckStatus::Ok => "[OK]",
                    CheckStatus::Warning(_) => "[WARN]",
                    CheckStatus::Failed(_) => "[FAIL]",
                });
                match &check.status {
                    CheckStatus::Ok => {
                        out.push_str(&format!("[{}] {}\n", symbol, style(&check.name).green()));
                    }
                    CheckStatus::Warning(msg) => out.push_str(&format!(
                        "[{}] {} - {}: {}\n",
                        symbol,
                        style(&check.name).yellow(),
                        style("WARNING").yellow().bold(),
                        msg
                    )),
                    CheckStatus::Failed(msg) => out.push_str(&format!(
                        "[{}] {} - {}: {}\n",
                        symbol,
                        style(&check.name).red(),
                        style("FAILED").red().bold(),
                        msg
                    )),
                }
            }

            out.push_str(&format!(
                "\n{}: {} passed, {} warnings, {} failed\n\n",
                style("Summary").bold(),
                style(self.success_count()).green(),
                style(self.warning_count()).yellow(),
                style(self.failure_count()).red()
            ));
            let verdict = if self.has_failures() {
                style(self.verdict()).red().bold()
            } else if self.has_warnings() {
                style(self.verdict()).yellow().bold()
            } else {
                style(self.verdict()).green().bold()
            };
            out.push_str(&format!("{}\n", verdict));
            out
        }

        #[cfg(not(feature = "colorized_output"))]
        {
            self.to_string()
        }
    }
}

impl fmt::Display for ValidationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "geoview Validation Report")?;
        writeln!(f, "=========================")?;
        writeln!(f, "Source: {}", self.source)?;
        writeln!(f)?;

        for check in &self.checks {
            write!(f, "[{}] {}", check.status.symbol(), check.name)?;
            match &check.status {
                CheckStatus::Ok => writeln!(f)?,
                CheckStatus::Warning(msg) => writeln!(f, " - WARNING: {}", msg)?,
                CheckStatus::Failed(msg) => writeln!(f, " - FAILED: {}", msg)?,
            }
        }

        writeln!(f)?;
        writeln!(
            f,
            "Summary: {} passed, {} warnings, {} failed",
            self.success_count(),
            self.warning_count(),
            self.failure_count()
        )?;
        writeln!(f)?;
        writeln!(f, "{}", self.verdict())
    }
}
