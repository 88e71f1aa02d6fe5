//! Progress reporting for a running search.
//!
//! Reporting is advisory only. The driver hands a [`SearchStatus`] snapshot to a
//! [`StatusReporter`] every so many expansions and once at the end; nothing the
//! reporter does can influence the run.

use log::info;
use std::fmt;
use std::time::{Duration, Instant};

/// Per-run diagnostic context. Owns the start time of the run it belongs to.
#[derive(Debug, Clone)]
pub struct SearchContext {
    started: Instant,
    report_every: Option<u64>,
}

impl SearchContext {
    pub fn start(report_every: Option<u64>) -> Self {
        Self {
            started: Instant::now(),
            report_every,
        }
    }

    pub fn elapsed(&self) -> Duration {
        self.started.elapsed()
    }

    /// Whether a periodic report is due after `expanded` expansions.
    pub fn should_report(&self, expanded: u64) -> bool {
        match self.report_every {
            Some(every) if every > 0 => expanded % every == 0,
            _ => false,
        }
    }

    pub fn status(&self, expanded: u64, frontier: usize) -> SearchStatus {
        SearchStatus {
            expanded,
            frontier,
            elapsed: self.elapsed(),
            memory_bytes: memory_usage(),
        }
    }
}

/// Snapshot of search progress.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchStatus {
    pub expanded: u64,
    pub frontier: usize,
    pub elapsed: Duration,
    /// Resident set size, when the platform exposes it
    pub memory_bytes: Option<u64>,
}

impl SearchStatus {
    /// States generated so far: everything expanded plus everything waiting.
    pub fn generated(&self) -> u64 {
        self.expanded + self.frontier as u64
    }
}

impl fmt::Display for SearchStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let memory = match self.memory_bytes {
            Some(bytes) => format!("{:.2}", bytes as f64 / (1024.0 * 1024.0)).replace('.', ","),
            None => "n/a".to_string(),
        };
        write!(
            f,
            "#Expanded: {:>8}, #Frontier: {:>8}, #Generated: {:>8}, Time: {} s, Memory: {} MB",
            group_thousands(self.expanded),
            group_thousands(self.frontier as u64),
            group_thousands(self.generated()),
            format!("{:.3}", self.elapsed.as_secs_f64()).replace('.', ","),
            memory,
        )
    }
}

/// `1234567` -> `1.234.567`
fn group_thousands(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push('.');
        }
        out.push(c);
    }
    out
}

/// Receives status snapshots from the driver.
pub trait StatusReporter {
    fn report(&mut self, status: &SearchStatus);
}

/// Writes each status line through the `log` facade at info level.
#[derive(Debug, Default)]
pub struct LogReporter;

impl StatusReporter for LogReporter {
    fn report(&mut self, status: &SearchStatus) {
        info!("{}", status);
    }
}

/// Discards every report.
#[derive(Debug, Default)]
pub struct NullReporter;

impl StatusReporter for NullReporter {
    fn report(&mut self, _status: &SearchStatus) {}
}

/// Resident memory of the current process in bytes.
#[cfg(target_os = "linux")]
pub fn memory_usage() -> Option<u64> {
    let status = std::fs::read_to_string("/proc/self/status").ok()?;
    let line = status.lines().find(|l| l.starts_with("VmRSS:"))?;
    let kib: u64 = line.split_whitespace().nth(1)?.parse().ok()?;
    Some(kib * 1024)
}

#[cfg(not(target_os = "linux"))]
pub fn memory_usage() -> Option<u64> {
    None
}
