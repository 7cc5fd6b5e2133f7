//! Process resource telemetry.
//!
//! Peak resident memory and CPU time come from `getrusage(RUSAGE_SELF)` on Unix and
//! are unavailable elsewhere. Telemetry is diagnostic only.

use std::time::Instant;

use serde::Serialize;

/// Resource usage of the current process at one point in time
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ResourceUsage {
    /// Peak resident set size in bytes
    pub peak_resident_bytes: u64,
    /// User-mode CPU time in seconds
    pub user_cpu_seconds: f64,
    /// Kernel-mode CPU time in seconds
    pub system_cpu_seconds: f64,
}

impl ResourceUsage {
    /// Read the current process's resource usage
    #[cfg(unix)]
    #[must_use]
    pub fn current() -> Option<Self> {
        let mut usage = std::mem::MaybeUninit::<libc::rusage>::zeroed();
        // SAFETY: getrusage writes a complete rusage into the pointer on success
        let rc = unsafe { libc::getrusage(libc::RUSAGE_SELF, usage.as_mut_ptr()) };
        if rc != 0 {
            return None;
        }
        // SAFETY: initialized by the successful call above
        let usage = unsafe { usage.assume_init() };

        Some(Self {
            peak_resident_bytes: max_rss_bytes(usage.ru_maxrss),
            user_cpu_seconds: timeval_seconds(usage.ru_utime),
            system_cpu_seconds: timeval_seconds(usage.ru_stime),
        })
    }

    /// Read the current process's resource usage
    #[cfg(not(unix))]
    #[must_use]
    pub fn current() -> Option<Self> {
        None
    }

    /// Total CPU time in seconds
    #[must_use]
    pub fn cpu_seconds(&self) -> f64 {
        self.user_cpu_seconds + self.system_cpu_seconds
    }
}

/// `ru_maxrss` is in bytes on macOS and kilobytes elsewhere
#[cfg(unix)]
fn max_rss_bytes(max_rss: libc::c_long) -> u64 {
    let max_rss = u64::try_from(max_rss).unwrap_or(0);
    if cfg!(target_os = "macos") {
        max_rss
    } else {
        max_rss * 1024
    }
}

#[cfg(unix)]
#[allow(clippy::cast_precision_loss)]
fn timeval_seconds(tv: libc::timeval) -> f64 {
    tv.tv_sec as f64 + tv.tv_usec as f64 / 1_000_000.0
}

#[allow(clippy::cast_precision_loss)]
fn bytes_to_mib(bytes: u64) -> f64 {
    bytes as f64 / 1_048_576.0
}

/// Resource usage over a section of work
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TelemetryReport {
    /// Peak resident set size of the process in bytes, if available
    pub peak_resident_bytes: Option<u64>,
    /// CPU time spent during the section in seconds, if available
    pub cpu_seconds: Option<f64>,
    /// Wall-clock time of the section in seconds
    pub wall_seconds: f64,
}

impl std::fmt::Display for TelemetryReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.peak_resident_bytes {
            Some(bytes) => write!(f, "Peak memory: {:.1} MiB", bytes_to_mib(bytes))?,
            None => write!(f, "Peak memory: NA")?,
        }
        match self.cpu_seconds {
            Some(secs) => write!(f, ", CPU time: {secs:.3}s")?,
            None => write!(f, ", CPU time: NA")?,
        }
        write!(f, ", Wall time: {:.3}s", self.wall_seconds)
    }
}

/// Measures resource usage from creation until [`Telemetry::finish`]
#[derive(Debug)]
pub struct Telemetry {
    started: Instant,
    start_usage: Option<ResourceUsage>,
}

impl Telemetry {
    #[must_use]
    pub fn start() -> Self {
        Self {
            started: Instant::now(),
            start_usage: ResourceUsage::current(),
        }
    }

    #[must_use]
    pub fn finish(self) -> TelemetryReport {
        let wall_seconds = self.started.elapsed().as_secs_f64();
        let end_usage = ResourceUsage::current();

        let cpu_seconds = match (self.start_usage, end_usage) {
            (Some(start), Some(end)) => Some((end.cpu_seconds() - start.cpu_seconds()).max(0.0)),
            _ => None,
        };

        TelemetryReport {
            peak_resident_bytes: end_usage.map(|u| u.peak_resident_bytes),
            cpu_seconds,
            wall_seconds,
        }
    }
}
