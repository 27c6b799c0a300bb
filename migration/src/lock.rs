//! File-based advisory lock serializing schema migrations across processes.
//!
//! Every instance that boots against a shared database tries to create the same
//! lock marker with exclusive-create semantics. The instance whose create succeeds
//! owns the lock and runs migrations; the others poll until the marker disappears.
//! The filesystem marker is the only coordination primitive: there is no shared
//! memory between instances and no database-level locking.
//!
//! The marker path must point at a location shared by every candidate instance
//! (e.g. a shared volume) whose parent directory already exists.

use std::{
    future::Future,
    io,
    path::{Path, PathBuf},
    str::FromStr,
    time::Duration,
};

use thiserror::Error;
use tokio::time::Instant;

/// Default delay between two checks for the lock marker while waiting.
pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_millis(300);

/// Errors raised while acquiring, inspecting, releasing or waiting for the lock.
#[derive(Error, Debug)]
pub enum LockError {
    /// The marker could not be created for a reason other than it already existing.
    ///
    /// Signals a misconfigured environment (missing directory, permission denied)
    /// and must abort startup rather than be treated as "already locked".
    #[error("Failed to create migration lock {}: {source}", .path.display())]
    Acquire {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The owner failed to remove the marker.
    ///
    /// A marker left behind blocks every future startup until removed by hand.
    #[error("Failed to remove migration lock {}: {source}", .path.display())]
    Release {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Checking whether the marker exists failed.
    #[error("Failed to inspect migration lock {}: {source}", .path.display())]
    Inspect {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The marker was still present when the configured wait deadline passed.
    #[error(
        "Migration lock {} still held after waiting {waited:?}; remove it manually if its owner crashed",
        .path.display()
    )]
    WaitTimeout { path: PathBuf, waited: Duration },
}

/// What the lock owner does with the marker when a migration step fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LockFailurePolicy {
    /// Keep the marker so that no other instance proceeds against a
    /// half-migrated schema. An operator has to remove it.
    #[default]
    Retain,
    /// Remove the marker so that waiting instances are unblocked.
    Release,
}

impl FromStr for LockFailurePolicy {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "retain" => Ok(Self::Retain),
            "release" => Ok(Self::Release),
            other => Err(format!(
                "unknown lock failure policy '{}', expected 'retain' or 'release'",
                other
            )),
        }
    }
}

/// Suspension used between two polls of the lock marker.
///
/// Production code uses [`TokioSleeper`]; tests inject their own implementation
/// to drive the wait loop without real delays.
pub trait Sleeper: Send + Sync {
    fn sleep(&self, duration: Duration) -> impl Future<Output = ()> + Send;
}

/// Sleeper backed by the tokio timer.
#[derive(Debug, Clone, Copy, Default)]
pub struct TokioSleeper;

impl Sleeper for TokioSleeper {
    fn sleep(&self, duration: Duration) -> impl Future<Output = ()> + Send {
        tokio::time::sleep(duration)
    }
}

/// Handle on the migration lock marker at a given path.
///
/// Constructing the handle touches nothing on disk; only [`acquire`],
/// [`release`] and [`wait`] do.
///
/// [`acquire`]: MigrationLock::acquire
/// [`release`]: MigrationLock::release
/// [`wait`]: MigrationLock::wait
#[derive(Debug, Clone)]
pub struct MigrationLock<S = TokioSleeper> {
    path: PathBuf,
    poll_interval: Duration,
    wait_timeout: Option<Duration>,
    failure_policy: LockFailurePolicy,
    sleeper: S,
}

impl MigrationLock {
    /// Creates a lock handle for the marker at `path` with default settings:
    /// 300 ms poll interval, no wait deadline, marker retained on failure.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            poll_interval: DEFAULT_POLL_INTERVAL,
            wait_timeout: None,
            failure_policy: LockFailurePolicy::default(),
            sleeper: TokioSleeper,
        }
    }
}

impl<S: Sleeper> MigrationLock<S> {
    /// Sets the delay between two checks while waiting. Zero is raised to 1 ms.
    pub fn with_poll_interval(mut self, poll_interval: Duration) -> Self {
        self.poll_interval = poll_interval.max(Duration::from_millis(1));
        self
    }

    /// Sets the maximum time spent waiting for another owner, `None` waits forever.
    pub fn with_wait_timeout(mut self, wait_timeout: Option<Duration>) -> Self {
        self.wait_timeout = wait_timeout;
        self
    }

    /// Sets what happens to the marker when a migration step fails.
    pub fn with_failure_policy(mut self, failure_policy: LockFailurePolicy) -> Self {
        self.failure_policy = failure_policy;
        self
    }

    /// Replaces the sleeper used by [`wait`](MigrationLock::wait).
    pub fn with_sleeper<T: Sleeper>(self, sleeper: T) -> MigrationLock<T> {
        MigrationLock {
            path: self.path,
            poll_interval: self.poll_interval,
            wait_timeout: self.wait_timeout,
            failure_policy: self.failure_policy,
            sleeper,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn poll_interval(&self) -> Duration {
        self.poll_interval
    }

    pub fn failure_policy(&self) -> LockFailurePolicy {
        self.failure_policy
    }

    /// Attempts to create the lock marker.
    ///
    /// # Returns
    /// - `Ok(true)` - This call created the marker; the caller owns the lock
    /// - `Ok(false)` - The marker already existed; another instance owns the lock
    /// - `Err(LockError::Acquire)` - Any other filesystem failure
    pub async fn acquire(&self) -> Result<bool, LockError> {
        let created = tokio::fs::OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(&self.path)
            .await;

        match created {
            Ok(_) => {
                tracing::info!("Acquired migration lock {}", self.path.display());
                Ok(true)
            }
            Err(e) if e.kind() == io::ErrorKind::AlreadyExists => {
                tracing::info!(
                    "Migration lock {} is held by another instance",
                    self.path.display()
                );
                Ok(false)
            }
            Err(source) => Err(LockError::Acquire {
                path: self.path.clone(),
                source,
            }),
        }
    }

    /// Removes the lock marker. Only the owner may call this, and only once its
    /// migrations are finished.
    pub async fn release(&self) -> Result<(), LockError> {
        tokio::fs::remove_file(&self.path)
            .await
            .map_err(|source| LockError::Release {
                path: self.path.clone(),
                source,
            })?;

        tracing::info!("Released migration lock {}", self.path.display());
        Ok(())
    }

    /// Returns whether the lock marker currently exists.
    pub async fn is_held(&self) -> Result<bool, LockError> {
        tokio::fs::try_exists(&self.path)
            .await
            .map_err(|source| LockError::Inspect {
                path: self.path.clone(),
                source,
            })
    }

    /// Polls until the lock marker is gone.
    ///
    /// Checks the marker, then sleeps one poll interval between checks, so the
    /// call returns at most one interval after the owner releases. Without a
    /// wait timeout the loop never ends if the owner never releases.
    ///
    /// The timeout is measured against the clock, so slow marker checks count
    /// towards it. It also expires once the polls slept add up to the timeout.
    ///
    /// # Returns
    /// - `Ok(())` - The marker is absent
    /// - `Err(LockError::WaitTimeout)` - The deadline passed with the marker present
    /// - `Err(LockError::Inspect)` - The marker could not be checked
    pub async fn wait(&self) -> Result<(), LockError> {
        let started = Instant::now();
        let max_polls = self
            .wait_timeout
            .map(|timeout| polls_within(timeout, self.poll_interval));
        let mut polls: u32 = 0;

        loop {
            if !self.is_held().await? {
                if polls > 0 {
                    tracing::info!(
                        "Migration lock {} released after {} polls",
                        self.path.display(),
                        polls
                    );
                }
                return Ok(());
            }

            let slept = self.poll_interval * polls;
            let elapsed = started.elapsed();
            let deadline_passed = self.wait_timeout.is_some_and(|timeout| elapsed >= timeout);

            if deadline_passed || max_polls.is_some_and(|max| polls >= max) {
                return Err(LockError::WaitTimeout {
                    path: self.path.clone(),
                    waited: elapsed.max(slept),
                });
            }

            if polls == 0 {
                tracing::info!(
                    "Waiting for migration lock {} to be released",
                    self.path.display()
                );
            }

            self.sleeper.sleep(self.poll_interval).await;
            polls = polls.saturating_add(1);
        }
    }
}

/// Number of poll intervals that fit in `timeout`, rounded up.
fn polls_within(timeout: Duration, poll_interval: Duration) -> u32 {
    let interval = poll_interval.as_millis().max(1);
    let polls = timeout.as_millis().div_ceil(interval);
    u32::try_from(polls).unwrap_or(u32::MAX)
}
