//! Startup migration entry point guarded by the [`MigrationLock`].

use sea_orm_migration::{prelude::*, sea_orm::DatabaseConnection};
use thiserror::Error;

use crate::lock::{LockError, LockFailurePolicy, MigrationLock, Sleeper};

/// Errors aborting the startup migration sequence.
#[derive(Error, Debug)]
pub enum MigrationError {
    #[error(transparent)]
    Lock(#[from] LockError),
    #[error(transparent)]
    Db(#[from] DbErr),
}

/// A migration step applied by this instance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppliedMigration {
    pub name: String,
}

/// Runs pending migrations if this instance wins the migration lock.
///
/// The lock owner applies every pending migration of `M` in order, releases the
/// lock and returns the applied steps. Any other instance waits until the lock is
/// released and returns an empty list, trusting the owner to have migrated the
/// schema.
///
/// When a migration fails the owner keeps or removes the lock marker according to
/// the lock's [`LockFailurePolicy`], then returns the migration error.
///
/// # Arguments
/// - `db` - Connection to the shared database
/// - `lock` - Lock marker shared by every instance booting against `db`
///
/// # Returns
/// - `Ok(Vec<AppliedMigration>)` - Migrations applied by this instance, in order
/// - `Err(MigrationError::Lock)` - Lock could not be acquired, released or awaited
/// - `Err(MigrationError::Db)` - A migration step or the tracking table failed
pub async fn migrations_up<M, S>(
    db: &DatabaseConnection,
    lock: &MigrationLock<S>,
) -> Result<Vec<AppliedMigration>, MigrationError>
where
    M: MigratorTrait,
    S: Sleeper,
{
    if !lock.acquire().await? {
        lock.wait().await?;
        return Ok(Vec::new());
    }

    match apply_pending::<M>(db).await {
        Ok(applied) => {
            lock.release().await?;
            Ok(applied)
        }
        Err(err) => {
            match lock.failure_policy() {
                LockFailurePolicy::Retain => tracing::error!(
                    "Migrations failed, keeping lock {} so no instance proceeds against a \
                     partially migrated schema; remove it once the database is repaired",
                    lock.path().display()
                ),
                LockFailurePolicy::Release => {
                    if let Err(release_err) = lock.release().await {
                        tracing::error!("{}", release_err);
                    }
                }
            }

            Err(err.into())
        }
    }
}

async fn apply_pending<M: MigratorTrait>(
    db: &DatabaseConnection,
) -> Result<Vec<AppliedMigration>, DbErr> {
    let pending: Vec<AppliedMigration> = M::get_pending_migrations(db)
        .await?
        .iter()
        .map(|migration| AppliedMigration {
            name: migration.name().to_string(),
        })
        .collect();

    if !pending.is_empty() {
        M::up(db, None).await?;
    }

    Ok(pending)
}
