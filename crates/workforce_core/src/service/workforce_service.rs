//! Workforce use-case service.
//!
//! # Responsibility
//! - Implement `loadSnapshot`, `appendDepartment` and `appendEmployee`.
//! - Publish the store and the loading status through watch channels.
//!
//! # Invariants
//! - Observers see either the previous or the new complete snapshot.
//! - `loading` is `true` exactly while one long-running operation runs;
//!   a second submission in that window fails with `ServiceError::Busy`.
//! - A failed load keeps the previous snapshot and records the error; a
//!   successful load clears it.
//! - Validation, id assignment and append happen in one atomic store update.

use crate::analytics::engine::{aggregate, Analytics};
use crate::analytics::stats::{department_overview, DepartmentOverview};
use crate::config::EngineConfig;
use crate::model::department::{Department, DepartmentId};
use crate::model::employee::Employee;
use crate::model::validation::ValidationError;
use crate::store::record_store::RecordStore;
use crate::store::snapshot::Snapshot;
use crate::store::source::{LoadError, SnapshotSource};
use chrono::Utc;
use log::{error, info};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::sync::Arc;
use std::time::Instant;
use tokio::sync::watch;

/// Error returned by service operations.
#[derive(Debug, Clone, PartialEq)]
pub enum ServiceError {
    /// Input rejected; the store is unchanged.
    Validation(ValidationError),
    /// Dataset load failed; the previous snapshot is retained.
    Load(LoadError),
    /// Another long-running operation is still pending.
    Busy,
}

impl Display for ServiceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(err) => write!(f, "{err}"),
            Self::Load(err) => write!(f, "{err}"),
            Self::Busy => write!(f, "another operation is still in progress"),
        }
    }
}

impl Error for ServiceError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            Self::Load(err) => Some(err),
            Self::Busy => None,
        }
    }
}

impl From<ValidationError> for ServiceError {
    fn from(value: ValidationError) -> Self {
        Self::Validation(value)
    }
}

impl From<LoadError> for ServiceError {
    fn from(value: LoadError) -> Self {
        Self::Load(value)
    }
}

/// Observable progress of long-running operations.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LoadStatus {
    pub loading: bool,
    /// Last load failure, cleared by the next successful load.
    pub last_error: Option<LoadError>,
}

/// Async facade over the record store.
pub struct WorkforceService {
    store: watch::Sender<RecordStore>,
    status: watch::Sender<LoadStatus>,
    page_size: usize,
}

impl WorkforceService {
    /// Creates a service with an empty store.
    pub fn new(config: &EngineConfig) -> Self {
        let (store, _) = watch::channel(RecordStore::new(config.validation.clone()));
        let (status, _) = watch::channel(LoadStatus::default());
        Self {
            store,
            status,
            page_size: config.page_size,
        }
    }

    /// Current complete snapshot.
    pub fn snapshot(&self) -> Arc<Snapshot> {
        self.store.borrow().snapshot()
    }

    /// Receiver notified whenever a new snapshot is published.
    pub fn subscribe(&self) -> watch::Receiver<RecordStore> {
        self.store.subscribe()
    }

    pub fn status(&self) -> LoadStatus {
        self.status.borrow().clone()
    }

    pub fn is_loading(&self) -> bool {
        self.status.borrow().loading
    }

    /// Receiver notified whenever loading status changes.
    pub fn subscribe_status(&self) -> watch::Receiver<LoadStatus> {
        self.status.subscribe()
    }

    /// Configured rows per table page.
    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// Fetches a dataset from `source` and replaces the store wholesale.
    ///
    /// # Errors
    /// - `ServiceError::Busy` while another operation is pending.
    /// - `ServiceError::Load` when the source fails or the dataset is
    ///   invalid; the previous snapshot stays published.
    pub async fn load_snapshot<S>(&self, source: &S) -> Result<Arc<Snapshot>, ServiceError>
    where
        S: SnapshotSource + ?Sized,
    {
        let _guard = self.begin()?;
        let started_at = Instant::now();
        info!(
            "event=snapshot_load module=service status=start source={}",
            source.source_name()
        );

        let outcome = match source.fetch().await {
            Ok(snapshot) => self.update_store(|store| store.replace(snapshot)),
            Err(err) => Err(ServiceError::Load(err)),
        };

        match outcome {
            Ok(snapshot) => {
                self.status.send_modify(|status| status.last_error = None);
                info!(
                    "event=snapshot_load module=service status=ok source={} duration_ms={} departments={} employees={}",
                    source.source_name(),
                    started_at.elapsed().as_millis(),
                    snapshot.departments().len(),
                    snapshot.employees().len()
                );
                Ok(snapshot)
            }
            Err(err) => {
                error!(
                    "event=snapshot_load module=service status=error source={} duration_ms={} error={}",
                    source.source_name(),
                    started_at.elapsed().as_millis(),
                    err
                );
                if let ServiceError::Load(load_error) = &err {
                    self.status
                        .send_modify(|status| status.last_error = Some(load_error.clone()));
                }
                Err(err)
            }
        }
    }

    /// Validates and appends a department named `name`.
    pub async fn append_department(&self, name: &str) -> Result<Department, ServiceError> {
        let _guard = self.begin()?;
        self.update_store(|store| store.append_department(name, Utc::now()))
    }

    /// Validates and appends an employee registered against `department_id`.
    pub async fn append_employee(
        &self,
        name: &str,
        salary: f64,
        department_id: DepartmentId,
    ) -> Result<Employee, ServiceError> {
        let _guard = self.begin()?;
        self.update_store(|store| {
            store.append_employee(name, salary, department_id, Utc::now())
        })
    }

    /// Analytics of the current snapshot.
    pub fn analytics(&self) -> Analytics {
        let snapshot = self.snapshot();
        aggregate(snapshot.employees(), snapshot.departments())
    }

    /// Enriched department rows of the current snapshot.
    pub fn department_overview(&self) -> Vec<DepartmentOverview> {
        let snapshot = self.snapshot();
        department_overview(snapshot.employees(), snapshot.departments())
    }

    fn begin(&self) -> Result<LoadingGuard<'_>, ServiceError> {
        let mut acquired = false;
        self.status.send_if_modified(|status| {
            if status.loading {
                return false;
            }
            status.loading = true;
            acquired = true;
            true
        });
        if acquired {
            Ok(LoadingGuard {
                status: &self.status,
            })
        } else {
            Err(ServiceError::Busy)
        }
    }

    /// Applies `apply` as one atomic store update, publishing only on success.
    fn update_store<T, E>(
        &self,
        apply: impl FnOnce(&mut RecordStore) -> Result<T, E>,
    ) -> Result<T, ServiceError>
    where
        E: Into<ServiceError>,
    {
        // Overwritten by the closure, which `send_if_modified` runs exactly once.
        let mut outcome = Err(ServiceError::Busy);
        self.store.send_if_modified(|store| {
            outcome = apply(store).map_err(Into::into);
            outcome.is_ok()
        });
        outcome
    }
}

/// Clears `loading` when the operation finishes or its future is dropped.
struct LoadingGuard<'a> {
    status: &'a watch::Sender<LoadStatus>,
}

impl Drop for LoadingGuard<'_> {
    fn drop(&mut self) {
        self.status.send_modify(|status| status.loading = false);
    }
}
