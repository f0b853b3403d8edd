//! In-memory repository.
//!
//! [`MemoryStore`] holds the committed directory shared by all requests.
//! Each request opens a [`MemorySession`], a unit of work with its own list
//! of staged changes. A commit validates the whole batch against a copy of the
//! committed state and swaps it in only if every constraint holds.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::{Mutex, RwLock};
use tracing::{debug, warn};

use crate::error::StoreError;
use crate::models::{Compensation, Employee};

use super::EmployeeRepository;

/// A write waiting for the next commit.
#[derive(Debug, Clone)]
enum StagedChange {
    Insert(Employee),
    Update(Employee),
    Remove(String),
    AttachCompensation(Compensation),
}

#[derive(Debug, Clone, Default)]
struct StoreState {
    employees: HashMap<String, Employee>,
    compensation: HashMap<String, Compensation>,
}

impl StoreState {
    fn apply(&mut self, change: StagedChange) -> Result<(), StoreError> {
        match change {
            StagedChange::Insert(mut employee) => {
                if self.employees.contains_key(&employee.employee_id) {
                    return Err(StoreError::DuplicateKey {
                        id: employee.employee_id,
                    });
                }
                employee.dedup_direct_reports();
                self.employees.insert(employee.employee_id.clone(), employee);
            }
            StagedChange::Update(mut employee) => {
                let slot = self.employees.get_mut(&employee.employee_id).ok_or_else(|| {
                    StoreError::MissingRecord {
                        id: employee.employee_id.clone(),
                    }
                })?;
                employee.dedup_direct_reports();
                *slot = employee;
            }
            StagedChange::Remove(id) => {
                if self.employees.remove(&id).is_none() {
                    return Err(StoreError::MissingRecord { id });
                }
                self.compensation.remove(&id);
                for manager in self.employees.values_mut() {
                    manager.direct_reports.retain(|r| r.employee_id != id);
                }
            }
            StagedChange::AttachCompensation(compensation) => {
                let owner = &compensation.employee_id;
                if !self.employees.contains_key(owner) {
                    return Err(StoreError::MissingRecord { id: owner.clone() });
                }
                if self.compensation.contains_key(owner) {
                    return Err(StoreError::DuplicateCompensation {
                        employee_id: owner.clone(),
                    });
                }
                self.compensation.insert(owner.clone(), compensation);
            }
        }
        Ok(())
    }

    /// Every edge of the written employees must resolve once the whole batch is applied.
    fn check_direct_reports(&self, written: &[String]) -> Result<(), StoreError> {
        for manager_id in written {
            // Removed later in the same batch.
            let Some(manager) = self.employees.get(manager_id) else {
                continue;
            };
            if let Some(report_id) = manager
                .direct_report_ids()
                .find(|report_id| !self.employees.contains_key(*report_id))
            {
                return Err(StoreError::UnknownDirectReport {
                    manager_id: manager_id.clone(),
                    report_id: report_id.to_string(),
                });
            }
        }
        Ok(())
    }
}

/// Committed directory state shared across requests.
#[derive(Debug, Default)]
pub struct MemoryStore {
    state: RwLock<StoreState>,
}

impl MemoryStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Opens a unit of work against this store.
    pub fn session(self: &Arc<Self>) -> MemorySession {
        MemorySession {
            store: Arc::clone(self),
            staged: Mutex::new(Vec::new()),
        }
    }

    /// Inserts `employees` in a single commit.
    ///
    /// Employees may list reports that appear later in `employees`. Nothing
    /// is inserted if any identifier collides or any direct report is unknown.
    pub async fn seed(self: &Arc<Self>, employees: Vec<Employee>) -> Result<usize, StoreError> {
        let count = employees.len();
        let session = self.session();
        for employee in employees {
            session.add(employee).await;
        }
        session.commit().await?;
        Ok(count)
    }

    /// Returns the number of stored employees.
    pub async fn employee_count(&self) -> usize {
        self.state.read().await.employees.len()
    }

    /// Returns the number of stored compensation records.
    pub async fn compensation_count(&self) -> usize {
        self.state.read().await.compensation.len()
    }
}

/// A unit of work over a [`MemoryStore`].
#[derive(Debug)]
pub struct MemorySession {
    store: Arc<MemoryStore>,
    staged: Mutex<Vec<StagedChange>>,
}

impl MemorySession {
    async fn stage(&self, change: StagedChange) {
        self.staged.lock().await.push(change);
    }
}

#[async_trait]
impl EmployeeRepository for MemorySession {
    async fn get_by_id(&self, id: &str) -> Option<Employee> {
        self.store.state.read().await.employees.get(id).cloned()
    }

    async fn get_direct_reports(&self, id: &str) -> Option<Vec<Employee>> {
        let state = self.store.state.read().await;
        let employee = state.employees.get(id)?;

        let reports = employee
            .direct_report_ids()
            .filter_map(|report_id| {
                let report = state.employees.get(report_id).cloned();
                if report.is_none() {
                    warn!(
                        manager_id = %id,
                        report_id = %report_id,
                        "Direct report does not resolve to an employee"
                    );
                }
                report
            })
            .collect();

        Some(reports)
    }

    async fn get_with_compensation(&self, id: &str) -> Option<(Employee, Option<Compensation>)> {
        let state = self.store.state.read().await;
        let employee = state.employees.get(id)?.clone();
        let compensation = state.compensation.get(id).cloned();
        Some((employee, compensation))
    }

    async fn add(&self, employee: Employee) {
        self.stage(StagedChange::Insert(employee)).await;
    }

    async fn add_compensation(&self, employee: &Employee, mut compensation: Compensation) {
        compensation.employee_id = employee.employee_id.clone();
        self.stage(StagedChange::AttachCompensation(compensation))
            .await;
    }

    async fn update(&self, employee: Employee) {
        self.stage(StagedChange::Update(employee)).await;
    }

    async fn remove(&self, employee: &Employee) {
        self.stage(StagedChange::Remove(employee.employee_id.clone()))
            .await;
    }

    async fn commit(&self) -> Result<(), StoreError> {
        // Staged changes are consumed whether or not the commit succeeds.
        let changes: Vec<StagedChange> = std::mem::take(&mut *self.staged.lock().await);
        if changes.is_empty() {
            return Ok(());
        }

        let mut state = self.store.state.write().await;
        let mut next = state.clone();
        let change_count = changes.len();
        let mut written = Vec::new();
        for change in changes {
            if let StagedChange::Insert(employee) | StagedChange::Update(employee) = &change {
                written.push(employee.employee_id.clone());
            }
            next.apply(change)?;
        }
        next.check_direct_reports(&written)?;
        *state = next;

        debug!(changes = change_count, "Committed staged changes");
        Ok(())
    }
}
