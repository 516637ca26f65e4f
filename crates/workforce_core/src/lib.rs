//! Core engine of the workforce dashboard.
//! This crate is the single source of truth for record invariants, analytics
//! and table queries; presentation layers only call in and render results.

pub mod analytics;
pub mod config;
pub mod logging;
pub mod model;
pub mod query;
pub mod service;
pub mod store;
pub mod view;

pub use analytics::engine::{
    aggregate, department_averages, highest_paid_by_department, summary_stats, Analytics,
    DepartmentAverage, DepartmentFilter, HighestPaid, Membership, SummaryStats,
};
pub use analytics::stats::{
    department_highlights, department_overview, employee_stats, DepartmentHighlights,
    DepartmentOverview, EmployeeStats, TopDepartment,
};
pub use config::{ConfigError, EngineConfig, LoggingConfig};
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::department::{Department, DepartmentId};
pub use model::employee::{Employee, EmployeeId};
pub use model::validation::{
    normalize_name, parse_salary_input, ValidationError, ValidationField, ValidationRules,
};
pub use query::columns::{DepartmentColumn, EmployeeColumn, OverviewColumn};
pub use query::field::{FieldValue, Tabular};
pub use query::pipeline::{
    filter_records, paginate, query, sort_records, total_pages, CategoryFilter, QueryPage,
    QueryParams, SortDirection, SortSpec,
};
pub use service::workforce_service::{LoadStatus, ServiceError, WorkforceService};
pub use store::record_store::RecordStore;
pub use store::seed::{seed_snapshot, SeedSnapshotSource};
pub use store::snapshot::Snapshot;
pub use store::source::{JsonSnapshotSource, LoadError, SnapshotSource};
pub use view::table::{TableController, ViewPhase, ViewState};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::core_version;

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
