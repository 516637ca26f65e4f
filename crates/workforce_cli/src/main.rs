//! CLI smoke entry point.
//!
//! # Responsibility
//! - Load the seed dataset through `workforce_core` and print its analytics.
//! - Keep output deterministic for quick local sanity checks.
//!
//! Usage: `workforce_cli [config.json]`

use std::process::ExitCode;
use workforce_core::{
    core_version, init_logging, EngineConfig, SeedSnapshotSource, WorkforceService,
};

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(message) => {
            eprintln!("workforce_cli error: {message}");
            ExitCode::FAILURE
        }
    }
}

async fn run() -> Result<(), String> {
    let config = match std::env::args().nth(1) {
        Some(path) => EngineConfig::load(path).map_err(|err| err.to_string())?,
        None => EngineConfig::default(),
    };
    init_logging(&config.logging)?;

    println!("workforce_core version={}", core_version());

    let service = WorkforceService::new(&config);
    service
        .load_snapshot(&SeedSnapshotSource)
        .await
        .map_err(|err| err.to_string())?;

    let analytics = service.analytics();
    let summary = &analytics.summary_stats;
    println!(
        "employees={} departments={} payroll={:.2} average={:.2}",
        summary.total_employees,
        summary.total_departments,
        summary.total_payroll,
        summary.overall_average_salary
    );
    for (row, top) in analytics
        .department_averages
        .iter()
        .zip(&analytics.highest_paid_by_department)
    {
        let top_name = top
            .employee
            .as_ref()
            .map_or("-", |employee| employee.name.as_str());
        println!(
            "department={:?} count={} average={:.2} payroll={:.2} top={:?}",
            row.department, row.employee_count, row.average_salary, row.total_payroll, top_name
        );
    }
    log::info!("event=cli_report module=cli status=ok");
    Ok(())
}
