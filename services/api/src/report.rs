use crate::infra::{load_snapshot_from_path, parse_date, sample_snapshot};
use chrono::{Local, NaiveDate};
use clap::Args;
use roster_ops::config::AppConfig;
use roster_ops::error::AppError;
use roster_ops::workflows::roster::{
    export_roster_to_path, project_annuities, RosterAudit, RosterAuditOutcome, ScreeningConfig,
    StoreClient,
};
use std::path::PathBuf;

#[derive(Args, Debug, Default)]
pub(crate) struct AuditArgs {
    /// Audit a snapshot file ({collaborators, roles, teams} as JSON)
    #[arg(long, conflicts_with = "live")]
    pub(crate) snapshot: Option<PathBuf>,
    /// Fetch the roster from the configured store instead of a file
    #[arg(long)]
    pub(crate) live: bool,
    /// Reporting date for the dues projection (defaults to today)
    #[arg(long, value_parser = parse_date)]
    pub(crate) today: Option<NaiveDate>,
    /// Write the eligible roster as CSV to this path
    #[arg(long)]
    pub(crate) csv_out: Option<PathBuf>,
    /// Print each eligible member
    #[arg(long)]
    pub(crate) list_members: bool,
    /// Print the OAB annuity projection
    #[arg(long)]
    pub(crate) dues: bool,
}

enum DataSource {
    Live,
    Snapshot(PathBuf),
    Sample,
}

pub(crate) async fn run_roster_audit(args: AuditArgs) -> Result<(), AppError> {
    let AuditArgs {
        snapshot,
        live,
        today,
        csv_out,
        list_members,
        dues,
    } = args;

    let (snapshot, source) = if live {
        let config = AppConfig::load()?;
        let store = config
            .store
            .ok_or(roster_ops::config::ConfigError::StoreNotConfigured)
            .map_err(AppError::from)?;
        let client = StoreClient::new(&store)?;
        (client.fetch_snapshot().await?, DataSource::Live)
    } else if let Some(path) = snapshot {
        (
            load_snapshot_from_path(&path)?,
            DataSource::Snapshot(path),
        )
    } else {
        (sample_snapshot(), DataSource::Sample)
    };

    let today = today.unwrap_or_else(|| Local::now().date_naive());
    let outcome = RosterAudit::new(ScreeningConfig::default()).run(&snapshot);

    render_audit(&outcome, &source, today, list_members, dues);

    if let Some(path) = csv_out {
        export_roster_to_path(&path, &outcome.eligible)?;
        println!("\nEligible roster exported to {}", path.display());
    }

    Ok(())
}

fn render_audit(
    outcome: &RosterAuditOutcome,
    source: &DataSource,
    today: NaiveDate,
    list_members: bool,
    dues: bool,
) {
    println!("Roster eligibility audit (reported {today})");
    match source {
        DataSource::Live => println!("Data source: live roster store"),
        DataSource::Snapshot(path) => println!("Data source: snapshot {}", path.display()),
        DataSource::Sample => println!("Data source: built-in sample (no store configured)"),
    }

    let counters = &outcome.counters;
    println!("\nStage counters");
    println!("- total records: {}", counters.total);
    println!("- with hire date: {}", counters.with_hire_date);
    println!("- active: {}", counters.active);
    println!("- active legal staff: {}", counters.legal_staff);

    if outcome.parse_failures.is_empty() {
        println!("\nHire-date diagnostics: none");
    } else {
        println!("\nHire-date diagnostics");
        for failure in &outcome.parse_failures {
            println!("- {}: '{}' ({})", failure.name, failure.raw, failure.reason);
        }
    }

    if list_members {
        println!("\nEligible members");
        for entry in &outcome.eligible {
            let record = &entry.record;
            let oab = match (&record.oab_number, &record.oab_uf) {
                (Some(number), Some(uf)) => format!(" | OAB {number}/{uf}"),
                (Some(number), None) => format!(" | OAB {number}"),
                _ => String::new(),
            };
            println!(
                "- {} | {} | {} | admitted {}{}",
                record.name,
                entry.role_name,
                entry.team_name,
                record.hire_date.as_deref().unwrap_or("?"),
                oab
            );
        }
    }

    if dues {
        let projections = project_annuities(&outcome.eligible, today);
        if projections.is_empty() {
            println!("\nOAB annuities: nothing to project");
        } else {
            println!("\nOAB annuities (nearest first)");
            for projection in &projections {
                println!(
                    "- {} | admitted {} | due {} | {} day(s)",
                    projection.name,
                    projection.hire_date,
                    projection.due_date,
                    projection.days_until_due
                );
            }
        }
    }
}
