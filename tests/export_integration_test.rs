//! End-to-end tests of the export pipeline against in-memory and HTTP stores

mod common;

use chrono::Utc;
use clinic_export::adapters::store::Collection;
use clinic_export::config::ClinicExportConfig;
use clinic_export::core::export::{ExportCoordinator, ExportFailure, ExportState, RecordFetcher};
use clinic_export::core::transform::{build_all, Cell, Grid, SheetName, UNKNOWN};
use clinic_export::core::verification::grid_fingerprint;
use common::{clinic_store, GatedStore, MemoryStore};
use serde_json::json;
use std::sync::Arc;
use tempfile::TempDir;

fn sheet<'a>(sheets: &'a [clinic_export::core::transform::Sheet], name: SheetName) -> &'a Grid {
    &sheets
        .iter()
        .find(|s| s.name == name)
        .unwrap_or_else(|| panic!("missing sheet {name}"))
        .grid
}

fn summary_value<'a>(grid: &'a Grid, label: &str) -> &'a Cell {
    grid.rows
        .iter()
        .find(|row| row.first() == Some(&Cell::text(label)))
        .and_then(|row| row.get(1))
        .unwrap_or_else(|| panic!("missing summary row {label}"))
}

#[tokio::test]
async fn test_sheets_from_fetched_data() {
    let fetcher = RecordFetcher::new(Arc::new(clinic_store()));
    let data = fetcher.fetch_all().await.unwrap();
    let sheets = build_all(&data, Utc::now());

    let summary = sheet(&sheets, SheetName::SummaryDashboard);
    assert_eq!(summary_value(summary, "Total Bookings"), &Cell::Int(3));
    assert_eq!(summary_value(summary, "Pending Bookings"), &Cell::Int(1));
    assert_eq!(summary_value(summary, "Completed Bookings"), &Cell::Int(1));
    assert_eq!(summary_value(summary, "Cancelled Bookings"), &Cell::Int(0));
    assert_eq!(summary_value(summary, "No-Show Bookings"), &Cell::Int(1));
    assert_eq!(summary_value(summary, "Gold Members"), &Cell::Int(2));
    assert_eq!(summary_value(summary, "Total Revenue"), &Cell::text("₱1,000.00"));
    assert_eq!(summary_value(summary, "Records from Bookings"), &Cell::Int(1));

    let referrals = sheet(&sheets, SheetName::Referrals);
    assert_eq!(referrals.row_count(), 1);
    assert_eq!(referrals.rows[0][0], Cell::text("Ana Cruz"));
    assert_eq!(referrals.rows[0][5], Cell::text("Converted"));
    assert_eq!(referrals.rows[0][6], Cell::Int(1));

    let transactions = sheet(&sheets, SheetName::Transactions);
    assert_eq!(transactions.rows[0][1], Cell::text("Ana Cruz"));
    assert_eq!(transactions.rows[1][1], Cell::text(UNKNOWN));

    let benefits = sheet(&sheets, SheetName::BenefitsUsage);
    assert_eq!(benefits.row_count(), 2);
    assert_eq!(benefits.rows[0][3], Cell::Int(1));
    assert_eq!(benefits.rows[0][5], Cell::text("Available"));
    assert_eq!(benefits.rows[1][3], Cell::Int(0));
}

#[tokio::test]
async fn test_one_to_one_sheets_keep_every_record() {
    let data = RecordFetcher::new(Arc::new(clinic_store()))
        .fetch_all()
        .await
        .unwrap();
    let sheets = build_all(&data, Utc::now());

    assert_eq!(sheet(&sheets, SheetName::Bookings).row_count(), data.bookings.len());
    assert_eq!(sheet(&sheets, SheetName::Members).row_count(), data.members.len());
    assert_eq!(
        sheet(&sheets, SheetName::PatientRecords).row_count(),
        data.patient_records.len()
    );
    assert_eq!(
        sheet(&sheets, SheetName::Transactions).row_count(),
        data.transactions.len()
    );
}

#[tokio::test]
async fn test_rebuild_is_identical() {
    let data = RecordFetcher::new(Arc::new(clinic_store()))
        .fetch_all()
        .await
        .unwrap();
    let generated_at = Utc::now();

    let first = build_all(&data, generated_at);
    let second = build_all(&data, generated_at);

    assert_eq!(first, second);
    for (a, b) in first.iter().zip(&second) {
        assert_eq!(grid_fingerprint(&a.grid).unwrap(), grid_fingerprint(&b.grid).unwrap());
    }
}

#[tokio::test]
async fn test_export_writes_workbook() {
    let dir = TempDir::new().unwrap();
    let coordinator = ExportCoordinator::new(Arc::new(clinic_store()), dir.path().join("out"));

    let report = coordinator.trigger_export().await.unwrap();

    let bytes = std::fs::read(&report.path).unwrap();
    assert!(bytes.starts_with(b"PK"));
    assert_eq!(bytes.len(), report.bytes_written);
    assert_eq!(
        report.filename,
        format!("hilome-data-export-{}.xlsx", report.generated_at.format("%Y-%m-%d"))
    );

    let counts: Vec<_> = report.sheets.iter().map(|s| (s.name, s.rows)).collect();
    assert_eq!(
        counts,
        vec![
            (SheetName::SummaryDashboard, 33),
            (SheetName::Bookings, 3),
            (SheetName::Members, 3),
            (SheetName::PatientRecords, 1),
            (SheetName::Transactions, 2),
            (SheetName::Referrals, 1),
            (SheetName::BenefitsUsage, 2),
        ]
    );
    assert_eq!(report.referral_rewards, 1);
}

#[tokio::test]
async fn test_oversized_message_does_not_fail_export() {
    let dir = TempDir::new().unwrap();
    let store = MemoryStore::new().with(
        Collection::Bookings,
        vec![json!({"id": "b1", "name": "Ana", "email": "ana@example.com", "message": "x".repeat(40_000)})],
    );
    let coordinator = ExportCoordinator::new(Arc::new(store), dir.path());

    let report = coordinator.trigger_export().await.unwrap();

    assert_eq!(report.row_count(SheetName::Bookings), Some(1));
    assert!(report.path.exists());
}

#[tokio::test]
async fn test_repeated_exports_have_stable_fingerprints() {
    let dir = TempDir::new().unwrap();
    let coordinator = ExportCoordinator::new(Arc::new(clinic_store()), dir.path());

    let first = coordinator.trigger_export().await.unwrap();
    let second = coordinator.trigger_export().await.unwrap();

    for name in [
        SheetName::Bookings,
        SheetName::PatientRecords,
        SheetName::Transactions,
        SheetName::Referrals,
        SheetName::BenefitsUsage,
    ] {
        assert_eq!(first.fingerprint(name), second.fingerprint(name), "{name}");
    }
}

#[tokio::test]
async fn test_fetch_failure_is_reported_generically() {
    let dir = TempDir::new().unwrap();
    let store = clinic_store().failing_on(Collection::Transactions);
    let coordinator = ExportCoordinator::new(Arc::new(store), dir.path());

    let failure = coordinator.trigger_export().await.unwrap_err();

    assert_eq!(failure, ExportFailure::Fetch);
    assert!(!failure.user_message().contains("503"));
    assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 0);
    assert_eq!(coordinator.state(), ExportState::Idle);
}

#[tokio::test]
async fn test_concurrent_trigger_is_rejected() {
    let dir = TempDir::new().unwrap();
    let store = GatedStore::new(clinic_store());
    let entered = store.entered.clone();
    let release = store.release.clone();
    let coordinator = Arc::new(ExportCoordinator::new(Arc::new(store), dir.path()));

    let running = {
        let coordinator = coordinator.clone();
        tokio::spawn(async move { coordinator.trigger_export().await })
    };
    entered.notified().await;

    assert_eq!(coordinator.state(), ExportState::Fetching);
    assert_eq!(
        coordinator.trigger_export().await.unwrap_err(),
        ExportFailure::AlreadyRunning
    );

    release.notify_one();
    let report = running.await.unwrap().unwrap();
    assert_eq!(report.row_count(SheetName::Bookings), Some(3));
    assert_eq!(coordinator.state(), ExportState::Idle);
}

#[tokio::test]
async fn test_state_changes_are_observable() {
    let dir = TempDir::new().unwrap();
    let store = GatedStore::new(MemoryStore::new());
    let entered = store.entered.clone();
    let release = store.release.clone();
    let coordinator = Arc::new(ExportCoordinator::new(Arc::new(store), dir.path()));
    let mut states = coordinator.subscribe();

    let running = {
        let coordinator = coordinator.clone();
        tokio::spawn(async move { coordinator.trigger_export().await })
    };
    entered.notified().await;
    assert_eq!(*states.borrow_and_update(), ExportState::Fetching);

    release.notify_one();
    running.await.unwrap().unwrap();
    assert_eq!(*states.borrow_and_update(), ExportState::Idle);
}

#[tokio::test]
async fn test_export_from_config_over_http() {
    let mut server = mockito::Server::new_async().await;
    let mut mocks = Vec::new();
    for collection in Collection::ALL {
        let body = match collection {
            Collection::Bookings => {
                r#"[{"id":"b1","name":"Ana","email":"ana@example.com","status":"no-show"}]"#
            }
            Collection::ReferralRewards => "null",
            _ => "[]",
        };
        let mock = server
            .mock("GET", format!("/rest/v1/{}", collection.table()).as_str())
            .match_query(mockito::Matcher::Any)
            .match_header("apikey", "service-key")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(body)
            .create_async()
            .await;
        mocks.push(mock);
    }

    let dir = TempDir::new().unwrap();
    let config: ClinicExportConfig = toml::from_str(&format!(
        "[store]\nbase_url = '{}'\napi_key = 'service-key'\n\n[export]\noutput_dir = '{}'\n",
        server.url(),
        dir.path().display()
    ))
    .unwrap();

    let coordinator = ExportCoordinator::from_config(&config).unwrap();
    let report = coordinator.trigger_export().await.unwrap();

    assert_eq!(report.row_count(SheetName::Bookings), Some(1));
    assert_eq!(report.row_count(SheetName::Members), Some(0));
    assert_eq!(report.referral_rewards, 0);
    assert!(dir.path().join(&report.filename).exists());
    for mock in mocks {
        mock.assert_async().await;
    }
}
