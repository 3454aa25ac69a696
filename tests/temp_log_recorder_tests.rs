//! Integration tests for recording and querying temperature logs.

use anyhow::Result;
use chrono::{Duration, Local, Utc};
use fridge_logbook::compliance::ComplianceBand;
use fridge_logbook::error::{LogbookError, RepositoryError};
use fridge_logbook::repositories::LogQuery;
use fridge_logbook::services::{NewTempLog, start_of_day};
use uuid::Uuid;

#[path = "test_utils/mod.rs"]
mod test_utils;
use test_utils::{insert_fridge, insert_log_at, live_services};

fn reading(site_id: Uuid, fridge_id: Uuid, temperature: f64) -> NewTempLog {
    NewTempLog {
        site_id,
        fridge_id,
        temperature,
        recorded_by: None,
        recorded_by_name: None,
        notes: None,
    }
}

#[tokio::test]
async fn recorded_log_is_first_for_its_fridge() -> Result<()> {
    let services = live_services().await?;
    let site_id = Uuid::new_v4();
    let fridge = services.registry.create_fridge(site_id, "Walk-in").await?;
    insert_log_at(&services.logs, &fridge, 2.0, Utc::now() - Duration::hours(3)).await?;

    let staff_id = Uuid::new_v4();
    let recorded = services
        .recorder
        .record_temperature(NewTempLog {
            recorded_by: Some(staff_id),
            recorded_by_name: Some("Sam".to_string()),
            notes: Some("after delivery".to_string()),
            ..reading(site_id, fridge.id, 3.5)
        })
        .await?;

    assert_eq!(recorded.site_id, site_id);
    assert_eq!(recorded.fridge_id, fridge.id);
    assert_eq!(recorded.recorded_by, Some(staff_id));
    assert!(recorded.is_compliant);

    let logs = services
        .recorder
        .query_logs(site_id, &LogQuery::for_fridge(fridge.id))
        .await?;
    assert_eq!(logs.len(), 2);
    assert_eq!(logs[0].id, recorded.id);
    assert_eq!(logs[0].recorded_by_name.as_deref(), Some("Sam"));
    assert_eq!(logs[0].notes.as_deref(), Some("after delivery"));
    Ok(())
}

#[tokio::test]
async fn compliance_uses_the_fridges_own_band() -> Result<()> {
    let services = live_services().await?;
    let site_id = Uuid::new_v4();
    let freezer =
        insert_fridge(&services.fridges, site_id, "Freezer", ComplianceBand::new(-25.0, -18.0))
            .await?;

    let cold = services
        .recorder
        .record_temperature(reading(site_id, freezer.id, -20.0))
        .await?;
    let thawing = services
        .recorder
        .record_temperature(reading(site_id, freezer.id, 3.0))
        .await?;
    let on_boundary = services
        .recorder
        .record_temperature(reading(site_id, freezer.id, -18.0))
        .await?;

    assert!(cold.is_compliant);
    assert!(!thawing.is_compliant);
    assert!(on_boundary.is_compliant);
    Ok(())
}

#[tokio::test]
async fn out_of_range_readings_are_stored_not_rejected() -> Result<()> {
    let services = live_services().await?;
    let site_id = Uuid::new_v4();
    let fridge = services.registry.create_fridge(site_id, "Prep").await?;

    let warm = services
        .recorder
        .record_temperature(reading(site_id, fridge.id, 12.0))
        .await?;

    assert!(!warm.is_compliant);
    let latest = services.recorder.latest_log(site_id, fridge.id).await?;
    assert_eq!(latest.map(|log| log.id), Some(warm.id));
    Ok(())
}

#[tokio::test]
async fn reading_for_another_sites_fridge_is_rejected() -> Result<()> {
    let services = live_services().await?;
    let owner_site = Uuid::new_v4();
    let other_site = Uuid::new_v4();
    let fridge = services.registry.create_fridge(owner_site, "Walk-in").await?;

    let result = services
        .recorder
        .record_temperature(reading(other_site, fridge.id, 3.0))
        .await;

    assert!(matches!(
        result,
        Err(LogbookError::Service(RepositoryError::Validation(_)))
    ));
    assert!(
        services
            .recorder
            .query_logs(other_site, &LogQuery::default())
            .await?
            .is_empty()
    );
    Ok(())
}

#[tokio::test]
async fn reading_for_unknown_fridge_is_not_found() -> Result<()> {
    let services = live_services().await?;

    let result = services
        .recorder
        .record_temperature(reading(Uuid::new_v4(), Uuid::new_v4(), 3.0))
        .await;

    assert!(matches!(
        result,
        Err(LogbookError::Service(RepositoryError::NotFound(_)))
    ));
    Ok(())
}

#[tokio::test]
async fn todays_logs_start_at_local_midnight() -> Result<()> {
    let services = live_services().await?;
    let site_id = Uuid::new_v4();
    let fridge = services.registry.create_fridge(site_id, "Walk-in").await?;

    let midnight = start_of_day(&Local::now());
    insert_log_at(&services.logs, &fridge, 4.0, Utc::now() - Duration::days(2)).await?;
    insert_log_at(&services.logs, &fridge, 4.0, midnight - Duration::seconds(1)).await?;

    assert!(services.recorder.query_todays_logs(site_id, fridge.id).await?.is_empty());
    assert!(!services.recorder.has_logged_today(site_id, fridge.id).await?);

    let today = services
        .recorder
        .record_temperature(reading(site_id, fridge.id, 4.0))
        .await?;

    let todays_logs = services.recorder.query_todays_logs(site_id, fridge.id).await?;
    assert_eq!(todays_logs.len(), 1);
    assert_eq!(todays_logs[0].id, today.id);
    assert!(todays_logs.iter().all(|log| log.created_at >= midnight));
    assert!(services.recorder.has_logged_today(site_id, fridge.id).await?);
    Ok(())
}

#[tokio::test]
async fn latest_log_of_empty_fridge_is_none() -> Result<()> {
    let services = live_services().await?;
    let site_id = Uuid::new_v4();
    let fridge = services.registry.create_fridge(site_id, "Empty").await?;

    assert!(services.recorder.latest_log(site_id, fridge.id).await?.is_none());
    Ok(())
}

#[tokio::test]
async fn latest_log_ignores_other_fridges() -> Result<()> {
    let services = live_services().await?;
    let site_id = Uuid::new_v4();
    let first = services.registry.create_fridge(site_id, "First").await?;
    let second = services.registry.create_fridge(site_id, "Second").await?;
    let now = Utc::now();

    let first_latest = insert_log_at(&services.logs, &first, 3.0, now - Duration::minutes(10)).await?;
    insert_log_at(&services.logs, &first, 3.0, now - Duration::minutes(20)).await?;
    insert_log_at(&services.logs, &second, 3.0, now).await?;

    let latest = services.recorder.latest_log(site_id, first.id).await?.unwrap();
    assert_eq!(latest.id, first_latest.id);
    Ok(())
}

#[tokio::test]
async fn date_range_bounds_are_inclusive() -> Result<()> {
    let services = live_services().await?;
    let site_id = Uuid::new_v4();
    let fridge = services.registry.create_fridge(site_id, "Walk-in").await?;
    let base = Utc::now() - Duration::days(5);

    let mut ids = Vec::new();
    for hour in 0..5 {
        let log = insert_log_at(&services.logs, &fridge, 3.0, base + Duration::hours(hour)).await?;
        ids.push(log.id);
    }

    let query = LogQuery::default()
        .since(base + Duration::hours(1))
        .until(base + Duration::hours(3));
    let logs = services.recorder.query_logs(site_id, &query).await?;

    let returned: Vec<_> = logs.iter().map(|log| log.id).collect();
    assert_eq!(returned, [ids[3], ids[2], ids[1]]);
    Ok(())
}

#[tokio::test]
async fn limit_caps_results_newest_first() -> Result<()> {
    let services = live_services().await?;
    let site_id = Uuid::new_v4();
    let fridge = services.registry.create_fridge(site_id, "Walk-in").await?;
    let now = Utc::now();

    for minutes in [30, 20, 10] {
        insert_log_at(&services.logs, &fridge, 3.0, now - Duration::minutes(minutes)).await?;
    }

    let logs = services
        .recorder
        .query_logs(site_id, &LogQuery::default().limit(2))
        .await?;

    assert_eq!(logs.len(), 2);
    assert!(logs[0].created_at > logs[1].created_at);
    Ok(())
}

#[tokio::test]
async fn queries_are_scoped_to_the_site() -> Result<()> {
    let services = live_services().await?;
    let site_a = Uuid::new_v4();
    let site_b = Uuid::new_v4();
    let fridge_a = services.registry.create_fridge(site_a, "A").await?;
    let fridge_b = services.registry.create_fridge(site_b, "B").await?;

    services
        .recorder
        .record_temperature(reading(site_a, fridge_a.id, 3.0))
        .await?;
    services
        .recorder
        .record_temperature(reading(site_b, fridge_b.id, 3.0))
        .await?;

    let logs = services
        .recorder
        .query_logs(site_a, &LogQuery::default())
        .await?;
    assert_eq!(logs.len(), 1);
    assert_eq!(logs[0].fridge_id, fridge_a.id);

    // a fridge id from another site yields nothing rather than leaking its logs
    let cross = services
        .recorder
        .query_logs(site_a, &LogQuery::for_fridge(fridge_b.id))
        .await?;
    assert!(cross.is_empty());
    Ok(())
}
