//! Comprehensive integration tests for the shift calculation engine.
//!
//! This test suite covers the statistics endpoint end to end:
//! - worked-hour and night-hour classification, including overnight spans
//! - Sunday and public-holiday premium pools
//! - sick and vacation counting
//! - stand-in (backup) crediting
//! - anonymized invoice exports
//! - error cases

use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode},
};
use rust_decimal::Decimal;
use serde_json::{Value, json};
use std::str::FromStr;
use tower::ServiceExt;

use dienstplan_engine::api::{AppState, create_router};
use dienstplan_engine::config::ConfigLoader;

// =============================================================================
// Test Helpers
// =============================================================================

fn create_test_state() -> AppState {
    let config = ConfigLoader::load("./config/default").expect("Failed to load config");
    AppState::new(config)
}

fn create_router_for_test() -> Router {
    create_router(create_test_state())
}

fn decimal(s: &str) -> Decimal {
    Decimal::from_str(s).unwrap()
}

/// Reads a decimal field from a JSON value, accepting both "8" and "8.00".
fn decimal_field(value: &Value) -> Decimal {
    Decimal::from_str(value.as_str().expect("decimal fields serialize as strings")).unwrap()
}

async fn post_statistics(router: Router, body: Value) -> (StatusCode, Value) {
    let response = router
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/statistics")
                .header("Content-Type", "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
        .unwrap();

    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let value: Value = serde_json::from_slice(&bytes).unwrap();
    (status, value)
}

async fn get_json(router: Router, uri: &str) -> (StatusCode, Value) {
    let response = router
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();

    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let value: Value = serde_json::from_slice(&bytes).unwrap();
    (status, value)
}

fn anna() -> Value {
    json!({"id": "emp_001", "name": "Anna Müller"})
}

fn berta() -> Value {
    json!({"id": "emp_002", "name": "Berta Klein"})
}

fn january() -> Value {
    json!({"start_date": "2026-01-01", "end_date": "2026-01-31"})
}

fn confirmed_shift(id: &str, employee_id: &str, date: &str, start: &str, end: &str) -> Value {
    json!({
        "id": id,
        "employee_id": employee_id,
        "date": date,
        "planned_start": start,
        "planned_end": end,
        "status": "CONFIRMED"
    })
}

fn stats_for<'a>(body: &'a Value, employee_id: &str) -> &'a Value {
    &body["export"]["per_employee"][employee_id]
}

// =============================================================================
// Worked and night hours
// =============================================================================

#[tokio::test]
async fn test_confirmed_weekday_shift_counts_eight_hours() {
    let router = create_router_for_test();
    // 2026-01-15 is a Thursday, not a holiday
    let body = json!({
        "employees": [anna()],
        "period": january(),
        "shifts": [confirmed_shift("s1", "emp_001", "2026-01-15", "08:00", "16:00")]
    });

    let (status, response) = post_statistics(router, body).await;
    assert_eq!(status, StatusCode::OK);

    let stats = stats_for(&response, "emp_001");
    assert_eq!(decimal_field(&stats["total_hours"]), decimal("8"));
    assert_eq!(decimal_field(&stats["night_hours"]), decimal("0"));
    assert_eq!(decimal_field(&stats["sunday_hours"]), decimal("0"));
    assert_eq!(decimal_field(&stats["holiday_hours"]), decimal("0"));
}

#[tokio::test]
async fn test_night_hour_reference_table() {
    // Each case is an independent snapshot on a plain Thursday.
    let cases = [
        ("22:00", "06:00", "8", "7"),
        ("18:00", "02:00", "8", "3"),
        ("23:00", "07:00", "8", "7"),
        ("00:00", "00:00", "24", "7"),
        ("06:00", "14:00", "8", "0"),
        ("20:00", "04:00", "8", "5"),
    ];

    for (start, end, expected_total, expected_night) in cases {
        let router = create_router_for_test();
        let body = json!({
            "employees": [anna()],
            "period": january(),
            "shifts": [confirmed_shift("s1", "emp_001", "2026-01-15", start, end)]
        });

        let (status, response) = post_statistics(router, body).await;
        assert_eq!(status, StatusCode::OK);

        let stats = stats_for(&response, "emp_001");
        assert_eq!(
            decimal_field(&stats["total_hours"]),
            decimal(expected_total),
            "total for {}-{}",
            start,
            end
        );
        assert_eq!(
            decimal_field(&stats["night_hours"]),
            decimal(expected_night),
            "night for {}-{}",
            start,
            end
        );
    }
}

#[tokio::test]
async fn test_planned_shift_counts_no_worked_hours() {
    let router = create_router_for_test();
    let body = json!({
        "employees": [anna()],
        "period": january(),
        "shifts": [{
            "id": "s1",
            "employee_id": "emp_001",
            "date": "2026-01-15",
            "planned_start": "08:00",
            "planned_end": "16:00",
            "status": "PLANNED"
        }]
    });

    let (status, response) = post_statistics(router, body).await;
    assert_eq!(status, StatusCode::OK);

    let stats = stats_for(&response, "emp_001");
    assert_eq!(decimal_field(&stats["total_hours"]), decimal("0"));
    assert_eq!(decimal_field(&stats["planned_hours"]), decimal("8"));
}

#[tokio::test]
async fn test_actual_times_override_planned_when_changed() {
    let router = create_router_for_test();
    let body = json!({
        "employees": [anna()],
        "period": january(),
        "shifts": [{
            "id": "s1",
            "employee_id": "emp_001",
            "date": "2026-01-15",
            "planned_start": "08:00",
            "planned_end": "16:00",
            "actual_start": "08:00",
            "actual_end": "17:30",
            "status": "CHANGED"
        }]
    });

    let (status, response) = post_statistics(router, body).await;
    assert_eq!(status, StatusCode::OK);

    let stats = stats_for(&response, "emp_001");
    assert_eq!(decimal_field(&stats["total_hours"]), decimal("9.5"));
    assert_eq!(decimal_field(&stats["planned_hours"]), decimal("8"));
}

// =============================================================================
// Sunday and holiday pools
// =============================================================================

#[tokio::test]
async fn test_sunday_shift_credits_sunday_pool() {
    let router = create_router_for_test();
    // 2026-01-18 is a Sunday
    let body = json!({
        "employees": [anna()],
        "period": january(),
        "shifts": [confirmed_shift("s1", "emp_001", "2026-01-18", "08:00", "16:00")]
    });

    let (status, response) = post_statistics(router, body).await;
    assert_eq!(status, StatusCode::OK);

    let stats = stats_for(&response, "emp_001");
    assert_eq!(decimal_field(&stats["sunday_hours"]), decimal("8"));
    assert_eq!(decimal_field(&stats["total_hours"]), decimal("8"));
}

#[tokio::test]
async fn test_holiday_shift_credits_holiday_pool() {
    let router = create_router_for_test();
    // 2026-05-01 is Tag der Arbeit, a Friday
    let body = json!({
        "employees": [anna()],
        "period": {"start_date": "2026-05-01", "end_date": "2026-05-31"},
        "shifts": [confirmed_shift("s1", "emp_001", "2026-05-01", "08:00", "16:00")]
    });

    let (status, response) = post_statistics(router, body).await;
    assert_eq!(status, StatusCode::OK);

    let stats = stats_for(&response, "emp_001");
    assert_eq!(decimal_field(&stats["holiday_hours"]), decimal("8"));
    assert_eq!(decimal_field(&stats["sunday_hours"]), decimal("0"));
}

#[tokio::test]
async fn test_sunday_holiday_pools_are_both_credited() {
    let router = create_router_for_test();
    // Allerheiligen 2026-11-01 falls on a Sunday
    let body = json!({
        "employees": [anna()],
        "period": {"start_date": "2026-11-01", "end_date": "2026-11-30"},
        "shifts": [confirmed_shift("s1", "emp_001", "2026-11-01", "08:00", "16:00")]
    });

    let (status, response) = post_statistics(router, body).await;
    assert_eq!(status, StatusCode::OK);

    let stats = stats_for(&response, "emp_001");
    assert_eq!(decimal_field(&stats["sunday_hours"]), decimal("8"));
    assert_eq!(decimal_field(&stats["holiday_hours"]), decimal("8"));
    assert_eq!(decimal_field(&stats["total_hours"]), decimal("8"));
}

// =============================================================================
// Absences
// =============================================================================

#[tokio::test]
async fn test_sick_days_and_hours() {
    let router = create_router_for_test();
    let mut shifts = Vec::new();
    for day in 12..15 {
        shifts.push(json!({
            "id": format!("s{}", day),
            "employee_id": "emp_001",
            "date": format!("2026-01-{:02}", day),
            "planned_start": "08:00",
            "planned_end": "16:00",
            "status": "PLANNED",
            "absence_type": "SICK"
        }));
    }
    let body = json!({
        "employees": [anna()],
        "period": january(),
        "shifts": shifts
    });

    let (status, response) = post_statistics(router, body).await;
    assert_eq!(status, StatusCode::OK);

    let stats = stats_for(&response, "emp_001");
    assert_eq!(stats["sick_days"], 3);
    assert_eq!(decimal_field(&stats["sick_hours"]), decimal("24"));
    assert_eq!(decimal_field(&stats["total_hours"]), decimal("0"));
}

#[tokio::test]
async fn test_sick_night_shift_counts_no_night_hours() {
    let router = create_router_for_test();
    let body = json!({
        "employees": [anna()],
        "period": january(),
        "shifts": [{
            "id": "s1",
            "employee_id": "emp_001",
            "date": "2026-01-15",
            "planned_start": "22:00",
            "planned_end": "06:00",
            "status": "PLANNED",
            "absence_type": "SICK"
        }]
    });

    let (status, response) = post_statistics(router, body).await;
    assert_eq!(status, StatusCode::OK);

    let stats = stats_for(&response, "emp_001");
    assert_eq!(decimal_field(&stats["sick_hours"]), decimal("8"));
    assert_eq!(decimal_field(&stats["night_hours"]), decimal("0"));
    assert_eq!(decimal_field(&stats["total_hours"]), decimal("0"));
}

#[tokio::test]
async fn test_vacation_and_sick_count_independently() {
    let router = create_router_for_test();
    let body = json!({
        "employees": [anna()],
        "period": january(),
        "shifts": [
            {
                "id": "s1",
                "employee_id": "emp_001",
                "date": "2026-01-12",
                "planned_start": "08:00",
                "planned_end": "16:00",
                "status": "PLANNED",
                "absence_type": "SICK"
            },
            {
                "id": "s2",
                "employee_id": "emp_001",
                "date": "2026-01-13",
                "planned_start": "08:00",
                "planned_end": "16:00",
                "status": "PLANNED",
                "absence_type": "VACATION"
            },
            {
                "id": "s3",
                "employee_id": "emp_001",
                "date": "2026-01-14",
                "planned_start": "08:00",
                "planned_end": "16:00",
                "status": "PLANNED",
                "absence_type": "VACATION"
            }
        ]
    });

    let (status, response) = post_statistics(router, body).await;
    assert_eq!(status, StatusCode::OK);

    let stats = stats_for(&response, "emp_001");
    assert_eq!(stats["sick_days"], 1);
    assert_eq!(stats["vacation_days"], 2);
    assert_eq!(decimal_field(&stats["vacation_hours"]), decimal("16"));
}

// =============================================================================
// Backup crediting
// =============================================================================

fn backup_snapshot(date: &str, start: &str, end: &str) -> Value {
    json!({
        "employees": [anna(), berta()],
        "period": january(),
        "shifts": [
            {
                "id": "s_primary",
                "employee_id": "emp_001",
                "date": date,
                "planned_start": start,
                "planned_end": end,
                "status": "PLANNED",
                "absence_type": "SICK",
                "backup_employee_id": "emp_002"
            },
            {
                "id": "s_coverage",
                "employee_id": "emp_002",
                "date": date,
                "planned_start": start,
                "planned_end": end,
                "status": "CONFIRMED",
                "note": "Eingesprungen für Anna Müller"
            }
        ]
    })
}

#[tokio::test]
async fn test_backup_night_credit_is_fourteen_hours() {
    let router = create_router_for_test();
    let (status, response) =
        post_statistics(router, backup_snapshot("2026-01-15", "22:00", "06:00")).await;
    assert_eq!(status, StatusCode::OK);

    let berta_stats = stats_for(&response, "emp_002");
    assert_eq!(decimal_field(&berta_stats["night_hours"]), decimal("14"));
    assert_eq!(decimal_field(&berta_stats["total_hours"]), decimal("16"));
    assert_eq!(berta_stats["backup_days"], 1);

    // The absent primary keeps her absence counts and nothing else.
    let anna_stats = stats_for(&response, "emp_001");
    assert_eq!(decimal_field(&anna_stats["total_hours"]), decimal("0"));
    assert_eq!(anna_stats["sick_days"], 1);
    assert_eq!(decimal_field(&anna_stats["sick_hours"]), decimal("8"));
}

#[tokio::test]
async fn test_backup_sunday_credit_is_sixteen_hours() {
    let router = create_router_for_test();
    let (status, response) =
        post_statistics(router, backup_snapshot("2026-01-18", "08:00", "16:00")).await;
    assert_eq!(status, StatusCode::OK);

    let berta_stats = stats_for(&response, "emp_002");
    assert_eq!(decimal_field(&berta_stats["sunday_hours"]), decimal("16"));
    assert_eq!(berta_stats["backup_days"], 1);
}

#[tokio::test]
async fn test_backup_holiday_credit_is_sixteen_hours() {
    let router = create_router_for_test();
    let mut body = backup_snapshot("2026-05-01", "08:00", "16:00");
    body["period"] = json!({"start_date": "2026-05-01", "end_date": "2026-05-31"});

    let (status, response) = post_statistics(router, body).await;
    assert_eq!(status, StatusCode::OK);

    let berta_stats = stats_for(&response, "emp_002");
    assert_eq!(decimal_field(&berta_stats["holiday_hours"]), decimal("16"));
}

#[tokio::test]
async fn test_backup_without_coverage_record_degrades_gracefully() {
    let router = create_router_for_test();
    let body = json!({
        "employees": [anna(), berta()],
        "period": january(),
        "shifts": [{
            "id": "s_primary",
            "employee_id": "emp_001",
            "date": "2026-01-15",
            "planned_start": "22:00",
            "planned_end": "06:00",
            "status": "PLANNED",
            "absence_type": "SICK",
            "backup_employee_id": "emp_002"
        }]
    });

    let (status, response) = post_statistics(router, body).await;
    assert_eq!(status, StatusCode::OK);

    let berta_stats = stats_for(&response, "emp_002");
    assert_eq!(berta_stats["backup_days"], 0);
    assert_eq!(decimal_field(&berta_stats["total_hours"]), decimal("0"));
}

// =============================================================================
// Export bundle
// =============================================================================

#[tokio::test]
async fn test_invoice_template_anonymizes_names_and_notes() {
    let router = create_router_for_test();
    let body = json!({
        "employees": [anna()],
        "period": january(),
        "shifts": [{
            "id": "s1",
            "employee_id": "emp_001",
            "date": "2026-01-15",
            "planned_start": "08:00",
            "planned_end": "16:00",
            "status": "CONFIRMED",
            "note": "Anna Müller war hier"
        }],
        "template": "invoice"
    });

    let (status, response) = post_statistics(router, body).await;
    assert_eq!(status, StatusCode::OK);

    let export = &response["export"];
    assert_eq!(export["template"]["name"], "invoice");
    assert_eq!(export["template"]["anonymize"], true);
    assert_eq!(export["labels"]["emp_001"], "Assistent A");
    assert_eq!(export["rows"][0]["employee_name"], "Assistent A");
    assert_eq!(export["rows"][0]["note"], "Assistent A war hier");
}

#[tokio::test]
async fn test_standard_template_keeps_names() {
    let router = create_router_for_test();
    let body = json!({
        "employees": [anna()],
        "period": january(),
        "shifts": [confirmed_shift("s1", "emp_001", "2026-01-15", "08:00", "16:00")]
    });

    let (status, response) = post_statistics(router, body).await;
    assert_eq!(status, StatusCode::OK);

    let export = &response["export"];
    assert_eq!(export["template"]["name"], "standard");
    assert_eq!(export["rows"][0]["employee_name"], "Anna Müller");
}

#[tokio::test]
async fn test_rows_sorted_by_date_then_name() {
    let router = create_router_for_test();
    let body = json!({
        "employees": [anna(), berta()],
        "period": january(),
        "shifts": [
            confirmed_shift("s1", "emp_002", "2026-01-13", "08:00", "16:00"),
            confirmed_shift("s2", "emp_001", "2026-01-13", "08:00", "16:00"),
            confirmed_shift("s3", "emp_002", "2026-01-12", "08:00", "16:00")
        ]
    });

    let (status, response) = post_statistics(router, body).await;
    assert_eq!(status, StatusCode::OK);

    let rows = response["export"]["rows"].as_array().unwrap();
    let order: Vec<&str> = rows.iter().map(|r| r["shift_id"].as_str().unwrap()).collect();
    assert_eq!(order, vec!["s3", "s2", "s1"]);
}

#[tokio::test]
async fn test_shifts_outside_period_are_excluded() {
    let router = create_router_for_test();
    let body = json!({
        "employees": [anna()],
        "period": january(),
        "shifts": [
            confirmed_shift("s1", "emp_001", "2026-01-15", "08:00", "16:00"),
            confirmed_shift("s2", "emp_001", "2026-02-15", "08:00", "16:00")
        ]
    });

    let (status, response) = post_statistics(router, body).await;
    assert_eq!(status, StatusCode::OK);

    let stats = stats_for(&response, "emp_001");
    assert_eq!(decimal_field(&stats["total_hours"]), decimal("8"));
    assert_eq!(response["export"]["rows"].as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn test_aggregation_is_idempotent() {
    let body = backup_snapshot("2026-01-18", "08:00", "16:00");

    let (status_a, first) = post_statistics(create_router_for_test(), body.clone()).await;
    let (status_b, second) = post_statistics(create_router_for_test(), body).await;
    assert_eq!(status_a, StatusCode::OK);
    assert_eq!(status_b, StatusCode::OK);

    // Everything except the per-request metadata is identical.
    assert_eq!(first["export"], second["export"]);
    assert_eq!(first["period"], second["period"]);
}

// =============================================================================
// Holidays endpoint
// =============================================================================

#[tokio::test]
async fn test_holidays_endpoint_returns_nrw_set() {
    let router = create_router_for_test();
    let (status, response) = get_json(router, "/holidays/2026").await;
    assert_eq!(status, StatusCode::OK);

    let holidays = response.as_array().unwrap();
    assert_eq!(holidays.len(), 11);
    assert!(holidays
        .iter()
        .any(|h| h["name"] == "Fronleichnam" && h["date"] == "2026-06-04"));
    assert!(holidays
        .iter()
        .any(|h| h["name"] == "Allerheiligen" && h["date"] == "2026-11-01"));
}

#[tokio::test]
async fn test_holidays_endpoint_rejects_pre_gregorian_year() {
    let router = create_router_for_test();
    let (status, response) = get_json(router, "/holidays/1500").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(response["code"], "VALIDATION_ERROR");
}

// =============================================================================
// Error cases
// =============================================================================

#[tokio::test]
async fn test_malformed_time_is_a_validation_error() {
    let router = create_router_for_test();
    let body = json!({
        "employees": [anna()],
        "period": january(),
        "shifts": [confirmed_shift("s1", "emp_001", "2026-01-15", "25:00", "16:00")]
    });

    let (status, response) = post_statistics(router, body).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(response["code"], "VALIDATION_ERROR");
    assert!(response["message"].as_str().unwrap().contains("25:00"));
}

#[tokio::test]
async fn test_missing_field_is_a_validation_error() {
    let router = create_router_for_test();
    let body = json!({
        "employees": [anna()],
        "shifts": []
    });

    let (status, response) = post_statistics(router, body).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(response["code"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn test_malformed_json_is_rejected() {
    let router = create_router_for_test();
    let response = router
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/statistics")
                .header("Content-Type", "application/json")
                .body(Body::from("{not json"))
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_unknown_template_is_rejected() {
    let router = create_router_for_test();
    let body = json!({
        "employees": [anna()],
        "period": january(),
        "shifts": [],
        "template": "does_not_exist"
    });

    let (status, response) = post_statistics(router, body).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(response["code"], "TEMPLATE_NOT_FOUND");
}

#[tokio::test]
async fn test_inverted_period_is_rejected() {
    let router = create_router_for_test();
    let body = json!({
        "employees": [anna()],
        "period": {"start_date": "2026-01-31", "end_date": "2026-01-01"},
        "shifts": []
    });

    let (status, response) = post_statistics(router, body).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(response["code"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn test_unknown_status_is_rejected() {
    let router = create_router_for_test();
    let body = json!({
        "employees": [anna()],
        "period": january(),
        "shifts": [{
            "id": "s1",
            "employee_id": "emp_001",
            "date": "2026-01-15",
            "planned_start": "08:00",
            "planned_end": "16:00",
            "status": "CANCELLED"
        }]
    });

    let (status, _response) = post_statistics(router, body).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}
