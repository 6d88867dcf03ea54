use super::helpers::{Harness, package, status_body, student};

use fyw::cli::{Command, RegisterArgs};
use fyw::error::FywError;
use models::{Gender, PackageCode, Weekday};
use portal_core::error::{CoreError, ValidationError};

use serde_json::json;
use wiremock::matchers::{body_partial_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn register_args(package: PackageCode, day: Option<Weekday>) -> RegisterArgs {
    RegisterArgs {
        matric_number: "190401001".to_string(),
        full_name: "Ada Obi".to_string(),
        gender: Gender::Female,
        email: None,
        package,
        day,
        force: false,
    }
}

async fn mount_status(server: &MockServer, matric: &str, total_paid: f64, status: &str) {
    Mock::given(method("GET"))
        .and(path(format!("/api/students/{matric}")))
        .respond_with(ResponseTemplate::new(200).set_body_json(status_body(matric, total_paid, status)))
        .mount(server)
        .await;
}

#[tokio::test]
async fn given_packages_when_listed_then_prints_prices() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/students/packages"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": true,
            "data": [package("T", "Corporate Plus", 30_000.0), package("F", "Full Experience", 60_000.0)]
        })))
        .mount(&server)
        .await;

    let mut harness = Harness::new(&server);
    let out = harness.run(Command::Packages { json: false }).await.unwrap();

    assert!(out.contains("Corporate Plus"));
    assert!(out.contains("₦60,000.00"));
    assert!(out.contains("Tuesday (Denim Day)"));
}

/// **VALUE**: Registration remembers the matric number and lands on the dashboard.
///
/// **WHY THIS MATTERS**: Every later student command defaults to the remembered
/// matric number. Forgetting it forces the student to retype it each time.
///
/// **BUG THIS CATCHES**: Would catch the session not being written, or being
/// written before the API confirmed the registration.
#[tokio::test]
async fn given_plus_tier_with_day_when_registered_then_remembers_and_shows_dashboard() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/students/identify"))
        .and(body_partial_json(json!({ "packageCode": "T", "selectedDays": ["THURSDAY"] })))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "success": true,
            "data": { "student": student("190401001", 0.0, "NOT_PAID") }
        })))
        .expect(1)
        .mount(&server)
        .await;
    mount_status(&server, "190401001", 0.0, "NOT_PAID").await;

    let mut harness = Harness::new(&server);
    let out = harness
        .run(Command::Register(register_args(PackageCode::CorporatePlus, Some(Weekday::Thursday))))
        .await
        .unwrap();

    assert!(out.contains("Registered Ada Obi (190401001)"));
    assert!(out.contains("Outstanding: ₦60,000.00"));

    harness.reload(&server);
    assert_eq!(harness.ctx.session.matric_number(), Some("190401001"));
}

#[tokio::test]
async fn given_plus_tier_without_day_when_registered_then_no_request_is_sent() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/students/identify"))
        .respond_with(ResponseTemplate::new(201))
        .expect(0)
        .mount(&server)
        .await;

    let mut harness = Harness::new(&server);
    let err = harness
        .run(Command::Register(register_args(PackageCode::CorporatePlus, None)))
        .await
        .unwrap_err();

    assert!(matches!(
        err,
        FywError::Core {
            source: CoreError::Validation(ValidationError::DayRequirement { .. })
        }
    ));
}

#[tokio::test]
async fn given_remembered_student_when_registering_again_then_shows_dashboard() {
    let server = MockServer::start().await;
    mount_status(&server, "190401001", 20_000.0, "PARTIALLY_PAID").await;

    let mut harness = Harness::new(&server);
    harness.ctx.session.remember_student("190401001").unwrap();

    let out = harness
        .run(Command::Register(register_args(PackageCode::FullExperience, None)))
        .await
        .unwrap();

    assert!(out.contains("Already registered as 190401001"));
    assert!(out.contains("PARTIAL"));
}

#[tokio::test]
async fn given_no_remembered_student_when_status_then_asks_to_register() {
    let server = MockServer::start().await;
    let mut harness = Harness::new(&server);

    let err = harness
        .run(Command::Status { matric_number: None })
        .await
        .unwrap_err();

    assert!(matches!(err, FywError::NotRegistered { .. }));
}

#[tokio::test]
async fn given_unknown_matric_when_login_then_shows_friendly_not_found() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/students/000000"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({ "message": "Student not found" })))
        .mount(&server)
        .await;

    let mut harness = Harness::new(&server);
    let err = harness
        .run(Command::Login { matric_number: "000000".to_string() })
        .await
        .unwrap_err();

    assert_eq!(err.user_message(), "No student found with this matric number.");
    assert_eq!(harness.ctx.session.matric_number(), None);
}

#[tokio::test]
async fn given_logged_in_student_when_logout_then_forgets_matric() {
    let server = MockServer::start().await;
    mount_status(&server, "190401001", 60_000.0, "FULLY_PAID").await;

    let mut harness = Harness::new(&server);
    harness
        .run(Command::Login { matric_number: "190401001".to_string() })
        .await
        .unwrap();
    assert_eq!(harness.ctx.session.matric_number(), Some("190401001"));

    harness.run(Command::Logout).await.unwrap();
    harness.reload(&server);
    assert_eq!(harness.ctx.session.matric_number(), None);
}
