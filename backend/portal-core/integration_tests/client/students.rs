use super::helpers::{client_for, package, student};

use common::HttpStatusCode;
use models::{Gender, IdentifyRequestBuilder, PackageCode, Weekday};
use portal_core::error::PortalClientError;

use serde_json::json;
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[tokio::test]
async fn given_enveloped_packages_when_list_packages_then_returns_all() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/students/packages"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": true,
            "data": [
                package("T", "Corporate Plus", 30_000.0),
                package("C", "Corporate Owambe", 45_000.0),
                package("F", "Full Experience", 60_000.0)
            ]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let packages = client_for(&server).await.list_packages().await.unwrap();

    let codes: Vec<PackageCode> = packages.iter().map(|p| p.code).collect();
    assert_eq!(codes, PackageCode::ALL.to_vec());
    assert_eq!(packages[0].price, 30_000.0);
}

#[tokio::test]
async fn given_bare_array_when_list_packages_then_still_parses() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/students/packages"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!([package("F", "Full Experience", 60_000.0)])),
        )
        .mount(&server)
        .await;

    let packages = client_for(&server).await.list_packages().await.unwrap();
    assert_eq!(packages.len(), 1);
}

/// **VALUE**: The identify body is camelCase and carries the plus-tier day.
///
/// **WHY THIS MATTERS**: The API validates field names strictly. A snake_case key
/// comes back as a 400 "Required" on every field.
///
/// **BUG THIS CATCHES**: Would catch a lost `rename_all` or `selectedDays` being
/// sent as an empty array for fixed-day tiers.
#[tokio::test]
async fn given_plus_tier_request_when_identify_then_sends_camel_case_body() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/students/identify"))
        .and(body_json(json!({
            "matricNumber": "190401001",
            "fullName": "Ada Obi",
            "gender": "female",
            "packageCode": "T",
            "selectedDays": ["TUESDAY"]
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "success": true,
            "data": { "student": student("190401001", 0.0, "NOT_PAID") }
        })))
        .expect(1)
        .mount(&server)
        .await;

    let request = IdentifyRequestBuilder::default()
        .with_matric_number("190401001")
        .with_full_name("Ada Obi")
        .with_gender(Gender::Female)
        .with_package_code(PackageCode::CorporatePlus)
        .with_selected_days([Weekday::Tuesday])
        .build()
        .unwrap();

    let created = client_for(&server).await.identify(&request).await.unwrap();
    assert_eq!(created.matric_number, "190401001");
}

#[tokio::test]
async fn given_top_level_student_when_identify_then_reads_it() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/students/identify"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "student": student("190401009", 0.0, "NOT_PAID")
        })))
        .mount(&server)
        .await;

    let request = IdentifyRequestBuilder::default()
        .with_matric_number("190401009")
        .with_full_name("Ada Obi")
        .with_gender(Gender::Female)
        .with_package_code(PackageCode::FullExperience)
        .build()
        .unwrap();

    let created = client_for(&server).await.identify(&request).await.unwrap();
    assert_eq!(created.matric_number, "190401009");
}

#[tokio::test]
async fn given_duplicate_matric_when_identify_then_returns_friendly_conflict() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/students/identify"))
        .respond_with(
            ResponseTemplate::new(409).set_body_json(json!({ "message": "matricNumber already exists" })),
        )
        .mount(&server)
        .await;

    let request = IdentifyRequestBuilder::default()
        .with_matric_number("190401001")
        .with_full_name("Ada Obi")
        .with_gender(Gender::Female)
        .with_package_code(PackageCode::FullExperience)
        .build()
        .unwrap();

    let err = client_for(&server).await.identify(&request).await.unwrap_err();
    assert_eq!(err.status(), Some(HttpStatusCode::CONFLICT));
    assert_eq!(err.user_message(), "This matric number is already registered.");
}

#[tokio::test]
async fn given_known_matric_when_student_status_then_returns_dashboard_payload() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/students/190401001"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": true,
            "data": {
                "student": student("190401001", 20_000.0, "PARTIALLY_PAID"),
                "package": package("F", "Full Experience", 60_000.0),
                "outstanding": 40_000
            }
        })))
        .mount(&server)
        .await;

    let status = client_for(&server)
        .await
        .student_status(" 190401001 ")
        .await
        .unwrap();

    assert_eq!(status.outstanding, 40_000.0);
    assert_eq!(status.package.code, PackageCode::FullExperience);
}

#[tokio::test]
async fn given_matric_with_slash_when_student_status_then_segment_is_encoded() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/students/CSC%2F19%2F001"))
        .respond_with(
            ResponseTemplate::new(404).set_body_json(json!({ "message": "Student not found" })),
        )
        .expect(1)
        .mount(&server)
        .await;

    let err = client_for(&server)
        .await
        .student_status("CSC/19/001")
        .await
        .unwrap_err();

    assert!(matches!(err, PortalClientError::Request { .. }));
    assert_eq!(err.user_message(), "No student found with this matric number.");
}

#[tokio::test]
async fn given_server_error_when_student_status_then_hides_body() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/students/190401001"))
        .respond_with(ResponseTemplate::new(500).set_body_json(json!({
            "message": "MongoServerError: connection pool closed"
        })))
        .mount(&server)
        .await;

    let err = client_for(&server)
        .await
        .student_status("190401001")
        .await
        .unwrap_err();

    assert_eq!(
        err.user_message(),
        "Something went wrong on our end. Please try again."
    );
    assert!(!err.user_message().contains("Mongo"));
}

#[tokio::test]
async fn given_html_gateway_error_when_student_status_then_returns_generic_sentence() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/students/190401001"))
        .respond_with(ResponseTemplate::new(502).set_body_string("<html>Bad Gateway</html>"))
        .mount(&server)
        .await;

    let err = client_for(&server)
        .await
        .student_status("190401001")
        .await
        .unwrap_err();

    assert_eq!(err.status(), Some(HttpStatusCode(502)));
    assert_eq!(
        err.user_message(),
        portal_core::api_error::GENERIC_FALLBACK_MESSAGE
    );
}
