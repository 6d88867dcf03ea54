use super::helpers::{Harness, student};

use fyw::cli::{AdminCommand, Command, FilterArgs, StudentsArgs};
use fyw::commands::dispatch;
use fyw::error::FywError;
use models::PaymentStatus;

use std::time::Duration;

use serde_json::json;
use tokio::io::{AsyncWriteExt, BufReader, duplex};
use wiremock::matchers::{body_json, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

async fn mount_login(server: &MockServer) {
    Mock::given(method("POST"))
        .and(path("/api/admin/auth/login"))
        .and(body_json(json!({ "email": "admin@example.com", "password": "secret-pass" })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": true,
            "data": { "token": "jwt-token", "admin": { "email": "admin@example.com" } }
        })))
        .mount(server)
        .await;
}

fn students_body() -> serde_json::Value {
    json!({
        "success": true,
        "data": {
            "students": [
                student("190401001", 60_000.0, "FULLY_PAID"),
                student("190401002", 15_000.0, "PARTIALLY_PAID")
            ],
            "pagination": { "page": 1, "limit": 10, "total": 2, "pages": 1 }
        }
    })
}

fn students_args(export: Option<std::path::PathBuf>) -> StudentsArgs {
    StudentsArgs {
        search: None,
        filters: FilterArgs::default(),
        page: 1,
        export,
        json: false,
    }
}

#[tokio::test]
async fn given_password_on_stdin_when_admin_login_then_stores_token() {
    let server = MockServer::start().await;
    mount_login(&server).await;

    let mut harness = Harness::new(&server);
    let out = harness
        .run_with_input(
            Command::Admin {
                command: AdminCommand::Login {
                    email: "admin@example.com".to_string(),
                    password: None,
                },
            },
            "secret-pass\n",
        )
        .await
        .unwrap();

    assert!(out.contains("Signed in as admin@example.com."));

    harness.reload(&server);
    let admin = harness.ctx.session.admin().unwrap();
    assert_eq!(admin.token.expose(), "jwt-token");
}

#[tokio::test]
async fn given_short_password_when_admin_login_then_fails_locally() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/admin/auth/login"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let mut harness = Harness::new(&server);
    let err = harness
        .run(Command::Admin {
            command: AdminCommand::Login {
                email: "admin@example.com".to_string(),
                password: Some("123".to_string()),
            },
        })
        .await
        .unwrap_err();

    assert!(err.user_message().contains("at least 6 characters"));
}

#[tokio::test]
async fn given_no_token_when_listing_students_then_asks_to_sign_in() {
    let server = MockServer::start().await;
    let mut harness = Harness::new(&server);

    let err = harness
        .run(Command::Admin {
            command: AdminCommand::Students(students_args(None)),
        })
        .await
        .unwrap_err();

    assert!(matches!(err, FywError::NotSignedIn { .. }));
}

/// **VALUE**: The student list renders a table and exports the same rows as CSV.
///
/// **WHY THIS MATTERS**: Organisers reconcile payments from the export. It must
/// match what the table showed, row for row.
///
/// **BUG THIS CATCHES**: Would catch the export writing a different page or
/// dropping the outstanding column.
#[tokio::test]
async fn given_signed_in_admin_when_listing_students_with_export_then_writes_csv() {
    let server = MockServer::start().await;
    mount_login(&server).await;
    Mock::given(method("GET"))
        .and(path("/api/admin/students"))
        .and(header("authorization", "Bearer jwt-token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(students_body()))
        .mount(&server)
        .await;

    let mut harness = Harness::new(&server);
    harness
        .run(Command::Admin {
            command: AdminCommand::Login {
                email: "admin@example.com".to_string(),
                password: Some("secret-pass".to_string()),
            },
        })
        .await
        .unwrap();

    let export_dir = tempfile::TempDir::new().unwrap();
    let out = harness
        .run(Command::Admin {
            command: AdminCommand::Students(students_args(Some(export_dir.path().to_path_buf()))),
        })
        .await
        .unwrap();

    assert!(out.contains("190401002"));
    assert!(out.contains("Showing 1-2 of 2"));
    assert!(out.contains("Exported 2 students"));

    let files: Vec<_> = std::fs::read_dir(export_dir.path())
        .unwrap()
        .map(|entry| entry.unwrap().path())
        .collect();
    assert_eq!(files.len(), 1);
    let csv = std::fs::read_to_string(&files[0]).unwrap();
    assert!(csv.starts_with("matricNumber,fullName,packageCode"));
    assert!(csv.contains("190401002,Ada Obi,F,Full Experience,PARTIALLY_PAID,15000,45000"));
}

#[tokio::test]
async fn given_missing_export_dir_when_listing_students_then_names_the_path() {
    let server = MockServer::start().await;
    mount_login(&server).await;
    Mock::given(method("GET"))
        .and(path("/api/admin/students"))
        .respond_with(ResponseTemplate::new(200).set_body_json(students_body()))
        .mount(&server)
        .await;

    let mut harness = Harness::new(&server);
    harness
        .run(Command::Admin {
            command: AdminCommand::Login {
                email: "admin@example.com".to_string(),
                password: Some("secret-pass".to_string()),
            },
        })
        .await
        .unwrap();

    let missing = harness.dir.path().join("no-such-dir");
    let err = harness
        .run(Command::Admin {
            command: AdminCommand::Students(students_args(Some(missing))),
        })
        .await
        .unwrap_err();

    assert!(err.user_message().starts_with("Failed to write"));
    assert!(err.user_message().contains("no-such-dir"));
}

#[tokio::test]
async fn given_rejected_token_when_listing_students_then_signs_out() {
    let server = MockServer::start().await;
    mount_login(&server).await;
    Mock::given(method("GET"))
        .and(path("/api/admin/students"))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({ "message": "Invalid or expired token" })))
        .mount(&server)
        .await;

    let mut harness = Harness::new(&server);
    harness
        .run(Command::Admin {
            command: AdminCommand::Login {
                email: "admin@example.com".to_string(),
                password: Some("secret-pass".to_string()),
            },
        })
        .await
        .unwrap();

    let err = harness
        .run(Command::Admin {
            command: AdminCommand::Students(students_args(None)),
        })
        .await
        .unwrap_err();

    assert_eq!(err.user_message(), "Invalid or expired token");
    harness.reload(&server);
    assert!(harness.ctx.session.admin().is_none());
}

/// **VALUE**: Search terms arriving together produce one request for the last term.
///
/// **WHY THIS MATTERS**: Piped or fast-typed input would otherwise fire one API
/// call per line.
///
/// **BUG THIS CATCHES**: Would catch the debouncer being bypassed or the first
/// term winning instead of the last.
#[tokio::test]
async fn given_burst_of_search_lines_when_admin_search_then_queries_last_term_once() {
    let server = MockServer::start().await;
    mount_login(&server).await;
    Mock::given(method("GET"))
        .and(path("/api/admin/students"))
        .and(query_param("search", "obi"))
        .and(query_param("status", "PARTIALLY_PAID"))
        .respond_with(ResponseTemplate::new(200).set_body_json(students_body()))
        .expect(1)
        .mount(&server)
        .await;

    let mut harness = Harness::new(&server);
    harness
        .run(Command::Admin {
            command: AdminCommand::Login {
                email: "admin@example.com".to_string(),
                password: Some("secret-pass".to_string()),
            },
        })
        .await
        .unwrap();

    let filters = FilterArgs {
        status: Some(PaymentStatus::PartiallyPaid),
        package: None,
        limit: None,
    };
    let out = harness
        .run_with_input(
            Command::Admin {
                command: AdminCommand::Search(filters),
            },
            "o\nob\nobi\n",
        )
        .await
        .unwrap();

    assert_eq!(out.matches("Showing").count(), 1);
}

/// **VALUE**: A failed search request ends `admin search` while stdin is still open.
///
/// **WHY THIS MATTERS**: In a terminal stdin stays open until Ctrl-D. The error
/// and the sign-out must show as soon as the request fails.
///
/// **BUG THIS CATCHES**: Would catch the command waiting for end of input after
/// the consumer has already given up.
#[tokio::test]
async fn given_open_stdin_when_search_request_fails_then_returns_without_waiting_for_eof() {
    // GIVEN: A signed-in admin whose token the API now rejects
    let server = MockServer::start().await;
    mount_login(&server).await;
    Mock::given(method("GET"))
        .and(path("/api/admin/students"))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({ "message": "Invalid or expired token" })))
        .mount(&server)
        .await;

    let mut harness = Harness::new(&server);
    harness
        .run(Command::Admin {
            command: AdminCommand::Login {
                email: "admin@example.com".to_string(),
                password: Some("secret-pass".to_string()),
            },
        })
        .await
        .unwrap();

    // WHEN: One term arrives and the writer end stays open
    let (mut stdin_writer, stdin_reader) = duplex(64);
    stdin_writer.write_all(b"obi\n").await.unwrap();

    let mut out = Vec::new();
    let result = tokio::time::timeout(
        Duration::from_secs(5),
        dispatch(
            &mut harness.ctx,
            Command::Admin {
                command: AdminCommand::Search(FilterArgs::default()),
            },
            BufReader::new(stdin_reader),
            &mut out,
        ),
    )
    .await;

    // THEN: The command returned the 401 and signed the admin out
    let err = result.expect("search should return once the request fails").unwrap_err();
    assert_eq!(err.user_message(), "Invalid or expired token");
    assert!(harness.ctx.session.admin().is_none());

    drop(stdin_writer);
}
