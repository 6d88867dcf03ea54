use fyw::cli::Command;
use fyw::commands::dispatch;
use fyw::context::AppContext;
use fyw::error::FywError;

use serde_json::{Value, json};
use tempfile::TempDir;
use wiremock::MockServer;

pub struct Harness {
    pub dir: TempDir,
    pub ctx: AppContext,
}

impl Harness {
    pub fn new(server: &MockServer) -> Self {
        let dir = TempDir::new().unwrap();
        let ctx = AppContext::load(dir.path(), Some(&server.uri())).unwrap();
        Self { dir, ctx }
    }

    /// Reload from disk, as the next `fyw` invocation would.
    pub fn reload(&mut self, server: &MockServer) {
        self.ctx = AppContext::load(self.dir.path(), Some(&server.uri())).unwrap();
    }

    pub async fn run(&mut self, command: Command) -> Result<String, FywError> {
        self.run_with_input(command, "").await
    }

    pub async fn run_with_input(&mut self, command: Command, input: &str) -> Result<String, FywError> {
        let mut out = Vec::new();
        dispatch(&mut self.ctx, command, input.as_bytes(), &mut out).await?;
        Ok(String::from_utf8(out).unwrap())
    }
}

pub fn package(code: &str, name: &str, price: f64) -> Value {
    json!({ "_id": format!("pkg_{code}"), "code": code, "name": name, "price": price, "benefits": [] })
}

pub fn student(matric: &str, total_paid: f64, status: &str) -> Value {
    json!({
        "_id": format!("stu_{matric}"),
        "matricNumber": matric,
        "fullName": "Ada Obi",
        "email": "ada@example.com",
        "totalPaid": total_paid,
        "paymentStatus": status,
        "packageId": package("F", "Full Experience", 60_000.0),
        "selectedDays": []
    })
}

pub fn status_body(matric: &str, total_paid: f64, status: &str) -> Value {
    json!({
        "success": true,
        "data": {
            "student": student(matric, total_paid, status),
            "package": package("F", "Full Experience", 60_000.0),
            "outstanding": 60_000.0 - total_paid
        }
    })
}
