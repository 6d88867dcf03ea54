use portal_core::portal_client::PortalClient;

use serde_json::{Value, json};
use wiremock::MockServer;

pub async fn client_for(server: &MockServer) -> PortalClient {
    PortalClient::new(&server.uri()).unwrap()
}

pub fn package(code: &str, name: &str, price: f64) -> Value {
    json!({
        "_id": format!("pkg_{}", code.to_lowercase()),
        "code": code,
        "name": name,
        "price": price,
        "benefits": ["Access to all selected days"]
    })
}

pub fn student(matric: &str, total_paid: f64, status: &str) -> Value {
    json!({
        "_id": format!("stu_{matric}"),
        "matricNumber": matric,
        "fullName": "Ada Obi",
        "email": "ada@example.com",
        "gender": "female",
        "totalPaid": total_paid,
        "paymentStatus": status,
        "packageId": package("F", "Full Experience", 60_000.0),
        "selectedDays": []
    })
}
