// Shared JSON fixtures for portal payloads

use models::{Student, StudentStatus};

use serde_json::{Value, json};

pub fn package_json(code: &str, name: &str, price: f64) -> Value {
    json!({
        "_id": format!("pkg_{}", code.to_lowercase()),
        "code": code,
        "name": name,
        "price": price,
        "benefits": []
    })
}

pub fn student_json(matric: &str, total_paid: f64, status: &str, package: Value) -> Value {
    json!({
        "_id": format!("stu_{matric}"),
        "matricNumber": matric,
        "fullName": "Ada Obi",
        "email": "ada@example.com",
        "gender": "female",
        "totalPaid": total_paid,
        "paymentStatus": status,
        "packageId": package,
        "selectedDays": []
    })
}

pub fn student(matric: &str, total_paid: f64, status: &str, package: Value) -> Student {
    serde_json::from_value(student_json(matric, total_paid, status, package)).unwrap()
}

/// Status payload for a Full Experience (₦60,000) student.
pub fn full_experience_status(total_paid: f64, status: &str) -> StudentStatus {
    let package = package_json("F", "Full Experience", 60_000.0);
    serde_json::from_value(json!({
        "student": student_json("190401001", total_paid, status, package.clone()),
        "package": package,
        "outstanding": (60_000.0 - total_paid).max(0.0)
    }))
    .unwrap()
}
