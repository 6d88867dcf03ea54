use crate::{PackageCode, PaymentStatus, Student, StudentStatus, Weekday};

use serde_json::json;

/// **VALUE**: The status endpoint's populated `packageId` and invites deserialize.
///
/// **WHY THIS MATTERS**: The dashboard reads price, paid amount and invite links from this
/// payload. A renamed field would silently zero the progress bar.
#[test]
fn given_status_payload_when_deserialized_then_populates_student_and_package() {
    // GIVEN: A `data` object from GET api/students/{matric}
    let value = json!({
        "student": {
            "_id": "stu_1",
            "matricNumber": "190401001",
            "fullName": "Ada Obi",
            "email": "ada@example.com",
            "totalPaid": 60000,
            "paymentStatus": "FULLY_PAID",
            "packageId": {
                "_id": "pkg_f",
                "code": "F",
                "name": "Full Experience",
                "price": 60000,
                "benefits": []
            },
            "invites": {
                "pdfUrl": "https://cdn.example.com/invite.pdf",
                "imageUrl": "https://cdn.example.com/invite.png"
            },
            "selectedDays": []
        },
        "package": {
            "_id": "pkg_f",
            "code": "F",
            "name": "Full Experience",
            "price": 60000,
            "benefits": ["All days"]
        },
        "outstanding": 0
    });

    // WHEN: Deserializing
    let status: StudentStatus = serde_json::from_value(value).unwrap();

    // THEN: Nested documents are available
    assert!(status.student.is_fully_paid());
    let populated = status.student.package.as_ref().and_then(|p| p.populated());
    assert_eq!(populated.map(|p| p.code), Some(PackageCode::FullExperience));
    assert_eq!(
        status.student.invites.and_then(|i| i.pdf_url).as_deref(),
        Some("https://cdn.example.com/invite.pdf")
    );
    assert_eq!(status.outstanding, 0.0);
}

#[test]
fn given_unpopulated_package_id_when_deserialized_then_keeps_raw_id() {
    let value = json!({
        "_id": "stu_2",
        "matricNumber": "190401002",
        "fullName": "Tunde Bello",
        "packageId": "pkg_t",
        "selectedDays": ["TUESDAY"]
    });

    let student: Student = serde_json::from_value(value).unwrap();

    assert!(student.package.as_ref().unwrap().populated().is_none());
    assert_eq!(student.payment_status, PaymentStatus::NotPaid);
    assert_eq!(student.total_paid, 0.0);
    assert_eq!(student.selected_days, vec![Weekday::Tuesday]);
}

#[test]
fn given_filter_spellings_when_parsing_payment_status_then_normalizes() {
    assert_eq!("partial".parse::<PaymentStatus>().unwrap(), PaymentStatus::PartiallyPaid);
    assert_eq!("fully-paid".parse::<PaymentStatus>().unwrap(), PaymentStatus::FullyPaid);
    assert_eq!("NOT_PAID".parse::<PaymentStatus>().unwrap(), PaymentStatus::NotPaid);
    assert!("refunded".parse::<PaymentStatus>().is_err());
}

#[test]
fn given_payment_status_when_badged_then_uses_short_labels() {
    assert_eq!(PaymentStatus::PartiallyPaid.badge(), "PARTIAL");
    assert_eq!(PaymentStatus::FullyPaid.badge(), "FULLY PAID");
}
