use models::{PackageCode, PaymentStatus, Student};

/// One line of the admin table.
#[derive(Debug, Clone, PartialEq)]
pub struct StudentRow {
    pub id: String,
    pub matric_number: String,
    pub full_name: String,
    pub payment_status: PaymentStatus,
    pub total_paid: f64,
    pub outstanding: f64,
    pub package: Option<(PackageCode, String)>,
}

impl From<&Student> for StudentRow {
    fn from(student: &Student) -> Self {
        let package = student.package.as_ref().and_then(|p| p.populated());
        let price = package.map(|p| p.price).unwrap_or(0.0);

        Self {
            id: student.id.clone(),
            matric_number: student.matric_number.clone(),
            full_name: student.full_name.clone(),
            payment_status: student.payment_status,
            total_paid: student.total_paid,
            outstanding: (price - student.total_paid).max(0.0),
            package: package.map(|p| (p.code, p.name.clone())),
        }
    }
}

/// "Showing X–Y of Z" numbers for the current page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageWindow {
    pub from: u64,
    pub to: u64,
    pub total: u64,
}

impl PageWindow {
    pub fn new(page: u32, limit: u32, total: u64) -> Self {
        let page = u64::from(page.max(1));
        let limit = u64::from(limit);

        let from = if total == 0 {
            0
        } else {
            (page - 1) * limit + 1
        };

        Self {
            from,
            to: total.min(page * limit),
            total,
        }
    }
}
