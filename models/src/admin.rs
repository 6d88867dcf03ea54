use crate::Student;

use common::RedactedToken;

use serde::Deserialize;

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct AdminProfile {
    pub email: String,
}

/// `data` of `POST api/admin/auth/login`.
#[derive(Debug, Clone, Deserialize)]
pub struct AdminSession {
    pub token: RedactedToken,
    pub admin: AdminProfile,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct Pagination {
    pub page: u32,
    pub limit: u32,
    pub total: u64,
    pub pages: u32,
}

/// `data` of `GET api/admin/students`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct StudentsPage {
    #[serde(default)]
    pub students: Vec<Student>,
    #[serde(default)]
    pub pagination: Option<Pagination>,
}
