use models::{PackageCode, PaymentStatus};

pub const DEFAULT_PAGE_SIZE: u32 = 10;

/// Filters and paging for `GET api/admin/students`.
///
/// `None` filters mean "all". Changing any filter goes back to page 1.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StudentQuery {
    search: String,
    status: Option<PaymentStatus>,
    package_code: Option<PackageCode>,
    page: u32,
    limit: u32,
}

impl Default for StudentQuery {
    fn default() -> Self {
        Self::new(DEFAULT_PAGE_SIZE)
    }
}

impl StudentQuery {
    pub fn new(limit: u32) -> Self {
        Self {
            search: String::new(),
            status: None,
            package_code: None,
            page: 1,
            limit: limit.max(1),
        }
    }

    pub fn with_search(mut self, search: impl Into<String>) -> Self {
        self.set_search(search);
        self
    }

    pub fn with_status(mut self, status: Option<PaymentStatus>) -> Self {
        self.set_status(status);
        self
    }

    pub fn with_package_code(mut self, code: Option<PackageCode>) -> Self {
        self.set_package_code(code);
        self
    }

    pub fn with_page(mut self, page: u32) -> Self {
        self.set_page(page);
        self
    }

    pub fn set_search(&mut self, search: impl Into<String>) {
        self.search = search.into();
        self.page = 1;
    }

    pub fn set_status(&mut self, status: Option<PaymentStatus>) {
        self.status = status;
        self.page = 1;
    }

    pub fn set_package_code(&mut self, code: Option<PackageCode>) {
        self.package_code = code;
        self.page = 1;
    }

    /// Pages are 1-based; 0 is treated as 1.
    pub fn set_page(&mut self, page: u32) {
        self.page = page.max(1);
    }

    pub fn page(&self) -> u32 {
        self.page
    }

    pub fn limit(&self) -> u32 {
        self.limit
    }

    /// Query string pairs in the order the API documents them.
    pub fn to_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::with_capacity(5);

        let search = self.search.trim();
        if !search.is_empty() {
            pairs.push(("search", search.to_string()));
        }
        if let Some(status) = self.status {
            pairs.push(("status", status.as_str().to_string()));
        }
        if let Some(code) = self.package_code {
            pairs.push(("packageCode", code.as_str().to_string()));
        }
        pairs.push(("page", self.page.to_string()));
        pairs.push(("limit", self.limit.to_string()));

        pairs
    }
}
