//! Student dashboard: payment progress, the amount box, invite links.

use crate::error::ValidationError;
use crate::format::format_naira;

use models::{InitializePaymentRequest, Package, Student, StudentStatus};

const ALREADY_PAID_MESSAGE: &str = "This package has already been fully paid.";
const NON_POSITIVE_AMOUNT_MESSAGE: &str = "Payment amount must be greater than zero.";

/// Quick-fill buttons next to the amount box.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaymentPreset {
    Quarter,
    Half,
    Full,
}

impl PaymentPreset {
    pub fn percent(&self) -> u8 {
        match self {
            PaymentPreset::Quarter => 25,
            PaymentPreset::Half => 50,
            PaymentPreset::Full => 100,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InviteLinks {
    pub pdf_url: Option<String>,
    pub image_url: Option<String>,
}

#[derive(Debug, Clone)]
pub struct Dashboard {
    pub student: Student,
    pub package: Package,
    outstanding: f64,
    amount: f64,
}

impl Dashboard {
    /// Pre-fills the amount with `min(default_installment, outstanding)`.
    pub fn new(status: StudentStatus, default_installment: f64) -> Self {
        let outstanding = status.outstanding.max(0.0);
        let amount = if outstanding > 0.0 {
            default_installment.min(outstanding)
        } else {
            0.0
        };

        Self {
            student: status.student,
            package: status.package,
            outstanding,
            amount,
        }
    }

    pub fn outstanding(&self) -> f64 {
        self.outstanding
    }

    pub fn amount(&self) -> f64 {
        self.amount
    }

    /// Share of the package price already paid, rounded, 0 to 100.
    pub fn progress_percent(&self) -> u8 {
        if self.package.price <= 0.0 {
            return 0;
        }
        let pct = (self.student.total_paid / self.package.price * 100.0).round();
        pct.clamp(0.0, 100.0) as u8
    }

    /// The amount box never holds more than the outstanding balance.
    pub fn set_amount(&mut self, amount: f64) {
        self.amount = amount.max(0.0).min(self.outstanding);
    }

    pub fn apply_preset(&mut self, preset: PaymentPreset) {
        let amount = (self.outstanding * f64::from(preset.percent()) / 100.0).round();
        self.amount = amount.min(self.outstanding);
    }

    pub fn can_pay(&self) -> bool {
        self.outstanding > 0.0 && self.amount > 0.0 && self.amount <= self.outstanding
    }

    pub fn is_fully_paid(&self) -> bool {
        self.student.is_fully_paid()
    }

    /// Invite downloads, offered only once fully paid.
    pub fn invite_links(&self) -> Option<InviteLinks> {
        if !self.is_fully_paid() {
            return None;
        }
        let invites = self.student.invites.as_ref()?;
        if invites.pdf_url.is_none() && invites.image_url.is_none() {
            return None;
        }
        Some(InviteLinks {
            pdf_url: invites.pdf_url.clone(),
            image_url: invites.image_url.clone(),
        })
    }

    /// Body for `api/payments/initialize` with the current amount.
    #[track_caller]
    pub fn payment_request(&self) -> Result<InitializePaymentRequest, ValidationError> {
        if self.outstanding <= 0.0 {
            return Err(ValidationError::amount(ALREADY_PAID_MESSAGE));
        }
        if self.amount <= 0.0 {
            return Err(ValidationError::amount(NON_POSITIVE_AMOUNT_MESSAGE));
        }
        if self.amount > self.outstanding {
            return Err(ValidationError::amount(format!(
                "Amount cannot exceed the outstanding balance of {}.",
                format_naira(self.outstanding)
            )));
        }

        Ok(InitializePaymentRequest {
            student_id: self.student.matric_number.clone(),
            amount: self.amount,
            email: self.student.email.clone(),
        })
    }
}
