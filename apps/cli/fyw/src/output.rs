//! Plain-text rendering of command results.

use models::{Package, PackageCode, Weekday};
use portal_core::admin::{PageWindow, StudentRow};
use portal_core::dashboard::Dashboard;
use portal_core::format::format_naira;
use portal_core::payment::{Checkout, VerificationOutcome};

use std::fmt::Write;

const PROGRESS_BAR_WIDTH: usize = 20;

pub fn packages(packages: &[Package]) -> String {
    let mut out = String::new();

    for package in packages {
        let _ = writeln!(
            out,
            "{}  {:<20} {}",
            package.code,
            package.name,
            format_naira(package.price)
        );
        for benefit in &package.benefits {
            let _ = writeln!(out, "     - {benefit}");
        }
        if package.code.requires_day_selection() {
            let _ = writeln!(out, "     Pick one theme day: {}", theme_days());
        }
    }

    out
}

pub fn theme_days() -> String {
    Weekday::PLUS_TIER_DAYS
        .iter()
        .filter_map(Weekday::theme_label)
        .collect::<Vec<_>>()
        .join(", ")
}

pub fn dashboard(dashboard: &Dashboard) -> String {
    let student = &dashboard.student;
    let package = &dashboard.package;
    let mut out = String::new();

    let _ = writeln!(out, "{} ({})", student.full_name, student.matric_number);
    let _ = writeln!(out, "Package:     {}", package_name(package.code, &package.name));
    if !student.selected_days.is_empty() {
        let days: Vec<&str> = student
            .selected_days
            .iter()
            .map(|d| d.theme_label().unwrap_or(d.as_str()))
            .collect();
        let _ = writeln!(out, "Days:        {}", days.join(", "));
    }
    let _ = writeln!(out, "Status:      {}", student.payment_status.badge());
    let _ = writeln!(
        out,
        "Paid:        {} of {}",
        format_naira(student.total_paid),
        format_naira(package.price)
    );
    let _ = writeln!(out, "Outstanding: {}", format_naira(dashboard.outstanding()));
    let _ = writeln!(out, "Progress:    {}", progress_bar(dashboard.progress_percent()));

    match dashboard.invite_links() {
        Some(links) => {
            if let Some(pdf) = links.pdf_url {
                let _ = writeln!(out, "Invite PDF:   {pdf}");
            }
            if let Some(image) = links.image_url {
                let _ = writeln!(out, "Invite image: {image}");
            }
        }
        None if dashboard.can_pay() => {
            let _ = writeln!(
                out,
                "Next payment: {} (run `fyw pay`)",
                format_naira(dashboard.amount())
            );
        }
        None => {}
    }

    out
}

pub fn progress_bar(percent: u8) -> String {
    let filled = usize::from(percent.min(100)) * PROGRESS_BAR_WIDTH / 100;
    format!(
        "[{}{}] {percent}%",
        "#".repeat(filled),
        "-".repeat(PROGRESS_BAR_WIDTH - filled)
    )
}

pub fn checkout(checkout: &Checkout, amount: f64) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Pay {} at:", format_naira(amount));
    let _ = writeln!(out, "{}", checkout.authorization_url);
    if let Some(reference) = &checkout.reference {
        let _ = writeln!(out, "Reference: {reference}");
    }
    let _ = writeln!(
        out,
        "After paying, run `fyw verify <callback URL or reference>`."
    );
    out
}

pub fn verification(outcome: &VerificationOutcome) -> String {
    let mut out = format!("Payment {} verified", outcome.reference);
    if let Some(amount) = outcome.amount {
        let _ = write!(out, " ({})", format_naira(amount));
    }
    let _ = writeln!(out, " for {}.", outcome.matric_number);
    out
}

pub fn student_table(rows: &[StudentRow], window: PageWindow) -> String {
    let mut out = String::new();

    let _ = writeln!(
        out,
        "{:<14} {:<28} {:<20} {:<11} {:>14} {:>14}",
        "MATRIC", "NAME", "PACKAGE", "STATUS", "PAID", "OUTSTANDING"
    );
    for row in rows {
        let package = row
            .package
            .as_ref()
            .map(|(code, name)| package_name(*code, name))
            .unwrap_or_else(|| "-".to_string());
        let _ = writeln!(
            out,
            "{:<14} {:<28} {:<20} {:<11} {:>14} {:>14}",
            row.matric_number,
            truncate(&row.full_name, 28),
            truncate(&package, 20),
            row.payment_status.badge(),
            format_naira(row.total_paid),
            format_naira(row.outstanding)
        );
    }
    if rows.is_empty() {
        let _ = writeln!(out, "No students found.");
    }
    let _ = writeln!(
        out,
        "Showing {}-{} of {}",
        window.from, window.to, window.total
    );

    out
}

fn package_name(code: PackageCode, name: &str) -> String {
    format!("{code} {name}")
}

fn truncate(value: &str, width: usize) -> String {
    if value.chars().count() <= width {
        return value.to_string();
    }
    let mut short: String = value.chars().take(width.saturating_sub(1)).collect();
    short.push('…');
    short
}
