use super::StudentRow;

use std::time::{SystemTime, UNIX_EPOCH};

const CSV_HEADER: [&str; 7] = [
    "matricNumber",
    "fullName",
    "packageCode",
    "packageName",
    "paymentStatus",
    "totalPaid",
    "outstanding",
];

/// Render rows as CSV, header first, `\n` between lines, no trailing newline.
pub fn to_csv(rows: &[StudentRow]) -> String {
    let mut lines = Vec::with_capacity(rows.len() + 1);
    lines.push(join_cells(CSV_HEADER.iter().copied()));

    for row in rows {
        let (code, name) = match &row.package {
            Some((code, name)) => (code.as_str(), name.as_str()),
            None => ("", ""),
        };
        let total_paid = format_number(row.total_paid);
        let outstanding = format_number(row.outstanding);

        lines.push(join_cells([
            row.matric_number.as_str(),
            row.full_name.as_str(),
            code,
            name,
            row.payment_status.as_str(),
            total_paid.as_str(),
            outstanding.as_str(),
        ]));
    }

    lines.join("\n")
}

/// `students-<unix millis>.csv`
pub fn export_file_name() -> String {
    let millis = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis())
        .unwrap_or_default();
    format!("students-{millis}.csv")
}

fn join_cells<'a>(cells: impl IntoIterator<Item = &'a str>) -> String {
    cells.into_iter().map(escape).collect::<Vec<_>>().join(",")
}

fn escape(cell: &str) -> String {
    if cell.contains([',', '"', '\n']) {
        format!("\"{}\"", cell.replace('"', "\"\""))
    } else {
        cell.to_string()
    }
}

/// Whole amounts print without a decimal point, like the API sends them.
fn format_number(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{}", value as i64)
    } else {
        value.to_string()
    }
}
