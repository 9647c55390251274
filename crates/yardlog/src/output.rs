use application::History;
use domain::operation::Operation;
use domain::vehicle::Vehicle;
use std::fmt::Write;

/// Digits of `value` with `separator` between every group of three.
fn group_thousands(value: u64, separator: char) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(separator);
        }
        out.push(c);
    }
    out
}

/// Integer with `.` as the thousands separator, e.g. `12.345`.
pub fn thousands(value: i64) -> String {
    let sign = if value < 0 { "-" } else { "" };
    format!("{}{}", sign, group_thousands(value.unsigned_abs(), '.'))
}

/// Tonnage with two decimals and `,` grouping, e.g. `1,234.50`.
pub fn tonnage(value: f64) -> String {
    let fixed = format!("{:.2}", value.abs());
    let (whole, cents) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));
    let sign = if value < 0.0 && fixed != "0.00" { "-" } else { "" };
    match whole.parse::<u64>() {
        Ok(whole) => format!("{}{}.{}", sign, group_thousands(whole, ','), cents),
        Err(_) => format!("{:.2}", value),
    }
}

fn or_dash(value: Option<&str>) -> &str {
    value.filter(|s| !s.is_empty()).unwrap_or("-")
}

pub fn vehicle_table(vehicles: &[Vehicle]) -> String {
    if vehicles.is_empty() {
        return "no vehicles registered\n".to_string();
    }
    let mut out = format!("{:<12} {:<14} {}\n", "PLATE", "KIND", "DRIVER");
    for v in vehicles {
        let kind = v.kind.as_ref().map(|k| k.as_str());
        let _ = writeln!(
            out,
            "{:<12} {:<14} {}",
            v.plate,
            or_dash(kind),
            or_dash(v.driver.as_deref())
        );
    }
    out
}

fn operation_row(op: &Operation) -> String {
    format!(
        "{:>6} {} {:<10} {:<20} {:>8} {:>9} {:<5} {}",
        op.id,
        op.operation_date,
        op.plate,
        or_dash(op.driver.as_deref()),
        op.sack_count.map(|s| thousands(s.into())).unwrap_or_else(|| "-".into()),
        op.tonnage.map(|t| tonnage(t.into())).unwrap_or_else(|| "-".into()),
        if op.has_proof_image { "yes" } else { "no" },
        or_dash(op.description.as_deref()),
    )
}

pub fn history_table(history: &History) -> String {
    if history.is_empty() {
        return "no operations\n".to_string();
    }
    let mut out = format!(
        "{:>6} {:<10} {:<10} {:<20} {:>8} {:>9} {:<5} {}\n",
        "ID", "DATE", "PLATE", "DRIVER", "SACKS", "TONS", "PHOTO", "DESCRIPTION"
    );
    for op in &history.operations {
        out.push_str(&operation_row(op));
        out.push('\n');
    }
    let s = &history.summary;
    let _ = writeln!(
        out,
        "\ntotal sacks: {}   total tons: {}   trips: {}",
        thousands(s.total_sacks),
        tonnage(s.total_tonnage),
        s.trips
    );
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use domain::operation::{OperationId, OperationSummary};
    use domain::vehicle::{Plate, VehicleKind};

    #[test]
    fn test_thousands_separator() {
        assert_eq!(thousands(0), "0");
        assert_eq!(thousands(999), "999");
        assert_eq!(thousands(1000), "1.000");
        assert_eq!(thousands(12345), "12.345");
        assert_eq!(thousands(1234567), "1.234.567");
        assert_eq!(thousands(-4500), "-4.500");
    }

    #[test]
    fn test_tonnage_two_decimals() {
        assert_eq!(tonnage(14.75), "14.75");
        assert_eq!(tonnage(10.0), "10.00");
        assert_eq!(tonnage(0.0), "0.00");
    }

    #[test]
    fn test_tonnage_groups_thousands() {
        assert_eq!(tonnage(1234.5), "1,234.50");
        assert_eq!(tonnage(999.999), "1,000.00");
        assert_eq!(tonnage(1234567.0), "1,234,567.00");
        assert_eq!(tonnage(-1500.25), "-1,500.25");
    }

    #[test]
    fn test_empty_history_message() {
        let history = History {
            operations: Vec::new(),
            summary: OperationSummary::default(),
        };
        assert_eq!(history_table(&history), "no operations\n");
    }

    #[test]
    fn test_history_table_contains_rows_and_totals() {
        let operations = vec![Operation {
            id: OperationId::new(3),
            recorded_at: None,
            operation_date: NaiveDate::from_ymd_opt(2024, 1, 5).unwrap(),
            plate: "ABC-123".into(),
            driver: Some("Juan Pérez".into()),
            description: None,
            sack_count: Some(1200),
            tonnage: Some(10.5),
            proof_filename: None,
            has_proof_image: true,
        }];
        let summary = OperationSummary::from_operations(&operations);
        let table = history_table(&History {
            operations,
            summary,
        });

        assert!(table.contains("ABC-123"));
        assert!(table.contains("Juan Pérez"));
        assert!(table.contains("total sacks: 1.200"));
        assert!(table.contains("total tons: 10.50"));
        assert!(table.contains("trips: 1"));
    }

    #[test]
    fn test_vehicle_table_dashes_missing_fields() {
        let vehicles = vec![Vehicle::new(
            Plate::new("XYZ-999").unwrap(),
            Some(VehicleKind::Turbo),
            None,
        )];
        let table = vehicle_table(&vehicles);
        let row = table.lines().nth(1).unwrap();

        assert!(row.starts_with("XYZ-999"));
        assert!(row.contains("Turbo"));
        assert!(row.trim_end().ends_with('-'));
    }
}
