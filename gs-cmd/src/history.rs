//! Grouped history listing and CSV export.

use gs_api::ApiClient;
use gs_core::history::{group_calculations, GroupedCalculation};
use gs_core::labels::{modal_label, timestamp_label, two_decimals};
use gs_core::CalculationRecord;
use log::info;
use std::io::Write;

pub async fn run_history(api: &ApiClient, csv_path: Option<&str>) -> anyhow::Result<()> {
    let records = api.list_calculations().await?;
    let groups = group_calculations(&records);
    info!("{} records in {} routes", records.len(), groups.len());

    if groups.is_empty() {
        println!("No calculations yet");
    }
    for group in &groups {
        for line in group_lines(group) {
            println!("{}", line);
        }
    }

    if let Some(path) = csv_path {
        let file = std::fs::File::create(path)?;
        write_records(file, &records)?;
        info!("Wrote {} records to {}", records.len(), path);
    }
    Ok(())
}

/// Write the flat records with a header row, one row per `(route, modal)`.
pub fn write_records<W: Write>(writer: W, records: &[CalculationRecord]) -> anyhow::Result<()> {
    let mut wtr = csv::Writer::from_writer(writer);
    for record in records {
        wtr.serialize(record)?;
    }
    wtr.flush()?;
    Ok(())
}

fn group_lines(group: &GroupedCalculation) -> Vec<String> {
    let mut lines = vec![format!(
        "{} -> {}  {} km  ({})",
        group.origin_city,
        group.destination_city,
        two_decimals(group.distance_km),
        timestamp_label(&group.created_at)
    )];
    for footprint in &group.footprints {
        lines.push(format!(
            "  {:<20} {:>12} kg CO2",
            modal_label(&footprint.modal),
            two_decimals(footprint.carbon_footprint_kg)
        ));
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(id: i64, modal: &str, kg: f64) -> CalculationRecord {
        CalculationRecord {
            id,
            origin_city: "A".to_string(),
            destination_city: "B".to_string(),
            distance_km: 100.0,
            modal: modal.to_string(),
            carbon_footprint_kg: kg,
            created_at: "2024-01-01T10:00:00".to_string(),
        }
    }

    #[test]
    fn csv_has_header_and_one_row_per_record() {
        let records = vec![record(1, "truck", 10.0), record(2, "electric", 2.5)];
        let mut out = Vec::new();
        write_records(&mut out, &records).unwrap();

        let text = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(
            lines[0],
            "id,origin_city,destination_city,distance_km,modal,carbon_footprint_kg,created_at"
        );
        assert_eq!(lines[1], "1,A,B,100.0,truck,10.0,2024-01-01T10:00:00");
        assert_eq!(lines[2], "2,A,B,100.0,electric,2.5,2024-01-01T10:00:00");
        assert_eq!(lines.len(), 3);
    }

    #[test]
    fn empty_history_writes_nothing() {
        let mut out = Vec::new();
        write_records(&mut out, &[]).unwrap();
        assert!(out.is_empty());
    }

    #[test]
    fn group_lines_show_header_then_footprints() {
        let records = vec![record(1, "truck", 10.0), record(2, "electric", 2.5)];
        let groups = group_calculations(&records);
        let lines = group_lines(&groups[0]);
        assert_eq!(lines[0], "A -> B  100.00 km  (01/01/2024 10:00)");
        assert!(lines[1].contains("Truck"));
        assert!(lines[2].contains("Electric"));
    }
}
