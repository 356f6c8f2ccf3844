use cpv_core::{Report, ReportRun};
use tabled::settings::object::Rows;
use tabled::settings::{Color, Modify, Style};
use tabled::{Table, Tabled};

#[derive(Tabled)]
struct CpvRow {
    #[tabled(rename = "Dimension")]
    dimension: String,
    #[tabled(rename = "Value")]
    key: String,
    #[tabled(rename = "CPV")]
    cpv: String,
}

fn rows(report: &Report) -> Vec<CpvRow> {
    let mut rows = Vec::new();
    let mut last_dimension = None;

    for (dimension, key, cpv) in report.rows() {
        // Dimension column: only on the first row of each group
        let label = if last_dimension == Some(dimension) {
            String::new()
        } else {
            dimension.key().to_string()
        };
        last_dimension = Some(dimension);

        rows.push(CpvRow {
            dimension: label,
            key: key.to_string(),
            cpv: format!("{:.2}", cpv),
        });
    }
    rows
}

pub fn show_report(outcome: &ReportRun) {
    let rows = rows(&outcome.report);
    if rows.is_empty() {
        println!("No CPV values to report.");
        return;
    }

    let mut table = Table::new(rows);
    table
        .with(Style::modern())
        .with(Modify::new(Rows::first()).with(Color::FG_CYAN));

    println!("{}", table);

    let skipped = outcome.rejected_rotations.len() + outcome.rejected_spots.len();
    println!(
        "{} spots, {} creatives, {} days ({} lines skipped)",
        outcome.spot_count,
        outcome.metadata.creative_names.len(),
        outcome.metadata.spot_days.len(),
        skipped
    );
}
