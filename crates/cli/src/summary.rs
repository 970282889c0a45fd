//! End-of-run summary table

use colored::Colorize;
use std::path::Path;
use tabled::{Table, Tabled};

use linesift_core::application::DrainReport;
use linesift_core::domain::Category;

#[derive(Tabled)]
struct SummaryRow {
    category: &'static str,
    file: String,
    written: usize,
}

pub fn print(report: &DrainReport, output_dir: &Path) {
    let rows: Vec<SummaryRow> = Category::PRIORITY
        .iter()
        .map(|category| SummaryRow {
            category: category.label(),
            file: output_dir.join(category.file_name()).display().to_string(),
            written: report.written(*category),
        })
        .collect();

    println!();
    println!("{}", "✓ Run complete".green().bold());
    println!();
    println!("{}", Table::new(rows));
    println!();
    println!("  {} {}", "Lines processed:".bold(), report.polled);
    println!("  {} {}", "Unclassified:".bold(), report.unclassified);

    if report.resolution_failures > 0 {
        println!(
            "  {} {}",
            "Unresolved domains:".bold(),
            report.resolution_failures.to_string().yellow()
        );
    }
    if report.discarded > 0 || report.write_failures > 0 {
        println!(
            "  {} {}",
            "Records lost:".bold(),
            (report.discarded + report.write_failures).to_string().red()
        );
    }
}
