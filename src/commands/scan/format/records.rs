//! Records output formatting for scan command

use reposim_core::format::{escape_record_value, format_score};
use reposim_core::scan::{ScanReport, SortOrder};

/// Render the records: one header line, one `P` line per pair
pub fn render(report: &ScanReport) -> String {
    let order = match report.order {
        SortOrder::Ascending => "ascending",
        SortOrder::Descending => "descending",
    };

    let mut out = format!(
        "H reposim=1 records=1 mode=scan root={} pattern={} repos={} pairs={} order={}\n",
        escape_record_value(&report.root.display().to_string()),
        escape_record_value(&report.pattern),
        report.repositories.len(),
        report.pairs.len(),
        order
    );

    for pair in &report.pairs {
        out.push_str(&format!(
            "P {} {} {} {}\n",
            escape_record_value(&pair.repo1.display().to_string()),
            escape_record_value(&pair.repo2.display().to_string()),
            format_score(pair.sim_repo),
            format_score(pair.sim_files)
        ));
    }

    out
}

/// Output in records format
pub fn output(report: &ScanReport) {
    print!("{}", render(report));
}
