//! Human-readable output formatting for scan command

use reposim_core::format::format_score;
use reposim_core::scan::{ScanReport, SortOrder};

const HEADERS: [&str; 4] = ["repo1", "repo2", "sim_repo", "sim_files"];

/// Render the result table with aligned columns
pub fn render_table(report: &ScanReport) -> String {
    let rows: Vec<[String; 4]> = report
        .pairs
        .iter()
        .map(|pair| {
            [
                pair.repo1.display().to_string(),
                pair.repo2.display().to_string(),
                format_score(pair.sim_repo),
                format_score(pair.sim_files),
            ]
        })
        .collect();

    let mut widths = HEADERS.map(str::len);
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let mut out = String::new();
    let mut push_line = |cells: [&str; 4]| {
        let line = format!(
            "{:<w0$}  {:<w1$}  {:>w2$}  {:>w3$}",
            cells[0],
            cells[1],
            cells[2],
            cells[3],
            w0 = widths[0],
            w1 = widths[1],
            w2 = widths[2],
            w3 = widths[3],
        );
        out.push_str(line.trim_end());
        out.push('\n');
    };

    push_line(HEADERS);
    for row in &rows {
        push_line([&row[0], &row[1], &row[2], &row[3]]);
    }

    out
}

/// Output in human-readable format
pub fn output(report: &ScanReport, quiet: bool) {
    print!("{}", render_table(report));

    if !quiet {
        let order = match report.order {
            SortOrder::Ascending => "least similar first",
            SortOrder::Descending => "most similar first",
        };
        println!();
        println!(
            "{} repositories, {} pairs shown ({})",
            report.repositories.len(),
            report.pairs.len(),
            order
        );
    }
}
