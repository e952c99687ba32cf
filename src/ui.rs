use crate::engine::ValidationReport;
use console::style;

pub fn display_error(message: &str) {
    eprintln!("{} {}", style("ERROR:").red().bold(), message);
}

pub fn display_success(message: &str) {
    println!("{} {}", style("✓").green(), message);
}

pub fn display_status(message: &str) {
    println!("{} {}", style("→").yellow(), message);
}

/// Print every finding with the offending commit(s) and a remediation hint.
pub fn display_report(report: &ValidationReport) {
    if report.is_empty() {
        display_success("All commits pass the tag and version checks");
        return;
    }

    println!(
        "\n{}",
        style(format!("{} problem(s) found:", report.len())).bold()
    );
    for finding in report.iter() {
        let first_line = finding.message.lines().next().unwrap_or("");
        println!();
        println!(
            "  {} {}",
            style(format!("[{}]", finding.kind)).red(),
            style(first_line).bold()
        );
        if !finding.commits.is_empty() {
            println!("    commit(s): {}", finding.commits.join(", "));
        }
        println!("    {}", finding.detail);
    }
    println!(
        "\n{} See the team commit guidelines for the tag vocabulary and version rules.",
        style("hint:").cyan()
    );
}
