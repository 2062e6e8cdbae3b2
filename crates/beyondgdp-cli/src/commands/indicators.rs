//! Indicators command - list each theme's series and how much data backs them.

use beyondgdp::Dashboard;
use colored::Colorize;

pub fn run(dashboard: &Dashboard, json_output: bool) -> Result<(), Box<dyn std::error::Error>> {
    let coverage = dashboard.theme_coverage();

    if json_output {
        let status = serde_json::json!({
            "rows": dashboard.dataset().len(),
            "countries": dashboard.dataset().countries().len(),
            "year_range": dashboard.dataset().year_range(),
            "themes": coverage,
        });
        println!("{}", serde_json::to_string_pretty(&status)?);
        return Ok(());
    }

    let dataset = dashboard.dataset();
    print!(
        "{} rows, {} countries",
        dataset.len().to_string().white().bold(),
        dataset.countries().len().to_string().white().bold()
    );
    match dataset.year_range() {
        Some((first, last)) => println!(", {}–{}", first, last),
        None => println!(),
    }
    println!();

    for theme in &coverage {
        println!("{} ({})", theme.label.yellow().bold(), theme.theme);
        for entry in &theme.indicators {
            let rows = format!("{:>7}", entry.rows);
            let rows = if entry.rows == 0 { rows.red() } else { rows.green() };
            println!(
                "  {}  {}  {}",
                format!("{:22}", entry.indicator.code).dimmed(),
                rows,
                entry.indicator.name
            );
        }
        println!();
    }

    Ok(())
}
