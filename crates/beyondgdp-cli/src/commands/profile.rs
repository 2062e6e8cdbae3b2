//! Profile command - one country's coverage and correlations for a theme.

use beyondgdp::query::format_value;
use beyondgdp::{Dashboard, Theme};
use colored::Colorize;

pub fn run(
    dashboard: &Dashboard,
    country: &str,
    theme: Theme,
    json_output: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    if !dashboard.dataset().countries().iter().any(|c| c == country) {
        return Err(format!("Country not found in dataset: {}", country).into());
    }

    let profile = dashboard.profile(country, theme);

    if json_output {
        println!("{}", serde_json::to_string_pretty(&profile)?);
        return Ok(());
    }

    println!(
        "{} {} - {}",
        "Profile".cyan().bold(),
        country.white().bold(),
        theme.label().yellow()
    );
    println!();

    if profile.is_empty() {
        println!("{}", "Aucune donnée trouvée.".yellow());
        return Ok(());
    }

    println!("{}", "Coverage:".yellow().bold());
    for entry in &profile.coverage {
        println!(
            "  {:18} {}–{} {:>4} points  latest {:>16}",
            code_of(theme, &entry.indicator),
            entry.first_year,
            entry.last_year,
            entry.points,
            format_value(entry.latest_value)
        );
    }
    println!();

    let matrix = &profile.correlations;
    println!("{}", "Correlations:".yellow().bold());
    for (i, name) in matrix.indicators.iter().enumerate() {
        let cells: Vec<String> = matrix.values[i][..=i]
            .iter()
            .map(|v| match v {
                Some(r) => format!("{:>6.2}", r),
                None => format!("{:>6}", "-"),
            })
            .collect();
        println!("  {:18} {}", code_of(theme, name), cells.join(" "));
    }

    Ok(())
}

fn code_of(theme: Theme, name: &str) -> &'static str {
    theme
        .indicators()
        .iter()
        .find(|i| i.name == name)
        .map(|i| i.code)
        .unwrap_or("?")
}
