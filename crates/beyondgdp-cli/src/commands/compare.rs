//! Compare command - several countries side by side for one theme and year.

use beyondgdp::analysis::{InvestmentSplit, QuadrantChart};
use beyondgdp::query::format_value;
use beyondgdp::{Dashboard, Indicator, InternationalSnapshot, Theme};
use colored::Colorize;

const BAR_WIDTH: f64 = 40.0;

pub fn run(
    dashboard: &Dashboard,
    theme: Theme,
    countries: &[String],
    year: Option<i32>,
    indicator: Option<&str>,
    json_output: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let known = dashboard.dataset().countries();
    if let Some(missing) = countries.iter().find(|c| !known.contains(*c)) {
        return Err(format!("Country not found in dataset: {}", missing).into());
    }

    // Plotted against GDP per capita: the requested series or the theme's first non-GDP one.
    let versus: Indicator = match indicator {
        Some(key) => theme
            .indicator(key)
            .ok_or_else(|| format!("Not a {} indicator: {}", theme, key))?,
        None => theme.indicators()[1],
    };

    let selected: Vec<&str> = countries.iter().map(String::as_str).collect();
    let Some(snapshot) = dashboard.snapshot(theme, &selected, year) else {
        println!("{}", "Aucune donnée trouvée.".yellow());
        return Ok(());
    };
    tracing::debug!(year = snapshot.year, countries = selected.len(), "built snapshot");

    let points = snapshot.against_gdp(versus.name);
    let investment = snapshot.investment_split();
    let quadrants = match theme {
        Theme::Inequality => snapshot.quadrants(versus.name),
        _ => None,
    };

    if json_output {
        let output = serde_json::json!({
            "snapshot": snapshot,
            "indicator": versus,
            "points": points,
            "investment": investment,
            "quadrants": quadrants,
        });
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    println!(
        "{} {} - {}",
        "Compare".cyan().bold(),
        theme.label().yellow(),
        snapshot.year.to_string().white().bold()
    );
    println!();
    print_snapshot(theme, &snapshot);

    if !investment.is_empty() {
        println!();
        println!("{}", "Investissement / reste du PIB par habitant:".yellow().bold());
        print_investment(&investment);
    }

    println!();
    match quadrants {
        Some(chart) => print_quadrants(&chart, versus),
        None => {
            println!("{} {}", "PIB par habitant vs".yellow().bold(), versus.code.yellow().bold());
            for p in &points {
                println!(
                    "  {:22} {:>16}  {:>12}",
                    p.country,
                    format_value(p.gdp_per_capita),
                    format_value(p.value)
                );
            }
        }
    }

    Ok(())
}

fn print_snapshot(theme: Theme, snapshot: &InternationalSnapshot) {
    let header: Vec<String> = theme
        .indicators()
        .iter()
        .map(|i| format!("{:>20}", i.code))
        .collect();
    println!("  {:22}{}", "", header.join(" ").dimmed());

    for row in &snapshot.rows {
        let cells: Vec<String> = row
            .values
            .iter()
            .map(|v| match v {
                Some(value) => format!("{:>20}", format_value(*value)),
                None => format!("{:>20}", "-"),
            })
            .collect();
        println!("  {:22}{}", row.country, cells.join(" "));
    }
}

fn print_investment(splits: &[InvestmentSplit]) {
    let max = splits.iter().map(|s| s.gdp_per_capita).fold(0.0, f64::max);
    for split in splits {
        let (invested, rest) = if max > 0.0 {
            (
                (split.investment / max * BAR_WIDTH).round().max(0.0) as usize,
                (split.remainder / max * BAR_WIDTH).round().max(0.0) as usize,
            )
        } else {
            (0, 0)
        };
        println!(
            "  {:22} {}{} {} / {}",
            split.country,
            "█".repeat(invested).green(),
            "░".repeat(rest),
            format_value(split.investment),
            format_value(split.remainder)
        );
    }
}

fn print_quadrants(chart: &QuadrantChart, versus: Indicator) {
    println!(
        "{} médianes: PIB {}, {} {}",
        "Quadrants".yellow().bold(),
        format_value(chart.gdp_median),
        versus.code,
        format_value(chart.value_median)
    );
    for point in &chart.points {
        println!(
            "  {:22} {:>16}  {:>8}  {}",
            point.country,
            format_value(point.gdp_per_capita),
            format_value(point.value),
            point.quadrant.label().dimmed()
        );
    }
}
