//! Ask command - resolve free-text questions against the dataset.

use std::io::BufRead;

use beyondgdp::query::format_value;
use beyondgdp::{ChartSpec, Dashboard, Observation, QueryResult};
use colored::Colorize;

const BAR_WIDTH: f64 = 40.0;

pub fn run(
    dashboard: &Dashboard,
    question: Vec<String>,
    json_output: bool,
    verbose: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    if verbose {
        if let Some(source) = dashboard.source() {
            eprintln!(
                "{} {} ({} rows, {} dropped)",
                "Loaded".cyan().bold(),
                source.file.white(),
                dashboard.report().rows_kept(),
                dashboard.report().rows_dropped
            );
        }
    }

    if !question.is_empty() {
        let result = dashboard.ask(&question.join(" "));
        if json_output {
            println!("{}", serde_json::to_string_pretty(&result)?);
        } else {
            render(&result);
        }
        return Ok(());
    }

    // One question per line; JSON mode emits one object per line.
    let stdin = std::io::stdin();
    for line in stdin.lock().lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        tracing::debug!(question = %line, "reading question from stdin");

        let result = dashboard.ask(&line);
        if json_output {
            println!("{}", serde_json::to_string(&result)?);
        } else {
            println!("{} {}", ">".cyan().bold(), line.white());
            render(&result);
            println!();
        }
    }

    Ok(())
}

fn render(result: &QueryResult) {
    match result {
        QueryResult::ClarificationNeeded(_) => {
            println!("{}", result.headline().yellow());
        }
        QueryResult::SingleFact(_) | QueryResult::Table(_) => {
            println!("{}", result.headline().green().bold());
            println!();
            print_rows(result.rows());
        }
        QueryResult::ComparisonSeries(series) => {
            println!("{}", result.headline().green().bold());
            println!();
            print_rows(&series.table);
            println!();
            print_chart(&series.chart);
        }
    }
}

fn print_rows(rows: &[Observation]) {
    let header = format!("  {:24} {:>6} {:>18}  {}", "Country", "Year", "Value", "Indicator");
    println!("{}", header.bold());
    for row in rows {
        println!(
            "  {:24} {:>6} {:>18}  {}",
            row.country,
            row.year,
            format_value(row.value),
            row.indicator.dimmed()
        );
    }
}

fn print_chart(chart: &ChartSpec) {
    if !chart.is_plottable() {
        println!("{}", "Pas assez de points pour afficher le graphique.".yellow());
        return;
    }

    println!("{}", chart.title.cyan().bold());
    let label_width = chart
        .points
        .iter()
        .map(|p| p.country.chars().count())
        .max()
        .unwrap_or(0);

    for point in &chart.points {
        let filled = (point.size / chart.size_max * BAR_WIDTH).round() as usize;
        println!(
            "  {:width$} {} {}",
            point.country,
            "█".repeat(filled).cyan(),
            format_value(point.value),
            width = label_width
        );
    }
}
