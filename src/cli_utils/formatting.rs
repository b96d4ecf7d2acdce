use colored::Colorize;

use crate::aggregators::share_series::MarketShareChart;

/// Print a table with columns and rows
pub fn format_table(headers: Vec<&str>, rows: Vec<Vec<String>>) {
    let col_widths: Vec<usize> = headers
        .iter()
        .enumerate()
        .map(|(i, header)| {
            rows.iter()
                .filter_map(|row| row.get(i))
                .map(|cell| cell.chars().count())
                .fold(header.len(), usize::max)
        })
        .collect();

    let header_line = headers
        .iter()
        .enumerate()
        .map(|(i, h)| format!("{:width$}", h, width = col_widths[i]))
        .collect::<Vec<_>>()
        .join(" | ");

    println!("{}", header_line.bold());
    println!("{}", "-".repeat(header_line.len()));

    for row in rows {
        let row_line = row
            .iter()
            .enumerate()
            .map(|(i, cell)| format!("{:width$}", cell, width = col_widths.get(i).copied().unwrap_or(20)))
            .collect::<Vec<_>>()
            .join(" | ");
        println!("{}", row_line);
    }
}

/// Format data as JSON
pub fn format_json<T: serde::Serialize>(data: &T) -> String {
    match serde_json::to_string_pretty(data) {
        Ok(json) => json,
        Err(_) => "Unable to format as JSON".to_string(),
    }
}

/// Format a single record as key-value pairs
pub fn format_record(data: Vec<(&str, String)>) {
    let max_key_len = data.iter().map(|(k, _)| k.len()).max().unwrap_or(20);

    for (key, value) in data {
        let padded_key = format!("{:width$}", key, width = max_key_len);
        println!("  {}: {}", padded_key.bright_cyan(), value);
    }
}

pub fn print_header(text: &str) {
    println!();
    println!("{}", text.bold().bright_cyan());
    println!("{}", "=".repeat(text.chars().count()));
    println!();
}

pub fn print_section(text: &str) {
    println!();
    println!("{}", text.bold().bright_white());
    println!("{}", "-".repeat(text.chars().count()));
}

/// Share with one decimal and a percent sign
pub fn format_share(share: f64) -> String {
    format!("{:.1}%", share)
}

/// Header and rows of the chart table: one row per category, one column per month
pub fn chart_rows(chart: &MarketShareChart) -> (Vec<String>, Vec<Vec<String>>) {
    let mut headers = vec!["Category".to_string()];
    headers.extend(chart.months.iter().cloned());
    headers.push("Average".to_string());

    let rows = chart
        .series
        .iter()
        .map(|series| {
            let mut row = vec![series.category.clone()];
            row.extend(series.points.iter().map(|p| format_share(p.share)));
            row.push(format_share(series.average_share));
            row
        })
        .collect();

    (headers, rows)
}

/// Print the market share chart as a table
pub fn print_chart(chart: &MarketShareChart) {
    print_header(&chart.title);

    if chart.series.is_empty() {
        println!("{}", "No transactions match the selected filters".yellow());
        return;
    }

    let (headers, rows) = chart_rows(chart);
    format_table(headers.iter().map(String::as_str).collect(), rows);
    println!();
    println!("{}: {}", "Records".bright_cyan(), chart.record_count);
}
