//! Formatted terminal output.
//!
//! We keep formatting code in one place so:
//! - the calculation code stays clean and testable
//! - output changes are localized

use crate::app::pipeline::{ConfigurationSummary, MatrixEntry};
use crate::domain::{Calculation, Component, GearTable};
use crate::teeth::{format_teeth, parse};

/// Format a full calculation: inputs, overall range, then one table per front.
pub fn format_calculation(calc: &Calculation) -> String {
    let mut out = String::new();

    out.push_str("=== gears - Gear Ratio Calculation ===\n");
    out.push_str(&format!("Front: {}\n", format_teeth(&calc.front_teeth)));
    out.push_str(&format!("Rear: {}\n", format_teeth(&calc.rear_teeth)));
    match &calc.window {
        Some(w) => out.push_str(&format!(
            "Window: {:.3} - {:.3}\n",
            w.min_ratio, w.max_ratio
        )),
        None => out.push_str("Window: off\n"),
    }
    out.push_str(&format!("Total range: {}%\n", calc.total_range));

    for table in &calc.tables {
        out.push('\n');
        out.push_str(&format_gear_table(table));
    }

    out
}

/// Format the gears of a single front.
pub fn format_gear_table(table: &GearTable) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "Front {}T | range {}%\n",
        table.front_tooth, table.total_range
    ));

    out.push_str(format!("{:>4} {:>5} {:>8} {:>8} {:<8}", "gear", "rear", "ratio", "change", "status").trim_end());
    out.push('\n');
    out.push_str(format!("{:-<4} {:-<5} {:-<8} {:-<8} {:-<8}", "", "", "", "", "").trim_end());
    out.push('\n');

    for gear in &table.gears {
        let change = match gear.change_pct {
            Some(v) => format!("{v:+.1}%"),
            None => "-".to_string(),
        };
        out.push_str(
            format!(
                "{:>4} {:>5} {:>8.3} {:>8} {:<8}",
                gear.gear_num,
                format!("{}T", gear.rear_tooth),
                gear.ratio,
                change,
                gear.display_status().label(),
            )
            .trim_end(),
        );
        out.push('\n');
    }

    out
}

/// Format the component listing (id, type, label, teeth).
pub fn format_components<'a>(components: impl IntoIterator<Item = &'a Component>) -> String {
    let mut out = String::new();
    out.push_str(format!("{:<16} {:<10} {:<24} {}", "id", "type", "name", "teeth").trim_end());
    out.push('\n');
    out.push_str(format!("{:-<16} {:-<10} {:-<24} {:-<5}", "", "", "", "").trim_end());
    out.push('\n');

    for component in components {
        let teeth = match parse(&component.teeth) {
            Ok(teeth) => format_teeth(&teeth),
            Err(_) => "(invalid)".to_string(),
        };
        out.push_str(
            format!(
                "{:<16} {:<10} {:<24} {}",
                truncate(&component.id, 16),
                component.kind.display_name(),
                truncate(&component.option_label(), 24),
                teeth,
            )
            .trim_end(),
        );
        out.push('\n');
    }

    out
}

/// Format the saved-configuration listing.
pub fn format_summary(rows: &[ConfigurationSummary]) -> String {
    if rows.is_empty() {
        return "No saved configurations.\n".to_string();
    }

    let mut out = String::new();
    out.push_str(
        format!(
            "{:<20} {:<16} {:<16} {:>6} {:<16} {}",
            "name", "front", "rear", "range", "created", "comments"
        )
        .trim_end(),
    );
    out.push('\n');
    out.push_str(format!("{:-<20} {:-<16} {:-<16} {:-<6} {:-<16} {:-<8}", "", "", "", "", "", "").trim_end());
    out.push('\n');

    for row in rows {
        out.push_str(
            format!(
                "{:<20} {:<16} {:<16} {:>6} {:<16} {}",
                truncate(&row.name, 20),
                truncate(&row.front_name, 16),
                truncate(&row.rear_name, 16),
                format!("{}%", row.total_range),
                row.created_at.as_deref().unwrap_or("-"),
                row.comments.as_deref().unwrap_or(""),
            )
            .trim_end(),
        );
        out.push('\n');
    }

    out
}

/// Format the chainring × cassette comparison.
pub fn format_matrix(entries: &[MatrixEntry]) -> String {
    let mut out = String::new();
    out.push_str(
        format!(
            "{:<16} {:<16} {:>8} {:>8} {:>6}",
            "front", "rear", "easiest", "hardest", "range"
        )
        .trim_end(),
    );
    out.push('\n');
    out.push_str(format!("{:-<16} {:-<16} {:-<8} {:-<8} {:-<6}", "", "", "", "", "").trim_end());
    out.push('\n');

    for entry in entries {
        out.push_str(
            format!(
                "{:<16} {:<16} {:>8.3} {:>8.3} {:>6}",
                truncate(&entry.front_name, 16),
                truncate(&entry.rear_name, 16),
                entry.easiest_ratio,
                entry.hardest_ratio,
                format!("{}%", entry.total_range),
            )
            .trim_end(),
        );
        out.push('\n');
    }

    out
}

fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        return s.to_string();
    }
    let mut out = String::new();
    for (i, ch) in s.chars().enumerate() {
        if i + 1 >= max {
            break;
        }
        out.push(ch);
    }
    out.push('.');
    out
}
