//! Plain-text presentation of a [`Directory`]

use advocates_common::Advocate;

use crate::directory::{Directory, LoadState};

const HEADERS: [&str; 7] = [
    "First Name",
    "Last Name",
    "City",
    "Degree",
    "Specialties",
    "Years of Experience",
    "Phone Number",
];

pub const LOADING_TEXT: &str = "Loading…";
pub const NO_RECORDS_TEXT: &str = "No advocates found.";
pub const NO_MATCHES_TEXT: &str = "No advocates match the current filters.";

/// Render whatever the directory should show right now.
///
/// Loading and failure states replace the table entirely.
pub fn render(directory: &Directory) -> String {
    match directory.state() {
        LoadState::Loading => LOADING_TEXT.to_string(),
        LoadState::Failed(message) => message.clone(),
        LoadState::Ready if directory.advocates().is_empty() => NO_RECORDS_TEXT.to_string(),
        LoadState::Ready if directory.filtered().is_empty() => NO_MATCHES_TEXT.to_string(),
        LoadState::Ready => render_table(directory.filtered()),
    }
}

fn row(advocate: &Advocate) -> [String; 7] {
    [
        advocate.first_name.clone(),
        advocate.last_name.clone(),
        advocate.city.clone(),
        advocate.degree.clone(),
        advocate.specialties.join(", "),
        advocate.years_of_experience.to_string(),
        advocate.phone_number.clone(),
    ]
}

/// Column-aligned table with a header row
pub fn render_table(advocates: &[Advocate]) -> String {
    let rows: Vec<[String; 7]> = advocates.iter().map(row).collect();

    let mut widths = HEADERS.map(|h| h.chars().count());
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row.iter()) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let mut out = String::new();
    push_line(&mut out, HEADERS.iter().copied(), &widths);
    let rule: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
    push_line(&mut out, rule.iter().map(String::as_str), &widths);
    for row in &rows {
        push_line(&mut out, row.iter().map(String::as_str), &widths);
    }
    out
}

fn push_line<'a>(out: &mut String, cells: impl Iterator<Item = &'a str>, widths: &[usize]) {
    let padded: Vec<String> = cells
        .zip(widths)
        .map(|(cell, width)| format!("{:<width$}", cell, width = *width))
        .collect();
    out.push_str(padded.join("  ").trim_end());
    out.push('\n');
}

/// Specialty options, one per line, selected ones marked `[x]`
pub fn render_specialty_options(directory: &Directory) -> String {
    let selected = &directory.criteria().specialties;
    directory
        .specialty_options()
        .iter()
        .map(|option| {
            let mark = if selected.contains(option) { "[x]" } else { "[ ]" };
            format!("{} {}\n", mark, option)
        })
        .collect()
}
