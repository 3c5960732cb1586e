use gqltoast_lib::{Report, ToastId};
use serde::Serialize;
use tabled::{Table, Tabled};

#[derive(Clone, Debug)]
pub enum OutputFormat {
    Text,
    Table,
    Json,
}

#[derive(Tabled, Serialize)]
struct ToastRow {
    #[tabled(rename = "Id")]
    #[serde(rename = "Id")]
    id: u64,
    #[tabled(rename = "Category")]
    #[serde(rename = "Category")]
    category: String,
    #[tabled(rename = "Message")]
    #[serde(rename = "Message")]
    message: String,
}

#[derive(Tabled)]
struct FieldRow {
    #[tabled(rename = "Field")]
    field: String,
    #[tabled(rename = "Value")]
    value: String,
}

// -- Row builders --

fn build_toast_rows(reports: &[Report<ToastId>]) -> Vec<ToastRow> {
    reports
        .iter()
        .map(|r| ToastRow {
            id: r.handle.0,
            category: r.classification.category.to_string(),
            message: r.classification.text.clone(),
        })
        .collect()
}

fn build_field_rows(fields: &[(String, String)]) -> Vec<FieldRow> {
    fields
        .iter()
        .map(|(field, value)| FieldRow {
            field: field.clone(),
            value: value.clone(),
        })
        .collect()
}

// -- Printers --

pub fn print_toasts_text(reports: &[Report<ToastId>]) {
    for report in reports {
        println!("{}", report.classification.text);
    }
}

pub fn print_toasts_table(reports: &[Report<ToastId>]) {
    println!("{}", Table::new(build_toast_rows(reports)));
}

pub fn print_fields_table(fields: &[(String, String)]) {
    println!("{}", Table::new(build_field_rows(fields)));
}

pub fn print_json<T: serde::Serialize>(data: &T) {
    match serde_json::to_string_pretty(data) {
        Ok(json) => println!("{}", json),
        Err(e) => eprintln!("Failed to serialize to JSON: {}", e),
    }
}

#[cfg(test)]
#[path = "output_tests.rs"]
mod tests;
