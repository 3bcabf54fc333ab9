// SPDX-License-Identifier: GPL-3.0-only

use eox_client::{EoxRecord, Lookup};
use std::fmt;

pub const NOT_FOUND: &str = "No Records Found!";

/// Column where dotted-label values start.
const DOTTED_WIDTH: usize = 34;

#[derive(Copy, Clone)]
enum Label {
    /// `Name: value`
    Plain,
    /// `Name ........ value`, aligned to `DOTTED_WIDTH`
    Dotted,
}

struct ReportItem<'a> {
    name: &'static str,
    label: Label,
    value: &'a str,
}

impl fmt::Display for ReportItem<'_> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self.label {
            Label::Plain => write!(f, "{}: {}", self.name, self.value),
            Label::Dotted => {
                let mut label = format!("{} ", self.name);
                while label.len() < DOTTED_WIDTH {
                    label.push('.');
                }
                write!(f, "{} {}", label, self.value)
            }
        }
    }
}

/// Human-readable rendering of one lookup.
pub struct Report<'a> {
    items: Vec<ReportItem<'a>>,
}

impl<'a> Report<'a> {
    pub fn new(lookup: &'a Lookup) -> Self {
        let items = match lookup {
            Lookup::Found(record) => items(record),
            Lookup::NotFound(_) => Vec::new(),
        };
        Self { items }
    }
}

fn item<'a>(name: &'static str, label: Label, value: &'a str) -> ReportItem<'a> {
    ReportItem { name, label, value }
}

fn items(record: &EoxRecord) -> Vec<ReportItem<'_>> {
    use Label::*;

    vec![
        item("Search Value", Plain, &record.eox_input_value),
        item("Product ID", Plain, &record.eol_product_id),
        item("Product Description", Plain, &record.product_id_description),
        item("End of Sale Date", Dotted, &record.end_of_sale_date.value),
        item(
            "End of Software Maint Date",
            Dotted,
            &record.end_of_sw_maintenance_releases.value,
        ),
        item(
            "End of Security Vul Support Date",
            Dotted,
            &record.end_of_security_vul_support_date.value,
        ),
        item(
            "End of Routine Failure Date",
            Dotted,
            &record.end_of_routine_failure_analysis_date.value,
        ),
        item(
            "End of Service Contract Date",
            Dotted,
            &record.end_of_service_contract_renewal.value,
        ),
        item(
            "Last Date of Support Date",
            Dotted,
            &record.last_date_of_support.value,
        ),
        item(
            "End of Service Attach Date",
            Dotted,
            &record.end_of_svc_attach_date.value,
        ),
        item(
            "Migration PID",
            Plain,
            &record.eox_migration_details.migration_product_id,
        ),
    ]
}

impl fmt::Display for Report<'_> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.items.is_empty() {
            return writeln!(f, "{}", NOT_FOUND);
        }
        for item in &self.items {
            writeln!(f, "{}", item)?;
        }
        Ok(())
    }
}

pub fn render(lookup: &Lookup) -> String {
    Report::new(lookup).to_string()
}
