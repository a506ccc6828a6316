use crate::normalize::NumericCell;
use crate::policy::{decide, MarkerColor, RecordFields};
use crate::store::{RecordId, Table};
use crate::viewer::ViewerConfig;

use super::{ValidationCheck, ValidationReport};

/// How many offending record ids a message lists before eliding
const MAX_LISTED: usize = 5;

#[derive(Default)]
struct Offenders {
    count: usize,
    first: Vec<RecordId>,
}

impl Offenders {
    fn push(&mut self, id: RecordId) {
        self.count += 1;
        if self.first.len() < MAX_LISTED {
            self.first.push(id);
        }
    }

    fn describe(&self, total: usize, what: &str) -> String {
        let ids: Vec<String> = self.first.iter().map(RecordId::to_string).collect();
        let more = if self.count > self.first.len() { ", ..." } else { "" };
        format!(
            "{} of {} records {} (records {}{})",
            self.count,
            total,
            what,
            ids.join(", "),
            more
        )
    }

    fn report(&self, report: &mut ValidationReport, name: &str, total: usize, what: &str) {
        if self.count == 0 {
            report.add_check(ValidationCheck::ok(name));
        } else {
            report.add_check(ValidationCheck::warning(name, self.describe(total, what)));
        }
    }
}

fn is_garbled(cell: &NumericCell) -> bool {
    matches!(cell, NumericCell::Unparseable(_))
}

fn out_of_range(fields: &RecordFields) -> bool {
    let bad = |lat: Option<f64>, lng: Option<f64>| {
        lat.is_some_and(|v| !(-90.0..=90.0).contains(&v))
            || lng.is_some_and(|v| !(-180.0..=180.0).contains(&v))
    };
    bad(fields.geocoded_lat.value(), fields.geocoded_lng.value())
        || bad(fields.reference_lat.value(), fields.reference_lng.value())
}

/// Steps 3 and 4: per-record coordinate checks and marker summary
pub(crate) fn check_records(table: &Table, config: &ViewerConfig, report: &mut ValidationReport) {
    let total = table.len();
    let mut no_geocoded = Offenders::default();
    let mut malformed_reference = Offenders::default();
    let mut garbled_numbers = Offenders::default();
    let mut outside = Offenders::default();
    let mut rejected = Offenders::default();

    let mut blank_reference = 0usize;
    let mut shown_reference = 0usize;
    let mut positive = 0usize;

    for row in table.rows() {
        let id = row.id();
        let fields = RecordFields::from_row(&row, &config.columns);

        if fields.geocoded().is_none() {
            no_geocoded.push(id);
        }
        if fields.reference_is_malformed() {
            malformed_reference.push(id);
        } else if fields.reference().is_none() {
            blank_reference += 1;
        }
        if is_garbled(&fields.score) || is_garbled(&fields.difference) {
            garbled_numbers.push(id);
        }
        if out_of_range(&fields) {
            outside.push(id);
        }

        match decide(&fields, &config.policy) {
            Ok(decision) => {
                if decision.show_reference {
                    shown_reference += 1;
                }
                if decision.geo_color == MarkerColor::Positive {
                    positive += 1;
                }
            }
            Err(_) => rejected.push(id),
        }
    }

    no_geocoded.report(
        report,
        "Geocoded coordinates usable",
        total,
        "have no usable geocoded coordinates and cannot be mapped",
    );
    malformed_reference.report(
        report,
        "Reference coordinates well-formed",
        total,
        "have a garbled or half-filled reference pair",
    );
    garbled_numbers.report(
        report,
        "Score and difference numeric",
        total,
        "have a non-numeric score or difference",
    );
    outside.report(
        report,
        "Coordinates within range",
        total,
        "have a latitude outside [-90, 90] or longitude outside [-180, 180]",
    );

    let mapped = total - rejected.count;
    let summary = format!(
        "Markers: {} mappable, {} with reference shown, {} positive score, {} without reference",
        mapped, shown_reference, positive, blank_reference
    );
    if rejected.count == 0 {
        report.add_check(ValidationCheck::ok(summary));
    } else {
        report.add_check(ValidationCheck::warning(
            summary,
            rejected.describe(total, "are rejected by the marker policy"),
        ));
    }
}
