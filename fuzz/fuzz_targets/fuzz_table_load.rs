#![no_main]

use geoview::schema::RequiredColumns;
use geoview::store::{LoadOptions, Table};
use geoview::validator::validate_table;
use geoview::viewer::{Viewer, ViewerConfig};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Loading arbitrary bytes may fail, but must never panic
    let Ok(table) = Table::from_bytes(data, &LoadOptions::default()) else {
        return;
    };

    let config = ViewerConfig {
        required: RequiredColumns::Coordinates,
        ..Default::default()
    };
    let _ = validate_table(&table, &config);

    let Ok(viewer) = Viewer::new(table, config) else {
        return;
    };

    // Render up to 100 records, including the page
    for id in 0..=viewer.record_count().min(100) + 1 {
        if let Ok(outcome) = viewer.render(id) {
            let _ = viewer.page(&outcome);
        }
    }
});
