use super::*;
use crate::normalize::NumericCell;
use crate::policy::{decide, LatLng, MarkerColor, PolicyConfig, RecordFields};
use crate::schema::ColumnMap;

fn fields(method: &str) -> RecordFields {
    RecordFields {
        reference_lat: NumericCell::Value(-34.60),
        reference_lng: NumericCell::Value(-58.38),
        geocoded_lat: NumericCell::Value(-34.62),
        geocoded_lng: NumericCell::Value(-58.40),
        method: Some(method.to_string()),
        difference: NumericCell::Value(42.5),
        score: NumericCell::Value(0.91),
    }
}

fn view_for(f: &RecordFields) -> MapView {
    let decision = decide(f, &PolicyConfig::default()).unwrap();
    MapView::from_decision(&decision, f, &ColumnMap::default(), &MapOptions::default())
}

#[test]
fn test_two_markers_with_line_and_bounds() {
    let view = view_for(&fields("EXACT"));

    assert_eq!(view.zoom, DEFAULT_ZOOM);
    assert_eq!(view.markers.len(), 2);

    let reference = view.marker(2).unwrap();
    assert_eq!(reference.position, LatLng::new(-34.60, -58.38));
    assert_eq!(reference.color, MarkerColor::Highlight);
    assert_eq!(reference.fill, "green");
    assert_eq!(
        reference.popup,
        "PP: (-34.600000, -58.380000) | PP_method=EXACT | PP_diferencia=42.5"
    );

    let geocoded = view.marker(1).unwrap();
    assert_eq!(geocoded.fill, "green");
    assert_eq!(geocoded.popup, "Geocoded: (-34.620000, -58.400000) | score=0.91");

    let line = view.line.as_ref().unwrap();
    assert_eq!(line.points, vec![LatLng::new(-34.60, -58.38), LatLng::new(-34.62, -58.40)]);
    assert_eq!(line.weight, 3);

    let bounds = view.bounds.unwrap();
    assert_eq!(bounds.south_west, LatLng::new(-34.62, -58.40));
    assert_eq!(bounds.north_east, LatLng::new(-34.60, -58.38));
}

#[test]
fn test_single_marker_without_line() {
    let mut f = fields("interpolated");
    f.score = NumericCell::Blank;
    let view = view_for(&f);

    assert_eq!(view.markers.len(), 1);
    assert!(view.marker(2).is_none());
    assert!(view.line.is_none());
    assert!(view.bounds.is_none());

    let geocoded = view.marker(1).unwrap();
    assert_eq!(geocoded.color, MarkerColor::Neutral);
    assert_eq!(geocoded.fill, "gray");
    assert!(geocoded.popup.ends_with("score=nan"));
}

#[test]
fn test_palette_and_zoom_options() {
    let f = fields("EXACT");
    let decision = decide(&f, &PolicyConfig::default()).unwrap();
    let options = MapOptions {
        zoom: 12,
        palette: Palette {
            highlight: "#2563eb".to_string(),
            ..Default::default()
        },
        ..Default::default()
    };
    let view = MapView::from_decision(&decision, &f, &ColumnMap::default(), &options);

    assert_eq!(view.zoom, 12);
    assert_eq!(view.marker(2).unwrap().fill, "#2563eb");
}

#[test]
fn test_view_json_shape() {
    let view = view_for(&fields("EXACT"));
    let value: serde_json::Value = serde_json::from_str(&view.to_json().unwrap()).unwrap();

    assert_eq!(value["zoom"], 15);
    assert_eq!(value["markers"].as_array().unwrap().len(), 2);
    assert_eq!(value["markers"][0]["number"], 2);
    assert_eq!(value["markers"][1]["color"], "positive");
    assert!(value["line"].is_object());
}

#[test]
fn test_page_contains_map_and_record() {
    let view = view_for(&fields("EXACT"));
    let row = vec![
        ("direccion".to_string(), "Av. <Siempre> Viva & 742".to_string()),
        ("lat".to_string(), "-34.62".to_string()),
    ];
    let html = render_page(&view, "Record 1 of 10", &row, &MapOptions::default()).unwrap();

    assert!(html.contains("leaflet.js"));
    assert!(html.contains("height: 520px"));
    assert!(html.contains("Record 1 of 10"));
    assert!(html.contains("Av. &lt;Siempre&gt; Viva &amp; 742"));
    assert!(html.contains("\"bounds\":{"));
    assert!(!html.contains("{{"));
}

#[test]
fn test_page_payload_cannot_close_script() {
    let mut f = fields("EXACT");
    f.method = Some("</script>".to_string());
    let decision = decide(&fields("EXACT"), &PolicyConfig::default()).unwrap();
    let view = MapView::from_decision(&decision, &f, &ColumnMap::default(), &MapOptions::default());
    let html = render_page(&view, "", &[], &MapOptions::default()).unwrap();

    assert_eq!(html.matches("</script>").count(), 2);
    assert!(html.contains("<\\/script>"));
}

#[test]
fn test_placeholder_text_in_values_is_not_expanded() {
    let view = view_for(&fields("EXACT"));
    let row = vec![("note".to_string(), "{{PAYLOAD}}".to_string())];
    let html = render_page(&view, "{{TITLE}}", &row, &MapOptions::default()).unwrap();

    assert!(html.contains("<td>{{PAYLOAD}}</td>"));
    assert!(html.contains("<p>{{TITLE}}</p>"));
}

#[test]
fn test_popup_prints_whole_numbers_as_floats() {
    let mut f = fields("EXACT");
    f.difference = NumericCell::Value(50.0);
    f.score = NumericCell::Value(1.0);
    let view = view_for(&f);

    assert!(view.marker(2).unwrap().popup.ends_with("PP_diferencia=50.0"));
    assert!(view.marker(1).unwrap().popup.ends_with("score=1.0"));
}

#[test]
fn test_map_only_page() {
    let view = view_for(&fields("EXACT"));
    let options = MapOptions {
        height: 400,
        title: "Revision".to_string(),
        ..Default::default()
    };
    let html = view.to_html(&options).unwrap();

    assert!(html.contains("height: 400px"));
    assert!(html.contains("<p>Revision</p>"));
    assert!(!html.contains("<tr>"));
}
