use super::*;
use crate::policy::{MarkerColor, ReferencePolicy};
use crate::store::LoadOptions;
use tempfile::tempdir;

const DIRECCIONES: &str = "\
id,direccion,PP_latitud,PP_longitud,lat,lng,PP_method,score,PP_diferencia
1,Av. Corrientes 1234,\"-34,6037\",\"-58,3816\",-34.6040,-58.3820,EXACT,0.92,35
2,Calle Falsa 123,-31.4201,-64.1888,,-64.1890,EXACT,0.80,10
3,San Martin 50,,,-32.8895,-68.8458,INTERPOLATED,0.30,
4,Belgrano 900,sin dato,-60.70,-32.9468,-60.6393,exact,0.75,20
";

fn viewer(config: ViewerConfig) -> Viewer {
    let table = Table::from_bytes(DIRECCIONES.as_bytes(), &LoadOptions::default()).unwrap();
    Viewer::new(table, config).unwrap()
}

#[test]
fn test_render_full_record() {
    let viewer = viewer(ViewerConfig::default());
    let outcome = viewer.render(1).unwrap();

    assert_eq!(outcome.id.get(), 1);
    assert!(outcome.warning.is_none());
    let decision = outcome.decision.as_ref().unwrap();
    assert!(decision.show_reference);
    assert_eq!(decision.geo_color, MarkerColor::Positive);

    let map = outcome.map.as_ref().unwrap();
    assert_eq!(map.markers.len(), 2);
    assert!(map.line.is_some());
    assert!(map.bounds.is_some());
}

#[test]
fn test_empty_geocoded_latitude_warns_without_map() {
    let viewer = viewer(ViewerConfig::default());
    let outcome = viewer.render(2).unwrap();

    assert!(outcome.map.is_none());
    assert!(outcome.decision.is_none());
    assert_eq!(
        outcome.warning,
        Some(CoordinateMissing {
            id: RecordId::new(2).unwrap(),
            point: Point::Geocoded,
        })
    );
    assert_eq!(outcome.row.len(), 9);
    assert_eq!(outcome.row[1], ("direccion".to_string(), "Calle Falsa 123".to_string()));
    assert!(viewer.page(&outcome).unwrap().is_none());

    assert!(matches!(
        outcome.into_map(),
        Err(ViewError::CoordinateMissing(CoordinateMissing {
            point: Point::Geocoded,
            ..
        }))
    ));
}

#[test]
fn test_blank_reference_degrades_to_geocoded_only() {
    let viewer = viewer(ViewerConfig::default());
    let map = viewer.render(3).unwrap().into_map().unwrap();

    assert_eq!(map.markers.len(), 1);
    assert_eq!(map.markers[0].number, 1);
    assert_eq!(map.markers[0].fill, "gray");
    assert_eq!(map.center.lat, -32.8895);
    assert_eq!(map.center.lng, -68.8458);
}

#[test]
fn test_reference_policy_changes_outcome() {
    let degrade = viewer(ViewerConfig::default());
    assert!(degrade.render(4).unwrap().map.is_some());

    let strict = viewer(ViewerConfig {
        policy: PolicyConfig {
            reference: ReferencePolicy::RejectInvalid,
            ..Default::default()
        },
        ..Default::default()
    });
    let outcome = strict.render(4).unwrap();
    assert!(outcome.map.is_none());
    assert_eq!(outcome.warning.unwrap().point, Point::Reference);
    // Blank reference pair is still fine under RejectInvalid
    assert!(strict.render(3).unwrap().map.is_some());

    let require = viewer(ViewerConfig {
        policy: PolicyConfig {
            reference: ReferencePolicy::RequireBoth,
            ..Default::default()
        },
        ..Default::default()
    });
    assert!(require.render(3).unwrap().map.is_none());
}

#[test]
fn test_out_of_range_selection() {
    let viewer = viewer(ViewerConfig::default());
    assert_eq!(viewer.record_count(), 4);
    assert!(matches!(
        viewer.render(0),
        Err(ViewError::Store(StoreError::OutOfRange { .. }))
    ));
    assert!(matches!(
        viewer.render(5),
        Err(ViewError::Store(StoreError::RecordNotFound { .. }))
    ));
}

#[test]
fn test_schema_invalid_names_columns() {
    let table = Table::from_bytes(b"PP_latitud,PP_longitud,lng,PP_method,PP_diferencia\n", &LoadOptions::default())
        .unwrap();
    match Viewer::new(table, ViewerConfig::default()) {
        Err(ViewError::SchemaInvalid { missing }) => assert_eq!(missing, vec!["lat", "score"]),
        other => panic!("expected SchemaInvalid, got {:?}", other.map(|_| ())),
    }
}

#[test]
fn test_coordinates_only_schema() {
    let csv = "PP_latitud,PP_longitud,lat,lng\n-34.60,-58.38,-34.61,-58.39\n";
    let table = Table::from_bytes(csv.as_bytes(), &LoadOptions::default()).unwrap();
    let config = ViewerConfig {
        required: RequiredColumns::Coordinates,
        ..Default::default()
    };
    let viewer = Viewer::new(table, config).unwrap();
    let map = viewer.render(1).unwrap().into_map().unwrap();

    // No method column, so the reference is never shown
    assert_eq!(map.markers.len(), 1);
}

#[test]
fn test_open_reports_source_unavailable() {
    let dir = tempdir().unwrap();
    let source = TableSource::new(None).with_default_path(dir.path().join("direcciones_X.csv"));
    let result = Viewer::open(&source, &LoadOptions::default(), ViewerConfig::default());
    assert!(matches!(result, Err(ViewError::SourceUnavailable(_))));
}

#[test]
fn test_open_reports_missing_supplied_file() {
    let dir = tempdir().unwrap();
    let default = dir.path().join("direcciones_X.csv");
    std::fs::write(&default, DIRECCIONES).unwrap();
    let upload = dir.path().join("upload.csv");

    let source = TableSource::new(Some(upload.clone())).with_default_path(&default);
    let err = Viewer::open(&source, &LoadOptions::default(), ViewerConfig::default()).unwrap_err();

    assert!(matches!(&err, ViewError::SuppliedMissing(p) if *p == upload));
    let message = err.to_string();
    assert!(message.contains("upload.csv"));
    assert!(!message.contains("no file supplied"));
}

#[test]
fn test_open_and_render_page() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("direcciones_X.csv");
    std::fs::write(&path, DIRECCIONES).unwrap();

    let source = TableSource::new(None).with_default_path(&path);
    let viewer = Viewer::open(&source, &LoadOptions::default(), ViewerConfig::default()).unwrap();
    let outcome = viewer.render(1).unwrap();
    let html = viewer.page(&outcome).unwrap().unwrap();

    assert!(html.contains("Record 1 of 4"));
    assert!(html.contains("Av. Corrientes 1234"));
}
