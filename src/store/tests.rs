use super::*;
use std::io::Cursor;
use tempfile::tempdir;

const SAMPLE: &str = "direccion,PP_latitud,PP_longitud,lat,lng
Av. Corrientes 1234,\"-34,6037\",\"-58,3816\",-34.6040,-58.3820
Calle Falsa 123,,,-31.4201,-64.1888
San Martin 50,-32.89,-68.84,-32.8895,-68.8458";

fn load(text: &str) -> Table {
    Table::from_reader(Cursor::new(text), &LoadOptions::default()).unwrap()
}

#[test]
fn test_ids_follow_source_order() {
    let table = load(SAMPLE);

    assert_eq!(table.len(), 3);
    let ids: Vec<usize> = table.rows().map(|r| r.id().get()).collect();
    assert_eq!(ids, vec![1, 2, 3]);
    assert_eq!(table.lookup(1).unwrap().get("direccion"), Some("Av. Corrientes 1234"));
    assert_eq!(table.lookup(3).unwrap().get("direccion"), Some("San Martin 50"));
}

#[test]
fn test_lookup_past_end_is_not_found() {
    let table = load(SAMPLE);
    assert!(matches!(
        table.lookup(4),
        Err(StoreError::RecordNotFound { requested: 4, max: 3 })
    ));
}

#[test]
fn test_lookup_zero_is_out_of_range() {
    let table = load(SAMPLE);
    assert!(matches!(
        table.lookup(0),
        Err(StoreError::OutOfRange { requested: 0, max: 3 })
    ));
    assert!(RecordId::new(0).is_none());
}

#[test]
fn test_quoted_decimal_comma_kept_raw() {
    let table = load(SAMPLE);
    let row = table.lookup(1).unwrap();
    assert_eq!(row.get("PP_latitud"), Some("-34,6037"));
    assert_eq!(row.get("missing_column"), None);
}

#[test]
fn test_short_rows_are_padded() {
    let table = load("a,b,c\n1,2\n4,5,6,7\n");
    let first = table.lookup(1).unwrap();
    assert_eq!(first.get("c"), Some(""));

    let second = table.lookup(2).unwrap();
    assert_eq!(second.to_pairs().len(), 3);
    assert_eq!(second.get("c"), Some("6"));
}

#[test]
fn test_row_fields_in_header_order() {
    let table = load("x,y\n1,2\n");
    let pairs: Vec<_> = table.lookup(1).unwrap().fields().collect();
    assert_eq!(pairs, vec![("x", "1"), ("y", "2")]);
}

#[test]
fn test_empty_source_is_parse_error() {
    let result = Table::from_reader(Cursor::new(""), &LoadOptions::default());
    assert!(matches!(result, Err(StoreError::ParseError(_))));
}

#[test]
fn test_header_only_is_empty_table() {
    let table = load("lat,lng\n");
    assert!(table.is_empty());
    assert!(table.has_column("lat"));
}

#[test]
fn test_semicolon_delimiter() {
    let options = LoadOptions {
        delimiter: b';',
        ..Default::default()
    };
    let table = Table::from_bytes(b"lat;lng\n-34,6;-58,4\n", &options).unwrap();
    assert_eq!(table.lookup(1).unwrap().get("lng"), Some("-58,4"));
}

#[test]
fn test_from_path_sets_label() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("direcciones.csv");
    std::fs::write(&path, SAMPLE).unwrap();

    let table = Table::from_path(&path, &LoadOptions::default()).unwrap();
    assert_eq!(table.len(), 3);
    assert_eq!(table.label(), path.display().to_string());
}

#[test]
fn test_missing_path_is_not_found() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("nope.csv");
    let result = Table::from_path(&path, &LoadOptions::default());
    assert!(matches!(result, Err(StoreError::NotFound(p)) if p == path));
}

#[test]
fn test_source_prefers_supplied_file() {
    let dir = tempdir().unwrap();
    let supplied = dir.path().join("upload.csv");
    let default = dir.path().join("direcciones_X.csv");
    std::fs::write(&supplied, "lat,lng\n1,2\n").unwrap();
    std::fs::write(&default, "lat,lng\n3,4\n5,6\n").unwrap();

    let source = TableSource::new(Some(supplied.clone())).with_default_path(&default);
    let (resolved, table) = source.load(&LoadOptions::default()).unwrap();
    assert_eq!(resolved, ResolvedSource::Supplied(supplied));
    assert_eq!(table.len(), 1);
}

#[test]
fn test_source_falls_back_to_default() {
    let dir = tempdir().unwrap();
    let default = dir.path().join("direcciones_X.csv");
    std::fs::write(&default, "lat,lng\n3,4\n").unwrap();

    let source = TableSource::new(None).with_default_path(&default);
    assert_eq!(source.resolve().unwrap(), ResolvedSource::Default(default));
}

#[test]
fn test_source_unavailable() {
    let dir = tempdir().unwrap();
    let source = TableSource::new(None).with_default_path(dir.path().join("direcciones_X.csv"));
    assert!(matches!(source.resolve(), Err(StoreError::NotFound(_))));
}

#[test]
fn test_row_view_pairs() {
    let table = load("x,y\n1,2\n");
    let pairs = table.row_view(RecordId::FIRST).unwrap();
    assert_eq!(pairs, vec![("x".to_string(), "1".to_string()), ("y".to_string(), "2".to_string())]);
    assert!(table.row_view(RecordId::new(2).unwrap()).is_none());
}

#[test]
fn test_garbled_csv_is_csv_error() {
    let result = Table::from_bytes(b"lat,lng\n\xff\xfe,1\n", &LoadOptions::default());
    assert!(matches!(result, Err(StoreError::CsvError(_))));
}
