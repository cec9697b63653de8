//! End-to-end scenarios for the relationship engine
//!
//! Catalogs are parsed from API-shaped JSON so the loader boundary is
//! exercised together with the engine.

use herograph_catalog::{parse_records, CatalogError, CharacterCatalog};
use herograph_domain::EntityType;
use herograph_relations::{
    EntityUrlResolver, MultiSetIntersector, RelationsError, RelationshipTableBuilder,
};

fn group(uris: &[&str]) -> String {
    let items: Vec<String> = uris
        .iter()
        .map(|uri| format!(r#"{{"resourceURI": "{uri}", "name": "{uri}"}}"#))
        .collect();
    format!(r#"{{"available": {}, "items": [{}]}}"#, uris.len(), items.join(", "))
}

fn record(name: &str, comics: &[&str], series: &[&str]) -> String {
    format!(
        r#"{{"name": "{name}", "comics": {}, "series": {}, "stories": {}, "events": {}}}"#,
        group(comics),
        group(series),
        group(&[]),
        group(&[]),
    )
}

fn xyz_catalog() -> CharacterCatalog {
    let json = format!(
        "[{}, {}, {}]",
        record("X", &["c1", "c2", "c3"], &["s1", "s2"]),
        record("Y", &["c2", "c3", "c4"], &["s2"]),
        record("Z", &["c5"], &["s1", "s2"]),
    );
    CharacterCatalog::new(parse_records(&json).unwrap()).unwrap()
}

#[test]
fn test_comics_table_scenario() {
    let catalog = xyz_catalog();
    let table = RelationshipTableBuilder::new(&catalog)
        .build(&["X", "Y", "Z"], EntityType::Comics)
        .unwrap();

    let rows: Vec<(&str, &str, usize)> = table
        .rows()
        .iter()
        .map(|row| (row.character_a.as_str(), row.character_b.as_str(), row.common_count))
        .collect();
    assert_eq!(rows, vec![("X", "Y", 2), ("X", "Z", 0), ("Y", "Z", 0)]);
    assert_eq!(table.column_names()[2], "CommonComicsAmount");
}

#[test]
fn test_input_order_drives_row_order() {
    let catalog = xyz_catalog();
    let table = RelationshipTableBuilder::new(&catalog)
        .build(&["Z", "X", "Y"], EntityType::Series)
        .unwrap();

    let pairs: Vec<(&str, &str)> = table
        .rows()
        .iter()
        .map(|row| (row.character_a.as_str(), row.character_b.as_str()))
        .collect();
    assert_eq!(pairs, vec![("Z", "X"), ("Z", "Y"), ("X", "Y")]);

    let counts: Vec<usize> = table.rows().iter().map(|row| row.common_count).collect();
    assert_eq!(counts, vec![2, 1, 1]);
}

#[test]
fn test_unknown_name_is_invalid_input() {
    let catalog = xyz_catalog();
    let err = RelationshipTableBuilder::new(&catalog)
        .build(&["X", "Nobody"], EntityType::Comics)
        .unwrap_err();

    assert!(err.is_invalid_input());
    assert!(matches!(
        err,
        RelationsError::Catalog(CatalogError::UnknownCharacters(ref missing)) if missing == &["Nobody"]
    ));
}

#[test]
fn test_unknown_entity_type_is_invalid_input() {
    let catalog = xyz_catalog();
    let err = RelationshipTableBuilder::new(&catalog)
        .build_named(&["X", "Y"], "powers")
        .unwrap_err();

    assert!(err.is_invalid_input());
    assert!(matches!(err, RelationsError::InvalidInput(_)));
}

#[test]
fn test_duplicate_names_rejected() {
    let catalog = xyz_catalog();
    let err = RelationshipTableBuilder::new(&catalog)
        .build(&["X", "Y", "X"], EntityType::Comics)
        .unwrap_err();

    assert!(matches!(err, RelationsError::DuplicateNames(ref names) if names == &["X"]));
}

#[test]
fn test_short_inputs_yield_empty_tables() {
    let catalog = xyz_catalog();
    let builder = RelationshipTableBuilder::new(&catalog);

    let none: [&str; 0] = [];
    assert!(builder.build(&none, EntityType::Comics).unwrap().is_empty());
    assert!(builder.build(&["X"], EntityType::Comics).unwrap().is_empty());
}

#[test]
fn test_build_all_covers_every_entity_type() {
    let catalog = xyz_catalog();
    let tables = RelationshipTableBuilder::new(&catalog)
        .build_all(&catalog.names())
        .unwrap();

    let types: Vec<EntityType> = tables.iter().map(|table| table.entity_type()).collect();
    assert_eq!(types, EntityType::ALL.to_vec());
    assert!(tables.iter().all(|table| table.len() == 3));
    assert_eq!(tables[2].edges().count(), 0);
}

#[test]
fn test_group_wide_common_urls() {
    let catalog = xyz_catalog();
    let intersector = MultiSetIntersector::new(&catalog);

    let shared = intersector
        .common_urls(["X", "Y", "Z"], EntityType::Series)
        .unwrap();
    assert_eq!(shared.into_iter().collect::<Vec<_>>(), vec!["s2"]);
}

#[test]
fn test_single_character_matches_resolver() {
    let catalog = xyz_catalog();
    let intersector = MultiSetIntersector::new(&catalog);

    let x = catalog.get("X").unwrap();
    assert_eq!(
        intersector.common_urls(["X"], EntityType::Comics).unwrap(),
        EntityUrlResolver.resolve(x, EntityType::Comics)
    );
}

#[test]
fn test_csv_export_of_built_table() {
    let catalog = xyz_catalog();
    let table = RelationshipTableBuilder::new(&catalog)
        .build(&["X", "Y"], EntityType::Comics)
        .unwrap();

    assert_eq!(
        table.to_csv_string().unwrap(),
        "Character1,Character2,CommonComicsAmount\nX,Y,2\n"
    );
}
