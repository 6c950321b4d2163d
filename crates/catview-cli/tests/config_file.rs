use catview_testing::{TestWorld, fixtures};

#[test]
fn test_locations_and_labels_from_config_file() {
    // Given: a catalog at a custom path, referenced only from the config
    let world = TestWorld::new();
    let catalog = world.temp_dir().join("custom.csv");
    std::fs::write(&catalog, fixtures::sample_catalog()).unwrap();
    let world = world.with_config(&format!(
        "catalog = '{}'\n\n[labels]\nno_results = 'Nothing here'\n",
        catalog.display()
    ));

    // When
    let result = world
        .run_with_config_only(&["list", "--query", "zzz"])
        .unwrap();

    // Then
    assert!(result.success(), "stderr: {}", result.stderr());
    assert!(result.stdout().contains("Nothing here"));
}

#[test]
fn test_availability_marker_from_config_file() {
    let world = TestWorld::new()
        .with_catalog(&fixtures::catalog_with_rows(&["1,A,a,1,C,1,,,,,TRUE,"]))
        .with_config("[markers]\navailable = 'TRUE'\n");

    let json = world
        .run(&["list", "--format", "json"])
        .unwrap()
        .json()
        .unwrap();

    assert_eq!(json["content"]["body"]["rows"][0]["available"], "available");
}

#[test]
fn test_invalid_config_file_fails() {
    let world = TestWorld::new()
        .with_sample_catalog()
        .with_config("catalog = [");

    let result = world.run(&["list"]).unwrap();

    assert!(!result.success());
    assert!(result.stderr().contains("Configuration error"));
}

#[test]
fn test_metadata_location_from_config_file() {
    // Given: both resource locations written into the config file
    let world = TestWorld::new().with_sample_catalog().with_sample_metadata();
    let config = format!(
        "catalog = '{}'\nmetadata = '{}'\n",
        world.catalog_location(),
        world.metadata_location()
    );
    let world = world.with_config(&config);

    // When
    let json = world
        .run_with_config_only(&["meta", "--format", "json"])
        .unwrap()
        .json()
        .unwrap();

    // Then: the configured file is the one that was read
    assert_eq!(json["content"]["source"], world.metadata_location());
    assert_eq!(json["badge"]["level"], "success");
}
