use catview_testing::{TestWorld, assertions, fixtures};

#[test]
fn test_list_all_products_plain() {
    // Given: the sample catalog (one row lacks a name)
    let world = TestWorld::new().with_sample_catalog().with_sample_metadata();

    // When
    let result = world.run(&["list"]).expect("Failed to run list");

    // Then: four valid products, formatted prices, availability glyphs
    assert!(result.success(), "stderr: {}", result.stderr());
    let out = result.stdout();
    assert!(out.contains("Producto"));
    assert!(out.contains("Leche entera"));
    assert!(out.contains("0.97 €"));
    assert!(out.contains("0.97 l"));
    assert!(out.contains("✅"));
    assert!(out.contains("❌"));
    assert!(out.contains("N/A"));
    assert!(out.contains("Showing 4 of 4 products"));
}

#[test]
fn test_list_query_matches_name_or_category() {
    let world = TestWorld::new().with_sample_catalog();

    let result = world
        .run(&["list", "--query", "PAN", "--format", "json"])
        .expect("Failed to run list");

    assert!(result.success(), "stderr: {}", result.stderr());
    let json = result.json().expect("Invalid JSON");
    assertions::assert_row_count(&json, 1).unwrap();
    assert_eq!(assertions::row_names(&json).unwrap(), vec!["Pan de molde"]);
    assert_eq!(json["content"]["total"], 4);
    assert_eq!(json["content"]["filter"]["query"], "PAN");
}

#[test]
fn test_list_category_and_query_combine() {
    let world = TestWorld::new().with_sample_catalog();

    let json = world
        .run(&["list", "--category", "Lácteos", "--format", "json"])
        .unwrap()
        .json()
        .unwrap();
    assert_eq!(
        assertions::row_names(&json).unwrap(),
        vec!["Leche entera", "Yogur natural"]
    );

    let json = world
        .run(&[
            "list",
            "--category",
            "Lácteos",
            "--query",
            "yogur",
            "--format",
            "json",
        ])
        .unwrap()
        .json()
        .unwrap();
    assert_eq!(assertions::row_names(&json).unwrap(), vec!["Yogur natural"]);
}

#[test]
fn test_list_row_links_only_when_url_present() {
    let world = TestWorld::new().with_sample_catalog();

    let json = world
        .run(&["list", "--category", "Lácteos", "--format", "json"])
        .unwrap()
        .json()
        .unwrap();

    let rows = &json["content"]["body"]["rows"];
    assert_eq!(rows[0]["link"]["label"], "Ver producto");
    assert_eq!(
        rows[0]["link"]["href"],
        "https://tienda.example/product/4241/leche-entera"
    );
    assert!(rows[1].get("link").is_none());
}

#[test]
fn test_list_no_match_shows_placeholder() {
    let world = TestWorld::new().with_sample_catalog();

    let result = world
        .run(&["list", "--query", "zzz", "--format", "json"])
        .unwrap();
    assert!(result.success());

    let json = result.json().unwrap();
    assertions::assert_row_count(&json, 0).unwrap();
    assert_eq!(
        json["content"]["body"]["message"],
        "No se encontraron productos"
    );
    assert_eq!(json["content"]["body"]["colspan"], 5);
    assert_eq!(json["suggestions"][0]["command"], "catview categories");
}

#[test]
fn test_list_unknown_category_fails() {
    let world = TestWorld::new().with_sample_catalog();

    let result = world.run(&["list", "--category", "Congelados"]).unwrap();

    assert!(!result.success());
    assert!(result.stderr().contains("Unknown category 'Congelados'"));
}

#[test]
fn test_list_missing_catalog_fails() {
    // Given: no catalog file written
    let world = TestWorld::new().with_sample_metadata();

    let result = world.run(&["list"]).unwrap();

    assert!(!result.success());
    assert!(result.stderr().contains("Error: Error al cargar"));
    assert!(result.stderr().contains("catalogo_completo_actual.csv"));
}

#[test]
fn test_list_malformed_catalog_fails() {
    let world = TestWorld::new().with_catalog(&fixtures::catalog_with_rows(&["1,Leche"]));

    let result = world.run(&["list"]).unwrap();

    assert!(!result.success());
    assert!(result.stderr().contains("found record with 2 fields"));
}

#[test]
fn test_list_unterminated_quote_fails() {
    // Given: a quote on the first row that swallows the rows after it
    let world = TestWorld::new().with_catalog(&fixtures::catalog_with_rows(&[
        "1,Leche,leche,72,\"Lácteos,1,1,l,4,Brick,true,",
        "2,Pan,pan,59,Panadería,1,1,kg,4,Bolsa,true,",
    ]));

    // When
    let result = world.run(&["list"]).unwrap();

    // Then
    assert!(!result.success());
    assert!(
        result
            .stderr()
            .contains("quoted field starting on line 2 is never closed"),
        "stderr: {}",
        result.stderr()
    );
}

#[test]
fn test_list_availability_is_literal() {
    let world = TestWorld::new().with_catalog(&fixtures::catalog_with_rows(&[
        "1,A,a,1,C,1,,,,,true,",
        "2,B,b,1,C,1,,,,,TRUE,",
        "3,D,d,1,C,1,,,,,True,",
    ]));

    let json = world
        .run(&["list", "--format", "json"])
        .unwrap()
        .json()
        .unwrap();

    let rows = json["content"]["body"]["rows"].as_array().unwrap();
    let available: Vec<&str> = rows
        .iter()
        .map(|r| r["available"].as_str().unwrap())
        .collect();
    assert_eq!(available, vec!["available", "unavailable", "unavailable"]);
}
