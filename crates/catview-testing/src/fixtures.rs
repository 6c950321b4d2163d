//! Sample catalog and metadata bodies in the producer's format.
//!
//! The catalog carries a UTF-8 BOM and the full twelve-column header the
//! build step writes.

pub const CATALOG_HEADER: &str = "id,nombre,slug,categoria_id,categoria,precio_total,precio_por_unidad,unidad_medida,iva,empaque,disponible,url";

/// Four valid products in three categories plus one row without a name.
pub fn sample_catalog() -> String {
    let rows = [
        "4241,Leche entera,leche-entera,72,Lácteos,0.97,0.97,l,4,Brick,true,https://tienda.example/product/4241/leche-entera",
        "4242,Yogur natural,yogur-natural,72,Lácteos,1.2,0.3,ud,4,Pack,true,",
        "10381,Pan de molde,pan-de-molde,59,Panadería,1.35,2.7,kg,4,Bolsa,false,https://tienda.example/product/10381/pan-de-molde",
        "51120,Agua mineral,agua-mineral,156,Agua y refrescos,,,,,,,",
        "60000,,sin-nombre,59,Panadería,2,,,,,true,",
    ];
    catalog_with_rows(&rows)
}

/// BOM + header + the given rows, newline-terminated.
pub fn catalog_with_rows(rows: &[&str]) -> String {
    let mut out = String::from("\u{feff}");
    out.push_str(CATALOG_HEADER);
    out.push('\n');
    for row in rows {
        out.push_str(row);
        out.push('\n');
    }
    out
}

pub fn sample_metadata() -> String {
    "Última actualización: 2025-03-14 06:05:09\nTotal de productos: 4\nCategorías: 3\n".to_string()
}
