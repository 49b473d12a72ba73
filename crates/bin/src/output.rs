//! Output formatting helpers for product listings.

use std::io::{self, Write};

use prodcat::Product;

/// Write a table with aligned columns.
///
/// `headers` and each row in `rows` must have the same length.
pub fn write_table<W: Write>(out: &mut W, headers: &[&str], rows: &[Vec<String>]) -> io::Result<()> {
    if rows.is_empty() {
        return Ok(());
    }

    // Column widths count characters, not bytes, so prices like "₹9" align.
    let col_count = headers.len();
    let mut widths: Vec<usize> = headers.iter().map(|h| h.chars().count()).collect();
    for row in rows {
        for (i, cell) in row.iter().enumerate().take(col_count) {
            widths[i] = widths[i].max(cell.chars().count());
        }
    }

    writeln!(out, "{}", render_line(&widths, headers.iter().copied()))?;
    for row in rows {
        let cells = row.iter().take(col_count).map(String::as_str);
        writeln!(out, "{}", render_line(&widths, cells))?;
    }
    Ok(())
}

fn render_line<'a>(widths: &[usize], cells: impl Iterator<Item = &'a str>) -> String {
    let line = cells
        .enumerate()
        .map(|(i, cell)| format!("{:<width$}", cell, width = widths[i]))
        .collect::<Vec<_>>()
        .join("  ");
    line.trim_end().to_string()
}

pub const PRODUCT_HEADERS: [&str; 7] = [
    "ID",
    "NAME",
    "PRICE",
    "CATEGORY",
    "STOCK",
    "RATING",
    "DESCRIPTION",
];

/// One table row per product.
pub fn product_rows<'a>(products: impl IntoIterator<Item = &'a Product>) -> Vec<Vec<String>> {
    products
        .into_iter()
        .map(|p| {
            vec![
                p.id.to_string(),
                p.name.clone(),
                format!("₹{}", p.price),
                p.category.clone(),
                p.stock.to_string(),
                format!("{}/5", p.rating),
                p.description.clone(),
            ]
        })
        .collect()
}

/// The two-line card shown by the interactive menu.
pub fn write_product_card<W: Write>(out: &mut W, p: &Product) -> io::Result<()> {
    writeln!(
        out,
        "ID: {} | Name: {} | Price: ₹{} | Category: {} | Stock: {} | Rating: {}/5",
        p.id, p.name, p.price, p.category, p.stock, p.rating
    )?;
    writeln!(out, "Description: {}", p.description)?;
    writeln!(out)
}

/// Products as a pretty-printed JSON array.
pub fn write_products_json<'a, W: Write>(
    out: &mut W,
    products: impl IntoIterator<Item = &'a Product>,
) -> io::Result<()> {
    let products: Vec<&Product> = products.into_iter().collect();
    serde_json::to_writer_pretty(&mut *out, &products)?;
    writeln!(out)
}
