//! Line-oriented product record format.
//!
//! Each product takes seven consecutive lines, in this order:
//!
//! ```text
//! id
//! name
//! price
//! category
//! stock
//! description
//! rating
//! ```
//!
//! There are no delimiters or escapes. Blank lines are skipped where a number
//! is expected. Reading stops quietly at the first missing or malformed field,
//! keeping every complete record before it.

use std::{
    io::{self, BufRead, Write},
    str::FromStr,
};

use crate::product::{Product, ProductId};

/// Reads every complete record from `reader`.
///
/// Only I/O failures are errors. A truncated or malformed record ends the
/// data and is reported with a warning.
pub fn read_products<R: BufRead>(reader: R) -> io::Result<Vec<Product>> {
    let mut lines = RecordLines::new(reader);
    let mut products = Vec::new();

    loop {
        let start = lines.line_no + 1;
        match read_record(&mut lines)? {
            Record::Complete(product) => products.push(product),
            Record::End => break,
            Record::Malformed { field } => {
                tracing::warn!(
                    line = lines.line_no,
                    record_start = start,
                    field,
                    loaded = products.len(),
                    "Malformed product record, ignoring the rest of the file"
                );
                break;
            }
        }
    }

    Ok(products)
}

/// Writes `products` in catalog order.
pub fn write_products<'a, W, I>(mut writer: W, products: I) -> io::Result<()>
where
    W: Write,
    I: IntoIterator<Item = &'a Product>,
{
    for p in products {
        writeln!(writer, "{}", p.id)?;
        writeln!(writer, "{}", p.name)?;
        writeln!(writer, "{}", p.price)?;
        writeln!(writer, "{}", p.category)?;
        writeln!(writer, "{}", p.stock)?;
        writeln!(writer, "{}", p.description)?;
        writeln!(writer, "{}", p.rating)?;
    }
    writer.flush()
}

enum Record {
    Complete(Product),
    /// Clean end of input on a record boundary.
    End,
    Malformed {
        field: &'static str,
    },
}

fn read_record<R: BufRead>(lines: &mut RecordLines<R>) -> io::Result<Record> {
    // End of input before an id is the normal way out.
    let id_line = match decoded(lines.next_non_blank()) {
        Ok(Some(Some(line))) => line,
        Ok(Some(None)) => return Ok(Record::Malformed { field: "id" }),
        Ok(None) => return Ok(Record::End),
        Err(e) => return Err(e),
    };
    let Ok(id) = id_line.trim().parse::<ProductId>() else {
        return Ok(Record::Malformed { field: "id" });
    };

    macro_rules! text {
        ($field:literal) => {
            match decoded(lines.next_line())? {
                Some(Some(line)) if !line.is_empty() => line,
                _ => return Ok(Record::Malformed { field: $field }),
            }
        };
    }
    macro_rules! number {
        ($field:literal) => {
            match decoded(lines.next_number())? {
                Some(Some(value)) => value,
                _ => return Ok(Record::Malformed { field: $field }),
            }
        };
    }

    let name = text!("name");
    let price = number!("price");
    let category = text!("category");
    let stock = number!("stock");
    let description = text!("description");
    let rating = number!("rating");

    Ok(Record::Complete(Product {
        id,
        name,
        price,
        category,
        stock,
        description,
        rating,
    }))
}

/// Separates undecodable text from real I/O failures.
///
/// `Ok(None)` is end of input, `Ok(Some(None))` a line that is not UTF-8.
fn decoded<T>(result: io::Result<Option<T>>) -> io::Result<Option<Option<T>>> {
    match result {
        Ok(value) => Ok(value.map(Some)),
        Err(e) if e.kind() == io::ErrorKind::InvalidData => Ok(Some(None)),
        Err(e) => Err(e),
    }
}

struct RecordLines<R> {
    reader: R,
    buf: Vec<u8>,
    line_no: usize,
}

impl<R: BufRead> RecordLines<R> {
    fn new(reader: R) -> Self {
        Self {
            reader,
            buf: Vec::new(),
            line_no: 0,
        }
    }

    /// Next line without its terminator, or `None` at end of input.
    ///
    /// A line that is not valid UTF-8 fails with `InvalidData`.
    fn next_line(&mut self) -> io::Result<Option<String>> {
        self.buf.clear();
        if self.reader.read_until(b'\n', &mut self.buf)? == 0 {
            return Ok(None);
        }
        self.line_no += 1;
        let line = std::str::from_utf8(&self.buf).map_err(|e| {
            tracing::warn!(line = self.line_no, "Line is not valid UTF-8");
            io::Error::new(io::ErrorKind::InvalidData, e)
        })?;
        Ok(Some(line.trim_end_matches(['\n', '\r']).to_string()))
    }

    fn next_non_blank(&mut self) -> io::Result<Option<String>> {
        while let Some(line) = self.next_line()? {
            if !line.trim().is_empty() {
                return Ok(Some(line));
            }
        }
        Ok(None)
    }

    /// Parses the next non-blank line, `None` if missing or unparsable.
    fn next_number<T: FromStr>(&mut self) -> io::Result<Option<T>> {
        Ok(self
            .next_non_blank()?
            .and_then(|line| line.trim().parse().ok()))
    }
}
