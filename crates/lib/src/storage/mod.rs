//! Catalog file persistence.
//!
//! Products are stored in a plain text file using the seven-lines-per-record
//! layout described in [`format`]. A missing file is created empty on load.

pub mod errors;
pub mod format;

pub use errors::StorageError;
pub use format::{read_products, write_products};

use std::{
    fs::{File, OpenOptions},
    io::{BufReader, BufWriter},
    path::Path,
};

use crate::{Result, product::Product};

/// Loads all complete product records from `path`.
///
/// If the file does not exist it is created empty and no products are
/// returned. A malformed or truncated record ends the data without failing.
///
/// # Returns
/// The products in file order, or an I/O error if the file could not be
/// opened, created or read.
pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Vec<Product>> {
    let path = path.as_ref();
    let file_io = |source| -> crate::Error {
        StorageError::FileIo {
            path: path.to_path_buf(),
            source,
        }
        .into()
    };

    let file = match File::open(path) {
        Ok(file) => file,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            OpenOptions::new()
                .write(true)
                .create(true)
                .truncate(false)
                .open(path)
                .map_err(file_io)?;
            tracing::info!(path = %path.display(), "Catalog file not found, created an empty one");
            return Ok(Vec::new());
        }
        Err(e) => return Err(file_io(e)),
    };

    let products = read_products(BufReader::new(file)).map_err(file_io)?;
    tracing::info!(path = %path.display(), count = products.len(), "Loaded products");
    Ok(products)
}

/// Writes `products` to `path`, replacing any previous contents.
pub fn save_to_file<'a, P, I>(path: P, products: I) -> Result<()>
where
    P: AsRef<Path>,
    I: IntoIterator<Item = &'a Product>,
{
    let path = path.as_ref();
    let file_io = |source| -> crate::Error {
        StorageError::FileIo {
            path: path.to_path_buf(),
            source,
        }
        .into()
    };

    let file = File::create(path).map_err(file_io)?;
    let mut count = 0usize;
    let products = products.into_iter().inspect(|_| count += 1);
    write_products(BufWriter::new(file), products).map_err(file_io)?;

    tracing::info!(path = %path.display(), count, "Saved products");
    Ok(())
}
