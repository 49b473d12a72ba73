//! Interactive login and numbered menu.
//!
//! The shell reads line-based input and writes plain text, so it runs the same
//! against a terminal or scripted buffers. End of input anywhere ends the
//! session without saving.

use std::{
    io::{self, BufRead, Write},
    str::FromStr,
};

use prodcat::{CatalogService, Error, Product, UndoOutcome};

use crate::output::write_product_card;

/// Menu entries, numbered as shown to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Insert,
    ListAll,
    SearchByName,
    ListByCategory,
    ListByRating,
    Delete,
    Undo,
    Purchase,
    SaveAndExit,
}

impl TryFrom<u32> for MenuChoice {
    type Error = u32;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        Ok(match value {
            1 => MenuChoice::Insert,
            2 => MenuChoice::ListAll,
            3 => MenuChoice::SearchByName,
            4 => MenuChoice::ListByCategory,
            5 => MenuChoice::ListByRating,
            6 => MenuChoice::Delete,
            7 => MenuChoice::Undo,
            8 => MenuChoice::Purchase,
            9 => MenuChoice::SaveAndExit,
            other => return Err(other),
        })
    }
}

const MENU: &str = "\n\t\t\t\tE-commerce Product Catalog Menu\n\
1. Insert a new product\n\
2. Display all products\n\
3. Search for a product by name\n\
4. Display products by category\n\
5. Display products by rating (highest to lowest)\n\
6. Delete a product by ID\n\
7. Undo last operation\n\
8. Purchase a product\n\
9. Exit\n";

/// How the shell ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Exit {
    /// The user chose exit; the catalog was saved, or saving was attempted.
    Saved,
    /// Input ran out before the user chose exit. Nothing was saved.
    InputClosed,
}

/// Line-based console over any reader and writer.
pub struct Console<R, W> {
    input: R,
    out: W,
    line: String,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, out: W) -> Self {
        Self {
            input,
            out,
            line: String::new(),
        }
    }

    /// Runs the login loop and then the menu until exit or end of input.
    pub fn run(&mut self, service: &mut CatalogService) -> io::Result<Exit> {
        match self.session(service) {
            Ok(()) => Ok(Exit::Saved),
            Err(e) if e.kind() == io::ErrorKind::UnexpectedEof => {
                tracing::warn!("Input closed before exit, catalog not saved");
                Ok(Exit::InputClosed)
            }
            Err(e) => Err(e),
        }
    }

    pub fn into_output(self) -> W {
        self.out
    }

    fn session(&mut self, service: &mut CatalogService) -> io::Result<()> {
        self.login(service)?;
        loop {
            self.out.write_all(MENU.as_bytes())?;
            let choice: u32 = match self.prompt("Enter your choice: ")?.trim().parse() {
                Ok(n) => n,
                Err(_) => {
                    writeln!(self.out, "Invalid choice! Please try again.")?;
                    continue;
                }
            };
            match MenuChoice::try_from(choice) {
                Ok(MenuChoice::SaveAndExit) => return self.save_and_exit(service),
                Ok(choice) => self.dispatch(service, choice)?,
                Err(_) => writeln!(self.out, "Invalid choice! Please try again.")?,
            }
        }
    }

    fn login(&mut self, service: &mut CatalogService) -> io::Result<()> {
        writeln!(self.out, "Please login to continue")?;
        loop {
            let username = self.prompt_token("Enter username: ")?;
            let password = self.prompt_token("Enter password: ")?;
            match service.login(&username, &password) {
                Ok(()) => {
                    writeln!(self.out, "Logged in as: {username}")?;
                    return Ok(());
                }
                Err(_) => {
                    writeln!(self.out, "Invalid username or password!")?;
                    writeln!(self.out, "Invalid login, please try again.")?;
                }
            }
        }
    }

    fn dispatch(&mut self, service: &mut CatalogService, choice: MenuChoice) -> io::Result<()> {
        match choice {
            MenuChoice::Insert => self.insert(service),
            MenuChoice::ListAll => self.list_all(service),
            MenuChoice::SearchByName => {
                let name = self.prompt("Enter product name to search: ")?;
                match service.search_by_name(&name) {
                    Ok(ids) => {
                        let ids: Vec<String> = ids.iter().map(ToString::to_string).collect();
                        writeln!(
                            self.out,
                            "Product(s) found: {name} with IDs: {}",
                            ids.join(" ")
                        )
                    }
                    Err(_) => writeln!(self.out, "Product not found: {name}"),
                }
            }
            MenuChoice::ListByCategory => {
                let category = self.prompt("Enter category: ")?;
                match service.products_in_category(&category) {
                    Ok(products) => self.write_cards(products),
                    Err(_) => writeln!(self.out, "No products found in category: {category}\n"),
                }
            }
            MenuChoice::ListByRating => {
                if service.is_empty() {
                    return writeln!(self.out, "No products in the catalog!");
                }
                self.write_cards(service.products_by_rating())
            }
            MenuChoice::Delete => {
                let id = self.prompt_parse("Enter product ID to delete: ")?;
                match service.delete_product(id) {
                    Ok(_) => writeln!(self.out, "Product deleted!"),
                    Err(_) => writeln!(self.out, "Product not found!"),
                }
            }
            MenuChoice::Undo => match service.undo_last_operation() {
                Ok(UndoOutcome::DeletionReverted(p)) => {
                    writeln!(self.out, "Undoing product deletion: {}", p.name)
                }
                Ok(UndoOutcome::InsertionReverted(p)) => {
                    writeln!(self.out, "Undoing product addition: {}", p.name)
                }
                Err(e) if e.is_empty_history() => writeln!(self.out, "Nothing to undo!"),
                Err(e) => writeln!(self.out, "Undo failed: {e}"),
            },
            MenuChoice::Purchase => self.purchase(service),
            MenuChoice::SaveAndExit => Ok(()),
        }
    }

    fn insert(&mut self, service: &mut CatalogService) -> io::Result<()> {
        let id = self.prompt_parse("Enter product ID: ")?;
        let name = self.prompt("Enter product name: ")?;
        let price = self.prompt_parse("Enter product price: ")?;
        let category = self.prompt("Enter product category: ")?;
        let stock = self.prompt_parse("Enter product stock: ")?;
        let description = self.prompt("Enter product description: ")?;
        let rating = self.prompt_parse("Enter product rating (0 to 5): ")?;

        let product = Product::new(id, name, price, category, stock, description, rating);
        match service.insert_product(product) {
            Ok(()) => writeln!(self.out, "Product inserted"),
            Err(e) => writeln!(self.out, "Product not inserted: {e}"),
        }
    }

    fn list_all(&mut self, service: &CatalogService) -> io::Result<()> {
        if service.is_empty() {
            return writeln!(self.out, "No products in the catalog!");
        }
        self.write_cards(service.products())
    }

    fn purchase(&mut self, service: &mut CatalogService) -> io::Result<()> {
        self.list_all(service)?;
        let id = self.prompt_parse("Enter product ID to purchase: ")?;
        let quantity = self.prompt_parse("Enter Quantity to purchase: ")?;
        match service.purchase(id, quantity) {
            Ok(remaining) => {
                let name = service
                    .find_product(id)
                    .map(|p| p.name.as_str())
                    .unwrap_or_default();
                writeln!(self.out, "Purchased {name}. Remaining stock: {remaining}")
            }
            Err(Error::Catalog(e)) if e.is_insufficient_stock() => {
                let name = service
                    .find_product(id)
                    .map(|p| p.name.as_str())
                    .unwrap_or_default();
                writeln!(self.out, "Sorry, {name} is out of stock!")
            }
            Err(e) if e.is_not_found() => writeln!(self.out, "Product not found!"),
            Err(e) => writeln!(self.out, "Purchase refused: {e}"),
        }
    }

    fn save_and_exit(&mut self, service: &CatalogService) -> io::Result<()> {
        match service.save() {
            Ok(()) => writeln!(
                self.out,
                "Products saved to file: {}",
                service.config().data_file.display()
            )?,
            Err(e) => {
                tracing::error!("Failed to save catalog: {e}");
                writeln!(self.out, "Error saving catalog: {e}")?;
            }
        }
        writeln!(self.out, "Exiting the program and saving data...")
    }

    fn write_cards<'a>(&mut self, products: impl IntoIterator<Item = &'a Product>) -> io::Result<()> {
        for product in products {
            write_product_card(&mut self.out, product)?;
        }
        Ok(())
    }

    /// Writes `text`, then reads one line without its terminator.
    fn prompt(&mut self, text: &str) -> io::Result<String> {
        write!(self.out, "{text}")?;
        self.out.flush()?;
        self.line.clear();
        if self.input.read_line(&mut self.line)? == 0 {
            return Err(io::ErrorKind::UnexpectedEof.into());
        }
        Ok(self.line.trim_end_matches(['\n', '\r']).to_string())
    }

    /// Prompts until the line holds at least one word, returning the first.
    fn prompt_token(&mut self, text: &str) -> io::Result<String> {
        loop {
            if let Some(token) = self.prompt(text)?.split_whitespace().next() {
                return Ok(token.to_string());
            }
        }
    }

    /// Prompts until the line parses as `T`.
    fn prompt_parse<T: FromStr>(&mut self, text: &str) -> io::Result<T> {
        loop {
            match self.prompt(text)?.trim().parse() {
                Ok(value) => return Ok(value),
                Err(_) => writeln!(self.out, "Please enter a valid number.")?,
            }
        }
    }
}
