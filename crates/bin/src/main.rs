use std::io::{self, Write};

use clap::Parser;
use prodcat::CatalogService;
use tracing_subscriber::EnvFilter;

mod cli;
mod output;
mod shell;

use cli::{Cli, Commands, Format, ListArgs};
use output::{PRODUCT_HEADERS, product_rows, write_products_json, write_table};
use shell::{Console, Exit};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Logs go to stderr so the menu on stdout stays readable
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env().add_directive("prodcat=info".parse().unwrap()),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    let config = cli.catalog.to_config()?;
    let mut service = CatalogService::open(config)?;

    match cli.command.unwrap_or(Commands::Shell) {
        Commands::Shell => run_shell(&mut service),
        Commands::List(args) => run_list(&service, &args),
    }
}

fn run_shell(service: &mut CatalogService) -> Result<(), Box<dyn std::error::Error>> {
    let stdin = io::stdin();
    let mut console = Console::new(stdin.lock(), io::stdout().lock());
    match console.run(service)? {
        Exit::Saved => {}
        Exit::InputClosed => eprintln!("Input closed, changes were not saved"),
    }
    Ok(())
}

fn run_list(service: &CatalogService, args: &ListArgs) -> Result<(), Box<dyn std::error::Error>> {
    let products: Vec<_> = if let Some(category) = &args.category {
        service.products_in_category(category)?
    } else if args.by_rating {
        service.products_by_rating().collect()
    } else {
        service.products().collect()
    };

    let mut out = io::stdout().lock();
    match args.format {
        Format::Human => {
            if products.is_empty() {
                writeln!(out, "No products in the catalog!")?;
                return Ok(());
            }
            write_table(&mut out, &PRODUCT_HEADERS, &product_rows(products))?;
        }
        Format::Json => write_products_json(&mut out, products)?,
    }
    Ok(())
}
