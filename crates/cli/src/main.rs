//! Interactive text menu over the inventory engine.
//!
//! Pure plumbing: every decision (stock invariants, id uniqueness, codec
//! tolerance) lives in the library crates; this binary prompts, parses,
//! dispatches, and renders the returned outcomes.

use std::io::{self, Write};

use anyhow::Result;

use stockroom_core::ProductId;
use stockroom_inventory::Inventory;
use stockroom_products::{parse_date, Product, ProductKind};
use stockroom_store::{LoadReport, load_from_path, load_or_empty, save_to_path};

const INVENTORY_FILE: &str = "inventory.json";

const MENU: &str = "\
~~~~~~~~~~~~~~~~~~~~~~~~~
1. Add a product
2. Remove a product
3. Search for a product
4. Display all products
5. Sell a product
6. Restock a product
7. View inventory value
8. Remove expired products
9. Save inventory
10. Load inventory
11. Exit
~~~~~~~~~~~~~~~~~~~~~~~~~";

fn main() -> Result<()> {
    stockroom_observability::init();

    let report = load_or_empty(INVENTORY_FILE);
    render_skipped(&report);
    let mut inventory = report.inventory;
    println!("Loaded {} products from {INVENTORY_FILE}.", inventory.len());

    println!("--- Stockroom inventory manager ---");
    loop {
        println!("{MENU}");
        let Some(choice) = prompt("Enter your choice (1-11): ")? else {
            break;
        };
        match choice.as_str() {
            "1" => add_product(&mut inventory)?,
            "2" => remove_product(&mut inventory)?,
            "3" => search(&inventory)?,
            "4" => list_all(&inventory),
            "5" => sell(&mut inventory)?,
            "6" => restock(&mut inventory)?,
            "7" => println!("Total inventory value: {}", inventory.total_inventory_value()),
            "8" => remove_expired(&mut inventory)?,
            "9" => save(&inventory),
            "10" => inventory = load(),
            "11" => break,
            _ => println!("Please select a number between 1 and 11."),
        }
    }
    println!("Goodbye.");
    Ok(())
}

/// Print a label and read one trimmed line. `None` means end of input.
fn prompt(label: &str) -> Result<Option<String>> {
    print!("{label}");
    io::stdout().flush()?;
    let mut buf = String::new();
    if io::stdin().read_line(&mut buf)? == 0 {
        return Ok(None);
    }
    Ok(Some(buf.trim().to_string()))
}

/// Read a quantity, enforcing the caller-side contract that mutation
/// amounts are positive.
fn prompt_positive(label: &str) -> Result<Option<u32>> {
    let Some(raw) = prompt(label)? else {
        return Ok(None);
    };
    match raw.parse::<u32>() {
        Ok(value) if value > 0 => Ok(Some(value)),
        _ => {
            println!("Please enter a positive whole number.");
            Ok(None)
        }
    }
}

fn prompt_id(label: &str) -> Result<Option<ProductId>> {
    let Some(raw) = prompt(label)? else {
        return Ok(None);
    };
    match raw.parse::<ProductId>() {
        Ok(id) => Ok(Some(id)),
        Err(err) => {
            println!("{err}");
            Ok(None)
        }
    }
}

/// Id allocation policy lives here, not in the core: max existing + 1.
fn next_id(inventory: &Inventory) -> Result<ProductId> {
    let max = inventory.list_all().iter().map(|p| p.id().get()).max().unwrap_or(0);
    Ok(ProductId::new(max + 1)?)
}

fn add_product(inventory: &mut Inventory) -> Result<()> {
    println!("1. Electronics\n2. Grocery\n3. Clothing");
    let Some(category) = prompt("Which category? (1-3): ")? else {
        return Ok(());
    };

    let Some(name) = prompt("Product name: ")? else {
        return Ok(());
    };
    let Some(price_raw) = prompt("Unit price: ")? else {
        return Ok(());
    };
    let Ok(price) = price_raw.parse::<u64>() else {
        println!("Please enter a non-negative whole number for the price.");
        return Ok(());
    };
    let Some(stock_raw) = prompt("Quantity in stock: ")? else {
        return Ok(());
    };
    let Ok(stock) = stock_raw.parse::<u32>() else {
        println!("Please enter a non-negative whole number for the stock.");
        return Ok(());
    };

    let kind = match category.as_str() {
        "1" => {
            let Some(years_raw) = prompt("Warranty years: ")? else {
                return Ok(());
            };
            let Ok(warranty_years) = years_raw.parse::<u32>() else {
                println!("Please enter a whole number of years.");
                return Ok(());
            };
            let Some(brand) = prompt("Brand: ")? else {
                return Ok(());
            };
            ProductKind::Electronics {
                warranty_years,
                brand,
            }
        }
        "2" => {
            let Some(raw) = prompt("Expiry date (DD/MM/YYYY): ")? else {
                return Ok(());
            };
            match parse_date(&raw) {
                Ok(expiry_date) => ProductKind::Grocery { expiry_date },
                Err(err) => {
                    println!("{err}");
                    return Ok(());
                }
            }
        }
        "3" => {
            let Some(size) = prompt("Size (e.g. S/M/L/XL): ")? else {
                return Ok(());
            };
            let Some(material) = prompt("Material: ")? else {
                return Ok(());
            };
            ProductKind::Clothing { size, material }
        }
        _ => {
            println!("Please select a category between 1 and 3.");
            return Ok(());
        }
    };

    let id = next_id(inventory)?;
    match Product::new(id, name, price, stock, kind) {
        Ok(product) => {
            let name = product.name().to_string();
            match inventory.add_product(product) {
                Ok(()) => println!("Added '{name}' with id {id}."),
                Err(err) => println!("{err}"),
            }
        }
        Err(err) => println!("{err}"),
    }
    Ok(())
}

fn remove_product(inventory: &mut Inventory) -> Result<()> {
    let Some(id) = prompt_id("Id of the product to remove: ")? else {
        return Ok(());
    };
    if inventory.remove_product(id) {
        println!("Product {id} removed.");
    } else {
        println!("No product with id {id}.");
    }
    Ok(())
}

fn search(inventory: &Inventory) -> Result<()> {
    println!("1. Search by name\n2. Search by type (Electronics/Grocery/Clothing)");
    let Some(choice) = prompt("Enter your choice (1-2): ")? else {
        return Ok(());
    };
    let matches = match choice.as_str() {
        "1" => {
            let Some(needle) = prompt("Name to search for: ")? else {
                return Ok(());
            };
            inventory.search_by_name(&needle)
        }
        "2" => {
            let Some(tag) = prompt("Type to search for: ")? else {
                return Ok(());
            };
            inventory.search_by_type(&tag)
        }
        _ => {
            println!("Please select 1 or 2.");
            return Ok(());
        }
    };
    if matches.is_empty() {
        println!("No products found.");
    } else {
        for (i, product) in matches.iter().enumerate() {
            println!("{}. {product}", i + 1);
        }
    }
    Ok(())
}

fn list_all(inventory: &Inventory) {
    if inventory.is_empty() {
        println!("Inventory is empty.");
        return;
    }
    println!("----- Current inventory -----");
    for (i, product) in inventory.list_all().iter().enumerate() {
        println!("{}. {product}", i + 1);
    }
    println!("-----------------------------");
}

fn sell(inventory: &mut Inventory) -> Result<()> {
    let Some(id) = prompt_id("Id of the product to sell: ")? else {
        return Ok(());
    };
    let Some(quantity) = prompt_positive("Quantity to sell: ")? else {
        return Ok(());
    };
    match inventory.sell_product(id, quantity) {
        Ok(remaining) => println!("Sold {quantity} units. Remaining stock: {remaining}."),
        Err(err) => println!("{err}"),
    }
    Ok(())
}

fn restock(inventory: &mut Inventory) -> Result<()> {
    let Some(id) = prompt_id("Id of the product to restock: ")? else {
        return Ok(());
    };
    let Some(quantity) = prompt_positive("Quantity to add: ")? else {
        return Ok(());
    };
    match inventory.restock_product(id, quantity) {
        Ok(level) => println!("Restocked {quantity} units. New stock: {level}."),
        Err(err) => println!("{err}"),
    }
    Ok(())
}

fn remove_expired(inventory: &mut Inventory) -> Result<()> {
    let Some(raw) = prompt("Reference date (DD/MM/YYYY): ")? else {
        return Ok(());
    };
    let reference = match parse_date(&raw) {
        Ok(date) => date,
        Err(err) => {
            println!("{err}");
            return Ok(());
        }
    };
    let removed = inventory.remove_expired_products(reference);
    if removed.is_empty() {
        println!("No expired products found.");
    } else {
        for product in &removed {
            println!("Removed expired product: {product}");
        }
        println!("Removed {} expired products.", removed.len());
    }
    Ok(())
}

fn save(inventory: &Inventory) {
    match save_to_path(inventory, INVENTORY_FILE) {
        Ok(()) => println!("Inventory saved to {INVENTORY_FILE}."),
        Err(err) => println!("Could not save inventory: {err}"),
    }
}

/// Replace the in-memory inventory with the file contents. A failed load
/// degrades to an empty inventory, as the save/load contract promises.
fn load() -> Inventory {
    match load_from_path(INVENTORY_FILE) {
        Ok(report) => {
            render_skipped(&report);
            println!("Loaded {} products from {INVENTORY_FILE}.", report.inventory.len());
            report.inventory
        }
        Err(err) => {
            println!("Could not load inventory ({err}); starting empty.");
            Inventory::new()
        }
    }
}

fn render_skipped(report: &LoadReport) {
    for skipped in &report.skipped {
        println!("Skipped record {}: {}", skipped.index, skipped.reason);
    }
}
