//! Basic usage example - add, look up, list and remove books

use bookshelf::{BookId, BookRegistry, Result};
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

fn main() -> Result<()> {
    // Pass --debug to see the registry's own log lines
    let debug = std::env::args().any(|arg| arg == "--debug");
    let log_level = if debug { Level::DEBUG } else { Level::INFO };
    FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_target(false)
        .compact()
        .init();

    let registry = BookRegistry::new();

    let war_and_peace = registry.add("War and Peace", "Leo Tolstoy")?;
    registry.add("Crime and Punishment", "Fyodor Dostoevsky")?;
    registry.add("1984", "George Orwell")?;

    match registry.add("1984", "Someone Else") {
        Ok(id) => println!("Unexpectedly added a second 1984 as {}", id),
        Err(e) => println!("Rejected: {}", e),
    }

    if let Some(info) = registry.get(&war_and_peace) {
        println!("{} -> {} by {}", war_and_peace, info.title, info.author);
    }

    registry.remove(&war_and_peace);
    registry.remove(&BookId::from("nonexistent"));

    println!("Library holds {} books:", registry.count());
    for book in registry.list_all() {
        println!("  - {} by {} ({})", book.title, book.author, book.id);
    }

    Ok(())
}
