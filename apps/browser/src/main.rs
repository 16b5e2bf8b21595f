use anyhow::Result;
use catalog_core::{CatalogController, CatalogSnapshot, HttpCatalogSource};
use clap::Parser;
use shared::domain::SortKey;
use std::sync::Arc;
use tracing::warn;

mod config;

#[derive(Parser, Debug)]
struct Args {
    /// Catalog base URL; overrides browser.toml and environment.
    #[arg(long)]
    source_url: Option<String>,
    /// Category filter to apply after loading.
    #[arg(long)]
    category: Option<String>,
    /// none, price_asc or price_desc.
    #[arg(long, default_value = "none")]
    sort: SortKey,
    /// How many pages to reveal before exiting.
    #[arg(long, default_value_t = 1)]
    pages: u32,
}

fn print_page(snapshot: &CatalogSnapshot) {
    println!(
        "-- {} item(s) | category={} sort={}",
        snapshot.displayed.len(),
        snapshot.selected_category,
        snapshot.sort_key
    );
    for item in &snapshot.displayed {
        println!(
            "  [{}] {} — {:.2} ({})",
            item.id.0, item.title, item.price, item.category
        );
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt().with_env_filter("info").init();
    let args = Args::parse();

    let mut settings = config::load_settings();
    if let Some(source_url) = args.source_url {
        settings.source_url = source_url;
    }

    let source = Arc::new(HttpCatalogSource::new(settings.source_url));
    let controller = CatalogController::new(source, settings.page_size);

    if let Err(err) = controller.load().await {
        // Fetch failure is not fatal: the catalog simply stays empty.
        warn!("initial catalog load failed: {err}");
    }

    let snapshot = controller.snapshot().await;
    println!("categories: {}", snapshot.categories.join(", "));

    if let Some(category) = args.category {
        controller.set_category(&category).await;
    }
    controller.set_sort(args.sort).await;

    for _ in 1..args.pages {
        controller.load_more().await;
    }

    print_page(&controller.snapshot().await);
    Ok(())
}
