use anyhow::{anyhow, Result};
use axum::{routing, Router};
use camino::Utf8PathBuf;
use notify::{RecursiveMode, Watcher};

use piazza::catalog::{keeper, Keeper};
use piazza::route;

async fn run() -> Result<()> {
    let mut args = std::env::args();
    let port = args
        .nth(1)
        .ok_or_else(|| anyhow!("Expected a port number as a first argument"))?;
    let catalog_path = args
        .next()
        .ok_or_else(|| anyhow!("Expected a catalog file path as a second argument"))?;

    // Watch events carry absolute paths, so the keeper's path must match.
    let catalog_path = Utf8PathBuf::from(catalog_path).canonicalize_utf8()?;
    let watch_dir = catalog_path
        .parent()
        .ok_or_else(|| anyhow!("Catalog path ({catalog_path}) has no parent directory"))?
        .to_owned();

    let keeper = Keeper::new(&catalog_path)?;
    println!(
        "Loaded catalog ({} items) from {catalog_path}",
        keeper.catalog().items.len()
    );
    let catalog = keeper::ArcMutex::new(keeper);

    let mut watcher = notify::recommended_watcher(catalog.clone())?;

    watcher.watch(watch_dir.as_std_path(), RecursiveMode::NonRecursive)?;

    let app = Router::new()
        .route("/:locale/hub/list", routing::get(route::hub_list::get))
        .route(
            "/:locale/hub/structured",
            routing::get(route::structured::get),
        )
        .route("/hub/facets", routing::get(route::facets::get))
        .with_state(catalog);

    let socket_addr_string = format!("0.0.0.0:{port}");
    println!("Binding to {socket_addr_string}");
    axum::Server::bind(&socket_addr_string.parse()?)
        .serve(app.into_make_service())
        .await?;

    Ok(())
}

#[tokio::main]
async fn main() {
    if let Err(err) = run().await {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}
