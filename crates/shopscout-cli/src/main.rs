use clap::Parser;
use shopscout_core::{
    config::Config,
    providers::FakeStoreSource,
    view::{FAILURE_DESCRIPTION, FAILURE_HEADING, NO_PRODUCTS_DESCRIPTION, NO_PRODUCTS_HEADING},
    CatalogSource, Listing, ListingView, Product,
};
use std::{path::PathBuf, sync::Arc};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "shopscout")]
#[command(version, about = "Terminal product catalog browser", long_about = None)]
struct Cli {
    /// Catalog host serving GET /products
    #[arg(long, global = true, env = "SHOPSCOUT_BASE_URL")]
    base_url: Option<String>,

    /// Show the raw fetch result, ignoring search/category/rating/sort
    #[arg(long, global = true)]
    raw: bool,

    /// Config file to use instead of the default location
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(clap::Subcommand)]
enum Commands {
    /// Fetch the catalog once and print it
    List {
        /// Fuzzy search on product titles
        #[arg(long)]
        search: Option<String>,
        /// Category id (see config; 1 = Clothing, 2 = electronics, ...)
        #[arg(long)]
        category: Option<String>,
        /// Minimum rating id (1-4)
        #[arg(long)]
        rating: Option<String>,
        /// Sort option id (PRICE_HIGH or PRICE_LOW)
        #[arg(long)]
        sort: Option<String>,
        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_log_filter(&cli.command).into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let mut config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };
    if let Some(base_url) = cli.base_url.clone() {
        config.api.base_url = base_url;
    }
    if cli.raw {
        config.listing.apply_filters = false;
    }

    let source = Arc::new(FakeStoreSource::from_config(&config.api));
    let mut listing = Listing::new(config.catalog.clone(), config.listing.apply_filters);

    match cli.command {
        Some(Commands::List {
            search,
            category,
            rating,
            sort,
            json,
        }) => {
            if let Some(search) = search {
                listing.filters.set_search_text(search);
            }
            listing.filters.set_category(category);
            listing.filters.set_rating(rating);
            if let Some(sort) = sort {
                listing.filters.set_sort_option(sort);
            }

            tracing::info!("Listing products from {}", config.api.base_url);
            listing.load(source.as_ref()).await;
            print_view(listing.view(), json)?;
        }
        None => {
            let source: Arc<dyn CatalogSource> = source;
            shopscout_tui::run_tui(shopscout_tui::App::new(listing), source).await?;
        }
    }

    Ok(())
}

/// stderr shares the screen with the TUI, so it stays silent unless RUST_LOG says otherwise
fn default_log_filter(command: &Option<Commands>) -> &'static str {
    match command {
        Some(Commands::List { .. }) => "shopscout=info",
        None => "off",
    }
}

fn print_view(view: ListingView, json: bool) -> anyhow::Result<()> {
    match view {
        ListingView::ProductList(products) => {
            if json {
                println!("{}", serde_json::to_string_pretty(&products)?);
            } else {
                println!("{}", header_row());
                for product in &products {
                    println!("{}", format_row(product));
                }
            }
            Ok(())
        }
        ListingView::NoProducts => {
            if json {
                println!("[]");
            } else {
                println!("{}\n{}", NO_PRODUCTS_HEADING, NO_PRODUCTS_DESCRIPTION);
            }
            Ok(())
        }
        ListingView::Failure => anyhow::bail!("{} {}", FAILURE_HEADING, FAILURE_DESCRIPTION),
        ListingView::Nothing | ListingView::Loading => {
            anyhow::bail!("Catalog fetch did not complete")
        }
    }
}

const TITLE_WIDTH: usize = 48;

fn header_row() -> String {
    format!(
        "{:>4}  {:<width$}  {:<18}  {:>9}  {:>6}",
        "ID",
        "TITLE",
        "CATEGORY",
        "PRICE",
        "RATING",
        width = TITLE_WIDTH
    )
}

fn format_row(product: &Product) -> String {
    format!(
        "{:>4}  {:<width$}  {:<18}  {:>9}  {:>6.1}",
        product.id,
        truncate(&product.title, TITLE_WIDTH),
        truncate(&product.category, 18),
        format!("${:.2}", product.price),
        product.rating,
        width = TITLE_WIDTH
    )
}

fn truncate(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        text.to_string()
    } else {
        let mut cut: String = text.chars().take(max.saturating_sub(1)).collect();
        cut.push('…');
        cut
    }
}
