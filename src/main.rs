use std::net::SocketAddr;
use std::process;

use clap::{Parser, Subcommand};
use comfy_table::{modifiers, presets, Cell, CellAlignment, ContentArrangement, Table};
use terminal_size::{terminal_size, Width};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter};

use shopfront::api::{self, CatalogClient};
use shopfront::config;
use shopfront::models::{AppState, Category, Product};
use shopfront::routes::build_router;
use shopfront::state::{FetchController, FetchState};
use shopfront::utils::{format_price, format_price_fixed, format_timestamp};
use shopfront::view::{derive_view, excerpt, SortKey};

const DESCRIPTION_WIDTH: usize = 60;

fn build_state_from_env(env_file: Option<&str>) -> AppState {
    config::load_env_file(env_file);
    let catalog = match CatalogClient::new(config::get_api_base_url(), config::get_request_timeout()) {
        Ok(catalog) => catalog,
        Err(e) => {
            tracing::error!(%e, "Failed to create catalog client");
            eprintln!("{}: {}", yansi::Paint::new("Failed to create HTTP client").red(), e);
            process::exit(1);
        }
    };
    AppState {
        catalog,
        custom_css: None,
    }
}

async fn start_server(mut state: AppState, host: &str, port: u16, stylesheet: Option<String>) {
    if let Some(path) = stylesheet {
        match std::fs::read_to_string(&path) {
            Ok(css) => {
                state.custom_css = Some(css);
                tracing::info!("Loaded custom stylesheet from {}", path);
            }
            Err(e) => {
                tracing::error!(%e, "Failed to read custom stylesheet");
                eprintln!("{} {}: {}", yansi::Paint::red("Failed to read custom stylesheet at"), path, e);
                process::exit(1);
            }
        }
    }

    let addr: SocketAddr = match format!("{}:{}", host, port).parse() {
        Ok(a) => a,
        Err(e) => {
            tracing::error!(%e, "Invalid host/port format");
            eprintln!("{}: {}", yansi::Paint::red("Invalid host/port format"), e);
            process::exit(1);
        }
    };

    // Per-request curl traces would flood the server's stdout.
    api::set_silent(true);

    let app = build_router(state.clone());
    tracing::info!(%addr, api = state.catalog.base_url(), "Starting storefront server");
    println!(
        "{} {}",
        yansi::Paint::new("Storefront running on").green(),
        yansi::Paint::new(format!("http://{}", addr)).cyan()
    );
    match tokio::net::TcpListener::bind(addr).await {
        Ok(listener) => {
            if let Err(e) = axum::serve(listener, app).await {
                tracing::error!(%e, "Server encountered an error while running");
                eprintln!("{}: {}", yansi::Paint::new("Server error").red(), e);
                process::exit(1);
            }
        }
        Err(e) => {
            tracing::error!(%e, "Failed to bind to address; is the port already in use?");
            eprintln!(
                "{}: {}\n{}",
                yansi::Paint::new(format!("Failed to bind to {}", addr)).red(),
                e,
                yansi::Paint::new("Please stop any process using this port, or start the server with a different --port value.").yellow()
            );
            process::exit(1);
        }
    }
}

fn new_table() -> Table {
    let mut table = Table::new();
    table.load_preset(presets::UTF8_FULL);
    table.apply_modifier(modifiers::UTF8_ROUND_CORNERS);
    table.set_content_arrangement(ContentArrangement::Dynamic);
    if let Some((Width(w), _)) = terminal_size() {
        table.set_width(w.saturating_sub(4));
    }
    table
}

fn print_products(products: &[Product]) {
    if products.is_empty() {
        println!("{}", yansi::Paint::new("No products match your search criteria").yellow());
        return;
    }
    let mut table = new_table();
    table.set_header(vec!["ID", "Title", "Category", "Price", "Description"]);
    for p in products {
        table.add_row(vec![
            Cell::new(p.id),
            Cell::new(&p.title),
            Cell::new(&p.category.name),
            Cell::new(format_price(p.price)).set_alignment(CellAlignment::Right),
            Cell::new(excerpt(&p.description, DESCRIPTION_WIDTH)),
        ]);
    }
    println!("{table}");
}

fn print_product(p: &Product) {
    let mut table = new_table();
    table.set_header(vec!["Field", "Value"]);
    table.add_row(vec!["ID".to_string(), p.id.to_string()]);
    table.add_row(vec!["Title".to_string(), p.title.clone()]);
    table.add_row(vec!["Price".to_string(), format_price_fixed(p.price)]);
    table.add_row(vec!["Category".to_string(), p.category.name.clone()]);
    table.add_row(vec!["Listed on".to_string(), format_timestamp(&p.creation_at)]);
    table.add_row(vec!["Description".to_string(), p.description.clone()]);
    table.add_row(vec!["Images".to_string(), p.images.join("\n")]);
    println!("{table}");
}

fn print_categories(categories: &[Category]) {
    if categories.is_empty() {
        println!("{}", yansi::Paint::new("No categories available at the moment").yellow());
        return;
    }
    let mut table = new_table();
    table.set_header(vec!["ID", "Name", "Slug"]);
    for (c, slug) in categories.iter().zip(api::link_slugs(categories)) {
        table.add_row(vec![c.id.to_string(), c.name.clone(), slug]);
    }
    println!("{table}");
}

/// Unwrap a settled fetch or report its error and exit.
fn settled_or_exit<T: Clone>(controller: &FetchController<T>) -> T {
    match controller.state() {
        FetchState::Success(data) => data,
        FetchState::Error(message) => {
            eprintln!(
                "{}: {}",
                yansi::Paint::new(format!("Failed to load {}", controller.target())).red(),
                message
            );
            process::exit(1);
        }
        FetchState::Idle | FetchState::Loading => {
            eprintln!("{}", yansi::Paint::new(format!("No data loaded for {}", controller.target())).red());
            process::exit(1);
        }
    }
}

async fn load_categories(catalog: &CatalogClient) -> Vec<Category> {
    let categories = FetchController::new("categories");
    categories.load(|| api::fetch_categories(catalog)).await;
    settled_or_exit(&categories)
}

#[derive(Parser)]
#[command(
    name = "shopfront",
    version,
    about = "Product catalog storefront",
    long_about = r#"Browse a remote product catalog from the browser or the terminal.

`serve` renders the catalog as HTML pages. The `products` and `categories`
commands query the same API and print tables. The API location and request
timeout come from STOREFRONT_API_BASE_URL and STOREFRONT_TIMEOUT_SECS, either
in the environment or in a .env file.

Examples:
  shopfront serve --port 3000
  shopfront products list --filter shirt --sort price-desc
  shopfront categories products electronics
"#,
    after_help = "Use `shopfront <subcommand> --help` to get subcommand specific options."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
    /// Disable colorized output
    #[arg(long, global = true)]
    no_color: bool,
    /// Disable request/response logging
    #[arg(long, global = true)]
    silent: bool,
    /// Path to .env file
    #[arg(long, global = true)]
    env_file: Option<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the web server
    Serve {
        /// Host to bind to (defaults to STOREFRONT_HOST or 127.0.0.1)
        #[arg(long)]
        host: Option<String>,
        /// Port to bind to (defaults to STOREFRONT_PORT or 8080)
        #[arg(long)]
        port: Option<u16>,
        /// Path to a custom stylesheet to serve instead of the default
        #[arg(long)]
        stylesheet: Option<String>,
    },
    /// Validate configuration and ensure the catalog API answers
    #[command(long_about = "Print the resolved configuration and fetch the category list from the catalog API to confirm it is reachable.")]
    CheckConfig,
    /// Browse products
    Products {
        #[command(subcommand)]
        sub: ProductCommands,
    },
    /// Browse categories
    Categories {
        #[command(subcommand)]
        sub: CategoryCommands,
    },
}

#[derive(Subcommand)]
enum ProductCommands {
    /// List products, optionally filtered and sorted
    List {
        /// Case-insensitive match against title or category name
        #[arg(long, default_value = "")]
        filter: String,
        #[arg(long, value_enum, default_value_t = SortKey::PriceAsc)]
        sort: SortKey,
    },
    /// Show one product
    Show { id: u64 },
}

#[derive(Subcommand)]
enum CategoryCommands {
    /// List categories with their slugs
    List,
    /// List the products of one category
    Products {
        slug: String,
        #[arg(long, default_value = "")]
        filter: String,
        #[arg(long, value_enum, default_value_t = SortKey::PriceAsc)]
        sort: SortKey,
    },
}

#[tokio::main]
async fn main() {
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    if cli.no_color {
        yansi::whenever(yansi::Condition::NEVER);
    }

    if cli.silent {
        api::set_silent(true);
    }

    let state = build_state_from_env(cli.env_file.as_deref());

    let Some(command) = cli.command else {
        start_server(state, &config::get_host(), config::get_port(), None).await;
        return;
    };

    match command {
        Commands::Serve { host, port, stylesheet } => {
            let host = host.unwrap_or_else(config::get_host);
            let port = port.unwrap_or_else(config::get_port);
            start_server(state, &host, port, stylesheet).await;
        }
        Commands::CheckConfig => {
            println!("{:<12} {}", "API", state.catalog.base_url());
            println!("{:<12} {:?}", "Timeout", state.catalog.timeout());
            println!(
                "{:<12} {}:{}",
                "Listen",
                config::get_host(),
                config::get_port()
            );
            let categories = FetchController::new("categories");
            categories.load(|| api::fetch_categories(&state.catalog)).await;
            match categories.state() {
                FetchState::Success(list) => {
                    println!(
                        "{}",
                        yansi::Paint::new(format!("Configuration looks valid ({} categories returned)", list.len())).green()
                    );
                }
                FetchState::Error(message) => {
                    eprintln!("{}: {}", yansi::Paint::new("Configuration appears invalid").red(), message);
                    process::exit(1);
                }
                FetchState::Idle | FetchState::Loading => {
                    eprintln!("{}", yansi::Paint::new("Catalog check did not complete").red());
                    process::exit(1);
                }
            }
        }
        Commands::Products { sub } => match sub {
            ProductCommands::List { filter, sort } => {
                let products = FetchController::new("products");
                products.load(|| api::fetch_products(&state.catalog)).await;
                let all = settled_or_exit(&products);
                print_products(&derive_view(&all, &filter, sort));
            }
            ProductCommands::Show { id } => {
                let product = FetchController::new("product");
                product.load(|| api::fetch_product(&state.catalog, id)).await;
                print_product(&settled_or_exit(&product));
            }
        },
        Commands::Categories { sub } => match sub {
            CategoryCommands::List => {
                print_categories(&load_categories(&state.catalog).await);
            }
            CategoryCommands::Products { slug, filter, sort } => {
                let categories = load_categories(&state.catalog).await;
                let Some(category) = api::find_by_slug(&categories, &slug) else {
                    eprintln!("{} '{}'", yansi::Paint::new("No category with slug").red(), slug);
                    process::exit(1);
                };
                println!("{}", yansi::Paint::new(&category.name).bold());
                let products = FetchController::new("category products");
                products
                    .load(|| api::fetch_products_by_category(&state.catalog, category.id))
                    .await;
                let all = settled_or_exit(&products);
                print_products(&derive_view(&all, &filter, sort));
            }
        },
    }
}
