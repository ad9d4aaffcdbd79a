use anyhow::Result;
use storefront_admin::admin::api::HttpProductApi;
use storefront_admin::admin::config::AdminConfig;
use storefront_admin::admin::format::{card_title, sale_price_label};
use storefront_admin::admin::ProductWorkflow;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .init();

    tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?
        .block_on(async_main())
}

async fn async_main() -> Result<()> {
    dotenv::dotenv().ok();
    let config = AdminConfig::from_env();

    println!("Checking storefront API at {}...", config.api_base);
    if config.auth_token.is_none() {
        println!("  (no STOREFRONT_API_TOKEN set, requests go out unauthenticated)");
    }

    let api = HttpProductApi::new(config.clone())?;

    // One mount, the same loads the dashboard runs
    let mut workflow = ProductWorkflow::new();
    workflow.mount(&api).await;

    println!("\nCategories:");
    match workflow.categories() {
        _ if workflow.categories_stale() => println!("✗ Category lookup failed (see log output)"),
        None => println!("✗ Categories were not loaded"),
        Some([]) => println!("  No categories defined"),
        Some(categories) => {
            println!("✓ {} categories", categories.len());
            for category in categories {
                println!("  - {} ({})", category.title, category.id);
            }
        }
    }

    println!("\nProducts:");
    if workflow.products_stale() || workflow.products().is_none() {
        println!("✗ Product listing failed (see log output)");
        return Ok(());
    }

    let products = workflow.products().unwrap_or_default();
    println!("✓ {} products", products.len());
    let known: Vec<&str> = workflow
        .categories()
        .unwrap_or_default()
        .iter()
        .map(|c| c.title.as_str())
        .collect();

    for product in products {
        let sale = sale_price_label(product).unwrap_or_else(|| "-".to_string());
        println!(
            "  - {}: {} | ${} ({}% off, now {}) | {}",
            product.id,
            card_title(product),
            product.price,
            product.discount_percentage,
            sale,
            config.image_url(&product.thumbnail)
        );
        if !known.is_empty() && !known.contains(&product.category.as_str()) {
            println!("    ! category {:?} is not in the category list", product.category);
        }
        if product.thumbnail.is_empty() {
            println!("    ! product has no thumbnail");
        }
    }

    Ok(())
}
