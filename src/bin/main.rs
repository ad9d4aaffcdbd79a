// Storefront admin dashboard server
//
// Serves the server-rendered dashboard plus the WASM bundle. The browser
// talks to the storefront API directly; this process only renders pages and
// answers the session_config server function.

#[cfg(feature = "ssr")]
#[actix_web::main]
async fn main() -> std::io::Result<()> {
    use actix_files::Files;
    use actix_web::{web, App, HttpServer};
    use leptos_actix::{generate_route_list, handle_server_fns, LeptosRoutes};
    use storefront_admin::admin::api::settings;
    use storefront_admin::admin::app::App as AdminApp;
    use storefront_admin::admin::config::AdminConfig;
    use tracing_subscriber::EnvFilter;

    tracing_subscriber::fmt()
        .with_target(false)
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    dotenv::dotenv().ok();
    let config = AdminConfig::from_env();
    tracing::info!(api = %config.api_base, images = %config.image_base, "Storefront API configured");

    // The dashboard starts either way; an unreachable API only shows up in the log
    match check_api(&config).await {
        Ok(categories) => tracing::info!("Storefront API reachable, {} categories", categories),
        Err(e) => tracing::warn!("Storefront API not reachable yet: {}", e),
    }
    settings::init_config(config);

    let conf = leptos_config::get_configuration(None)
        .map_err(|e| std::io::Error::new(std::io::ErrorKind::Other, e.to_string()))?;
    let leptos_options = conf.leptos_options;
    let addr = leptos_options.site_addr;

    tracing::info!("Dashboard listening on http://{}", addr);

    HttpServer::new(move || {
        let routes = generate_route_list(AdminApp);
        let options = leptos_options.clone();
        let site_root = options.site_root.to_string();

        App::new()
            .route("/api/{tail:.*}", handle_server_fns())
            .service(Files::new("/pkg", format!("{site_root}/pkg")))
            .leptos_routes(routes, {
                let options = options.clone();
                move || shell(options.clone())
            })
            .app_data(web::Data::new(options))
    })
    .bind(&addr)?
    .run()
    .await
}

/// HTML document wrapped around the server-rendered app
#[cfg(feature = "ssr")]
fn shell(options: leptos::config::LeptosOptions) -> impl leptos::prelude::IntoView {
    use leptos::prelude::*;
    use leptos_meta::MetaTags;
    use storefront_admin::admin::app::App as AdminApp;

    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone() />
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <AdminApp/>
            </body>
        </html>
    }
}

/// Number of categories the configured API reports
#[cfg(feature = "ssr")]
async fn check_api(
    config: &storefront_admin::admin::config::AdminConfig,
) -> Result<usize, storefront_admin::admin::AdminError> {
    use storefront_admin::admin::api::{HttpProductApi, ProductApi};

    let api = HttpProductApi::new(config.clone())?;
    Ok(api.list_categories().await?.len())
}

#[cfg(not(feature = "ssr"))]
fn main() {
    panic!("This binary requires the 'ssr' feature. Run with: cargo leptos watch");
}
