// admin/server_fns.rs - Leptos server function declarations
//
// The browser talks to the storefront API directly; the only thing it needs
// from our server is where that API lives and the operator's token, which
// is stored in the `token` cookie set at login.
//
// IMPORTANT: This file must be compiled for BOTH ssr and hydrate features!

use leptos::prelude::*;

use crate::admin::config::AdminConfig;

/// Name of the cookie carrying the operator's bearer token
pub const TOKEN_COOKIE: &str = "token";

/// API config for the current operator session
#[server(SessionConfig, "/api")]
pub async fn session_config() -> Result<AdminConfig, ServerFnError> {
    use actix_web::HttpRequest;
    use leptos_actix::extract;
    use crate::admin::api::settings;

    let req: HttpRequest = extract()
        .await
        .map_err(|e| ServerFnError::new(format!("Failed to extract HttpRequest: {e}")))?;
    let cookie = req.cookie(TOKEN_COOKIE);
    if cookie.is_none() {
        tracing::debug!("No {} cookie on request, session gets no token", TOKEN_COOKIE);
    }

    settings::session_config_for(cookie.as_ref().map(|c| c.value()))
        .ok_or_else(|| ServerFnError::new("Storefront API is not configured"))
}
