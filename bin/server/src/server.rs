//! HTTP host for the Leptos application.

use crate::app::App;
use crate::config::ServerConfig;
use crate::error::ServerError;
use axum::Router;
use leptos::prelude::*;
use leptos_axum::{LeptosRoutes, generate_route_list};
use leptos_meta::MetaTags;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

/// Builds the router and serves it on the configured site address.
///
/// Runs until the server stops.
pub async fn run(config: ServerConfig) -> nodebird_core::Result<(), ServerError> {
    let conf = get_configuration(None).map_err(|e| ServerError::LeptosConfig {
        details: e.to_string(),
    })?;
    let leptos_options = conf.leptos_options;
    let addr = leptos_options.site_addr;
    let routes = generate_route_list(App);

    let app = Router::new()
        .leptos_routes(&leptos_options, routes, {
            let leptos_options = leptos_options.clone();
            move || shell(leptos_options.clone())
        })
        .fallback(leptos_axum::file_and_error_handler::<LeptosOptions, _>(
            shell,
        ))
        .nest_service("/pkg", ServeDir::new(&config.assets.dir))
        .layer(TraceLayer::new_for_http())
        .with_state(leptos_options);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| ServerError::Bind {
            addr: addr.to_string(),
            details: e.to_string(),
        })?;

    tracing::info!(assets_dir = %config.assets.dir, "listening on http://{}", addr);

    axum::serve(listener, app.into_make_service())
        .await
        .map_err(|e| ServerError::Serve {
            details: e.to_string(),
        })?;

    Ok(())
}

/// HTML document wrapping the application.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="ko">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <link rel="stylesheet" href="/pkg/nodebird.css"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}
