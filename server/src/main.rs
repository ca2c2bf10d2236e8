#![recursion_limit = "256"]

use leptos::prelude::*;

mod errors;

use errors::{Error, Result};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::init();

    serve().await?;
    Ok(())
}

async fn serve() -> Result<()> {
    use leptos_axum::{generate_route_list, LeptosRoutes};

    let conf = get_configuration(None)
        .map_err(|error| Error::Configuration(error.to_string()))?;
    let addr = conf.leptos_options.site_addr;
    let leptos_options = conf.leptos_options;
    // Generate the list of routes in your Leptos App
    let routes = generate_route_list(app::App);
    let app_fn = {
        let leptos_options = leptos_options.clone();
        move || app::shell(leptos_options.clone())
    };

    let app = axum::Router::new()
        .leptos_routes(&leptos_options, routes, app_fn)
        .fallback(leptos_axum::file_and_error_handler(app::shell))
        .with_state(leptos_options.clone());

    log::info!("listening in {:?} on http://{}", &leptos_options.env, &addr);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|error| Error::Bind { error, addr })?;
    axum::serve(listener, app.into_make_service()).await?;
    Ok(())
}
