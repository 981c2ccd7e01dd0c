use cfg_if::cfg_if;

// boilerplate to run in different modes
cfg_if! {
    if #[cfg(feature = "ssr")] {
        use leptos::*;
        use axum::Router;
        use kitchen_website::app::*;
        use kitchen_website::fallback::file_and_error_handler;
        use leptos_axum::{generate_route_list, LeptosRoutes};
        use tower_http::compression::CompressionLayer;

        fn log_level() -> log::Level {
            std::env::var("LOG_LEVEL")
                .ok()
                .and_then(|level| level.parse().ok())
                .unwrap_or(log::Level::Warn)
        }

        #[tokio::main]
        async fn main() {
            simple_logger::init_with_level(log_level()).expect("couldn't initialize logging");
            let conf = get_configuration(None).await.expect("couldn't read leptos configuration");
            let leptos_options = conf.leptos_options;
            let addr = leptos_options.site_addr;
            let routes = generate_route_list(App);

            log::info!("tenant API: {}", kitchen_website::config::api_base_url());

            let app = Router::new()
                .leptos_routes(&leptos_options, routes, App)
                .fallback(file_and_error_handler)
                .with_state(leptos_options)
                .layer(CompressionLayer::new());

            // `axum::Server` is a re-export of `hyper::Server`
            logging::log!("listening on http://{}", &addr);
            axum::Server::bind(&addr)
                .serve(app.into_make_service())
                .await
                .expect("server error");
        }
    } else {
        use kitchen_website::app::App;

        // client-side rendering without a server
        pub fn main() {
            console_error_panic_hook::set_once();
            let _ = console_log::init_with_level(log::Level::Info);
            leptos::mount_to_body(App);
        }
    }
}
