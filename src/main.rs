#![recursion_limit = "256"]

#[cfg(feature = "ssr")]
#[actix_web::main]
async fn main() -> std::io::Result<()> {
    use actix_files::Files;
    use actix_web::middleware::Logger;
    use actix_web::{App, HttpServer, web::Data};
    use leptos::config::get_configuration;
    use leptos::prelude::*;
    use leptos_actix::{LeptosRoutes, generate_route_list};

    use educonnect::config::ServerConfig;
    use educonnect::frontend::{App as Portal, shell};
    use educonnect::web::SecurityHeaders;

    let conf = get_configuration(None).map_err(std::io::Error::other)?;
    let defaults = conf.leptos_options.clone();
    let config = ServerConfig::from_env(defaults.site_addr, &defaults.site_root)
        .map_err(std::io::Error::other)?;

    env_logger::Builder::new()
        .parse_filters(&config.log_filter)
        .init();

    let routes = generate_route_list(Portal);
    let bind_addr = config.bind_addr;
    let site_options = config.leptos_options(&defaults);
    let pkg_dir = config.pkg_dir(&site_options.site_pkg_dir);
    log::info!("listening on http://{bind_addr}");

    HttpServer::new(move || {
        let leptos_options = site_options.clone();
        let pkg_dir = pkg_dir.clone();

        App::new()
            .wrap(Logger::default())
            .wrap(SecurityHeaders)
            .service(Files::new("/pkg", pkg_dir))
            .leptos_routes(routes.clone(), {
                let leptos_options = leptos_options.clone();
                move || shell(leptos_options.clone())
            })
            .app_data(Data::new(leptos_options))
    })
    .bind(bind_addr)?
    .run()
    .await
}

#[cfg(not(feature = "ssr"))]
pub fn main() {
    // Client-side code is started through `educonnect::hydrate`.
}
