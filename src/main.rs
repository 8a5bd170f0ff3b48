use crate::config::{AppConfig, Context};
use crate::db::init_store;
use crate::responses::error_to_response;
use crate::router::handle;
use astra::Server;
use std::net::SocketAddr;

mod client;
mod config;
mod db;
mod domain;
mod errors;
mod maps;
mod pipeline;
mod responses;
mod router;
mod templates;

#[cfg(test)]
mod tests;

fn main() {
    let config = AppConfig::from_env();
    println!("Launching treasure_map with config: {config:?}");

    let ctx = Context::new(config);

    // The store is set up exactly once, here, and validated before
    // any request is served; handlers never re-run setup defensively.
    if let Err(e) = init_store(&ctx.db) {
        eprintln!("Store initialization failed: {e}");
        std::process::exit(1);
    }

    if let Err(e) = std::fs::create_dir_all(&ctx.config.artifact_dir) {
        eprintln!(
            "Artifact directory {} unusable: {e}",
            ctx.config.artifact_dir.display()
        );
        std::process::exit(1);
    }

    let addr: SocketAddr = match ctx.config.addr.parse() {
        Ok(addr) => addr,
        Err(e) => {
            eprintln!("Bad listen address '{}': {e}", ctx.config.addr);
            std::process::exit(1);
        }
    };
    println!("Starting server at http://{addr}");

    let server = Server::bind(&addr).max_workers(8);

    let result = server.serve(move |req, _info| match handle(req, &ctx) {
        Ok(resp) => resp,
        Err(err) => error_to_response(err),
    });

    if let Err(e) = result {
        eprintln!("Server ended with error: {e}");
    }

    println!("Server shut down cleanly.");
}
