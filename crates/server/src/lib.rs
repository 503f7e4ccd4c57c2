//! Parlor Game Server
//!
//! Live head-to-head parlor games over websockets: six rule engines, a
//! FIFO matchmaking queue, cpu opponents on a think timer, and an
//! in-memory leaderboard. One hub task owns all mutable state; sockets
//! and http routes only ever talk to it through its mailbox.
//!
//! ## Architecture
//!
//! - [`protocol`] — the json frames browsers and server exchange
//! - [`hub`] — single-owner dispatcher for queues, sessions, scores
//! - [`bridge`] — per-socket pump between actix-ws and the hub

pub mod bridge;
pub mod hub;
pub mod protocol;

pub use hub::Command;
pub use hub::Hub;
pub use hub::HubHandle;
pub use protocol::ClientMessage;
pub use protocol::ServerMessage;

use actix_cors::Cors;
use actix_web::App;
use actix_web::HttpResponse;
use actix_web::HttpServer;
use actix_web::Responder;
use actix_web::middleware::Logger;
use actix_web::web;
use parlor_rules::GameKind;
use tokio::sync::oneshot;

async fn health() -> impl Responder {
    HttpResponse::Ok().body("ok")
}

/// Top rows for one game, straight from the hub's scoreboard.
async fn leaderboard(hub: web::Data<HubHandle>, path: web::Path<String>) -> impl Responder {
    let kind = match GameKind::try_from(path.as_str()) {
        Ok(kind) => kind,
        Err(e) => return HttpResponse::BadRequest().body(e),
    };
    let (reply, rx) = oneshot::channel();
    hub.send(Command::Scores { kind, reply });
    match rx.await {
        Ok(entries) => HttpResponse::Ok().json(entries),
        Err(_) => HttpResponse::InternalServerError().body("hub unavailable"),
    }
}

#[rustfmt::skip]
pub async fn run() -> Result<(), std::io::Error> {
    let hub = web::Data::new(Hub::spawn());
    log::info!("starting parlor server");
    HttpServer::new(move || {
        App::new()
            .wrap(Logger::new("%r %s %Ts"))
            .wrap(
                Cors::default()
                    .allow_any_origin()
                    .allow_any_method()
                    .allow_any_header(),
            )
            .app_data(hub.clone())
            .route("/health", web::get().to(health))
            .route("/ws", web::get().to(bridge::ws))
            .service(
                web::scope("/api")
                    .route("/leaderboard/{kind}", web::get().to(leaderboard)),
            )
    })
    .workers(6)
    .bind(std::env::var("BIND_ADDR").unwrap_or_else(|_| String::from("127.0.0.1:8080")))?
    .run()
    .await
}
