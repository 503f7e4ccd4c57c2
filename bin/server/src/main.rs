//! Parlor Server Binary
//!
//! Hosts websocket game traffic and leaderboard queries on BIND_ADDR
//! (default 127.0.0.1:8080).

#[tokio::main]
async fn main() {
    parlor_core::log();
    parlor_core::kys();
    parlor_server::run().await.unwrap();
}
