use crate::hub::Command;
use crate::hub::HubHandle;
use actix_web::HttpRequest;
use actix_web::HttpResponse;
use actix_web::Responder;
use actix_web::web;
use futures::StreamExt;
use parlor_lobby::ClientId;
use tokio::sync::mpsc::unbounded_channel;

/// Upgrade the request to a websocket and wire the socket into the hub.
///
/// Each connection gets a fresh opaque id; nothing about identity
/// survives a reconnect.
pub async fn ws(
    hub: web::Data<HubHandle>,
    body: web::Payload,
    req: HttpRequest,
) -> impl Responder {
    match actix_ws::handle(&req, body) {
        Ok((response, session, stream)) => {
            pump(hub.get_ref().clone(), session, stream);
            response.map_into_left_body()
        }
        Err(e) => HttpResponse::InternalServerError()
            .body(e.to_string())
            .map_into_right_body(),
    }
}

/// One task per socket, pumping both directions until either side
/// hangs up.
///
/// Outbound frames arrive on a channel the hub holds the other end of.
/// Inbound text goes to the hub untouched; parsing and every game rule
/// live on the far side of the mailbox. The Disconnect at the bottom
/// runs on every exit path, so the hub always learns the socket died.
fn pump(hub: HubHandle, mut session: actix_ws::Session, mut streams: actix_ws::MessageStream) {
    let client = ClientId::default();
    let (tx, mut rx) = unbounded_channel::<String>();
    hub.send(Command::Connect { client, tx });
    log::debug!("[bridge {}] connected", client);
    actix_web::rt::spawn(async move {
        'sesh: loop {
            tokio::select! {
                biased;
                msg = rx.recv() => match msg {
                    Some(json) => if session.text(json).await.is_err() { break 'sesh },
                    None => break 'sesh,
                },
                msg = streams.next() => match msg {
                    Some(Ok(actix_ws::Message::Text(text))) => hub.send(Command::Inbound { client, text: text.to_string() }),
                    Some(Ok(actix_ws::Message::Close(_))) => break 'sesh,
                    Some(Err(_)) => break 'sesh,
                    None => break 'sesh,
                    _ => continue 'sesh,
                },
            }
        }
        hub.send(Command::Disconnect { client });
        log::debug!("[bridge {}] disconnected", client);
    });
}
