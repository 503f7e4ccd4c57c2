use crate::protocol::ClientMessage;
use crate::protocol::ServerMessage;
use parlor_core::CPU_DELAY;
use parlor_core::GameId;
use parlor_core::LEADERBOARD_TOP;
use parlor_lobby::ClientId;
use parlor_lobby::Queue;
use parlor_lobby::Status;
use parlor_lobby::Store;
use parlor_players::Cpu;
use parlor_records::Entry;
use parlor_records::Outcome;
use parlor_records::Scoreboard;
use parlor_rules::Difficulty;
use parlor_rules::GameKind;
use parlor_rules::Move;
use parlor_rules::Side;
use std::collections::HashMap;
use tokio::sync::mpsc::UnboundedReceiver;
use tokio::sync::mpsc::UnboundedSender;
use tokio::sync::mpsc::unbounded_channel;
use tokio::sync::oneshot;

/// Everything the hub can be asked to do.
///
/// Bridges send Connect, Inbound, and Disconnect. Think timers send
/// CpuTurn back through the same mailbox. Http routes send Scores with a
/// oneshot for the reply.
pub enum Command {
    Connect {
        client: ClientId,
        tx: UnboundedSender<String>,
    },
    Disconnect {
        client: ClientId,
    },
    Inbound {
        client: ClientId,
        text: String,
    },
    CpuTurn {
        game: GameId,
        side: Side,
    },
    Scores {
        kind: GameKind,
        reply: oneshot::Sender<Vec<Entry>>,
    },
}

/// Cheap clone handed to every bridge and route.
#[derive(Clone)]
pub struct HubHandle(UnboundedSender<Command>);

impl HubHandle {
    pub fn send(&self, command: Command) {
        let _ = self.0.send(command);
    }
}

/// The one task that owns queues, sessions, scores, and outbound
/// channels.
///
/// Commands run to completion in arrival order, so no board is ever
/// touched by two handlers at once. The only race in the design is a
/// think timer firing after the session moved on without it; [`Hub::cpu_turn`]
/// re-reads the session and discards the stale turn before anything is
/// applied.
pub struct Hub {
    rx: UnboundedReceiver<Command>,
    tx: UnboundedSender<Command>,
    connections: HashMap<ClientId, UnboundedSender<String>>,
    queue: Queue,
    store: Store,
    scoreboard: Scoreboard,
}

impl Hub {
    pub fn new() -> (Self, HubHandle) {
        let (tx, rx) = unbounded_channel();
        let handle = HubHandle(tx.clone());
        let hub = Self {
            rx,
            tx,
            connections: HashMap::new(),
            queue: Queue::new(),
            store: Store::new(),
            scoreboard: Scoreboard::new(),
        };
        (hub, handle)
    }

    /// Spawn the hub onto the runtime and keep only the handle.
    pub fn spawn() -> HubHandle {
        let (hub, handle) = Self::new();
        tokio::spawn(hub.run());
        handle
    }

    async fn run(mut self) {
        while let Some(command) = self.rx.recv().await {
            self.handle(command);
        }
    }

    fn handle(&mut self, command: Command) {
        match command {
            Command::Connect { client, tx } => self.connect(client, tx),
            Command::Disconnect { client } => self.disconnect(client),
            Command::Inbound { client, text } => self.inbound(client, text),
            Command::CpuTurn { game, side } => self.cpu_turn(game, side),
            Command::Scores { kind, reply } => {
                let _ = reply.send(self.scoreboard.top(kind, LEADERBOARD_TOP));
            }
        }
    }

    fn connect(&mut self, client: ClientId, tx: UnboundedSender<String>) {
        log::debug!("[hub] {} connected", client);
        self.connections.insert(client, tx);
    }

    /// Tear down everything the client held: their outbound channel,
    /// their queue ticket, and any live game, whose remaining human
    /// learns the opponent left. Aborted games never reach the
    /// scoreboard.
    fn disconnect(&mut self, client: ClientId) {
        log::debug!("[hub] {} disconnected", client);
        self.connections.remove(&client);
        self.queue.dequeue(client);
        if let Some(game) = self.store.active_id(client) {
            self.store.abort(game);
            if let Some(session) = self.store.get(game) {
                for peer in session.humans().filter(|peer| *peer != client) {
                    self.send(peer, ServerMessage::disconnected().to_json());
                }
            }
        }
    }

    fn inbound(&mut self, client: ClientId, text: String) {
        match serde_json::from_str(&text) {
            Ok(ClientMessage::JoinQueue { game_type }) => self.join(client, game_type),
            Ok(ClientMessage::LeaveQueue {}) => self.leave(client),
            Ok(ClientMessage::StartCpuGame {
                game_type,
                difficulty,
            }) => self.start_cpu(client, game_type, difficulty),
            Ok(ClientMessage::MakeMove { game_id, mv }) => self.make_move(client, game_id, mv),
            Err(err) => log::warn!("[hub] {} sent an unreadable frame: {}", client, err),
        }
    }

    fn join(&mut self, client: ClientId, kind: GameKind) {
        if self.store.active_id(client).is_some() {
            log::debug!("[hub] {} is already mid-game", client);
            return;
        }
        self.queue.enqueue(kind, client);
        if let Some((one, two)) = self.queue.try_match(kind) {
            let game = self.store.open_match(kind, one, two).id;
            self.announce(game);
        }
    }

    fn leave(&mut self, client: ClientId) {
        self.queue.dequeue(client);
    }

    fn start_cpu(&mut self, client: ClientId, kind: GameKind, difficulty: Difficulty) {
        if self.store.active_id(client).is_some() {
            log::debug!("[hub] {} is already mid-game", client);
            return;
        }
        self.queue.dequeue(client);
        let game = self.store.open_cpu(kind, client, difficulty).id;
        self.announce(game);
    }

    /// MATCH_FOUND for every human seat, then the opening position.
    fn announce(&self, game: GameId) {
        if let Some(session) = self.store.get(game) {
            for side in [Side::One, Side::Two] {
                if let Some(client) = session.seat(side).client() {
                    self.send(client, ServerMessage::matched(session, side).to_json());
                    self.send(client, ServerMessage::update(session).to_json());
                }
            }
        }
    }

    /// A move frame from a socket.
    ///
    /// Unknown game ids earn an ERROR. Frames from non-participants or
    /// out of turn are dropped without a reply, so a watcher probing
    /// game ids learns nothing about positions they are not in.
    fn make_move(&mut self, client: ClientId, game: GameId, value: serde_json::Value) {
        let (kind, side) = match self.store.get(game) {
            None => {
                self.send(client, ServerMessage::error("that game does not exist").to_json());
                return;
            }
            Some(session) => match session.side_of(client) {
                Some(side) if session.is_playing() && session.turn == side => {
                    (session.kind, side)
                }
                _ => return,
            },
        };
        match Move::decode(kind, &value) {
            Ok(mv) => self.play(game, side, mv, Some(client)),
            Err(err) => self.send(client, ServerMessage::error(err).to_json()),
        }
    }

    /// Validate against the rules, commit, broadcast, and arm the think
    /// timer when a cpu sits on the side to move next.
    fn play(&mut self, game: GameId, side: Side, mv: Move, culprit: Option<ClientId>) {
        let probe = match self.store.get(game) {
            Some(session) => session.board.apply(side, &mv),
            None => return,
        };
        let step = match probe {
            Ok(step) => step,
            Err(err) => {
                match culprit {
                    Some(client) => self.send(client, ServerMessage::error(err).to_json()),
                    None => log::error!("[hub] game {}: cpu move {} refused: {}", game, mv, err),
                }
                return;
            }
        };
        log::debug!("[hub] game {}: {} plays {}", game, side, mv);
        let verdict = step.board.verdict(step.next);
        let status = if verdict.is_over() {
            Status::Finished
        } else {
            Status::Playing
        };
        if self.store.update(game, step.board, step.next, status, verdict).is_none() {
            return;
        }
        if let Some(session) = self.store.get(game) {
            for client in session.humans() {
                self.send(client, ServerMessage::update(session).to_json());
            }
            match session.status {
                Status::Playing if session.seat(session.turn).is_cpu() => {
                    self.schedule(game, session.turn);
                }
                Status::Finished => {
                    log::debug!("[hub] game {} ends: {}", game, session.verdict);
                    for side in [Side::One, Side::Two] {
                        if let Some(outcome) = Outcome::of(session.verdict, side) {
                            self.scoreboard.record(session.seat(side), session.kind, outcome);
                        }
                    }
                    for client in session.humans() {
                        self.send(client, ServerMessage::over(session).to_json());
                    }
                }
                _ => {}
            }
        }
    }

    /// A think timer fired. The session is re-read before anything is
    /// applied: the human may have moved meanwhile, the game may have
    /// ended, or the opponent may have disconnected and aborted it.
    fn cpu_turn(&mut self, game: GameId, side: Side) {
        let choice = match self.store.get(game) {
            Some(session)
                if session.is_playing() && session.turn == side && session.seat(side).is_cpu() =>
            {
                Cpu::new(session.difficulty.unwrap_or_default()).choose(&session.board, side)
            }
            _ => {
                log::debug!("[hub] game {}: stale cpu turn discarded", game);
                return;
            }
        };
        if let Some(mv) = choice {
            self.play(game, side, mv, None);
        }
    }

    /// Arm the think timer. The move itself is chosen when the timer
    /// fires, not now, so the cpu answers the position it can actually
    /// see.
    fn schedule(&self, game: GameId, side: Side) {
        let tx = self.tx.clone();
        tokio::spawn(async move {
            tokio::time::sleep(CPU_DELAY).await;
            let _ = tx.send(Command::CpuTurn { game, side });
        });
    }

    fn send(&self, client: ClientId, json: String) {
        if let Some(tx) = self.connections.get(&client) {
            let _ = tx.send(json);
        }
    }
}
