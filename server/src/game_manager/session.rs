use pong_core::logic::{GameState, Slot};
use shared::ServerMessage;
use std::sync::Arc;
use tokio::{
    sync::{mpsc, Mutex},
    task::JoinHandle,
};

pub type Tx = mpsc::UnboundedSender<ServerMessage>;

pub struct Player {
    pub tx: Tx,
}

/// A connection that has asked to play, with the name it joined under.
#[derive(Debug, Clone)]
pub struct Participant {
    pub id: String,
    pub nickname: String,
    pub tx: Tx,
}

impl Participant {
    /// Fire-and-forget; a closed connection just drops the message.
    pub fn send(&self, msg: ServerMessage) {
        let _ = self.tx.send(msg);
    }
}

/// Where a paired connection sits.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Seat {
    pub game_id: String,
    pub slot: Slot,
}

pub struct GameSession {
    pub id: String,
    pub left: Participant,
    pub right: Participant,
    pub state: GameState,
    pub ticks: u64,
    /// Set once under the session lock by teardown; the ticker stops on seeing it.
    pub ended: bool,
}

impl GameSession {
    pub fn new(id: String, left: Participant, right: Participant) -> Self {
        let state = GameState::new(left.nickname.clone(), right.nickname.clone());
        Self {
            id,
            left,
            right,
            state,
            ticks: 0,
            ended: false,
        }
    }

    pub fn participant(&self, slot: Slot) -> &Participant {
        match slot {
            Slot::Left => &self.left,
            Slot::Right => &self.right,
        }
    }

    pub fn broadcast(&self, msg: &ServerMessage) {
        self.left.send(msg.clone());
        self.right.send(msg.clone());
    }
}

pub type SharedSession = Arc<Mutex<GameSession>>;

/// Registry entry: the live session plus the task ticking it.
pub struct SessionHandle {
    pub session: SharedSession,
    pub ticker: JoinHandle<()>,
}
