use crate::config::SimulationConfig;
use dashmap::DashMap;
use shared::ClientMessage;
use tokio::sync::Mutex;

pub mod lifecycle;
pub mod matchmaking;
pub mod move_handler;
pub mod session;
pub mod simulation;

pub use session::{GameSession, Participant, Player, Seat, SessionHandle, SharedSession, Tx};

pub struct AppState {
    pub players: DashMap<String, Player>,
    pub games: DashMap<String, SessionHandle>,
    pub player_to_game: DashMap<String, Seat>,
    /// At most one unpaired participant.
    pub waiting: Mutex<Option<Participant>>,
    pub simulation: SimulationConfig,
}

impl AppState {
    pub fn new(simulation: SimulationConfig) -> Self {
        Self {
            players: DashMap::new(),
            games: DashMap::new(),
            player_to_game: DashMap::new(),
            waiting: Mutex::new(None),
            simulation,
        }
    }

    pub async fn dispatch(&self, player_id: &str, msg: ClientMessage) {
        match msg {
            ClientMessage::JoinGame { nickname } => self.find_match(player_id, nickname).await,
            ClientMessage::PaddleMove { game_id, player, y } => {
                self.handle_paddle_move(player_id, &game_id, player, y)
                    .await;
            }
        }
    }

    /// Clones the session out of the registry so no map guard is held across an await.
    pub fn session(&self, game_id: &str) -> Option<SharedSession> {
        self.games
            .get(game_id)
            .map(|handle| SharedSession::clone(&handle.session))
    }
}
