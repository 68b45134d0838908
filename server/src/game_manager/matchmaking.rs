use crate::game_manager::{
    simulation::run_ticker, AppState, GameSession, Participant, Seat, SessionHandle,
};
use pong_core::logic::Slot;
use shared::{display_name, ServerMessage, WAITING_MESSAGE};
use std::sync::Arc;
use tokio::sync::Mutex;

impl AppState {
    pub async fn find_match(&self, player_id: &str, nickname: Option<String>) {
        if self.player_to_game.contains_key(player_id) {
            tracing::warn!(player_id = %player_id, "Player already in game, ignoring joinGame");
            return;
        }

        let Some(tx) = self.players.get(player_id).map(|p| p.tx.clone()) else {
            tracing::warn!(player_id = %player_id, "joinGame from unregistered connection");
            return;
        };

        let arrival = Participant {
            id: player_id.to_string(),
            nickname: display_name(nickname.as_deref()).to_string(),
            tx,
        };

        // Held until the new session is registered so a racing disconnect
        // sees either the waiting slot or the seat, never neither.
        let mut waiting = self.waiting.lock().await;

        match waiting.take() {
            Some(current) if current.id == arrival.id => {
                tracing::debug!(player_id = %player_id, "Player already waiting");
                *waiting = Some(current);
            }
            Some(opponent) => {
                tracing::info!(player_id = %player_id, opponent_id = %opponent.id, "Opponent found, starting game");
                self.start_game(opponent, arrival).await;
            }
            None => {
                tracing::info!(player_id = %player_id, nickname = %arrival.nickname, "No opponent found, waiting");
                arrival.send(ServerMessage::Waiting {
                    message: WAITING_MESSAGE.to_string(),
                });
                *waiting = Some(arrival);
            }
        }
    }

    async fn start_game(&self, left: Participant, right: Participant) {
        let game_id = format!("{}#{}", left.id, right.id);
        let left_id = left.id.clone();
        let right_id = right.id.clone();

        let session = Arc::new(Mutex::new(GameSession::new(game_id.clone(), left, right)));

        // The ticker's first tick blocks on this until both players know they are playing.
        let game = session.lock().await;

        let ticker = tokio::spawn(run_ticker(
            Arc::clone(&session),
            self.simulation.tick_interval(),
        ));

        self.games.insert(
            game_id.clone(),
            SessionHandle {
                session: Arc::clone(&session),
                ticker,
            },
        );
        self.player_to_game.insert(
            left_id.clone(),
            Seat {
                game_id: game_id.clone(),
                slot: Slot::Left,
            },
        );
        self.player_to_game.insert(
            right_id.clone(),
            Seat {
                game_id: game_id.clone(),
                slot: Slot::Right,
            },
        );

        tracing::info!(game_id = %game_id, left = %left_id, right = %right_id, "Created new game session");

        for slot in [Slot::Left, Slot::Right] {
            game.participant(slot).send(ServerMessage::StartGame {
                game_id: game_id.clone(),
                player: slot,
                game_state: game.state.clone(),
            });
        }
    }
}
