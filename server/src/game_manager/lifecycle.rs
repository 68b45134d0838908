use crate::game_manager::{AppState, Player, Tx};
use pong_core::logic::Slot;
use shared::ServerMessage;

impl AppState {
    pub fn add_player(&self, id: String, tx: Tx) {
        tracing::info!(player_id = %id, "Player connected");
        self.players.insert(id, Player { tx });
    }

    pub async fn remove_player(&self, id: &str) {
        tracing::info!(player_id = %id, "Removing player from AppState");
        self.players.remove(id);

        let game_id = {
            let mut waiting = self.waiting.lock().await;
            if waiting.as_ref().is_some_and(|p| p.id == id) {
                *waiting = None;
                tracing::info!(player_id = %id, "Player removed from waiting slot");
                return;
            }
            self.player_to_game.get(id).map(|seat| seat.game_id.clone())
        };

        if let Some(game_id) = game_id {
            tracing::info!(player_id = %id, game_id = %game_id, "Player was in a game, cleaning up session");
            self.end_session(&game_id).await;
        }
    }

    /// Tears a session down. Once this returns the session sends nothing more.
    pub async fn end_session(&self, game_id: &str) {
        let Some((_, handle)) = self.games.remove(game_id) else {
            tracing::debug!(game_id = %game_id, "Session already ended");
            return;
        };

        let mut game = handle.session.lock().await;
        game.ended = true;
        for slot in [Slot::Left, Slot::Right] {
            self.player_to_game.remove(&game.participant(slot).id);
        }
        game.broadcast(&ServerMessage::GameOver);

        tracing::info!(
            game_id = %game_id,
            ticks = game.ticks,
            score1 = game.state.score1,
            score2 = game.state.score2,
            "Session ended"
        );
        drop(game);

        handle.ticker.abort();
    }
}
