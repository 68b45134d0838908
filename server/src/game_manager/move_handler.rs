use crate::game_manager::AppState;
use pong_core::logic::Slot;

impl AppState {
    /// Applies a client-reported paddle position. The claimed slot is trusted
    /// even when it is not the sender's own seat.
    pub async fn handle_paddle_move(&self, player_id: &str, game_id: &str, slot: Slot, y: f64) {
        let Some(session) = self.session(game_id) else {
            tracing::debug!(player_id = %player_id, game_id = %game_id, "Paddle move for unknown game ignored");
            return;
        };

        let owns_slot = self
            .player_to_game
            .get(player_id)
            .is_some_and(|seat| seat.game_id == game_id && seat.slot == slot);
        if !owns_slot {
            tracing::debug!(player_id = %player_id, game_id = %game_id, slot = %slot, "Paddle move for a seat the sender does not hold");
        }

        let mut game = session.lock().await;
        if game.ended {
            return;
        }
        game.state.set_paddle_y(slot, y);
    }
}
