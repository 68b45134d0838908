use crate::game_manager::{GameSession, SharedSession};
use shared::ServerMessage;
use std::time::Duration;
use tokio::time::{interval, MissedTickBehavior};

/// Drives one session at a fixed cadence until teardown marks it ended.
pub async fn run_ticker(session: SharedSession, period: Duration) {
    let mut timer = interval(period);
    timer.set_missed_tick_behavior(MissedTickBehavior::Skip);

    // The first tick fires immediately
    timer.tick().await;

    loop {
        timer.tick().await;

        let mut game = session.lock().await;
        if game.ended {
            tracing::debug!(game_id = %game.id, ticks = game.ticks, "Ticker stopped");
            break;
        }
        game.tick();
    }
}

impl GameSession {
    /// One physics step followed by a full-state broadcast.
    pub fn tick(&mut self) {
        let outcome = self.state.step();
        self.ticks += 1;

        if let Some(side) = outcome.scored {
            let score = format!("{}:{}", self.state.score1, self.state.score2);
            tracing::info!(
                game_id = %self.id,
                scorer = %self.state.name(side),
                score = %score,
                "Point scored"
            );
        }

        self.broadcast(&ServerMessage::GameState(self.state.clone()));
    }
}
