use crate::logic::state::{GameState, Slot, BALL_RADIUS, FIELD_HEIGHT, FIELD_WIDTH};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickOutcome {
    /// Side that won a point during this tick, if any.
    pub scored: Option<Slot>,
}

impl GameState {
    /// Advances the simulation by one tick: integrate, bounce off walls,
    /// bounce off paddles, then score and relaunch.
    pub fn step(&mut self) -> TickOutcome {
        let ball = &mut self.ball;
        ball.x += ball.vx;
        ball.y += ball.vy;

        if ball.y - BALL_RADIUS < 0.0 || ball.y + BALL_RADIUS > FIELD_HEIGHT {
            ball.vy = -ball.vy;
        }

        let left = &self.paddle1;
        if ball.x - BALL_RADIUS < left.x + left.width && left.spans(ball.y) {
            ball.vx = -ball.vx;
        }

        let right = &self.paddle2;
        if ball.x + BALL_RADIUS > right.x && right.spans(ball.y) {
            ball.vx = -ball.vx;
        }

        let scored = if ball.x < 0.0 {
            Some(Slot::Right)
        } else if ball.x > FIELD_WIDTH {
            Some(Slot::Left)
        } else {
            None
        };

        if let Some(side) = scored {
            match side {
                Slot::Left => self.score1 += 1,
                Slot::Right => self.score2 += 1,
            }
            self.ball.relaunch(side);
            log::trace!("side {side} scored, now {}:{}", self.score1, self.score2);
        }

        TickOutcome { scored }
    }
}
