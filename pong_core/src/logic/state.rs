use serde::{Deserialize, Serialize};

pub const FIELD_WIDTH: f64 = 800.0;
pub const FIELD_HEIGHT: f64 = 400.0;

/// Half of the ball's edge length; collision checks use it as a radius.
pub const BALL_RADIUS: f64 = 8.0;
pub const BALL_SPEED_X: f64 = 4.0;
pub const BALL_SPEED_Y: f64 = 2.0;

pub const PADDLE_WIDTH: f64 = 10.0;
pub const PADDLE_HEIGHT: f64 = 80.0;
pub const LEFT_PADDLE_X: f64 = 10.0;
pub const RIGHT_PADDLE_X: f64 = 780.0;
pub const PADDLE_START_Y: f64 = (FIELD_HEIGHT - PADDLE_HEIGHT) / 2.0;

/// A participant's seat within a session. Slot 1 plays the left paddle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum Slot {
    Left,
    Right,
}

impl Slot {
    #[must_use]
    pub const fn number(self) -> u8 {
        match self {
            Self::Left => 1,
            Self::Right => 2,
        }
    }
}

impl From<Slot> for u8 {
    fn from(slot: Slot) -> Self {
        slot.number()
    }
}

impl TryFrom<u8> for Slot {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(Self::Left),
            2 => Ok(Self::Right),
            other => Err(format!("invalid player slot {other}, expected 1 or 2")),
        }
    }
}

impl std::fmt::Display for Slot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.number())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Ball {
    pub x: f64,
    pub y: f64,
    pub vx: f64,
    pub vy: f64,
}

impl Ball {
    /// Centered ball heading right.
    #[must_use]
    pub fn kickoff() -> Self {
        Self {
            x: FIELD_WIDTH / 2.0,
            y: FIELD_HEIGHT / 2.0,
            vx: BALL_SPEED_X,
            vy: BALL_SPEED_Y,
        }
    }

    /// Recenters the ball and serves it toward the `toward` half of the field.
    pub fn relaunch(&mut self, toward: Slot) {
        *self = Self::kickoff();
        if toward == Slot::Left {
            self.vx = -BALL_SPEED_X;
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Paddle {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Paddle {
    #[must_use]
    pub const fn new(x: f64) -> Self {
        Self {
            x,
            y: PADDLE_START_Y,
            width: PADDLE_WIDTH,
            height: PADDLE_HEIGHT,
        }
    }

    /// Strictly inside the paddle's vertical span.
    #[must_use]
    pub fn spans(&self, y: f64) -> bool {
        y > self.y && y < self.y + self.height
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerNames {
    #[serde(rename = "1")]
    pub left: String,
    #[serde(rename = "2")]
    pub right: String,
}

/// Authoritative state of one match. Serializes as the `gameState` payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameState {
    pub ball: Ball,
    pub paddle1: Paddle,
    pub paddle2: Paddle,
    pub score1: u32,
    pub score2: u32,
    pub players: PlayerNames,
}

impl GameState {
    pub fn new(left: impl Into<String>, right: impl Into<String>) -> Self {
        Self {
            ball: Ball::kickoff(),
            paddle1: Paddle::new(LEFT_PADDLE_X),
            paddle2: Paddle::new(RIGHT_PADDLE_X),
            score1: 0,
            score2: 0,
            players: PlayerNames {
                left: left.into(),
                right: right.into(),
            },
        }
    }

    #[must_use]
    pub const fn paddle(&self, slot: Slot) -> &Paddle {
        match slot {
            Slot::Left => &self.paddle1,
            Slot::Right => &self.paddle2,
        }
    }

    pub const fn paddle_mut(&mut self, slot: Slot) -> &mut Paddle {
        match slot {
            Slot::Left => &mut self.paddle1,
            Slot::Right => &mut self.paddle2,
        }
    }

    #[must_use]
    pub const fn score(&self, slot: Slot) -> u32 {
        match slot {
            Slot::Left => self.score1,
            Slot::Right => self.score2,
        }
    }

    /// Client-reported paddle position. Not clamped to the field.
    pub const fn set_paddle_y(&mut self, slot: Slot, y: f64) {
        self.paddle_mut(slot).y = y;
    }

    #[must_use]
    pub fn name(&self, slot: Slot) -> &str {
        match slot {
            Slot::Left => &self.players.left,
            Slot::Right => &self.players.right,
        }
    }
}
