use pong_core::logic::{GameState, Slot};
use serde::{de::IgnoredAny, Deserialize, Deserializer, Serialize};

pub const DEFAULT_NICKNAME: &str = "Anon";
pub const WAITING_MESSAGE: &str = "Waiting for an opponent...";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ClientMessage {
    JoinGame {
        #[serde(
            default,
            deserialize_with = "lenient_nickname",
            skip_serializing_if = "Option::is_none"
        )]
        nickname: Option<String>,
    },
    #[serde(rename_all = "camelCase")]
    PaddleMove { game_id: String, player: Slot, y: f64 },
}

pub fn display_name(nickname: Option<&str>) -> &str {
    nickname.unwrap_or(DEFAULT_NICKNAME)
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ServerMessage {
    Waiting {
        message: String,
    },
    #[serde(rename_all = "camelCase")]
    StartGame {
        game_id: String,
        player: Slot,
        game_state: GameState,
    },
    GameState(GameState),
    GameOver,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum Nickname {
    Text(String),
    Other(IgnoredAny),
}

/// Anything other than a non-empty string counts as "no nickname".
fn lenient_nickname<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Nickname::deserialize(deserializer)? {
        Nickname::Text(name) if !name.is_empty() => Some(name),
        Nickname::Text(_) | Nickname::Other(_) => None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(json: &str) -> ClientMessage {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn join_with_nickname() {
        assert_eq!(
            parse(r#"{"joinGame":{"nickname":"Ann"}}"#),
            ClientMessage::JoinGame {
                nickname: Some("Ann".to_string())
            }
        );
    }

    #[test]
    fn join_tolerates_bad_nicknames() {
        for json in [
            r#"{"joinGame":{}}"#,
            r#"{"joinGame":{"nickname":null}}"#,
            r#"{"joinGame":{"nickname":""}}"#,
            r#"{"joinGame":{"nickname":42}}"#,
            r#"{"joinGame":{"nickname":{"first":"Ann"}}}"#,
        ] {
            assert_eq!(parse(json), ClientMessage::JoinGame { nickname: None }, "{json}");
        }
        assert_eq!(display_name(None), "Anon");
        assert_eq!(display_name(Some("Bob")), "Bob");
    }

    #[test]
    fn paddle_move_fields() {
        assert_eq!(
            parse(r#"{"paddleMove":{"gameId":"a#b","player":2,"y":120.5}}"#),
            ClientMessage::PaddleMove {
                game_id: "a#b".to_string(),
                player: Slot::Right,
                y: 120.5,
            }
        );
    }

    #[test]
    fn paddle_move_rejects_unknown_slot() {
        let result =
            serde_json::from_str::<ClientMessage>(r#"{"paddleMove":{"gameId":"g","player":3,"y":1}}"#);
        assert!(result.is_err());
    }

    #[test]
    fn server_events_use_camel_case_names() {
        let start = ServerMessage::StartGame {
            game_id: "a#b".to_string(),
            player: Slot::Left,
            game_state: GameState::new("Ann", "Bob"),
        };
        let json = serde_json::to_value(&start).unwrap();
        assert_eq!(json["startGame"]["gameId"], "a#b");
        assert_eq!(json["startGame"]["player"], 1);
        assert_eq!(json["startGame"]["gameState"]["score2"], 0);

        let tick = serde_json::to_value(ServerMessage::GameState(GameState::new("Ann", "Bob"))).unwrap();
        assert_eq!(tick["gameState"]["ball"]["x"], 400.0);

        assert_eq!(serde_json::to_string(&ServerMessage::GameOver).unwrap(), r#""gameOver""#);

        let waiting = ServerMessage::Waiting {
            message: WAITING_MESSAGE.to_string(),
        };
        assert_eq!(
            serde_json::to_value(&waiting).unwrap()["waiting"]["message"],
            WAITING_MESSAGE
        );
    }
}
