//! HTML5 games.

use serde::{Deserialize, Serialize};

use crate::media::{Animation, PhotoSize};
use crate::message::MessageEntity;
use crate::user::User;

/// A game: title, description, photo and an optional animation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Game {
    pub title: String,
    pub description: String,
    pub photo: Vec<PhotoSize>,
    /// Brief description or high scores, 0-4096 characters.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text_entities: Option<Vec<MessageEntity>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub animation: Option<Animation>,
}

/// Placeholder that carries no information; the game is identified by
/// the button that holds it.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CallbackGame {}

/// One row of the high score table.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameHighScore {
    /// Position in the table.
    pub position: i64,
    pub user: User,
    pub score: i64,
}
