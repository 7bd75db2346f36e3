//! Game domain model.

use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use super::lenient::lenient;
use super::validation::{ordered_issues, ValidationIssue};

pub const GAME_TITLE_MESSAGE: &str = "Informe o nome do game";
pub const GAME_BANNER_MESSAGE: &str = "Informe a foto de capa do game";

/// Field order used when reporting game submission issues.
const GAME_FIELDS: &[(&str, &str)] = &[("game", "game"), ("banner_url", "bannerUrl")];

/// A game in the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Game {
    pub id: Uuid,
    pub title: String,
    pub banner_url: String,
}

/// A game together with the number of ads posted for it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameSummary {
    pub id: Uuid,
    pub title: String,
    pub banner_url: String,
    pub ad_count: i64,
}

/// Request payload for registering a game.
///
/// The title arrives as `game` and is stored as `title`.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateGameRequest {
    #[validate(
        required(message = "Informe o nome do game"),
        length(min = 1, message = "Informe o nome do game")
    )]
    #[serde(default, deserialize_with = "lenient")]
    pub game: Option<String>,

    #[validate(
        required(message = "Informe a foto de capa do game"),
        length(min = 1, message = "Informe a foto de capa do game")
    )]
    #[serde(default, deserialize_with = "lenient")]
    pub banner_url: Option<String>,
}

/// A validated game submission, ready for storage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewGame {
    pub title: String,
    pub banner_url: String,
}

impl CreateGameRequest {
    /// Checks every rule and returns all violations in field order.
    pub fn issues(&self) -> Vec<ValidationIssue> {
        match self.validate() {
            Ok(()) => Vec::new(),
            Err(errors) => ordered_issues(&errors, GAME_FIELDS),
        }
    }

    /// Validates the submission and converts it into a [`NewGame`].
    pub fn into_new_game(self) -> Result<NewGame, Vec<ValidationIssue>> {
        let issues = self.issues();
        match (self.game, self.banner_url) {
            (Some(title), Some(banner_url)) if issues.is_empty() => Ok(NewGame { title, banner_url }),
            _ => Err(issues),
        }
    }
}
