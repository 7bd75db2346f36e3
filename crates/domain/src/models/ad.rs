//! Ad domain model.
//!
//! An ad moves through three shapes: the raw [`CreateAdRequest`], the
//! validated [`NewAd`], and the storage forms ([`NewAdRecord`], [`AdRecord`],
//! [`AdListingRow`]) where weekdays are a joined string and hours are
//! minute offsets. [`AdListing`] is the decoded, public shape.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::{Validate, ValidationError, ValidationErrors};

use super::lenient::{lenient, lenient_integer, lenient_integers};
use super::validation::{ordered_issues, ValidationIssue};
use shared::validation::{validate_not_blank, validate_uuid, with_message};

pub const GAME_ID_MESSAGE: &str = "Informe o game";
pub const NAME_MESSAGE: &str = "Informe um nome!";
pub const YEARS_PLAYING_MESSAGE: &str = "Informe quantos anos que joga";
pub const DISCORD_MESSAGE: &str = "Informe o discord";
pub const WEEK_DAYS_MESSAGE: &str = "Informe o dia que costuma jogar";
pub const HOUR_START_MESSAGE: &str = "Informe a hora início";
pub const HOUR_END_MESSAGE: &str = "Informe a hora término";
pub const USE_VOICE_CHANNEL_MESSAGE: &str = "Informe se usa o chat de voz";

/// Field order used when reporting ad submission issues.
const AD_FIELDS: &[(&str, &str)] = &[
    ("game_id", "gameId"),
    ("name", "name"),
    ("years_playing", "yearsPlaying"),
    ("discord", "discord"),
    ("week_days", "weekDays"),
    ("hour_start", "hourStart"),
    ("hour_end", "hourEnd"),
    ("use_voice_channel", "useVoiceChannel"),
];

fn validate_player_name(name: &str) -> Result<(), ValidationError> {
    validate_not_blank(name).map_err(|err| with_message(err, NAME_MESSAGE))
}

/// Request payload for posting an ad. The game id comes from the path.
///
/// Fields are optional so that a missing or wrongly typed field is reported
/// as a validation issue on that field rather than a malformed body.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateAdRequest {
    #[validate(
        required(message = "Informe um nome!"),
        custom(function = "validate_player_name")
    )]
    #[serde(default, deserialize_with = "lenient")]
    pub name: Option<String>,

    #[validate(
        required(message = "Informe quantos anos que joga"),
        range(min = 1, message = "Informe quantos anos que joga")
    )]
    #[serde(default, deserialize_with = "lenient_integer")]
    pub years_playing: Option<i32>,

    #[validate(
        required(message = "Informe o discord"),
        length(min = 1, message = "Informe o discord")
    )]
    #[serde(default, deserialize_with = "lenient")]
    pub discord: Option<String>,

    #[validate(
        required(message = "Informe o dia que costuma jogar"),
        length(min = 1, message = "Informe o dia que costuma jogar")
    )]
    #[serde(default, deserialize_with = "lenient_integers")]
    pub week_days: Option<Vec<i32>>,

    #[validate(
        required(message = "Informe a hora início"),
        length(min = 1, message = "Informe a hora início")
    )]
    #[serde(default, deserialize_with = "lenient")]
    pub hour_start: Option<String>,

    #[validate(
        required(message = "Informe a hora término"),
        length(min = 1, message = "Informe a hora término")
    )]
    #[serde(default, deserialize_with = "lenient")]
    pub hour_end: Option<String>,

    #[validate(required(message = "Informe se usa o chat de voz"))]
    #[serde(default, deserialize_with = "lenient")]
    pub use_voice_channel: Option<bool>,
}

/// A validated ad submission. Times are still `"HH:MM"` text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewAd {
    pub game_id: Uuid,
    /// Trimmed.
    pub name: String,
    pub years_playing: i32,
    pub discord: String,
    pub week_days: Vec<i32>,
    pub hour_start: String,
    pub hour_end: String,
    pub use_voice_channel: bool,
}

impl CreateAdRequest {
    /// Checks every rule, including the path game id, and returns all
    /// violations in field order.
    pub fn issues(&self, game_id: &str) -> Vec<ValidationIssue> {
        let mut errors = match self.validate() {
            Ok(()) => ValidationErrors::new(),
            Err(errors) => errors,
        };

        if let Err(err) = validate_uuid(game_id) {
            errors.add("game_id", with_message(err, GAME_ID_MESSAGE));
        }

        ordered_issues(&errors, AD_FIELDS)
    }

    /// Validates the submission and converts it into a [`NewAd`].
    pub fn into_new_ad(self, game_id: &str) -> Result<NewAd, Vec<ValidationIssue>> {
        let issues = self.issues(game_id);
        match (
            Uuid::parse_str(game_id).ok(),
            self.name,
            self.years_playing,
            self.discord,
            self.week_days,
            self.hour_start,
            self.hour_end,
            self.use_voice_channel,
        ) {
            (
                Some(game_id),
                Some(name),
                Some(years_playing),
                Some(discord),
                Some(week_days),
                Some(hour_start),
                Some(hour_end),
                Some(use_voice_channel),
            ) if issues.is_empty() => Ok(NewAd {
                game_id,
                name: name.trim().to_string(),
                years_playing,
                discord,
                week_days,
                hour_start,
                hour_end,
                use_voice_channel,
            }),
            _ => Err(issues),
        }
    }
}

/// Storage-ready ad: weekdays joined, hours as minutes since midnight.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewAdRecord {
    pub game_id: Uuid,
    pub name: String,
    pub years_playing: i32,
    pub discord: String,
    pub week_days: String,
    pub hour_start: i32,
    pub hour_end: i32,
    pub use_voice_channel: bool,
}

/// A persisted ad in its stored form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdRecord {
    pub id: Uuid,
    pub game_id: Uuid,
    pub name: String,
    pub years_playing: i32,
    pub discord: String,
    pub week_days: String,
    pub hour_start: i32,
    pub hour_end: i32,
    pub use_voice_channel: bool,
    pub created_at: DateTime<Utc>,
}

/// The fields a listing may read. Has no `discord` and no `game_id`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdListingRow {
    pub id: Uuid,
    pub name: String,
    pub week_days: String,
    pub use_voice_channel: bool,
    pub years_playing: i32,
    pub hour_start: i32,
    pub hour_end: i32,
}

/// Public listing entry with decoded weekdays and hours.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AdListing {
    pub id: Uuid,
    pub name: String,
    pub week_days: Vec<String>,
    pub use_voice_channel: bool,
    pub years_playing: i32,
    pub hour_start: String,
    pub hour_end: String,
}

/// Contact handle of a single ad.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AdDiscord {
    pub discord: String,
}
