//! Session configuration.
//!
//! Read once at startup and immutable for the rest of the session:
//! - `game_count`: how many games (pairs) to deal
//! - `repeat_games`: synthesize versioned copies when the catalog is short
//! - `dismiss_mode`: how a mismatched pair is cleared
//! - `seed`: optional fixed seed for reproducible deals
//! - `locale`: message language

use serde::{Deserialize, Serialize};

/// How a revealed, mismatched pair gets hidden again.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DismissMode {
    /// Card clicks toggle. A single revealed card can be hidden again, and
    /// the next card click after a mismatch clears both cards.
    #[default]
    Toggle,
    /// A background click clears a mismatch. Card clicks never hide a card.
    Background,
}

impl DismissMode {
    /// Game count used when none (or a malformed one) is configured.
    #[must_use]
    pub const fn default_game_count(self) -> usize {
        match self {
            DismissMode::Toggle => 4,
            DismissMode::Background => 6,
        }
    }

    /// Name used in query strings.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            DismissMode::Toggle => "toggle",
            DismissMode::Background => "background",
        }
    }

    /// Parse a mode name as written in a query string or on the command line.
    #[must_use]
    pub fn parse(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "toggle" | "a" => Some(DismissMode::Toggle),
            "background" | "b" => Some(DismissMode::Background),
            _ => None,
        }
    }
}

/// Language of the player-facing messages.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    English,
    Spanish,
}

impl Locale {
    #[must_use]
    pub fn parse(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "en" | "english" => Some(Locale::English),
            "es" | "spanish" | "español" => Some(Locale::Spanish),
            _ => None,
        }
    }
}

/// Complete session configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionConfig {
    /// Number of games to deal. Cards on the table are twice this.
    pub game_count: usize,

    /// Fill a short catalog with versioned copies of its entries.
    pub repeat_games: bool,

    /// Mismatch dismissal interaction.
    pub dismiss_mode: DismissMode,

    /// Fixed seed. `None` draws one from OS entropy.
    pub seed: Option<u64>,

    /// Message language.
    pub locale: Locale,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self::new(DismissMode::default())
    }
}

impl SessionConfig {
    /// Create a configuration with the mode's default game count.
    #[must_use]
    pub fn new(dismiss_mode: DismissMode) -> Self {
        Self {
            game_count: dismiss_mode.default_game_count(),
            repeat_games: false,
            dismiss_mode,
            seed: None,
            locale: Locale::default(),
        }
    }

    /// Set the number of games to deal.
    #[must_use]
    pub fn with_game_count(mut self, count: usize) -> Self {
        assert!(count > 0, "Must deal at least 1 game");
        self.game_count = count;
        self
    }

    /// Enable synthetic repeats for short catalogs.
    #[must_use]
    pub fn with_repeat(mut self, repeat: bool) -> Self {
        self.repeat_games = repeat;
        self
    }

    /// Fix the RNG seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Set the message language.
    #[must_use]
    pub fn with_locale(mut self, locale: Locale) -> Self {
        self.locale = locale;
        self
    }

    /// Parse a URL-style query such as `?games=8&repeat&mode=background`.
    ///
    /// Keys and values are form-urlencoded. Recognized keys: `games`,
    /// `repeat` (presence enables it, whatever the value), `mode`, `seed`,
    /// `lang`. Unknown keys are ignored. A `games` that is missing, has no
    /// leading digits, or is not positive falls back to the mode default.
    #[must_use]
    pub fn from_query(query: &str) -> Self {
        // Percent-escapes and `+` are decoded. An undecodable query is
        // treated as empty, which leaves every setting at its default.
        let pairs: Vec<(String, String)> =
            serde_urlencoded::from_str(query.trim().trim_start_matches('?')).unwrap_or_default();
        let lookup = |key: &str| {
            pairs
                .iter()
                .find(|(k, _)| k == key)
                .map(|(_, v)| v.as_str())
        };

        let dismiss_mode = lookup("mode")
            .and_then(DismissMode::parse)
            .unwrap_or_default();
        let mut config = Self::new(dismiss_mode);

        if let Some(count) = lookup("games").and_then(parse_game_count) {
            config.game_count = count;
        }
        config.repeat_games = lookup("repeat").is_some();
        config.seed = lookup("seed").and_then(|s| s.trim().parse().ok());
        if let Some(locale) = lookup("lang").and_then(Locale::parse) {
            config.locale = locale;
        }
        config
    }

    /// Game count offered by the "harder" link after a win.
    ///
    /// `round(game_count * 1.1 + 2)`.
    #[must_use]
    pub fn next_difficulty(&self) -> usize {
        (self.game_count as f64 * 1.1 + 2.0).round() as usize
    }

    /// Query string that reproduces this configuration at a new game count.
    #[must_use]
    pub fn to_query_with_games(&self, game_count: usize) -> String {
        let mut query = format!("?games={game_count}");
        if self.repeat_games {
            query.push_str("&repeat");
        }
        if self.dismiss_mode != DismissMode::default() {
            query.push_str("&mode=");
            query.push_str(self.dismiss_mode.as_str());
        }
        if self.locale == Locale::Spanish {
            query.push_str("&lang=es");
        }
        query
    }
}

/// Game count from the leading digits of `raw`, like JavaScript's
/// `parseInt`: `"8abc"` reads as 8 and `"4.5"` as 4. An optional `+` may
/// precede the digits. `None` when there are no leading digits, the value
/// is zero, or a `-` sign makes it negative.
fn parse_game_count(raw: &str) -> Option<usize> {
    let raw = raw.trim_start();
    let unsigned = raw.strip_prefix('+').unwrap_or(raw);
    let digits = unsigned
        .find(|c: char| !c.is_ascii_digit())
        .map_or(unsigned, |end| &unsigned[..end]);
    digits.parse::<usize>().ok().filter(|&n| n > 0)
}
