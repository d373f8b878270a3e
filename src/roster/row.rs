//! Admin list rows built from player records.

use super::types::Player;
use crate::scroll::ItemRenderer;

/// Ways to hand a player their login details.
#[derive(Debug, Clone, PartialEq)]
pub struct ShareTargets {
    pub whatsapp: String,
    pub email: String,
    pub clipboard: String,
}

/// Everything the list widget needs to draw one player.
#[derive(Debug, Clone, PartialEq)]
pub struct PlayerRow {
    pub name: String,
    pub position: String,
    pub is_captain: bool,
    pub details: String,
    pub available: bool,
    pub profile_url: String,
    pub share: ShareTargets,
}

impl PlayerRow {
    pub fn availability_label(&self) -> &'static str {
        if self.available {
            "Yes"
        } else {
            "No"
        }
    }
}

/// Renders players for the admin list, linking back to the web app at `origin`.
pub struct PlayerRowRenderer {
    origin: String,
}

impl PlayerRowRenderer {
    pub fn new(origin: impl Into<String>) -> Self {
        Self {
            origin: origin.into().trim_end_matches('/').to_string(),
        }
    }

    fn login_url(&self) -> String {
        format!("{}/player_login", self.origin)
    }

    fn share_targets(&self, player: &Player) -> ShareTargets {
        let login = self.login_url();

        let whatsapp_text = format!(
            "Log your match stats at: {}\nUse Name: {}\nAccess code: {}",
            login, player.name, player.access_code
        );
        let email_body = format!(
            "Login: {}\nName: {}\nCode: {}",
            login, player.name, player.access_code
        );

        ShareTargets {
            whatsapp: format!("https://wa.me/?text={}", urlencoding::encode(&whatsapp_text)),
            email: format!(
                "mailto:?subject={}&body={}",
                urlencoding::encode("Log Your 7-a-side Stats"),
                urlencoding::encode(&email_body)
            ),
            clipboard: format!(
                "Name: {}\nCode: {}\nLink: {}",
                player.name, player.access_code, login
            ),
        }
    }
}

impl ItemRenderer<Player> for PlayerRowRenderer {
    type Unit = PlayerRow;

    fn render(&self, player: &Player) -> PlayerRow {
        PlayerRow {
            name: player.name.clone(),
            position: player.position.clone(),
            is_captain: player.is_captain,
            details: format!(
                "Rating: {} | Code: {} | Avail:",
                player.skill_rating, player.access_code
            ),
            available: player.available,
            profile_url: format!(
                "{}/profile/{}",
                self.origin,
                urlencoding::encode(&player.id)
            ),
            share: self.share_targets(player),
        }
    }
}
