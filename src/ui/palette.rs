use ratatui::style::Color;

use crate::config::AppConfig;
use crate::error::ConfigError;
use crate::game::Player;

/// Maps player identities to piece colors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    one: Color,
    two: Color,
}

impl Palette {
    pub fn new(one: Color, two: Color) -> Self {
        Palette { one, two }
    }

    pub fn from_config(config: &AppConfig) -> Result<Self, ConfigError> {
        let (one, two) = config.player_colors()?;
        Ok(Palette::new(one, two))
    }

    pub fn color(&self, player: Player) -> Color {
        match player {
            Player::One => self.one,
            Player::Two => self.two,
        }
    }
}

impl Default for Palette {
    fn default() -> Self {
        Palette::new(Color::Red, Color::Yellow)
    }
}
