//! Terminal UI: the presentation layer on top of [`crate::game`]. Maps keys to
//! moves, players to colors, and results to messages.

mod app;
pub mod board_widget;
pub mod computer;
mod game_view;
mod palette;

pub use app::App;
pub use computer::ComputerPlayer;
pub use palette::Palette;
