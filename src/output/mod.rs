//! Terminal rendering
//!
//! Pure presentation: board tiles, the QWERTY heatmap and the shareable
//! emoji grid. No gameplay logic lives here.

pub mod board;
pub mod keyboard;
pub mod share;

pub use board::print_board;
pub use keyboard::print_keyboard;
pub use share::share_text;

/// How tiles are drawn
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TileStyle {
    /// ANSI background colors (colored terminal)
    Ansi,
    /// Emoji squares (emoji mode, no-color mode, or piped output)
    Emoji,
}
