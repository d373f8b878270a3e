//! Admin player roster.
//!
//! Player records come from the paginated `/api/players` listing and are
//! turned into rows with profile and share actions.

pub mod row;
pub mod types;
pub mod widget;

pub use row::{PlayerRow, PlayerRowRenderer};
pub use types::Player;
pub use widget::{render_player_list, ListFooter};
