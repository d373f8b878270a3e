//! Draft countdown shown in the header.

pub mod timer;
pub mod widget;
pub mod window;

pub use timer::CountdownTarget;
pub use widget::render_countdown;
pub use window::DraftWindow;
