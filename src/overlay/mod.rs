pub mod config;
pub mod layout;
pub mod manager;
pub mod render;
#[cfg(windows)]
pub mod window;

pub use config::{Orientation, OverlayConfig};
pub use manager::{OverlayManager, StartOutcome};
#[cfg(windows)]
pub use window::Win32Compositor;
