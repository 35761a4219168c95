#[cfg(windows)]
pub mod components;
#[cfg(windows)]
pub mod controller;
#[cfg(windows)]
pub mod option_list;
pub mod state;

#[cfg(windows)]
pub use controller::Controller;
pub use state::PanelState;
