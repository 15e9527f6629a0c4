//! Shared UI crate for Edulens. Views, controls, and analysis panels live here.

pub mod analysis;
pub mod core;
pub mod views;

pub mod components {
    // Sidebar selection widgets (components/controls.rs)
    pub mod controls;
    pub use controls::ControlPanel;
}
