pub mod panel_tabs;

pub use panel_tabs::panel_tabs;
