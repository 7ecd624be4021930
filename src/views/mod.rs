pub mod form_panel;
pub mod home_panel;
pub mod result_panel;
pub mod upload_panel;

pub use form_panel::form_panel;
pub use home_panel::home_panel;
pub use result_panel::result_panel;
pub use upload_panel::upload_panel;
