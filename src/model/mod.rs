pub mod attachment;
pub mod form;
pub mod panel;

pub use attachment::{DropZone, ImageAttachment, SelectedFile};
pub use form::{FieldKind, FormField, FormKind, FormState};
pub use panel::{NavigationController, PanelChange, PanelName};
