//! Per-page interactive state. Nothing in here touches the browser; each
//! practice area page owns one fresh [`PageState`] for as long as it is
//! mounted.

pub mod accordion;
pub mod disclosure;
pub mod form;
pub mod navigation;
pub mod page;

pub use accordion::AccordionSelector;
pub use disclosure::DisclosureStore;
pub use form::{FieldKind, FieldSpec, FormDraft, SelectOption, SubmitAction, SubmitPolicy};
pub use navigation::{NavigationController, Tab, TabTarget, Viewport};
pub use page::{PageAction, PageState};
