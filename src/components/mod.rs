pub mod blocks;
pub mod disclosure;
pub mod entrance;
pub mod faq;
pub mod lead_form;
pub mod seo;
pub mod sidebar;
pub mod tab_bar;
