pub mod detail_modal;
pub mod edit_modal;
pub mod filter;
pub mod form;
pub mod pagination;
pub mod table;
