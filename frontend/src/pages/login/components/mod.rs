pub mod form;
pub mod register_form;
