pub mod decision_dialog;
pub mod section;
pub mod stats;
