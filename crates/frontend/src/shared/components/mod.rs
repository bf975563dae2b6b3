pub mod confirm_dialog;
pub mod page_header;
pub mod pagination_controls;
pub mod search_input;
pub mod stat_card;
pub mod status_select;
pub mod table_checkbox;
pub mod ui;
