pub mod api_client;
pub mod api_utils;
pub mod components;
pub mod config;
pub mod entity_form;
pub mod entity_list;
pub mod export;
pub mod icons;
pub mod notifications;
pub mod print;
