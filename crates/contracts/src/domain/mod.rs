pub mod a001_category;
pub mod a002_event;
pub mod a003_banner;
pub mod a004_about;
pub mod a005_card;
pub mod a006_service;
pub mod a007_portfolio;
pub mod a008_team;
pub mod a009_process;
pub mod a010_price;
pub mod a011_contact;
pub mod a012_blog;
pub mod a013_testimonial;
pub mod a014_logo;
pub mod catalog;
pub mod common;

pub use catalog::EntityKind;
