pub mod badge;
pub mod button;

pub use badge::StatusBadge;
pub use button::Button;
