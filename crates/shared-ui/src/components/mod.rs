// Standalone components
pub mod avatar;
pub mod badge;
pub mod button;
pub mod card;
pub mod input;
pub mod label;
pub mod navbar;
pub mod page_header;
pub mod separator;
pub mod skeleton;
pub mod switch;

// Depends on button and separator styles
pub mod sidebar;

// Re-exports for convenience
pub use avatar::*;
pub use badge::*;
pub use button::*;
pub use card::*;
pub use input::*;
pub use label::*;
pub use navbar::*;
pub use page_header::*;
pub use separator::*;
pub use sidebar::*;
pub use skeleton::*;
pub use switch::*;
