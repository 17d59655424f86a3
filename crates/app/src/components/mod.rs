mod icons;
mod quick_actions;
mod stat_card;

pub use icons::nav_icon;
pub use quick_actions::QuickActionsCard;
pub use stat_card::StatCard;
