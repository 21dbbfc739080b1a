//! Presentational building blocks shared by every page.

mod badge;
mod button;
mod card;
mod header;
mod pager;
mod sidebar;
mod stat_card;

pub use badge::{BadgeStatus, StatusBadge, TierBadge};
pub use button::{Button, ButtonVariant};
pub use card::{Card, Loading, Notice, NoticeKind};
pub use header::Header;
pub use pager::Pager;
pub use sidebar::Sidebar;
pub use stat_card::{StatCard, Tone};
