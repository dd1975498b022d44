// Landing page sections
// Developed by the Codophile Team (c)2025

mod banner;
mod header;
mod hero;
mod icons;
mod mobile_menu;
mod search_modal;

pub use banner::BetaBanner;
pub use header::Header;
pub use hero::Hero;
pub use mobile_menu::MobileMenu;
pub use search_modal::{DocsSearch, SearchSurface};
