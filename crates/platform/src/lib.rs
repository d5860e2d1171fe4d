//! Client-side core for the Skillora app: the fixed user/course directory,
//! the current-identity session, the route guard, and the role-conditioned
//! navigation builder. Everything here is synchronous in-memory lookup;
//! there is no I/O layer behind it.

pub mod directory;
pub mod guard;
pub mod navigation;
pub mod session;

pub use directory::Directory;
pub use guard::{decide, RouteDecision};
pub use navigation::{build_navigation, is_active, NavBadge, NavEntry, NavIcon, UNREAD_MESSAGE_COUNT};
pub use session::{Session, DEMO_CREDENTIALS};
