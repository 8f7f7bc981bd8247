//! Server-rendered HTML for the marketing site.

pub mod cards;
pub mod content;
pub mod layout;
pub mod nav;
pub mod pages;
pub mod router;

pub use layout::Chrome;
pub use nav::{MenuQuery, Navigation};
pub use router::{site_router, SiteState};
