//! Ports (trait boundaries) between the game core and its front-ends.
//!
//! The session loop depends only on these traits; the console, the
//! computer player and test doubles are adapters that implement them.

pub mod contestant;
pub mod observer;

pub use contestant::Contestant;
pub use observer::SessionObserver;
