//! Assignment engine and turn/reveal state machine

pub mod assign;
pub mod host;
pub mod session;

pub use assign::assign;
pub use host::GameHost;
pub use session::GameSession;
