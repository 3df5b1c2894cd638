pub mod session;

pub use session::{AuthPhase, SessionMachine};
