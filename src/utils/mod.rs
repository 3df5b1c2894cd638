// Utils compartidos

pub mod constants;
pub mod events;
pub mod format;
pub mod storage;

pub use constants::*;
pub use events::*;
pub use format::*;
pub use storage::*;
