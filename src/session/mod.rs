//! Per-session bookkeeping: counters, history and the controller that
//! updates them one game at a time.

mod record;
mod score;
mod session;

pub use record::*;
pub use score::*;
pub use session::*;
