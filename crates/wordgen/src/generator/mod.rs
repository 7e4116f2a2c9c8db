mod engine;
mod interface;
mod lock;
mod pool;

pub use engine::*;
pub use interface::*;
pub use lock::*;
pub use pool::*;
