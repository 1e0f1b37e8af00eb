mod keys;
mod state;

pub use keys::*;
pub use state::*;
