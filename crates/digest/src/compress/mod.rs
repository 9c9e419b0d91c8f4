//! The compression seam.
//!
//! The engine advances its state through a capability bound once at
//! construction. Implementations receive the current [`State`] and the
//! 16-word [`Schedule`] packed from one block, and mutate the state in
//! place. They must be deterministic and free of side effects; the engine
//! guarantees exactly one invocation per 64-byte block, in message order.

use crate::schedule::Schedule;
use crate::state::State;

mod null;
mod sha1;

pub use null::NullCompress;
pub use sha1::Sha1Compress;

/// A per-block compression step.
pub trait Compress {
    /// Advances `state` using the words packed from one block.
    fn compress(&self, state: &mut State, schedule: &Schedule);
}
