use super::Compress;
use crate::schedule::Schedule;
use crate::state::State;

/// Compression step that leaves the state untouched.
///
/// Every input digests to the serialized initial state, which makes this
/// useful for exercising the framing layer in isolation and as a
/// placeholder while a real compression step is developed.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct NullCompress;

impl Compress for NullCompress {
    fn compress(&self, _state: &mut State, _schedule: &Schedule) {}
}
