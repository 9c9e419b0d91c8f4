#![doc = include_str!("../README.md")]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

mod compress;
mod digest;
mod engine;
mod error;
mod padding;
mod schedule;
mod state;

pub use compress::{Compress, NullCompress, Sha1Compress};
pub use digest::{Digest, DigestSliceError};
pub use engine::{DigestEngine, DigestEngineBuilder};
pub use error::DigestError;
pub use schedule::{BLOCK_LEN, Schedule};
pub use state::State;
