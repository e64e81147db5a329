//! core functionality for decoding and re-encoding
//! "Slay the Spire" autosave files
//!
//! # Modules
//!
//! - `codec`: XOR masking and base64 framing of the save payload
//! - `paths`: name-derived pairing between opaque saves and decoded files
//! - `backup`: numbered backup copies taken before a save is decoded
//! - `pass`: directory scan that classifies and converts candidate files

pub mod backup;
pub mod codec;
pub mod error;
pub mod pass;
pub mod paths;

// Re-export commonly used items
pub use backup::make_backup;
pub use codec::{KEY, decode, encode, xor_transform};
pub use error::CodecError;
pub use pass::{Action, ErrorPolicy, PassSummary, classify, list_candidates, run_pass};
pub use paths::{
    DECODED_SUFFIX, OPAQUE_SUFFIX, is_decoded, is_opaque, to_decoded_path, to_opaque_path,
};
