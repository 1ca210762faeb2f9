//! JSON text codecs the facade can be built over.

mod google;
mod types;

pub use google::GoogleJsonCodec;
pub use types::{CodecError, JsonTextCodec};
