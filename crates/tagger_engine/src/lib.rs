//! Tagger engine: tag-extraction pipeline, rendering and file IO.
mod decode;
mod normalize;
mod parse;
mod persist;
mod render;
mod scan;
mod session;
mod stopwords;
mod table;
mod token;
mod types;

pub use decode::{decode_to_string, DecodeError, Utf8Decoder};
pub use normalize::{normalize, Word};
pub use parse::{parse_persisted, ParseError, ParseErrorReason};
pub use persist::{ensure_output_dir, AtomicFileWriter, PersistError};
pub use render::{render_display, write_persisted, LINE_ENDING};
pub use scan::scan;
pub use session::TagSession;
pub use stopwords::StopWords;
pub use table::TagTable;
pub use token::Tokens;
pub use types::{ScanSummary, TagError};
