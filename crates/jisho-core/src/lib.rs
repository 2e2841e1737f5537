pub mod fill;
pub mod jlpt;
pub mod matcher;
pub mod note;
pub mod parser;
pub mod preprocess;
pub mod types;

pub use fill::{existing_headword, fill_note, headword_field};
pub use matcher::find_matching_field;
pub use note::{MemoryNote, NoteStorage};
pub use parser::parse_result;
pub use types::{FieldMapping, ParsedRecord, RecordKey, SearchResponse, SearchResult};
