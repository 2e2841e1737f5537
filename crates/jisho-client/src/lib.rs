mod client;
mod error;
mod lookup;

pub use client::JishoClient;
pub use error::LookupError;
pub use lookup::WordLookup;
