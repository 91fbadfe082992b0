//! advocates-directory - client side of the advocate directory
//!
//! Fetches the full advocate list once ([`source`]), narrows it with the
//! user's criteria ([`filter`]), keeps derived views current as inputs change
//! ([`directory`]) and renders them as a text table ([`render`]).

pub mod directory;
pub mod filter;
pub mod render;
pub mod source;

pub use directory::{Directory, LoadState};
pub use filter::{filter_advocates, specialty_options, FilterCriteria, FilterField};
pub use source::{PendingFetch, RecordSource, SourceError};
