pub mod hash_extractor;

pub use hash_extractor::{ExtractError, HashExtractor};
