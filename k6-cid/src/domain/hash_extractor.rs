use thiserror::Error;

/// Failure to turn a textual content identifier into its multihash.
#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("invalid content identifier {input:?}: {source}")]
    Parse {
        input: String,
        #[source]
        source: cid::Error,
    },
}

/// Port for deriving the base58 multihash of a textual content identifier.
///
/// Implementations must be pure: the output depends only on `input`, so a
/// single extractor can be shared by any number of concurrent callers.
pub trait HashExtractor: Send + Sync {
    /// Decode `input` and return the base58 encoding of its multihash.
    fn try_extract_hash(&self, input: &str) -> Result<String, ExtractError>;

    /// Lenient form of [`HashExtractor::try_extract_hash`].
    ///
    /// Invalid input decodes to an empty multihash, whose encoding is the
    /// empty string. The decode error is only reported as a debug event.
    fn extract_hash(&self, input: &str) -> String {
        self.try_extract_hash(input).unwrap_or_else(|err| {
            tracing::debug!(error = %err, "discarding invalid content identifier");
            String::new()
        })
    }
}
