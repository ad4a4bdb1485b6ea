use cid::Cid;
use multihash::Multihash;

use crate::domain::{ExtractError, HashExtractor};

/// Path marker accepted in front of a content identifier, e.g. `/ipfs/<cid>`.
const IPFS_PATH_MARKER: &str = "/ipfs/";

/// `HashExtractor` backed by the `cid` crate.
///
/// Accepts CIDv0 (`Qm...`) and any multibase-encoded CIDv1, optionally
/// behind an `/ipfs/` path prefix. The multihash is rendered with the
/// Bitcoin base58 alphabet and no multibase prefix.
#[derive(Debug, Clone, Copy, Default)]
pub struct MultihashB58Extractor;

impl MultihashB58Extractor {
    pub fn new() -> Self {
        Self
    }

    /// Parse a CID from string.
    fn parse_cid(input: &str) -> Result<Cid, cid::Error> {
        let text = match input.split_once(IPFS_PATH_MARKER) {
            Some((_, rest)) => rest
                .split_once(IPFS_PATH_MARKER)
                .map_or(rest, |(cid, _)| cid),
            None => input,
        };
        text.parse()
    }

    fn encode_multihash(hash: &Multihash<64>) -> String {
        bs58::encode(hash.to_bytes()).into_string()
    }
}

impl HashExtractor for MultihashB58Extractor {
    fn try_extract_hash(&self, input: &str) -> Result<String, ExtractError> {
        let cid = Self::parse_cid(input).map_err(|source| ExtractError::Parse {
            input: input.to_string(),
            source,
        })?;
        Ok(Self::encode_multihash(cid.hash()))
    }
}
