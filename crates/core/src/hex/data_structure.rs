use crate::hex::Hex;
use fnv::FnvBuildHasher;
use std::collections::HashSet;

/// A set of hexes. Hexes are tiny and hash quickly, so we use FNV instead of
/// the default SipHash.
pub type HexSet = HashSet<Hex, FnvBuildHasher>;
