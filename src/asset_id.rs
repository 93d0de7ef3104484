use std::fmt;

/// Stable identity for a loaded asset, derived from its path.
///
/// The value always fits in 53 bits so the decimal form printed by `Display`
/// survives a round trip through hosts that only carry double-precision
/// integers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct AssetId(u64);

impl AssetId {
    pub const MAX: u64 = (1 << 53) - 1;

    pub fn value(self) -> u64 {
        self.0
    }
}

impl fmt::Display for AssetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Two-lane 32-bit mixing hash over the path, folded into a 53-bit id.
///
/// Not cryptographic; collisions across unrelated paths are possible in
/// principle and the registry reports them instead of treating them as errors.
pub fn compute_id(path: &str, seed: u32) -> AssetId {
    let mut h1: u32 = 0xdead_beef ^ seed;
    let mut h2: u32 = 0x41c6_ce57 ^ seed;
    for unit in path.encode_utf16() {
        let unit = u32::from(unit);
        h1 = (h1 ^ unit).wrapping_mul(2_654_435_761);
        h2 = (h2 ^ unit).wrapping_mul(1_597_334_677);
    }
    h1 = (h1 ^ (h1 >> 16)).wrapping_mul(2_246_822_507) ^ (h2 ^ (h2 >> 13)).wrapping_mul(3_266_489_909);
    h2 = (h2 ^ (h2 >> 16)).wrapping_mul(2_246_822_507) ^ (h1 ^ (h1 >> 13)).wrapping_mul(3_266_489_909);
    // Low 21 bits of the second lane become the high bits, the full first
    // lane the low bits, so the combined value stays below 2^53.
    AssetId((u64::from(h2 & 0x001f_ffff) << 32) | u64::from(h1))
}
