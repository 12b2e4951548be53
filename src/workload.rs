/// First multiplier of the mixing round.
pub const MIX_MUL_1: u64 = 0xff51afd7ed558ccd;
/// Second multiplier of the mixing round.
pub const MIX_MUL_2: u64 = 0xc4ceb9fe1a85ec53;

/// One shift-xor / multiply round over the raw 64-bit pattern.
#[inline(always)]
pub fn mix_round(mut h: u64) -> u64 {
    h ^= h >> 33;
    h = h.wrapping_mul(MIX_MUL_1);
    h ^= h >> 33;
    h = h.wrapping_mul(MIX_MUL_2);
    h ^= h >> 33;
    h
}

/// The "slow" workload: `iterations` mixing rounds seeded with `seed`.
///
/// A non-positive iteration count performs no rounds and returns `seed`.
#[inline(never)]
pub fn slow_compute(seed: i64, iterations: i32) -> i64 {
    let mut h = seed as u64;
    for _ in 0..iterations {
        h = mix_round(h);
    }
    h as i64
}

/// The "fast" workload: a register-only sum of eight values.
#[inline(never)]
#[allow(clippy::too_many_arguments)]
pub fn fast_sum8(a: i64, b: i64, c: i64, d: i64, e: i64, f: i64, g: i64, h: i64) -> i64 {
    a.wrapping_add(b)
        .wrapping_add(c)
        .wrapping_add(d)
        .wrapping_add(e)
        .wrapping_add(f)
        .wrapping_add(g)
        .wrapping_add(h)
}
