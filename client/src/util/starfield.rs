//! Decorative star field behind the hero section.
//!
//! Positions come from a fixed-seed generator instead of a runtime RNG so
//! the server-rendered markup and the hydrated client produce identical
//! attributes.

#[cfg(test)]
#[path = "starfield_test.rs"]
mod starfield_test;

pub const HERO_STAR_COUNT: usize = 40;

/// One twinkling dot, all values ready for inline CSS.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Star {
    pub size_px: f64,
    pub left_pct: f64,
    pub top_pct: f64,
    pub delay_s: f64,
    pub duration_s: f64,
}

impl Star {
    pub fn style(&self) -> String {
        format!(
            "width: {size:.2}px; height: {size:.2}px; left: {:.2}%; top: {:.2}%; animation-delay: {:.2}s; animation-duration: {:.2}s",
            self.left_pct,
            self.top_pct,
            self.delay_s,
            self.duration_s,
            size = self.size_px,
        )
    }
}

/// splitmix64 step; good enough spread for decoration.
fn mix(mut z: u64) -> u64 {
    z = z.wrapping_add(0x9E37_79B9_7F4A_7C15);
    z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
    z ^ (z >> 31)
}

/// Uniform value in `[0, 1)` for (`seed`, `index`, `channel`).
#[allow(clippy::cast_precision_loss)]
fn unit(seed: u64, index: u64, channel: u64) -> f64 {
    let bits = mix(seed ^ mix(index.wrapping_mul(8).wrapping_add(channel)));
    (bits >> 11) as f64 / (1_u64 << 53) as f64
}

/// `count` stars generated from `seed`.
pub fn stars(seed: u64, count: usize) -> Vec<Star> {
    (0..count as u64)
        .map(|i| Star {
            size_px: unit(seed, i, 0) * 3.0 + 1.0,
            left_pct: unit(seed, i, 1) * 100.0,
            top_pct: unit(seed, i, 2) * 100.0,
            delay_s: unit(seed, i, 3) * 5.0,
            duration_s: unit(seed, i, 4) * 3.0 + 2.0,
        })
        .collect()
}
