//======================================================================
// src/backends/mod.rs
// Selects the four-lane permutation backend at compile time.
//======================================================================

use cfg_if::cfg_if;

pub(crate) mod soft;
pub(crate) use self::soft::permute;

cfg_if! {
    if #[cfg(feature = "simd")] {
        pub(crate) mod simd;
        pub(crate) use self::simd::permute_x4;
    } else {
        pub(crate) use self::soft::permute_x4;
    }
}
