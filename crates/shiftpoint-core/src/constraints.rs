// SPDX-License-Identifier: MIT OR Apache-2.0

#![forbid(unsafe_code)]

/// Checks whether a segmentation of `n_samples` points into `n_bkps`
/// breakpoints is admissible under the `jump` and `min_size` constraints.
///
/// Two conditions must hold:
/// 1. `n_bkps` does not exceed the number of admissible breakpoint
///    positions, `n_samples / jump`.
/// 2. The minimum total point count consumed by `n_bkps` jump-aligned
///    segments of at least `min_size` points each, plus the final segment,
///    fits into `n_samples`:
///    `n_bkps * ceil(min_size / jump) * jump + min_size <= n_samples`.
pub fn sanity_check(n_samples: usize, n_bkps: usize, jump: usize, min_size: usize) -> bool {
    if jump == 0 {
        return false;
    }

    let n_admissible_bkps = n_samples / jump;
    if n_bkps > n_admissible_bkps {
        return false;
    }

    let aligned_min_size = min_size.div_ceil(jump) * jump;
    let required_points = n_bkps * aligned_min_size + min_size;
    required_points <= n_samples
}
