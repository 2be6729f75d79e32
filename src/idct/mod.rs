//! The orthonormal 1D inverse DCT (DCT-III) family, sizes 2 through 12.
//!
//! Every size shares one closed-form kernel:
//!
//! ```text
//! C[k][x] = alpha(k) * cos(pi * (2x + 1) * k / (2N))
//! alpha(0) = sqrt(1/N), alpha(k > 0) = sqrt(2/N)
//! output[x] = sum_k C[k][x] * input[k]
//! ```
//!
//! rather than the per-size literal coefficient tables some codecs ship:
//! regenerating them from the formula is exact to float precision and avoids
//! carrying eleven hand-transcribed tables that would drift from each other
//! under review.

/// Compute the `n x n` orthonormal DCT-III coefficient matrix, row `k`
/// holding `C[k][x]` for `x` in `0..n`.
fn coefficient_matrix(n: usize) -> Vec<f32> {
    let mut matrix = vec![0f32; n * n];
    for k in 0..n {
        let alpha = if k == 0 {
            (1.0 / n as f64).sqrt()
        } else {
            (2.0 / n as f64).sqrt()
        };
        for x in 0..n {
            let angle = std::f64::consts::PI * (2 * x + 1) as f64 * k as f64 / (2 * n) as f64;
            matrix[k * n + x] = (alpha * angle.cos()) as f32;
        }
    }
    matrix
}

/// Apply the orthonormal inverse DCT-III of size `n` to `src`, writing `n`
/// output samples into `dst`. Both slices are accessed with the given
/// strides, so this can transform either a contiguous row or a strided
/// column of a 2D coefficient block in place.
///
/// # Panics
///
/// Panics if `n` is not in `2..=12`, or if `src`/`dst` are too short for
/// `n` elements at the given stride.
pub fn idct_1d(n: usize, src: &[f32], src_stride: usize, dst: &mut [f32], dst_stride: usize) {
    assert!((2..=12).contains(&n), "idct_1d supports sizes 2..=12, got {n}");
    assert!(src.len() >= 1 + (n - 1) * src_stride.max(1));
    assert!(dst.len() >= 1 + (n - 1) * dst_stride.max(1));

    let matrix = coefficient_matrix(n);

    for x in 0..n {
        let mut acc = 0f32;
        for k in 0..n {
            acc += matrix[k * n + x] * src[k * src_stride];
        }
        dst[x * dst_stride] = acc;
    }
}

macro_rules! sized_idct {
    ($name:ident, $n:expr) => {
        #[doc = concat!("Orthonormal inverse DCT-III of size ", stringify!($n), ".")]
        pub fn $name(src: &[f32], src_stride: usize, dst: &mut [f32], dst_stride: usize) {
            idct_1d($n, src, src_stride, dst, dst_stride)
        }
    };
}

sized_idct!(idct_1d_2, 2);
sized_idct!(idct_1d_3, 3);
sized_idct!(idct_1d_4, 4);
sized_idct!(idct_1d_5, 5);
sized_idct!(idct_1d_6, 6);
sized_idct!(idct_1d_7, 7);
sized_idct!(idct_1d_8, 8);
sized_idct!(idct_1d_9, 9);
sized_idct!(idct_1d_10, 10);
sized_idct!(idct_1d_11, 11);
sized_idct!(idct_1d_12, 12);

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn size_2_matches_hand_derived_constants() {
        // N=2: alpha(0)=alpha(1)=1/sqrt(2). C[0][x] = 1/sqrt(2) for both x.
        // C[1][0] = 1/sqrt(2)*cos(pi/4) = 0.5, C[1][1] = 1/sqrt(2)*cos(3pi/4) = -0.5.
        let src = [1.0f32, 0.0];
        let mut dst = [0.0f32; 2];
        idct_1d_2(&src, 1, &mut dst, 1);
        let expected = (1.0 / 2f32.sqrt()) as f32;
        assert!((dst[0] - expected).abs() < 1e-6);
        assert!((dst[1] - expected).abs() < 1e-6);
    }

    #[test]
    #[should_panic]
    fn rejects_out_of_range_size() {
        let src = [0.0f32; 13];
        let mut dst = [0.0f32; 13];
        idct_1d(13, &src, 1, &mut dst, 1);
    }

    proptest! {
        #[test]
        fn transform_is_linear(a in -100.0f32..100.0, b in -100.0f32..100.0, scale in -5.0f32..5.0) {
            // IDCT is a fixed linear map: idct(scale*a) == scale*idct(a), for any size.
            for n in 2..=12usize {
                let mut src = vec![0f32; n];
                src[0] = a;
                if n > 1 {
                    src[1] = b;
                }
                let mut dst1 = vec![0f32; n];
                idct_1d(n, &src, 1, &mut dst1, 1);

                let scaled: Vec<f32> = src.iter().map(|v| v * scale).collect();
                let mut dst2 = vec![0f32; n];
                idct_1d(n, &scaled, 1, &mut dst2, 1);

                for (x, y) in dst1.iter().zip(dst2.iter()) {
                    prop_assert!((y - x * scale).abs() < 1e-2);
                }
            }
        }

        #[test]
        fn kernel_is_orthonormal(k1 in 0usize..8, k2 in 0usize..8) {
            // Feeding a unit impulse at frequency k and taking the inner product
            // of the resulting basis vectors against themselves/each other
            // should reproduce the identity matrix (within float tolerance).
            let n = 8usize;
            let k1 = k1 % n;
            let k2 = k2 % n;

            let mut impulse1 = vec![0f32; n];
            impulse1[k1] = 1.0;
            let mut basis1 = vec![0f32; n];
            idct_1d(n, &impulse1, 1, &mut basis1, 1);

            let mut impulse2 = vec![0f32; n];
            impulse2[k2] = 1.0;
            let mut basis2 = vec![0f32; n];
            idct_1d(n, &impulse2, 1, &mut basis2, 1);

            let dot: f32 = basis1.iter().zip(basis2.iter()).map(|(a, b)| a * b).sum();
            let expected = if k1 == k2 { 1.0 } else { 0.0 };
            prop_assert!((dot - expected).abs() < 1e-3);
        }
    }
}
