/// Cosine similarity of two equal-length weight vectors, clamped to `[0, 1]`.
///
/// Returns 0.0 when either vector has zero magnitude. Identical vectors score
/// exactly 1.0: the dot product and both norms are accumulated in the same
/// order, and the denominator takes a single square root.
pub fn cosine_similarity(vec_a: &[f64], vec_b: &[f64]) -> f64 {
    debug_assert_eq!(vec_a.len(), vec_b.len());

    let mut dot_product = 0.0;
    let mut norm_a = 0.0;
    let mut norm_b = 0.0;

    for (a, b) in vec_a.iter().zip(vec_b) {
        dot_product += a * b;
        norm_a += a * a;
        norm_b += b * b;
    }

    if norm_a == 0.0 || norm_b == 0.0 {
        return 0.0;
    }

    (dot_product / (norm_a * norm_b).sqrt()).clamp(0.0, 1.0)
}
