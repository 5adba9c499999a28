/// Helper function to use JavaScript's Math.random
pub(crate) fn js_random_seed() -> u64 {
    use js_sys::Math::random;
    let high = (random() * f64::from(u32::MAX)) as u64;
    let low = (random() * f64::from(u32::MAX)) as u64;
    (high << 32) | low
}

/// Number of columns for a roughly square grid holding `total` cards.
pub(crate) fn grid_columns(total: usize) -> usize {
    (1..=total).find(|cols| cols * cols >= total).unwrap_or(1)
}
