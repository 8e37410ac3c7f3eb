use super::*;

/// Depth of a right-leaning chain, counted the way a tree walk would.
fn chain_depth(remaining: u32) -> u32 {
    ensure_sufficient_stack(|| {
        if remaining == 0 {
            1
        } else {
            chain_depth(remaining - 1) + 1
        }
    })
}

#[test]
fn test_shallow_walk() {
    assert_eq!(chain_depth(16), 17);
}

#[test]
fn test_deep_walk_does_not_overflow() {
    // A plain 8 MiB main-thread stack would not survive this.
    assert_eq!(chain_depth(200_000), 200_001);
}

#[test]
fn test_passes_result_through() {
    let result: Result<f64, &str> = ensure_sufficient_stack(|| Ok(1.5));
    assert_eq!(result, Ok(1.5));
}
