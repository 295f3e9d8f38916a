/// The equations a particle can carry, in display order.
///
/// A particle's label is always one of these entries.
pub const EQUATIONS: [&str; 10] = [
    "dS/dt = μS + σSdW",
    "E[R] = Rf + β(Rm - Rf)",
    "∂V/∂t + ½σ²S²∂²V/∂S²",
    "Σ(w*μ - rf)",
    "CVaR = E[X | X ≤ VaR]",
    "∫ρ(t)dt",
    "P(Xt | X1...Xt-1)",
    "argmax Σ log π",
    "λ = E[N] / Δt",
    "∇·F = ∂P/∂x",
];

/// Returns `true` if `label` is an entry of [`EQUATIONS`].
pub fn contains(label: &str) -> bool {
    EQUATIONS.contains(&label)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_entries_are_unique() {
        let unique: HashSet<_> = EQUATIONS.iter().collect();
        assert_eq!(unique.len(), EQUATIONS.len());
    }

    #[test]
    fn test_contains() {
        assert!(contains("∫ρ(t)dt"));
        assert!(!contains("E = mc²"));
    }
}
