/// Upper bound on the size of a signer set.
pub const MAX_SIGNERS: usize = 100;

/// Threshold used when none is given at initialization: a strict majority,
/// `floor(n / 2) + 1`.
pub const fn default_threshold(signers: u32) -> u32 {
    signers / 2 + 1
}
