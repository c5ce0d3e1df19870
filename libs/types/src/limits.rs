//! Hard limits shared by every vault

/// Maximum number of signers a vault may have. Also bounds each vote set.
pub const MAX_SIGNERS: usize = 10;

/// Maximum proposal description length, in bytes.
pub const MAX_DESCRIPTION_LEN: usize = 200;
