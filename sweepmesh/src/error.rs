//! Generation errors

use crate::params::MAX_UV_CHANNELS;

/// Configuration error raised before any buffer reaches a mesh sink
///
/// Degenerate segment counts are not errors: generation is skipped instead.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GenerateError {
    /// Raw UV type tag outside the known set
    #[error("unknown UV type tag {0} (expected 0 = radial, 1 = top-projected)")]
    UnknownUvType(u8),

    /// Raw UV axis tag outside the known set
    #[error("unknown UV axis tag {0} (expected 0 = U, 1 = V)")]
    UnknownUvAxis(u8),

    /// Raw sweep axis tag outside the known set
    #[error("unknown axis tag {0} (expected 0 = X, 1 = Y, 2 = Z)")]
    UnknownAxis(u8),

    /// Output UV channel list is empty or longer than the sink supports
    #[error("{0} UV channels requested (must be 1-{max})", max = MAX_UV_CHANNELS)]
    UvChannelCount(usize),
}
