//! Locating the dictionary header inside decrypted data.

use crate::error::PipelineError;

/// Splits decrypted data into the dictionary text and the code payload.
///
/// The header is a brace-delimited object whose keys are quoted single
/// symbols. A `}` inside a key always directly follows the opening quote, while
/// the closing delimiter follows a digit, so the header ends at the first `}`
/// not preceded by `"`.
pub fn split_header(data: &[u8]) -> Result<(&[u8], &[u8]), PipelineError> {
    if data.first() != Some(&b'{') {
        return Err(PipelineError::MissingHeader);
    }
    let close = data
        .windows(2)
        .position(|pair| pair[1] == b'}' && pair[0] != b'"')
        .ok_or(PipelineError::MissingHeaderTerminator)?;
    Ok(data.split_at(close + 2))
}
