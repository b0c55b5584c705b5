//! Error taxonomy for the prediction pipeline

use anyhow::anyhow;

pub type Result<T> = std::result::Result<T, PredictError>;

/// Everything that can go wrong between reading stdin and emitting a
/// verdict. Each stage wraps its own risk region; a failure at stage N
/// discards all work from earlier stages.
#[derive(Debug)]
pub enum PredictError {
    /// Stdin was unreadable, not valid JSON, or missing the `image` field
    Input(anyhow::Error),

    /// The payload was not valid base64 or not a decodable image
    Decode(anyhow::Error),

    /// The decoded pixel grid has zero area
    EmptyImage,

    /// The model artifact could not be loaded
    Model(anyhow::Error),

    /// The forward pass failed
    Inference(anyhow::Error),
}

impl std::fmt::Display for PredictError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PredictError::Input(err) => write!(f, "Input processing error: {err}"),
            // Fixed message: clients match on the prefix. The cause goes to
            // the stderr trace, not the payload.
            PredictError::Decode(_) => {
                write!(f, "Failed to decode image. Please check the image format.")
            }
            PredictError::EmptyImage => write!(f, "Image is empty after decoding"),
            PredictError::Model(err) | PredictError::Inference(err) => write!(f, "{err}"),
        }
    }
}

impl std::error::Error for PredictError {}

impl From<std::io::Error> for PredictError {
    fn from(err: std::io::Error) -> Self {
        PredictError::Input(anyhow!(err))
    }
}

impl From<serde_json::Error> for PredictError {
    fn from(err: serde_json::Error) -> Self {
        PredictError::Input(anyhow!(err))
    }
}

impl From<base64::DecodeError> for PredictError {
    fn from(err: base64::DecodeError) -> Self {
        PredictError::Decode(anyhow!(err))
    }
}

impl From<image::ImageError> for PredictError {
    fn from(err: image::ImageError) -> Self {
        PredictError::Decode(anyhow!(err))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn input_errors_carry_the_cause() {
        let err = PredictError::Input(anyhow!("unexpected end of input"));
        assert_eq!(
            err.to_string(),
            "Input processing error: unexpected end of input"
        );
    }

    #[test]
    fn decode_errors_hide_the_cause() {
        let err = PredictError::Decode(anyhow!("bad symbol at offset 3"));
        assert_eq!(
            err.to_string(),
            "Failed to decode image. Please check the image format."
        );
    }

    #[test]
    fn empty_image_message() {
        assert_eq!(
            PredictError::EmptyImage.to_string(),
            "Image is empty after decoding"
        );
    }

    #[test]
    fn model_errors_pass_through() {
        let err = PredictError::Model(anyhow!("cannot open model.pt"));
        assert_eq!(err.to_string(), "cannot open model.pt");
    }
}
