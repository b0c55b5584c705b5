pub mod decode;
pub mod error;
pub mod pipeline;
pub mod preprocess;
pub mod protocol;
pub mod torch;
pub mod verdict;

/// Mammoscan configuration -- can eventually be lazy_static parsed from a
/// config file
pub mod config {
    /// Path to the TorchScript classifier artifact, relative to the
    /// process's working directory
    pub const MODEL_PATH: &str = "model.pt";

    /// Spatial side length the classifier was trained on
    pub const INPUT_SIDE: u32 = 224;

    /// Per-channel means subtracted during preprocessing, in BGR order.
    /// Must match the pretrained backbone's training-time constants.
    pub const CHANNEL_MEANS_BGR: [f32; 3] = [103.939, 116.779, 123.68];

    /// Raw scores strictly above this are reported as malignant
    pub const MALIGNANT_THRESHOLD: f64 = 0.7;

    /// Default log filter when RUST_LOG is unset
    pub const RUST_LOG: &str = "info";
}
