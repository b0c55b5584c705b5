//! The straight-line prediction pipeline: decode, preprocess, load the
//! model, run the forward pass, apply the decision rule. Strictly
//! sequential; the first failing stage wins.

use crate::config;
use crate::decode;
use crate::error::Result;
use crate::preprocess;
use crate::protocol::PredictRequest;
use crate::torch::TorchModel;
use crate::verdict::Verdict;
use tracing::info;

/// Run the full pipeline for one request
pub fn run(request: &PredictRequest) -> Result<Verdict> {
    info!("starting mammogram prediction");

    info!("decoding image");
    let gray = decode::decode_image(&request.image)?;
    info!("image decoded: {}x{}", gray.width(), gray.height());

    let input = preprocess::preprocess(&gray)?;
    info!("preprocessing complete");

    info!("loading model");
    let model = TorchModel::load(config::MODEL_PATH)?;

    let score = model.predict(&input)?;
    info!("raw score: {score}");

    Ok(Verdict::from_score(score))
}
