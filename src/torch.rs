//! Code for loading and running the pretrained classifier

use crate::error::{PredictError, Result};
use crate::preprocess::InputTensor;
use anyhow::anyhow;
use tch::{no_grad, CModule, Tensor};
use tracing::{debug, info};

/// A pretrained binary classifier loaded from a TorchScript artifact
#[derive(Debug)]
pub struct TorchModel {
    /// The loaded torch model
    model: CModule,
}

impl TorchModel {
    /// Load the artifact from disk. Loaded fresh on every invocation; this
    /// is a one-process-one-prediction pipeline with no warm cache.
    pub fn load(path: &str) -> Result<Self> {
        let model = CModule::load(path).map_err(|err| PredictError::Model(anyhow!(err)))?;
        info!("model loaded from {path}");
        Ok(TorchModel { model })
    }

    /// Run one forward pass and return the scalar probability at batch 0,
    /// output unit 0.
    pub fn predict(&self, input: &InputTensor) -> Result<f64> {
        let tensor = Tensor::from_slice(input.data()).reshape(input.shape());
        debug!("input tensor shape: {:?}", tensor.size());

        let output = no_grad(|| self.model.forward_ts(&[tensor]))
            .map_err(|err| PredictError::Inference(anyhow!(err)))?;
        let score = output
            .f_double_value(&[0, 0])
            .map_err(|err| PredictError::Inference(anyhow!(err)))?;
        debug!("raw prediction value: {score}");

        Ok(score)
    }
}
