//! One-shot prediction binary: JSON request on stdin, marker-framed verdict
//! JSON on stdout, progress trace on stderr. Exits 0 in every case; failure
//! is reported through the error payload, never the exit status.

use mammoscan::config;
use mammoscan::error::Result;
use mammoscan::pipeline;
use mammoscan::protocol::{self, ErrorResponse, PredictRequest, PredictResponse};
use mammoscan::verdict::Verdict;
use std::io::{self, Read};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

fn read_request() -> Result<PredictRequest> {
    let mut input = String::new();
    io::stdin().read_to_string(&mut input)?;
    info!("received input length: {}", input.len());
    PredictRequest::parse(&input)
}

fn predict() -> Result<Verdict> {
    let request = read_request()?;
    pipeline::run(&request)
}

fn main() {
    // Diagnostics go to stderr; stdout belongs to the marker protocol.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config::RUST_LOG)),
        )
        .with_writer(io::stderr)
        .init();

    let mut stdout = io::stdout();
    let emitted = match predict() {
        Ok(verdict) => {
            info!("final prediction: {}", verdict.prediction());
            protocol::emit(&mut stdout, &PredictResponse::from(&verdict))
        }
        Err(err) => {
            error!("prediction failed: {err:?}");
            protocol::emit(&mut stdout, &ErrorResponse::from(&err))
        }
    };

    // If even stdout is gone there is nothing left to report to.
    if let Err(err) = emitted {
        error!("failed to write result: {err}");
    }
}
