use thiserror::Error;

/// Errors that can occur while inserting or projecting samples.
#[derive(Debug, Error)]
pub enum Error {
    #[error("failed to convert input to a scalar")]
    Input(#[source] fnplot_core::Error),

    #[error("failed to convert output to a scalar")]
    Output(#[source] fnplot_core::Error),

    #[error("failed to project sample {index}")]
    Sample {
        index: usize,
        #[source]
        source: Box<Error>,
    },
}
