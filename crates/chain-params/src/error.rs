use snafu::prelude::*;

#[derive(Debug, Snafu)]
#[snafu(visibility(pub(crate)))]
pub enum Error {
    #[snafu(display("Chain parameters read before a chain was selected"))]
    NotSelected,

    #[snafu(display("Failed to resolve chain from arguments: {source}"))]
    Args { source: chain_args::ArgsError },
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
