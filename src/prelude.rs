pub use anyhow::{anyhow, ensure, Context};
pub use tracing::{debug, info, instrument};

pub type Result<T = (), E = anyhow::Error> = std::result::Result<T, E>;
