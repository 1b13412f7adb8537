//! Asynchronous module output.
//!
//! Same guarantees as [`Module::write_to_path`]: the module is encoded
//! before any file is touched, written to a sibling temporary file, and
//! renamed over the destination only once the write has completed.
//!
//! ```rust,ignore
//! #[tokio::main]
//! async fn main() -> b9_compiler::Result<()> {
//!     let module = b9_compiler::compile(&program, &Default::default())?;
//!     b9_compiler::async_writer::write_module(&module, "out.b9mod").await
//! }
//! ```

use std::path::Path;

use tempfile::NamedTempFile;
use tokio::fs;
use tracing::info;

use crate::compiler::module::Module;
use crate::error::{Error, Result};

/// Writes `module` to `path`.
pub async fn write_module(module: &Module, path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    let bytes = module.to_bytes()?;

    let dir = match path.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => dir,
        _ => Path::new("."),
    };
    let temp = NamedTempFile::new_in(dir)?.into_temp_path();
    fs::write(&temp, &bytes).await?;
    temp.persist(path).map_err(|e| Error::Io(e.error))?;

    info!(path = %path.display(), bytes = bytes.len(), "wrote module");
    Ok(())
}

/// Writes several modules concurrently.
///
/// Results are returned in input order.
pub async fn write_modules<P: AsRef<Path>>(outputs: &[(&Module, P)]) -> Vec<Result<()>> {
    let writes: Vec<_> = outputs
        .iter()
        .map(|(module, path)| write_module(module, path))
        .collect();

    futures::future::join_all(writes).await
}
