use std::io::{Error, ErrorKind};
use std::path::PathBuf;

pub const MODELS_DIR_NAME: &str = "saved_models";

/// Directory holding the serialized models, fixed relative to the
/// executable's own location.
pub fn default_models_dir() -> Result<PathBuf, Error> {
    let exe = std::env::current_exe()?;
    let dir = exe.parent().ok_or_else(|| {
        Error::new(
            ErrorKind::NotFound,
            "executable path has no parent directory",
        )
    })?;
    Ok(dir.join(MODELS_DIR_NAME))
}
