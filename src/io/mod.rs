pub mod output;

pub use output::{create_writer, AnalysisReport, OutputFormat, OutputWriter};

use crate::errors::TonemapError;
use std::fs;
use std::io::Read;
use std::path::Path;

pub fn read_file(path: &Path) -> Result<String, TonemapError> {
    fs::read_to_string(path).map_err(|e| TonemapError::from_io_error(e, Some(path.to_path_buf())))
}

pub fn read_stdin() -> Result<String, TonemapError> {
    let mut contents = String::new();
    std::io::stdin()
        .read_to_string(&mut contents)
        .map_err(|e| TonemapError::from_io_error(e, None))?;
    Ok(contents)
}

pub fn write_file(path: &Path, content: &str) -> Result<(), TonemapError> {
    fs::write(path, content).map_err(|e| TonemapError::from_io_error(e, Some(path.to_path_buf())))
}
