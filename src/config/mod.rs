use std::{fs::File, path::Path};
use crate::errors::Result;
use crate::pipeline::Config as PipelineConfig;

/// SuperJob and HeadHunter definitions shipped with the binary.
pub const DEFAULT_SOURCES: &str = include_str!("../../sources.yaml");

pub fn load_config_from_path<P: AsRef<Path>>(path: P) -> Result<PipelineConfig> {
    let f = File::open(path)?;
    Ok(serde_yaml::from_reader(f)?)
}

pub fn load_default_config() -> Result<PipelineConfig> {
    Ok(serde_yaml::from_str(DEFAULT_SOURCES)?)
}
