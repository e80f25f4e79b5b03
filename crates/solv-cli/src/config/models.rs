use solvsieve::workflows::config::StageConfig;
use std::path::PathBuf;

#[derive(Debug)]
pub struct AppConfig {
    pub input_path: PathBuf,
    pub stage: StageConfig,
}
