use funnelview::engine::config as core_config;
use std::path::PathBuf;

pub struct AppConfig {
    pub core_config: core_config::AnalysisConfig,
    pub pymol_script: Option<PathBuf>,
    pub csv_path: Option<PathBuf>,
}
