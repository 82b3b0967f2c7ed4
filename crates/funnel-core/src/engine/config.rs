use crate::core::funnel::GeometryConfig;
use crate::render::scene::VisualConfig;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum ConfigError {
    #[error("Missing required parameter: {0}")]
    MissingParameter(&'static str),
}

#[derive(Debug, Clone, PartialEq)]
pub struct InputConfig {
    /// Structure the funnel is drawn in and the ligand is read from.
    pub reference_path: PathBuf,
    /// Restraint-definition file (`ZCC`, `ALPHA`, `RCYL`, `POINTS`).
    pub restraint_path: PathBuf,
    /// Residue name identifying the ligand atoms.
    pub ligand_name: String,
    /// Additional structures whose ligand is projected on the same funnel.
    pub pose_paths: Vec<PathBuf>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct AnalysisConfig {
    pub input: InputConfig,
    pub geometry: GeometryConfig,
    pub visual: VisualConfig,
}

#[derive(Default)]
pub struct AnalysisConfigBuilder {
    reference_path: Option<PathBuf>,
    restraint_path: Option<PathBuf>,
    ligand_name: Option<String>,
    pose_paths: Vec<PathBuf>,
    geometry: Option<GeometryConfig>,
    visual: Option<VisualConfig>,
}

impl AnalysisConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reference_path(mut self, path: PathBuf) -> Self {
        self.reference_path = Some(path);
        self
    }
    pub fn restraint_path(mut self, path: PathBuf) -> Self {
        self.restraint_path = Some(path);
        self
    }
    pub fn ligand_name(mut self, name: impl Into<String>) -> Self {
        self.ligand_name = Some(name.into());
        self
    }
    pub fn pose_paths(mut self, paths: Vec<PathBuf>) -> Self {
        self.pose_paths = paths;
        self
    }
    pub fn geometry(mut self, geometry: GeometryConfig) -> Self {
        self.geometry = Some(geometry);
        self
    }
    pub fn visual(mut self, visual: VisualConfig) -> Self {
        self.visual = Some(visual);
        self
    }

    /// Builds the configuration.
    ///
    /// Geometry and visual settings fall back to their defaults; the three inputs do not.
    pub fn build(self) -> Result<AnalysisConfig, ConfigError> {
        let ligand_name = self
            .ligand_name
            .map(|name| name.trim().to_string())
            .filter(|name| !name.is_empty())
            .ok_or(ConfigError::MissingParameter("ligand_name"))?;

        let input = InputConfig {
            reference_path: self
                .reference_path
                .ok_or(ConfigError::MissingParameter("reference_path"))?,
            restraint_path: self
                .restraint_path
                .ok_or(ConfigError::MissingParameter("restraint_path"))?,
            ligand_name,
            pose_paths: self.pose_paths,
        };

        Ok(AnalysisConfig {
            input,
            geometry: self.geometry.unwrap_or_default(),
            visual: self.visual.unwrap_or_default(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn complete_builder() -> AnalysisConfigBuilder {
        AnalysisConfigBuilder::new()
            .reference_path("ref.pdb".into())
            .restraint_path("funnel.dat".into())
            .ligand_name("LIG")
    }

    #[test]
    fn build_fills_defaults_for_optional_sections() {
        let config = complete_builder().build().unwrap();
        assert_eq!(config.input.ligand_name, "LIG");
        assert!(config.input.pose_paths.is_empty());
        assert_eq!(config.geometry, GeometryConfig::default());
        assert_eq!(config.visual, VisualConfig::default());
    }

    #[test]
    fn build_keeps_explicit_sections() {
        let config = complete_builder()
            .geometry(GeometryConfig {
                cylinder_extension: 4.0,
            })
            .pose_paths(vec!["pose_1.pdb".into()])
            .build()
            .unwrap();
        assert_eq!(config.geometry.cylinder_extension, 4.0);
        assert_eq!(config.input.pose_paths, vec![PathBuf::from("pose_1.pdb")]);
    }

    #[test]
    fn build_reports_first_missing_parameter() {
        let result = AnalysisConfigBuilder::new()
            .restraint_path("funnel.dat".into())
            .ligand_name("LIG")
            .build();
        assert_eq!(
            result.unwrap_err(),
            ConfigError::MissingParameter("reference_path")
        );

        let result = AnalysisConfigBuilder::new()
            .reference_path("ref.pdb".into())
            .ligand_name("LIG")
            .build();
        assert_eq!(
            result.unwrap_err(),
            ConfigError::MissingParameter("restraint_path")
        );
    }

    #[test]
    fn blank_ligand_name_counts_as_missing() {
        let result = complete_builder().ligand_name("   ").build();
        assert_eq!(
            result.unwrap_err(),
            ConfigError::MissingParameter("ligand_name")
        );
    }
}
