use super::file::FileConfig;
use super::models::AppConfig;
use crate::cli::Cli;
use crate::error::{CliError, Result};
use funnelview::core::funnel::GeometryConfig;
use funnelview::engine::config as core_config;
use funnelview::render::scene::{Rgb, VisualConfig};
use std::str::FromStr;

pub fn build_config(args: &Cli) -> Result<AppConfig> {
    let file_config = if let Some(config_path) = &args.config {
        FileConfig::from_file(config_path)?
    } else {
        FileConfig::default()
    };

    let mut file_config = apply_set_values(file_config, &args.set_values)?;

    let geometry_file = file_config.geometry.take().unwrap_or_default();
    let geometry = GeometryConfig {
        cylinder_extension: args
            .cylinder_extension
            .unwrap_or(geometry_file.cylinder_extension),
    };
    let visual = file_config.visual.take().unwrap_or_default();

    validate(&geometry, &visual)?;

    let output_file = file_config.output.take().unwrap_or_default();

    let core_config = core_config::AnalysisConfigBuilder::new()
        .reference_path(args.reference.clone())
        .restraint_path(args.restraint.clone())
        .ligand_name(args.ligand.as_str())
        .pose_paths(args.poses.clone())
        .geometry(geometry)
        .visual(visual)
        .build()
        .map_err(|e| CliError::Config(e.to_string()))?;

    Ok(AppConfig {
        core_config,
        pymol_script: args.pymol_script.clone().or(output_file.pymol_script),
        csv_path: args.csv.clone().or(output_file.csv),
    })
}

fn validate(geometry: &GeometryConfig, visual: &VisualConfig) -> Result<()> {
    if !(geometry.cylinder_extension.is_finite() && geometry.cylinder_extension >= 0.0) {
        return Err(CliError::Config(format!(
            "`geometry.cylinder-extension` must be a non-negative number, got {}",
            geometry.cylinder_extension
        )));
    }
    if !(0.0..=1.0).contains(&visual.funnel_transparency) {
        return Err(CliError::Config(format!(
            "`visual.funnel-transparency` must lie in [0, 1], got {}",
            visual.funnel_transparency
        )));
    }
    if !(visual.line_radius.is_finite() && visual.line_radius > 0.0) {
        return Err(CliError::Config(format!(
            "`visual.line-radius` must be positive, got {}",
            visual.line_radius
        )));
    }
    for (key, color) in [
        ("visual.funnel-color", visual.funnel_color),
        ("visual.line-color", visual.line_color),
    ] {
        if color.iter().any(|c| !(0.0..=1.0).contains(c)) {
            return Err(CliError::Config(format!(
                "`{}` components must lie in [0, 1], got {:?}",
                key, color
            )));
        }
    }
    Ok(())
}

fn parse_value<T: FromStr>(key: &str, value_str: &str, kind: &str) -> Result<T> {
    value_str.trim().parse().map_err(|_| {
        CliError::Config(format!("Invalid {} value for {}: {}", kind, key, value_str))
    })
}

fn parse_color(key: &str, value_str: &str) -> Result<Rgb> {
    let components = value_str
        .split(',')
        .map(|c| parse_value::<f64>(key, c, "float"))
        .collect::<Result<Vec<_>>>()?;
    <Rgb>::try_from(components.as_slice()).map_err(|_| {
        CliError::Config(format!(
            "Invalid color for {}: '{}'. Expected R,G,B.",
            key, value_str
        ))
    })
}

fn apply_set_values(mut config: FileConfig, set_values: &[String]) -> Result<FileConfig> {
    for kv_pair in set_values {
        let Some((key, value_str)) = kv_pair.split_once('=') else {
            return Err(CliError::Argument(format!(
                "Invalid --set format: '{}'. Expected KEY=VALUE.",
                kv_pair
            )));
        };
        let key = key.trim();

        match key {
            "geometry.cylinder-extension" => {
                config
                    .geometry
                    .get_or_insert_with(Default::default)
                    .cylinder_extension = parse_value(key, value_str, "float")?;
            }
            "visual.funnel-transparency" => {
                config
                    .visual
                    .get_or_insert_with(Default::default)
                    .funnel_transparency = parse_value(key, value_str, "float")?;
            }
            "visual.line-radius" => {
                config.visual.get_or_insert_with(Default::default).line_radius =
                    parse_value(key, value_str, "float")?;
            }
            "visual.axis-extension-factor" => {
                config
                    .visual
                    .get_or_insert_with(Default::default)
                    .axis_extension_factor = parse_value(key, value_str, "float")?;
            }
            "visual.funnel-color" => {
                config.visual.get_or_insert_with(Default::default).funnel_color =
                    parse_color(key, value_str)?;
            }
            "visual.line-color" => {
                config.visual.get_or_insert_with(Default::default).line_color =
                    parse_color(key, value_str)?;
            }
            _ => {
                return Err(CliError::Config(format!(
                    "Unsupported configuration key for --set: '{}'",
                    key
                )));
            }
        }
    }
    Ok(config)
}
