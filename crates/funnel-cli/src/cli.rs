use clap::Parser;
use std::path::PathBuf;

const HELP_TEMPLATE: &str = "\
{before-help}{name} {version}
{author-with-newline}{about-with-newline}
{usage-heading} {usage}

{all-args}{after-help}
";

#[derive(Parser, Debug)]
#[command(
    author = "Tony Kan, Ted Yu",
    version,
    about = "FunnelView - Inspect funnel-metadynamics restraints: derive the funnel geometry, project a ligand onto the funnel axis and draw both in PyMOL.",
    help_template = HELP_TEMPLATE,
)]
pub struct Cli {
    /// Reference structure containing the ligand (PDB or BGF).
    #[arg(value_name = "REFERENCE")]
    pub reference: PathBuf,

    /// Restraint definition file with ZCC, ALPHA, RCYL and POINTS (lengths in nm).
    #[arg(value_name = "RESTRAINT")]
    pub restraint: PathBuf,

    /// Residue name of the ligand (e.g., LIG).
    #[arg(value_name = "LIGAND")]
    pub ligand: String,

    /// Path to an optional configuration file in TOML format.
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Override the axial length of the drawn cylinder section, in Angstroms.
    #[arg(long, value_name = "FLOAT")]
    pub cylinder_extension: Option<f64>,

    /// Write a PyMOL script that draws the funnel and the ligand projection.
    #[arg(long, value_name = "PATH")]
    pub pymol_script: Option<PathBuf>,

    /// Additional structure whose ligand is projected on the same funnel.
    /// Can be used multiple times.
    #[arg(long = "pose", value_name = "PATH")]
    pub poses: Vec<PathBuf>,

    /// Write one CSV row per structure with its ligand projection.
    #[arg(long, value_name = "PATH")]
    pub csv: Option<PathBuf>,

    /// Set a specific configuration value, overriding the config file.
    /// Can be used multiple times. Example: -S visual.line-radius=0.2
    #[arg(short = 'S', long = "set", value_name = "KEY=VALUE")]
    pub set_values: Vec<String>,

    /// Increase verbosity level (-v for INFO, -vv for DEBUG, -vvv for TRACE)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress all log output except for errors
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Write logs to a specified file in addition to the console output
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,
}
