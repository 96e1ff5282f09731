//! Lifespan CLI — estimate, curve, and configuration commands.
//!
//! Commands:
//! - `estimate` — headline estimate, recommendations, and what-if gains
//! - `curve` — the estimate across a range of ages, as a table or CSV
//! - `presets` — list the built-in configuration presets
//! - `config` — print a preset as TOML, ready to edit and pass to `--config`

mod export;
mod logging;
mod render;

use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::{ArgAction, Args, Parser, Subcommand, ValueEnum};
use lifespan_core::{
    age_curve, assess, body_from_parts, BodyMeasurements, EstimatorConfig, Preset, ProfileInput,
    RawProfile,
};

#[derive(Parser)]
#[command(
    name = "lifespan",
    about = "Lifespan CLI — lifestyle-based life expectancy estimator"
)]
struct Cli {
    /// Log estimator internals to stderr (LIFESPAN_LOG overrides).
    #[arg(short, long, global = true, default_value_t = false)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Estimate life expectancy for one profile.
    Estimate {
        #[command(flatten)]
        profile: ProfileArgs,

        #[command(flatten)]
        config: ConfigArgs,

        /// Output format.
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,

        /// Skip the what-if section.
        #[arg(long, default_value_t = false)]
        no_impacts: bool,
    },
    /// Evaluate the estimate across a range of ages.
    Curve {
        #[command(flatten)]
        profile: ProfileArgs,

        #[command(flatten)]
        config: ConfigArgs,

        /// First age of the curve.
        #[arg(long, default_value_t = 18)]
        from: u32,

        /// Last age of the curve (inclusive).
        #[arg(long, default_value_t = 100)]
        to: u32,

        /// Write CSV to this path instead of printing a table.
        #[arg(long)]
        csv: Option<PathBuf>,

        /// Output format when printing to stdout.
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },
    /// List built-in presets.
    Presets,
    /// Print a preset's configuration as TOML.
    Config {
        /// Preset to print. Defaults to classic.
        #[arg(long, default_value = "classic")]
        preset: String,
    },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

/// Lifestyle inputs. Defaults match the original form's initial values.
#[derive(Args, Debug)]
struct ProfileArgs {
    /// Age in years.
    #[arg(long, default_value_t = 30)]
    age: u32,

    /// Body-mass index. Takes precedence over --weight/--height.
    #[arg(long)]
    bmi: Option<f64>,

    /// Weight in kilograms (requires --height).
    #[arg(long, requires = "height")]
    weight: Option<f64>,

    /// Height in centimetres (requires --weight).
    #[arg(long, requires = "weight")]
    height: Option<f64>,

    /// Do you smoke? (yes/no)
    #[arg(long, default_value = "no", value_parser = parse_answer, action = ArgAction::Set)]
    smokes: bool,

    /// Do you drink alcohol? (yes/no)
    #[arg(long, default_value = "no", value_parser = parse_answer, action = ArgAction::Set)]
    drinks: bool,

    /// Average steps per day.
    #[arg(long, default_value_t = 5000)]
    steps: u32,

    /// Stress level from 0 (none) to 10 (high).
    #[arg(long, default_value_t = 5.0)]
    stress: f64,
}

/// BMI used when no body measurements are given.
const DEFAULT_BMI: f64 = 22.0;

impl ProfileArgs {
    fn to_raw(&self) -> Result<RawProfile> {
        let body = if self.bmi.is_none() && self.weight.is_none() && self.height.is_none() {
            BodyMeasurements::Bmi { value: DEFAULT_BMI }
        } else {
            body_from_parts(self.bmi, self.weight, self.height)?
        };
        Ok(RawProfile {
            age: self.age,
            body,
            smokes: self.smokes,
            drinks_alcohol: self.drinks,
            daily_step_count: self.steps,
            stress_level: self.stress,
        })
    }
}

#[derive(Args, Debug)]
struct ConfigArgs {
    /// Named preset (see `lifespan presets`).
    #[arg(long, conflicts_with = "config")]
    preset: Option<String>,

    /// Path to a TOML config file.
    #[arg(long)]
    config: Option<PathBuf>,
}

impl ConfigArgs {
    fn resolve(&self) -> Result<EstimatorConfig> {
        if let Some(path) = &self.config {
            return EstimatorConfig::from_file(path)
                .with_context(|| format!("loading config {}", path.display()));
        }
        let preset: Preset = match &self.preset {
            Some(name) => name.parse()?,
            None => Preset::default(),
        };
        tracing::debug!(%preset, "using preset");
        Ok(preset.config())
    }
}

/// Accept yes/no answers in the spellings the original form used.
fn parse_answer(s: &str) -> Result<bool, String> {
    match s.trim().to_lowercase().as_str() {
        "yes" | "y" | "true" | "1" | "да" => Ok(true),
        "no" | "n" | "false" | "0" | "нет" => Ok(false),
        other => Err(format!("expected yes or no, got '{other}'")),
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init_logging(cli.verbose);

    match cli.command {
        Commands::Estimate {
            profile,
            config,
            format,
            no_impacts,
        } => run_estimate(&profile, &config, format, !no_impacts),
        Commands::Curve {
            profile,
            config,
            from,
            to,
            csv,
            format,
        } => run_curve(&profile, &config, from, to, csv, format),
        Commands::Presets => {
            run_presets();
            Ok(())
        }
        Commands::Config { preset } => run_config(&preset),
    }
}

/// Validate CLI inputs against the config's bounds.
fn load_profile(profile: &ProfileArgs, config: &EstimatorConfig) -> Result<ProfileInput> {
    let raw = profile.to_raw()?;
    let input = config.bounds.validate(&raw)?;
    Ok(input)
}

fn run_estimate(
    profile: &ProfileArgs,
    config_args: &ConfigArgs,
    format: OutputFormat,
    show_impacts: bool,
) -> Result<()> {
    let config = config_args.resolve()?;
    let input = load_profile(profile, &config)?;
    let assessment = assess(&input, &config);

    match format {
        OutputFormat::Text => print!("{}", render::render_assessment(&assessment, show_impacts)),
        OutputFormat::Json => println!("{}", assessment.to_json()?),
    }
    Ok(())
}

fn run_curve(
    profile: &ProfileArgs,
    config_args: &ConfigArgs,
    from: u32,
    to: u32,
    csv: Option<PathBuf>,
    format: OutputFormat,
) -> Result<()> {
    if from > to {
        bail!("--from ({from}) must not exceed --to ({to})");
    }
    let config = config_args.resolve()?;
    let input = load_profile(profile, &config)?;
    let points = age_curve(&input, &config, from..=to);

    if let Some(path) = csv {
        export::write_curve_csv(&points, &path)?;
        println!("Wrote {} points to {}", points.len(), path.display());
        return Ok(());
    }

    match format {
        OutputFormat::Text => print!("{}", export::curve_table(&points)),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&points)?),
    }
    Ok(())
}

fn run_presets() {
    println!("{:<24} Description", "Preset");
    println!("{}", "-".repeat(72));
    for preset in Preset::ALL {
        println!("{:<24} {}", preset.name(), preset.description());
    }
}

fn run_config(preset: &str) -> Result<()> {
    let preset: Preset = preset.parse()?;
    print!("{}", preset.config().to_toml()?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use lifespan_core::ValidationError;

    fn parse(args: &[&str]) -> Result<Cli, clap::Error> {
        Cli::try_parse_from(std::iter::once("lifespan").chain(args.iter().copied()))
    }

    fn estimate_args(args: &[&str]) -> (ProfileArgs, ConfigArgs) {
        let mut full = vec!["estimate"];
        full.extend_from_slice(args);
        match parse(&full).unwrap().command {
            Commands::Estimate {
                profile, config, ..
            } => (profile, config),
            _ => panic!("expected estimate"),
        }
    }

    #[test]
    fn defaults_match_original_form() {
        let (profile, config) = estimate_args(&[]);
        let input = load_profile(&profile, &config.resolve().unwrap()).unwrap();
        assert_eq!(input.age, 30);
        assert_eq!(input.body_mass_index, DEFAULT_BMI);
        assert!(!input.smokes);
        assert_eq!(input.daily_step_count, 5000);
        assert_eq!(input.stress_level, 5.0);
    }

    #[test]
    fn weight_and_height_become_bmi() {
        let (profile, config) = estimate_args(&["--weight", "70", "--height", "170"]);
        let input = load_profile(&profile, &config.resolve().unwrap()).unwrap();
        assert!((input.body_mass_index - 24.22).abs() < 0.01);
    }

    #[test]
    fn weight_without_height_is_rejected_by_clap() {
        assert!(parse(&["estimate", "--weight", "70"]).is_err());
    }

    #[test]
    fn zero_height_fails_validation() {
        let (profile, config) = estimate_args(&["--weight", "70", "--height", "0"]);
        let err = load_profile(&profile, &config.resolve().unwrap()).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<ValidationError>(),
            Some(ValidationError::InvalidHeight { .. })
        ));
    }

    #[test]
    fn answers_accept_several_spellings() {
        let (profile, _) = estimate_args(&["--smokes", "yes", "--drinks", "Да"]);
        assert!(profile.smokes);
        assert!(profile.drinks);
        assert!(parse(&["estimate", "--smokes", "sometimes"]).is_err());
    }

    #[test]
    fn preset_and_config_are_mutually_exclusive() {
        assert!(parse(&["estimate", "--preset", "banded", "--config", "x.toml"]).is_err());
    }

    #[test]
    fn unknown_preset_is_an_error() {
        let (_, config) = estimate_args(&["--preset", "nope"]);
        assert!(config.resolve().is_err());
    }

    #[test]
    fn config_file_is_loaded() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("lifespan.toml");
        std::fs::write(&path, "max_life_expectancy = 95.0\nbmi_policy = \"banded\"\n").unwrap();
        let (_, config) = estimate_args(&["--config", path.to_str().unwrap()]);
        let resolved = config.resolve().unwrap();
        assert_eq!(resolved.max_life_expectancy, 95.0);
    }

    #[test]
    fn age_outside_bounds_is_rejected() {
        let (profile, config) = estimate_args(&["--age", "12"]);
        assert!(load_profile(&profile, &config.resolve().unwrap()).is_err());
    }

    #[test]
    fn curve_defaults_cover_18_to_100() {
        match parse(&["curve"]).unwrap().command {
            Commands::Curve { from, to, csv, .. } => {
                assert_eq!((from, to), (18, 100));
                assert!(csv.is_none());
            }
            _ => panic!("expected curve"),
        }
    }

    #[test]
    fn reversed_curve_range_is_rejected() {
        let cli = parse(&["curve", "--from", "80", "--to", "20"]).unwrap();
        let Commands::Curve {
            profile,
            config,
            from,
            to,
            csv,
            format,
        } = cli.command
        else {
            panic!("expected curve");
        };
        assert!(run_curve(&profile, &config, from, to, csv, format).is_err());
    }

    #[test]
    fn verbose_is_global() {
        assert!(parse(&["presets", "-v"]).unwrap().verbose);
    }
}
