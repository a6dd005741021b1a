//! Plan command implementation for the Compass CLI.

use std::io::{BufReader, Write};

use camino::{Utf8Path, Utf8PathBuf};
use clap::Parser;
use compass_core::{
    Itinerary, MemoryCatalogue, PlanarWalkingEstimator, PoiCatalogue, PointOfInterest,
    Preferences, SequenceRequest, Sequencer, WeatherState,
};
use compass_fs::{create_utf8_file, open_utf8_file};
use compass_sequencer::{Alternative, GreedySequencer, SequencerConfig};
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use serde::{Deserialize, Serialize};

use crate::{
    ARG_PLAN_ALTERNATIVES, ARG_PLAN_CATALOGUE, ARG_PLAN_MINUTES_PER_KM, ARG_PLAN_OUTPUT,
    ARG_PLAN_REQUEST, CliError, ENV_PLAN_REQUEST,
};

/// CLI arguments for the `plan` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    long_about = "Sequence a day of sightseeing. The request is a JSON \
                 PlanRequest holding inline candidates and/or ids selected \
                 from a catalogue, the visitor's preferences and the \
                 weather. The timed itinerary is printed as JSON.",
    about = "Plan a day itinerary"
)]
#[ortho_config(prefix = "COMPASS")]
pub(crate) struct PlanArgs {
    /// Path to a JSON file containing a PlanRequest.
    #[arg(value_name = "path")]
    #[serde(default)]
    pub(crate) request_path: Option<Utf8PathBuf>,
    /// JSON array of points of interest that `selected` ids resolve against.
    #[arg(long = ARG_PLAN_CATALOGUE, value_name = "path")]
    #[serde(default)]
    pub(crate) catalogue: Option<Utf8PathBuf>,
    /// Walking pace used for leg estimates.
    #[arg(long = ARG_PLAN_MINUTES_PER_KM, value_name = "minutes")]
    #[serde(default)]
    pub(crate) minutes_per_km: Option<f64>,
    /// Also derive weather and crowd variants of the plan.
    #[arg(
        long = ARG_PLAN_ALTERNATIVES,
        num_args = 0..=1,
        require_equals = true,
        default_missing_value = "true",
        value_name = "bool"
    )]
    #[serde(default)]
    pub(crate) alternatives: Option<bool>,
    /// Write the plan to this file instead of stdout.
    #[arg(long = ARG_PLAN_OUTPUT, value_name = "path")]
    #[serde(default)]
    pub(crate) output: Option<Utf8PathBuf>,
}

impl PlanArgs {
    pub(crate) fn into_config(self) -> Result<PlanConfig, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        PlanConfig::try_from(merged)
    }
}

/// Resolved `plan` command configuration.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct PlanConfig {
    pub(crate) request_path: Utf8PathBuf,
    pub(crate) catalogue: Option<Utf8PathBuf>,
    pub(crate) minutes_per_km: f64,
    pub(crate) alternatives: bool,
    pub(crate) output: Option<Utf8PathBuf>,
}

impl PlanConfig {
    pub(crate) fn validate_sources(&self) -> Result<(), CliError> {
        Self::require_existing(&self.request_path, ARG_PLAN_REQUEST)?;
        if let Some(catalogue) = &self.catalogue {
            Self::require_existing(catalogue, ARG_PLAN_CATALOGUE)?;
        }
        Ok(())
    }

    fn require_existing(path: &Utf8Path, field: &'static str) -> Result<(), CliError> {
        match compass_fs::file_is_file(path) {
            Ok(true) => Ok(()),
            Ok(false) => Err(CliError::SourcePathNotFile {
                field,
                path: path.to_path_buf(),
            }),
            Err(source) if source.kind() == std::io::ErrorKind::NotFound => {
                Err(CliError::MissingSourceFile {
                    field,
                    path: path.to_path_buf(),
                })
            }
            Err(source) => Err(CliError::InspectSourcePath {
                field,
                path: path.to_path_buf(),
                source,
            }),
        }
    }

    fn sequencer(&self) -> GreedySequencer {
        GreedySequencer::with_estimator(
            PlanarWalkingEstimator::with_pace(self.minutes_per_km),
            SequencerConfig::default(),
        )
    }
}

impl TryFrom<PlanArgs> for PlanConfig {
    type Error = CliError;

    fn try_from(args: PlanArgs) -> Result<Self, Self::Error> {
        let request_path = args.request_path.ok_or(CliError::MissingArgument {
            field: ARG_PLAN_REQUEST,
            env: ENV_PLAN_REQUEST,
        })?;
        let minutes_per_km = args
            .minutes_per_km
            .unwrap_or(PlanarWalkingEstimator::MINUTES_PER_KM);
        if !minutes_per_km.is_finite() || minutes_per_km <= 0.0 {
            return Err(CliError::InvalidPace {
                value: minutes_per_km,
            });
        }
        Ok(Self {
            request_path,
            catalogue: args.catalogue,
            minutes_per_km,
            alternatives: args.alternatives.unwrap_or(false),
            output: args.output,
        })
    }
}

/// JSON payload accepted by `compass plan`.
///
/// Inline `candidates` come first, followed by the `selected` catalogue
/// entries in the order they were picked.
#[derive(Debug, Clone, PartialEq, Default, Deserialize, Serialize)]
pub(crate) struct PlanRequest {
    #[serde(default)]
    pub(crate) candidates: Vec<PointOfInterest>,
    #[serde(default)]
    pub(crate) selected: Vec<u64>,
    #[serde(default)]
    pub(crate) preferences: Preferences,
    #[serde(default)]
    pub(crate) weather: WeatherState,
}

impl PlanRequest {
    /// Resolve catalogue selections into a sequencing request.
    pub(crate) fn resolve(
        self,
        catalogue: Option<&dyn PoiCatalogue>,
    ) -> Result<SequenceRequest, CliError> {
        let Self {
            mut candidates,
            selected,
            preferences,
            weather,
        } = self;
        if !selected.is_empty() {
            let source = catalogue.ok_or(CliError::SelectionWithoutCatalogue {
                count: selected.len(),
            })?;
            let found = source.pois_by_id(&selected);
            if found.len() < selected.len() {
                let missing: Vec<u64> = selected
                    .iter()
                    .copied()
                    .filter(|id| !found.iter().any(|poi| poi.id == *id))
                    .collect();
                log::warn!("selected places {missing:?} are not in the catalogue");
            }
            candidates.extend(found);
        }
        Ok(SequenceRequest {
            candidates,
            preferences,
            weather,
        })
    }
}

/// JSON document written by `compass plan`.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub(crate) struct PlanResponse {
    pub(crate) itinerary: Itinerary,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub(crate) alternatives: Vec<Alternative>,
}

pub(crate) fn run_plan(args: PlanArgs) -> Result<(), CliError> {
    let mut stdout = std::io::stdout().lock();
    run_plan_with(args, &mut stdout)
}

pub(crate) fn run_plan_with(args: PlanArgs, writer: &mut dyn Write) -> Result<(), CliError> {
    let config = resolve_plan_config(args)?;
    let response = execute_plan(&config)?;
    let Some(path) = &config.output else {
        return write_plan_response(writer, &response);
    };
    let mut file = create_utf8_file(path).map_err(|source| CliError::CreateOutput {
        path: path.clone(),
        source,
    })?;
    write_plan_response(&mut file, &response)?;
    log::info!("wrote plan to {path}");
    Ok(())
}

fn resolve_plan_config(args: PlanArgs) -> Result<PlanConfig, CliError> {
    let config = args.into_config()?;
    config.validate_sources()?;
    Ok(config)
}

fn execute_plan(config: &PlanConfig) -> Result<PlanResponse, CliError> {
    let payload = load_plan_request(&config.request_path)?;
    let catalogue = config
        .catalogue
        .as_deref()
        .map(load_catalogue)
        .transpose()?;
    let request = payload.resolve(catalogue.as_ref().map(|c| c as &dyn PoiCatalogue))?;

    let sequencer = config.sequencer();
    let response = if config.alternatives {
        let plans = sequencer
            .plan(&request)
            .map_err(|source| CliError::Sequence { source })?;
        PlanResponse {
            itinerary: plans.primary,
            alternatives: plans.alternatives,
        }
    } else {
        let itinerary = sequencer
            .sequence(&request)
            .map_err(|source| CliError::Sequence { source })?;
        PlanResponse {
            itinerary,
            alternatives: Vec::new(),
        }
    };
    log::info!(
        "planned {} stops from {} candidates",
        response.itinerary.stops.len(),
        request.candidates.len()
    );
    Ok(response)
}

/// Loads a JSON-encoded [`PlanRequest`] from disk.
pub(crate) fn load_plan_request(path: &Utf8Path) -> Result<PlanRequest, CliError> {
    let file = open_utf8_file(path).map_err(|source| CliError::OpenPlanRequest {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_reader(BufReader::new(file)).map_err(|source| CliError::ParsePlanRequest {
        path: path.to_path_buf(),
        source,
    })
}

/// Loads a catalogue stored as a JSON array of points of interest.
pub(crate) fn load_catalogue(path: &Utf8Path) -> Result<MemoryCatalogue, CliError> {
    let file = open_utf8_file(path).map_err(|source| CliError::OpenCatalogue {
        path: path.to_path_buf(),
        source,
    })?;
    let pois: Vec<PointOfInterest> = serde_json::from_reader(BufReader::new(file))
        .map_err(|source| CliError::ParseCatalogue {
            path: path.to_path_buf(),
            source,
        })?;
    log::debug!("loaded {} catalogue entries from {path}", pois.len());
    Ok(MemoryCatalogue::with_pois(pois))
}

fn write_plan_response(writer: &mut dyn Write, response: &PlanResponse) -> Result<(), CliError> {
    let payload =
        serde_json::to_string_pretty(response).map_err(CliError::SerialisePlanResponse)?;
    writer
        .write_all(payload.as_bytes())
        .map_err(CliError::WritePlanOutput)?;
    writer.write_all(b"\n").map_err(CliError::WritePlanOutput)?;
    Ok(())
}

#[cfg(test)]
pub(crate) fn config_from_layers_for_test(
    layers: Vec<ortho_config::MergeLayer<'static>>,
) -> Result<PlanConfig, CliError> {
    let merged = PlanArgs::merge_from_layers(layers).map_err(CliError::from)?;
    PlanConfig::try_from(merged)
}
