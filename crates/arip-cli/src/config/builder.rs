use super::defaults::DefaultsConfig;
use super::file::FileConfig;
use super::models::AppConfig;
use crate::cli::InspectArgs;
use crate::error::{CliError, Result};

pub fn build_config(args: &InspectArgs) -> Result<AppConfig> {
    let defaults = DefaultsConfig::default();

    let file_config = if let Some(config_path) = &args.config {
        FileConfig::from_file(config_path)?
    } else {
        FileConfig::default()
    };

    let mut file_config = apply_set_values(file_config, &args.set_values)?;

    let lookup_file = file_config.lookup.take().unwrap_or_default();
    let probe_radius = args
        .probe_radius
        .or(lookup_file.probe_radius)
        .unwrap_or(defaults.probe_radius);
    if !(probe_radius.is_finite() && probe_radius >= 0.0) {
        return Err(CliError::Config(format!(
            "`lookup.probe-radius` must be a non-negative number, got {}",
            probe_radius
        )));
    }
    let lookup_path = args.lookup.clone().or(lookup_file.table_path);

    let inputs_file = file_config.inputs.take().unwrap_or_default();
    let extensions = inputs_file.extensions.unwrap_or(defaults.extensions);
    if extensions.is_empty() {
        return Err(CliError::Config(
            "`inputs.extensions` must list at least one extension".to_string(),
        ));
    }

    let output_file = file_config.output.take().unwrap_or_default();
    let dump = args.dump || output_file.dump.unwrap_or(defaults.dump);

    Ok(AppConfig {
        inputs: args.inputs.clone(),
        lookup_path,
        probe_radius,
        extensions,
        dump,
    })
}

fn apply_set_values(mut config: FileConfig, set_values: &[String]) -> Result<FileConfig> {
    for kv_pair in set_values {
        let Some((key, value_str)) = kv_pair.split_once('=') else {
            return Err(CliError::Config(format!(
                "Invalid --set format: '{}'. Expected KEY=VALUE.",
                kv_pair
            )));
        };

        match key {
            "lookup.probe-radius" => {
                config
                    .lookup
                    .get_or_insert_with(Default::default)
                    .probe_radius = Some(value_str.parse().map_err(|_| {
                    CliError::Config(format!("Invalid float value for {}: {}", key, value_str))
                })?);
            }
            "lookup.table-path" => {
                config.lookup.get_or_insert_with(Default::default).table_path =
                    Some(value_str.into());
            }
            "inputs.extensions" => {
                config.inputs.get_or_insert_with(Default::default).extensions = Some(
                    value_str
                        .split(',')
                        .map(str::trim)
                        .filter(|ext| !ext.is_empty())
                        .map(String::from)
                        .collect(),
                );
            }
            "output.dump" => {
                config.output.get_or_insert_with(Default::default).dump =
                    Some(value_str.parse().map_err(|_| {
                        CliError::Config(format!(
                            "Invalid boolean value for {}: {}",
                            key, value_str
                        ))
                    })?);
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
