use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::ReportError;

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct ReportConfig {
    #[serde(alias = "report_dir", alias = "report-dir")]
    pub report_dir: Option<String>,
    pub hostname: Option<String>,
    pub verbose: Option<bool>,
    #[serde(alias = "diagnostics_dir", alias = "diagnostics-dir")]
    pub diagnostics_dir: Option<String>,
}

pub fn discover_config_path(dir: &Path) -> Option<PathBuf> {
    let names = [
        "ocunit2junit.toml",
        ".ocunit2junitrc.json",
        ".ocunit2junitrc.yaml",
        ".ocunit2junitrc.yml",
    ];
    names
        .into_iter()
        .map(|name| dir.join(name))
        .find(|p| p.exists())
}

pub fn load_report_config(dir: &Path) -> Result<ReportConfig, ReportError> {
    let Some(path) = discover_config_path(dir) else {
        return Ok(ReportConfig::default());
    };
    load_report_config_from_path(&path)
}

pub fn load_report_config_from_path(path: &Path) -> Result<ReportConfig, ReportError> {
    let ext = path
        .extension()
        .and_then(|x| x.to_str())
        .unwrap_or("")
        .to_ascii_lowercase();

    match ext.as_str() {
        "json" => load_json_config(path),
        "yaml" | "yml" => load_yaml_config(path),
        "toml" => load_toml_config(path),
        _ => Ok(ReportConfig::default()),
    }
}

fn load_json_config(path: &Path) -> Result<ReportConfig, ReportError> {
    let raw = std::fs::read_to_string(path).map_err(|source| ReportError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str::<ReportConfig>(&raw).map_err(|err| ReportError::ConfigParse {
        path: path.to_path_buf(),
        message: err.to_string(),
    })
}

fn load_yaml_config(path: &Path) -> Result<ReportConfig, ReportError> {
    let raw = std::fs::read_to_string(path).map_err(|source| ReportError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    serde_yaml::from_str::<ReportConfig>(&raw).map_err(|err| ReportError::ConfigParse {
        path: path.to_path_buf(),
        message: err.to_string(),
    })
}

fn load_toml_config(path: &Path) -> Result<ReportConfig, ReportError> {
    let raw = std::fs::read_to_string(path).map_err(|source| ReportError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    toml::from_str::<ReportConfig>(&raw).map_err(|err| ReportError::ConfigParse {
        path: path.to_path_buf(),
        message: err.to_string(),
    })
}
