// src/config.rs

//! Cluster bootstrap config file I/O.
//!
//! A TOML list of named clusters that the CLI under test can be pointed at.
//! Scenarios write a private copy and hand its path to a
//! [`CliClient`](crate::cli::CliClient) so they never disturb each other's
//! cluster state.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::errors::{JobwatchError, Result};

/// One cluster entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClusterConfig {
    pub name: String,
    pub git_host: String,
    pub controller_url: String,
    pub key: String,
}

/// On-disk config: zero or more `[[cluster]]` tables.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ConfigFile {
    #[serde(default, rename = "cluster")]
    pub clusters: Vec<ClusterConfig>,
}

impl ConfigFile {
    /// Read and parse a config file. A missing file is an IO error, not an
    /// empty config.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let contents = fs::read_to_string(path)?;
        let config = toml::from_str(&contents)?;
        Ok(config)
    }

    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let contents = toml::to_string_pretty(self)?;
        fs::write(path, contents)?;
        Ok(())
    }

    /// Add a cluster. Existing names are never overwritten; adding a
    /// duplicate is an error.
    pub fn add_cluster(&mut self, cluster: ClusterConfig) -> Result<()> {
        if self.cluster(&cluster.name).is_some() {
            return Err(JobwatchError::ConfigError(format!(
                "cluster '{}' already exists",
                cluster.name
            )));
        }
        self.clusters.push(cluster);
        Ok(())
    }

    /// Remove a cluster by name; returns false if no such cluster existed.
    pub fn remove_cluster(&mut self, name: &str) -> bool {
        let before = self.clusters.len();
        self.clusters.retain(|c| c.name != name);
        self.clusters.len() != before
    }

    pub fn cluster(&self, name: &str) -> Option<&ClusterConfig> {
        self.clusters.iter().find(|c| c.name == name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_cluster(name: &str) -> ClusterConfig {
        ClusterConfig {
            name: name.to_string(),
            git_host: "test.example.com:2222".to_string(),
            controller_url: "https://controller.test.example.com".to_string(),
            key: "e09dc5301d72be755a3d666f617c4600".to_string(),
        }
    }

    #[test]
    fn round_trips_through_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("rc.toml");

        let mut config = ConfigFile::default();
        config.add_cluster(test_cluster("test")).unwrap();
        config.save(&path).unwrap();

        let loaded = ConfigFile::load(&path).unwrap();
        assert_eq!(loaded.clusters.len(), 1);
        assert_eq!(loaded.cluster("test"), config.cluster("test"));
    }

    #[test]
    fn duplicate_names_are_rejected() {
        let mut config = ConfigFile::default();
        config.add_cluster(test_cluster("test")).unwrap();

        let err = config.add_cluster(test_cluster("test")).unwrap_err();
        assert!(matches!(err, JobwatchError::ConfigError(_)));
        assert_eq!(config.clusters.len(), 1);
    }

    #[test]
    fn remove_empties_the_config() {
        let mut config = ConfigFile::default();
        config.add_cluster(test_cluster("test")).unwrap();

        assert!(config.remove_cluster("test"));
        assert!(!config.remove_cluster("test"));
        assert!(config.clusters.is_empty());
    }

    #[test]
    fn empty_file_parses_to_no_clusters() {
        let config: ConfigFile = toml::from_str("").unwrap();
        assert!(config.clusters.is_empty());
    }
}
