use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Summary report configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportConfig {
    /// Directory holding one sub-directory of summary files per test
    #[serde(default = "default_out_dir")]
    pub out_dir: PathBuf,

    /// Name of the test directory holding find-providers runs
    #[serde(default = "default_find_provs_test")]
    pub find_provs_test: String,

    /// Output path of the find-providers table
    #[serde(default = "default_find_provs_csv")]
    pub find_provs_csv: PathBuf,

    /// Output path of the fetch table
    #[serde(default = "default_fetch_csv")]
    pub fetch_csv: PathBuf,

    /// Emit a `Kubo get` row per fetch run
    #[serde(default)]
    pub include_kubo_fetch: bool,

    /// Emit a `Kubo Find Provs` row per find-providers run
    #[serde(default)]
    pub include_kubo_find_provs: bool,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            out_dir: default_out_dir(),
            find_provs_test: default_find_provs_test(),
            find_provs_csv: default_find_provs_csv(),
            fetch_csv: default_fetch_csv(),
            include_kubo_fetch: false,
            include_kubo_find_provs: false,
        }
    }
}

fn default_out_dir() -> PathBuf {
    PathBuf::from("out")
}

fn default_find_provs_test() -> String {
    "find provs".to_string()
}

fn default_find_provs_csv() -> PathBuf {
    PathBuf::from("results/results_find_provs.csv")
}

fn default_fetch_csv() -> PathBuf {
    PathBuf::from("results/results_fetch.csv")
}
