use std::{
    collections::HashMap,
    fs::read_to_string,
    path::{Path, PathBuf},
    sync::LazyLock,
};

use alloy_primitives::Address;
use serde::Deserialize;
use serde_json::Value;
use thiserror::Error;
use tracing::debug;

/// Contract metadata embedded into the binary at compile time.
const BUNDLED_CONTRACTS: &str = include_str!("../data/eth_contracts.json");
/// Standalone ABIs embedded into the binary at compile time.
const BUNDLED_ABIS: &str = include_str!("../data/eth_abi.json");

/// File name of the contract metadata inside a registry data directory.
pub const CONTRACTS_FILE: &str = "eth_contracts.json";
/// File name of the standalone ABIs inside a registry data directory.
pub const ABIS_FILE: &str = "eth_abi.json";

static SHARED: LazyLock<ContractRegistry> = LazyLock::new(ContractRegistry::bundled);

/// Errors that can occur while loading a registry from a data directory.
#[derive(Debug, Error)]
pub enum RegistryError {
    /// Reading one of the data files failed.
    #[error("failed to read registry data from {}: {source}", path.display())]
    Io {
        /// Path of the file that could not be read.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },
    /// One of the data files does not hold the expected JSON shape.
    #[error("failed to parse {file}: {source}")]
    Parse {
        /// Name of the malformed data file.
        file: &'static str,
        /// The underlying JSON error.
        #[source]
        source: serde_json::Error,
    },
}

/// Metadata of a deployed Ethereum contract.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct EthereumContract {
    /// Checksummed address the contract is deployed at.
    pub address: Address,
    /// ABI entries describing the contract's interface. Kept as opaque
    /// JSON objects and handed to the contract-call machinery as-is.
    pub abi: Vec<Value>,
    /// Block number the contract was deployed at.
    pub deployed_block: u64,
}

/// Read-only mapping from contract names to their on-chain metadata,
/// plus standalone ABIs that are shared by whole families of contracts
/// (e.g. every Aave aToken).
///
/// The usual entry point is [`ContractRegistry::shared`], which parses the
/// bundled data once per process. Callers that want to control the
/// lifecycle themselves can load from a directory with
/// [`ContractRegistry::from_dir`] instead.
#[derive(Debug, Clone, Default)]
pub struct ContractRegistry {
    contracts: HashMap<String, EthereumContract>,
    abis: HashMap<String, Vec<Value>>,
}

impl ContractRegistry {
    /// Parses the registry from the data files bundled with the crate.
    ///
    /// # Panics
    ///
    /// Panics if the bundled data is malformed.
    pub fn bundled() -> Self {
        Self::from_parts(BUNDLED_CONTRACTS, BUNDLED_ABIS)
            .unwrap_or_else(|err| panic!("bundled registry data is malformed: {err}"))
    }

    /// Loads the registry from `eth_contracts.json` and `eth_abi.json`
    /// inside the given directory.
    pub fn from_dir(dir: impl AsRef<Path>) -> Result<Self, RegistryError> {
        let dir = dir.as_ref();
        let contracts = read_data_file(&dir.join(CONTRACTS_FILE))?;
        let abis = read_data_file(&dir.join(ABIS_FILE))?;

        Self::from_parts(&contracts, &abis)
    }

    fn from_parts(contracts: &str, abis: &str) -> Result<Self, RegistryError> {
        let contracts: HashMap<String, EthereumContract> = serde_json::from_str(contracts)
            .map_err(|source| RegistryError::Parse { file: CONTRACTS_FILE, source })?;
        let abis: HashMap<String, Vec<Value>> = serde_json::from_str(abis)
            .map_err(|source| RegistryError::Parse { file: ABIS_FILE, source })?;

        debug!(contracts = contracts.len(), abis = abis.len(), "loaded contract registry");

        Ok(Self { contracts, abis })
    }

    /// Returns the process-wide registry backed by the bundled data.
    ///
    /// The data is parsed on first access and reused for the lifetime of
    /// the process.
    pub fn shared() -> &'static Self {
        &SHARED
    }

    /// Returns the full contract mapping.
    pub fn get(&self) -> &HashMap<String, EthereumContract> {
        &self.contracts
    }

    /// Gets the metadata of a contract, or `None` if the name is unknown.
    pub fn contract_or_none(&self, name: &str) -> Option<&EthereumContract> {
        self.contracts.get(name)
    }

    /// Gets the metadata of a contract.
    ///
    /// # Panics
    ///
    /// Panics if the name is unknown. Looking up a contract that is not in
    /// the data files is a bug in the caller or the data, not a
    /// recoverable condition.
    pub fn contract(&self, name: &str) -> &EthereumContract {
        self.contract_or_none(name)
            .unwrap_or_else(|| panic!("no contract data for {name} found"))
    }

    /// Gets a standalone ABI, or `None` if the name is unknown.
    pub fn abi_or_none(&self, name: &str) -> Option<&[Value]> {
        self.abis.get(name).map(Vec::as_slice)
    }

    /// Gets a standalone ABI.
    ///
    /// # Panics
    ///
    /// Panics if the name is unknown.
    pub fn abi(&self, name: &str) -> &[Value] {
        self.abi_or_none(name).unwrap_or_else(|| panic!("no abi for {name} found"))
    }
}

fn read_data_file(path: &Path) -> Result<String, RegistryError> {
    read_to_string(path).map_err(|source| RegistryError::Io { path: path.to_path_buf(), source })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn contract_lookups_agree_for_present_names() {
        let registry = ContractRegistry::shared();
        for name in registry.get().keys() {
            assert_eq!(Some(registry.contract(name)), registry.contract_or_none(name));
        }
    }

    #[test]
    fn missing_contract_returns_none() {
        assert!(ContractRegistry::shared().contract_or_none("NOT_A_CONTRACT").is_none());
    }

    #[test]
    #[should_panic(expected = "no contract data for NOT_A_CONTRACT found")]
    fn missing_contract_panics() {
        ContractRegistry::shared().contract("NOT_A_CONTRACT");
    }

    #[test]
    fn missing_abi_returns_none() {
        assert!(ContractRegistry::shared().abi_or_none("NOT_AN_ABI").is_none());
    }

    #[test]
    #[should_panic(expected = "no abi for NOT_AN_ABI found")]
    fn missing_abi_panics() {
        ContractRegistry::shared().abi("NOT_AN_ABI");
    }

    #[test]
    fn shared_registry_is_a_singleton() {
        assert!(std::ptr::eq(ContractRegistry::shared(), ContractRegistry::shared()));
    }

    #[test]
    fn from_dir_matches_bundled_data() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join(CONTRACTS_FILE), BUNDLED_CONTRACTS).unwrap();
        std::fs::write(dir.path().join(ABIS_FILE), BUNDLED_ABIS).unwrap();

        let registry = ContractRegistry::from_dir(dir.path()).unwrap();
        let shared = ContractRegistry::shared();

        assert_eq!(registry.get(), shared.get());
        assert_eq!(registry.abi("ATOKEN"), shared.abi("ATOKEN"));
        assert_eq!(registry.abi("ZERION_ADAPTER"), shared.abi("ZERION_ADAPTER"));
    }

    #[test]
    fn from_dir_reports_missing_files() {
        let dir = tempfile::tempdir().unwrap();

        let err = ContractRegistry::from_dir(dir.path()).unwrap_err();
        assert!(matches!(err, RegistryError::Io { .. }));
    }

    #[test]
    fn from_dir_reports_malformed_json() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join(CONTRACTS_FILE), "{not json").unwrap();
        std::fs::write(dir.path().join(ABIS_FILE), "{}").unwrap();

        let err = ContractRegistry::from_dir(dir.path()).unwrap_err();
        assert!(matches!(err, RegistryError::Parse { file: CONTRACTS_FILE, .. }));
    }
}
