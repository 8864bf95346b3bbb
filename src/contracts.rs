use std::sync::LazyLock;

use alloy_primitives::{address, Address};
use serde_json::Value;

use crate::registry::{ContractRegistry, EthereumContract};

/// The zero address.
pub const ZERO_ADDRESS: Address = Address::ZERO;

/// Pseudo-address Aave uses to represent plain ETH in its reserves.
pub const AAVE_ETH_RESERVE_ADDRESS: Address =
    address!("EeeeeEeeeEeEeeEeEeEeeEEEeeeeEeeeeeeeEEeE");

fn contract(name: &str) -> &'static EthereumContract {
    ContractRegistry::shared().contract(name)
}

// Latest MakerDAO contract addresses are in the makerdao changelog:
// https://changelog.makerdao.com/releases/mainnet/1.0.6/contracts.json

/// MakerDAO `DaiJoin` DAI adapter.
pub static MAKERDAO_DAI_JOIN: LazyLock<&'static EthereumContract> =
    LazyLock::new(|| contract("MAKERDAO_DAI_JOIN"));
/// MakerDAO CDP manager.
pub static MAKERDAO_CDP_MANAGER: LazyLock<&'static EthereumContract> =
    LazyLock::new(|| contract("MAKERDAO_CDP_MANAGER"));
/// MakerDAO `GetCdps` CDP enumeration helper.
pub static MAKERDAO_GET_CDPS: LazyLock<&'static EthereumContract> =
    LazyLock::new(|| contract("MAKERDAO_GET_CDPS"));
/// MakerDAO DS-Proxy registry.
pub static MAKERDAO_PROXY_REGISTRY: LazyLock<&'static EthereumContract> =
    LazyLock::new(|| contract("MAKERDAO_PROXY_REGISTRY"));
/// MakerDAO `Spot` liquidation price oracle hook.
pub static MAKERDAO_SPOT: LazyLock<&'static EthereumContract> =
    LazyLock::new(|| contract("MAKERDAO_SPOT"));
/// MakerDAO `Pot` DSR accumulator.
pub static MAKERDAO_POT: LazyLock<&'static EthereumContract> =
    LazyLock::new(|| contract("MAKERDAO_POT"));
/// MakerDAO `Vat` CDP engine.
pub static MAKERDAO_VAT: LazyLock<&'static EthereumContract> =
    LazyLock::new(|| contract("MAKERDAO_VAT"));
/// MakerDAO `ETH-A` collateral adapter.
pub static MAKERDAO_ETH_A_JOIN: LazyLock<&'static EthereumContract> =
    LazyLock::new(|| contract("MAKERDAO_ETH_A_JOIN"));
/// MakerDAO `BAT-A` collateral adapter.
pub static MAKERDAO_BAT_A_JOIN: LazyLock<&'static EthereumContract> =
    LazyLock::new(|| contract("MAKERDAO_BAT_A_JOIN"));
/// MakerDAO `USDC-A` collateral adapter.
pub static MAKERDAO_USDC_A_JOIN: LazyLock<&'static EthereumContract> =
    LazyLock::new(|| contract("MAKERDAO_USDC_A_JOIN"));
/// MakerDAO `USDC-B` collateral adapter.
pub static MAKERDAO_USDC_B_JOIN: LazyLock<&'static EthereumContract> =
    LazyLock::new(|| contract("MAKERDAO_USDC_B_JOIN"));
/// MakerDAO `WBTC-A` collateral adapter.
pub static MAKERDAO_WBTC_A_JOIN: LazyLock<&'static EthereumContract> =
    LazyLock::new(|| contract("MAKERDAO_WBTC_A_JOIN"));
/// MakerDAO `KNC-A` collateral adapter.
pub static MAKERDAO_KNC_A_JOIN: LazyLock<&'static EthereumContract> =
    LazyLock::new(|| contract("MAKERDAO_KNC_A_JOIN"));
/// MakerDAO `TUSD-A` collateral adapter.
pub static MAKERDAO_TUSD_A_JOIN: LazyLock<&'static EthereumContract> =
    LazyLock::new(|| contract("MAKERDAO_TUSD_A_JOIN"));
/// MakerDAO `ZRX-A` collateral adapter.
pub static MAKERDAO_ZRX_A_JOIN: LazyLock<&'static EthereumContract> =
    LazyLock::new(|| contract("MAKERDAO_ZRX_A_JOIN"));
/// MakerDAO `Cat` liquidation agent.
pub static MAKERDAO_CAT: LazyLock<&'static EthereumContract> =
    LazyLock::new(|| contract("MAKERDAO_CAT"));
/// MakerDAO `Jug` stability fee collector.
pub static MAKERDAO_JUG: LazyLock<&'static EthereumContract> =
    LazyLock::new(|| contract("MAKERDAO_JUG"));

/// Balance scanner contract used for batched ETH and token balance queries.
pub static ETH_SCAN: LazyLock<&'static EthereumContract> =
    LazyLock::new(|| contract("ETH_SCAN"));

/// Aave v1 lending pool.
pub static AAVE_LENDING_POOL: LazyLock<&'static EthereumContract> =
    LazyLock::new(|| contract("AAVE_LENDING_POOL"));

/// ABI shared by all Aave aTokens.
pub static ATOKEN_ABI: LazyLock<&'static [Value]> =
    LazyLock::new(|| ContractRegistry::shared().abi("ATOKEN"));

/// ABI of the Zerion DeFi adapter registry.
pub static ZERION_ABI: LazyLock<&'static [Value]> =
    LazyLock::new(|| ContractRegistry::shared().abi("ZERION_ADAPTER"));
