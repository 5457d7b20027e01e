pub mod arguments;
pub mod deploy;
pub mod toolchain;

use {
    alloy::primitives::Address,
    deploy::{DeploymentConfig, Error},
    toolchain::Onchain,
};

/// Runs one deployment: validate the configuration, connect to the node,
/// submit the `PropertyToken` creation transaction and wait for it to be
/// confirmed. A single failed attempt is terminal for the invocation.
pub async fn run(args: arguments::Arguments) -> Result<Address, Error> {
    let config = DeploymentConfig {
        oracle_feed_address: args.chainlink_feed.clone(),
    };
    // Configuration problems must surface before the node is contacted.
    config.oracle_feed()?;

    let toolchain = Onchain::connect(&args.node_url, args.private_key.as_deref())
        .await
        .map_err(Error::Deployment)?;
    deploy::deploy(&toolchain, &config).await
}

/// The single line a successful run writes to stdout.
pub fn success_message(address: Address) -> String {
    format!("PropertyToken deployed at: {address}")
}
