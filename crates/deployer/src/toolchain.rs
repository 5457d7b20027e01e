//! The seam between the deploy procedure and the toolchain that actually
//! talks to the chain, abstracted as a trait to enable unit testing with
//! mocks.

use {
    alloy::{
        network::EthereumWallet,
        primitives::Address,
        providers::{DynProvider, Provider, ProviderBuilder},
        signers::local::PrivateKeySigner,
    },
    anyhow::{Context, Result},
    contracts::PropertyToken,
    url::Url,
};

#[cfg_attr(test, mockall::automock)]
#[async_trait::async_trait]
pub trait Toolchain: Send + Sync {
    /// Submits the contract creation transaction for `PropertyToken` with the
    /// given oracle feed as its only constructor argument and suspends until
    /// the network confirms it.
    ///
    /// The feed is handed over exactly as configured; interpreting it is the
    /// toolchain's job.
    async fn deploy_property_token(&self, oracle_feed: &str) -> Result<Address>;
}

/// The production toolchain, backed by an Ethereum node.
pub struct Onchain {
    provider: DynProvider,
    /// Sender of the creation transaction when the provider carries no local
    /// signer and one of the node's unlocked accounts pays instead.
    from: Option<Address>,
}

impl Onchain {
    pub fn new(provider: DynProvider, from: Option<Address>) -> Self {
        Self { provider, from }
    }

    /// Connects to the node. With a private key the creation transaction is
    /// signed locally; without one the node's first unlocked account is used,
    /// which is how local development networks are usually operated.
    pub async fn connect(node_url: &Url, private_key: Option<&str>) -> Result<Self> {
        match private_key {
            Some(key) => {
                let signer: PrivateKeySigner = key.parse().context("invalid private key")?;
                let provider = ProviderBuilder::new()
                    .wallet(EthereumWallet::new(signer))
                    .connect(node_url.as_str())
                    .await
                    .with_context(|| format!("failed to connect to node at {node_url}"))?
                    .erased();
                Ok(Self::new(provider, None))
            }
            None => {
                let provider = ProviderBuilder::new()
                    .connect(node_url.as_str())
                    .await
                    .with_context(|| format!("failed to connect to node at {node_url}"))?
                    .erased();
                let accounts = provider
                    .get_accounts()
                    .await
                    .context("failed to fetch unlocked accounts from the node")?;
                let from = accounts.first().copied().context(
                    "node exposes no unlocked accounts and no private key was configured",
                )?;
                Ok(Self::new(provider, Some(from)))
            }
        }
    }
}

#[async_trait::async_trait]
impl Toolchain for Onchain {
    async fn deploy_property_token(&self, oracle_feed: &str) -> Result<Address> {
        let feed: Address = oracle_feed
            .parse()
            .with_context(|| format!("invalid oracle feed address {oracle_feed:?}"))?;
        let builder = PropertyToken::Instance::deploy_builder(self.provider.clone(), feed);
        let builder = match self.from {
            Some(from) => builder.from(from),
            None => builder,
        };
        let address = builder
            .deploy()
            .await
            .context("PropertyToken deployment was not confirmed")?;
        tracing::debug!(%address, "PropertyToken creation transaction confirmed");
        Ok(address)
    }
}
