use {crate::toolchain::Toolchain, alloy::primitives::Address};

/// The single transient value a deployment needs, sourced from the
/// `CHAINLINK_FEED` environment variable. Nothing is persisted across
/// invocations.
#[derive(Debug, Clone, Default)]
pub struct DeploymentConfig {
    pub oracle_feed_address: Option<String>,
}

impl DeploymentConfig {
    /// Returns the configured oracle feed or a configuration error. An empty
    /// value is treated the same as an absent one.
    pub fn oracle_feed(&self) -> Result<&str, Error> {
        self.oracle_feed_address
            .as_deref()
            .filter(|address| !address.is_empty())
            .ok_or(Error::Configuration("missing oracle feed address"))
    }
}

/// Errors that abort a deployment run. Both kinds are fatal for the
/// invocation; nothing is retried.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A required configuration value is absent. Raised before any network
    /// interaction is attempted.
    #[error("configuration error: {0}")]
    Configuration(&'static str),
    /// The toolchain failed during factory resolution, submission or
    /// confirmation.
    #[error(transparent)]
    Deployment(#[from] anyhow::Error),
}

/// Deploys `PropertyToken` with the configured oracle feed as its only
/// constructor argument and returns the confirmed on-chain address.
///
/// The feed reaches the toolchain exactly as configured. Two runs with the
/// same configuration perform two independent deployments; there is no
/// deduplication.
pub async fn deploy(
    toolchain: &dyn Toolchain,
    config: &DeploymentConfig,
) -> Result<Address, Error> {
    let oracle_feed = config.oracle_feed()?;
    let address = toolchain.deploy_property_token(oracle_feed).await?;
    tracing::info!(%address, "PropertyToken deployment confirmed");
    Ok(address)
}

#[cfg(test)]
mod tests {
    use {super::*, crate::toolchain::MockToolchain, alloy::primitives::address};

    fn config(oracle_feed: Option<&str>) -> DeploymentConfig {
        DeploymentConfig {
            oracle_feed_address: oracle_feed.map(str::to_string),
        }
    }

    #[tokio::test]
    async fn missing_feed_fails_before_any_deployment_attempt() {
        let mut toolchain = MockToolchain::new();
        toolchain.expect_deploy_property_token().never();

        let result = deploy(&toolchain, &config(None)).await;
        assert!(matches!(result, Err(Error::Configuration(_))));
    }

    #[tokio::test]
    async fn empty_feed_is_treated_as_missing() {
        let mut toolchain = MockToolchain::new();
        toolchain.expect_deploy_property_token().never();

        let result = deploy(&toolchain, &config(Some(""))).await;
        let err = result.unwrap_err();
        assert!(matches!(err, Error::Configuration(_)));
        assert!(err.to_string().contains("missing oracle feed address"));
    }

    #[tokio::test]
    async fn passes_the_feed_to_the_factory_unchanged() {
        observe::tracing::initialize_reentrant("warn");
        const FEED: &str = "0x694AA1769357215DE4FAC081bf1f309aDC325306";
        let deployed = address!("0x1234567890123456789012345678901234567890");

        let mut toolchain = MockToolchain::new();
        toolchain
            .expect_deploy_property_token()
            .withf(|oracle_feed| oracle_feed == FEED)
            .returning(move |_| Ok(deployed));

        let address = deploy(&toolchain, &config(Some(FEED))).await.unwrap();
        assert_eq!(address, deployed);
    }

    #[tokio::test]
    async fn submission_errors_are_fatal() {
        let mut toolchain = MockToolchain::new();
        toolchain
            .expect_deploy_property_token()
            .returning(|_| Err(anyhow::anyhow!("insufficient funds")));

        let err = deploy(&toolchain, &config(Some("0xfeed"))).await.unwrap_err();
        match err {
            Error::Deployment(inner) => {
                assert!(inner.to_string().contains("insufficient funds"))
            }
            other => panic!("expected deployment error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn repeated_runs_deploy_independently() {
        observe::tracing::initialize_reentrant("warn");
        let deployed = address!("0x1234567890123456789012345678901234567890");

        let mut toolchain = MockToolchain::new();
        toolchain
            .expect_deploy_property_token()
            .times(2)
            .returning(move |_| Ok(deployed));

        let config = config(Some("0xfeed"));
        assert_eq!(deploy(&toolchain, &config).await.unwrap(), deployed);
        assert_eq!(deploy(&toolchain, &config).await.unwrap(), deployed);
    }
}
