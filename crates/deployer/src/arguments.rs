use {clap::Parser, url::Url};

#[derive(Parser)]
pub struct Arguments {
    /// Filter directives for the tracing subscriber, env_logger syntax.
    #[clap(long, env, default_value = "warn,deployer=debug")]
    pub log_filter: String,

    /// On-chain address of the Chainlink price feed that is handed to the
    /// PropertyToken constructor. Deliberately optional at parse time so a
    /// missing value surfaces as a configuration error instead of a usage
    /// error.
    #[clap(long, env)]
    pub chainlink_feed: Option<String>,

    /// The Ethereum node URL to connect to.
    #[clap(long, env, default_value = "http://localhost:8545")]
    pub node_url: Url,

    /// Private key of the account paying for the deployment transaction.
    /// When unset the node's first unlocked account is used instead.
    #[clap(long, env)]
    pub private_key: Option<String>,
}

impl std::fmt::Display for Arguments {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "log_filter: {}", self.log_filter)?;
        writeln!(f, "chainlink_feed: {:?}", self.chainlink_feed)?;
        writeln!(f, "node_url: {}", self.node_url)?;
        writeln!(
            f,
            "private_key: {}",
            match self.private_key {
                Some(_) => "SECRET",
                None => "None",
            }
        )?;
        Ok(())
    }
}
