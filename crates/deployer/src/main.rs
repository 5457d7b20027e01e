use clap::Parser;

#[tokio::main]
async fn main() {
    let args = deployer::arguments::Arguments::parse();
    observe::tracing::initialize(&args.log_filter);
    tracing::debug!("running deployer with validated arguments:\n{}", args);
    match deployer::run(args).await {
        Ok(address) => println!("{}", deployer::success_message(address)),
        Err(err) => {
            tracing::error!("Deployment failed: {err:#}");
            std::process::exit(1);
        }
    }
}
