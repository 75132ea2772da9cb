//! Runs the sample provisioning sequence twice: once over a cookie session, once with an ApiKey.

// crates.io
use color_eyre::Result;
use tracing_subscriber::EnvFilter;
// self
use ace_rest_sample::{config::Credentials, provision::Provisioner};

// Fill in the platform address, the session login and password, and the platform ApiKey.
const ADDRESS: &str = "";
const LOGIN: &str = "";
const PASSWORD: &str = "";
const API_KEY: &str = "";

#[tokio::main]
async fn main() -> Result<()> {
	color_eyre::install()?;
	tracing_subscriber::fmt()
		.with_env_filter(
			EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
		)
		.init();

	let credentials = Credentials::builder()
		.address(ADDRESS)
		.login(LOGIN)
		.password(PASSWORD)
		.api_key(API_KEY)
		.build()?;

	println!("Using base address: '{}'", credentials.address);

	let provisioner = Provisioner::default();

	for scheme in [credentials.session_scheme(), credentials.api_key_scheme()] {
		let client = scheme.connect(credentials.address.clone()).await?;
		let outcome = provisioner.run(&client).await?;

		println!("{}", outcome.family);
	}

	Ok(())
}
