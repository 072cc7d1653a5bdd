//! RustACS CLI - query the ACS Container Service API from the shell.
//!
//! # Usage
//!
//! ```text
//! ACCESS_KEY_ID=... ACCESS_KEY_SECRET=... REGION=cn-hangzhou rustacs clusters
//! ```
//!
//! | Command | Call |
//! |---------|------|
//! | `images` | `GET /images` |
//! | `clusters` | `GET /clusters` |
//! | `cluster <id>` | `GET /clusters/<id>` |
//! | `certs <id>` | `GET /clusters/<id>/certs` |
//! | `delete <id>` | `DELETE /clusters/<id>` |
//!
//! # Environment Variables
//!
//! | Variable | Default | Description |
//! |----------|---------|-------------|
//! | `ACCESS_KEY_ID` | *(required)* | Access key id |
//! | `ACCESS_KEY_SECRET` | *(required)* | Access key secret |
//! | `REGION` | *(required)* | Region id |
//! | `SECURE` | `false` | Use `https` |
//! | `LOG_LEVEL` | `info` | Log level filter |
//! | `RUST_LOG` | *(unset)* | Fine-grained tracing filter (overrides `LOG_LEVEL`) |

use anyhow::{Context, Result};
use rustacs_client::{CsClient, CsError, CsResponse};
use rustacs_core::ClientConfig;
use tracing::{debug, error};
use tracing_subscriber::EnvFilter;

/// A parsed command line.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Command {
    Images,
    Clusters,
    Cluster(String),
    Certs(String),
    Delete(String),
}

impl Command {
    /// Parse the arguments following the program name.
    fn parse(args: &[String]) -> Result<Self> {
        let mut args = args.iter().map(String::as_str);
        let name = args.next().context("missing command")?;
        let mut id = || {
            args.next()
                .map(ToOwned::to_owned)
                .with_context(|| format!("`{name}` requires a cluster id"))
        };

        match name {
            "images" => Ok(Self::Images),
            "clusters" => Ok(Self::Clusters),
            "cluster" => Ok(Self::Cluster(id()?)),
            "certs" => Ok(Self::Certs(id()?)),
            "delete" => Ok(Self::Delete(id()?)),
            other => anyhow::bail!("unknown command: {other}"),
        }
    }

    async fn run(&self, client: &CsClient) -> Result<CsResponse, CsError> {
        match self {
            Self::Images => client.list_images().await,
            Self::Clusters => client.list_clusters().await,
            Self::Cluster(id) => client.get_cluster(id).await,
            Self::Certs(id) => client.get_cluster_certs(id).await,
            Self::Delete(id) => client.delete_cluster(id).await,
        }
    }
}

/// Initialize the tracing subscriber.
///
/// Uses `RUST_LOG` if set, otherwise falls back to `LOG_LEVEL`.
fn init_tracing(log_level: &str) -> Result<()> {
    let filter = if std::env::var("RUST_LOG").is_ok() {
        EnvFilter::from_default_env()
    } else {
        EnvFilter::try_new(log_level)
            .with_context(|| format!("invalid log level filter: {log_level}"))?
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();

    Ok(())
}

/// Read the log level from the environment.
fn log_level() -> String {
    std::env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string())
}

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing(&log_level())?;

    let args: Vec<String> = std::env::args().skip(1).collect();
    let command = Command::parse(&args)?;

    let config = ClientConfig::from_env();
    let client = CsClient::new(config).context("invalid client configuration")?;
    debug!(command = ?command, base_url = %client.endpoint().base_url, "running command");

    match command.run(&client).await {
        Ok(response) => {
            let pretty = serde_json::to_string_pretty(&response.body)?;
            println!("{pretty}");
            Ok(())
        }
        Err(CsError::Api(err)) => {
            error!(code = err.code, info = %err.info, "request rejected");
            anyhow::bail!("{} ({})", err.info, err.code)
        }
        Err(e) => Err(e).context("request failed"),
    }
}
