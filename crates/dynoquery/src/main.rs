mod activity;
mod config;
mod storage;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::activity::{ActivityInputs, QueryActivity};
use crate::config::ActivityConfig;
use crate::storage::DynamoDbExecutor;

/// DynoQuery - run a single DynamoDB query and emit the rows as JSON
#[derive(Parser, Debug)]
#[command(name = "dynoquery")]
#[command(version, about, long_about = None)]
struct Cli {
    /// AWS access key id
    #[arg(long, env = "AWS_ACCESS_KEY_ID")]
    access_key_id: String,

    /// AWS secret access key
    #[arg(long, env = "AWS_SECRET_ACCESS_KEY")]
    secret_access_key: String,

    /// AWS region hosting the table
    #[arg(long, env = "AWS_DEFAULT_REGION")]
    region: String,

    /// Table to query
    #[arg(long, env = "DYNAMODB_TABLE_NAME")]
    table_name: String,

    /// Key condition expression, e.g. "pk = :pk"
    #[arg(long, env = "DYNAMODB_KEY_CONDITION_EXPRESSION")]
    key_condition_expression: String,

    /// JSON array of {Name, Value} placeholder substitutions
    #[arg(long, default_value = "", env = "DYNAMODB_EXPRESSION_ATTRIBUTES")]
    expression_attributes: String,

    /// Filter expression applied after the key condition; blank for none
    #[arg(long, default_value = "", env = "DYNAMODB_FILTER_EXPRESSION")]
    filter_expression: String,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize tracing subscriber
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "dynoquery=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = ActivityConfig::from_env();

    let inputs = ActivityInputs {
        access_key_id: cli.access_key_id,
        secret_access_key: cli.secret_access_key,
        region: cli.region,
        table_name: cli.table_name,
        key_condition_expression: cli.key_condition_expression,
        expression_attributes: cli.expression_attributes,
        filter_expression: cli.filter_expression,
    };

    // Validation failures abort here, before any client is built
    let (mut settings, query) = inputs.parse()?;
    if let Some(endpoint) = &config.endpoint_url {
        settings = settings.with_endpoint_url(endpoint.clone());
    }

    let executor = DynamoDbExecutor::connect(&settings).await?;
    let activity = QueryActivity::new(executor, config);

    tracing::info!(table = %query.table_name(), "Executing query");
    let outputs = activity.run(&query).await?;

    println!("{}", serde_json::to_string_pretty(&outputs)?);

    Ok(())
}
