//! sqlquill - turn natural-language questions into SQL.

use tracing::{debug, error, info};

use sqlquill::cli::Cli;
use sqlquill::config::Settings;
use sqlquill::error::{QuillError, Result};
use sqlquill::llm::{generate_sql, HfClient, HfConfig};
use sqlquill::logging;
use sqlquill::sql::normalize_statements;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    logging::init();

    if let Err(e) = run().await {
        error!("{}: {}", e.category(), e);
        std::process::exit(1);
    }
}

async fn run() -> Result<()> {
    let cli = Cli::parse_args();

    let config_path = cli.config_path();
    let settings = cli.merge_settings(Settings::load_from_file(&config_path)?);

    let schema = std::fs::read_to_string(&cli.schema).map_err(|e| {
        QuillError::request(format!(
            "cannot read schema file {}: {e}",
            cli.schema.display()
        ))
    })?;
    let request = cli.to_request(&schema, &settings)?;

    let token = cli
        .token
        .clone()
        .ok_or_else(|| QuillError::config("Hugging Face token missing. Set HF_TOKEN or pass --token."))?;
    let client = HfClient::new(HfConfig::new(token))?;

    if cli.save {
        settings.save_to_file(&config_path)?;
        info!("Settings saved to {}", config_path.display());
    }

    info!(model = %request.model, dialect = %request.dialect, "generating SQL");
    let response = generate_sql(&client, &request).await?;
    debug!(mode = ?response.mode, "model responded");

    let statements = normalize_statements(&response.text);
    if statements.is_empty() {
        println!("The model returned no SQL for this question.");
        return Ok(());
    }

    for statement in &statements {
        println!("{statement}");
    }

    Ok(())
}
