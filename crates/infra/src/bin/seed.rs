use clubadmin_infra::{AppConfig, bootstrap};

fn main() -> anyhow::Result<()> {
    let mut config = AppConfig::from_env()?;
    if std::env::args().any(|arg| arg == "--seed-data") {
        config.seed_data = true;
    }

    let app = bootstrap(config)?;
    match &app.seed {
        Some(report) => println!("{}", serde_json::to_string_pretty(report)?),
        None => tracing::info!("seeding disabled; pass --seed-data or set SEED_DATA=true"),
    }
    Ok(())
}
