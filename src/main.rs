use env_logger::Env;
use farescout::{configuration::get_configuration, startup::run};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let configuration = get_configuration().expect("Failed to read configuration.");

    let rows = run(&configuration).await?;
    match rows {
        0 => log::warn!("Pipeline finished with no destinations found"),
        n => log::info!("Pipeline finished with {} fare rows", n),
    }

    Ok(())
}
