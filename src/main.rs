use newsletter_signup::configuration::get_configuration;
use newsletter_signup::startup::Application;
use newsletter_signup::telemetry::init_subscriber;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let configuration = get_configuration()?;
    init_subscriber("info".into(), std::io::stdout, &configuration.telemetry)?;

    let application = Application::build(configuration).await?;
    tracing::info!(port = application.port(), "Serving the signup pages");
    application.run_until_stopped().await?;
    Ok(())
}
