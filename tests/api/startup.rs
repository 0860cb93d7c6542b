use newsletter_signup::configuration::get_configuration;
use newsletter_signup::startup::Application;

async fn build_with_success_path(success_redirect_path: &str) -> anyhow::Result<Application> {
    let mut configuration = get_configuration().expect("Failed to read configuration.");
    configuration.application.port = 0;
    configuration.form.success_redirect_path = success_redirect_path.into();
    Application::build(configuration).await
}

#[tokio::test]
async fn build_rejects_a_relative_success_path() {
    let outcome = build_with_success_path("thanks/").await;
    assert!(outcome.is_err());
}

#[tokio::test]
async fn build_rejects_a_success_path_that_clashes_with_a_route() {
    for path in ["/subscribe", "/subscribe/", "/health_check"] {
        let outcome = build_with_success_path(path).await;
        assert!(outcome.is_err(), "{path} was accepted as the success path");
    }
}

#[tokio::test]
async fn build_accepts_a_success_path_without_a_trailing_slash() {
    let outcome = build_with_success_path("/welcome").await;
    assert!(outcome.is_ok());
}
