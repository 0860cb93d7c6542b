use wiremock::matchers::{any, method, path, query_param};
use wiremock::{Mock, ResponseTemplate};

use crate::helpers::{assert_is_redirect_to, signup_body, spawn_app};

fn reply(result: &str, msg: &str) -> ResponseTemplate {
    ResponseTemplate::new(200).set_body_json(serde_json::json!({ "result": result, "msg": msg }))
}

#[tokio::test]
async fn the_subscribe_page_renders_the_form() {
    let app = spawn_app().await;

    let response = app.get_subscribe().await;
    assert_eq!(response.status().as_u16(), 200);

    let html = response.text().await.unwrap();
    assert!(html.contains(r#"<form action="/subscribe" method="post" class="SubscribeForm">"#));
    assert!(html.contains(r#"<link rel="canonical" href="http://127.0.0.1:8000/subscribe" />"#));
    assert!(html.contains("<b></b>"));
}

#[tokio::test]
async fn the_canonical_link_points_at_a_served_page() {
    let app = spawn_app().await;

    let response = app
        .api_client
        .get(&format!("{}/subscribe", &app.address))
        .send()
        .await
        .expect("Failed to execute request.");
    let html = response.text().await.unwrap();
    let canonical_path = html
        .split(r#"<link rel="canonical" href="http://127.0.0.1:8000"#)
        .nth(1)
        .and_then(|rest| rest.split('"').next())
        .unwrap()
        .to_string();

    let response = app
        .api_client
        .get(&format!("{}{}", &app.address, canonical_path))
        .send()
        .await
        .expect("Failed to execute request.");
    assert_eq!(response.status().as_u16(), 200);
}

#[tokio::test]
async fn the_slash_variants_redirect_to_the_served_pages() {
    let app = spawn_app().await;

    for (requested, served) in [("/subscribe/", "/subscribe"), ("/thanks", "/thanks/")] {
        let response = app
            .api_client
            .get(&format!("{}{}", &app.address, requested))
            .send()
            .await
            .expect("Failed to execute request.");
        assert_eq!(response.status().as_u16(), 308, "{requested} was not redirected");
        assert_eq!(response.headers().get("Location").unwrap(), served);
    }
}

#[tokio::test]
async fn a_successful_signup_redirects_to_the_thanks_page() {
    let app = spawn_app().await;

    Mock::given(method("GET"))
        .and(path("/subscribe/post-json"))
        .and(query_param("u", "test-user"))
        .and(query_param("id", "test-list"))
        .and(query_param("EMAIL", "ursula_le_guin@gmail.com"))
        .respond_with(reply(
            "success",
            "Thanks! <a>Click here to update your profile</a>",
        ))
        .expect(1)
        .mount(&app.mailchimp_server)
        .await;

    let response = app.post_subscribe(signup_body("ursula_le_guin@gmail.com")).await;
    assert_is_redirect_to(&response, "/thanks/");

    let html = app.get_thanks_html().await;
    assert!(html.contains("<h1>Thank you!</h1>"));
    assert!(html.contains("<b>Thanks! </b>"));
}

#[tokio::test]
async fn a_rejected_signup_returns_to_the_form_with_the_reason() {
    let app = spawn_app().await;

    Mock::given(any())
        .respond_with(reply("error", "<p>Invalid email</p>"))
        .expect(1)
        .mount(&app.mailchimp_server)
        .await;

    let response = app.post_subscribe(signup_body("ursula_le_guin@gmail.com")).await;
    assert_is_redirect_to(&response, "/subscribe");

    let html = app.get_subscribe_html().await;
    assert!(html.contains("<b>Invalid email</b>"));

    // Flash messages are shown once.
    let html = app.get_subscribe_html().await;
    assert!(!html.contains("Invalid email"));
}

#[tokio::test]
async fn an_invalid_email_is_rejected_without_calling_mailchimp() {
    let app = spawn_app().await;

    Mock::given(any())
        .respond_with(reply("success", ""))
        .expect(0)
        .mount(&app.mailchimp_server)
        .await;

    let response = app.post_subscribe(signup_body("not-an-email")).await;
    assert_is_redirect_to(&response, "/subscribe");

    let html = app.get_subscribe_html().await;
    assert!(html.contains("<b>The email you entered is not valid.</b>"));
}

#[tokio::test]
async fn a_mailchimp_outage_asks_to_try_again() {
    let app = spawn_app().await;

    Mock::given(any())
        .respond_with(ResponseTemplate::new(500))
        .expect(1)
        .mount(&app.mailchimp_server)
        .await;

    let response = app.post_subscribe(signup_body("ursula_le_guin@gmail.com")).await;
    assert_is_redirect_to(&response, "/subscribe");

    let html = app.get_subscribe_html().await;
    assert!(html.contains("<b>Something went wrong. Please try again.</b>"));
}

#[tokio::test]
async fn subscribe_returns_a_422_when_the_email_is_missing() {
    let app = spawn_app().await;

    let response = app.post_subscribe("name=le%20guin".into()).await;

    assert_eq!(
        422,
        response.status().as_u16(),
        "The API did not reject a payload without an email."
    );
}
