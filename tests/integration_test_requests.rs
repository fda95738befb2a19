mod common;

use common::{body_string, location, TestApp};
use std::time::Duration;

#[tokio::test]
async fn myrequests_requires_a_session() {
    let app = TestApp::new().await;

    let response = app.get("/myrequests").await;
    assert!(response.status().is_redirection());
    assert_eq!(location(&response), "/signin");

    let notice = common::extract_cookie(&response, "notice").expect("no notice cookie");
    let page = app
        .get_with_cookie("/signin", &format!("notice={}", notice))
        .await;
    let body = body_string(page).await;
    assert!(body.contains("Please sign in to see your requests"));
}

#[tokio::test]
async fn myrequests_shows_only_own_requests_newest_first() {
    let app = TestApp::new().await;
    let event_id = app.event_id_by_title("Cultural Concert").await;

    app.signup("gina", "pw").await;
    let gina = app.signin("gina", "pw").await;
    app.signup("hank", "pw").await;
    let hank = app.signin("hank", "pw").await;

    let first = app
        .post_form_with_session(
            &format!("/quote/{}", event_id),
            "guests=2&services=sound&contact_name=Gina&contact_phone=1&additional_info=",
            &gina,
        )
        .await;
    let first_number = location(&first).trim_start_matches("/request/").to_string();

    tokio::time::sleep(Duration::from_millis(10)).await;

    let second = app
        .post_form_with_session(
            &format!("/quote/{}", event_id),
            "guests=4&services=permit&contact_name=Gina&contact_phone=1&additional_info=",
            &gina,
        )
        .await;
    let second_number = location(&second).trim_start_matches("/request/").to_string();

    let other = app
        .post_form_with_session(
            &format!("/quote/{}", event_id),
            "guests=9&contact_name=Hank&contact_phone=2&additional_info=",
            &hank,
        )
        .await;
    let other_number = location(&other).trim_start_matches("/request/").to_string();

    let page = app.get_with_session("/myrequests", &gina).await;
    assert_eq!(page.status(), 200);
    let body = body_string(page).await;

    assert!(body.contains(&first_number));
    assert!(body.contains(&second_number));
    assert!(!body.contains(&other_number));

    // Newest first: the later request appears before the earlier one.
    let second_pos = body.find(&second_number).unwrap();
    let first_pos = body.find(&first_number).unwrap();
    assert!(second_pos < first_pos);
}

#[tokio::test]
async fn unknown_request_number_redirects_with_a_notice() {
    let app = TestApp::new().await;

    let response = app.get("/request/REQ-00000000000000-ABCDEF").await;
    assert!(response.status().is_redirection());
    assert_eq!(location(&response), "/events");

    let notice = common::extract_cookie(&response, "notice").expect("no notice cookie");
    let page = app
        .get_with_cookie("/events", &format!("notice={}", notice))
        .await;
    let body = body_string(page).await;
    assert!(body.contains("Request not found"));
}

#[tokio::test]
async fn request_view_is_public_for_anonymous_requests() {
    let app = TestApp::new().await;
    let event_id = app.event_id_by_title("Food Festival").await;

    let response = app
        .post_form(
            &format!("/quote/{}", event_id),
            "guests=3&services=catering&contact_name=Iva&contact_phone=7&additional_info=outdoor",
        )
        .await;

    let page = app.get(&location(&response)).await;
    assert_eq!(page.status(), 200);
    let body = body_string(page).await;
    // base 400 * 3 + catering 300 * 3
    assert!(body.contains("<strong>2100</strong>"));
    assert!(body.contains("outdoor"));
}
