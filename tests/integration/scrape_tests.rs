//! Integration tests for the scraper
//!
//! These tests use wiremock to create mock HTTP servers and test
//! the full pagination cycle end-to-end.

use homebrew_scraper::config::Config;
use homebrew_scraper::crawler::{Coordinator, Sleeper};
use homebrew_scraper::output::write_recipes_json;
use homebrew_scraper::{Recipe, StopReason};
use std::future::Future;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Sleeper that records pauses instead of waiting
#[derive(Debug, Clone, Default)]
struct RecordingSleeper {
    pauses: Arc<Mutex<Vec<Duration>>>,
}

impl RecordingSleeper {
    fn pauses(&self) -> Vec<Duration> {
        self.pauses.lock().unwrap().clone()
    }
}

impl Sleeper for RecordingSleeper {
    fn sleep(&self, duration: Duration) -> impl Future<Output = ()> + Send {
        self.pauses.lock().unwrap().push(duration);
        std::future::ready(())
    }
}

/// Renders a complete recipe post
fn recipe_post(title: &str, author: &str) -> String {
    format!(
        r#"<div class="recipe-post">
            <div class="recipe-title">{title}</div>
            <div class="recipe-author">{author}</div>
            <div class="recipe-date">June 12, 2021</div>
            <div class="recipe-ingredients">
                10 lb Maris Otter<br>
                1 oz East Kent Goldings<br>
            </div>
            <div class="recipe-instructions">
                <p>Mash at 154F.</p>
                <p>Boil 60 minutes.</p>
            </div>
        </div>"#
    )
}

/// Renders a post missing its author
fn incomplete_post(title: &str) -> String {
    format!(
        r#"<div class="recipe-post">
            <div class="recipe-title">{title}</div>
            <div class="recipe-date">June 13, 2021</div>
            <div class="recipe-ingredients">malt</div>
            <div class="recipe-instructions">boil</div>
        </div>"#
    )
}

fn page(posts: &[String], pagination: &str) -> String {
    format!(
        r#"<html><head><title>Recipes</title></head><body>
            <div class="recipe-list">{}</div>
            <div class="pagination">{}</div>
        </body></html>"#,
        posts.join("\n"),
        pagination
    )
}

async fn mount_page(server: &MockServer, page_path: &str, body: String) {
    Mock::given(method("GET"))
        .and(path(page_path))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string(body)
                .insert_header("content-type", "text/html; charset=utf-8"),
        )
        .expect(1)
        .mount(server)
        .await;
}

fn titles(recipes: &[Recipe]) -> Vec<&str> {
    recipes.iter().map(|r| r.title.as_str()).collect()
}

#[tokio::test]
async fn test_two_page_listing() {
    let server = MockServer::start().await;

    mount_page(
        &server,
        "/recipes",
        page(
            &[
                recipe_post("Bitter", "alice"),
                incomplete_post("No Author Porter"),
                recipe_post("Mild", "bob"),
            ],
            r#"<a rel="next" href="/recipes/page/2">Older recipes</a>"#,
        ),
    )
    .await;
    mount_page(
        &server,
        "/recipes/page/2",
        page(&[recipe_post("Barleywine", "carol")], ""),
    )
    .await;

    let sleeper = RecordingSleeper::default();
    let coordinator = Coordinator::with_sleeper(&Config::default(), sleeper.clone())
        .expect("Failed to create coordinator");
    let report = coordinator
        .run(&format!("{}/recipes", server.uri()))
        .await;

    assert_eq!(titles(&report.recipes), vec!["Bitter", "Mild", "Barleywine"]);
    assert_eq!(report.recipes[2].author, "carol");
    assert_eq!(
        report.recipes[0].ingredients,
        vec!["10 lb Maris Otter", "1 oz East Kent Goldings"]
    );
    assert_eq!(
        report.recipes[0].instructions,
        vec!["Mash at 154F.", "Boil 60 minutes."]
    );

    // Exactly one courtesy pause between the two pages
    assert_eq!(sleeper.pauses(), vec![Duration::from_secs(1)]);

    let stats = &report.statistics;
    assert_eq!(stats.pages_fetched, 2);
    assert_eq!(stats.posts_found, 4);
    assert_eq!(stats.recipes_extracted, 3);
    assert_eq!(stats.posts_skipped, 1);
    assert_eq!(stats.stop_reason, Some(StopReason::NoNextPage));
}

#[tokio::test]
async fn test_fallback_heuristics_across_pages() {
    let server = MockServer::start().await;

    mount_page(
        &server,
        "/list",
        page(
            &[recipe_post("One", "a")],
            r#"<a class="next-page" href="list2">2</a>"#,
        ),
    )
    .await;
    mount_page(
        &server,
        "/list2",
        page(
            &[recipe_post("Two", "b")],
            r#"<a href="/list3"> MORE </a>"#,
        ),
    )
    .await;
    mount_page(&server, "/list3", page(&[recipe_post("Three", "c")], "")).await;

    let sleeper = RecordingSleeper::default();
    let coordinator = Coordinator::with_sleeper(&Config::default(), sleeper.clone()).unwrap();
    let report = coordinator.run(&format!("{}/list", server.uri())).await;

    assert_eq!(titles(&report.recipes), vec!["One", "Two", "Three"]);
    assert_eq!(sleeper.pauses().len(), 2);
}

#[tokio::test]
async fn test_fetch_failure_keeps_partial_results() {
    let server = MockServer::start().await;

    mount_page(
        &server,
        "/recipes",
        page(
            &[recipe_post("Saved", "dave")],
            r#"<a rel="next" href="/recipes/page/2">Next</a>"#,
        ),
    )
    .await;
    Mock::given(method("GET"))
        .and(path("/recipes/page/2"))
        .respond_with(ResponseTemplate::new(502))
        .expect(3)
        .mount(&server)
        .await;

    let sleeper = RecordingSleeper::default();
    let coordinator = Coordinator::with_sleeper(&Config::default(), sleeper.clone()).unwrap();
    let report = coordinator
        .run(&format!("{}/recipes", server.uri()))
        .await;

    assert_eq!(titles(&report.recipes), vec!["Saved"]);
    assert_eq!(
        report.statistics.stop_reason,
        Some(StopReason::FetchFailed {
            url: format!("{}/recipes/page/2", server.uri())
        })
    );
    // One courtesy pause, then two retry pauses
    assert_eq!(
        sleeper.pauses(),
        vec![
            Duration::from_secs(1),
            Duration::from_secs(3),
            Duration::from_secs(3)
        ]
    );
}

#[tokio::test]
async fn test_self_link_ends_run() {
    let server = MockServer::start().await;

    mount_page(
        &server,
        "/recipes",
        page(
            &[recipe_post("Loop Lager", "eve")],
            r#"<a rel="next" href="/recipes">Next</a>"#,
        ),
    )
    .await;

    let sleeper = RecordingSleeper::default();
    let coordinator = Coordinator::with_sleeper(&Config::default(), sleeper.clone()).unwrap();
    let report = coordinator
        .run(&format!("{}/recipes", server.uri()))
        .await;

    assert_eq!(titles(&report.recipes), vec!["Loop Lager"]);
    assert_eq!(
        report.statistics.stop_reason,
        Some(StopReason::SelfReferentialLink)
    );
    assert!(sleeper.pauses().is_empty());
}

#[tokio::test]
async fn test_disabled_next_button_ends_run() {
    let server = MockServer::start().await;

    mount_page(
        &server,
        "/recipes",
        page(
            &[recipe_post("Last Stout", "grace")],
            r##"<a rel="next" href="#">Next</a><nav><a href="/forum/index">More</a></nav>"##,
        ),
    )
    .await;

    let sleeper = RecordingSleeper::default();
    let coordinator = Coordinator::with_sleeper(&Config::default(), sleeper.clone()).unwrap();
    let report = coordinator
        .run(&format!("{}/recipes", server.uri()))
        .await;

    assert_eq!(titles(&report.recipes), vec!["Last Stout"]);
    assert_eq!(
        report.statistics.stop_reason,
        Some(StopReason::SelfReferentialLink)
    );
    assert!(sleeper.pauses().is_empty());
}

#[tokio::test]
async fn test_custom_configuration() {
    let server = MockServer::start().await;

    let body = r#"<html><body>
        <article class="entry">
            <h2>Hefeweizen</h2>
            <span class="by">frank</span>
            <time>2022-07-01</time>
            <ul class="grain"><li>Wheat malt</li><li>Pilsner malt</li></ul>
            <ol class="steps"><li>Ferment at 64F</li></ol>
        </article>
        <a class="forward" href="/p/2">&raquo;</a>
    </body></html>"#;
    mount_page(&server, "/p/1", body.to_string()).await;
    mount_page(&server, "/p/2", "<html><body></body></html>".to_string()).await;

    let config = homebrew_scraper::config::parse_config(
        r#"
[http]
user-agent = "IntegrationTest/1.0"
max-retries = 1

[pagination]
page-delay-secs = 2

[selectors]
post = "article.entry"
title = "h2"
author = ".by"
date = "time"
ingredients = "ul.grain"
instructions = "ol.steps"
next-page-class = "forward"
"#,
    )
    .unwrap();

    let sleeper = RecordingSleeper::default();
    let coordinator = Coordinator::with_sleeper(&config, sleeper.clone()).unwrap();
    let report = coordinator.run(&format!("{}/p/1", server.uri())).await;

    assert_eq!(
        report.recipes,
        vec![Recipe {
            title: "Hefeweizen".to_string(),
            author: "frank".to_string(),
            date: "2022-07-01".to_string(),
            ingredients: vec!["Wheat malt".to_string(), "Pilsner malt".to_string()],
            instructions: vec!["Ferment at 64F".to_string()],
        }]
    );
    assert_eq!(sleeper.pauses(), vec![Duration::from_secs(2)]);
    assert_eq!(report.statistics.pages_fetched, 2);
}

#[tokio::test]
async fn test_scrape_and_save_json() {
    let server = MockServer::start().await;
    mount_page(
        &server,
        "/recipes",
        page(&[recipe_post("Doppelbock", "Jürgen")], ""),
    )
    .await;

    let recipes = homebrew_scraper::scrape(&format!("{}/recipes", server.uri()))
        .await
        .expect("scrape failed to start");
    assert_eq!(titles(&recipes), vec!["Doppelbock"]);

    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("homebrew_recipes.json");
    write_recipes_json(&recipes, &output).unwrap();

    let content = std::fs::read_to_string(&output).unwrap();
    assert!(content.starts_with("[\n  {\n    \"title\": \"Doppelbock\""));
    assert!(content.contains("\"author\": \"Jürgen\""));
}
