use std::time::Duration;

use rocket::{
    http::{Cookie, Status},
    local::asynchronous::{Client, LocalResponse},
    serde::json::{serde_json, Value},
};

use crate::{
    api::{Api, ApiError},
    config::{Config, Mode},
    pages::SPEED_COOKIE,
    replay::{ReplayKey, ReplayViewer},
    view::{MatchFeed, Notification},
};


use stub::StubUpstream;

const PLAYER: &str = r##"{
    "playerId": 41,
    "name": "keys",
    "discriminator": "0042",
    "avatarSrc": "https://cdn.test/keys.png",
    "banner": "Ocean",
    "cardBorder": "#ffaa00",
    "description": "I type things",
    "staff": 0,
    "verified": 1,
    "patreon": false,
    "experience": 18250,
    "Level": { "Index": 12, "Next": 20000, "Percentage": 91.25 }
}"##;

fn match_json(match_id: u32, placement: u32) -> String {
    format!(
        r#"{{"matchId":{},"playerId":41,"placement":{},"exp":80,"accuracy":98,"wpm":101.5,"created":1600000000,"keystrokeLog":1,"text":[{{"content":"quote {}"}}]}}"#,
        match_id, placement, match_id
    )
}

fn match_page(ids: std::ops::Range<u32>, is_next_page: bool) -> String {
    let data: Vec<String> = ids.map(|id| match_json(id, id % 4)).collect();
    format!(
        r#"{{"data":[{}],"isNextPage":{}}}"#,
        data.join(","),
        is_next_page
    )
}

fn player_stub() -> StubUpstream {
    StubUpstream::new()
        .body("player/info?name=keys", PLAYER)
        .body("player/statistics?playerId=41", r#"{"matches":300}"#)
        .body("player/chart?playerId=41", r#"{"wpm":[90,95]}"#)
        .body("player/achievements?playerId=41", r#"[{"name":"First Win"}]"#)
        .fail(
            "player/tournaments?playerId=41",
            ApiError::Transport("connection reset".to_owned()),
        )
        .body("player/ranked?playerId=41", r#"{"error":"Unranked"}"#)
}

async fn spawn_client(api: Api) -> Client {
    Client::tracked(super::build(Config::for_mode(Mode::Development), api))
        .await
        .expect("valid rocket instance")
}

async fn deserialize_response<'a, T: rocket::serde::DeserializeOwned>(
    response: LocalResponse<'a>,
) -> serde_json::Result<T> {
    let string = response.into_string().await.unwrap();
    serde_json::from_str(&string)
}

async fn get_json(client: &Client, uri: &str) -> Value {
    let response = client.get(uri).dispatch().await;
    assert_eq!(response.status(), Status::Ok, "GET {}", uri);
    deserialize_response(response).await.unwrap()
}

#[rocket::async_test]
async fn index_and_config() {
    let (api, _) = StubUpstream::new().into_api();
    let client = spawn_client(api).await;

    let response = client.get("/").dispatch().await;
    assert_eq!(
        response.into_string().await.unwrap(),
        "Keymash: Take your typing to the next level"
    );

    let config = get_json(&client, "/config").await;
    assert_eq!(config["mode"], "development");
    assert_eq!(config["game_server"]["port"], 2096);
}

/// Loads a profile whose secondary resources partly fail
#[rocket::async_test]
async fn profile_page() {
    let (api, _) = player_stub().into_api();
    let client = spawn_client(api).await;

    let page = get_json(&client, "/profile/keys").await;
    assert_eq!(page["meta"]["title"], "keys#0042's Profile");
    assert_eq!(page["meta"]["description"], "I type things...");
    assert_eq!(page["header"]["banner"], "/banners/Ocean.jpg");
    assert_eq!(page["header"]["experience"], "18,250 / 20,000");
    assert_eq!(page["header"]["verified"], true);
    assert_eq!(page["tab"], "statistics");
    assert_eq!(page["tabs"].as_array().unwrap().len(), 4);
    assert_eq!(page["statistics"]["matches"], 300);
    assert_eq!(page["achievements"][0]["name"], "First Win");
    // Failed side fetches fall back instead of failing the page.
    assert_eq!(page["tournaments"], Value::Array(vec![]));
    assert_eq!(page["ranked"], Value::Null);
}

#[rocket::async_test]
async fn profile_tab_from_query() {
    let (api, _) = player_stub().into_api();
    let client = spawn_client(api).await;

    let page = get_json(&client, "/profile/keys?tab=tournaments").await;
    assert_eq!(page["tab"], "tournaments");
    assert_eq!(page["tabs"][3]["active"], true);
    assert_eq!(page["tabs"][0]["active"], false);

    let page = get_json(&client, "/profile/keys?tab=bogus").await;
    assert_eq!(page["tab"], "statistics");
}

#[rocket::async_test]
async fn unknown_player_is_not_found() {
    let (api, _) = StubUpstream::new()
        .body("player/info?name=ghost", r#"{"error":"Player does not exist"}"#)
        .into_api();
    let client = spawn_client(api).await;

    let response = client.get("/profile/ghost").dispatch().await;
    assert_eq!(response.status(), Status::NotFound);

    let response = client.get("/profile/nobody").dispatch().await;
    assert_eq!(response.status(), Status::NotFound);

    let response = client.get("/profile/ghost/matches").dispatch().await;
    assert_eq!(response.status(), Status::NotFound);
}

#[rocket::async_test]
async fn matches_page() {
    let (api, stub) = player_stub()
        .body(
            "player/matches?playerId=41&limit=30&startNum=30",
            match_page(0..3, false),
        )
        .into_api();
    let client = spawn_client(api).await;

    let page = get_json(&client, "/profile/keys/matches?skip=45").await;
    assert_eq!(page["cursor"]["skip"], 30);
    assert_eq!(page["is_next_page"], false);
    assert_eq!(page["is_previous_page"], true);
    assert_eq!(page["empty_message"], Value::Null);

    let rows = page["rows"].as_array().unwrap();
    assert_eq!(rows.len(), 3);
    assert_eq!(rows[0]["placement"], "QUIT");
    assert_eq!(rows[0]["speed"], "N/A");
    assert_eq!(rows[0]["replay_link"], Value::Null);
    assert_eq!(rows[1]["placement"], "1st");
    assert_eq!(rows[1]["trophy"], "gold");
    assert_eq!(rows[1]["speed"], "101.50 WPM");
    assert_eq!(rows[1]["replay_link"], "/replay/41/1");
    assert_eq!(rows[2]["quote"], "quote 2");

    assert!(stub
        .hits()
        .contains(&"player/matches?playerId=41&limit=30&startNum=30".to_owned()));
}

#[rocket::async_test]
async fn matches_page_in_cpm() {
    let (api, _) = player_stub()
        .body(
            "player/matches?playerId=41&limit=30&startNum=0",
            match_page(1..2, true),
        )
        .into_api();
    let client = spawn_client(api).await;

    let response = client
        .get("/profile/keys/matches?skip=-30")
        .cookie(Cookie::new(SPEED_COOKIE, "1"))
        .dispatch()
        .await;
    assert_eq!(response.status(), Status::Ok);
    let page: Value = deserialize_response(response).await.unwrap();

    assert_eq!(page["cursor"]["skip"], 0);
    assert_eq!(page["is_previous_page"], false);
    assert_eq!(page["rows"][0]["speed"], "507.50 CPM");
}

#[rocket::async_test]
async fn matches_page_failures() {
    let (api, _) = player_stub()
        .fail(
            "player/matches?playerId=41&limit=10&startNum=0",
            ApiError::Transport("timed out".to_owned()),
        )
        .body(
            "player/matches?playerId=41&limit=10&startNum=10",
            r#"{"error":"Too many requests"}"#,
        )
        .into_api();
    let client = spawn_client(api).await;

    let page = get_json(&client, "/profile/keys/matches?limit=10").await;
    assert_eq!(page["loaded"], false);
    assert_eq!(page["empty_message"], "This player has not played any matches.");
    assert_eq!(
        page["notifications"][0]["message"],
        "Unable to pull recent matches!"
    );

    let page = get_json(&client, "/profile/keys/matches?limit=10&skip=10").await;
    assert_eq!(page["notifications"][0]["message"], "Too many requests");
    assert_eq!(page["notifications"][0]["severity"], "error");
}

#[rocket::async_test]
async fn news_page() {
    let (api, _) = StubUpstream::new()
        .body(
            "newsletter/list?limit=50",
            r#"{"data":[
                {"slug":"season-4","increment":14,"title":"Season 4"},
                {"slug":"season-3","increment":12,"title":"Season 3"}
            ]}"#,
        )
        .into_api();
    let client = spawn_client(api).await;

    let page = get_json(&client, "/news?latest_seen=12").await;
    let cards = page["cards"].as_array().unwrap();
    assert_eq!(cards.len(), 2);
    assert_eq!(cards[0]["title"], "Season 4");
    assert_eq!(cards[0]["show_unread"], true);
    assert_eq!(cards[1]["show_unread"], false);
    assert_eq!(page["ads"], true);
}

#[rocket::async_test]
async fn news_page_survives_failure() {
    let (api, _) = StubUpstream::new().into_api();
    let client = spawn_client(api).await;

    let page = get_json(&client, "/news").await;
    assert_eq!(page["cards"], Value::Array(vec![]));
}

#[rocket::async_test]
async fn replay_page() {
    let (api, _) = StubUpstream::new()
        .body(
            "player/keystrokes?playerId=41&matchId=7",
            "hello world<&>h:0|e:110|l:95",
        )
        .body("player/keystrokes?playerId=41&matchId=8", "no timeline")
        .into_api();
    let client = spawn_client(api).await;

    let page = get_json(&client, "/replay/41/7").await;
    assert_eq!(page["quote"], "hello world");
    assert_eq!(page["raw_log"], "h:0|e:110|l:95");
    assert_eq!(page["key"]["matchId"], "7");
    assert_eq!(page["notifications"], Value::Array(vec![]));

    let page = get_json(&client, "/replay/41/8").await;
    assert_eq!(page["quote"], "no timeline");
    assert_eq!(page["raw_log"], "");

    let log = get_json(&client, "/replay/41/7/log").await;
    assert_eq!(log["quote"], "hello world");
}

#[rocket::async_test]
async fn replay_page_failure() {
    let (api, _) = StubUpstream::new()
        .body(
            "player/keystrokes?playerId=41&matchId=9",
            r#"{"error":"Replay expired"}"#,
        )
        .into_api();
    let client = spawn_client(api).await;

    let page = get_json(&client, "/replay/41/9").await;
    assert_eq!(page["quote"], "");
    assert_eq!(page["raw_log"], "");
    assert_eq!(page["notifications"][0]["message"], "Replay expired");

    let response = client.get("/replay/41/10/log").dispatch().await;
    assert_eq!(response.status(), Status::NotFound);
}

/// Walks a player's match list to its last page
#[rocket::async_test]
async fn match_feed_stops_at_last_page() {
    let (api, stub) = StubUpstream::new()
        .body(
            "player/matches?playerId=41&limit=30&startNum=0",
            match_page(0..30, true),
        )
        .body(
            "player/matches?playerId=41&limit=30&startNum=30",
            match_page(30..42, false),
        )
        .into_api();

    let mut feed = MatchFeed::new(api, "41", 30);
    assert!(feed.settle().await);
    assert_eq!(feed.state().rows.len(), 30);
    assert!(feed.state().is_next_page);
    assert!(!feed.previous_page());

    assert!(feed.next_page());
    assert!(feed.settle().await);
    assert_eq!(feed.state().cursor.skip(), 30);
    assert_eq!(feed.state().rows.len(), 12);
    assert!(!feed.state().is_next_page);

    let fetches = stub.hits().len();
    assert!(!feed.next_page());
    assert!(!feed.is_fetching());
    assert!(!feed.settle().await);
    assert_eq!(stub.hits().len(), fetches);
    assert_eq!(feed.state().cursor.skip(), 30);

    assert!(feed.previous_page());
    assert!(feed.settle().await);
    assert_eq!(feed.state().cursor.skip(), 0);
    assert!(feed.take_notifications().is_empty());
}

#[rocket::async_test]
async fn match_feed_next_waits_for_current_page() {
    let (api, stub) = StubUpstream::new()
        .body(
            "player/matches?playerId=41&limit=30&startNum=0",
            match_page(0..30, true),
        )
        .body(
            "player/matches?playerId=41&limit=30&startNum=30",
            match_page(30..35, false),
        )
        .into_api();

    let mut feed = MatchFeed::new(api, "41", 30);
    assert!(feed.settle().await);

    assert!(feed.next_page());
    assert!(!feed.next_page());
    assert_eq!(feed.state().cursor.skip(), 30);

    assert!(feed.settle().await);
    assert!(!feed.state().is_next_page);
    assert!(!feed.next_page());
    assert_eq!(feed.state().cursor.skip(), 30);
    assert!(!stub
        .hits()
        .contains(&"player/matches?playerId=41&limit=30&startNum=60".to_owned()));
}

#[rocket::async_test]
async fn match_feed_discards_superseded_player() {
    let (api, _) = StubUpstream::new()
        .slow_body(
            "player/matches?playerId=1&limit=30&startNum=0",
            match_page(0..5, false),
            Duration::from_millis(100),
        )
        .body(
            "player/matches?playerId=2&limit=30&startNum=0",
            match_page(100..102, false),
        )
        .into_api();

    let mut feed = MatchFeed::new(api, "1", 30);
    feed.set_player("2");
    assert!(feed.settle().await);
    assert_eq!(feed.player_id(), "2");
    assert_eq!(feed.state().rows.len(), 2);
    assert_eq!(feed.state().rows[0].match_id, "100");

    // Nothing from the first player shows up later.
    tokio::time::sleep(Duration::from_millis(150)).await;
    assert!(!feed.settle().await);
    assert_eq!(feed.state().rows[0].match_id, "100");
}

#[rocket::async_test]
async fn match_feed_reports_failure() {
    let (api, _) = StubUpstream::new().into_api();

    let mut feed = MatchFeed::new(api, "41", 30);
    assert!(feed.settle().await);
    assert!(!feed.state().loaded);
    assert_eq!(
        feed.take_notifications(),
        vec![Notification::error("Unable to pull recent matches!")]
    );
}

#[rocket::async_test]
async fn replay_viewer_keeps_latest_match() {
    let (api, _) = StubUpstream::new()
        .slow_body(
            "player/keystrokes?playerId=41&matchId=1",
            "old quote<&>old log",
            Duration::from_millis(100),
        )
        .body("player/keystrokes?playerId=41&matchId=2", "new quote<&>new log")
        .into_api();

    let mut viewer = ReplayViewer::new(api);
    viewer.open(ReplayKey::new("41", "1"));
    assert!(viewer.is_loading());
    viewer.open(ReplayKey::new("41", "2"));

    assert!(viewer.settle().await);
    assert_eq!(viewer.state().log.quote, "new quote");
    assert_eq!(viewer.state().log.raw_log, "new log");
    assert_eq!(viewer.state().key, Some(ReplayKey::new("41", "2")));

    tokio::time::sleep(Duration::from_millis(150)).await;
    assert!(!viewer.settle().await);
    assert_eq!(viewer.state().log.quote, "new quote");

    viewer.close();
    assert_eq!(viewer.state().key, None);
    assert!(viewer.state().log.is_empty());
}

#[rocket::async_test]
async fn replay_viewer_failure_notifies() {
    let (api, _) = StubUpstream::new().into_api();

    let mut viewer = ReplayViewer::new(api);
    viewer.open(ReplayKey::new("41", "404"));
    assert!(viewer.settle().await);
    assert!(viewer.state().log.is_empty());
    assert_eq!(viewer.state().notifications.len(), 1);
}
