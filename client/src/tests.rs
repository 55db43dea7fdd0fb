use super::*;
use axum::{
    extract::{Path, Query, State},
    http::StatusCode as AxumStatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde_json::{json, Value};
use std::{
    collections::HashMap,
    net::SocketAddr,
    sync::{
        atomic::{AtomicUsize, Ordering},
        Arc,
    },
};
use tokio::time::{sleep, Duration};

const KEY: &str = "11111111-2222-3333-4444-555555555555";
const OTHER_KEY: &str = "99999999-2222-3333-4444-555555555555";
const NOTCH: &str = "069a79f444e94726a5befca90e38aaf5";
const GUILD_ID: &str = "553490650cf26f12ae5bac8f";

#[derive(Default)]
struct Hits {
    key: AtomicUsize,
    identity: AtomicUsize,
    player: AtomicUsize,
}

type Params = Query<HashMap<String, String>>;

fn authorized(params: &HashMap<String, String>) -> bool {
    params.get("key").map(String::as_str) == Some(KEY)
}

fn forbidden() -> (AxumStatusCode, Json<Value>) {
    (
        AxumStatusCode::FORBIDDEN,
        Json(json!({ "success": false, "cause": "Invalid API key" })),
    )
}

fn ok(body: Value) -> (AxumStatusCode, Json<Value>) {
    (AxumStatusCode::OK, Json(body))
}

async fn key(State(hits): State<Arc<Hits>>, Query(params): Params) -> (AxumStatusCode, Json<Value>) {
    hits.key.fetch_add(1, Ordering::SeqCst);
    if !authorized(&params) {
        return forbidden();
    }
    ok(json!({
        "success": true,
        "record": { "key": KEY, "owner": NOTCH, "totalQueries": 7 },
    }))
}

async fn profile(State(hits): State<Arc<Hits>>, Path(name): Path<String>) -> Response {
    hits.identity.fetch_add(1, Ordering::SeqCst);
    if name.eq_ignore_ascii_case("notch") {
        Json(json!({ "id": NOTCH, "name": "Notch" })).into_response()
    } else {
        AxumStatusCode::NO_CONTENT.into_response()
    }
}

async fn player(State(hits): State<Arc<Hits>>, Query(params): Params) -> (AxumStatusCode, Json<Value>) {
    hits.player.fetch_add(1, Ordering::SeqCst);
    if !authorized(&params) {
        return forbidden();
    }
    match params.get("uuid").map(String::as_str) {
        Some(NOTCH) => ok(json!({
            "success": true,
            "player": {
                "uuid": NOTCH,
                "displayname": "Notch",
                "networkExp": 22500,
                "stats": { "Bedwars": { "Experience": 7000 } },
            },
        })),
        _ => ok(json!({ "success": true, "player": null })),
    }
}

async fn find_guild(Query(params): Params) -> (AxumStatusCode, Json<Value>) {
    let found = params.get("byName").map(String::as_str) == Some("Builders")
        || params.get("byUuid").map(String::as_str) == Some(NOTCH);
    if found {
        ok(json!({ "success": true, "guild": GUILD_ID }))
    } else {
        ok(json!({ "success": true, "guild": null }))
    }
}

async fn guild(Query(params): Params) -> (AxumStatusCode, Json<Value>) {
    if !authorized(&params) {
        return forbidden();
    }
    match params.get("id").map(String::as_str) {
        Some(GUILD_ID) => ok(json!({
            "success": true,
            "guild": {
                "_id": GUILD_ID,
                "name": "Builders",
                "tag": "BLD",
                "exp": 1200,
                "members": [{ "uuid": NOTCH, "rank": "Guild Master" }],
            },
        })),
        Some("deadbeef") => (
            AxumStatusCode::BAD_REQUEST,
            Json(json!({ "success": false, "cause": "Malformed guild ID" })),
        ),
        _ => ok(json!({ "success": true, "guild": null })),
    }
}

async fn auctions(Query(params): Params) -> (AxumStatusCode, Json<Value>) {
    if !authorized(&params) {
        return forbidden();
    }
    match params.get("page").map(String::as_str) {
        Some("0") => ok(json!({ "success": true, "page": 0, "totalPages": 1, "auctions": [] })),
        _ => (
            AxumStatusCode::NOT_FOUND,
            Json(json!({ "success": false, "cause": "Page not found" })),
        ),
    }
}

fn fake_api(hits: Arc<Hits>) -> Router {
    Router::new()
        .route("/key", get(key))
        .route("/users/profiles/minecraft/:name", get(profile))
        .route("/player", get(player))
        .route("/findGuild", get(find_guild))
        .route("/guild", get(guild))
        .route("/skyblock/auctions", get(auctions))
        .route(
            "/leaderboards",
            get(|| async {
                Json(json!({
                    "success": true,
                    "leaderboards": { "BEDWARS": [{ "path": "bedwars_level" }] },
                }))
            }),
        )
        .route(
            "/gameCounts",
            get(|| async {
                Json(json!({
                    "success": true,
                    "games": { "SKYWARS": { "players": 10 } },
                    "playerCount": 12,
                }))
            }),
        )
        .route(
            "/playerCount",
            get(|| async { Json(json!({ "success": true, "playerCount": 12345 })) }),
        )
        .route(
            "/friends",
            get(|| async { Json(json!({ "success": true, "records": [{ "uuidSender": NOTCH }] })) }),
        )
        .route(
            "/status",
            get(|| async { Json(json!({ "success": true, "session": { "online": false } })) }),
        )
        .route(
            "/recentGames",
            get(|| async { Json(json!({ "success": true, "games": [{ "gameType": "BEDWARS" }] })) }),
        )
        .route(
            "/skyblock/auction",
            get(|| async { Json(json!({ "success": true, "auctions": [{ "bin": true }] })) }),
        )
        .route(
            "/skyblock/profiles",
            get(|| async { Json(json!({ "success": true, "profiles": [{ "cute_name": "Apple" }] })) }),
        )
        .route(
            "/watchdogstats",
            get(|| async { Json(json!({ "success": true, "watchdog_total": 9, "staff_total": 4 })) }),
        )
        .route(
            "/skyblock/bazaar",
            get(|| async { Json(json!({ "success": true, "products": { "WHEAT": {} } })) }),
        )
        .route(
            "/skyblock/news",
            get(|| async { Json(json!({ "success": true, "items": [{ "title": "Patch" }] })) }),
        )
        .route(
            "/boosters",
            get(|| async { (AxumStatusCode::INTERNAL_SERVER_ERROR, "upstream down") }),
        )
        .with_state(hits)
}

async fn serve_router(router: Router) -> (String, tokio::task::JoinHandle<()>) {
    let addr = SocketAddr::from(([127, 0, 0, 1], 0));
    let listener = tokio::net::TcpListener::bind(addr).await.unwrap();
    let actual_addr = listener.local_addr().unwrap();
    let base_url = format!("http://{actual_addr}");

    let handle = tokio::spawn(async move {
        axum::serve(listener, router.into_make_service())
            .await
            .unwrap();
    });

    sleep(Duration::from_millis(50)).await;
    (base_url, handle)
}

struct TestContext {
    hits: Arc<Hits>,
    base_url: String,
    server_handle: tokio::task::JoinHandle<()>,
}

impl TestContext {
    async fn new() -> Self {
        let hits = Arc::new(Hits::default());
        let (base_url, server_handle) = serve_router(fake_api(hits.clone())).await;
        Self {
            hits,
            base_url,
            server_handle,
        }
    }

    fn create_client_with_key(&self, key: &str) -> Client {
        Client::with_config(
            key,
            ClientConfig {
                api_url: self.base_url.clone(),
                identity_url: self.base_url.clone(),
                timeout: Duration::from_secs(5),
            },
        )
        .unwrap()
    }

    fn create_client(&self) -> Client {
        self.create_client_with_key(KEY)
    }
}

impl Drop for TestContext {
    fn drop(&mut self) {
        self.server_handle.abort();
    }
}

#[test]
fn test_client_invalid_scheme() {
    let result = Client::new("ftp://example.com", KEY);
    assert!(result.is_err());
    if let Err(err) = result {
        assert!(matches!(err, Error::InvalidScheme(_)));
        assert_eq!(
            err.to_string(),
            "invalid URL scheme: ftp (expected http or https)"
        );
    }

    assert!(Client::new("http://localhost:8080", KEY).is_ok());
    assert!(Client::new("https://localhost:8080", KEY).is_ok());
    assert!(matches!(Client::new("not a url", KEY), Err(Error::Url(_))));
}

#[test]
fn test_base_url_is_kept_as_directory() {
    let client = Client::new("https://example.com/v2", KEY).unwrap();
    assert_eq!(client.base_url().as_str(), "https://example.com/v2/");
    assert_eq!(client.identity_url().as_str(), "https://api.mojang.com/");
    assert!(!format!("{client:?}").contains(KEY));
}

#[test]
fn test_unknown_game_type_is_invalid_game_mode() {
    let err: Error = "Minigolf".parse::<GameType>().unwrap_err().into();
    assert!(matches!(err, Error::InvalidGameMode(_)));
    assert_eq!(err.to_string(), "invalid game mode: unknown game type: Minigolf");
}

#[tokio::test]
async fn test_validate_key_rejects_malformed_key_without_request() {
    let ctx = TestContext::new().await;
    let client = ctx.create_client_with_key("not-a-key");

    let err = client.validate_key().await.unwrap_err();
    assert!(matches!(err, Error::InvalidCredentialFormat));
    assert_eq!(ctx.hits.key.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn test_validate_key() {
    let ctx = TestContext::new().await;

    assert!(ctx.create_client().validate_key().await.unwrap());

    // Well formed, but the service does not know it.
    let err = ctx
        .create_client_with_key(OTHER_KEY)
        .validate_key()
        .await
        .unwrap_err();
    assert!(matches!(err, Error::InvalidCredentialFormat));
    assert_eq!(ctx.hits.key.load(Ordering::SeqCst), 2);
}

#[tokio::test]
async fn test_key_info() {
    let ctx = TestContext::new().await;
    let record = ctx.create_client().key_info().await.unwrap();
    assert_eq!(record["owner"], json!(NOTCH));
    assert_eq!(record["totalQueries"], json!(7));
}

#[tokio::test]
async fn test_resolve_identifier() {
    let ctx = TestContext::new().await;
    let client = ctx.create_client();

    let id = client.resolve_identifier("Notch").await.unwrap();
    assert_eq!(id.as_str(), NOTCH);

    let err = client.resolve_identifier("nobody_here").await.unwrap_err();
    assert!(matches!(err, Error::UnknownDisplayName(ref name) if name == "nobody_here"));
}

#[tokio::test]
async fn test_player_by_display_name_resolves_first() {
    let ctx = TestContext::new().await;
    let client = ctx.create_client();

    let player = client.player("Notch").await.unwrap();
    assert_eq!(player.uuid().as_str(), NOTCH);
    assert_eq!(player.display_name(), Some("Notch"));
    assert_eq!(player.network_level(), Some(3));
    assert_eq!(player.bedwars_level(), Some(4));
    assert_eq!(ctx.hits.identity.load(Ordering::SeqCst), 1);
    assert_eq!(ctx.hits.player.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn test_player_by_identifier_skips_identity_service() {
    let ctx = TestContext::new().await;
    let client = ctx.create_client();

    let player = client.player(NOTCH).await.unwrap();
    assert_eq!(player.display_name(), Some("Notch"));
    assert_eq!(ctx.hits.identity.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn test_player_errors() {
    let ctx = TestContext::new().await;
    let client = ctx.create_client();

    let err = client.player("nobody_here").await.unwrap_err();
    assert!(matches!(err, Error::UnknownDisplayName(_)));
    assert_eq!(ctx.hits.player.load(Ordering::SeqCst), 0);

    let never_joined = "0000000000000000000000000000beef";
    let err = client.player(never_joined).await.unwrap_err();
    assert!(matches!(err, Error::UnknownPlayer(ref id) if id == never_joined));

    let err = ctx
        .create_client_with_key(OTHER_KEY)
        .player(NOTCH)
        .await
        .unwrap_err();
    let Error::FailedWithBody { status, body } = err else {
        panic!("expected FailedWithBody, got {err:?}");
    };
    assert_eq!(status, reqwest::StatusCode::FORBIDDEN);
    assert!(body.contains("Invalid API key"));
}

#[tokio::test]
async fn test_guild_lookups() {
    let ctx = TestContext::new().await;
    let client = ctx.create_client();

    let guild = client.guild_by_id(GUILD_ID).await.unwrap();
    assert_eq!(guild.id(), GUILD_ID);
    assert_eq!(guild.name(), Some("Builders"));
    assert_eq!(guild.tag(), Some("BLD"));
    assert_eq!(guild.experience(), Some(1200.0));
    assert!(guild.description().is_none());

    let by_name = client.guild_by_name("Builders").await.unwrap();
    assert_eq!(by_name, guild);

    let uuid = Identifier::parse(NOTCH).unwrap();
    let of_player = client.player_guild(&uuid).await.unwrap();
    assert_eq!(of_player, guild);
}

#[tokio::test]
async fn test_guild_errors() {
    let ctx = TestContext::new().await;
    let client = ctx.create_client();

    let err = client.guild_by_id("deadbeef").await.unwrap_err();
    assert!(matches!(err, Error::InvalidGuildIdentifier(ref cause) if cause == "Malformed guild ID"));

    let err = client.guild_by_id("000000000000000000000000").await.unwrap_err();
    assert!(
        matches!(err, Error::InvalidGuildIdentifier(ref cause) if cause == "Guild id is not valid.")
    );

    let err = client.guild_by_name("Nobody").await.unwrap_err();
    assert!(matches!(err, Error::InvalidGuildIdentifier(_)));
}

#[tokio::test]
async fn test_game_type_filters() {
    let ctx = TestContext::new().await;
    let client = ctx.create_client();

    let all = client.leaderboards().await.unwrap();
    assert!(all.get("BEDWARS").is_some());
    let bedwars = client.game_leaderboard(GameType::Bedwars).await.unwrap();
    assert_eq!(bedwars, Some(json!([{ "path": "bedwars_level" }])));
    assert_eq!(client.game_leaderboard(GameType::Pit).await.unwrap(), None);

    let skywars = client.game_count(GameType::SkyWars).await.unwrap();
    assert_eq!(skywars, Some(json!({ "players": 10 })));
    assert_eq!(client.game_count(GameType::Duels).await.unwrap(), None);
}

#[tokio::test]
async fn test_simple_resources() {
    let ctx = TestContext::new().await;
    let client = ctx.create_client();
    let uuid = Identifier::parse(NOTCH).unwrap();

    assert_eq!(client.player_count().await.unwrap(), 12345);
    assert_eq!(
        client.friends(&uuid).await.unwrap(),
        json!([{ "uuidSender": NOTCH }])
    );
    assert_eq!(client.status(&uuid).await.unwrap(), json!({ "online": false }));
    assert_eq!(
        client.recent_games(&uuid).await.unwrap(),
        json!([{ "gameType": "BEDWARS" }])
    );
    assert_eq!(
        client.player_auctions(&uuid).await.unwrap(),
        json!([{ "bin": true }])
    );
    assert_eq!(
        client.skyblock_profiles(&uuid).await.unwrap(),
        json!([{ "cute_name": "Apple" }])
    );

    let watchdog = client.watchdog_stats().await.unwrap();
    assert_eq!(watchdog["watchdog_total"], json!(9));
    assert_eq!(watchdog["staff_total"], json!(4));
    let bazaar = client.skyblock_bazaar().await.unwrap();
    assert!(bazaar["products"].get("WHEAT").is_some());
    assert_eq!(
        client.skyblock_news().await.unwrap(),
        json!([{ "title": "Patch" }])
    );
}

#[tokio::test]
async fn test_skyblock_auction_pages() {
    let ctx = TestContext::new().await;
    let client = ctx.create_client();

    let AuctionPage::Found(page) = client.skyblock_auctions(0).await.unwrap() else {
        panic!("expected first page");
    };
    assert_eq!(page["totalPages"], json!(1));

    let missing = client.skyblock_auctions(7).await.unwrap();
    assert_eq!(
        missing,
        AuctionPage::Missing {
            cause: "Page not found".to_string()
        }
    );
}

#[tokio::test]
async fn test_failed_status_carries_body() {
    let ctx = TestContext::new().await;
    let err = ctx.create_client().boosters().await.unwrap_err();
    let Error::FailedWithBody { status, body } = &err else {
        panic!("expected FailedWithBody, got {err:?}");
    };
    assert_eq!(*status, reqwest::StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body, "upstream down");
    assert_eq!(
        err.to_string(),
        "failed: 500 Internal Server Error: upstream down"
    );
}

#[tokio::test]
async fn test_refused_requests_are_failures() {
    let ctx = TestContext::new().await;
    let client = ctx.create_client_with_key(OTHER_KEY);

    // The body carries a `cause`, but it is about the key, not the guild or page.
    let err = client.guild_by_id(GUILD_ID).await.unwrap_err();
    let Error::FailedWithBody { status, body } = err else {
        panic!("expected FailedWithBody, got {err:?}");
    };
    assert_eq!(status, reqwest::StatusCode::FORBIDDEN);
    assert!(body.contains("Invalid API key"));

    let err = client.skyblock_auctions(0).await.unwrap_err();
    let Error::FailedWithBody { status, body } = err else {
        panic!("expected FailedWithBody, got {err:?}");
    };
    assert_eq!(status, reqwest::StatusCode::FORBIDDEN);
    assert!(body.contains("Invalid API key"));
}

#[tokio::test]
async fn test_transport_errors_hide_key() {
    // Nothing listens on port 1.
    let client = Client::with_config(
        KEY,
        ClientConfig {
            api_url: "http://127.0.0.1:1/".to_string(),
            identity_url: "http://127.0.0.1:1/".to_string(),
            timeout: Duration::from_secs(5),
        },
    )
    .unwrap();

    let err = client.key_info().await.unwrap_err();
    assert!(matches!(err, Error::Reqwest(_)));
    assert!(!err.to_string().contains(KEY));
    assert!(!format!("{err:?}").contains(KEY));

    let err = client.validate_key().await.unwrap_err();
    assert!(matches!(err, Error::Reqwest(_)));
    assert!(!err.to_string().contains(KEY));
}
