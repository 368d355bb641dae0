use std::net::SocketAddr;
use std::sync::Arc;

use axum::Router;
use serde_json::{json, Value};
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;
use uuid::Uuid;

use server::routes::{self, ServerState};
use service::storage::ObjectStore;

struct TestApp {
    base_url: String,
}

async fn start_server() -> anyhow::Result<TestApp> {
    let data_dir = std::env::temp_dir().join(format!("stayhub_e2e_{}", Uuid::new_v4()));
    let store = ObjectStore::open(data_dir).await?;
    let state = ServerState { store: Arc::clone(&store) };

    let app: Router = routes::build_router(state, CorsLayer::very_permissive());
    let listener = TcpListener::bind((std::net::Ipv4Addr::LOCALHOST, 0)).await?;
    let addr: SocketAddr = listener.local_addr()?;
    let base_url = format!("http://{}:{}/api/v1", addr.ip(), addr.port());

    tokio::spawn(async move {
        if let Err(e) = axum::serve(listener, app).await {
            eprintln!("server error: {}", e);
        }
    });

    Ok(TestApp { base_url })
}

/// Two states, one city and one place each, with a wifi amenity on the
/// first place only.
struct Dataset {
    california: String,
    nevada: String,
    fremont: String,
    reno: String,
    loft: String,
    cabin: String,
    wifi: String,
}

async fn post_json(c: &reqwest::Client, url: String, body: Value) -> anyhow::Result<Value> {
    let res = c.post(url).json(&body).send().await?;
    assert_eq!(res.status(), reqwest::StatusCode::CREATED);
    Ok(res.json::<Value>().await?)
}

fn id_of(v: &Value) -> String {
    v["id"].as_str().unwrap().to_string()
}

async fn seed(c: &reqwest::Client, base: &str) -> anyhow::Result<Dataset> {
    let california = id_of(&post_json(c, format!("{}/states", base), json!({"name": "California"})).await?);
    let nevada = id_of(&post_json(c, format!("{}/states", base), json!({"name": "Nevada"})).await?);
    let fremont = id_of(
        &post_json(c, format!("{}/states/{}/cities", base, california), json!({"name": "Fremont"})).await?,
    );
    let reno = id_of(
        &post_json(c, format!("{}/states/{}/cities", base, nevada), json!({"name": "Reno"})).await?,
    );
    let user = id_of(
        &post_json(
            c,
            format!("{}/users", base),
            json!({"email": "host@example.com", "password": "secret"}),
        )
        .await?,
    );
    let loft = id_of(
        &post_json(
            c,
            format!("{}/cities/{}/places", base, fremont),
            json!({"name": "Loft", "user_id": user}),
        )
        .await?,
    );
    let cabin = id_of(
        &post_json(
            c,
            format!("{}/cities/{}/places", base, reno),
            json!({"name": "Cabin", "user_id": user}),
        )
        .await?,
    );
    let wifi = id_of(&post_json(c, format!("{}/amenities", base), json!({"name": "Wifi"})).await?);
    let res = c
        .post(format!("{}/places/{}/amenities/{}", base, loft, wifi))
        .send()
        .await?;
    assert_eq!(res.status(), reqwest::StatusCode::CREATED);
    Ok(Dataset { california, nevada, fremont, reno, loft, cabin, wifi })
}

async fn search(c: &reqwest::Client, base: &str, body: Value) -> anyhow::Result<Vec<String>> {
    let res = c.post(format!("{}/places_search", base)).json(&body).send().await?;
    assert_eq!(res.status(), reqwest::StatusCode::OK);
    let places = res.json::<Vec<Value>>().await?;
    let mut ids: Vec<String> = places.iter().map(id_of).collect();
    ids.sort();
    Ok(ids)
}

fn sorted(mut ids: Vec<String>) -> Vec<String> {
    ids.sort();
    ids
}

#[tokio::test]
async fn empty_filters_return_every_place() -> anyhow::Result<()> {
    let app = start_server().await?;
    let c = reqwest::Client::new();
    let data = seed(&c, &app.base_url).await?;

    let everything = sorted(vec![data.loft.clone(), data.cabin.clone()]);
    assert_eq!(search(&c, &app.base_url, json!({})).await?, everything);
    assert_eq!(
        search(&c, &app.base_url, json!({"states": [], "cities": [], "amenities": []})).await?,
        everything
    );
    Ok(())
}

#[tokio::test]
async fn state_and_city_filters_union() -> anyhow::Result<()> {
    let app = start_server().await?;
    let c = reqwest::Client::new();
    let data = seed(&c, &app.base_url).await?;

    assert_eq!(
        search(&c, &app.base_url, json!({"states": [data.california]})).await?,
        vec![data.loft.clone()]
    );
    assert_eq!(
        search(&c, &app.base_url, json!({"cities": [data.reno]})).await?,
        vec![data.cabin.clone()]
    );
    // a state plus a city in another state unions, a city already covered
    // by its state adds nothing twice
    assert_eq!(
        search(
            &c,
            &app.base_url,
            json!({"states": [data.nevada], "cities": [data.fremont, data.reno]})
        )
        .await?,
        sorted(vec![data.loft, data.cabin])
    );
    Ok(())
}

#[tokio::test]
async fn unknown_ids_are_dropped() -> anyhow::Result<()> {
    let app = start_server().await?;
    let c = reqwest::Client::new();
    let data = seed(&c, &app.base_url).await?;

    // unknown UUIDs and malformed strings never fail the request
    assert_eq!(
        search(
            &c,
            &app.base_url,
            json!({"states": [Uuid::new_v4().to_string(), "not-a-uuid"], "cities": [data.fremont]})
        )
        .await?,
        vec![data.loft.clone()]
    );
    // an amenity filter with no resolvable ids does not filter at all
    assert_eq!(
        search(&c, &app.base_url, json!({"amenities": [Uuid::new_v4().to_string()]})).await?,
        sorted(vec![data.loft, data.cabin])
    );
    Ok(())
}

#[tokio::test]
async fn amenity_filter_narrows_results() -> anyhow::Result<()> {
    let app = start_server().await?;
    let c = reqwest::Client::new();
    let data = seed(&c, &app.base_url).await?;

    assert_eq!(
        search(&c, &app.base_url, json!({"amenities": [data.wifi]})).await?,
        vec![data.loft.clone()]
    );
    // combined with a location filter that excludes the only wifi place
    assert_eq!(
        search(&c, &app.base_url, json!({"cities": [data.reno], "amenities": [data.wifi]})).await?,
        Vec::<String>::new()
    );
    Ok(())
}

#[tokio::test]
async fn non_object_body_is_rejected() -> anyhow::Result<()> {
    let app = start_server().await?;
    let c = reqwest::Client::new();

    let res = c
        .post(format!("{}/places_search", app.base_url))
        .json(&json!([1, 2, 3]))
        .send()
        .await?;
    assert_eq!(res.status(), reqwest::StatusCode::BAD_REQUEST);
    assert_eq!(res.json::<Value>().await?, json!({"error": "Not a JSON"}));

    let res = c.post(format!("{}/places_search", app.base_url)).send().await?;
    assert_eq!(res.status(), reqwest::StatusCode::BAD_REQUEST);
    Ok(())
}
