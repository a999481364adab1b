//! `HttpDirectory` against an in-process fake backend and search endpoint.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::routing::{delete, get};
use axum::{Json, Router};
use country_picker::directory::{CountryDirectory, HttpDirectory};
use country_picker::domain::{Country, Operation};
use country_picker::infrastructure::CancellationToken;
use country_picker::CountryError;
use serde_json::{json, Value};
use std::sync::{Arc, Mutex};
use std::time::Duration;

#[derive(Default)]
struct Backend {
    selected: Mutex<Vec<Country>>,
    queries: Mutex<Vec<String>>,
}

fn upstream_records() -> Value {
    json!([
        {"cca3": "GBR", "name": {"common": "United Kingdom", "official": "United Kingdom of Great Britain and Northern Ireland"},
         "flags": {"png": "https://flagcdn.com/w320/gb.png"}, "capital": ["London"], "region": "Europe", "population": 67215293},
        {"cca3": "TZA", "name": {"common": "Tanzania", "official": "United Republic of Tanzania"},
         "flags": {"png": "https://flagcdn.com/w320/tz.png"}},
        {"cca3": "USA", "name": {"common": "United States"}, "flags": {"png": "https://flagcdn.com/w320/us.png"}},
        {"cca3": "UMI", "name": {"common": "United States Minor Outlying Islands"}, "flags": {"svg": "um.svg"}},
        {"cca3": "ARE", "name": {"common": "United Arab Emirates"}, "flags": {"png": "https://flagcdn.com/w320/ae.png"}},
        {"cca3": "MEX", "name": {"common": "Mexico", "official": "United Mexican States"},
         "flags": {"png": "https://flagcdn.com/w320/mx.png"}},
        {"cca3": "XDL", "name": {"common": "Disunited Land"}, "flags": {"png": "x.png"}}
    ])
}

async fn search(State(backend): State<Arc<Backend>>, Path(query): Path<String>) -> (StatusCode, Json<Value>) {
    backend.queries.lock().unwrap().push(query.clone());
    match query.as_str() {
        "united" => (StatusCode::OK, Json(upstream_records())),
        "slow" => {
            tokio::time::sleep(Duration::from_secs(5)).await;
            (StatusCode::OK, Json(json!([])))
        }
        _ => (StatusCode::NOT_FOUND, Json(json!({"status": 404, "message": "Not Found"}))),
    }
}

async fn list_selected(State(backend): State<Arc<Backend>>) -> Json<Vec<Country>> {
    Json(backend.selected.lock().unwrap().clone())
}

async fn add_selected(State(backend): State<Arc<Backend>>, Json(country): Json<Country>) -> (StatusCode, Json<Country>) {
    let stored = Country::new(country.code, country.name, country.flag_url);
    backend.selected.lock().unwrap().push(stored.clone());
    (StatusCode::CREATED, Json(stored))
}

async fn remove_selected(State(backend): State<Arc<Backend>>, Path(code): Path<String>) -> StatusCode {
    let mut selected = backend.selected.lock().unwrap();
    let before = selected.len();
    selected.retain(|c| c.code != code);
    if selected.len() == before {
        StatusCode::NOT_FOUND
    } else {
        StatusCode::NO_CONTENT
    }
}

async fn serve(router: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    format!("http://{addr}")
}

async fn start() -> (HttpDirectory, Arc<Backend>) {
    let backend = Arc::new(Backend::default());
    let router = Router::new()
        .route("/api/selected-countries/", get(list_selected).post(add_selected))
        .route("/api/selected-countries/:code/", delete(remove_selected))
        .route("/v3.1/name/:query", get(search))
        .with_state(Arc::clone(&backend));
    let base = serve(router).await;

    let directory = HttpDirectory::new(format!("{base}/api/"), format!("{base}/v3.1")).unwrap();
    (directory, backend)
}

async fn start_failing() -> HttpDirectory {
    let router = Router::new().fallback(|| async { StatusCode::INTERNAL_SERVER_ERROR });
    let base = serve(router).await;
    HttpDirectory::new(format!("{base}/api"), format!("{base}/v3.1")).unwrap()
}

#[tokio::test]
async fn search_normalizes_and_ranks_remote_records() {
    let (directory, _backend) = start().await;

    let results = directory
        .search_by_name("united", &CancellationToken::new())
        .await
        .unwrap();

    let names: Vec<&str> = results.iter().map(|c| c.name.as_str()).collect();
    assert_eq!(
        names,
        ["United Arab Emirates", "United Kingdom", "United States", "Disunited Land", "Mexico"]
    );
    let uk = &results[1];
    assert_eq!(uk.capital.as_deref(), Some("London"));
    assert_eq!(uk.population, Some(67_215_293));
}

#[tokio::test]
async fn search_query_is_percent_encoded() {
    let (directory, backend) = start().await;

    let err = directory
        .search_by_name("new zealand", &CancellationToken::new())
        .await
        .unwrap_err();

    assert_eq!(backend.queries.lock().unwrap().as_slice(), ["new zealand"]);
    assert!(matches!(
        err,
        CountryError::Network { operation: Operation::Search, status: Some(404), .. }
    ));
    assert_eq!(err.user_message(), "No matching results.");
}

#[tokio::test]
async fn cancelling_an_in_flight_search_returns_promptly() {
    let (directory, _backend) = start().await;
    let token = CancellationToken::new();

    let canceller = {
        let token = token.clone();
        tokio::spawn(async move {
            tokio::time::sleep(Duration::from_millis(50)).await;
            token.cancel();
        })
    };

    let err = tokio::time::timeout(Duration::from_secs(2), directory.search_by_name("slow", &token))
        .await
        .expect("search should stop once cancelled")
        .unwrap_err();
    canceller.await.unwrap();

    assert!(err.is_cancelled());
}

#[tokio::test]
async fn selection_round_trip() {
    let (directory, backend) = start().await;
    let peru = Country {
        capital: Some("Lima".into()),
        ..Country::new("PER", "Peru", "https://flagcdn.com/w320/pe.png")
    };

    assert!(directory.fetch_selected().await.unwrap().is_empty());

    let stored = directory.persist_selected(&peru).await.unwrap();
    assert_eq!(stored, Country::new("PER", "Peru", "https://flagcdn.com/w320/pe.png"));
    assert_eq!(directory.fetch_selected().await.unwrap(), vec![stored.clone()]);

    directory.delete_selected(&stored).await.unwrap();
    assert!(backend.selected.lock().unwrap().is_empty());

    let err = directory.delete_selected(&stored).await.unwrap_err();
    assert!(matches!(
        err,
        CountryError::Network { operation: Operation::RemoveSelected, status: Some(404), .. }
    ));
}

#[tokio::test]
async fn server_errors_are_tagged_with_the_operation() {
    let directory = start_failing().await;
    let country = Country::new("CHL", "Chile", "cl.png");

    let load = directory.fetch_selected().await.unwrap_err();
    let save = directory.persist_selected(&country).await.unwrap_err();
    let remove = directory.delete_selected(&country).await.unwrap_err();
    let search = directory
        .search_by_name("chile", &CancellationToken::new())
        .await
        .unwrap_err();

    for (err, operation) in [
        (load, Operation::LoadSelected),
        (save, Operation::SaveSelected),
        (remove, Operation::RemoveSelected),
        (search, Operation::Search),
    ] {
        assert!(
            matches!(err, CountryError::Network { operation: op, status: Some(500), .. } if op == operation),
            "unexpected error for {operation}"
        );
    }
}

#[tokio::test]
async fn unreachable_backend_is_a_transport_failure() {
    let directory = HttpDirectory::new("http://127.0.0.1:9/api", "http://127.0.0.1:9/v3.1").unwrap();

    let err = directory
        .search_by_name("peru", &CancellationToken::new())
        .await
        .unwrap_err();

    assert!(matches!(err, CountryError::Network { status: None, .. }));
    assert_eq!(err.user_message(), "Search failed.");
}
