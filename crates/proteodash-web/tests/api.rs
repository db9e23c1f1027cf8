//! HTTP-level tests of the dashboard routes, driven in-process through the router.

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use axum::{
    body::{to_bytes, Body, Bytes},
    http::{Request, StatusCode},
    Router,
};
use pretty_assertions::assert_eq;
use proteodash_annotation::{GeneAnnotationSource, GeneInfo, LookupOutcome, Publication};
use proteodash_common::{ProteodashError, Result};
use proteodash_data::{Cell, DatasetSource, Table};
use proteodash_web::{router::build_router, state::AppState};
use serde_json::{json, Value};
use tower::ServiceExt;

/// In-memory dataset that counts how often each sheet is loaded.
#[derive(Default)]
struct CountingDataset {
    expression_loads: AtomicUsize,
    values_loads: AtomicUsize,
    fail_expression: bool,
}

impl DatasetSource for CountingDataset {
    fn load_expression(&self) -> Result<Table> {
        self.expression_loads.fetch_add(1, Ordering::SeqCst);
        if self.fail_expression {
            return Err(ProteodashError::SheetNotFound("S4B limma results".into()));
        }
        // Give concurrent first requests time to pile up on the cache.
        std::thread::sleep(std::time::Duration::from_millis(50));
        Ok(Table::new(
            vec!["EntrezGeneSymbol".into(), "logFC".into(), "adj.P.Val".into()],
            vec![
                vec![Cell::Text("TP53".into()), Cell::Number(2.0), Cell::Number(0.01)],
                vec![Cell::Text("GAPDH".into()), Cell::Number(0.1), Cell::Number(0.9)],
                vec![Cell::Text("KRAS".into()), Cell::Number(-1.5), Cell::Number(0.2)],
            ],
        ))
    }

    fn load_values(&self) -> Result<Table> {
        self.values_loads.fetch_add(1, Ordering::SeqCst);
        Ok(Table::new(
            vec![
                "EntrezGeneSymbol".into(),
                "Set1_YD_1".into(),
                "Set1_OD_1".into(),
                "Set2_YD_2".into(),
                "Set2_OD_2".into(),
            ],
            vec![vec![
                Cell::Text("TP53".into()),
                Cell::Number(1.0),
                Cell::Number(4.0),
                Cell::Number(3.0),
                Cell::Number(8.0),
            ]],
        ))
    }
}

#[derive(Default)]
struct StubAnnotation {
    outcomes: HashMap<String, LookupOutcome>,
    calls: AtomicUsize,
}

#[async_trait]
impl GeneAnnotationSource for StubAnnotation {
    async fn gene_info(&self, gene_symbol: &str) -> LookupOutcome {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.outcomes
            .get(gene_symbol)
            .cloned()
            .unwrap_or(LookupOutcome::NotFound)
    }
}

fn app(dataset: Arc<CountingDataset>, annotation: Arc<StubAnnotation>) -> Router {
    let state = AppState::new(dataset, annotation, "Set").unwrap();
    build_router(state, "static")
}

async fn get(app: &Router, uri: &str) -> (StatusCode, Bytes) {
    let response = app
        .clone()
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, body)
}

fn as_json(body: &Bytes) -> Value {
    serde_json::from_slice(body).unwrap()
}

#[tokio::test]
async fn test_volcano_data_shape() {
    let app = app(Arc::default(), Arc::default());
    let (status, body) = get(&app, "/api/volcano-data").await;
    assert_eq!(status, StatusCode::OK);

    let json = as_json(&body);
    let points = json["points"].as_array().unwrap();
    assert_eq!(points.len(), 3);
    assert_eq!(points[0]["gene_symbol"], "TP53");
    assert_eq!(points[0]["logFC"], 2.0);
    assert!((points[0]["neg_log10_pval"].as_f64().unwrap() - 2.0).abs() < 1e-12);
    assert_eq!(points[0]["significant"], true);
    assert_eq!(points[1]["significant"], false);
    // |logFC| > 1 but p too large.
    assert_eq!(points[2]["significant"], false);
}

#[tokio::test]
async fn test_volcano_data_is_cached() {
    let dataset = Arc::new(CountingDataset::default());
    let app = app(dataset.clone(), Arc::default());

    let (_, first) = get(&app, "/api/volcano-data").await;
    let (_, second) = get(&app, "/api/volcano-data").await;

    assert_eq!(first, second);
    assert_eq!(dataset.expression_loads.load(Ordering::SeqCst), 1);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_first_requests_load_once() {
    let dataset = Arc::new(CountingDataset::default());
    let app = app(dataset.clone(), Arc::default());

    let mut requests = tokio::task::JoinSet::new();
    for _ in 0..8 {
        let app = app.clone();
        requests.spawn(async move { get(&app, "/api/volcano-data").await });
    }
    while let Some(result) = requests.join_next().await {
        let (status, _) = result.unwrap();
        assert_eq!(status, StatusCode::OK);
    }

    assert_eq!(dataset.expression_loads.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn test_volcano_load_failure_is_server_error_and_retried() {
    let dataset = Arc::new(CountingDataset {
        fail_expression: true,
        ..CountingDataset::default()
    });
    let app = app(dataset.clone(), Arc::default());

    let (status, body) = get(&app, "/api/volcano-data").await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert!(as_json(&body)["error"].as_str().unwrap().contains("S4B limma results"));

    let (status, _) = get(&app, "/api/volcano-data").await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(dataset.expression_loads.load(Ordering::SeqCst), 2);
}

#[tokio::test]
async fn test_boxplot_found() {
    let app = app(Arc::default(), Arc::default());
    let (status, body) = get(&app, "/api/boxplot-data/TP53").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        as_json(&body),
        json!({
            "gene_symbol": "TP53",
            "young": {"group": "Young", "values": [1.0, 3.0], "mean": 2.0, "std": 1.0},
            "old": {"group": "Old", "values": [4.0, 8.0], "mean": 6.0, "std": 2.0}
        })
    );
}

#[tokio::test]
async fn test_boxplot_not_found_is_ok_with_error_body() {
    let dataset = Arc::new(CountingDataset::default());
    let app = app(dataset.clone(), Arc::default());

    let (status, body) = get(&app, "/api/boxplot-data/ZZZZ").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(as_json(&body), json!({"error": "Gene ZZZZ not found"}));

    let (_, again) = get(&app, "/api/boxplot-data/TP53").await;
    assert!(as_json(&again).get("young").is_some());
    assert_eq!(dataset.values_loads.load(Ordering::SeqCst), 1);
    assert_eq!(dataset.expression_loads.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn test_gene_info_found() {
    let info = GeneInfo {
        gene_symbol: "TP53".into(),
        gene_id: "7157".into(),
        publications: vec![Publication {
            title: "p53 and ageing.".into(),
            url: "https://pubmed.ncbi.nlm.nih.gov/11111".into(),
        }],
    };
    let annotation = Arc::new(StubAnnotation {
        outcomes: HashMap::from([("TP53".to_string(), LookupOutcome::Found(info))]),
        ..StubAnnotation::default()
    });
    let app = app(Arc::default(), annotation);

    let (status, body) = get(&app, "/api/gene-info/TP53").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        as_json(&body),
        json!({
            "gene_symbol": "TP53",
            "gene_id": "7157",
            "publications": [{"title": "p53 and ageing.", "url": "https://pubmed.ncbi.nlm.nih.gov/11111"}]
        })
    );
}

#[tokio::test]
async fn test_gene_info_not_found() {
    let annotation = Arc::new(StubAnnotation::default());
    let dataset = Arc::new(CountingDataset::default());
    let app = app(dataset.clone(), annotation.clone());

    let (status, body) = get(&app, "/api/gene-info/ZZZZ").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(as_json(&body), json!({"error": "Gene not found"}));
    assert_eq!(annotation.calls.load(Ordering::SeqCst), 1);
    // The annotation route never touches the dataset.
    assert_eq!(dataset.values_loads.load(Ordering::SeqCst), 0);
    assert_eq!(dataset.expression_loads.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn test_gene_info_upstream_unavailable() {
    let annotation = Arc::new(StubAnnotation {
        outcomes: HashMap::from([(
            "TP53".to_string(),
            LookupOutcome::Unavailable("operation timed out".into()),
        )]),
        ..StubAnnotation::default()
    });
    let app = app(Arc::default(), annotation);

    let (status, body) = get(&app, "/api/gene-info/TP53").await;
    assert_eq!(status, StatusCode::BAD_GATEWAY);
    assert_eq!(as_json(&body), json!({"error": "Annotation service unavailable"}));
}

#[tokio::test]
async fn test_dashboard_page() {
    let app = app(Arc::default(), Arc::default());
    let (status, body) = get(&app, "/").await;
    assert_eq!(status, StatusCode::OK);

    let html = String::from_utf8(body.to_vec()).unwrap();
    assert!(html.contains("volcano-plot"));
    assert!(html.contains("/static/js/main.js"));
    assert!(html.contains("data-alpha=\"0.05\""));
}
