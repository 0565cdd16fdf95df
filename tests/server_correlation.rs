//! End-to-end tests for the demo server over real TCP.

use std::net::SocketAddr;

mod common;

#[tokio::test]
async fn test_request_and_handler_records_share_trace() {
    let addr: SocketAddr = "127.0.0.1:28481".parse().unwrap();
    let (captured, shutdown) = common::start_server(addr, "demo-proj").await;

    let client = reqwest::Client::builder().no_proxy().build().unwrap();
    let res = client
        .post(format!("http://{}/orders?id=7", addr))
        .header("X-Cloud-Trace-Context", "0af7651916cd43dd8448eb211c80319c/42;o=1")
        .header("X-Appengine-Request-Log-Id", "5f8a1c2b00ff")
        .header("User-Agent", "integration-test")
        .header("Referer", "https://referer.example/")
        .body("hello")
        .send()
        .await
        .expect("server unreachable");

    assert_eq!(res.status(), 200);
    assert_eq!(res.text().await.unwrap(), "Hello World");

    let requests = common::json_lines(&captured.requests);
    assert_eq!(requests.len(), 1);
    let arrival = &requests[0];
    assert_eq!(arrival["traceId"], "0af7651916cd43dd8448eb211c80319c");
    assert_eq!(arrival["logging.googleapis.com/spanId"], "42");
    assert_eq!(arrival["httpRequest"]["requestMethod"], "POST");
    assert_eq!(arrival["httpRequest"]["requestUrl"], "/orders?id=7");
    assert_eq!(arrival["httpRequest"]["requestSize"], "5");
    assert_eq!(arrival["httpRequest"]["userAgent"], "integration-test");
    assert_eq!(arrival["httpRequest"]["referer"], "https://referer.example/");

    let records = common::json_lines(&captured.structured);
    assert_eq!(records.len(), 1);
    let record = &records[0];
    assert_eq!(record["severity"], "INFO");
    assert_eq!(record["message"], "POST /orders");
    assert!(record.get("httpRequest").is_none());
    for field in [
        "traceId",
        "logging.googleapis.com/trace",
        "logging.googleapis.com/spanId",
        "logging.googleapis.com/operation",
    ] {
        assert_eq!(record[field], arrival[field], "{} should match the arrival record", field);
    }
    assert_eq!(
        record["logging.googleapis.com/trace"],
        "projects/demo-proj/traces/0af7651916cd43dd8448eb211c80319c"
    );
    assert_eq!(record["logging.googleapis.com/operation"]["id"], "5f8a1c2b00ff");

    assert!(captured.plain.is_empty());
    shutdown.trigger();
}

#[tokio::test]
async fn test_request_without_trace_header_degrades() {
    let addr: SocketAddr = "127.0.0.1:28482".parse().unwrap();
    let (captured, shutdown) = common::start_server(addr, "demo-proj").await;

    let client = reqwest::Client::builder().no_proxy().build().unwrap();
    let res = client.get(format!("http://{}/", addr)).send().await.unwrap();
    assert_eq!(res.status(), 200);

    let records = common::json_lines(&captured.structured);
    assert_eq!(records.len(), 1);
    assert_eq!(records[0]["traceId"], "");
    assert_eq!(records[0]["logging.googleapis.com/spanId"], "");
    assert_eq!(records[0]["logging.googleapis.com/trace"], "projects/demo-proj/traces/");
    assert_eq!(records[0]["logging.googleapis.com/operation"]["id"], "");

    shutdown.trigger();
}

#[tokio::test]
async fn test_concurrent_requests_keep_their_own_trace() {
    let addr: SocketAddr = "127.0.0.1:28483".parse().unwrap();
    let (captured, shutdown) = common::start_server(addr, "demo-proj").await;

    let client = reqwest::Client::builder().no_proxy().build().unwrap();
    let mut tasks = Vec::new();
    for i in 0..10 {
        let client = client.clone();
        let url = format!("http://{}/req/{}", addr, i);
        tasks.push(tokio::spawn(async move {
            client
                .get(url)
                .header("X-Cloud-Trace-Context", format!("trace-{}/span-{}", i, i))
                .send()
                .await
                .unwrap()
                .status()
        }));
    }
    for task in tasks {
        assert_eq!(task.await.unwrap(), 200);
    }

    let records = common::json_lines(&captured.structured);
    assert_eq!(records.len(), 10);
    for record in records {
        let message = record["message"].as_str().unwrap();
        let i = message.rsplit('/').next().unwrap();
        assert_eq!(record["traceId"], format!("trace-{}", i));
        assert_eq!(record["logging.googleapis.com/spanId"], format!("span-{}", i));
    }

    shutdown.trigger();
}
