//! Subprocess harness for the deliberate-crash endpoint. Exit behavior cannot
//! be observed in-process.

use std::process::{Command, Stdio};
use std::time::Duration;

#[tokio::test]
#[ignore = "requires a running postgres; spawns the server binary"]
async fn crash_endpoint_exits_with_code_3() {
    let port = 18723u16;
    let mut child = Command::new(env!("CARGO_BIN_EXE_hostprobe"))
        .env("PORT", port.to_string())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()
        .expect("spawn server binary");

    let base = format!("http://127.0.0.1:{port}");

    // Wait for the server to come up.
    let mut up = false;
    for _ in 0..40 {
        if reqwest::get(format!("{base}/test")).await.is_ok() {
            up = true;
            break;
        }
        tokio::time::sleep(Duration::from_millis(250)).await;
    }
    assert!(up, "server never became reachable");

    let body = reqwest::get(format!("{base}/crash"))
        .await
        .expect("crash request")
        .text()
        .await
        .expect("crash body");
    assert_eq!(body, "\"exited\"");

    let status = child.wait().expect("wait for server exit");
    assert_eq!(status.code(), Some(3));
}
