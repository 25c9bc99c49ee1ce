#![allow(dead_code)]

use std::process::{Child, Command, Stdio};
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use reqwest::StatusCode;
use serde_json::Value;

/// A `weather-api` process owned by one test; killed and reaped on drop
pub struct TestServer {
    pub port: u16,
    pub base_url: String,
    child: Child,
}

impl TestServer {
    fn spawn() -> Result<Self> {
        // Pick an unused port for isolation
        let port = portpicker::pick_unused_port().context("failed to pick free port")?;
        let base_url = format!("http://127.0.0.1:{}", port);

        let mut cmd = Command::new(env!("CARGO_BIN_EXE_weather-api"));
        cmd.arg("--migrate")
            .arg("--host")
            .arg("127.0.0.1")
            .arg("--port")
            .arg(port.to_string())
            .env("RUST_LOG", "warn")
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null());

        // Inherit environment so the server sees DATABASE_URL
        let child = cmd.spawn().context("failed to spawn server binary")?;

        Ok(Self { port, base_url, child })
    }

    async fn wait_ready(&mut self, timeout: Duration) -> Result<()> {
        let client = reqwest::Client::new();
        let deadline = Instant::now() + timeout;
        while Instant::now() <= deadline {
            if let Some(status) = self.child.try_wait()? {
                anyhow::bail!("server exited before becoming ready: {}", status);
            }
            let url = format!("{}/health", self.base_url);
            if let Ok(resp) = client.get(&url).send().await {
                if resp.status() == StatusCode::OK {
                    return Ok(());
                }
            }
            tokio::time::sleep(Duration::from_millis(150)).await;
        }
        anyhow::bail!("server did not become ready on {} within {:?}", self.base_url, timeout)
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        let _ = self.child.kill();
        let _ = self.child.wait();
    }
}

/// Start a server for the calling test. Requires DATABASE_URL (from the
/// environment or .env); the server is stopped when the returned value drops.
pub async fn start_server() -> Result<TestServer> {
    let _ = dotenvy::dotenv();
    std::env::var("DATABASE_URL")
        .context("DATABASE_URL must point at a PostgreSQL database for HTTP tests")?;

    let mut server = TestServer::spawn()?;
    server.wait_ready(Duration::from_secs(15)).await?;
    Ok(server)
}

/// Short unique token for keys and names shared across test runs
pub fn unique(prefix: &str) -> String {
    let id = uuid::Uuid::new_v4().simple().to_string();
    format!("{}{}", prefix, &id[..10])
}

/// Create a state and return its abbrev
pub async fn create_state(client: &reqwest::Client, server: &TestServer) -> Result<String> {
    let abbrev = unique("S");
    let res = client
        .post(server.url("/states"))
        .json(&serde_json::json!({ "abbrev": abbrev, "name": format!("State {}", abbrev) }))
        .send()
        .await?;
    anyhow::ensure!(res.status() == StatusCode::CREATED, "state create failed: {}", res.status());
    Ok(abbrev)
}

/// Create a city in `state_abbrev` and return the created body
pub async fn create_city(
    client: &reqwest::Client,
    server: &TestServer,
    state_abbrev: &str,
    climate: &str,
) -> Result<Value> {
    let res = client
        .post(server.url("/city"))
        .json(&serde_json::json!({
            "state_abbrev": state_abbrev,
            "name": unique("City "),
            "climate": climate,
        }))
        .send()
        .await?;
    anyhow::ensure!(res.status() == StatusCode::CREATED, "city create failed: {}", res.status());
    Ok(res.json::<Value>().await?)
}
