//! Shared utilities for integration testing.
#![allow(dead_code)]

use std::net::SocketAddr;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use proxy_steer::SteerConfig;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, UnixListener};

/// Start a mock health feed that answers every request with `status` and `body`.
pub async fn start_mock_feed(status: u16, body: &'static str) -> SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        loop {
            match listener.accept().await {
                Ok((mut socket, _)) => {
                    tokio::spawn(async move {
                        // Drain the request head before answering.
                        let mut head = Vec::new();
                        let mut buf = [0u8; 1024];
                        while !head.windows(4).any(|w| w == b"\r\n\r\n") {
                            match socket.read(&mut buf).await {
                                Ok(0) | Err(_) => return,
                                Ok(n) => head.extend_from_slice(&buf[..n]),
                            }
                        }

                        let status_text = match status {
                            200 => "200 OK",
                            404 => "404 Not Found",
                            500 => "500 Internal Server Error",
                            503 => "503 Service Unavailable",
                            _ => "200 OK",
                        };
                        let response = format!(
                            "HTTP/1.1 {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                            status_text,
                            body.len(),
                            body
                        );
                        let _ = socket.write_all(response.as_bytes()).await;
                        let _ = socket.shutdown().await;
                    });
                }
                Err(_) => break,
            }
        }
    });

    addr
}

/// An address nothing listens on.
pub async fn closed_addr() -> SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    listener.local_addr().unwrap()
}

/// Live state of the single mock server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MockServerState {
    pub addr: String,
    pub port: u16,
    pub admin_code: &'static str,
}

/// A fake load balancer admin socket for backend `b_socks`, server `s1`.
pub struct MockLoadBalancer {
    pub path: PathBuf,
    pub state: Arc<Mutex<MockServerState>>,
    pub commands: Arc<Mutex<Vec<String>>>,
    _dir: tempfile::TempDir,
}

impl MockLoadBalancer {
    /// Start with the server in maintenance on port 10000.
    pub async fn start() -> Self {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("admin.sock");
        let listener = UnixListener::bind(&path).unwrap();

        let state = Arc::new(Mutex::new(MockServerState {
            addr: "127.0.0.1".to_string(),
            port: 10000,
            admin_code: "2",
        }));
        let commands = Arc::new(Mutex::new(Vec::new()));

        let st = state.clone();
        let cmds = commands.clone();
        tokio::spawn(async move {
            while let Ok((mut socket, _)) = listener.accept().await {
                let mut request = String::new();
                if socket.read_to_string(&mut request).await.is_err() {
                    continue;
                }
                let command = request.trim().to_string();
                cmds.lock().unwrap().push(command.clone());

                let reply = handle(&st, &command);
                let _ = socket.write_all(reply.as_bytes()).await;
                let _ = socket.shutdown().await;
            }
        });

        Self {
            path,
            state,
            commands,
            _dir: dir,
        }
    }

    pub fn socket_path(&self) -> &Path {
        &self.path
    }

    pub fn snapshot(&self) -> MockServerState {
        self.state.lock().unwrap().clone()
    }

    pub fn commands(&self) -> Vec<String> {
        self.commands.lock().unwrap().clone()
    }
}

fn handle(state: &Mutex<MockServerState>, command: &str) -> String {
    let mut state = state.lock().unwrap();
    let words: Vec<&str> = command.split_whitespace().collect();

    match words.as_slice() {
        ["set", "server", "b_socks/s1", "addr", addr, "port", port] => {
            let Ok(port) = port.parse::<u16>() else {
                return "Invalid port.\n".to_string();
            };
            let reply = format!(
                "IP changed from '{}' to '{}', port changed from '{}' to '{}' by 'stats socket command'\n",
                state.addr, addr, state.port, port
            );
            state.addr = addr.to_string();
            state.port = port;
            reply
        }
        ["set", "server", "b_socks/s1", "state", "ready"] => {
            state.admin_code = "0";
            "\n".to_string()
        }
        ["show", "servers", "state", "b_socks"] => format!(
            "1\n# be_id be_name srv_id srv_name srv_addr srv_op_state srv_admin_state srv_uweight srv_port\n3 b_socks 1 s1 {} 2 {} 1 {}\n\n",
            state.addr, state.admin_code, state.port
        ),
        ["show", "servers", "state", _] => "Can't find backend.\n".to_string(),
        ["set", "server", ..] => "No such server.\n".to_string(),
        _ => "Unknown command. Please enter one of the following commands only :\n".to_string(),
    }
}

/// Config pointing at a mock feed and a mock admin socket.
pub fn config_for(feed: SocketAddr, socket: &Path) -> SteerConfig {
    let mut config = SteerConfig::default();
    config.feed.base_url = format!("http://{feed}");
    config.feed.timeout_secs = 5;
    config.control.socket_path = socket.display().to_string();
    config.control.timeout_secs = 5;
    config
}

pub const FEED_BODY: &str = r#"{
  "success": true,
  "data": [
    {"proxyPort": 10001, "name": "alpha", "latencyMs": 50, "online": true},
    {"proxyPort": 10002, "name": "beta", "latencyMs": 20, "online": false},
    {"proxyPort": 10003, "name": "Gamma Tokyo", "latencyMs": 35, "online": true},
    {"proxyPort": 10004, "name": "delta", "latencyMs": null, "online": true}
  ]
}"#;
