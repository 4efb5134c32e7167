//! Static file server.
//!
//! Serves game assets (HTML, JS, GLTF models) from a root directory over
//! plain HTTP/1.1. Stateless per request, single attempt, one response per
//! connection. Every success carries a permissive CORS header so the
//! browser-side loader can fetch models cross-origin.

use std::io::ErrorKind;
use std::net::SocketAddr;
use std::path::{Component, Path, PathBuf};

use anyhow::Context;
use bytes::{BufMut, BytesMut};
use tokio::{
    io::{AsyncReadExt, AsyncWriteExt},
    net::{TcpListener, TcpStream},
};
use tracing::{debug, info, warn};

/// Extension → content type. Unknown extensions fall back to octet-stream.
fn content_type(path: &Path) -> &'static str {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase());
    match ext.as_deref() {
        Some("html") => "text/html",
        Some("js") => "text/javascript",
        Some("css") => "text/css",
        Some("json") => "application/json",
        Some("png") => "image/png",
        Some("jpg") | Some("jpeg") => "image/jpeg",
        Some("gif") => "image/gif",
        Some("svg") => "image/svg+xml",
        Some("ico") => "image/x-icon",
        Some("gltf") => "model/gltf+json",
        Some("glb") => "model/gltf-binary",
        _ => "application/octet-stream",
    }
}

/// Maps a request path to a relative file path under the root. `/` becomes
/// `index.html`; anything with a parent-directory component is refused.
fn sanitize(request_path: &str) -> Option<PathBuf> {
    let path = request_path.split(['?', '#']).next().unwrap_or("");
    let path = path.trim_start_matches('/');
    let path = if path.is_empty() { "index.html" } else { path };

    let rel = PathBuf::from(path);
    if rel
        .components()
        .all(|c| matches!(c, Component::Normal(_)))
    {
        Some(rel)
    } else {
        None
    }
}

/// Static file server bound to a listen address.
pub struct FileServer {
    root: PathBuf,
    listener: TcpListener,
}

impl FileServer {
    pub async fn bind(addr: SocketAddr, root: PathBuf) -> anyhow::Result<Self> {
        let listener = TcpListener::bind(addr).await.context("tcp bind")?;
        Ok(Self { root, listener })
    }

    pub fn local_addr(&self) -> anyhow::Result<SocketAddr> {
        Ok(self.listener.local_addr()?)
    }

    /// Accept loop; one task per connection.
    pub async fn run(self) -> anyhow::Result<()> {
        loop {
            let (stream, peer) = self.listener.accept().await.context("tcp accept")?;
            let root = self.root.clone();
            tokio::spawn(async move {
                if let Err(error) = handle_conn(stream, &root).await {
                    warn!(%peer, %error, "Request handling failed");
                }
            });
        }
    }
}

async fn handle_conn(mut stream: TcpStream, root: &Path) -> anyhow::Result<()> {
    let (method, path) = read_request_head(&mut stream).await?;
    info!(
        time = %chrono::Local::now().format("%H:%M:%S"),
        %method,
        %path,
        "Request"
    );

    let Some(rel) = sanitize(&path) else {
        return respond(
            &mut stream,
            "404 Not Found",
            "text/html",
            b"<h1>404 - File Not Found</h1>",
        )
        .await;
    };

    let full = root.join(&rel);
    match tokio::fs::read(&full).await {
        Ok(body) => {
            let mime = content_type(&rel);
            debug!(file = %full.display(), mime, bytes = body.len(), "Serving file");
            respond(&mut stream, "200 OK", mime, &body).await
        }
        Err(e) if e.kind() == ErrorKind::NotFound => {
            respond(
                &mut stream,
                "404 Not Found",
                "text/html",
                b"<h1>404 - File Not Found</h1>",
            )
            .await
        }
        Err(e) => {
            warn!(file = %full.display(), error = %e, "Read failed");
            respond(
                &mut stream,
                "500 Internal Server Error",
                "text/plain",
                format!("Server error: {}", e.kind()).as_bytes(),
            )
            .await
        }
    }
}

/// Reads the request head and returns (method, path). The body, if any, is
/// ignored; this server only ever serves files.
async fn read_request_head(stream: &mut TcpStream) -> anyhow::Result<(String, String)> {
    let mut buf = Vec::with_capacity(1024);
    let mut chunk = [0u8; 512];
    loop {
        let n = stream.read(&mut chunk).await.context("read request")?;
        if n == 0 {
            break;
        }
        buf.extend_from_slice(&chunk[..n]);
        if buf.windows(4).any(|w| w == b"\r\n\r\n") || buf.len() > 16 * 1024 {
            break;
        }
    }

    let head = String::from_utf8_lossy(&buf);
    let request_line = head.lines().next().unwrap_or_default();
    let mut parts = request_line.split_whitespace();
    let method = parts.next().context("missing method")?.to_string();
    let path = parts.next().context("missing path")?.to_string();
    Ok((method, path))
}

async fn respond(
    stream: &mut TcpStream,
    status: &str,
    mime: &str,
    body: &[u8],
) -> anyhow::Result<()> {
    let head = format!(
        "HTTP/1.1 {status}\r\nContent-Type: {mime}\r\nContent-Length: {len}\r\nAccess-Control-Allow-Origin: *\r\nConnection: close\r\n\r\n",
        len = body.len(),
    );
    let mut out = BytesMut::with_capacity(head.len() + body.len());
    out.put_slice(head.as_bytes());
    out.put_slice(body);
    stream.write_all(&out).await.context("write response")?;
    stream.shutdown().await.context("shutdown")?;
    Ok(())
}

/// Helper for tests: bind to an ephemeral port.
pub async fn bind_ephemeral(root: PathBuf) -> anyhow::Result<(FileServer, SocketAddr)> {
    let server = FileServer::bind("127.0.0.1:0".parse()?, root).await?;
    let addr = server.local_addr()?;
    Ok((server, addr))
}
