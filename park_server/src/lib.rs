//! `park_server`
//!
//! Ancillary static file server:
//! - Serves the working directory (or `--root`) over HTTP
//! - Extension-based content-type mapping (HTML/JS/CSS/images/GLTF)
//! - Permissive CORS on success, HTML 404s, plain 500s
//! - One response per connection, stateless per request

pub mod server;

pub use server::FileServer;
