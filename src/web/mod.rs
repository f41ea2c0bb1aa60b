//! HTTP service for team recommendations.
//!
//! This module serves the matching engine over HTTP using Axum, with CORS
//! open to all origins so browser front-ends can call it directly.
//!
//! ## Starting the Server
//!
//! ```text
//! # Start on default port 8000
//! skill-match serve
//!
//! # Custom port
//! skill-match serve --port 3000
//!
//! # Bind to all interfaces
//! skill-match serve --address 0.0.0.0
//! ```
//!
//! ## API Endpoints
//!
//! - `POST /recommend` - Rank teams for a user's skills (JSON body)
//! - `GET /health` - Liveness probe

pub mod server;
