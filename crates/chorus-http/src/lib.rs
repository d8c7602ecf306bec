//! REST [`Transport`](chorus_core::Transport) for the platform's HTTP API.

mod client;
mod route;

pub use client::RestTransport;
pub use route::Route;
