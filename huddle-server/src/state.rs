use crate::signaling::{ConnectionHub, SignalingRouter};
use std::sync::Arc;

/// Shared state handed to every axum handler.
#[derive(Clone)]
pub struct AppState {
    pub hub: ConnectionHub,
    pub router: SignalingRouter,
    pub service: ServiceInfo,
}

/// What the liveness probe reports about this process.
#[derive(Debug, Clone)]
pub struct ServiceInfo {
    pub name: String,
    pub port: u16,
}

impl AppState {
    pub fn new(service: ServiceInfo) -> Self {
        let hub = ConnectionHub::new();
        let router = SignalingRouter::new(Arc::new(hub.clone()));

        Self {
            hub,
            router,
            service,
        }
    }
}
