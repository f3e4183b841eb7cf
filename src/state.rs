// src/state.rs
use std::sync::Arc;

use crate::services::responder::Responder;

pub type SharedState = Arc<AppState>;

#[derive(Debug, Default)]
pub struct AppState {
    pub responder: Responder,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            responder: Responder::new(),
        }
    }

    pub fn shared() -> SharedState {
        Arc::new(Self::new())
    }
}
