use std::sync::Arc;

use crate::auth::key_manager::KeyManager;
use crate::gateway::Gateway;

#[derive(Clone)]
pub struct AppState {
    pub gateway: Gateway,
    pub key_manager: Arc<KeyManager>,
}
