#![allow(dead_code)]

use async_trait::async_trait;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use novel_portal::gateway::{
    Gateway, OutboundRequest, RouteTable, Transport, TransportError, TransportResponse,
};

pub const BASE_URL: &str = "http://backend.test";

pub enum Reply {
    Status(u16, String),
    Fail(String),
}

/// Transport double that records every request and answers with a canned reply.
pub struct MockTransport {
    reply: Reply,
    calls: AtomicUsize,
    requests: Mutex<Vec<OutboundRequest>>,
}

impl MockTransport {
    pub fn new(reply: Reply) -> Arc<Self> {
        Arc::new(Self {
            reply,
            calls: AtomicUsize::new(0),
            requests: Mutex::new(Vec::new()),
        })
    }

    pub fn ok(body: &str) -> Arc<Self> {
        Self::new(Reply::Status(200, body.to_string()))
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn last_request(&self) -> Option<OutboundRequest> {
        self.requests.lock().unwrap().last().cloned()
    }
}

#[async_trait]
impl Transport for MockTransport {
    async fn send(&self, request: OutboundRequest) -> Result<TransportResponse, TransportError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.requests.lock().unwrap().push(request);

        match &self.reply {
            Reply::Status(status, body) => Ok(TransportResponse {
                status: *status,
                body: body.clone(),
            }),
            Reply::Fail(msg) => Err(TransportError(msg.clone())),
        }
    }
}

pub fn gateway(transport: Arc<MockTransport>) -> Gateway {
    Gateway::new(Some(BASE_URL.to_string()), Arc::new(RouteTable::default()), transport)
}

pub fn novels_json() -> &'static str {
    r#"[
        {"id": 1, "country": "kr", "title": "Omniscient Reader", "chapter": {"Web": 551},
         "rating": 9, "status": "Completed", "tags": ["Apocalypse", "Fantasy"], "notes": "",
         "date_modified": "2024-12-20T10:00:00Z"},
        {"id": 2, "country": "jp", "title": "Mushoku Tensei", "chapter": {"Novel": {"volume": 26, "chapter": 3, "part": 0}},
         "rating": 7, "status": "Reading", "tags": ["Isekai"], "notes": "slow \"middle\" arc",
         "date_modified": "2024-11-02T08:30:00Z"},
        {"id": 3, "country": "cn", "title": "Lord of the Mysteries", "chapter": "Invalid",
         "rating": 0, "status": "Waiting", "tags": [], "notes": "",
         "date_modified": "2024-10-15T12:00:00Z"},
        {"id": 4, "country": "kr", "title": "Solo Leveling", "chapter": {"Web": 12},
         "rating": 8, "status": "Dropped", "tags": ["Action"], "notes": "",
         "date_modified": "2025-01-05T09:15:00Z"}
    ]"#
}
