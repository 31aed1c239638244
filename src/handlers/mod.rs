pub mod backend;
pub mod key;
pub mod novels;

pub async fn health() -> &'static str {
    "ok"
}
