use serde::Serialize;

/// Liveness payload returned by `GET /status`.
#[derive(Serialize, Debug)]
pub struct Health {
    pub status: &'static str,
}
