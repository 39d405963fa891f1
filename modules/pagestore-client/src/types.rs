use serde::{Deserialize, Serialize};

/// One stored chunk of a crawled page. Pages are chunked before embedding;
/// `chunk_number` orders the chunks for reassembly.
#[derive(Debug, Clone, Deserialize)]
pub struct PageChunk {
    pub title: String,
    pub content: String,
    pub url: String,
    pub chunk_number: i64,
}

/// A row holding only the page URL, for the listing endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct PageRow {
    pub url: String,
}

/// Body for the `match_pages` similarity RPC.
#[derive(Debug, Clone, Serialize)]
pub struct MatchPagesInput {
    pub query_embedding: Vec<f32>,
    pub match_count: u32,
}
