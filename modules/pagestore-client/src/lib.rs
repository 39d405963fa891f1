//! REST client for the archived-page store backing the question-answering
//! agent. Three calls: rank chunks against a query embedding, list every
//! known page URL, and reassemble one page from its ordered chunks.

pub mod error;
pub mod types;

pub use error::{PageStoreError, Result};
pub use types::{MatchPagesInput, PageChunk, PageRow};

const PAGES_TABLE: &str = "pages";

pub struct PageStoreClient {
    client: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl PageStoreClient {
    pub fn new(base_url: &str, api_key: &str) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key: api_key.to_string(),
        }
    }

    /// Top `count` chunks ranked by similarity to `query_embedding`.
    pub async fn match_pages(
        &self,
        query_embedding: &[f32],
        count: u32,
    ) -> Result<Vec<PageChunk>> {
        let url = format!("{}/rest/v1/rpc/match_{}", self.base_url, PAGES_TABLE);
        let input = MatchPagesInput {
            query_embedding: query_embedding.to_vec(),
            match_count: count,
        };

        let resp = self
            .client
            .post(&url)
            .header("apikey", &self.api_key)
            .bearer_auth(&self.api_key)
            .json(&input)
            .send()
            .await?;

        let status = resp.status();
        if !status.is_success() {
            let message = resp.text().await.unwrap_or_default();
            return Err(PageStoreError::Api {
                status: status.as_u16(),
                message,
            });
        }

        Ok(resp.json().await?)
    }

    /// Every page URL known to the store, deduplicated and sorted.
    pub async fn list_page_urls(&self) -> Result<Vec<String>> {
        let url = format!("{}/rest/v1/{}?select=url", self.base_url, PAGES_TABLE);

        let resp = self
            .client
            .get(&url)
            .header("apikey", &self.api_key)
            .bearer_auth(&self.api_key)
            .send()
            .await?;

        let status = resp.status();
        if !status.is_success() {
            let message = resp.text().await.unwrap_or_default();
            return Err(PageStoreError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let rows: Vec<PageRow> = resp.json().await?;
        Ok(unique_sorted_urls(rows))
    }

    /// Full content of one page: all its chunks in `chunk_number` order,
    /// joined under the page title.
    pub async fn page_content(&self, page_url: &str) -> Result<String> {
        let url = format!(
            "{}/rest/v1/{}?select=title,content,chunk_number,url&url=eq.{}&order=chunk_number",
            self.base_url, PAGES_TABLE, page_url
        );

        let resp = self
            .client
            .get(&url)
            .header("apikey", &self.api_key)
            .bearer_auth(&self.api_key)
            .send()
            .await?;

        let status = resp.status();
        if !status.is_success() {
            let message = resp.text().await.unwrap_or_default();
            return Err(PageStoreError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let chunks: Vec<PageChunk> = resp.json().await?;
        if chunks.is_empty() {
            tracing::debug!(url = page_url, "No chunks stored for page");
        }
        Ok(assemble_page(&chunks))
    }
}

/// Reassemble a page from its ordered chunks: `# <main title>` (the title up
/// to the first " - " separator) followed by each chunk's content.
fn assemble_page(chunks: &[PageChunk]) -> String {
    let Some(first) = chunks.first() else {
        return String::new();
    };

    let main_title = first.title.split(" - ").next().unwrap_or(&first.title);
    let mut parts = vec![format!("# {main_title}\n")];
    parts.extend(chunks.iter().map(|c| c.content.clone()));
    parts.join("\n\n")
}

fn unique_sorted_urls(rows: Vec<PageRow>) -> Vec<String> {
    let mut urls: Vec<String> = rows.into_iter().map(|r| r.url).collect();
    urls.sort();
    urls.dedup();
    urls
}
