use std::fs;
use std::path::Path;

use anyhow::Context;
use wordcount_core::Request;
use wordcount_logging::wc_info;

/// Reads and parses a JSON [`Request`]. Type checks on its fields happen when it runs.
pub fn load_request(path: &Path) -> anyhow::Result<Request> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("failed to read request file {path:?}"))?;
    let request: Request = serde_json::from_str(&content)
        .with_context(|| format!("failed to parse request file {path:?}"))?;
    wc_info!("Loaded request {:?} from {:?}", request.query, path);
    Ok(request)
}
