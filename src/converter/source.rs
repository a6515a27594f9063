use std::fs;
use std::path::Path;
use std::time::Duration;

use reqwest::blocking::Client;
use url::Url;

use crate::error::ConvertError;

/// Read schema text from a local path or an `http(s)://` / `file://` URL.
///
/// Anything that does not parse as an absolute URL (including Windows drive
/// paths, whose single-letter "scheme" is ignored) is read as a path.
pub fn read_source(location: &str) -> Result<String, ConvertError> {
    let url = match Url::parse(location) {
        Ok(url) if url.scheme().len() > 1 => url,
        _ => return read_path(Path::new(location)),
    };

    match url.scheme() {
        "http" | "https" => {
            tracing::debug!(%url, "fetching remote schema");
            let client = Client::builder().timeout(Duration::from_secs(30)).build()?;
            let content = client.get(url.as_str()).send()?.error_for_status()?.text()?;
            Ok(content)
        }
        "file" => {
            let path = url.to_file_path().map_err(|_| ConvertError::InvalidLocation {
                location: location.to_string(),
            })?;
            read_path(&path)
        }
        scheme => Err(ConvertError::UnsupportedScheme {
            scheme: scheme.to_string(),
        }),
    }
}

fn read_path(path: &Path) -> Result<String, ConvertError> {
    tracing::debug!(path = %path.display(), "reading schema file");
    Ok(fs::read_to_string(path)?)
}
