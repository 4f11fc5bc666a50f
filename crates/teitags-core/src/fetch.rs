//! Single-stream GET of a remote document to a local path.
//!
//! The body is streamed into `<dest>.part` and renamed onto `<dest>` only
//! after the transfer and status check succeed, so a failed fetch never
//! leaves a truncated destination behind.

use crate::config::FetchConfig;
use crate::error::{Result, TeiError, TransportError};
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Path for the temp file: appends `.part` to the final path (e.g. `a.xml` → `a.xml.part`).
pub fn temp_path(final_path: &Path) -> PathBuf {
    let mut o = final_path.as_os_str().to_owned();
    o.push(".part");
    PathBuf::from(o)
}

/// Downloads `url` to `dest`, creating parent directories and overwriting any
/// existing file. Returns the number of bytes written.
pub fn fetch(url: &str, dest: &Path, opts: &FetchConfig) -> Result<u64> {
    let parsed = url::Url::parse(url).map_err(|reason| TransportError::InvalidUrl {
        url: url.to_string(),
        reason,
    })?;

    if let Some(parent) = dest.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|e| TeiError::filesystem(parent, e))?;
    }

    let part = temp_path(dest);
    tracing::debug!(url, dest = %dest.display(), "fetch starting");

    let written = match transfer(&parsed, &part, opts) {
        Ok(n) => n,
        Err(e) => {
            if let Err(rm) = fs::remove_file(&part) {
                if rm.kind() != std::io::ErrorKind::NotFound {
                    tracing::warn!(path = %part.display(), "could not remove temp file: {}", rm);
                }
            }
            return Err(e);
        }
    };

    fs::rename(&part, dest).map_err(|e| TeiError::filesystem(dest, e))?;
    tracing::info!(url, dest = %dest.display(), bytes = written, "fetch complete");
    Ok(written)
}

fn transfer(url: &url::Url, part: &Path, opts: &FetchConfig) -> Result<u64> {
    let curl_err = |source: curl::Error| {
        TeiError::from(TransportError::Curl {
            url: url.to_string(),
            source,
        })
    };

    let mut file = File::create(part).map_err(|e| TeiError::filesystem(part, e))?;
    let mut written = 0u64;
    let mut write_error: Option<std::io::Error> = None;

    let mut easy = curl::easy::Easy::new();
    easy.url(url.as_str()).map_err(curl_err)?;
    easy.follow_location(true).map_err(curl_err)?;
    easy.max_redirections(opts.max_redirections).map_err(curl_err)?;
    easy.connect_timeout(Duration::from_secs(opts.connect_timeout_secs))
        .map_err(curl_err)?;
    easy.timeout(Duration::from_secs(opts.timeout_secs))
        .map_err(curl_err)?;
    if let Some(ua) = &opts.user_agent {
        easy.useragent(ua).map_err(curl_err)?;
    }

    let performed = {
        let mut transfer = easy.transfer();
        transfer
            .write_function(|data| match file.write_all(data) {
                Ok(()) => {
                    written += data.len() as u64;
                    Ok(data.len())
                }
                Err(e) => {
                    write_error = Some(e);
                    Ok(0) // abort transfer
                }
            })
            .map_err(curl_err)?;
        transfer.perform()
    };

    // A write failure surfaces from libcurl as a generic write error; report the I/O cause.
    if let Some(e) = write_error {
        return Err(TeiError::filesystem(part, e));
    }
    performed.map_err(curl_err)?;

    if matches!(url.scheme(), "http" | "https") {
        let code = easy.response_code().map_err(curl_err)?;
        if !(200..300).contains(&code) {
            return Err(TransportError::HttpStatus {
                url: url.to_string(),
                code,
            }
            .into());
        }
    }

    file.sync_all().map_err(|e| TeiError::filesystem(part, e))?;
    Ok(written)
}
