use std::path::{Path, PathBuf};

use tokio::fs::File;
use tracing::debug;

use crate::http::mime;
use crate::http::request::{Method, Request};

/// How a request maps onto the filesystem.
///
/// Exactly one outcome per request; it decides the entire response shape.
/// `Found` carries the already-open file so the handle that classified the
/// outcome is the one that gets streamed.
#[derive(Debug)]
pub enum Outcome {
    Found {
        file: File,
        content_type: &'static str,
    },
    NotFound,
    MethodNotSupported,
}

/// Joins the target onto the serving root by plain concatenation.
///
/// No canonicalization: `..` segments and percent-escapes pass through
/// untouched. Hardened resolution would replace this function; nothing
/// else in the cycle builds paths.
pub fn candidate_path(root: &Path, target: &str) -> PathBuf {
    let mut path = root.as_os_str().to_os_string();
    path.push(target);
    PathBuf::from(path)
}

/// Classifies a request: a `GET` whose target opens as a regular file is
/// `Found`, a `GET` that does not resolve is `NotFound`, anything else is
/// `MethodNotSupported`.
pub async fn resolve(root: &Path, request: &Request) -> Outcome {
    let target = match (&request.method, request.target.as_deref()) {
        (Method::Get, Some(target)) => target,
        // the parser rejects a GET without a target before resolution
        (Method::Get, None) => return Outcome::NotFound,
        (Method::Other(_), _) => return Outcome::MethodNotSupported,
    };

    let path = candidate_path(root, target);

    let file = match File::open(&path).await {
        Ok(file) => file,
        Err(_) => return Outcome::NotFound,
    };

    // Opening a directory succeeds on Linux; only regular files are served.
    match file.metadata().await {
        Ok(meta) if meta.is_file() => {
            debug!("Serving {}", path.display());
            Outcome::Found {
                file,
                content_type: mime::content_type(target),
            }
        }
        _ => Outcome::NotFound,
    }
}
