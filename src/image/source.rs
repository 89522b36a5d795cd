//! File-backed image source
//!
//! Decodes the file on a worker thread. Cancellation is cooperative: the
//! decode itself runs to completion, but a cancelled load never calls its
//! completion.

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::{Arc, Mutex};

use super::{CancelToken, Image, ImageSource, LoadCompletion};

type Decoder = Arc<dyn Fn(&Path) -> Option<Image> + Send + Sync>;

/// Loads one image file from disk
pub struct FileImageSource {
    path: PathBuf,
    decode: Decoder,
    next_token: AtomicU64,
    in_flight: Arc<Mutex<HashMap<u64, Arc<AtomicBool>>>>,
}

impl FileImageSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            decode: Arc::new(decode_file),
            next_token: AtomicU64::new(1),
            in_flight: Arc::new(Mutex::new(HashMap::new())),
        }
    }

    /// Number of loads that have neither finished nor been cancelled
    pub fn in_flight(&self) -> usize {
        self.in_flight.lock().map(|map| map.len()).unwrap_or(0)
    }
}

/// Decode an image file, logging why it could not be read
pub fn decode_file(path: &Path) -> Option<Image> {
    match ::image::open(path) {
        Ok(decoded) => Some(Image::from_rgba(decoded.to_rgba8())),
        Err(e) => {
            tracing::warn!("Failed to decode image {}: {}", path.display(), e);
            None
        }
    }
}

impl ImageSource for FileImageSource {
    fn load(&self, completion: LoadCompletion) -> Option<CancelToken> {
        let id = self.next_token.fetch_add(1, Ordering::Relaxed);
        let cancelled = Arc::new(AtomicBool::new(false));
        if let Ok(mut map) = self.in_flight.lock() {
            map.insert(id, Arc::clone(&cancelled));
        }

        let path = self.path.clone();
        let decode = Arc::clone(&self.decode);
        let in_flight = Arc::clone(&self.in_flight);
        std::thread::spawn(move || {
            let image = decode(&path);

            if let Ok(mut map) = in_flight.lock() {
                map.remove(&id);
            }
            if cancelled.load(Ordering::Acquire) {
                tracing::debug!("Load {} of {} cancelled, dropping result", id, path.display());
                return;
            }
            completion(image);
        });

        Some(CancelToken(id))
    }

    fn cancel(&self, token: CancelToken) {
        let Ok(mut map) = self.in_flight.lock() else {
            return;
        };
        if let Some(flag) = map.remove(&token.0) {
            flag.store(true, Ordering::Release);
            tracing::debug!("Cancelled load {} of {}", token.0, self.path.display());
        }
    }
}
