//! Shared test helpers for integration tests
//!
//! Note: Functions may appear unused because each test file compiles separately.

#![allow(dead_code)]

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use zoomport::config::ViewportConfig;
use zoomport::image::{CancelToken, Image, ImageSource, LoadCompletion};
use zoomport::runtime::Runtime;

/// Default wait for worker threads in tests
pub const WAIT: Duration = Duration::from_secs(5);

/// Source that holds completions until the test fires them
#[derive(Default)]
pub struct ManualSource {
    pending: Mutex<Vec<(CancelToken, LoadCompletion)>>,
    cancelled: Mutex<Vec<CancelToken>>,
    loads: AtomicUsize,
}

impl ManualSource {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    /// Number of times `load` was called
    pub fn loads(&self) -> usize {
        self.loads.load(Ordering::SeqCst)
    }

    pub fn cancelled(&self) -> Vec<CancelToken> {
        self.cancelled.lock().unwrap().clone()
    }

    /// Fire the oldest pending completion (even if it was cancelled)
    pub fn complete_next(&self, image: Option<Image>) {
        let (_, completion) = self.pending.lock().unwrap().remove(0);
        completion(image);
    }

    /// Fire a completion from another thread, like a real network stack
    pub fn complete_next_on_thread(&self, image: Option<Image>) {
        let (_, completion) = self.pending.lock().unwrap().remove(0);
        std::thread::spawn(move || completion(image))
            .join()
            .unwrap();
    }

    pub fn pending(&self) -> usize {
        self.pending.lock().unwrap().len()
    }
}

impl ImageSource for ManualSource {
    fn load(&self, completion: LoadCompletion) -> Option<CancelToken> {
        let id = self.loads.fetch_add(1, Ordering::SeqCst) as u64 + 1;
        let token = CancelToken(id);
        self.pending.lock().unwrap().push((token, completion));
        Some(token)
    }

    fn cancel(&self, token: CancelToken) {
        self.cancelled.lock().unwrap().push(token);
    }
}

/// Source without cancellation that completes before `load` returns
pub struct ImmediateSource {
    image: Option<Image>,
    loads: AtomicUsize,
}

impl ImmediateSource {
    pub fn new(image: Option<Image>) -> Arc<Self> {
        Arc::new(Self {
            image,
            loads: AtomicUsize::new(0),
        })
    }

    pub fn loads(&self) -> usize {
        self.loads.load(Ordering::SeqCst)
    }
}

impl ImageSource for ImmediateSource {
    fn load(&self, completion: LoadCompletion) -> Option<CancelToken> {
        self.loads.fetch_add(1, Ordering::SeqCst);
        completion(self.image.clone());
        None
    }
}

/// 1200x600 test image (aspect ratio 2.0)
pub fn wide_image() -> Image {
    Image::filled(1200, 600, [30, 60, 90, 255])
}

pub fn runtime_with(source: Arc<dyn ImageSource>, config: ViewportConfig) -> Runtime {
    Runtime::new(config, source)
}

pub fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-6
}
