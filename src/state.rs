use crate::content;
use crate::names::NameFilter;
use crate::tasbih::TasbihCounter;
use crate::verses::VerseOfDay;
use std::sync::Arc;
use tokio::sync::Mutex;

/// One instance per widget, constructed by the host with the built-in
/// content. Requests are the only thread of control that touches them.
#[derive(Clone)]
pub struct AppState {
    pub tasbih: Arc<Mutex<TasbihCounter>>,
    pub verse: Arc<Mutex<VerseOfDay>>,
    pub names: Arc<Mutex<NameFilter>>,
}

impl AppState {
    pub fn new() -> Self {
        let mut rng = rand::rng();
        Self {
            tasbih: Arc::new(Mutex::new(TasbihCounter::new(content::FORMULAS))),
            verse: Arc::new(Mutex::new(VerseOfDay::new(content::VERSES, &mut rng))),
            names: Arc::new(Mutex::new(NameFilter::new(content::NAMES))),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
