use std::cell::Cell;
use std::rc::Rc;

/// Shared "a card is inside the scan band" flag.
///
/// The stream controller holds a clone and writes it after every clipping
/// recompute; the scanner holds another clone and reads it once per frame.
/// Everything runs on the browser's main thread, so a `Cell` is enough.
#[derive(Clone, Debug, Default)]
pub struct ScanSignal(Rc<Cell<bool>>);

impl ScanSignal {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn set(&self, scanning: bool) {
        self.0.set(scanning);
    }

    #[inline]
    pub fn get(&self) -> bool {
        self.0.get()
    }
}
