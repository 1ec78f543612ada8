/// One-shot latch guarding a component's release path.
///
/// `begin()` returns `true` exactly once; later calls return `false` so a
/// second `release()` becomes a no-op instead of freeing resources twice.
#[derive(Clone, Copy, Debug, Default)]
pub struct Teardown {
    released: bool,
}

impl Teardown {
    pub fn begin(&mut self) -> bool {
        !std::mem::replace(&mut self.released, true)
    }
}
