/// Forwards the first call to its target and silently drops every later one.
///
/// The target is released after the first call, so whatever it captured (DOM
/// nodes, closures) is no longer kept alive by a lingering handle.
pub struct SingleUseGate<F: FnOnce()> {
    target: Option<F>,
}

impl<F: FnOnce()> SingleUseGate<F> {
    pub fn new(target: F) -> Self {
        Self {
            target: Some(target),
        }
    }

    /// Returns `true` if this call reached the target.
    pub fn call(&mut self) -> bool {
        match self.target.take() {
            Some(target) => {
                target();
                true
            }
            None => false,
        }
    }

    #[inline]
    pub fn is_spent(&self) -> bool {
        self.target.is_none()
    }
}
