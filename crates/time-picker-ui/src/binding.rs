/// Receiver for the total minutes a picker publishes after a user change.
///
/// The host owns the value; the picker only reads it once when constructed and
/// pushes every later change through this trait.
pub trait DurationBinding {
    fn publish(&mut self, minutes: f64);
}

impl DurationBinding for f64 {
    fn publish(&mut self, minutes: f64) {
        *self = minutes;
    }
}

impl DurationBinding for u32 {
    fn publish(&mut self, minutes: f64) {
        *self = minutes.max(0.0) as u32;
    }
}

impl<B: DurationBinding + ?Sized> DurationBinding for &mut B {
    fn publish(&mut self, minutes: f64) {
        (**self).publish(minutes);
    }
}

/// Forwards published values to a closure.
pub struct CallbackBinding<F>(pub F);

impl<F: FnMut(f64)> DurationBinding for CallbackBinding<F> {
    fn publish(&mut self, minutes: f64) {
        (self.0)(minutes);
    }
}

/// Drops every value; for previews that have nothing to bind to.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopBinding;

impl DurationBinding for NoopBinding {
    fn publish(&mut self, _minutes: f64) {}
}

/// Remembers the last value it forwarded so a frame can report it.
pub(crate) struct TrackingBinding<'a, B: DurationBinding + ?Sized> {
    inner: &'a mut B,
    pub(crate) last: Option<f64>,
}

impl<'a, B: DurationBinding + ?Sized> TrackingBinding<'a, B> {
    pub(crate) fn new(inner: &'a mut B) -> Self {
        Self { inner, last: None }
    }
}

impl<B: DurationBinding + ?Sized> DurationBinding for TrackingBinding<'_, B> {
    fn publish(&mut self, minutes: f64) {
        self.last = Some(minutes);
        self.inner.publish(minutes);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_values_take_published_minutes() {
        let mut minutes = 0.0_f64;
        minutes.publish(90.0);
        assert_eq!(minutes, 90.0);

        let mut whole = 0_u32;
        whole.publish(45.0);
        assert_eq!(whole, 45);
    }

    #[test]
    fn callback_binding_forwards_values() {
        let mut seen = Vec::new();
        {
            let mut binding = CallbackBinding(|minutes: f64| seen.push(minutes));
            binding.publish(5.0);
            binding.publish(15.0);
        }
        assert_eq!(seen, vec![5.0, 15.0]);
    }

    #[test]
    fn tracking_binding_remembers_last_value() {
        let mut minutes = 0.0_f64;
        let mut tracking = TrackingBinding::new(&mut minutes);
        assert_eq!(tracking.last, None);
        tracking.publish(30.0);
        assert_eq!(tracking.last, Some(30.0));
        assert_eq!(minutes, 30.0);
    }
}
