use crate::DurationBinding;
use time_estimate::{
    clamp_hour, clamp_minute, derive_preset, highlight_fraction, HourMinute, TimePreset,
};

#[derive(Clone, Debug, PartialEq)]
pub struct TimeSelectorState {
    selection: HourMinute,
    active_preset: Option<TimePreset>,
    publish_on_preset: bool,
}

impl Default for TimeSelectorState {
    fn default() -> Self {
        Self {
            selection: HourMinute::ZERO,
            active_preset: None,
            publish_on_preset: true,
        }
    }
}

impl TimeSelectorState {
    /// Seeds the wheels from the bound duration and marks the matching preset.
    pub fn new(bound_minutes: f64) -> Self {
        let mut state = Self::default();
        state.sync_from_binding(bound_minutes);
        state
    }

    /// Controls whether tapping a preset publishes the new total right away.
    pub fn with_publish_on_preset(mut self, publish_on_preset: bool) -> Self {
        self.publish_on_preset = publish_on_preset;
        self
    }

    pub fn hour(&self) -> u32 {
        self.selection.hour
    }

    pub fn minute(&self) -> u32 {
        self.selection.minute
    }

    pub fn selection(&self) -> HourMinute {
        self.selection
    }

    pub fn total_minutes(&self) -> u32 {
        self.selection.total_minutes()
    }

    pub fn active_preset(&self) -> Option<TimePreset> {
        self.active_preset
    }

    pub fn publish_on_preset(&self) -> bool {
        self.publish_on_preset
    }

    pub fn highlight_fraction(&self) -> f32 {
        highlight_fraction(self.active_preset)
    }

    /// Re-reads the bound duration, e.g. after the host replaced it.
    pub fn sync_from_binding(&mut self, bound_minutes: f64) {
        self.selection = HourMinute::from_minutes(bound_minutes);
        self.update_detected_preset();
    }

    /// Hour wheel moved. Returns `false` when the value did not change.
    pub fn set_hour<B>(&mut self, hour: u32, binding: &mut B) -> bool
    where
        B: DurationBinding + ?Sized,
    {
        let hour = clamp_hour(hour);
        if hour == self.selection.hour {
            return false;
        }
        self.selection.hour = hour;
        self.publish(binding);
        self.update_detected_preset();
        true
    }

    /// Minute wheel moved. Returns `false` when the value did not change.
    pub fn set_minute<B>(&mut self, minute: u32, binding: &mut B) -> bool
    where
        B: DurationBinding + ?Sized,
    {
        let minute = clamp_minute(minute);
        if minute == self.selection.minute {
            return false;
        }
        self.selection.minute = minute;
        self.publish(binding);
        self.update_detected_preset();
        true
    }

    /// A segment was tapped. `None` leaves the wheels where they are.
    pub fn select_preset<B>(&mut self, preset: Option<TimePreset>, binding: &mut B) -> bool
    where
        B: DurationBinding + ?Sized,
    {
        let Some(preset) = preset else {
            return false;
        };

        log::debug!("Preset {} selected", preset.label());
        let changed = self.selection != HourMinute::from_preset(preset)
            || self.active_preset != Some(preset);
        self.apply_preset(preset);
        if self.publish_on_preset {
            self.publish(binding);
        }
        changed
    }

    pub fn apply_preset(&mut self, preset: TimePreset) {
        self.selection = HourMinute::from_preset(preset);
        self.active_preset = Some(preset);
    }

    pub fn detect_preset(&self) -> Option<TimePreset> {
        derive_preset(self.selection.total_minutes())
    }

    pub fn update_detected_preset(&mut self) {
        self.active_preset = self.detect_preset();
    }

    fn publish<B>(&self, binding: &mut B)
    where
        B: DurationBinding + ?Sized,
    {
        let total = self.selection.total_minutes();
        log::debug!("Publishing estimated time of {total} minutes");
        binding.publish(f64::from(total));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{CallbackBinding, NoopBinding};
    use time_estimate::{MAX_HOUR, MAX_MINUTE, PRESETS};

    #[test]
    fn construction_seeds_wheels_and_preset() {
        let state = TimeSelectorState::new(125.0);
        assert_eq!((state.hour(), state.minute()), (2, 5));
        assert_eq!(state.active_preset(), None);

        let state = TimeSelectorState::new(180.0);
        assert_eq!((state.hour(), state.minute()), (3, 0));
        assert_eq!(state.active_preset(), Some(TimePreset::ThreeHours));
    }

    #[test]
    fn wheel_changes_publish_hour_and_minute_total() {
        let mut bound = 0.0_f64;
        let mut state = TimeSelectorState::new(bound);

        for hour in 0..=MAX_HOUR {
            state.set_hour(hour, &mut bound);
            for minute in 0..=MAX_MINUTE {
                state.set_minute(minute, &mut bound);
                assert_eq!(bound, f64::from(hour * 60 + minute));
                assert_eq!(state.total_minutes(), hour * 60 + minute);
                assert_eq!(state.active_preset(), derive_preset(hour * 60 + minute));
            }
        }
    }

    #[test]
    fn preset_is_exact_match_after_wheel_change() {
        let mut bound = 0.0_f64;
        let mut state = TimeSelectorState::new(0.0);

        state.set_hour(1, &mut bound);
        assert_eq!(bound, 60.0);
        assert_eq!(state.active_preset(), Some(TimePreset::OneHour));

        state.set_minute(1, &mut bound);
        assert_eq!(bound, 61.0);
        assert_eq!(state.active_preset(), None);
    }

    #[test]
    fn unchanged_wheel_value_does_not_publish() {
        let mut published = Vec::new();
        let mut state = TimeSelectorState::new(125.0);
        {
            let mut binding = CallbackBinding(|minutes: f64| published.push(minutes));
            assert!(!state.set_hour(2, &mut binding));
            assert!(!state.set_minute(5, &mut binding));
        }
        assert!(published.is_empty());
    }

    #[test]
    fn wheel_input_is_clamped() {
        let mut bound = 0.0_f64;
        let mut state = TimeSelectorState::default();
        state.set_hour(40, &mut bound);
        state.set_minute(99, &mut bound);
        assert_eq!((state.hour(), state.minute()), (MAX_HOUR, MAX_MINUTE));
        assert_eq!(bound, f64::from(MAX_HOUR * 60 + MAX_MINUTE));
    }

    #[test]
    fn selecting_one_hour_round_trips() {
        let mut bound = 125.0_f64;
        let mut state = TimeSelectorState::new(bound);

        assert!(state.select_preset(Some(TimePreset::OneHour), &mut bound));
        assert_eq!((state.hour(), state.minute()), (1, 0));
        assert_eq!(state.active_preset(), Some(TimePreset::OneHour));
        assert_eq!(state.detect_preset(), Some(TimePreset::OneHour));
        assert_eq!(bound, 60.0);
    }

    #[test]
    fn every_preset_moves_wheels_to_its_decomposition() {
        let mut bound = 0.0_f64;
        let mut state = TimeSelectorState::default();
        for preset in PRESETS {
            state.select_preset(Some(preset), &mut bound);
            assert_eq!((state.hour(), state.minute()), preset.hour_minute());
            assert_eq!(bound, f64::from(preset.minutes()));
        }
    }

    #[test]
    fn no_selection_leaves_wheels_untouched() {
        let mut bound = 125.0_f64;
        let mut state = TimeSelectorState::new(bound);
        let before = state.clone();

        assert!(!state.select_preset(None, &mut bound));
        assert_eq!(state, before);
        assert_eq!(bound, 125.0);
    }

    #[test]
    fn preset_tap_can_skip_publishing() {
        let mut bound = 125.0_f64;
        let mut state = TimeSelectorState::new(bound).with_publish_on_preset(false);

        state.select_preset(Some(TimePreset::HalfHour), &mut bound);
        assert_eq!((state.hour(), state.minute()), (0, 30));
        assert_eq!(bound, 125.0);

        state.set_minute(31, &mut bound);
        assert_eq!(bound, 31.0);
    }

    #[test]
    fn highlight_tracks_active_preset() {
        let mut state = TimeSelectorState::new(7.0);
        assert_eq!(state.highlight_fraction(), 0.0);

        state.select_preset(Some(TimePreset::ThreeHours), &mut NoopBinding);
        assert_eq!(state.highlight_fraction(), 1.0);
    }

    #[test]
    fn sync_from_binding_reseeds() {
        let mut state = TimeSelectorState::new(125.0);
        state.sync_from_binding(15.0);
        assert_eq!((state.hour(), state.minute()), (0, 15));
        assert_eq!(state.active_preset(), Some(TimePreset::QuarterHour));
    }
}
