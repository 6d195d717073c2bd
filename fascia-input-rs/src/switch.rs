//! Debounced switch handling with press-duration classification.

/// What a completed switch gesture turned out to be.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SwitchEvent {
    /// Released before the hold threshold.
    Click,
    /// Held past the threshold. Fires once while still pressed, so the
    /// user gets feedback without waiting for the release.
    Hold,
}

/// Debounce and hold timing for one switch.
#[derive(Debug, Clone, Copy)]
pub struct SwitchConfig {
    /// A level must be stable this long before it counts. Default: 5 ms.
    pub debounce_ms: u64,
    /// Press duration that turns a click into a hold. Default: 600 ms.
    pub hold_ms: u64,
}

impl Default for SwitchConfig {
    fn default() -> Self {
        Self {
            debounce_ms: 5,
            hold_ms: 600,
        }
    }
}

/// Debounced press tracker, one per physical switch.
///
/// Feed it the sampled (active-high) level every scan tick together with
/// the current monotonic time; it emits at most one [`SwitchEvent`] per
/// press-release gesture.
pub struct Switch {
    cfg: SwitchConfig,
    /// Debounced level.
    stable: bool,
    /// Most recent raw sample.
    raw: bool,
    /// When the raw level last changed.
    raw_since_ms: u64,
    /// When the debounced level went high.
    pressed_at_ms: u64,
    /// The current press already emitted [`SwitchEvent::Hold`].
    hold_fired: bool,
}

impl Switch {
    pub fn new(cfg: SwitchConfig) -> Self {
        Self {
            cfg,
            stable: false,
            raw: false,
            raw_since_ms: 0,
            pressed_at_ms: 0,
            hold_fired: false,
        }
    }

    /// Advance with a fresh sample. `pressed` is the active level after
    /// any polarity handling (the panel switches are active-low, so the
    /// caller passes `is_low()`).
    pub fn update(&mut self, pressed: bool, now_ms: u64) -> Option<SwitchEvent> {
        if pressed != self.raw {
            self.raw = pressed;
            self.raw_since_ms = now_ms;
        }

        // Debounce: adopt the raw level once it has held steady.
        if self.raw != self.stable
            && now_ms.saturating_sub(self.raw_since_ms) >= self.cfg.debounce_ms
        {
            self.stable = self.raw;
            if self.stable {
                self.pressed_at_ms = now_ms;
                self.hold_fired = false;
            } else if !self.hold_fired {
                return Some(SwitchEvent::Click);
            }
        }

        if self.stable
            && !self.hold_fired
            && now_ms.saturating_sub(self.pressed_at_ms) >= self.cfg.hold_ms
        {
            self.hold_fired = true;
            return Some(SwitchEvent::Hold);
        }

        None
    }
}

// ── Unit Tests ───────────────────────────────────────────────────────
