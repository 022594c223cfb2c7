//! Decides *when* the composer runs. Edits arm a deadline; the deadline is
//! re-armed from zero by every further edit, so only the most recent one can
//! fire. The scheduler is polled with the frame clock (same pattern as a
//! typing-autosave cooldown) rather than owning an OS timer.

/// Quiet period with no edits before an automatic composition fires.
pub const QUIET_PERIOD_SECS: f64 = 0.5;

#[derive(Debug)]
pub struct PreviewScheduler {
    quiet_period: f64,
    auto_preview: bool,
    /// Wall-clock time (seconds) of the newest edit. `Some` means a
    /// composition is armed and waiting for the quiet period to elapse.
    armed_at: Option<f64>,
    /// Set by the explicit "refresh preview" action; consumed on next poll.
    manual_pending: bool,
}

impl Default for PreviewScheduler {
    fn default() -> Self {
        Self {
            quiet_period: QUIET_PERIOD_SECS,
            auto_preview: true,
            armed_at: None,
            manual_pending: false,
        }
    }
}

impl PreviewScheduler {
    #[cfg(test)]
    fn with_quiet_period(secs: f64) -> Self {
        Self {
            quiet_period: secs,
            ..Self::default()
        }
    }

    pub fn auto_preview(&self) -> bool {
        self.auto_preview
    }

    /// Toggle automatic scheduling. Switching it off cancels any pending
    /// composition so nothing fires after the user opted out.
    pub fn set_auto_preview(&mut self, enabled: bool) {
        self.auto_preview = enabled;
        if !enabled {
            self.armed_at = None;
        }
    }

    /// Record that a fragment changed at time `now`. Re-arms the deadline,
    /// cancelling whatever was previously armed. No-op in manual mode.
    pub fn note_change(&mut self, now: f64) {
        if self.auto_preview {
            self.armed_at = Some(now);
        }
    }

    /// Explicit "refresh preview" action. Fires on the next poll regardless
    /// of the auto-preview flag, using whatever the fragments hold then.
    pub fn request_refresh(&mut self) {
        self.manual_pending = true;
        self.armed_at = None;
    }

    /// True while a composition is scheduled but has not fired yet. The UI
    /// uses this to keep repainting so the quiet period can elapse without
    /// further input events.
    pub fn is_pending(&self) -> bool {
        self.manual_pending || self.armed_at.is_some()
    }

    /// Poll the scheduler. Returns true exactly once per due composition;
    /// the caller then reads the *current* fragment values and composes.
    pub fn poll(&mut self, now: f64) -> bool {
        if self.manual_pending {
            self.manual_pending = false;
            return true;
        }
        match self.armed_at {
            Some(armed) if self.auto_preview && now - armed >= self.quiet_period => {
                self.armed_at = None;
                true
            }
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rapid_edits_coalesce_into_one_composition() {
        let mut s = PreviewScheduler::with_quiet_period(0.5);
        s.note_change(0.0);
        s.note_change(0.1);
        s.note_change(0.2);
        // Quiet period counts from the last edit, not the first.
        assert!(!s.poll(0.55));
        assert!(s.poll(0.7));
        // Fired once; nothing left pending.
        assert!(!s.poll(5.0));
    }

    #[test]
    fn edit_after_quiet_period_triggers_its_own_composition() {
        let mut s = PreviewScheduler::with_quiet_period(0.5);
        s.note_change(0.0);
        assert!(s.poll(0.6));
        s.note_change(1.0);
        assert!(!s.poll(1.3));
        assert!(s.poll(1.6));
    }

    #[test]
    fn manual_mode_suppresses_automatic_scheduling() {
        let mut s = PreviewScheduler::with_quiet_period(0.5);
        s.set_auto_preview(false);
        s.note_change(0.0);
        s.note_change(0.2);
        assert!(!s.poll(10.0));
        s.request_refresh();
        assert!(s.poll(10.1));
        assert!(!s.poll(10.2));
    }

    #[test]
    fn disabling_auto_preview_cancels_pending_composition() {
        let mut s = PreviewScheduler::with_quiet_period(0.5);
        s.note_change(0.0);
        assert!(s.is_pending());
        s.set_auto_preview(false);
        assert!(!s.is_pending());
        assert!(!s.poll(10.0));
    }

    #[test]
    fn reenabling_auto_preview_does_not_resurrect_cancelled_edit() {
        let mut s = PreviewScheduler::with_quiet_period(0.5);
        s.note_change(0.0);
        s.set_auto_preview(false);
        s.set_auto_preview(true);
        assert!(!s.poll(10.0));
    }

    #[test]
    fn manual_refresh_works_while_auto_is_on() {
        let mut s = PreviewScheduler::with_quiet_period(0.5);
        s.note_change(0.0);
        s.request_refresh();
        // The manual trigger supersedes the armed deadline entirely.
        assert!(s.poll(0.1));
        assert!(!s.poll(1.0));
    }
}
