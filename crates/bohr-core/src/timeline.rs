//! Animation scheduler for Bohr diagrams.
//!
//! [`schedule`] assigns every primitive a start delay so the diagram draws
//! progressively: nucleus, then each shell ring outward with its electrons
//! fading in partway through the ring's own draw, then the text labels.
//!
//! The output is a plain delay per [`PrimitiveId`]. How a delay is applied
//! (CSS `animation-delay`, a frame offset, a sleep between terminal draws)
//! is up to the renderer.
//!
//! # Formulas
//!
//! ```text
//! nucleus        = base
//! shell[i]       = base + i * S
//! electron[i][j] = shell[i] + electron_start_offset + j * electron_stagger
//! name-label     = base + shell_count * S
//! summary-label  = name-label + label_stagger
//! ```
//!
//! `S` is the effective shell stagger (see [`effective_shell_stagger`]): the
//! configured stagger, widened when needed so that a shell's electrons have
//! all started before the next ring starts drawing.

use std::time::Duration;

use indexmap::IndexMap;
use log::{debug, trace};
use serde::Deserialize;

use crate::primitive::PrimitiveId;

/// Named stagger constants of the schedule, in milliseconds.
///
/// # Examples
///
/// ```
/// # use std::time::Duration;
/// # use bohr_core::timeline::TimingOptions;
/// let options = TimingOptions::default();
/// assert_eq!(options.base_delay(), Duration::from_millis(100));
/// assert!(options.electron_start_offset() < options.shell_draw_duration());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct TimingOptions {
    base_delay_ms: u64,
    shell_draw_duration_ms: u64,
    shell_stagger_ms: u64,
    electron_start_offset_ms: u64,
    electron_stagger_ms: u64,
    label_stagger_ms: u64,
    fade_duration_ms: u64,
}

impl Default for TimingOptions {
    fn default() -> Self {
        Self {
            base_delay_ms: 100,
            shell_draw_duration_ms: 800,
            shell_stagger_ms: 250,
            // Electrons appear 200ms before their ring finishes drawing
            electron_start_offset_ms: 600,
            electron_stagger_ms: 40,
            label_stagger_ms: 150,
            fade_duration_ms: 500,
        }
    }
}

impl TimingOptions {
    /// Delay before the nucleus appears; every other delay builds on it.
    pub fn base_delay(&self) -> Duration {
        Duration::from_millis(self.base_delay_ms)
    }

    /// How long one ring takes to draw. Only renderers use this directly.
    pub fn shell_draw_duration(&self) -> Duration {
        Duration::from_millis(self.shell_draw_duration_ms)
    }

    /// Configured minimum gap between consecutive shells.
    pub fn shell_stagger(&self) -> Duration {
        Duration::from_millis(self.shell_stagger_ms)
    }

    /// Offset from a ring's start to its first electron.
    pub fn electron_start_offset(&self) -> Duration {
        Duration::from_millis(self.electron_start_offset_ms)
    }

    /// Gap between consecutive electrons of one shell.
    pub fn electron_stagger(&self) -> Duration {
        Duration::from_millis(self.electron_stagger_ms)
    }

    /// Gap between the name label and the summary label.
    pub fn label_stagger(&self) -> Duration {
        Duration::from_millis(self.label_stagger_ms)
    }

    /// Fade-in length of nucleus, electrons and labels. Only renderers use this.
    pub fn fade_duration(&self) -> Duration {
        Duration::from_millis(self.fade_duration_ms)
    }

    pub fn with_base_delay(mut self, delay: Duration) -> Self {
        self.base_delay_ms = millis(delay);
        self
    }

    pub fn with_shell_draw_duration(mut self, duration: Duration) -> Self {
        self.shell_draw_duration_ms = millis(duration);
        self
    }

    pub fn with_shell_stagger(mut self, stagger: Duration) -> Self {
        self.shell_stagger_ms = millis(stagger);
        self
    }

    pub fn with_electron_start_offset(mut self, offset: Duration) -> Self {
        self.electron_start_offset_ms = millis(offset);
        self
    }

    pub fn with_electron_stagger(mut self, stagger: Duration) -> Self {
        self.electron_stagger_ms = millis(stagger);
        self
    }

    pub fn with_label_stagger(mut self, stagger: Duration) -> Self {
        self.label_stagger_ms = millis(stagger);
        self
    }

    /// Checks the relations between the constants.
    ///
    /// # Errors
    ///
    /// Returns a message when the shell draw or fade duration is zero, or
    /// when electrons would start only after their ring has finished drawing.
    pub fn validate(&self) -> Result<(), String> {
        if self.shell_draw_duration_ms == 0 {
            return Err("`shell_draw_duration_ms` must be greater than zero".to_string());
        }
        if self.fade_duration_ms == 0 {
            return Err("`fade_duration_ms` must be greater than zero".to_string());
        }
        if self.electron_start_offset_ms >= self.shell_draw_duration_ms {
            return Err(format!(
                "`electron_start_offset_ms` ({}) must be less than `shell_draw_duration_ms` ({})",
                self.electron_start_offset_ms, self.shell_draw_duration_ms
            ));
        }
        Ok(())
    }
}

fn millis(duration: Duration) -> u64 {
    u64::try_from(duration.as_millis()).unwrap_or(u64::MAX)
}

/// Start delay of every primitive, in draw order.
///
/// Iteration order is the draw order: nucleus, then each shell followed by
/// its electrons, then the name and summary labels. Delays never decrease
/// along that order, and the label delays are the largest in the timeline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnimationTimeline {
    delays: IndexMap<PrimitiveId, Duration>,
    shell_stagger: Duration,
}

impl AnimationTimeline {
    /// Start delay of one primitive, if the timeline contains it.
    pub fn delay(&self, id: PrimitiveId) -> Option<Duration> {
        self.delays.get(&id).copied()
    }

    pub fn contains(&self, id: PrimitiveId) -> bool {
        self.delays.contains_key(&id)
    }

    /// Iterates `(primitive, delay)` pairs in draw order.
    pub fn iter(&self) -> impl Iterator<Item = (PrimitiveId, Duration)> + '_ {
        self.delays.iter().map(|(id, delay)| (*id, *delay))
    }

    pub fn len(&self) -> usize {
        self.delays.len()
    }

    pub fn is_empty(&self) -> bool {
        self.delays.is_empty()
    }

    /// The shell stagger actually used for this timeline.
    pub fn shell_stagger(&self) -> Duration {
        self.shell_stagger
    }

    /// The latest start delay, which belongs to the summary label.
    pub fn last_start(&self) -> Duration {
        self.delays.values().copied().max().unwrap_or_default()
    }
}

/// The shell stagger that keeps every shell's electrons ahead of the next ring.
///
/// The last electron of a shell with `n` electrons starts
/// `electron_start_offset + (n - 1) * electron_stagger` after its ring. The
/// effective stagger is the larger of that span (over all non-empty shells)
/// and the configured [`TimingOptions::shell_stagger`].
pub fn effective_shell_stagger(shell_electron_counts: &[u32], options: &TimingOptions) -> Duration {
    Duration::from_millis(effective_shell_stagger_ms(shell_electron_counts, options))
}

// Saturating millisecond arithmetic; extreme configured values clamp at u64::MAX.
fn effective_shell_stagger_ms(shell_electron_counts: &[u32], options: &TimingOptions) -> u64 {
    let longest_electron_run = shell_electron_counts
        .iter()
        .filter(|&&count| count > 0)
        .map(|&count| {
            options
                .electron_stagger_ms
                .saturating_mul(u64::from(count - 1))
                .saturating_add(options.electron_start_offset_ms)
        })
        .max()
        .unwrap_or_default();

    options.shell_stagger_ms.max(longest_electron_run)
}

fn offset_ms(start: u64, step: u64, steps: usize) -> u64 {
    let steps = u64::try_from(steps).unwrap_or(u64::MAX);
    start.saturating_add(step.saturating_mul(steps))
}

/// Computes the animation timeline for the given shell electron counts.
///
/// Pure and total; an empty slice yields a timeline holding only the
/// nucleus and the two labels.
///
/// # Examples
///
/// ```
/// # use std::time::Duration;
/// use bohr_core::{primitive::PrimitiveId, timeline::{schedule, TimingOptions}};
///
/// let timeline = schedule(&[1], &TimingOptions::default());
///
/// assert_eq!(timeline.delay(PrimitiveId::Nucleus), Some(Duration::from_millis(100)));
/// assert_eq!(timeline.delay(PrimitiveId::Shell(0)), Some(Duration::from_millis(100)));
/// assert_eq!(
///     timeline.delay(PrimitiveId::Electron { shell: 0, index: 0 }),
///     Some(Duration::from_millis(700))
/// );
/// ```
pub fn schedule(shell_electron_counts: &[u32], options: &TimingOptions) -> AnimationTimeline {
    let base = options.base_delay_ms;
    let stagger = effective_shell_stagger_ms(shell_electron_counts, options);

    debug!(
        shell_count = shell_electron_counts.len(),
        configured_stagger_ms = options.shell_stagger_ms,
        effective_stagger_ms = stagger;
        "Scheduling diagram animation"
    );

    let electron_total: usize = shell_electron_counts.iter().map(|&c| c as usize).sum();
    let mut delays =
        IndexMap::with_capacity(3 + shell_electron_counts.len() + electron_total);

    delays.insert(PrimitiveId::Nucleus, Duration::from_millis(base));

    for (shell, &count) in shell_electron_counts.iter().enumerate() {
        let shell_delay = offset_ms(base, stagger, shell);
        delays.insert(PrimitiveId::Shell(shell), Duration::from_millis(shell_delay));

        let first_electron = shell_delay.saturating_add(options.electron_start_offset_ms);
        for index in 0..count as usize {
            delays.insert(
                PrimitiveId::Electron { shell, index },
                Duration::from_millis(offset_ms(
                    first_electron,
                    options.electron_stagger_ms,
                    index,
                )),
            );
        }
    }

    let name_delay = offset_ms(base, stagger, shell_electron_counts.len());
    delays.insert(PrimitiveId::NameLabel, Duration::from_millis(name_delay));
    delays.insert(
        PrimitiveId::SummaryLabel,
        Duration::from_millis(name_delay.saturating_add(options.label_stagger_ms)),
    );

    let timeline = AnimationTimeline {
        delays,
        shell_stagger: Duration::from_millis(stagger),
    };

    trace!(timeline:?; "Animation timeline computed");

    timeline
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(millis: u64) -> Duration {
        Duration::from_millis(millis)
    }

    #[test]
    fn test_hydrogen_schedule() {
        let timeline = schedule(&[1], &TimingOptions::default());

        let delays: Vec<(String, u128)> = timeline
            .iter()
            .map(|(id, delay)| (id.to_string(), delay.as_millis()))
            .collect();
        assert_eq!(
            delays,
            vec![
                ("nucleus".to_string(), 100),
                ("shell[0]".to_string(), 100),
                ("electron[0][0]".to_string(), 700),
                ("name-label".to_string(), 700),
                ("summary-label".to_string(), 850),
            ]
        );
    }

    #[test]
    fn test_sodium_schedule() {
        let timeline = schedule(&[2, 8, 1], &TimingOptions::default());

        // 600 + 7 * 40 exceeds the configured 250ms stagger
        assert_eq!(timeline.shell_stagger(), ms(880));

        assert_eq!(timeline.delay(PrimitiveId::Shell(1)), Some(ms(980)));
        assert_eq!(timeline.delay(PrimitiveId::Shell(2)), Some(ms(1860)));
        assert_eq!(
            timeline.delay(PrimitiveId::Electron { shell: 1, index: 7 }),
            Some(ms(1860))
        );
        assert_eq!(timeline.delay(PrimitiveId::NameLabel), Some(ms(2740)));
        assert_eq!(timeline.delay(PrimitiveId::SummaryLabel), Some(ms(2890)));
        assert_eq!(timeline.len(), 1 + 3 + 11 + 2);
    }

    #[test]
    fn test_configured_stagger_used_when_wide_enough() {
        let options = TimingOptions::default()
            .with_electron_start_offset(ms(100))
            .with_electron_stagger(ms(10));
        let timeline = schedule(&[2, 8, 1], &options);

        assert_eq!(timeline.shell_stagger(), ms(250));
        for shell in 0..3 {
            assert_eq!(
                timeline.delay(PrimitiveId::Shell(shell)),
                Some(ms(100 + 250 * shell as u64))
            );
        }
        assert_eq!(
            timeline.delay(PrimitiveId::Electron { shell: 1, index: 3 }),
            Some(ms(350 + 100 + 30))
        );
        assert_eq!(timeline.delay(PrimitiveId::NameLabel), Some(ms(850)));
    }

    #[test]
    fn test_empty_shells() {
        let timeline = schedule(&[], &TimingOptions::default());

        assert_eq!(timeline.len(), 3);
        assert_eq!(timeline.shell_stagger(), ms(250));
        assert_eq!(timeline.delay(PrimitiveId::Nucleus), Some(ms(100)));
        assert_eq!(timeline.delay(PrimitiveId::NameLabel), Some(ms(100)));
        assert_eq!(timeline.delay(PrimitiveId::SummaryLabel), Some(ms(250)));
        assert_eq!(timeline.last_start(), ms(250));
    }

    #[test]
    fn test_zero_electron_shell_keeps_ring() {
        let timeline = schedule(&[2, 0], &TimingOptions::default());

        assert!(timeline.contains(PrimitiveId::Shell(1)));
        assert!(!timeline.contains(PrimitiveId::Electron { shell: 1, index: 0 }));
    }

    #[test]
    fn test_effective_shell_stagger() {
        let options = TimingOptions::default();
        assert_eq!(effective_shell_stagger(&[], &options), ms(250));
        assert_eq!(effective_shell_stagger(&[0, 0], &options), ms(250));
        assert_eq!(effective_shell_stagger(&[1], &options), ms(600));
        assert_eq!(effective_shell_stagger(&[2, 8, 18, 32], &options), ms(600 + 31 * 40));
    }

    #[test]
    fn test_timing_options_validate() {
        assert!(TimingOptions::default().validate().is_ok());

        let late_electrons = TimingOptions::default().with_electron_start_offset(ms(800));
        assert!(late_electrons.validate().is_err());

        let no_draw = TimingOptions::default().with_shell_draw_duration(Duration::ZERO);
        assert!(no_draw.validate().is_err());
    }

    #[test]
    fn test_extreme_staggers_saturate() {
        let options = TimingOptions::default()
            .with_electron_stagger(Duration::from_millis(u64::MAX / 2))
            .with_label_stagger(Duration::from_millis(u64::MAX));
        let timeline = schedule(&[2, 8, 18, 32], &options);

        let max = Duration::from_millis(u64::MAX);
        assert_eq!(timeline.shell_stagger(), max);
        assert_eq!(timeline.delay(PrimitiveId::Shell(0)), Some(ms(100)));
        assert_eq!(timeline.delay(PrimitiveId::Shell(1)), Some(max));
        assert_eq!(timeline.delay(PrimitiveId::SummaryLabel), Some(max));
        assert_eq!(timeline.len(), 3 + 4 + 60);

        let delays: Vec<Duration> = timeline.iter().map(|(_, delay)| delay).collect();
        assert!(delays.windows(2).all(|pair| pair[0] <= pair[1]));
    }
}
