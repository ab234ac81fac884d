//! Escalating alert player use case
//!
//! Plays the alert sound starting quiet and ramps the volume up to full,
//! while vibration pulses begin after a delay and arrive faster each time.
//! Dismissing fades the sound out and cancels any pending pulse.

use std::cell::RefCell;
use std::rc::{Rc, Weak};
use std::time::Duration;

use tracing::{debug, info, warn};

use crate::domain::alert::{RampConfig, VibrationPhase, Volume, VolumePhase};

use super::ports::{AlertAudio, AlertAudioError, CancelHandle, Haptics, Scheduler};

/// Volume ramp state. Timed variants own the handle of their timer.
#[derive(Debug)]
enum VolumeRamp {
    Idle,
    RampingUp(CancelHandle),
    Full,
    RampingDown(CancelHandle),
    Stopped,
}

impl VolumeRamp {
    fn phase(&self) -> VolumePhase {
        match self {
            Self::Idle => VolumePhase::Idle,
            Self::RampingUp(_) => VolumePhase::RampingUp,
            Self::Full => VolumePhase::Full,
            Self::RampingDown(_) => VolumePhase::RampingDown,
            Self::Stopped => VolumePhase::Stopped,
        }
    }

    fn cancel(&self) {
        match self {
            Self::RampingUp(timer) | Self::RampingDown(timer) => timer.cancel(),
            Self::Idle | Self::Full | Self::Stopped => {}
        }
    }
}

/// Vibration escalation state. `wait` is the delay the armed timer was
/// given, i.e. the current wait between pulses.
#[derive(Debug)]
enum Vibration {
    Inactive,
    Waiting { wait: Duration, timer: CancelHandle },
}

impl Vibration {
    fn cancel(&self) {
        if let Self::Waiting { timer, .. } = self {
            timer.cancel();
        }
    }
}

struct PlayerState<A, H> {
    config: RampConfig,
    audio: A,
    haptics: H,
    volume: Volume,
    ramp: VolumeRamp,
    vibration: Vibration,
    pulses: u64,
}

impl<A: AlertAudio, H: Haptics> PlayerState<A, H> {
    fn apply_volume(&self) {
        report_audio(self.audio.set_volume(self.volume), "set volume");
    }

    /// Volume-up timer tick
    fn increase_volume_one_notch(&mut self) {
        self.volume = self.volume.raised_by(self.config.ramp_up_step);

        if self.volume.is_full() {
            info!("Volume at 100%");
            self.ramp.cancel();
            self.ramp = VolumeRamp::Full;
            self.volume = Volume::FULL;
        }
        self.apply_volume();
    }

    /// Volume-down timer tick
    fn decrease_volume_one_notch_to_stop(&mut self) {
        self.volume = self.volume.lowered_by(self.config.ramp_down_step);

        if self.volume.is_silent() {
            info!("Volume at 0%");
            self.ramp.cancel();
            self.ramp = VolumeRamp::Stopped;
            self.volume = Volume::SILENT;
            self.apply_volume();
            report_audio(self.audio.stop(), "stop playback");
            return;
        }
        self.apply_volume();
    }

    fn cancel_vibration(&mut self) {
        self.vibration.cancel();
        self.vibration = Vibration::Inactive;
    }
}

type SharedState<A, H> = Rc<RefCell<PlayerState<A, H>>>;
type WeakState<A, H> = Weak<RefCell<PlayerState<A, H>>>;

/// Escalating alert player.
///
/// Owns the audio and haptics adapters and arms its timers on the given
/// scheduler. All calls, including timer callbacks, happen on one thread.
pub struct AlertPlayer<A, H, S>
where
    A: AlertAudio + 'static,
    H: Haptics + 'static,
    S: Scheduler + 'static,
{
    state: SharedState<A, H>,
    scheduler: Rc<S>,
}

impl<A, H, S> AlertPlayer<A, H, S>
where
    A: AlertAudio + 'static,
    H: Haptics + 'static,
    S: Scheduler + 'static,
{
    /// Create a new alert player. Nothing sounds until `start`.
    pub fn new(audio: A, haptics: H, scheduler: Rc<S>, config: RampConfig) -> Self {
        if audio.is_degraded() {
            warn!("Alert player running without audio; vibration only");
        }

        Self {
            state: Rc::new(RefCell::new(PlayerState {
                config,
                audio,
                haptics,
                volume: Volume::SILENT,
                ramp: VolumeRamp::Idle,
                vibration: Vibration::Inactive,
                pulses: 0,
            })),
            scheduler,
        }
    }

    /// Start the alert from the top: rewind, reset the volume, loop the
    /// sound, and restart both escalations. Calling this while already
    /// sounding resets and restarts everything.
    pub fn start(&self) {
        {
            let mut state = self.state.borrow_mut();
            state.volume = state.config.volume_initial;
            state.apply_volume();
            report_audio(state.audio.rewind(), "rewind");
            report_audio(state.audio.play_looping(state.config.loop_count), "start playback");
            debug!(volume = %state.volume, loops = state.config.loop_count, "Alert started");
        }
        self.ramp_up_volume();
        self.activate_vibration_rampup();
    }

    /// Dismiss the alert: cancel pending vibration and fade the sound out.
    /// Playback halts once the volume reaches zero. Safe to call repeatedly.
    pub fn stop(&self) {
        self.ramp_down_volume_to_stop();
        self.state.borrow_mut().cancel_vibration();
        debug!("Alert dismissed");
    }

    /// Current playback volume
    pub fn volume(&self) -> Volume {
        self.state.borrow().volume
    }

    /// Current volume sub-system phase
    pub fn volume_phase(&self) -> VolumePhase {
        self.state.borrow().ramp.phase()
    }

    /// Current vibration sub-system phase
    pub fn vibration_phase(&self) -> VibrationPhase {
        match self.state.borrow().vibration {
            Vibration::Inactive => VibrationPhase::Inactive,
            Vibration::Waiting { .. } => VibrationPhase::Waiting,
        }
    }

    /// Wait before the next vibration pulse, if one is armed
    pub fn current_vibration_wait(&self) -> Option<Duration> {
        match self.state.borrow().vibration {
            Vibration::Inactive => None,
            Vibration::Waiting { wait, .. } => Some(wait),
        }
    }

    /// Number of vibration pulses triggered since construction
    pub fn pulses_triggered(&self) -> u64 {
        self.state.borrow().pulses
    }

    /// True when audio failed to initialize and playback is a no-op
    pub fn is_audio_degraded(&self) -> bool {
        self.state.borrow().audio.is_degraded()
    }

    /// Ramp parameters this player was built with
    pub fn config(&self) -> RampConfig {
        self.state.borrow().config
    }

    fn ramp_up_volume(&self) {
        let interval = {
            let state = self.state.borrow();
            state.ramp.cancel();
            state.config.ramp_up_interval()
        };

        let weak = Rc::downgrade(&self.state);
        let timer = self.scheduler.schedule_repeating(
            interval,
            Box::new(move || {
                if let Some(state) = weak.upgrade() {
                    state.borrow_mut().increase_volume_one_notch();
                }
            }),
        );
        debug!(?interval, "Volume ramp-up armed");

        self.state.borrow_mut().ramp = VolumeRamp::RampingUp(timer);
    }

    fn ramp_down_volume_to_stop(&self) {
        let interval = {
            let state = self.state.borrow();
            state.ramp.cancel();
            state.config.ramp_down_interval()
        };

        let weak = Rc::downgrade(&self.state);
        let timer = self.scheduler.schedule_repeating(
            interval,
            Box::new(move || {
                if let Some(state) = weak.upgrade() {
                    state.borrow_mut().decrease_volume_one_notch_to_stop();
                }
            }),
        );
        debug!(?interval, "Volume ramp-down armed");

        self.state.borrow_mut().ramp = VolumeRamp::RampingDown(timer);
    }

    /// Vibration starts late and slow, then speeds up until the floor
    fn activate_vibration_rampup(&self) {
        let mut state = self.state.borrow_mut();
        state.cancel_vibration();

        let wait = state.config.first_vibration_at;
        let timer = arm_vibration(&Rc::downgrade(&self.state), &self.scheduler, wait);
        state.vibration = Vibration::Waiting { wait, timer };
    }
}

impl<A, H, S> Drop for AlertPlayer<A, H, S>
where
    A: AlertAudio + 'static,
    H: Haptics + 'static,
    S: Scheduler + 'static,
{
    fn drop(&mut self) {
        if let Ok(state) = self.state.try_borrow() {
            state.ramp.cancel();
            state.vibration.cancel();
        }
    }
}

fn arm_vibration<A, H, S>(state: &WeakState<A, H>, scheduler: &Rc<S>, wait: Duration) -> CancelHandle
where
    A: AlertAudio + 'static,
    H: Haptics + 'static,
    S: Scheduler + 'static,
{
    let weak_state = state.clone();
    let weak_scheduler = Rc::downgrade(scheduler);
    debug!(?wait, "Vibration armed");

    scheduler.schedule_once(
        wait,
        Box::new(move || {
            if let Some(scheduler) = weak_scheduler.upgrade() {
                trigger_vibration(&weak_state, &scheduler);
            }
        }),
    )
}

/// Vibration timer callback: pulse, then re-arm with a shorter wait
fn trigger_vibration<A, H, S>(state: &WeakState<A, H>, scheduler: &Rc<S>)
where
    A: AlertAudio + 'static,
    H: Haptics + 'static,
    S: Scheduler + 'static,
{
    let Some(shared) = state.upgrade() else {
        return;
    };
    let mut current = shared.borrow_mut();
    let Vibration::Waiting { wait, .. } = current.vibration else {
        return;
    };

    current.pulses += 1;
    info!(pulse = current.pulses, "Vibration pulse");
    if let Err(e) = current.haptics.pulse() {
        warn!(error = %e, "Vibration pulse failed");
    }

    let next = current.config.next_vibration_wait(wait);
    let timer = arm_vibration(state, scheduler, next);
    current.vibration = Vibration::Waiting { wait: next, timer };
}

fn report_audio(result: Result<(), AlertAudioError>, action: &str) {
    if let Err(e) = result {
        warn!(error = %e, "Alert audio failed to {}", action);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::ports::HapticsError;
    use crate::infrastructure::scheduler::ManualScheduler;
    use std::cell::Cell;

    #[derive(Debug, Clone, PartialEq)]
    enum AudioCall {
        Rewind,
        SetVolume(f32),
        PlayLooping(u32),
        Stop,
    }

    #[derive(Default)]
    struct MockAudio {
        calls: Rc<RefCell<Vec<AudioCall>>>,
        degraded: bool,
    }

    impl AlertAudio for MockAudio {
        fn rewind(&self) -> Result<(), AlertAudioError> {
            self.calls.borrow_mut().push(AudioCall::Rewind);
            Ok(())
        }

        fn set_volume(&self, volume: Volume) -> Result<(), AlertAudioError> {
            self.calls
                .borrow_mut()
                .push(AudioCall::SetVolume(volume.level()));
            Ok(())
        }

        fn play_looping(&self, loops: u32) -> Result<(), AlertAudioError> {
            self.calls.borrow_mut().push(AudioCall::PlayLooping(loops));
            Ok(())
        }

        fn stop(&self) -> Result<(), AlertAudioError> {
            self.calls.borrow_mut().push(AudioCall::Stop);
            Ok(())
        }

        fn is_degraded(&self) -> bool {
            self.degraded
        }
    }

    struct FailingAudio;

    impl AlertAudio for FailingAudio {
        fn rewind(&self) -> Result<(), AlertAudioError> {
            Err(AlertAudioError::PlaybackFailed("unplugged".to_string()))
        }

        fn set_volume(&self, _volume: Volume) -> Result<(), AlertAudioError> {
            Err(AlertAudioError::PlaybackFailed("unplugged".to_string()))
        }

        fn play_looping(&self, _loops: u32) -> Result<(), AlertAudioError> {
            Err(AlertAudioError::PlaybackFailed("unplugged".to_string()))
        }

        fn stop(&self) -> Result<(), AlertAudioError> {
            Err(AlertAudioError::PlaybackFailed("unplugged".to_string()))
        }
    }

    #[derive(Default)]
    struct MockHaptics {
        pulses: Rc<Cell<u32>>,
        fail: bool,
    }

    impl Haptics for MockHaptics {
        fn pulse(&self) -> Result<(), HapticsError> {
            self.pulses.set(self.pulses.get() + 1);
            if self.fail {
                return Err(HapticsError::PulseFailed("no motor".to_string()));
            }
            Ok(())
        }
    }

    struct Harness {
        player: AlertPlayer<MockAudio, MockHaptics, ManualScheduler>,
        scheduler: Rc<ManualScheduler>,
        calls: Rc<RefCell<Vec<AudioCall>>>,
        pulses: Rc<Cell<u32>>,
    }

    fn harness() -> Harness {
        let scheduler = Rc::new(ManualScheduler::new());
        let audio = MockAudio::default();
        let haptics = MockHaptics::default();
        let calls = Rc::clone(&audio.calls);
        let pulses = Rc::clone(&haptics.pulses);
        let player = AlertPlayer::new(
            audio,
            haptics,
            Rc::clone(&scheduler),
            RampConfig::default(),
        );
        Harness {
            player,
            scheduler,
            calls,
            pulses,
        }
    }

    fn secs(s: f64) -> Duration {
        Duration::from_secs_f64(s)
    }

    fn assert_wait(actual: Option<Duration>, expected_secs: f64) {
        let actual = actual.expect("vibration should be armed");
        assert!(
            (actual.as_secs_f64() - expected_secs).abs() < 0.01,
            "expected wait ~{}s, got {:?}",
            expected_secs,
            actual
        );
    }

    #[test]
    fn new_player_is_idle() {
        let h = harness();
        assert_eq!(h.player.volume_phase(), VolumePhase::Idle);
        assert_eq!(h.player.vibration_phase(), VibrationPhase::Inactive);
        assert_eq!(h.player.volume(), Volume::SILENT);
        assert!(h.player.current_vibration_wait().is_none());
        assert!(h.calls.borrow().is_empty());
        assert_eq!(h.scheduler.pending(), 0);
    }

    #[test]
    fn start_sets_initial_volume_and_loops() {
        let h = harness();
        h.player.start();

        assert_eq!(h.player.volume().level(), 0.20);
        assert_eq!(h.player.volume_phase(), VolumePhase::RampingUp);
        assert_eq!(h.player.vibration_phase(), VibrationPhase::Waiting);
        assert_eq!(
            *h.calls.borrow(),
            vec![
                AudioCall::SetVolume(0.20),
                AudioCall::Rewind,
                AudioCall::PlayLooping(100),
            ]
        );
        assert_eq!(h.scheduler.pending(), 2);
    }

    #[test]
    fn volume_rises_one_step_per_tick() {
        let h = harness();
        h.player.start();

        h.scheduler.advance(secs(0.61));
        assert_eq!(h.player.volume().level(), 0.21);

        h.scheduler.advance(secs(0.6));
        assert_eq!(h.player.volume().level(), 0.22);
    }

    #[test]
    fn eighty_ticks_reach_full_and_stop_the_ramp() {
        let h = harness();
        h.player.start();

        h.scheduler.advance(secs(48.5));
        assert_eq!(h.player.volume(), Volume::FULL);
        assert_eq!(h.player.volume_phase(), VolumePhase::Full);

        // Only the vibration timer remains
        assert_eq!(h.scheduler.pending(), 1);

        let volume_calls = h
            .calls
            .borrow()
            .iter()
            .filter(|c| matches!(c, AudioCall::SetVolume(_)))
            .count();
        h.scheduler.advance(secs(5.0));
        let later_calls = h
            .calls
            .borrow()
            .iter()
            .filter(|c| matches!(c, AudioCall::SetVolume(_)))
            .count();
        assert_eq!(volume_calls, later_calls);
    }

    #[test]
    fn volume_stays_in_bounds_on_every_tick() {
        let h = harness();
        h.player.start();

        for _ in 0..200 {
            h.scheduler.advance(secs(0.3));
            let level = h.player.volume().level();
            assert!((0.0..=1.0).contains(&level), "volume out of range: {}", level);
        }

        h.player.stop();
        for _ in 0..40 {
            h.scheduler.advance(secs(0.1));
            let level = h.player.volume().level();
            assert!((0.0..=1.0).contains(&level), "volume out of range: {}", level);
        }

        for call in h.calls.borrow().iter() {
            if let AudioCall::SetVolume(level) = call {
                assert!((0.0..=1.0).contains(level));
            }
        }
    }

    #[test]
    fn stop_ramps_down_from_full_then_halts() {
        let h = harness();
        h.player.start();
        h.scheduler.advance(secs(50.0));
        assert_eq!(h.player.volume(), Volume::FULL);
        h.calls.borrow_mut().clear();

        h.player.stop();
        assert_eq!(h.player.volume_phase(), VolumePhase::RampingDown);

        h.scheduler.advance(secs(0.16));
        assert_eq!(h.player.volume().level(), 0.95);

        // 20 steps of 0.15s
        h.scheduler.advance(secs(2.9));
        assert_eq!(h.player.volume(), Volume::SILENT);
        assert_eq!(h.player.volume_phase(), VolumePhase::Stopped);
        assert_eq!(h.calls.borrow().last(), Some(&AudioCall::Stop));

        let stops = h
            .calls
            .borrow()
            .iter()
            .filter(|c| **c == AudioCall::Stop)
            .count();
        assert_eq!(stops, 1);
        assert_eq!(h.scheduler.pending(), 0);
    }

    #[test]
    fn stop_mid_ramp_fades_from_current_volume() {
        let h = harness();
        h.player.start();
        h.scheduler.advance(secs(6.1)); // 10 ticks: 0.30
        assert_eq!(h.player.volume().level(), 0.30);

        h.player.stop();
        h.scheduler.advance(secs(0.16));
        assert_eq!(h.player.volume().level(), 0.25);

        // Five more steps: 0.20, 0.15, 0.10, 0.05, 0.0
        h.scheduler.advance(secs(0.6));
        assert_eq!(h.player.volume().level(), 0.05);
        assert_eq!(h.player.volume_phase(), VolumePhase::RampingDown);

        h.scheduler.advance(secs(0.2));
        assert_eq!(h.player.volume(), Volume::SILENT);
        assert_eq!(h.player.volume_phase(), VolumePhase::Stopped);
    }

    #[test]
    fn first_pulse_at_sixty_seconds() {
        let h = harness();
        h.player.start();
        assert_wait(h.player.current_vibration_wait(), 60.0);

        h.scheduler.advance(secs(59.9));
        assert_eq!(h.pulses.get(), 0);

        h.scheduler.advance(secs(0.2));
        assert_eq!(h.pulses.get(), 1);
        assert_wait(h.player.current_vibration_wait(), 48.0);
    }

    #[test]
    fn second_pulse_at_one_hundred_eight_seconds() {
        let h = harness();
        h.player.start();

        h.scheduler.advance(secs(107.9));
        assert_eq!(h.pulses.get(), 1);

        h.scheduler.advance(secs(0.2));
        assert_eq!(h.pulses.get(), 2);
        assert_eq!(h.player.pulses_triggered(), 2);
    }

    #[test]
    fn vibration_waits_reach_and_hold_floor() {
        let h = harness();
        h.player.start();

        let expected = [
            48.0, 38.4, 30.72, 24.576, 19.661, 15.729, 12.583, 10.066, 8.053, 6.442, 5.154,
            5.0, 5.0, 5.0,
        ];

        let mut elapsed = 60.0;
        h.scheduler.advance(secs(elapsed + 0.001));
        for (i, wait) in expected.iter().enumerate() {
            assert_eq!(h.pulses.get() as usize, i + 1);
            assert_wait(h.player.current_vibration_wait(), *wait);
            elapsed += wait;
            h.scheduler.advance_to(secs(elapsed + 0.02));
        }
    }

    #[test]
    fn stop_before_first_pulse_cancels_vibration() {
        let h = harness();
        h.player.start();
        h.scheduler.advance(secs(30.0));

        h.player.stop();
        assert_eq!(h.player.vibration_phase(), VibrationPhase::Inactive);

        h.scheduler.advance(secs(600.0));
        assert_eq!(h.pulses.get(), 0);
        assert_eq!(h.player.pulses_triggered(), 0);
    }

    #[test]
    fn stop_after_pulses_halts_escalation() {
        let h = harness();
        h.player.start();
        h.scheduler.advance(secs(110.0));
        assert_eq!(h.pulses.get(), 2);

        h.player.stop();
        h.scheduler.advance(secs(600.0));
        assert_eq!(h.pulses.get(), 2);
        assert!(h.player.current_vibration_wait().is_none());
    }

    #[test]
    fn restart_after_full_stop_resets_everything() {
        let h = harness();
        h.player.start();
        h.scheduler.advance(secs(120.0));
        h.player.stop();
        h.scheduler.advance(secs(5.0));
        assert_eq!(h.player.volume_phase(), VolumePhase::Stopped);

        h.player.start();
        assert_eq!(h.player.volume().level(), 0.20);
        assert_eq!(h.player.volume_phase(), VolumePhase::RampingUp);
        assert_wait(h.player.current_vibration_wait(), 60.0);

        let pulses_before = h.pulses.get();
        h.scheduler.advance(secs(59.0));
        assert_eq!(h.pulses.get(), pulses_before);
        h.scheduler.advance(secs(1.1));
        assert_eq!(h.pulses.get(), pulses_before + 1);
    }

    #[test]
    fn start_while_sounding_restarts_from_initial_volume() {
        let h = harness();
        h.player.start();
        h.scheduler.advance(secs(30.0));
        assert!(h.player.volume().level() > 0.20);

        h.player.start();
        assert_eq!(h.player.volume().level(), 0.20);
        assert_eq!(h.scheduler.pending(), 2);

        // Old vibration timer (due at 60s) is gone; new one is due at 90s
        h.scheduler.advance(secs(31.0));
        assert_eq!(h.pulses.get(), 0);
        h.scheduler.advance(secs(29.1));
        assert_eq!(h.pulses.get(), 1);
    }

    #[test]
    fn stop_twice_keeps_a_single_ramp_down() {
        let h = harness();
        h.player.start();
        h.scheduler.advance(secs(50.0));

        h.player.stop();
        h.player.stop();
        assert_eq!(h.scheduler.pending(), 1);

        // One timer means one step per 0.15s
        h.scheduler.advance(secs(0.16));
        assert_eq!(h.player.volume().level(), 0.95);
    }

    #[test]
    fn stop_when_idle_is_harmless() {
        let h = harness();
        h.player.stop();
        h.scheduler.advance(secs(1.0));

        assert_eq!(h.player.volume_phase(), VolumePhase::Stopped);
        assert_eq!(h.player.volume(), Volume::SILENT);
        assert_eq!(h.scheduler.pending(), 0);
    }

    #[test]
    fn degraded_audio_still_escalates() {
        let scheduler = Rc::new(ManualScheduler::new());
        let haptics = MockHaptics::default();
        let pulses = Rc::clone(&haptics.pulses);
        let player = AlertPlayer::new(
            FailingAudio,
            haptics,
            Rc::clone(&scheduler),
            RampConfig::default(),
        );

        player.start();
        scheduler.advance(secs(61.0));
        assert_eq!(player.volume(), Volume::FULL);
        assert_eq!(pulses.get(), 1);

        player.stop();
        scheduler.advance(secs(4.0));
        assert_eq!(player.volume_phase(), VolumePhase::Stopped);
    }

    #[test]
    fn reports_degraded_audio() {
        let scheduler = Rc::new(ManualScheduler::new());
        let audio = MockAudio {
            degraded: true,
            ..Default::default()
        };
        let player = AlertPlayer::new(
            audio,
            MockHaptics::default(),
            scheduler,
            RampConfig::default(),
        );
        assert!(player.is_audio_degraded());
    }

    #[test]
    fn haptic_failure_keeps_escalating() {
        let scheduler = Rc::new(ManualScheduler::new());
        let haptics = MockHaptics {
            fail: true,
            ..Default::default()
        };
        let pulses = Rc::clone(&haptics.pulses);
        let player = AlertPlayer::new(
            MockAudio::default(),
            haptics,
            Rc::clone(&scheduler),
            RampConfig::default(),
        );

        player.start();
        scheduler.advance(secs(108.1));
        assert_eq!(pulses.get(), 2);
        assert_wait(player.current_vibration_wait(), 38.4);
    }

    #[test]
    fn dropping_player_cancels_timers() {
        let h = harness();
        h.player.start();
        let Harness {
            player,
            scheduler,
            pulses,
            ..
        } = h;

        drop(player);
        assert_eq!(scheduler.pending(), 0);

        scheduler.advance(secs(120.0));
        assert_eq!(pulses.get(), 0);
    }

    #[test]
    fn custom_config_changes_cadence() {
        let scheduler = Rc::new(ManualScheduler::new());
        let haptics = MockHaptics::default();
        let pulses = Rc::clone(&haptics.pulses);
        let config = RampConfig {
            first_vibration_at: Duration::from_secs(10),
            vibration_floor: Duration::from_secs(8),
            loop_count: 3,
            ..RampConfig::default()
        };
        let audio = MockAudio::default();
        let calls = Rc::clone(&audio.calls);
        let player = AlertPlayer::new(audio, haptics, Rc::clone(&scheduler), config);

        player.start();
        assert!(calls.borrow().contains(&AudioCall::PlayLooping(3)));

        scheduler.advance(secs(10.1));
        assert_eq!(pulses.get(), 1);
        assert_wait(player.current_vibration_wait(), 8.0);
    }
}
