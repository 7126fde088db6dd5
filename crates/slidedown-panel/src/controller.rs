//! The transition controller: the state machine that drives a panel's
//! height from its current value to a target value.
//!
//! The cycle for one transition is:
//!
//! ```text
//! Idle/Settled --retarget--> Pinned --tick--> Transitioning --finished--> Settled
//!                              ^                   |
//!                              +----- retarget ----+   (interruption)
//! ```
//!
//! A retarget while pinned or in flight supersedes the current
//! transition: the currently rendered mid-flight height becomes the new
//! start, the old watcher is disarmed before anything else happens, and
//! the cycle re-enters `Pinned`. Native transitions cannot start from an
//! unconstrained height, so a settled-open panel is first pinned back to
//! a concrete pixel value.
//!
//! The one-tick `Pinned` phase is what makes interruption visually
//! continuous: the first synchronous read after any (re)target sees the
//! pinned pre-transition height, and the travel toward the target only
//! begins when the tick fires.

use crate::events::{EventQueue, SlideEvent};
use crate::host::SlideHost;
use crate::panel::Panel;
use crate::render;
use crate::types::{AppliedHeight, SlideDirection, SlidePhase, TimerId, WatcherId};

/// Push the panel's current rendered attributes to the host.
pub(crate) fn sync_attributes<H: SlideHost>(panel: &Panel, host: &mut H) {
    host.apply_attributes(panel.node, &render::attributes_for(panel));
}

/// The height a panel rests at once a transition toward `target_px` has
/// finished: pinned at zero when closed or empty, unconstrained when open.
fn resting(target_px: f64) -> AppliedHeight {
    if target_px == 0.0 {
        AppliedHeight::from(0.0)
    } else {
        AppliedHeight::Auto
    }
}

/// Settle the panel at the target height with no transition.
///
/// Used at mount when appear transitions are disabled, and by `retarget`
/// when there is no travel between start and target.
pub(crate) fn settle<H: SlideHost>(
    panel: &mut Panel,
    host: &mut H,
    target_px: f64,
    events: &mut EventQueue,
) {
    panel.target_px = target_px;
    panel.last_measured_px = target_px;
    panel.applied = resting(target_px);
    panel.phase = SlidePhase::Settled;
    sync_attributes(panel, host);
    events.push(SlideEvent::Settled {
        node: panel.node,
        resting: panel.applied,
    });
}

/// Drive the panel toward a new target height.
///
/// Supersedes any transition in flight: the old watcher and tick are
/// cleared first, then the start height is pinned and a fresh tick is
/// scheduled. When start and target coincide the panel settles
/// immediately and no transition class is ever applied.
pub(crate) fn retarget<H: SlideHost>(
    panel: &mut Panel,
    host: &mut H,
    target_px: f64,
    events: &mut EventQueue,
) {
    let interrupted = panel.is_transitioning();

    // The concrete height to start from: mid-flight value when
    // interrupting, the rendered height when pinned at auto, otherwise
    // the applied pixel value.
    let start_px = if interrupted {
        host.rendered_height(panel.node)
    } else {
        match panel.applied {
            AppliedHeight::Px { px } => px,
            AppliedHeight::Auto => host.rendered_height(panel.node),
        }
    };

    // Disarm before arming anything new; stale completions must never
    // reach a retargeted panel.
    if let Some(watcher) = panel.armed_watcher.take() {
        host.disarm_completion_watcher(watcher);
    }
    if let Some(timer) = panel.pending_timer.take() {
        host.cancel_tick(timer);
    }

    panel.target_px = target_px;

    if (start_px - target_px).abs() < f64::EPSILON {
        settle(panel, host, target_px, events);
        return;
    }

    panel.applied = AppliedHeight::from(start_px);
    panel.last_measured_px = start_px;
    panel.phase = SlidePhase::Pinned;
    sync_attributes(panel, host);
    panel.pending_timer = Some(host.schedule_tick());

    let direction = SlideDirection::of(start_px, target_px);
    log::debug!(
        "panel {:?} retarget {}px -> {}px ({:?}{})",
        panel.node,
        start_px,
        target_px,
        direction,
        if interrupted { ", interrupted" } else { "" },
    );
    if interrupted {
        events.push(SlideEvent::Interrupted {
            node: panel.node,
            mid_px: start_px,
            to_px: target_px,
            direction,
        });
    } else {
        events.push(SlideEvent::Started {
            node: panel.node,
            from_px: start_px,
            to_px: target_px,
            direction,
        });
    }
}

/// Handle a scheduled tick: begin the actual travel toward the target.
///
/// The watcher is armed before the target height is applied so the host
/// observes the pinned start as the transition's visual starting point.
pub(crate) fn handle_tick<H: SlideHost>(panel: &mut Panel, host: &mut H, timer: TimerId) {
    if panel.pending_timer != Some(timer) {
        log::trace!("ignoring stale tick {:?} for panel {:?}", timer, panel.node);
        return;
    }
    panel.pending_timer = None;

    if panel.phase != SlidePhase::Pinned {
        return;
    }

    let watcher = host.arm_completion_watcher(panel.node);
    panel.armed_watcher = Some(watcher);
    panel.phase = SlidePhase::Transitioning;
    panel.applied = AppliedHeight::from(panel.target_px);
    sync_attributes(panel, host);
}

/// Handle the host's transition-finished notification.
///
/// Only the currently armed watcher settles the panel; anything else is
/// a stale delivery and is ignored. Settling open relaxes the height to
/// unconstrained so future content reflows need no transition; settling
/// closed stays pinned at zero.
pub(crate) fn handle_transition_finished<H: SlideHost>(
    panel: &mut Panel,
    host: &mut H,
    watcher: WatcherId,
    events: &mut EventQueue,
) {
    if panel.armed_watcher != Some(watcher) {
        tracing::warn!(
            "stale completion {:?} delivered to panel {:?}",
            watcher,
            panel.node
        );
        return;
    }
    panel.armed_watcher = None;
    panel.last_measured_px = panel.target_px;
    panel.applied = resting(panel.target_px);
    panel.phase = SlidePhase::Settled;
    sync_attributes(panel, host);
    log::debug!("panel {:?} settled at {:?}", panel.node, panel.applied);
    events.push(SlideEvent::Settled {
        node: panel.node,
        resting: panel.applied,
    });
}

/// Tear the panel down: cancel all pending work. After this call no
/// further mutation of the node occurs.
pub(crate) fn teardown<H: SlideHost>(panel: &mut Panel, host: &mut H) {
    if let Some(timer) = panel.pending_timer.take() {
        host.cancel_tick(timer);
    }
    if let Some(watcher) = panel.armed_watcher.take() {
        host.disarm_completion_watcher(watcher);
    }
    panel.phase = SlidePhase::Idle;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::host::HostEvent;
    use crate::sim::SimHost;
    use crate::types::ElementKind;

    fn open_panel(host: &mut SimHost) -> Panel {
        let node = host.create_node(&ElementKind::default());
        let child = host.create_node(&ElementKind::default());
        host.set_children(node, &[child]);
        let mut panel = Panel::new(node, ElementKind::default());
        panel.has_content = true;
        panel
    }

    /// Step the sim clock and route events straight into the controller.
    fn pump(host: &mut SimHost, panel: &mut Panel, events: &mut EventQueue, ms: u64) {
        for _ in 0..ms {
            for event in host.advance(1.0) {
                match event {
                    HostEvent::Tick { timer } => handle_tick(panel, host, timer),
                    HostEvent::TransitionFinished { watcher } => {
                        handle_transition_finished(panel, host, watcher, events)
                    }
                }
            }
        }
    }

    #[test]
    fn test_retarget_pins_then_transitions_then_settles() {
        let mut host = SimHost::new(110.0);
        host.set_default_natural_height(18.0);
        let mut panel = open_panel(&mut host);
        let mut events = EventQueue::new();

        retarget(&mut panel, &mut host, 18.0, &mut events);
        assert_eq!(panel.phase, SlidePhase::Pinned);
        assert!(panel.pending_timer.is_some());
        assert_eq!(host.rendered_height(panel.node), 0.0);

        pump(&mut host, &mut panel, &mut events, 1);
        assert_eq!(panel.phase, SlidePhase::Transitioning);
        assert!(panel.pending_timer.is_none());
        assert!(panel.armed_watcher.is_some());

        pump(&mut host, &mut panel, &mut events, 60);
        let mid = host.rendered_height(panel.node);
        assert!(mid > 0.0 && mid < 18.0);

        pump(&mut host, &mut panel, &mut events, 70);
        assert_eq!(panel.phase, SlidePhase::Settled);
        assert_eq!(panel.applied, AppliedHeight::Auto);
        assert_eq!(host.rendered_height(panel.node), 18.0);
    }

    #[test]
    fn test_equal_target_settles_without_transition() {
        let mut host = SimHost::new(110.0);
        let node = host.create_node(&ElementKind::default());
        let mut panel = Panel::new(node, ElementKind::default());
        let mut events = EventQueue::new();

        retarget(&mut panel, &mut host, 0.0, &mut events);
        assert_eq!(panel.phase, SlidePhase::Settled);
        assert!(panel.pending_timer.is_none());
        assert!(events.pop().unwrap().is_settled());
    }

    #[test]
    fn test_interruption_starts_from_midflight_height() {
        let mut host = SimHost::new(110.0);
        host.set_default_natural_height(18.0);
        let mut panel = open_panel(&mut host);
        let mut events = EventQueue::new();

        retarget(&mut panel, &mut host, 18.0, &mut events);
        pump(&mut host, &mut panel, &mut events, 50);
        let mid = host.rendered_height(panel.node);
        assert!(mid > 0.0 && mid < 18.0);

        let old_watcher = panel.armed_watcher;
        retarget(&mut panel, &mut host, 0.0, &mut events);

        // The new travel starts exactly at the mid-flight value
        assert_eq!(host.rendered_height(panel.node), mid);
        assert_eq!(panel.phase, SlidePhase::Pinned);
        assert_ne!(panel.armed_watcher, old_watcher);

        let interrupted = events.drain().find(|e| e.is_interrupted()).unwrap();
        match interrupted {
            SlideEvent::Interrupted { mid_px, to_px, .. } => {
                assert_eq!(mid_px, mid);
                assert_eq!(to_px, 0.0);
            }
            _ => unreachable!(),
        }

        pump(&mut host, &mut panel, &mut events, 200);
        assert_eq!(panel.phase, SlidePhase::Settled);
        assert_eq!(host.rendered_height(panel.node), 0.0);
    }

    #[test]
    fn test_stale_tick_is_ignored() {
        let mut host = SimHost::new(110.0);
        host.set_default_natural_height(18.0);
        let mut panel = open_panel(&mut host);
        let mut events = EventQueue::new();

        retarget(&mut panel, &mut host, 18.0, &mut events);
        let stale = TimerId::new();
        handle_tick(&mut panel, &mut host, stale);
        assert_eq!(panel.phase, SlidePhase::Pinned);
        assert!(panel.pending_timer.is_some());
    }

    #[test]
    fn test_stale_completion_is_ignored() {
        let mut host = SimHost::new(110.0);
        host.set_default_natural_height(18.0);
        let mut panel = open_panel(&mut host);
        let mut events = EventQueue::new();

        retarget(&mut panel, &mut host, 18.0, &mut events);
        pump(&mut host, &mut panel, &mut events, 1);
        assert_eq!(panel.phase, SlidePhase::Transitioning);

        handle_transition_finished(&mut panel, &mut host, WatcherId::new(), &mut events);
        assert_eq!(panel.phase, SlidePhase::Transitioning);
        assert!(panel.armed_watcher.is_some());
    }

    #[test]
    fn test_settle_closed_stays_pinned_at_zero() {
        let mut host = SimHost::new(110.0);
        host.set_default_natural_height(18.0);
        let mut panel = open_panel(&mut host);
        panel.applied = AppliedHeight::Auto;
        panel.phase = SlidePhase::Settled;
        sync_attributes(&panel, &mut host);
        let mut events = EventQueue::new();

        // Close from a settled-open (unconstrained) panel
        retarget(&mut panel, &mut host, 0.0, &mut events);
        assert_eq!(panel.applied, AppliedHeight::from(18.0));

        pump(&mut host, &mut panel, &mut events, 200);
        assert_eq!(panel.phase, SlidePhase::Settled);
        assert_eq!(panel.applied, AppliedHeight::from(0.0));
    }

    #[test]
    fn test_teardown_clears_pending_work() {
        let mut host = SimHost::new(110.0);
        host.set_default_natural_height(18.0);
        let mut panel = open_panel(&mut host);
        let mut events = EventQueue::new();

        retarget(&mut panel, &mut host, 18.0, &mut events);
        pump(&mut host, &mut panel, &mut events, 1);
        assert!(panel.armed_watcher.is_some());

        teardown(&mut panel, &mut host);
        assert!(panel.pending_timer.is_none());
        assert!(panel.armed_watcher.is_none());

        // Nothing left to deliver
        assert!(host.advance(500.0).is_empty());
    }
}
