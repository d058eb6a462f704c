//! Runs [`Tween`]s and [`PresenceTrack`]s on animation frames.
//!
//! Each hook owns at most one pending frame. The frame is cancelled when the
//! owning component is cleaned up, and a frame that still fires against a
//! disposed signal stops without writing.

use leptos::prelude::*;
use tracing::warn;

use super::{Pose, PresenceTrack, Tween};
use crate::host;

type FrameSlot = StoredValue<Option<AnimationFrameRequestHandle>>;

/// Pose of a one-shot tween, starting now.
pub fn use_tween(tween: Tween) -> Signal<Pose> {
    let pose = RwSignal::new(tween.from);
    let frame: FrameSlot = StoredValue::new(None);
    cancel_on_cleanup(frame);

    tween_frame(tween, host::now_ms(), pose, frame);

    Signal::derive(move || pose.get())
}

fn tween_frame(tween: Tween, started: f64, pose: RwSignal<Pose>, frame: FrameSlot) {
    let (phase, next) = tween.sample(host::now_ms() - started);
    match pose.try_get_untracked() {
        None => return,
        Some(current) if current != next => pose.set(next),
        Some(_) => {}
    }
    if phase == super::Phase::Settled {
        frame.try_set_value(None);
        return;
    }

    let scheduled =
        request_animation_frame_with_handle(move || tween_frame(tween, started, pose, frame));
    match scheduled {
        Ok(handle) => {
            frame.try_set_value(Some(handle));
        }
        Err(err) => {
            warn!(error = ?err, "animation frame unavailable, jumping to end pose");
            pose.set(tween.to);
        }
    }
}

/// Pose and mounted-ness of an element that follows `open`.
///
/// `hidden` is the pose at progress 0; the shown pose is [`Pose::REST`].
/// The returned memo stays `true` until an exit transition has finished.
pub fn use_presence(
    open: Signal<bool>,
    duration_ms: f64,
    hidden: Pose,
) -> (Signal<Pose>, Memo<bool>) {
    let track = RwSignal::new(PresenceTrack::new(open.get_untracked(), duration_ms));
    let frame: FrameSlot = StoredValue::new(None);
    cancel_on_cleanup(frame);

    Effect::new(move |_| {
        let shown = open.get();
        track.update(|t| t.set_target(shown));
        let idle = frame.try_with_value(Option::is_none).unwrap_or(false);
        if idle && !track.with_untracked(PresenceTrack::is_settled) {
            presence_frame(track, host::now_ms(), frame);
        }
    });

    let pose = Signal::derive(move || track.with(|t| t.pose(hidden, Pose::REST)));
    let present = Memo::new(move |_| track.with(PresenceTrack::is_present));
    (pose, present)
}

fn presence_frame(track: RwSignal<PresenceTrack>, last: f64, frame: FrameSlot) {
    let scheduled = request_animation_frame_with_handle(move || {
        let now = host::now_ms();
        let settled = track.try_update(|t| {
            t.advance(now - last);
            t.is_settled()
        });
        match settled {
            Some(false) => presence_frame(track, now, frame),
            Some(true) | None => {
                frame.try_set_value(None);
            }
        }
    });
    match scheduled {
        Ok(handle) => {
            frame.try_set_value(Some(handle));
        }
        Err(err) => {
            warn!(error = ?err, "animation frame unavailable, settling immediately");
            track.update(|t| t.advance(f64::INFINITY));
            frame.try_set_value(None);
        }
    }
}

fn cancel_on_cleanup(frame: FrameSlot) {
    on_cleanup(move || {
        if let Some(Some(handle)) = frame.try_get_value() {
            handle.cancel();
        }
    });
}

/// Wraps children in a container that plays `tween` once on mount.
#[component]
pub fn Reveal(
    tween: Tween,
    #[prop(optional, into)] class: String,
    children: Children,
) -> impl IntoView {
    let pose = use_tween(tween);
    view! {
        <div class=class style=move || pose.get().style()>
            {children()}
        </div>
    }
}
