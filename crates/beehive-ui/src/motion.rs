//! Scroll-linked entrance and parallax wrappers.
//!
//! Both register with the enclosing smooth-scroll engine once mounted and
//! unregister (reverting their styles) on unmount.

use beehive_core::{
    TriggerId, TriggerKind,
    trigger::{Distance, ParallaxSpec, RevealSpec},
};
use leptos::{html::Div, prelude::*};

use crate::smooth_scroll::{REVEALED_CLASS, use_smooth_scroll};

/// Viewport fraction most content reveals at (`top 92%`).
pub const DEFAULT_REVEAL_AT: f64 = 0.92;

/// Register a scroll trigger measured on `trigger` and applied to `target`
/// for as long as the calling component is mounted.
///
/// Outside a smooth-scroll provider reveals are applied at once and
/// parallax is skipped.
pub fn use_scroll_trigger(trigger: NodeRef<Div>, target: NodeRef<Div>, kind: TriggerKind) {
    let scroll = use_smooth_scroll();
    let registered = StoredValue::new(None::<TriggerId>);

    Effect::new(move |_| {
        let (Some(trigger), Some(target)) = (trigger.get(), target.get()) else {
            return;
        };
        if registered.get_value().is_some() {
            return;
        }

        match scroll {
            Some(scroll) => registered.set_value(scroll.register(kind, trigger.into(), target.into())),
            None => {
                if matches!(kind, TriggerKind::Reveal(_)) {
                    let _ = target.class_list().add_1(REVEALED_CLASS);
                }
            }
        }
    });

    on_cleanup(move || {
        if let (Some(scroll), Some(id)) = (scroll, registered.try_get_value().flatten()) {
            scroll.unregister(id);
        }
    });
}

/// Block that fades in once it scrolls into view.
#[component]
pub fn Reveal(
    /// Viewport fraction the block's top edge must pass.
    #[prop(default = DEFAULT_REVEAL_AT)]
    at: f64,
    /// Reveal as soon as the page lays out instead of on scroll.
    #[prop(optional)]
    on_load: bool,
    /// Transition delay, for staggering siblings.
    #[prop(optional)]
    delay_ms: u32,
    /// Entrance direction: `up`, `left`, `right` or `zoom`.
    #[prop(default = "up")]
    motion: &'static str,
    #[prop(optional, into)] class: String,
    children: Children,
) -> impl IntoView {
    let node = NodeRef::<Div>::new();
    let spec = if on_load {
        RevealSpec::on_load()
    } else {
        RevealSpec::at(at)
    };
    use_scroll_trigger(node, node, TriggerKind::Reveal(spec.with_delay(delay_ms)));

    view! {
      <div node_ref=node class=format!("reveal reveal-{motion} {class}")>
        {children()}
      </div>
    }
}

/// Layer that drifts while its frame crosses the viewport.
#[component]
pub fn Parallax(
    /// Total drift over the trigger range.
    distance: Distance,
    /// Track from the frame's top at the viewport top (hero images) instead
    /// of from the frame entering at the bottom.
    #[prop(optional)]
    from_top: bool,
    #[prop(optional, into)] class: String,
    children: Children,
) -> impl IntoView {
    let frame = NodeRef::<Div>::new();
    let layer = NodeRef::<Div>::new();
    let spec = if from_top {
        ParallaxSpec::from_top(distance)
    } else {
        ParallaxSpec::through_viewport(distance)
    };
    use_scroll_trigger(frame, layer, TriggerKind::Parallax(spec));

    view! {
      <div node_ref=frame class=format!("parallax {class}")>
        <div node_ref=layer class="parallax-layer">
          {children()}
        </div>
      </div>
    }
}

/// Stagger delay for the `index`-th sibling.
pub fn stagger(index: usize, step_ms: u32) -> u32 {
    u32::try_from(index).unwrap_or(u32::MAX).saturating_mul(step_ms)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stagger() {
        assert_eq!(stagger(0, 150), 0);
        assert_eq!(stagger(3, 150), 450);
        assert_eq!(stagger(usize::MAX, 150), u32::MAX);
    }
}
