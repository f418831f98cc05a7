//! Images that swap to the resort photo when their source fails.

use beehive_core::catalog::FALLBACK_IMAGE;
use leptos::prelude::*;

/// `<img>` that falls back to [`FALLBACK_IMAGE`] on a load error.
#[component]
pub fn FallbackImg(
    src: &'static str,
    #[prop(optional)] alt: &'static str,
    #[prop(optional, into)] class: String,
    /// Load eagerly (above-the-fold images).
    #[prop(optional)]
    eager: bool,
) -> impl IntoView {
    let failed = RwSignal::new(false);

    view! {
      <img
        src=move || if failed.get() { FALLBACK_IMAGE } else { src }
        alt=alt
        class=class
        loading=if eager { "eager" } else { "lazy" }
        on:error=move |_| {
          if src != FALLBACK_IMAGE && !failed.get_untracked() {
            log::warn!("image failed to load, using fallback: {src}");
            failed.set(true);
          }
        }
      />
    }
}
