//! Gallery wall: filter bar, editorial grid, "load more" and lightbox.

use beehive_core::{GalleryFilter, GalleryState, TileShape, catalog::LOGO, trigger::Distance};
use leptos::{ev, prelude::*};

use crate::{
    motion::{Parallax, Reveal},
    smooth_scroll::use_scroll_lock,
};

/// Caption shown under the "load more" control.
pub fn remaining_label(remaining: usize) -> String {
    match remaining {
        1 => "1 more frame".to_string(),
        n => format!("{n} more frames"),
    }
}

/// The interactive part of the gallery page.
///
/// The gallery state, and with it any lightbox scroll lock, lives exactly as
/// long as this component.
#[component]
pub fn GalleryWall() -> impl IntoView {
    let state = RwSignal::new(GalleryState::new(use_scroll_lock()));

    view! {
      <FilterBar state=state />

      <div class="editorial-grid">
        <For
          each=move || {
            state.with(|s| s.visible_images().iter().copied().enumerate().collect::<Vec<_>>())
          }
          key=|(index, _)| *index
          children=move |(index, url)| {
            view! { <GalleryTile state=state index=index url=url /> }
          }
        />
      </div>

      <Show when=move || state.with(GalleryState::has_more)>
        <div class="load-more">
          <button class="btn btn-outline" on:click=move |_| {
            let revealed = state.try_update(GalleryState::load_more).unwrap_or_default();
            log::debug!("gallery revealed {revealed} more images");
          }>
            "Expand The Archives"
          </button>
          <span class="load-more-hint">
            {move || remaining_label(state.with(GalleryState::remaining))}
          </span>
        </div>
      </Show>

      <Show when=move || state.with(GalleryState::is_open)>
        <Lightbox state=state />
      </Show>
    }
}

#[component]
fn FilterBar(state: RwSignal<GalleryState>) -> impl IntoView {
    view! {
      <nav class="gallery-filters" aria-label="Gallery categories">
        {GalleryFilter::ALL
          .into_iter()
          .map(|filter| {
            let active = move || state.with(|s| s.filter() == filter);
            view! {
              <button
                class="gallery-filter"
                class:active=active
                on:click=move |_| state.update(|s| s.select_filter(filter))
              >
                {filter.label()}
              </button>
            }
          })
          .collect_view()}
      </nav>
    }
}

#[component]
fn GalleryTile(state: RwSignal<GalleryState>, index: usize, url: &'static str) -> impl IntoView {
    let shape = TileShape::for_index(index);
    let open = move || {
        state.update(|s| {
            if let Err(err) = s.open_image(url) {
                log::warn!("{err}");
            }
        });
    };

    view! {
      <Reveal at=0.95 class=shape.css_class()>
        <figure
          class="editorial-item"
          role="button"
          tabindex="0"
          aria-label="View larger capture"
          on:click=move |_| open()
          on:keydown=move |ev| {
            if matches!(ev.key().as_str(), "Enter" | " ") {
              ev.prevent_default();
              open();
            }
          }
        >
          <Parallax distance=Distance::Percent(15.0) class="editorial-frame">
            <img
              src=move || state.with(|s| s.display_src(url))
              alt=format!("Beehive Story {}", index + 1)
              loading="lazy"
              on:error=move |_| state.maybe_update(|s| s.mark_broken(url))
            />
          </Parallax>
          <figcaption class="editorial-caption">
            <span>"Fragment No."</span>
            <span>{format!("{:02}", index + 1)}</span>
          </figcaption>
        </figure>
      </Reveal>
    }
}

/// Full-screen view of the selected image. Escape, the close button and a
/// click on the backdrop all dismiss it.
#[component]
fn Lightbox(state: RwSignal<GalleryState>) -> impl IntoView {
    let keydown = window_event_listener(ev::keydown, move |ev| {
        state.maybe_update(|s| s.handle_key(&ev.key()));
    });
    on_cleanup(move || keydown.remove());

    let close = move || {
        state.maybe_update(GalleryState::close_image);
    };
    let src = move || state.with(|s| s.selected().map(|url| s.display_src(url)));

    view! {
      <div class="lightbox" role="dialog" aria-modal="true" on:click=move |_| close()>
        <img src=LOGO alt="BeeHive" class="lightbox-logo" />
        <button
          class="lightbox-close"
          aria-label="Close"
          on:click=move |ev: web_sys::MouseEvent| {
            ev.stop_propagation();
            close();
          }
        >
          "×"
        </button>
        <figure class="lightbox-frame" on:click=|ev: web_sys::MouseEvent| ev.stop_propagation()>
          <img
            src=move || src().unwrap_or_default()
            alt="Selected fragment"
            on:error=move |_| {
              if let Some(url) = state.with_untracked(GalleryState::selected) {
                state.maybe_update(|s| s.mark_broken(url));
              }
            }
          />
          <figcaption class="lightbox-label">
            <span>"Hive Exclusive"</span>
            <span>"Wayanad, Kerala"</span>
          </figcaption>
        </figure>
        <p class="lightbox-hint">"Tap background to return"</p>
      </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_remaining_label() {
        assert_eq!(remaining_label(1), "1 more frame");
        assert_eq!(remaining_label(7), "7 more frames");
    }
}
