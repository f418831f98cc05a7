//! Page shell: header with desktop navigation, mobile drawer and footer.

use beehive_core::{
    HeaderState, Route,
    catalog::{CONTACT, ContactInfo, LOGO},
};
use leptos::{ev, prelude::*};
use leptos_router::hooks::use_location;

use crate::smooth_scroll::use_scroll_lock;

/// Link target of the footer credit.
pub const CREDIT_URL: &str = "https://realamericantechnologies.com/";

/// Footer copyright line for `year`.
pub fn copyright_line(year: u32) -> String {
    format!("© {year} BEEHIVE RESORT WAYANAD")
}

/// Drawer and footer list the header links plus the contact page.
fn secondary_routes() -> impl Iterator<Item = Route> {
    Route::HEADER.into_iter().chain([Route::Contact])
}

/// Shared header, drawer and footer around every page.
#[component]
pub fn Layout(children: Children) -> impl IntoView {
    let header = RwSignal::new(HeaderState::default());
    let location = use_location();

    header.maybe_update(|h| h.on_scroll(window().scroll_y().unwrap_or_default()));
    let on_scroll = window_event_listener(ev::scroll, move |_| {
        let offset = window().scroll_y().unwrap_or_default();
        header.maybe_update(|h| h.on_scroll(offset));
    });
    on_cleanup(move || on_scroll.remove());

    // Navigation always closes the drawer.
    Effect::new(move |_| {
        location.pathname.track();
        header.maybe_update(|h| {
            let was_open = h.menu_open;
            h.close_menu();
            was_open
        });
    });

    let close_menu = Callback::new(move |()| header.update(|h| h.close_menu()));

    view! {
      <div class="shell">
        <header class="site-header" class:scrolled=move || header.with(|h| h.scrolled)>
          <div class="site-header-bar">
            <a href=Route::Home.path() class="site-logo">
              <img src=LOGO alt="BeeHive" />
            </a>
            <nav class="site-nav" aria-label="Main navigation">
              {Route::HEADER
                .into_iter()
                .map(|route| view! { <NavLink route=route class="site-nav-link" /> })
                .collect_view()}
            </nav>
            <div class="site-actions">
              <a href=Route::Booking.path() class="btn btn-book">
                "BOOK NOW"
              </a>
              <button
                class="menu-toggle"
                aria-label="Toggle Menu"
                on:click=move |_| header.update(|h| h.open_menu())
              >
                <span class="menu-icon" aria-hidden="true"></span>
              </button>
            </div>
          </div>
        </header>

        <Show when=move || header.with(|h| h.menu_open)>
          <Drawer on_close=close_menu />
        </Show>

        <main class="site-main">{children()}</main>

        <Footer />
      </div>
    }
}

/// Navigation link highlighted when its route is the current page.
#[component]
fn NavLink(
    route: Route,
    class: &'static str,
    #[prop(optional)] on_click: Option<Callback<()>>,
) -> impl IntoView {
    let location = use_location();
    let is_active = Memo::new(move |_| route.is_active(&location.pathname.get()));

    view! {
      <a
        href=route.path()
        class=class
        class:active=is_active
        aria-current=move || is_active.get().then_some("page")
        on:click=move |_| {
          if let Some(on_click) = on_click {
            on_click.run(());
          }
        }
      >
        {route.nav_label()}
      </a>
    }
}

/// Full-screen mobile menu. Holds the page scroll lock while mounted.
#[component]
fn Drawer(on_close: Callback<()>) -> impl IntoView {
    let guard = StoredValue::new(Some(use_scroll_lock().acquire()));
    on_cleanup(move || drop(guard.try_update_value(Option::take)));

    let phone = CONTACT.primary_phone();

    view! {
      <div class="drawer" role="dialog" aria-modal="true">
        <div class="drawer-top">
          <img src=LOGO alt="BeeHive" class="drawer-logo" />
          <button class="drawer-close" aria-label="Close menu" on:click=move |_| on_close.run(())>
            "×"
          </button>
        </div>
        <nav class="drawer-nav">
          {secondary_routes()
            .map(|route| view! { <NavLink route=route class="drawer-link" on_click=on_close /> })
            .collect_view()}
        </nav>
        <div class="drawer-contact">
          <p class="eyebrow">"Reach Us"</p>
          <a href=ContactInfo::tel_href(phone) class="drawer-phone">
            {phone}
          </a>
          <a href=Route::Booking.path() class="btn btn-reserve" on:click=move |_| on_close.run(())>
            "RESERVE MY STAY"
          </a>
        </div>
      </div>
    }
}

#[component]
fn Footer() -> impl IntoView {
    let year = js_sys::Date::new_0().get_full_year();

    view! {
      <footer class="site-footer">
        <div class="footer-grid">
          <div class="footer-about">
            <img src=LOGO alt="BeeHive" class="footer-logo" />
            <p>
              "A premium eco-friendly sanctuary nestled in the heart of Wayanad's coffee highlands. Experience nature through an artisanal lens."
            </p>
          </div>

          <div class="footer-links">
            <h4 class="eyebrow">"Quick Links"</h4>
            <ul>
              {secondary_routes()
                .map(|route| view! { <li><a href=route.path()>{route.nav_label()}</a></li> })
                .collect_view()}
            </ul>
          </div>

          <div class="footer-contact">
            <h4 class="eyebrow">"Contact Central"</h4>
            <a href=ContactInfo::tel_href(CONTACT.primary_phone())>{CONTACT.primary_phone()}</a>
            <a href=CONTACT.mailto_href()>{CONTACT.email}</a>
          </div>
        </div>

        <div class="footer-bottom">
          <p>{copyright_line(year)}</p>
          <a href=CREDIT_URL target="_blank" rel="noopener noreferrer">
            "Designed & Powered by Real American Technologies"
          </a>
        </div>
      </footer>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_copyright_line() {
        assert_eq!(copyright_line(2026), "© 2026 BEEHIVE RESORT WAYANAD");
    }

    #[test]
    fn test_secondary_routes_end_with_contact() {
        let routes: Vec<Route> = secondary_routes().collect();
        assert_eq!(routes.len(), Route::HEADER.len() + 1);
        assert_eq!(routes.last(), Some(&Route::Contact));
        assert_eq!(routes[0], Route::Home);
    }
}
