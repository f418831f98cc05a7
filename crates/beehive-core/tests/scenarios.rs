//! Visitor scenarios across the core state machines.

use std::sync::{
    Arc,
    atomic::{AtomicBool, Ordering},
};

use beehive_core::{
    BookingInquiry, FormPhase, GalleryFilter, GalleryState, InertialScroll, InquiryForm, Route,
    ScrollBackend, ScrollLock, TriggerEffect, TriggerKind, TriggerRegistry,
    catalog::{FALLBACK_IMAGE, GALLERY_IMAGES},
    form::{GuestOption, SuiteType},
    trigger::{Bounds, RevealSpec},
};

/// Mirrors `overflow: hidden` on the document body.
#[derive(Clone, Default)]
struct BodyFlag(Arc<AtomicBool>);

impl BodyFlag {
    fn scrollable(&self) -> bool {
        !self.0.load(Ordering::SeqCst)
    }
}

impl ScrollBackend for BodyFlag {
    fn set_scroll_enabled(&self, enabled: bool) {
        self.0.store(!enabled, Ordering::SeqCst);
    }
}

#[test]
fn test_browse_whole_gallery() {
    let body = BodyFlag::default();
    let mut gallery = GalleryState::new(ScrollLock::new(body.clone()));

    assert_eq!(gallery.visible_images().len(), 6);
    assert_eq!(gallery.load_more(), 3);
    assert_eq!(gallery.visible_count(), 9);

    let mut seen = vec![gallery.visible_count()];
    while gallery.has_more() {
        gallery.load_more();
        seen.push(gallery.visible_count());
    }
    assert_eq!(seen, vec![9, 12, 15, 16]);
    assert_eq!(gallery.visible_images(), GALLERY_IMAGES);
    assert_eq!(gallery.load_more(), 0);

    gallery.select_filter(GalleryFilter::Tents);
    assert_eq!(gallery.visible_count(), 6);
    assert!(gallery.has_more());
    assert!(body.scrollable());
}

#[test]
fn test_lightbox_with_second_lock_holder() {
    let body = BodyFlag::default();
    let lock = ScrollLock::new(body.clone());
    let drawer_guard = lock.acquire();
    let mut gallery = GalleryState::new(lock.clone());

    let url = gallery.visible_images()[2];
    gallery.open_image(url).expect("open visible image");
    assert!(!body.scrollable());

    assert!(gallery.handle_key("Escape"));
    assert!(!body.scrollable(), "drawer still holds the lock");

    drop(drawer_guard);
    assert!(body.scrollable());
    assert!(!gallery.handle_key("Escape"));
}

#[test]
fn test_navigating_away_with_open_lightbox() {
    let body = BodyFlag::default();
    let mut gallery = GalleryState::new(ScrollLock::new(body.clone()));
    gallery
        .open_image(GALLERY_IMAGES[0])
        .expect("open first image");
    assert!(!body.scrollable());

    drop(gallery);
    assert!(body.scrollable());
}

#[test]
fn test_broken_image_in_grid_and_lightbox() {
    let mut gallery = GalleryState::new(ScrollLock::default());
    let url = gallery.visible_images()[1];

    assert!(gallery.mark_broken(url));
    gallery.open_image(url).expect("open broken image");

    let selected = gallery.selected().expect("selection");
    assert_eq!(gallery.display_src(url), FALLBACK_IMAGE);
    assert_eq!(gallery.display_src(selected), FALLBACK_IMAGE);
}

#[test]
fn test_booking_round_trip() {
    let mut form = InquiryForm::<BookingInquiry>::new();
    form.fields.full_name = "Asha Menon".to_string();
    form.fields.mobile = "+91 98765 43210".to_string();
    form.fields.email = "asha@example.com".to_string();
    form.fields.check_in = "2026-12-20".to_string();
    form.fields.check_out = "2026-12-23".to_string();
    form.fields.suite = SuiteType::PrivateCottage;
    form.fields.guests = GuestOption::ThreeAdults;

    form.submit().expect("submit booking");
    assert_eq!(form.phase(), FormPhase::Submitted);

    form.reset();
    assert_eq!(form.phase(), FormPhase::Idle);
    assert!(form.fields.full_name.is_empty());
    assert_eq!(form.fields.suite, SuiteType::default());
}

#[test]
fn test_every_route_resolves() {
    for route in Route::ALL {
        assert_eq!(Route::from_path(route.path()), Some(route));
        assert_eq!(route.path().parse::<Route>(), Ok(route));
    }
    assert_eq!(Route::from_path("/spa"), None);
    assert!("/spa".parse::<Route>().is_err());
}

#[test]
fn test_scrolling_reveals_sections_once() {
    const VIEWPORT: f64 = 900.0;

    let mut driver = InertialScroll::default();
    driver.set_limit(3000.0);

    let mut triggers = TriggerRegistry::new();
    let hero = triggers.register(TriggerKind::Reveal(RevealSpec::on_load()));
    let footer = triggers.register(TriggerKind::Reveal(RevealSpec::at(0.92)));
    triggers.refresh(|id| {
        Some(if id == hero {
            Bounds::new(0.0, 900.0)
        } else {
            Bounds::new(3500.0, 400.0)
        })
    });

    let effects = triggers.update(driver.position(), VIEWPORT);
    assert_eq!(effects, vec![TriggerEffect::Reveal { id: hero, delay_ms: 0 }]);

    driver.raf(0.0);
    driver.on_wheel(5000.0);
    let mut time = 0.0;
    let mut revealed = Vec::new();
    while driver.is_animating() {
        time += 16.0;
        if let Some(y) = driver.raf(time) {
            assert!((0.0..=3000.0).contains(&y));
            revealed.extend(triggers.update(y, VIEWPORT));
        }
    }

    assert_eq!(driver.position(), 3000.0);
    assert_eq!(
        revealed,
        vec![TriggerEffect::Reveal {
            id: footer,
            delay_ms: 0
        }]
    );
}
