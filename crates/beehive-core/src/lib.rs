//! BeeHive Core Library
//!
//! Content catalog, route table, and the DOM-free state machines behind the
//! BeeHive resort site: gallery, page scroll lock, inertial scrolling, scroll
//! triggers, header state and inquiry forms.

pub mod catalog;
pub mod error;
pub mod form;
pub mod gallery;
pub mod header;
pub mod inertial;
pub mod refresh;
pub mod route;
pub mod scroll_lock;
pub mod trigger;

pub use catalog::{Activity, ContactInfo, Destination, Package, TariffPlan};
pub use error::{CoreError, Result};
pub use form::{BookingInquiry, ContactMessage, FormPhase, Inquiry, InquiryForm};
pub use gallery::{GalleryFilter, GalleryState, TileShape};
pub use header::HeaderState;
pub use inertial::{InertialOptions, InertialScroll};
pub use refresh::{RefreshPlan, RefreshScheduler, RouteRefresh};
pub use route::Route;
pub use scroll_lock::{ScrollBackend, ScrollLock, ScrollLockGuard};
pub use trigger::{TriggerEffect, TriggerId, TriggerKind, TriggerRegistry};
