//! BeeHive UI Components
//!
//! Leptos components shared by the BeeHive resort pages.
//!
//! # Components
//!
//! ## Shell
//! - [`Layout`] - Header with navigation, mobile drawer and footer
//!
//! ## Scrolling
//! - [`SmoothScrollProvider`] - Inertial scrolling, page scroll lock and scroll triggers
//! - [`Reveal`] - Block that fades in when scrolled into view
//! - [`Parallax`] - Layer that drifts while crossing the viewport
//!
//! ## Content
//! - [`GalleryWall`] - Filterable image grid with lightbox
//! - [`FallbackImg`] - Image with the resort photo as fallback
//! - [`TextField`], [`TextArea`], [`SelectField`], [`SuccessPanel`] - Inquiry form parts
//!
//! # Example
//!
//! ```ignore
//! use beehive_ui::{Layout, Reveal, SmoothScrollProvider};
//! use leptos::prelude::*;
//!
//! #[component]
//! fn Page() -> impl IntoView {
//!     view! {
//!         <SmoothScrollProvider>
//!             <Layout>
//!                 <Reveal>"Welcome to the Hive"</Reveal>
//!             </Layout>
//!         </SmoothScrollProvider>
//!     }
//! }
//! ```

pub mod form;
pub mod gallery;
pub mod image;
pub mod motion;
pub mod shell;
pub mod smooth_scroll;

pub use form::{
    FieldBinding, FormErrorNote, SelectField, SuccessPanel, TextArea, TextField, bind_field,
    reset_form, submit_form,
};
pub use gallery::GalleryWall;
pub use image::FallbackImg;
pub use motion::{Parallax, Reveal, stagger, use_scroll_trigger};
pub use shell::Layout;
pub use smooth_scroll::{SmoothScroll, SmoothScrollProvider, use_scroll_lock, use_smooth_scroll};
