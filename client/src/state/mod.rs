//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by page (`properties`, `edit_property`, `testimonials`)
//! plus the form model and the notice stack, so components depend on small
//! focused models that can be tested without a renderer.

pub mod edit_property;
pub mod notices;
pub mod properties;
pub mod property_form;
pub mod testimonials;
