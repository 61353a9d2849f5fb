//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration (loading, operation token,
//! notices) and delegates rendering details to `components`.

pub mod edit_property;
pub mod properties;
pub mod property_detail;
pub mod testimonials;
