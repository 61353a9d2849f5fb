//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render the property form, the property table, and the notice
//! stack. Pages own the requests; components only raise callbacks.

pub mod notice_stack;
pub mod property_form;
pub mod property_list;
