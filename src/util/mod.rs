//! Browser helpers shared by the hooks.
//!
//! SYSTEM CONTEXT
//! ==============
//! These modules isolate `web-sys` glue (storage, JSON conversion, console
//! logging) so the hook modules read as event wiring only.

pub mod js;
pub mod logging;
pub mod storage;
