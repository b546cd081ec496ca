pub(crate) mod debug;

pub(crate) use debug::{debug_enabled, debug_log, set_debug};
