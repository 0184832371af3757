//! Canonical structured event names used across `app-shell`.

// Requirement registry and guard resolution events.
pub const REQUIREMENT_REGISTER_OK: &str = "requirement_register_ok";
pub const REQUIREMENT_REGISTER_DUPLICATE: &str = "requirement_register_duplicate";
pub const GUARD_RESOLVE_START: &str = "guard_resolve_start";
pub const GUARD_ALLOWED: &str = "guard_allowed";
pub const GUARD_DENIED: &str = "guard_denied";
pub const GUARD_UNKNOWN_REQUIREMENT: &str = "guard_unknown_requirement";

// Navigation events.
pub const NAVIGATION_START: &str = "navigation_start";
pub const NAVIGATION_OK: &str = "navigation_ok";
pub const NAVIGATION_DENIED: &str = "navigation_denied";
pub const NAVIGATION_REDIRECT: &str = "navigation_redirect";
pub const NAVIGATION_FAILED: &str = "navigation_failed";
pub const NAVIGATION_UNMAPPED_DENIAL: &str = "navigation_unmapped_denial";
pub const NAVIGATION_REDIRECT_LOOP: &str = "navigation_redirect_loop";

// Request-activity events.
pub const ACTIVITY_CALL_START: &str = "activity_call_start";
pub const ACTIVITY_CALL_OK: &str = "activity_call_ok";
pub const ACTIVITY_CALL_FAILED: &str = "activity_call_failed";
pub const ACTIVITY_CALL_ABANDONED: &str = "activity_call_abandoned";
pub const ACTIVITY_CALL_TIMED_OUT: &str = "activity_call_timed_out";
pub const ACTIVITY_PENDING_UNDERFLOW: &str = "activity_pending_underflow";
pub const ACTIVITY_ERROR_CLEARED: &str = "activity_error_cleared";

// Shell lifecycle events.
pub const SHELL_CREATE_OK: &str = "shell_create_ok";
pub const SHELL_CONFIG_INVALID: &str = "shell_config_invalid";
