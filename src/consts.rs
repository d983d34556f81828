//! Shared route targets and engine defaults for the client crate.

// ── Routes ──────────────────────────────────────────────────────

/// Sign-in entry point; unauthenticated visitors are sent here.
pub const AUTH_ROUTE: &str = "/auth";

/// Landing route for signed-in users.
pub const DASHBOARD_ROUTE: &str = "/dashboard";

/// Query value appended to the dashboard route when approval is pending.
pub const APPROVAL_PENDING_MESSAGE: &str = "approval-pending";

/// Dashboard route carrying the approval-pending notice.
pub const APPROVAL_PENDING_ROUTE: &str = "/dashboard?message=approval-pending";

// ── Session endpoints ───────────────────────────────────────────

/// Current-user lookup endpoint.
pub const SESSION_ME_ENDPOINT: &str = "/api/auth/me";

/// Email + password sign-in endpoint.
pub const SESSION_LOGIN_ENDPOINT: &str = "/api/auth/login";

/// Sign-out endpoint.
pub const SESSION_LOGOUT_ENDPOINT: &str = "/api/auth/logout";

// ── Scroll reveal ───────────────────────────────────────────────

/// Visible fraction an element must reach before it counts as revealed.
pub const REVEAL_THRESHOLD: f64 = 0.1;

/// Root margin applied to the viewport box (CSS shorthand).
pub const REVEAL_ROOT_MARGIN: &str = "0px 0px -50px 0px";

/// Default stagger delay between consecutive item activations.
pub const STAGGER_DELAY_MS: u32 = 100;

// ── Parallax ────────────────────────────────────────────────────

/// Default scroll-to-offset multiplier.
pub const PARALLAX_SPEED: f64 = 0.5;

// ── Swipe ───────────────────────────────────────────────────────

/// Minimum travel in CSS pixels along the dominant axis for a swipe.
pub const SWIPE_THRESHOLD_PX: f64 = 50.0;
