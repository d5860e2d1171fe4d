use shared_types::User;
use tracing::debug;

/// Outcome of a guard check for a requested path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteDecision {
    /// Render the requested view.
    Render,
    /// Replace the history entry with the login view. Replacement, not a
    /// push, so back-navigation cannot return to the protected view.
    RedirectToLogin,
}

/// Paths reachable without an identity. Unknown paths fall through to the
/// not-found view, which carries no data and is likewise public.
const PUBLIC_PATHS: &[&str] = &["/login"];

/// Every protected path prefix the router serves. An authenticated identity
/// may render any of these. The guard never consults the role, so any
/// signed-in user can reach admin and tutor paths by direct navigation.
const PROTECTED_PREFIXES: &[&str] = &[
    "/courses",
    "/assignments",
    "/schedule",
    "/live-classes",
    "/achievements",
    "/messages",
    "/tutor",
    "/admin",
    "/profile",
    "/settings",
];

fn is_protected(path: &str) -> bool {
    if PUBLIC_PATHS.contains(&path) {
        return false;
    }
    if path == "/" {
        return true;
    }
    PROTECTED_PREFIXES
        .iter()
        .any(|prefix| path == *prefix || path.starts_with(&format!("{prefix}/")))
}

/// Decide whether to render `path` for the given identity.
///
/// A pure function of (identity presence, path): no hidden state, so
/// re-invoking with identical inputs always yields the identical decision.
/// Unknown paths render the not-found view regardless of identity.
pub fn decide(identity: Option<&User>, path: &str) -> RouteDecision {
    let decision = if is_protected(path) && identity.is_none() {
        RouteDecision::RedirectToLogin
    } else {
        RouteDecision::Render
    };
    debug!(path, authenticated = identity.is_some(), ?decision, "route guard");
    decision
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::directory::Directory;

    #[test]
    fn protected_paths_redirect_without_identity() {
        for path in [
            "/",
            "/courses",
            "/courses/course-1",
            "/assignments",
            "/tutor/create-course",
            "/admin",
            "/admin/users",
            "/settings",
        ] {
            assert_eq!(decide(None, path), RouteDecision::RedirectToLogin, "{path}");
        }
    }

    #[test]
    fn login_is_public() {
        assert_eq!(decide(None, "/login"), RouteDecision::Render);
    }

    #[test]
    fn unknown_paths_render_not_found_without_identity() {
        assert_eq!(decide(None, "/nowhere"), RouteDecision::Render);
        assert_eq!(decide(None, "/coursesx"), RouteDecision::Render);
    }

    #[test]
    fn any_identity_renders_any_protected_path() {
        let dir = Directory::seed();
        // The guard does not check role against path: a student identity
        // renders admin paths too.
        let student = dir.user("user-1").unwrap();
        for path in ["/", "/admin", "/admin/users", "/tutor/analytics"] {
            assert_eq!(decide(Some(student), path), RouteDecision::Render, "{path}");
        }
    }

    #[test]
    fn decision_is_deterministic() {
        let dir = Directory::seed();
        let admin = dir.user("user-4").unwrap();
        for _ in 0..3 {
            assert_eq!(decide(None, "/admin"), RouteDecision::RedirectToLogin);
            assert_eq!(decide(Some(admin), "/admin"), RouteDecision::Render);
        }
    }

    #[test]
    fn prefix_matching_requires_a_segment_boundary() {
        assert!(is_protected("/admin/subscriptions"));
        assert!(!is_protected("/administrivia"));
    }
}
