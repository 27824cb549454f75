use super::SessionCaps;

/// Per-render gating decision for protected views.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteDecision {
    /// The startup restore or an auth attempt is pending.
    Loading,
    /// No session: send the user to the sign-in view.
    RedirectToSignIn,
    /// Render the requested protected content.
    Render,
}

/// Decide what the view layer should show for a protected view.
///
/// Pure function of the capability set, evaluated on every render; loading
/// takes precedence so an in-flight restore never flashes the sign-in view.
pub fn decide(caps: SessionCaps) -> RouteDecision {
    if caps.is_loading {
        RouteDecision::Loading
    } else if !caps.is_authenticated {
        RouteDecision::RedirectToSignIn
    } else {
        RouteDecision::Render
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn caps(is_authenticated: bool, is_loading: bool) -> SessionCaps {
        SessionCaps {
            is_authenticated,
            is_loading,
        }
    }

    #[test]
    fn test_loading_shows_the_loading_view() {
        assert_eq!(decide(caps(false, true)), RouteDecision::Loading);
    }

    #[test]
    fn test_loading_wins_over_an_existing_session() {
        // Re-auth in flight while signed in still reads as loading.
        assert_eq!(decide(caps(true, true)), RouteDecision::Loading);
    }

    #[test]
    fn test_unauthenticated_redirects_to_sign_in() {
        assert_eq!(decide(caps(false, false)), RouteDecision::RedirectToSignIn);
    }

    #[test]
    fn test_authenticated_renders_protected_content() {
        assert_eq!(decide(caps(true, false)), RouteDecision::Render);
    }
}
