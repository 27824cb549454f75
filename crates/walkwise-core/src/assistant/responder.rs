use crate::models::RiskLevel;

/// Delay before a reply appears, simulating the assistant "typing".
/// The matcher itself is instant; the view layer applies the delay.
pub const TYPING_DELAY_MS: u64 = 1500;

/// Inline route summary attached to a safe-route reply.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoutePreview {
    pub safety_score: u8,
    pub duration: &'static str,
    pub distance: &'static str,
}

/// One entry in an ATM suggestion list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AtmSuggestion {
    pub name: &'static str,
    pub distance: &'static str,
    pub safety: &'static str,
}

/// Danger warning attached to an alert reply.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AreaAlert {
    pub level: RiskLevel,
    pub incidents: u32,
    pub recommendation: &'static str,
}

/// Structured payload accompanying a reply, when the branch has one.
#[derive(Debug, Clone, PartialEq)]
pub enum Attachment {
    RoutePreview(RoutePreview),
    AtmSuggestions(Vec<AtmSuggestion>),
    AreaAlert(AreaAlert),
}

#[derive(Debug, Clone, PartialEq)]
pub struct AssistantReply {
    pub text: String,
    pub attachment: Option<Attachment>,
}

/// Produce the canned reply for a user prompt.
///
/// Keyword matching over the lowercased input, first branch wins. This is
/// the entire "AI": four fixed templates and a fallback.
pub fn respond(prompt: &str) -> AssistantReply {
    let input = prompt.to_lowercase();

    if input.contains("safe") && (input.contains("route") || input.contains("path")) {
        AssistantReply {
            text: "I've found the safest route to your destination. This path avoids \
                   high-crime areas and stays on well-lit streets with CCTV coverage."
                .to_string(),
            attachment: Some(Attachment::RoutePreview(RoutePreview {
                safety_score: 95,
                duration: "15 mins",
                distance: "1.2 miles",
            })),
        }
    } else if input.contains("atm") || input.contains("cash") {
        AssistantReply {
            text: "I've located several safe ATMs near you. The closest one is 0.3 miles \
                   away at First National Bank on Main Street, which has good lighting \
                   and CCTV coverage."
                .to_string(),
            attachment: Some(Attachment::AtmSuggestions(vec![
                AtmSuggestion {
                    name: "First National Bank",
                    distance: "0.3 miles",
                    safety: "High",
                },
                AtmSuggestion {
                    name: "City Credit Union",
                    distance: "0.5 miles",
                    safety: "High",
                },
                AtmSuggestion {
                    name: "Metro Bank",
                    distance: "0.8 miles",
                    safety: "Medium",
                },
            ])),
        }
    } else if input.contains("dangerous") || input.contains("avoid") {
        AssistantReply {
            text: "Warning: The area ahead has reported 3 incidents in the past week. I \
                   recommend taking an alternative route or proceeding with caution."
                .to_string(),
            attachment: Some(Attachment::AreaAlert(AreaAlert {
                level: RiskLevel::High,
                incidents: 3,
                recommendation: "Avoid area if possible",
            })),
        }
    } else {
        AssistantReply {
            text: "I'm here to help you navigate safely. You can ask me about safe \
                   routes, nearby ATMs, potential dangers, or use the quick actions \
                   below."
                .to_string(),
            attachment: None,
        }
    }
}

/// Prompt shortcuts shown under the chat input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuickAction {
    SafeRoute,
    SafeAtm,
    CheckIn,
    DangerZones,
}

impl QuickAction {
    pub const ALL: [QuickAction; 4] = [
        QuickAction::SafeRoute,
        QuickAction::SafeAtm,
        QuickAction::CheckIn,
        QuickAction::DangerZones,
    ];

    pub fn label(self) -> &'static str {
        match self {
            QuickAction::SafeRoute => "Find Safe Route",
            QuickAction::SafeAtm => "Safe ATM",
            QuickAction::CheckIn => "Check-in",
            QuickAction::DangerZones => "Danger Zones",
        }
    }

    /// The message the shortcut drops into the input field.
    pub fn prompt(self) -> &'static str {
        match self {
            QuickAction::SafeRoute => "Find me the safest route to the nearest subway station",
            QuickAction::SafeAtm => "Where is the safest ATM near me?",
            QuickAction::CheckIn => "Send a check-in to my emergency contacts",
            QuickAction::DangerZones => "Are there any dangerous areas near me?",
        }
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_safe_route_branch() {
        let reply = respond("Find me the safest route to the nearest subway station");
        match reply.attachment {
            Some(Attachment::RoutePreview(preview)) => {
                assert_eq!(preview.safety_score, 95);
                assert_eq!(preview.duration, "15 mins");
                assert_eq!(preview.distance, "1.2 miles");
            }
            other => panic!("expected route preview, got {:?}", other),
        }
    }

    #[test]
    fn test_safe_path_also_matches_the_route_branch() {
        let reply = respond("what is a safe path home?");
        assert!(matches!(
            reply.attachment,
            Some(Attachment::RoutePreview(_))
        ));
    }

    #[test]
    fn test_atm_branch_lists_three_suggestions() {
        let reply = respond("Where is the safest ATM near me?");
        match reply.attachment {
            Some(Attachment::AtmSuggestions(suggestions)) => {
                assert_eq!(suggestions.len(), 3);
                assert_eq!(suggestions[0].name, "First National Bank");
                assert_eq!(suggestions[2].safety, "Medium");
            }
            other => panic!("expected ATM suggestions, got {:?}", other),
        }
    }

    #[test]
    fn test_cash_keyword_reaches_the_atm_branch() {
        let reply = respond("I need cash");
        assert!(matches!(
            reply.attachment,
            Some(Attachment::AtmSuggestions(_))
        ));
    }

    #[test]
    fn test_danger_branch_carries_the_alert() {
        let reply = respond("Are there any dangerous areas near me?");
        match reply.attachment {
            Some(Attachment::AreaAlert(alert)) => {
                assert_eq!(alert.incidents, 3);
                assert_eq!(alert.level, crate::models::RiskLevel::High);
                assert_eq!(alert.recommendation, "Avoid area if possible");
            }
            other => panic!("expected area alert, got {:?}", other),
        }
    }

    #[test]
    fn test_matching_ignores_case() {
        let reply = respond("SAFE ROUTE PLEASE");
        assert!(matches!(
            reply.attachment,
            Some(Attachment::RoutePreview(_))
        ));
    }

    #[test]
    fn test_unmatched_prompt_falls_back_to_help_text() {
        let reply = respond("what's the weather like?");
        assert!(reply.attachment.is_none());
        assert!(reply.text.contains("quick actions"));
    }

    #[test]
    fn test_check_in_prompt_uses_the_fallback() {
        // No keyword in the check-in prompt; the mock has no check-in flow.
        let reply = respond(QuickAction::CheckIn.prompt());
        assert!(reply.attachment.is_none());
    }
}
