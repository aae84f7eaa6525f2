    use super::*;
    use crate::action::ActionKind;

    #[test]
    fn test_deserializes_camel_case_wire_format() {
        let json = r#"{
            "userIntent": "search for flights from NYC to LA",
            "domSnapshot": "<form><input id=\"from\"></form>",
            "currentUrl": "https://example.com/search"
        }"#;
        let req: DecideRequest = serde_json::from_str(json).unwrap();
        assert_eq!(req.user_intent, "search for flights from NYC to LA");
        assert_eq!(req.current_url, "https://example.com/search");
        assert!(req.previous_actions.is_empty());
        assert!(req.system_prompt.is_none());
    }

    #[test]
    fn test_missing_fields_default_to_empty() {
        let req: DecideRequest = serde_json::from_str("{}").unwrap();
        assert!(req.user_intent.is_empty());
        assert!(req.dom_snapshot.is_empty());
        assert!(req.current_url.is_empty());
    }

    #[test]
    fn test_previous_actions_deserialize() {
        let json = r##"{
            "userIntent": "continue checkout",
            "domSnapshot": "<html></html>",
            "currentUrl": "https://shop.example/cart",
            "previousActions": [
                {"action": "click", "selector": "button.accept-cookies"},
                {"action": "type", "selector": "#email", "value": "a@b.c"}
            ]
        }"##;
        let req: DecideRequest = serde_json::from_str(json).unwrap();
        assert_eq!(req.previous_actions.len(), 2);
        assert_eq!(req.previous_actions[0].action, ActionKind::Click);
        assert_eq!(req.previous_actions[1].value.as_deref(), Some("a@b.c"));
    }

    #[test]
    fn test_system_prompt_override_deserializes() {
        let json = r#"{
            "domSnapshot": "<html></html>",
            "systemPrompt": "You are a cautious agent."
        }"#;
        let req: DecideRequest = serde_json::from_str(json).unwrap();
        assert_eq!(
            req.system_prompt.as_deref(),
            Some("You are a cautious agent.")
        );
    }

    #[test]
    fn test_new_constructor() {
        let req = DecideRequest::new("buy milk", "<html></html>", "https://shop.example");
        assert_eq!(req.user_intent, "buy milk");
        assert_eq!(req.dom_snapshot, "<html></html>");
        assert_eq!(req.current_url, "https://shop.example");
    }

    #[test]
    fn test_serializes_back_to_camel_case() {
        let req = DecideRequest::new("goal", "<html></html>", "https://example.com");
        let json = serde_json::to_string(&req).unwrap();
        assert!(json.contains("\"userIntent\""));
        assert!(json.contains("\"domSnapshot\""));
        assert!(json.contains("\"currentUrl\""));
        // Empty history and absent override are skipped on the wire
        assert!(!json.contains("previousActions"));
        assert!(!json.contains("systemPrompt"));
    }
