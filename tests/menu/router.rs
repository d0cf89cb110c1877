use std::sync::{Arc, Mutex};
use vault_tray::menu::{EventPattern, EventRoute, EventRouter, HandlerResult};

#[test]
fn exact_pattern_matches_only_exact_string() {
    // Arrange
    let pattern = EventPattern::Exact("app::quit".to_string());

    // Assert
    assert!(pattern.matches("app::quit"));
    assert!(!pattern.matches("app::quit_now"));
    assert!(!pattern.matches("app::qui"));
    assert!(!pattern.matches("app::lock_all"));
}

#[test]
fn prefix_pattern_matches_strings_with_prefix() {
    // Arrange
    let pattern = EventPattern::Prefix("vault::work::".to_string());

    // Assert
    assert!(pattern.matches("vault::work::unlock"));
    assert!(pattern.matches("vault::work::"));
    assert!(!pattern.matches("vault::wor"));
    assert!(!pattern.matches("vault::other::unlock"));
}

#[test]
fn router_routes_to_first_matching_handler() {
    // Arrange
    let call_count = Arc::new(Mutex::new(0));
    let call_count_clone = call_count.clone();

    let routes = vec![EventRoute {
        pattern: EventPattern::Prefix("vault::".to_string()),
        handler: Box::new(move |_| {
            *call_count_clone.lock().unwrap() += 1;
            Ok(HandlerResult::Continue)
        }),
    }];
    let router = EventRouter::new(routes);

    // Act
    let _ = router.route("vault::work::unlock");

    // Assert
    assert_eq!(*call_count.lock().unwrap(), 1);
}

#[test]
fn router_returns_quit_handler_result() {
    // Arrange
    let routes = vec![EventRoute {
        pattern: EventPattern::Exact("app::quit".to_string()),
        handler: Box::new(|_| Ok(HandlerResult::Quit)),
    }];
    let router = EventRouter::new(routes);

    // Act
    let result = router.route("app::quit").unwrap();

    // Assert
    assert!(matches!(result, HandlerResult::Quit));
}

#[test]
fn router_returns_continue_for_unmatched_events() {
    // Arrange
    let routes = vec![EventRoute {
        pattern: EventPattern::Exact("app::quit".to_string()),
        handler: Box::new(|_| Ok(HandlerResult::Quit)),
    }];
    let router = EventRouter::new(routes);

    // Act
    let result = router.route("unknown").unwrap();

    // Assert
    assert!(matches!(result, HandlerResult::Continue));
}

#[test]
fn router_passes_event_id_to_handler() {
    // Arrange
    let received_id = Arc::new(Mutex::new(String::new()));
    let received_id_clone = received_id.clone();

    let routes = vec![EventRoute {
        pattern: EventPattern::Prefix("vault::".to_string()),
        handler: Box::new(move |event_id| {
            *received_id_clone.lock().unwrap() = event_id.to_string();
            Ok(HandlerResult::Continue)
        }),
    }];
    let router = EventRouter::new(routes);

    // Act
    let _ = router.route("vault::work::reveal");

    // Assert
    assert_eq!(*received_id.lock().unwrap(), "vault::work::reveal");
}

#[test]
fn router_uses_first_matching_route_when_multiple_match() {
    // Arrange
    let first_called = Arc::new(Mutex::new(false));
    let second_called = Arc::new(Mutex::new(false));

    let first_clone = first_called.clone();
    let second_clone = second_called.clone();

    let routes = vec![
        EventRoute {
            pattern: EventPattern::Prefix("vault::".to_string()),
            handler: Box::new(move |_| {
                *first_clone.lock().unwrap() = true;
                Ok(HandlerResult::Continue)
            }),
        },
        EventRoute {
            pattern: EventPattern::Prefix("vault::".to_string()),
            handler: Box::new(move |_| {
                *second_clone.lock().unwrap() = true;
                Ok(HandlerResult::Continue)
            }),
        },
    ];
    let router = EventRouter::new(routes);

    // Act
    let _ = router.route("vault::work::unlock");

    // Assert
    assert!(*first_called.lock().unwrap());
    assert!(!*second_called.lock().unwrap());
}

#[test]
fn empty_router_continues_on_any_event() {
    let router = EventRouter::empty();

    let result = router.route("app::quit").unwrap();

    assert!(matches!(result, HandlerResult::Continue));
}
