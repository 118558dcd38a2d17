use form_binding::role::registry::{DispatchError, RoleRegistry};

#[test]
fn leftmost_tag_wins() {
    let mut registry: RoleRegistry<&str> = RoleRegistry::new();
    registry.define("a", "handler-a");
    registry.define("b", "handler-b");

    assert_eq!(registry.resolve(Some("b a")), Ok(&"handler-b"));
    assert_eq!(registry.resolve(Some("a b")), Ok(&"handler-a"));
}

#[test]
fn registration_order_does_not_affect_specificity() {
    let mut registry: RoleRegistry<&str> = RoleRegistry::new();
    registry.define("b", "handler-b");
    registry.define("a", "handler-a");

    assert_eq!(
        registry.resolve(Some("a b")),
        Ok(&"handler-a"),
        "role order decides, not registration order"
    );
}

#[test]
fn unmatched_role_falls_back_to_default() {
    let mut registry = RoleRegistry::with_default("default");
    registry.define("known", "known-handler");

    assert_eq!(registry.resolve(Some("alien strange")), Ok(&"default"));
}

#[test]
fn undefined_role_uses_the_default_handler() {
    let registry = RoleRegistry::with_default("default");

    assert_eq!(registry.resolve(None), Ok(&"default"));
}

#[test]
fn missing_default_is_a_dispatch_error() {
    let registry: RoleRegistry<&str> = RoleRegistry::new();

    assert!(registry.default_handler().is_none());
    assert_eq!(
        registry.resolve(None),
        Err(DispatchError::NoHandler { role: None })
    );
    assert!(matches!(
        registry.resolve(Some("anything")),
        Err(DispatchError::NoHandler { role: Some(_) })
    ));
}

#[test]
fn compound_roles_are_cached_under_the_full_string() {
    let mut registry: RoleRegistry<&str> = RoleRegistry::new();
    registry.define("b", "handler-b");

    assert!(registry.cached_resolution("b a").is_none(), "no lookup yet");

    registry.resolve(Some("b a")).unwrap();
    assert_eq!(
        registry.cached_resolution("b a"),
        Some(Some("b".to_string()))
    );
}

#[test]
fn later_definition_replaces_cached_fallback() {
    let mut registry = RoleRegistry::with_default("default");

    assert_eq!(registry.resolve(Some("fancy plain")), Ok(&"default"));
    assert_eq!(
        registry.cached_resolution("fancy plain"),
        Some(None),
        "fallback to default is cached"
    );

    registry.define("fancy", "fancy-handler");

    assert!(
        registry.cached_resolution("fancy plain").is_none(),
        "registration drops the cache"
    );
    assert_eq!(registry.resolve(Some("fancy plain")), Ok(&"fancy-handler"));
}

#[test]
fn replacing_the_default_applies_to_cached_fallbacks() {
    let mut registry = RoleRegistry::with_default("old-default");
    assert_eq!(registry.resolve(Some("alien")), Ok(&"old-default"));

    registry.set_default("new-default");

    assert_eq!(registry.default_handler(), Some(&"new-default"));
    assert_eq!(registry.resolve(Some("alien")), Ok(&"new-default"));
    assert_eq!(registry.resolve(None), Ok(&"new-default"));
}

#[test]
fn redefining_a_tag_with_the_same_handler_is_idempotent() {
    let mut registry: RoleRegistry<&str> = RoleRegistry::new();
    registry.define("a", "handler-a");
    let first = *registry.resolve(Some("a")).unwrap();

    registry.define("a", "handler-a");
    let second = *registry.resolve(Some("a")).unwrap();

    assert_eq!(first, second);
}

#[test]
fn define_returns_the_stored_handler() {
    let mut registry: RoleRegistry<&str> = RoleRegistry::new();

    assert_eq!(registry.define("a", "handler-a"), &"handler-a");
}

#[test]
fn from_handlers_seeds_the_registry() {
    let registry = RoleRegistry::from_handlers(vec![
        ("object".to_string(), 1),
        ("list".to_string(), 2),
    ]);

    assert_eq!(registry.get("object"), Some(&1));
    assert_eq!(registry.get("list"), Some(&2));
    assert_eq!(registry.get("ghost"), None);
}
