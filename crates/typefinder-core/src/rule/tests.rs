//! Tests for rules and their composition.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use super::*;
use crate::descriptor::{GenericDef, TypeDescriptor, TypeInfo, TypeKey, TypeKind};
use crate::error::FinderError;

trait Shape {}
struct Base;
struct Derived;
struct Other;
struct Repository<T>(T);

fn shape() -> TypeInfo {
    TypeInfo::of::<dyn Shape>().interface()
}

fn base() -> TypeInfo {
    TypeInfo::of::<Base>().implements(&shape()).constructible()
}

fn derived() -> TypeInfo {
    TypeInfo::of::<Derived>().extends(&base()).constructible()
}

fn other() -> TypeInfo {
    TypeInfo::of::<Other>()
}

#[test]
fn test_exclude_rule() {
    let rule = ExcludeTypesRule::new([TypeKey::of::<Base>()]);
    assert!(!rule.complies(&base()));
    assert!(rule.complies(&derived()));
}

#[test]
fn test_exclude_empty_set_accepts_all() {
    let rule = ExcludeTypesRule::default();
    assert!(rule.complies(&base()));
    assert!(rule.complies(&other()));
}

#[test]
fn test_inheritance_excludes_base_itself() {
    let rule = InheritanceRule::new(TypeKey::of::<Base>());
    assert!(!rule.complies(&base()));
    assert!(rule.complies(&derived()));
    assert!(!rule.complies(&other()));
}

#[test]
fn test_inheritance_through_interface() {
    let rule = InheritanceRule::new(shape().key());
    assert!(rule.complies(&base()));
    assert!(rule.complies(&derived()));
    assert!(!rule.complies(&shape()));
    assert!(!rule.complies(&other()));
}

#[test]
fn test_generic_inheritance_open_and_closed() {
    let rule = GenericInheritanceRule::new(GenericDef::of::<Repository<()>>());

    let closed = TypeInfo::of::<Repository<Base>>();
    let child = TypeInfo::of::<Derived>().extends(&closed);
    let grandchild = TypeInfo::of::<Other>().extends(&child);
    let open = TypeInfo::of::<Base>().with_generic_base(GenericDef::of::<Repository<u8>>());

    assert!(!rule.complies(&closed));
    assert!(rule.complies(&child));
    assert!(rule.complies(&grandchild));
    assert!(rule.complies(&open));
    assert!(!rule.complies(&base()));
}

#[test]
fn test_name_regex() {
    let rule = NameRegexRule::new("^Der", NameTarget::Name).unwrap();
    assert!(rule.complies(&derived()));
    assert!(!rule.complies(&base()));
    assert_eq!(rule.pattern(), "^Der");
}

#[test]
fn test_name_regex_does_not_see_namespace() {
    let rule = NameRegexRule::new("tests", NameTarget::Name).unwrap();
    assert!(!rule.complies(&derived()));

    let rule = NameRegexRule::new("tests::Derived$", NameTarget::FullName).unwrap();
    assert!(rule.complies(&derived()));
}

#[test]
fn test_full_name_regex_undefined_is_non_match() {
    let rule = NameRegexRule::new(".*", NameTarget::FullName).unwrap();
    let parameter = TypeInfo::of::<Base>().generic_parameter();
    assert!(!rule.complies(&parameter));
}

#[test]
fn test_invalid_pattern_fails_eagerly() {
    let err = NameRegexRule::new("(unclosed", NameTarget::Name).unwrap_err();
    match err {
        FinderError::InvalidPattern { pattern, .. } => assert_eq!(pattern, "(unclosed"),
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn test_namespace_is_exact() {
    let models = TypeInfo::new(TypeKey::of::<Base>(), "Base").with_namespace("App.Models");
    let sub = TypeInfo::new(TypeKey::of::<Derived>(), "Derived").with_namespace("App.Models.Sub");

    let rule = InNamespaceRule::new("App.Models");
    assert!(rule.complies(&models));
    assert!(!rule.complies(&sub));
}

#[test]
fn test_namespace_absent() {
    let global = TypeInfo::new(TypeKey::of::<Base>(), "Base");

    assert!(!InNamespaceRule::new("app").complies(&global));
    assert!(InNamespaceRule::new("").complies(&global));
}

#[test]
fn test_parameterless_constructor() {
    let rule = ParameterlessConstructorRule;
    assert!(rule.complies(&base()));
    assert!(!rule.complies(&other()));

    let abstract_ctor = TypeInfo::of::<Other>().constructible().abstract_type();
    assert!(!rule.complies(&abstract_ctor));

    let interface = shape().constructible();
    assert_eq!(interface.kind(), TypeKind::Interface);
    assert!(!rule.complies(&interface));
}

#[test]
fn test_fn_rule() {
    let rule = FnRule::new(|t: &dyn TypeDescriptor| t.name().len() == 4);
    assert!(rule.complies(&base()));
    assert!(!rule.complies(&derived()));
}

#[test]
fn test_chain_is_conjunction() {
    let first = RuleChain::combine(None, Box::new(InheritanceRule::new(shape().key())));
    let chain = RuleChain::combine(
        Some(first),
        Box::new(NameRegexRule::new("^B", NameTarget::Name).unwrap()),
    );

    assert!(chain.complies(&base()));
    assert!(!chain.complies(&derived()));
    assert!(!chain.complies(&other()));
    assert_eq!(chain.len(), 2);
}

#[test]
fn test_chain_evaluates_in_append_order_and_short_circuits() {
    let calls = Arc::new(AtomicUsize::new(0));
    let counter = calls.clone();

    let first = RuleChain::combine(None, Box::new(FnRule::new(|_| false)));
    let chain = RuleChain::combine(
        Some(first),
        Box::new(FnRule::new(move |_| {
            counter.fetch_add(1, Ordering::SeqCst);
            true
        })),
    );

    assert!(!chain.complies(&base()));
    assert_eq!(calls.load(Ordering::SeqCst), 0);
}

#[test]
fn test_chain_is_persistent() {
    let shared = RuleChain::combine(None, Box::new(ParameterlessConstructorRule));
    let a = RuleChain::combine(
        Some(shared.clone()),
        Box::new(ExcludeTypesRule::new([TypeKey::of::<Base>()])),
    );
    let b = RuleChain::combine(
        Some(shared.clone()),
        Box::new(ExcludeTypesRule::new([TypeKey::of::<Derived>()])),
    );

    assert_eq!(shared.len(), 1);
    assert!(shared.complies(&base()));
    assert!(!a.complies(&base()));
    assert!(b.complies(&base()));
    assert!(Arc::ptr_eq(a.previous().unwrap(), &shared));
}

#[test]
fn test_chain_describe_lists_rules_in_order() {
    let first = RuleChain::combine(None, Box::new(InNamespaceRule::new("app")));
    let chain = RuleChain::combine(Some(first), Box::new(ParameterlessConstructorRule));

    assert_eq!(
        chain.describe(),
        "in_namespace(app) && parameterless_constructor"
    );
    assert_eq!(chain.rules().len(), 2);
}
