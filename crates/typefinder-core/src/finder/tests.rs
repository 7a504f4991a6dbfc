//! Tests for query building and enumeration.

use std::cell::Cell;

use super::*;
use crate::descriptor::{GenericDef, Module, ModuleInfo, TypeDescriptor, TypeInfo, TypeKey};
use crate::error::FinderError;

trait Handler {}
struct Base;
struct Derived;
struct A;
struct B;
struct C;
struct D;
struct Store<T>(T);

fn names<'a>(types: impl IntoIterator<Item = &'a TypeInfo>) -> Vec<&'a str> {
    types.into_iter().map(|t| t.name()).collect()
}

fn letters() -> (ModuleInfo, ModuleInfo) {
    let m1 = ModuleInfo::new("m1")
        .with_type(TypeInfo::of::<A>())
        .with_type(TypeInfo::of::<B>());
    let m2 = ModuleInfo::new("m2")
        .with_type(TypeInfo::of::<C>())
        .with_type(TypeInfo::of::<D>());
    (m1, m2)
}

// Counts how often the declared types are requested.
struct CountingModule {
    inner: ModuleInfo,
    requests: Cell<usize>,
}

impl Module for CountingModule {
    type Type = TypeInfo;

    fn name(&self) -> &str {
        self.inner.name()
    }

    fn declared_types(&self) -> &[TypeInfo] {
        self.requests.set(self.requests.get() + 1);
        self.inner.declared_types()
    }
}

#[test]
fn test_order_is_preserved_across_modules() {
    let (m1, m2) = letters();
    let found = names(TypeFinder::new([&m1, &m2]));
    assert_eq!(found, vec!["A", "B", "C", "D"]);
}

#[test]
fn test_module_order_follows_input() {
    let (m1, m2) = letters();
    let found = names(TypeFinder::new([&m2, &m1]));
    assert_eq!(found, vec!["C", "D", "A", "B"]);
}

#[test]
fn test_excluding() {
    let module = ModuleInfo::new("app")
        .with_type(TypeInfo::of::<A>())
        .with_type(TypeInfo::of::<B>());
    let found = names(TypeFinder::new([&module]).excluding_type::<A>());
    assert_eq!(found, vec!["B"]);
}

#[test]
fn test_that_inherit_skips_base() {
    let base = TypeInfo::of::<Base>();
    let module = ModuleInfo::new("app")
        .with_type(base.clone())
        .with_type(TypeInfo::of::<Derived>().extends(&base));

    let found = names(TypeFinder::new([&module]).that_inherit(base.key()));
    assert_eq!(found, vec!["Derived"]);
}

#[test]
fn test_that_inherit_interface() {
    let handler = TypeInfo::of::<dyn Handler>().interface();
    let module = ModuleInfo::new("app")
        .with_type(handler.clone())
        .with_type(TypeInfo::of::<A>().implements(&handler))
        .with_type(TypeInfo::of::<B>())
        .with_type(TypeInfo::of::<C>().implements(&handler));

    let found = names(TypeFinder::new([&module]).that_inherit_type::<dyn Handler>());
    assert_eq!(found, vec!["A", "C"]);
}

#[test]
fn test_that_inherit_generic_type() {
    let store = TypeInfo::of::<Store<u8>>();
    let module = ModuleInfo::new("app")
        .with_type(store.clone())
        .with_type(TypeInfo::of::<A>().extends(&store))
        .with_type(TypeInfo::of::<B>());

    let found = names(
        TypeFinder::new([&module]).that_inherit_generic_type(GenericDef::of::<Store<()>>()),
    );
    assert_eq!(found, vec!["A"]);
}

#[test]
fn test_namespace_exactness() {
    let module = ModuleInfo::new("app")
        .with_type(TypeInfo::new(TypeKey::of::<A>(), "A").with_namespace("App.Models"))
        .with_type(TypeInfo::new(TypeKey::of::<B>(), "B").with_namespace("App.Models.Sub"));

    let found = names(TypeFinder::new([&module]).in_namespace("App.Models"));
    assert_eq!(found, vec!["A"]);
}

#[test]
fn test_name_patterns() {
    let (m1, m2) = letters();
    let found = names(
        TypeFinder::new([&m1, &m2])
            .whose_name_matches("^[AC]$")
            .unwrap(),
    );
    assert_eq!(found, vec!["A", "C"]);

    let found = names(
        TypeFinder::new([&m1, &m2])
            .whose_full_name_matches(r"finder::tests::D$")
            .unwrap(),
    );
    assert_eq!(found, vec!["D"]);
}

#[test]
fn test_invalid_pattern_is_rejected_at_configuration() {
    let (m1, _) = letters();
    let err = TypeFinder::new([&m1]).whose_name_matches("[").unwrap_err();
    assert!(matches!(err, FinderError::InvalidPattern { .. }));
}

#[test]
fn test_parameterless_constructor() {
    let module = ModuleInfo::new("app")
        .with_type(TypeInfo::of::<A>().constructible())
        .with_type(TypeInfo::of::<B>())
        .with_type(TypeInfo::of::<C>().constructible().abstract_type());

    let found = names(TypeFinder::new([&module]).with_parameterless_constructor());
    assert_eq!(found, vec!["A"]);
}

#[test]
fn test_rules_are_conjunctive() {
    let handler = TypeInfo::of::<dyn Handler>().interface();
    let module = ModuleInfo::new("app")
        .with_type(TypeInfo::of::<A>().implements(&handler).constructible())
        .with_type(TypeInfo::of::<B>().implements(&handler))
        .with_type(TypeInfo::of::<C>().constructible())
        .with_type(TypeInfo::of::<D>().implements(&handler).constructible());

    let query = TypeFinder::new([&module])
        .that_inherit(handler.key())
        .with_parameterless_constructor()
        .excluding_type::<D>()
        .build();

    assert_eq!(query.rule_count(), 3);
    assert_eq!(names(&query), vec!["A"]);
}

#[test]
fn test_conflicting_rules_match_nothing() {
    let module = ModuleInfo::new("app")
        .with_type(TypeInfo::new(TypeKey::of::<A>(), "A").with_namespace("x"))
        .with_type(TypeInfo::new(TypeKey::of::<B>(), "B").with_namespace("y"));

    let query = TypeFinder::new([&module])
        .in_namespace("x")
        .in_namespace("y")
        .build();
    assert_eq!(query.count_matches(), 0);
}

#[test]
fn test_custom_filter() {
    let (m1, m2) = letters();
    let found = names(TypeFinder::new([&m1, &m2]).filter(|t| t.name() != "B"));
    assert_eq!(found, vec!["A", "C", "D"]);
}

#[test]
fn test_re_enumeration_is_idempotent() {
    let (m1, m2) = letters();
    let query = TypeFinder::new([&m1, &m2]).excluding_type::<C>().build();

    let first = names(&query);
    let second = names(&query);
    assert_eq!(first, vec!["A", "B", "D"]);
    assert_eq!(first, second);

    let cloned = query.clone();
    assert_eq!(names(cloned), first);
}

#[test]
fn test_empty_module_list() {
    let modules: Vec<&ModuleInfo> = Vec::new();
    let query = TypeFinder::new(modules)
        .that_inherit_type::<Base>()
        .in_namespace("anything")
        .build();

    assert_eq!(query.iter().next(), None);
    assert_eq!(query.first(), None);
    assert!(query.modules().is_empty());
}

#[test]
fn test_empty_module() {
    let empty = ModuleInfo::new("empty");
    let (m1, _) = letters();
    let found = names(TypeFinder::new([&empty, &m1, &empty]));
    assert_eq!(found, vec!["A", "B"]);
}

#[test]
fn test_enumeration_is_lazy() {
    let first = CountingModule {
        inner: letters().0,
        requests: Cell::new(0),
    };
    let second = CountingModule {
        inner: letters().1,
        requests: Cell::new(0),
    };

    let query = TypeFinder::new([&first, &second]).build();
    assert_eq!(first.requests.get(), 0);

    let mut iter = query.iter();
    assert_eq!(iter.next().map(|t| t.name()), Some("A"));
    assert_eq!(first.requests.get(), 1);
    assert_eq!(second.requests.get(), 0);

    assert_eq!(iter.by_ref().count(), 3);
    assert_eq!(second.requests.get(), 1);

    assert_eq!(iter.next(), None);
    assert_eq!(query.count_matches(), 4);
    assert_eq!(first.requests.get(), 2);
    assert_eq!(second.requests.get(), 2);
}

#[test]
fn test_no_rules_accepts_everything() {
    let (m1, m2) = letters();
    let finder = TypeFinder::new([&m1, &m2]);
    assert_eq!(finder.rule_count(), 0);
    assert_eq!(finder.modules().len(), 2);

    let query = finder.build();
    assert!(query.chain().is_none());
    assert_eq!(query.count_matches(), 4);
}
