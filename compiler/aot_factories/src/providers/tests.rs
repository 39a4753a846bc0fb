use super::*;
use aot_ir::{ClassName, CodeBlock, MethodDecl, TypeName};
use pretty_assertions::assert_eq;
use proptest::prelude::*;

fn accessor(name: &str) -> MethodDecl {
    MethodDecl::new(name)
        .with_modifiers(Modifiers::PUBLIC | Modifiers::STATIC)
        .returns(TypeName::Class(ClassName::new("java.lang", "Object")))
        .with_body(CodeBlock::of("return null"))
}

fn method_names(ty: &TypeDecl) -> Vec<&str> {
    ty.methods().iter().map(MethodDecl::name).collect()
}

#[test]
fn test_default_holder_shape() {
    let holder = FactoryProviderRegistry::default_holder();
    assert_eq!(holder.name(), "_FactoryProvider");
    assert_eq!(holder.modifiers(), Modifiers::PUBLIC | Modifiers::ABSTRACT);
    assert!(holder.has_no_members());
}

#[test]
fn test_get_does_not_register() {
    let registry = FactoryProviderRegistry::new();
    let holder = registry.get("pkg.a");

    assert_eq!(holder.as_ref(), &FactoryProviderRegistry::default_holder());
    assert!(!registry.contains("pkg.a"));
    assert!(registry.all().is_empty());
}

#[test]
fn test_get_returns_updated_holder() {
    let mut registry = FactoryProviderRegistry::new();
    registry.update("pkg.a", |b| {
        b.add_method(accessor("one"));
    });

    let holder = registry.get("pkg.a");
    assert_eq!(method_names(&holder), ["one"]);
    assert!(matches!(holder, Cow::Borrowed(_)));
}

#[test]
fn test_updates_compose_in_order() {
    let mut registry = FactoryProviderRegistry::new();
    registry.update("pkg.a", |b| {
        b.add_method(accessor("first"));
    });
    registry.update("pkg.a", |b| {
        // Second mutator sees what the first one wrote.
        assert!(b.has_method("first"));
        b.add_method(accessor("second"));
    });

    assert_eq!(registry.len(), 1);
    assert_eq!(method_names(registry.all()[0].ty()), ["first", "second"]);
}

#[test]
fn test_update_order_is_observable() {
    let mut ab = FactoryProviderRegistry::new();
    ab.update("p", |b| {
        b.add_method(accessor("a"));
    });
    ab.update("p", |b| {
        b.add_method(accessor("b"));
    });

    let mut ba = FactoryProviderRegistry::new();
    ba.update("p", |b| {
        b.add_method(accessor("b"));
    });
    ba.update("p", |b| {
        b.add_method(accessor("a"));
    });

    assert_eq!(method_names(ab.all()[0].ty()), ["a", "b"]);
    assert_eq!(method_names(ba.all()[0].ty()), ["b", "a"]);
}

#[test]
fn test_update_replaces_wholesale() {
    let mut registry = FactoryProviderRegistry::new();
    registry.update("pkg.a", |b| {
        b.add_method(accessor("kept"));
    });
    registry.update("pkg.a", |b| {
        let mut fresh = TypeDecl::class_builder("_FactoryProvider");
        fresh.add_method(accessor("replacement"));
        *b = fresh;
    });

    let holder = registry.get("pkg.a");
    assert_eq!(method_names(&holder), ["replacement"]);
    assert_eq!(holder.modifiers(), Modifiers::empty());
}

#[test]
fn test_noop_update_registers_default() {
    let mut registry = FactoryProviderRegistry::new();
    registry.update("pkg.empty", |_| {});

    assert!(registry.contains("pkg.empty"));
    assert_eq!(registry.all()[0].ty(), &FactoryProviderRegistry::default_holder());
}

#[test]
fn test_registry_order_is_first_update_order() {
    let mut registry = FactoryProviderRegistry::new();
    for pkg in ["pkg.c", "pkg.a", "pkg.b", "pkg.a"] {
        registry.update(pkg, |b| {
            b.add_method(accessor("m"));
        });
    }

    let packages: Vec<&str> = registry.all().iter().map(ProviderHolder::package).collect();
    assert_eq!(packages, ["pkg.c", "pkg.a", "pkg.b"]);
    assert_eq!(registry.all()[1].ty().methods().len(), 2);
}

#[test]
fn test_all_is_idempotent() {
    let mut registry = FactoryProviderRegistry::new();
    registry.update("pkg.a", |b| {
        b.add_method(accessor("x"));
    });
    let _ = registry.get("pkg.unrelated");

    let first = registry.all().to_vec();
    let second = registry.all().to_vec();
    assert_eq!(first, second);
}

proptest! {
    #[test]
    fn queried_packages_never_appear_in_all(
        updated in proptest::collection::vec("[a-c]", 0..8),
        queried in proptest::collection::vec("[d-f]", 0..8),
    ) {
        let mut registry = FactoryProviderRegistry::new();
        for pkg in &updated {
            registry.update(pkg, |b| {
                b.add_method(accessor("m"));
            });
        }
        for pkg in &queried {
            let holder = registry.get(pkg);
            prop_assert!(holder.has_no_members());
        }

        for pkg in &queried {
            prop_assert!(!registry.contains(pkg));
        }
        let mut expected: Vec<&str> = Vec::new();
        for pkg in &updated {
            if !expected.contains(&pkg.as_str()) {
                expected.push(pkg);
            }
        }
        let actual: Vec<&str> = registry.all().iter().map(ProviderHolder::package).collect();
        prop_assert_eq!(actual, expected);
    }
}
