use super::*;
use pretty_assertions::assert_eq;

#[test]
fn test_parse_top_level() {
    let name = ClassName::parse("pkg.formatters.YamlFormatter");
    assert_eq!(
        name,
        Ok(ClassName::new("pkg.formatters", "YamlFormatter"))
    );
}

#[test]
fn test_parse_nested_type() {
    let Ok(name) = ClassName::parse("java.util.Map.Entry") else {
        panic!("expected java.util.Map.Entry to parse");
    };
    assert_eq!(name.package(), "java.util");
    assert_eq!(name.simple_names(), ["Map".to_string(), "Entry".to_string()]);
    assert_eq!(name.simple_name(), "Entry");
    assert!(name.is_nested());
}

#[test]
fn test_parse_default_package() {
    assert_eq!(ClassName::parse("Formatter"), Ok(ClassName::new("", "Formatter")));
}

#[test]
fn test_parse_errors() {
    assert_eq!(ClassName::parse(""), Err(ModelError::EmptyName));
    assert_eq!(
        ClassName::parse("pkg..Type"),
        Err(ModelError::InvalidSegment {
            name: "pkg..Type".to_string(),
            segment: String::new(),
        })
    );
    assert_eq!(
        ClassName::parse("pkg.1Type"),
        Err(ModelError::InvalidSegment {
            name: "pkg.1Type".to_string(),
            segment: "1Type".to_string(),
        })
    );
    assert_eq!(
        ClassName::parse("pkg.lower"),
        Err(ModelError::MissingSimpleName {
            name: "pkg.lower".to_string(),
        })
    );
}

#[test]
fn test_canonical_and_reflection_names() {
    let inner = ClassName::new("a.b", "Outer").nested("Inner");
    assert_eq!(inner.canonical_name(), "a.b.Outer.Inner");
    assert_eq!(inner.reflection_name(), "a.b.Outer$Inner");
    assert_eq!(inner.to_string(), "a.b.Outer.Inner");

    let bare = ClassName::new("", "Top");
    assert_eq!(bare.canonical_name(), "Top");
}

#[test]
fn test_type_name_display() {
    let class = ClassName::new("java.lang", "Class");
    let supplier = ClassName::new("java.util.function", "Supplier");
    let map = ClassName::new("org.springframework.util", "MultiValueMap");

    let ty = TypeName::parameterized(
        map,
        [
            TypeName::parameterized(class, [TypeName::Wildcard]),
            TypeName::parameterized(supplier, [ClassName::new("java.lang", "Object").into()]),
        ],
    );
    assert_eq!(
        ty.to_string(),
        "org.springframework.util.MultiValueMap<java.lang.Class<?>, \
         java.util.function.Supplier<java.lang.Object>>"
    );
    assert_eq!(TypeName::Void.to_string(), "void");
}

#[test]
fn test_model_error_display() {
    let err = ModelError::InvalidSegment {
        name: "a..B".to_string(),
        segment: String::new(),
    };
    assert_eq!(err.to_string(), "invalid segment '' in type name 'a..B'");
}

#[test]
#[cfg(debug_assertions)]
#[should_panic(expected = "empty simple name")]
fn test_new_rejects_empty_simple_name() {
    let _ = ClassName::new("p", "");
}

#[test]
#[cfg(debug_assertions)]
#[should_panic(expected = "empty simple name")]
fn test_nested_rejects_empty_simple_name() {
    let _ = ClassName::new("p", "Outer").nested("");
}
