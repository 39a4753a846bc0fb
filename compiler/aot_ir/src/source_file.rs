//! A type declaration placed in its package.

use std::path::PathBuf;

use crate::TypeDecl;

/// Unit handed to the artifact emitter: one top-level type and its package.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "cache", derive(serde::Serialize, serde::Deserialize))]
pub struct SourceFile {
    package: String,
    ty: TypeDecl,
}

impl SourceFile {
    pub fn new(package: impl Into<String>, ty: TypeDecl) -> Self {
        SourceFile {
            package: package.into(),
            ty,
        }
    }

    pub fn package(&self) -> &str {
        &self.package
    }

    pub fn ty(&self) -> &TypeDecl {
        &self.ty
    }

    /// Dotted name of the declared type.
    pub fn qualified_name(&self) -> String {
        if self.package.is_empty() {
            self.ty.name().to_string()
        } else {
            format!("{}.{}", self.package, self.ty.name())
        }
    }

    /// Location of the file relative to a source root: `a/b/Type.java`.
    pub fn relative_path(&self) -> PathBuf {
        let mut path: PathBuf = self.package.split('.').filter(|s| !s.is_empty()).collect();
        path.push(format!("{}.java", self.ty.name()));
        path
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    #[test]
    fn test_relative_path() {
        let ty = TypeDecl::class_builder("Foo").build();
        let file = SourceFile::new("org.springframework.aot", ty);
        assert_eq!(
            file.relative_path(),
            Path::new("org").join("springframework").join("aot").join("Foo.java")
        );
        assert_eq!(file.qualified_name(), "org.springframework.aot.Foo");
    }

    #[test]
    fn test_default_package() {
        let file = SourceFile::new("", TypeDecl::class_builder("Foo").build());
        assert_eq!(file.relative_path(), Path::new("Foo.java"));
        assert_eq!(file.qualified_name(), "Foo");
    }
}
