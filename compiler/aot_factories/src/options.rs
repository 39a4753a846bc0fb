//! Generator options.
//!
//! Each enabled option turns into one system-property assignment at the top of
//! the registry's static initializer, so the runtime sees the flag before any
//! factory is registered.

use std::fmt;

/// Error when parsing generator options from arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OptionsError {
    /// The argument is not a known option.
    UnknownFlag(String),
    /// The option was given a value that is not a boolean.
    InvalidValue { flag: String, value: String },
}

impl fmt::Display for OptionsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OptionsError::UnknownFlag(flag) => write!(f, "unknown generator option '{flag}'"),
            OptionsError::InvalidValue { flag, value } => write!(
                f,
                "invalid value '{value}' for '{flag}' (expected true or false)"
            ),
        }
    }
}

impl std::error::Error for OptionsError {}

/// A system property the generated registry sets before registering factories.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct PropertyDirective {
    pub key: &'static str,
    pub value: &'static str,
}

impl PropertyDirective {
    /// Render as a static-block statement.
    pub fn statement(&self) -> String {
        format!("System.setProperty(\"{}\", \"{}\")", self.key, self.value)
    }
}

const REMOVE_YAML: PropertyDirective = PropertyDirective {
    key: "spring.native.remove-yaml-support",
    value: "true",
};

const REMOVE_XML: PropertyDirective = PropertyDirective {
    key: "spring.xml.ignore",
    value: "true",
};

const REMOVE_SPEL: PropertyDirective = PropertyDirective {
    key: "spring.spel.ignore",
    value: "true",
};

/// Options controlling the generated registry.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct GeneratorOptions {
    /// Drop YAML configuration support from the target application.
    pub remove_yaml_support: bool,
    /// Drop XML bean definition support.
    pub remove_xml_support: bool,
    /// Drop expression language support.
    pub remove_spel_support: bool,
}

impl GeneratorOptions {
    /// Parse options from command-line style arguments.
    ///
    /// Accepts `--remove-yaml-support`, `--remove-xml-support`, and
    /// `--remove-spel-support`, each optionally followed by `=true` or
    /// `=false`. Later arguments override earlier ones.
    pub fn parse_args<I, S>(args: I) -> Result<Self, OptionsError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut options = GeneratorOptions::default();

        for arg in args {
            let arg = arg.as_ref();
            let (flag, value) = match arg.split_once('=') {
                Some((flag, value)) => (flag, Some(value)),
                None => (arg, None),
            };

            let target = match flag {
                "--remove-yaml-support" => &mut options.remove_yaml_support,
                "--remove-xml-support" => &mut options.remove_xml_support,
                "--remove-spel-support" => &mut options.remove_spel_support,
                _ => return Err(OptionsError::UnknownFlag(arg.to_string())),
            };

            *target = match value {
                None => true,
                Some(v) => parse_bool(v).ok_or_else(|| OptionsError::InvalidValue {
                    flag: flag.to_string(),
                    value: v.to_string(),
                })?,
            };
        }

        Ok(options)
    }

    /// Property directives for the enabled options, in a fixed order.
    pub fn directives(&self) -> Vec<PropertyDirective> {
        [
            (self.remove_yaml_support, REMOVE_YAML),
            (self.remove_xml_support, REMOVE_XML),
            (self.remove_spel_support, REMOVE_SPEL),
        ]
        .into_iter()
        .filter_map(|(enabled, directive)| enabled.then_some(directive))
        .collect()
    }
}

fn parse_bool(s: &str) -> Option<bool> {
    match s {
        "true" => Some(true),
        "false" => Some(false),
        _ => None,
    }
}
