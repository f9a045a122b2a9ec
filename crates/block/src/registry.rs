//! In-process stylesheet collection.
//!
//! The [`StyleRegistry`] plays the part of a CSS-in-JS engine: it takes
//! resolved declarations, gives each distinct one a class name derived from
//! its content, and accumulates the resulting rules into a stylesheet.
//! Identical declarations share a class, so registering the same style
//! twice (e.g. on every render) adds nothing.

use std::borrow::Cow;

use block_css::{Declaration, ResolveOptions, Theme};
use indexmap::IndexMap;
use log::debug;
use xxhash_rust::xxh3::xxh3_64_with_seed;

use crate::Result;

/// Configuration for a [`StyleRegistry`].
#[derive(Debug, Clone, PartialEq)]
pub struct RegistryConfig {
    /// Prefix for generated class names (`{prefix}-{hash}`).
    pub class_prefix: String,
    /// Options used when blocks resolve their style props.
    pub resolve: ResolveOptions,
    /// Theme applied to every declaration before registration.
    pub theme: Option<Theme>,
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self {
            class_prefix: "b".to_string(),
            resolve: ResolveOptions::default(),
            theme: None,
        }
    }
}

impl RegistryConfig {
    pub fn class_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.class_prefix = prefix.into();
        self
    }

    pub fn resolve_options(mut self, options: ResolveOptions) -> Self {
        self.resolve = options;
        self
    }

    pub fn theme(mut self, theme: Theme) -> Self {
        self.theme = Some(theme);
        self
    }
}

/// Hash used for class names, seeded so collisions can be re-rolled.
type ClassHasher = fn(&[u8], u64) -> u64;

#[derive(Debug, Clone)]
struct Rule {
    /// Rule body rendered against `&`, compared on hash collisions.
    body: String,
    css: String,
}

/// Collects style rules keyed by generated class name.
#[derive(Debug, Clone)]
pub struct StyleRegistry {
    config: RegistryConfig,
    rules: IndexMap<String, Rule>,
    hasher: ClassHasher,
}

impl Default for StyleRegistry {
    fn default() -> Self {
        Self::new(RegistryConfig::default())
    }
}

impl StyleRegistry {
    pub fn new(config: RegistryConfig) -> Self {
        Self {
            config,
            rules: IndexMap::new(),
            hasher: xxh3_64_with_seed,
        }
    }

    #[cfg(test)]
    fn with_hasher(config: RegistryConfig, hasher: ClassHasher) -> Self {
        Self {
            hasher,
            ..Self::new(config)
        }
    }

    pub fn config(&self) -> &RegistryConfig {
        &self.config
    }

    /// Registers a declaration and returns its class name.
    ///
    /// Declarations that render no CSS need no rule and get no class. The
    /// configured theme, if any, is applied first, so an unknown `$token`
    /// fails here, as does a value that would break out of its rule.
    pub fn register(&mut self, declaration: &Declaration) -> Result<Option<String>> {
        let declaration = match &self.config.theme {
            Some(theme) => Cow::Owned(theme.apply(declaration)?),
            None => Cow::Borrowed(declaration),
        };
        declaration.validate()?;

        // Render the body against a fixed selector so the class name only
        // depends on the declaration's content.
        let body = declaration.to_css("&");
        if body.is_empty() {
            return Ok(None);
        }

        // A class is shared only by identical bodies. On a hash collision the
        // next seed is tried.
        let mut seed = 0;
        let class_name = loop {
            let hash = (self.hasher)(body.as_bytes(), seed);
            let class_name = format!("{}-{:016x}", self.config.class_prefix, hash);
            match self.rules.get(&class_name) {
                Some(rule) if rule.body == body => break class_name,
                Some(_) => {
                    debug!("class name collision on .{}, rehashing", class_name);
                    seed += 1;
                }
                None => {
                    debug!("registering style rule .{}", class_name);
                    let css = declaration.to_css(&format!(".{}", class_name));
                    self.rules.insert(class_name.clone(), Rule { body, css });
                    break class_name;
                }
            }
        };

        Ok(Some(class_name))
    }

    pub fn contains(&self, class_name: &str) -> bool {
        self.rules.contains_key(class_name)
    }

    /// The CSS text for one registered class.
    pub fn rule(&self, class_name: &str) -> Option<&str> {
        self.rules.get(class_name).map(|rule| rule.css.as_str())
    }

    /// All registered rules, in registration order.
    pub fn stylesheet(&self) -> String {
        self.rules.values().map(|rule| rule.css.as_str()).collect()
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}
