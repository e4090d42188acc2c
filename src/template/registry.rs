//! Tag registration and name resolution (spec.md §4.B).
//!
//! Tags are grouped into categories (`text`, `path`, `meta`, ...), each
//! holding an ordered map from bare tag name to the factory that builds it.
//! A call site may qualify a name with its category (`%text.Upper()`) or
//! leave it bare and let the registry search every category, raising
//! `BindError::AmbiguousTag` if more than one category defines that name.

use indexmap::IndexMap;

use crate::template::ast::{Pattern, PatternElement};
use crate::template::bound::{BoundElement, BoundPattern};
use crate::template::error::{BindError, RegistrationError};
use crate::template::tag::{RequireContext, TagArgs, TagFactory};

/// A named group of tag factories, e.g. `text`, `path`, `meta`
pub struct Category {
    name: String,
    factories: IndexMap<String, TagFactory>,
}

impl Category {
    fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            factories: IndexMap::new(),
        }
    }
}

/// The set of tags known to a run, assembled at startup from the built-in
/// set (`template::builtin::register_builtins`)
#[derive(Default)]
pub struct Registry {
    categories: IndexMap<String, Category>,
}

fn is_valid_tag_name(name: &str) -> bool {
    let mut chars = name.chars();
    matches!(chars.next(), Some(c) if c.is_ascii_alphabetic())
        && chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `factory` under `name` within `category`, creating the
    /// category on first use.
    pub fn register(
        &mut self,
        category: &str,
        name: &str,
        factory: TagFactory,
    ) -> Result<(), RegistrationError> {
        if !is_valid_tag_name(name) {
            return Err(RegistrationError::InvalidTagName(name.to_string()));
        }
        let cat = self
            .categories
            .entry(category.to_string())
            .or_insert_with(|| Category::new(category));
        if cat.factories.contains_key(name) {
            return Err(RegistrationError::DuplicateTag(name.to_string(), category.to_string()));
        }
        cat.factories.insert(name.to_string(), factory);
        Ok(())
    }

    /// Resolve a (possibly category-qualified) tag name to its factory.
    fn resolve(&self, category: Option<&str>, name: &str) -> Result<&TagFactory, BindError> {
        if let Some(category) = category {
            return self
                .categories
                .get(category)
                .and_then(|cat| cat.factories.get(name))
                .ok_or_else(|| BindError::UnknownTag { name: name.to_string() });
        }

        let mut matches: Vec<(&str, &TagFactory)> = Vec::new();
        for cat in self.categories.values() {
            if let Some(factory) = cat.factories.get(name) {
                matches.push((cat.name.as_str(), factory));
            }
        }
        match matches.len() {
            0 => Err(BindError::UnknownTag { name: name.to_string() }),
            1 => Ok(matches[0].1),
            _ => Err(BindError::AmbiguousTag {
                name: name.to_string(),
                candidates: matches.into_iter().map(|(cat, _)| cat.to_string()).collect(),
            }),
        }
    }

    /// List every registered tag as `(category, name)`, sorted for stable
    /// `--list-tags` output.
    pub fn list_tags(&self) -> Vec<(String, String)> {
        let mut out: Vec<(String, String)> = self
            .categories
            .values()
            .flat_map(|cat| cat.factories.keys().map(move |name| (cat.name.clone(), name.clone())))
            .collect();
        out.sort();
        out
    }
}

/// Bind an unresolved [`Pattern`] against `registry`, producing a
/// [`BoundPattern`] with every tag placeholder replaced by a configured
/// [`crate::template::tag::Tag`] instance. Contexts are bound recursively,
/// depth-first.
pub fn bind(pattern: &Pattern, registry: &Registry) -> Result<BoundPattern, BindError> {
    let mut elements = Vec::with_capacity(pattern.0.len());
    for element in &pattern.0 {
        elements.push(match element {
            PatternElement::RawText(text) => BoundElement::RawText(text.clone()),
            PatternElement::TagPlaceholder(call) => {
                let factory = registry.resolve(call.category.as_deref(), &call.name)?;
                let args = TagArgs::new(call.args.clone(), call.kwargs.clone());
                let tag = factory.create(args).map_err(|cause| BindError::Configuration {
                    tag_name: call.name.clone(),
                    cause,
                })?;

                match (tag.require_context(), &call.context) {
                    (RequireContext::Required, None) => {
                        return Err(BindError::ContextMissing {
                            tag_name: call.name.clone(),
                        })
                    },
                    (RequireContext::Forbidden, Some(_)) => {
                        return Err(BindError::ContextForbidden {
                            tag_name: call.name.clone(),
                        })
                    },
                    _ => {},
                }

                let context = match &call.context {
                    Some(inner) => Some(bind(inner, registry)?),
                    None => None,
                };

                BoundElement::TagInstance { tag, context }
            },
        });
    }
    Ok(BoundPattern::new(elements))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::template::error::TagEvaluationError;
    use crate::template::parser::parse;
    use crate::template::tag::Tag;
    use crate::filesystem::File;
    use std::path::PathBuf;

    #[derive(Debug, Default)]
    struct NoopTag;
    impl Tag for NoopTag {
        fn require_context(&self) -> RequireContext {
            RequireContext::Optional
        }
        fn configure(&mut self, _args: TagArgs) -> Result<(), String> {
            Ok(())
        }
        fn process(&self, _file: &File, _context: Option<&str>) -> Result<String, TagEvaluationError> {
            Ok("noop".to_string())
        }
    }

    fn test_file() -> File {
        File::new(PathBuf::from("/tmp"), PathBuf::from("a.txt"))
    }

    fn registry_with_noop() -> Registry {
        let mut registry = Registry::new();
        registry
            .register("test", "Noop", TagFactory::FromDefault(|| Box::new(NoopTag)))
            .unwrap();
        registry
    }

    #[test]
    fn binds_known_tag() {
        let registry = registry_with_noop();
        let pattern = parse("%Noop()").unwrap();
        let bound = bind(&pattern, &registry).unwrap();
        assert_eq!(bound.0.len(), 1);
    }

    #[test]
    fn unknown_tag_errors() {
        let registry = registry_with_noop();
        let pattern = parse("%DoesNotExist()").unwrap();
        assert!(matches!(bind(&pattern, &registry), Err(BindError::UnknownTag { .. })));
    }

    #[test]
    fn ambiguous_tag_errors() {
        let mut registry = Registry::new();
        registry.register("a", "Dup", TagFactory::FromDefault(|| Box::new(NoopTag))).unwrap();
        registry.register("b", "Dup", TagFactory::FromDefault(|| Box::new(NoopTag))).unwrap();
        let pattern = parse("%Dup()").unwrap();
        assert!(matches!(bind(&pattern, &registry), Err(BindError::AmbiguousTag { .. })));
    }

    #[test]
    fn category_qualified_disambiguates() {
        let mut registry = Registry::new();
        registry.register("a", "Dup", TagFactory::FromDefault(|| Box::new(NoopTag))).unwrap();
        registry.register("b", "Dup", TagFactory::FromDefault(|| Box::new(NoopTag))).unwrap();
        let pattern = parse("%a.Dup()").unwrap();
        assert!(bind(&pattern, &registry).is_ok());
    }

    #[test]
    fn duplicate_registration_in_category_errors() {
        let mut registry = Registry::new();
        registry.register("a", "Dup", TagFactory::FromDefault(|| Box::new(NoopTag))).unwrap();
        let err = registry
            .register("a", "Dup", TagFactory::FromDefault(|| Box::new(NoopTag)))
            .unwrap_err();
        assert!(matches!(err, RegistrationError::DuplicateTag(..)));
    }

    #[test]
    fn evaluating_noop_smoke() {
        let registry = registry_with_noop();
        let pattern = parse("%Noop()").unwrap();
        let bound = bind(&pattern, &registry).unwrap();
        match &bound.0[0] {
            BoundElement::TagInstance { tag, .. } => {
                assert_eq!(tag.process(&test_file(), None).unwrap(), "noop");
            },
            _ => panic!("expected tag instance"),
        }
    }
}
