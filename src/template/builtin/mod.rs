//! The closed set of built-in tags shipped with this crate.

pub mod meta;
pub mod path;
pub mod text;

use crate::template::registry::Registry;
use crate::template::tag::TagFactory;

/// Register every built-in tag into `registry`. Panics only on a
/// programmer error (duplicate built-in name), never on user input.
pub fn register_builtins(registry: &mut Registry) {
    registry
        .register("text", "Upper", TagFactory::FromDefault(|| Box::new(text::UpperTag)))
        .expect("built-in tag registration must not collide");
    registry
        .register("text", "Lower", TagFactory::FromDefault(|| Box::new(text::LowerTag)))
        .expect("built-in tag registration must not collide");

    registry
        .register("path", "Filename", TagFactory::FromDefault(|| Box::new(path::FilenameTag)))
        .expect("built-in tag registration must not collide");
    registry
        .register("path", "Name", TagFactory::FromDefault(|| Box::new(path::NameTag)))
        .expect("built-in tag registration must not collide");
    registry
        .register("path", "Ext", TagFactory::FromDefault(|| Box::new(path::ExtTag)))
        .expect("built-in tag registration must not collide");
    registry
        .register("path", "Parent", TagFactory::FromDefault(|| Box::new(path::ParentTag)))
        .expect("built-in tag registration must not collide");

    registry
        .register("meta", "Size", TagFactory::FromDefault(|| Box::new(meta::SizeTag)))
        .expect("built-in tag registration must not collide");
    registry
        .register("meta", "Count", TagFactory::FromDefault(|| Box::new(meta::CountTag::default())))
        .expect("built-in tag registration must not collide");
    registry
        .register(
            "meta",
            "SizeUnder",
            TagFactory::FromDefault(|| Box::new(meta::SizeLessThanTag::default())),
        )
        .expect("built-in tag registration must not collide");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn registers_nine_built_in_tags() {
        let mut registry = Registry::new();
        register_builtins(&mut registry);
        assert_eq!(registry.list_tags().len(), 9);
    }
}
