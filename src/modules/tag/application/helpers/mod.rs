mod tag_resolver;

pub use tag_resolver::TagResolver;
