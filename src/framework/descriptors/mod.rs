//! Built-in descriptors for all supported frameworks

mod django;
mod expo;
mod flask;
mod nextjs;

pub use django::DjangoDescriptor;
pub use expo::ExpoDescriptor;
pub use flask::FlaskDescriptor;
pub use nextjs::NextJsDescriptor;
