mod allowed_headers;
mod allowed_methods;
pub mod constants;
mod context;
mod cors;
mod exposed_headers;
mod header_builder;
mod header_list;
mod headers;
pub mod middleware;
mod options;
mod origin;
mod result;
mod util;

pub use allowed_headers::AllowedHeaders;
pub use allowed_methods::AllowedMethods;
pub use context::RequestContext;
pub use cors::Cors;
pub use exposed_headers::ExposedHeaders;
pub use header_list::HeaderList;
pub use headers::Headers;
pub use middleware::{CorsHandler, Exchange, Handler};
pub use options::{CorsOptions, ValidationError};
pub use origin::{Origin, OriginDecision, OriginValidatorFn};
pub use result::{CorsDecision, CorsRejection, RejectionReason};
pub use util::{canonical_header_name, equals_ignore_case, normalize_lower};
