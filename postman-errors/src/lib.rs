mod collection;
mod configuration;
mod convert;
mod devproxy_rc;
mod error;
mod errors_document;
mod url;
mod variables;
mod walker;

pub use collection::{
    load_collection, Collection, Folder, Header, Item, RecordedResponse, Request,
    RequestDefinition, Url, Variable,
};
pub use configuration::{ConversionOptions, MalformedBodyPolicy};
pub use convert::{convert, convert_with_options, ConversionReport};
pub use devproxy_rc::{DevProxyRc, ErrorsSection, PluginDescriptor, SectionName, RC_FILE_NAME};
pub use error::Error;
pub use errors_document::{ErrorGroup, ErrorHeader, ErrorRequest, ErrorResponse, ErrorsDocument};
pub use url::{longest_common_prefix, normalize_url};
pub use variables::{resolve_variables, WILDCARD};
pub use walker::{collect_error_groups, extract_error_group};
