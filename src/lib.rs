//! The `scratchstack_aws_s3_resource` crate builds the `CanonicalizedResource` component of the legacy
//! AWS S3 request signature. This *is not* a signing library: it does not compute the string to sign,
//! HMAC, or Base64 output, and it does not canonicalize `x-amz-*` headers.
//!
//! The resource depends on how the bucket is addressed. For virtual-hosted-style requests
//! (`https://bucket.s3.amazonaws.com/key`) the bucket appears only in the `Host` header, so it is
//! prepended to the path. For path-style requests (`https://s3.amazonaws.com/bucket/key`) the path
//! already names the bucket and is used unchanged.
//!
//! ## Example
//! ```rust
//! use scratchstack_aws_s3_resource::{canonicalize, AddressingMode, ResourceRequest, S3Endpoint, SubResource};
//!
//! // Virtual-hosted style: the bucket is prepended.
//! assert_eq!(canonicalize(AddressingMode::VirtualHosted, "bugait", "/shash"), "/bugait/shash");
//!
//! // Path style: the path is used as-is.
//! assert_eq!(canonicalize(AddressingMode::PathStyle, "bugait", "/bugait/shash"), "/bugait/shash");
//!
//! // An endpoint derives hosts and paths consistently with its addressing mode.
//! let endpoint = S3Endpoint::virtual_hosted();
//! assert_eq!(endpoint.host_for_bucket("bugait"), "bugait.s3.amazonaws.com");
//! let path = endpoint.request_path("bugait", "shash");
//! assert_eq!(endpoint.canonicalized_resource("bugait", &path), "/bugait/shash");
//!
//! // Sub-resources are appended in name order.
//! let resource = ResourceRequest::builder()
//!     .bucket("bugait")
//!     .path("/shash")
//!     .subresource(SubResource::VersionId, Some("3"))
//!     .subresource(SubResource::Acl, None)
//!     .build()
//!     .unwrap()
//!     .canonicalize();
//! assert_eq!(resource, "/bugait/shash?acl&versionId=3");
//! ```
#![warn(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![warn(rustdoc::missing_crate_level_docs)]

mod constants;
mod endpoint;
mod error;
mod resource;
mod validate;

pub use crate::{
    endpoint::{host_from_bucket, S3Endpoint, S3EndpointBuilder},
    error::ResourceError,
    resource::{
        canonicalize, try_canonicalize, AddressingMode, CanonicalizedResource, ResourceRequest, ResourceRequestBuilder,
        SubResource,
    },
    validate::{validate_bucket_name, validate_path},
};

#[cfg(feature = "unstable")]
pub use crate::validate::is_ipv4_like;
