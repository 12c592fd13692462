//! S3 endpoint configuration: deriving hosts and request paths for a bucket.

use {
    crate::{
        constants::*,
        resource::{canonicalize, AddressingMode, CanonicalizedResource},
        ResourceError,
    },
    derive_builder::Builder,
    log::debug,
};

/// An S3 (or S3-compatible) endpoint and the addressing mode used to reach buckets on it.
#[derive(Builder, Clone, Debug, Eq, PartialEq)]
#[builder(build_fn(error = "ResourceError"), derive(Debug))]
pub struct S3Endpoint {
    /// The endpoint hostname, without a bucket label. Defaults to `s3.amazonaws.com`.
    #[builder(setter(into), default = "DEFAULT_S3_HOST_SUFFIX.to_string()")]
    host_suffix: String,

    /// How buckets are addressed on this endpoint. Defaults to virtual-hosted style.
    #[builder(default)]
    addressing_mode: AddressingMode,
}

impl Default for S3Endpoint {
    fn default() -> Self {
        Self::virtual_hosted()
    }
}

impl S3Endpoint {
    /// Create a builder for `S3Endpoint`.
    #[inline(always)]
    pub fn builder() -> S3EndpointBuilder {
        S3EndpointBuilder::default()
    }

    /// The default AWS endpoint using virtual-hosted-style addressing.
    pub fn virtual_hosted() -> Self {
        Self {
            host_suffix: DEFAULT_S3_HOST_SUFFIX.to_string(),
            addressing_mode: AddressingMode::VirtualHosted,
        }
    }

    /// The default AWS endpoint using path-style addressing.
    pub fn path_style() -> Self {
        Self {
            host_suffix: DEFAULT_S3_HOST_SUFFIX.to_string(),
            addressing_mode: AddressingMode::PathStyle,
        }
    }

    /// Retrieve the endpoint hostname.
    #[inline(always)]
    pub fn host_suffix(&self) -> &str {
        &self.host_suffix
    }

    /// Retrieve the addressing mode.
    #[inline(always)]
    pub fn addressing_mode(&self) -> AddressingMode {
        self.addressing_mode
    }

    /// The `Host` header value for requests against `bucket`.
    pub fn host_for_bucket(&self, bucket: &str) -> String {
        match self.addressing_mode {
            AddressingMode::VirtualHosted => format!("{}.{}", bucket, self.host_suffix),
            AddressingMode::PathStyle => self.host_suffix.clone(),
        }
    }

    /// Extract the bucket from a virtual-hosted-style `Host` header value.
    ///
    /// The comparison against the endpoint hostname is case-insensitive and any `:port` is
    /// ignored. Returns `None` if the host is not a subdomain of this endpoint.
    pub fn bucket_from_host<'a>(&self, host: &'a str) -> Option<&'a str> {
        let host = match host.rsplit_once(':') {
            Some((name, port)) if !port.is_empty() && port.bytes().all(|b| b.is_ascii_digit()) => name,
            _ => host,
        };

        // Bucket label(s), a dot, then the endpoint hostname.
        let suffix_len = self.host_suffix.len();
        if host.len() < suffix_len + 2 {
            return None;
        }

        let split = host.len() - suffix_len;
        if !host.is_char_boundary(split) || !host[split..].eq_ignore_ascii_case(&self.host_suffix) {
            return None;
        }

        let bucket = host[..split].strip_suffix('.')?;
        if bucket.is_empty() {
            None
        } else {
            Some(bucket)
        }
    }

    /// The request path for `key` in `bucket`.
    ///
    /// Virtual-hosted style gives `/key`; path style gives `/bucket/key`. A leading `/` on `key` is
    /// not doubled.
    pub fn request_path(&self, bucket: &str, key: &str) -> String {
        let key = key.strip_prefix(SLASH).unwrap_or(key);
        match self.addressing_mode {
            AddressingMode::VirtualHosted => format!("{}{}", SLASH, key),
            AddressingMode::PathStyle => format!("{}{}{}{}", SLASH, bucket, SLASH, key),
        }
    }

    /// Build the canonicalized resource for a request path against `bucket` on this endpoint.
    pub fn canonicalized_resource(&self, bucket: &str, path: &str) -> CanonicalizedResource {
        debug!("canonicalized_resource: endpoint={} mode={:?}", self.host_suffix, self.addressing_mode);
        canonicalize(self.addressing_mode, bucket, path)
    }
}

/// The virtual-hosted-style `Host` header value for `bucket` on the default AWS endpoint.
///
/// ```
/// use scratchstack_aws_s3_resource::host_from_bucket;
///
/// assert_eq!(host_from_bucket("test-es-three"), "test-es-three.s3.amazonaws.com");
/// ```
pub fn host_from_bucket(bucket: &str) -> String {
    S3Endpoint::virtual_hosted().host_for_bucket(bucket)
}
