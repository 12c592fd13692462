//! Construction of the S3 `CanonicalizedResource` string.
//!
//! The legacy S3 signature covers a resource string of the form:
//!
//! ```text
//! CanonicalizedResource = [ "/" + Bucket ] +
//!     <HTTP-Request-URI, from the protocol name up to the query string> +
//!     [ sub-resource, if present. For example "?acl", "?location", "?logging", or "?torrent" ]
//! ```
//!
//! When a request is addressed virtual-hosted style, the bucket lives in the `Host` header and must
//! be prepended to the path. When it is addressed path style, the bucket is already the first path
//! segment and the path is used as-is.

use {
    crate::{
        constants::*,
        validate::{validate_bucket_name, validate_path},
        ResourceError,
    },
    derive_builder::Builder,
    log::trace,
    std::{
        fmt::{Display, Formatter, Result as FmtResult},
        str::FromStr,
    },
};

/// How the bucket is conveyed in a request.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub enum AddressingMode {
    /// The bucket is part of the hostname, e.g. `https://bucket.s3.amazonaws.com/key`.
    #[default]
    VirtualHosted,

    /// The bucket is the first path segment, e.g. `https://s3.amazonaws.com/bucket/key`.
    PathStyle,
}

impl AddressingMode {
    /// Indicates whether this is virtual-hosted-style addressing.
    #[inline(always)]
    pub const fn is_virtual_hosted(self) -> bool {
        matches!(self, Self::VirtualHosted)
    }
}

/// `true` is virtual-hosted style; `false` is path style.
impl From<bool> for AddressingMode {
    fn from(virtual_hosted: bool) -> Self {
        if virtual_hosted {
            Self::VirtualHosted
        } else {
            Self::PathStyle
        }
    }
}

/// A sub-resource that is included in the signed resource when present on the request.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub enum SubResource {
    /// `acl`
    Acl,
    /// `lifecycle`
    Lifecycle,
    /// `location`
    Location,
    /// `logging`
    Logging,
    /// `notification`
    Notification,
    /// `partNumber`
    PartNumber,
    /// `policy`
    Policy,
    /// `requestPayment`
    RequestPayment,
    /// `torrent`
    Torrent,
    /// `uploadId`
    UploadId,
    /// `uploads`
    Uploads,
    /// `versionId`
    VersionId,
    /// `versioning`
    Versioning,
    /// `versions`
    Versions,
    /// `website`
    Website,
}

impl SubResource {
    /// Every signed sub-resource, in the order they must appear in the resource string.
    pub const ALL: [SubResource; 15] = [
        Self::Acl,
        Self::Lifecycle,
        Self::Location,
        Self::Logging,
        Self::Notification,
        Self::PartNumber,
        Self::Policy,
        Self::RequestPayment,
        Self::Torrent,
        Self::UploadId,
        Self::Uploads,
        Self::VersionId,
        Self::Versioning,
        Self::Versions,
        Self::Website,
    ];

    /// The query-string name of this sub-resource.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Acl => "acl",
            Self::Lifecycle => "lifecycle",
            Self::Location => "location",
            Self::Logging => "logging",
            Self::Notification => "notification",
            Self::PartNumber => "partNumber",
            Self::Policy => "policy",
            Self::RequestPayment => "requestPayment",
            Self::Torrent => "torrent",
            Self::UploadId => "uploadId",
            Self::Uploads => "uploads",
            Self::VersionId => "versionId",
            Self::Versioning => "versioning",
            Self::Versions => "versions",
            Self::Website => "website",
        }
    }
}

impl Display for SubResource {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(self.as_str())
    }
}

impl FromStr for SubResource {
    type Err = ResourceError;

    /// Parse a sub-resource from its exact (case-sensitive) query-string name.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|sub| sub.as_str() == s)
            .ok_or_else(|| ResourceError::InvalidSubResource(format!("{}{}", MSG_NOT_A_SUBRESOURCE, s)))
    }
}

/// The resource portion of a legacy S3 string to sign.
#[derive(Clone, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct CanonicalizedResource {
    /// The resource string.
    resource: String,

    /// Whether a sub-resource has been appended; the bucket and path may themselves contain `?`.
    has_subresource: bool,
}

impl CanonicalizedResource {
    /// Returns the resource as a string slice.
    #[inline(always)]
    pub fn as_str(&self) -> &str {
        &self.resource
    }

    /// Consumes the resource, returning the underlying string.
    #[inline(always)]
    pub fn into_string(self) -> String {
        self.resource
    }

    /// Append a sub-resource, optionally with a value (e.g. `?versionId=abc`).
    ///
    /// The first sub-resource appended is introduced with `?`, subsequent ones with `&`, regardless of
    /// any `?` already present in the bucket or path. Values are appended
    /// verbatim. Callers appending more than one sub-resource are responsible for doing so in
    /// [`SubResource`] order; [`ResourceRequest`] takes care of this.
    pub fn with_subresource(mut self, sub: SubResource, value: Option<&str>) -> Self {
        let sep = if self.has_subresource {
            SUBRESOURCE_NEXT_SEP
        } else {
            SUBRESOURCE_FIRST_SEP
        };

        self.resource.push(sep);
        self.resource.push_str(sub.as_str());
        if let Some(value) = value {
            self.resource.push('=');
            self.resource.push_str(value);
        }

        self.has_subresource = true;

        self
    }
}

impl AsRef<str> for CanonicalizedResource {
    fn as_ref(&self) -> &str {
        &self.resource
    }
}

impl Display for CanonicalizedResource {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(&self.resource)
    }
}

impl From<CanonicalizedResource> for String {
    fn from(resource: CanonicalizedResource) -> String {
        resource.resource
    }
}

impl PartialEq<str> for CanonicalizedResource {
    fn eq(&self, other: &str) -> bool {
        self.resource == other
    }
}

impl PartialEq<&str> for CanonicalizedResource {
    fn eq(&self, other: &&str) -> bool {
        self.resource == *other
    }
}

/// Build the canonicalized resource for a request.
///
/// For virtual-hosted-style requests this is `"/" + bucket + path`; for path-style requests it is
/// `path` unchanged and `bucket` is ignored. No validation, normalization, or escaping is
/// performed, so this never fails. `mode` may be given as a `bool` (`true` for virtual-hosted
/// style).
///
/// ```
/// use scratchstack_aws_s3_resource::canonicalize;
///
/// assert_eq!(canonicalize(true, "bugait", "/shash"), "/bugait/shash");
/// assert_eq!(canonicalize(false, "bugait", "/bugait/shash"), "/bugait/shash");
/// ```
pub fn canonicalize<M>(mode: M, bucket: &str, path: &str) -> CanonicalizedResource
where
    M: Into<AddressingMode>,
{
    let mode = mode.into();
    let resource = match mode {
        AddressingMode::VirtualHosted => {
            let mut resource = String::with_capacity(1 + bucket.len() + path.len());
            resource.push(SLASH);
            resource.push_str(bucket);
            resource.push_str(path);
            resource
        }
        AddressingMode::PathStyle => path.to_string(),
    };

    trace!("canonicalize: mode={:?} bucket={:?} path={:?} -> {:?}", mode, bucket, path, resource);
    CanonicalizedResource {
        resource,
        has_subresource: false,
    }
}

/// Validate the bucket name and path, then build the canonicalized resource.
///
/// The bucket is validated in both addressing modes even though path-style resources do not
/// include it.
pub fn try_canonicalize<M>(mode: M, bucket: &str, path: &str) -> Result<CanonicalizedResource, ResourceError>
where
    M: Into<AddressingMode>,
{
    validate_bucket_name(bucket)?;
    validate_path(path)?;
    Ok(canonicalize(mode, bucket, path))
}

/// The inputs needed to build a [`CanonicalizedResource`], including any sub-resources.
#[derive(Builder, Clone, Debug, Eq, PartialEq)]
#[builder(build_fn(error = "ResourceError"), derive(Debug))]
pub struct ResourceRequest {
    /// How the bucket is conveyed. Defaults to virtual-hosted style.
    #[builder(default)]
    addressing_mode: AddressingMode,

    /// The bucket name.
    #[builder(setter(into))]
    bucket: String,

    /// The request path, up to (but not including) the query string.
    #[builder(setter(into))]
    path: String,

    /// Sub-resources present on the request, with their optional values.
    #[builder(setter(custom), default)]
    subresources: Vec<(SubResource, Option<String>)>,
}

impl ResourceRequestBuilder {
    /// Add a sub-resource present on the request.
    ///
    /// Adding a sub-resource that is already present replaces its value.
    pub fn subresource(&mut self, sub: SubResource, value: Option<&str>) -> &mut Self {
        let subresources = self.subresources.get_or_insert_with(Vec::new);
        let value = value.map(str::to_string);
        match subresources.iter_mut().find(|(existing, _)| *existing == sub) {
            Some(entry) => entry.1 = value,
            None => subresources.push((sub, value)),
        }
        self
    }
}

impl ResourceRequest {
    /// Create a builder for `ResourceRequest`.
    #[inline(always)]
    pub fn builder() -> ResourceRequestBuilder {
        ResourceRequestBuilder::default()
    }

    /// Retrieve the addressing mode.
    #[inline(always)]
    pub fn addressing_mode(&self) -> AddressingMode {
        self.addressing_mode
    }

    /// Retrieve the bucket name.
    #[inline(always)]
    pub fn bucket(&self) -> &str {
        &self.bucket
    }

    /// Retrieve the request path.
    #[inline(always)]
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Build the canonicalized resource, appending sub-resources sorted by name.
    pub fn canonicalize(&self) -> CanonicalizedResource {
        let mut subresources: Vec<&(SubResource, Option<String>)> = self.subresources.iter().collect();
        subresources.sort_by_key(|(sub, _)| *sub);

        subresources.into_iter().fold(
            canonicalize(self.addressing_mode, &self.bucket, &self.path),
            |resource, (sub, value)| resource.with_subresource(*sub, value.as_deref()),
        )
    }
}

#[cfg(test)]
mod tests {
    use {
        crate::{canonicalize, try_canonicalize, AddressingMode, ResourceError, ResourceRequest, SubResource},
        std::str::FromStr,
    };

    #[test_log::test]
    fn reference_examples() {
        assert_eq!(canonicalize(true, "bugait", "/shash").as_str(), "/bugait/shash");
        assert_eq!(canonicalize(false, "bugait", "/bugait/shash").as_str(), "/bugait/shash");
    }

    #[test_log::test]
    fn empty_inputs() {
        assert_eq!(canonicalize(true, "", "/x"), "//x");
        assert_eq!(canonicalize(false, "", ""), "");
        assert_eq!(canonicalize(true, "", ""), "/");
        assert_eq!(canonicalize(true, "bugait", ""), "/bugait");
    }

    #[test_log::test]
    fn no_normalization() {
        assert_eq!(canonicalize(true, "bugait", "shash"), "/bugaitshash");
        assert_eq!(canonicalize(true, "bugait", "//a/./b/../c"), "/bugait//a/./b/../c");
        assert_eq!(canonicalize(true, "Bad Bucket", "/a b%2F"), "/Bad Bucket/a b%2F");
        assert_eq!(canonicalize(AddressingMode::PathStyle, "ignored", "no-slash"), "no-slash");
    }

    #[test_log::test]
    fn path_style_ignores_bucket() {
        for bucket in ["", "bugait", "other", "/weird/"] {
            assert_eq!(canonicalize(false, bucket, "/bugait/shash"), "/bugait/shash");
        }
    }

    #[test_log::test]
    fn addressing_mode_from_bool() {
        assert_eq!(AddressingMode::from(true), AddressingMode::VirtualHosted);
        assert_eq!(AddressingMode::from(false), AddressingMode::PathStyle);
        assert_eq!(AddressingMode::default(), AddressingMode::VirtualHosted);
        assert!(AddressingMode::VirtualHosted.is_virtual_hosted());
        assert!(!AddressingMode::PathStyle.is_virtual_hosted());
    }

    #[test_log::test]
    fn resource_conversions() {
        let r = canonicalize(true, "bugait", "/shash");
        assert_eq!(r.to_string(), "/bugait/shash");
        assert_eq!(r.as_ref(), "/bugait/shash");
        let s: String = r.clone().into();
        assert_eq!(s, "/bugait/shash");
        assert_eq!(r.into_string(), "/bugait/shash");
    }

    #[test_log::test]
    fn subresources() {
        let r = canonicalize(true, "bugait", "/shash").with_subresource(SubResource::Acl, None);
        assert_eq!(r, "/bugait/shash?acl");

        let r = canonicalize(false, "bugait", "/bugait/shash")
            .with_subresource(SubResource::UploadId, Some("VXBsb2FkIElE"))
            .with_subresource(SubResource::VersionId, Some("3HL4kqtJlcpXroDTDm"));
        assert_eq!(r, "/bugait/shash?uploadId=VXBsb2FkIElE&versionId=3HL4kqtJlcpXroDTDm");

        let r = canonicalize(true, "bugait", "/").with_subresource(SubResource::Torrent, Some(""));
        assert_eq!(r, "/bugait/?torrent=");
    }

    #[test_log::test]
    fn subresource_after_question_mark_in_path() {
        let r = canonicalize(true, "bugait", "/shash?x").with_subresource(SubResource::Acl, None);
        assert_eq!(r, "/bugait/shash?x?acl");

        let r = canonicalize(false, "bugait", "/bugait/k?x")
            .with_subresource(SubResource::Acl, None)
            .with_subresource(SubResource::Torrent, None);
        assert_eq!(r, "/bugait/k?x?acl&torrent");
    }

    #[test_log::test]
    fn resource_request_replaces_duplicate_subresources() {
        let req = ResourceRequest::builder()
            .bucket("bugait")
            .path("/shash")
            .subresource(SubResource::Acl, None)
            .subresource(SubResource::VersionId, Some("1"))
            .subresource(SubResource::Acl, None)
            .subresource(SubResource::VersionId, Some("2"))
            .build()
            .unwrap();
        assert_eq!(req.canonicalize(), "/bugait/shash?acl&versionId=2");
    }

    #[test_log::test]
    fn subresource_names() {
        for sub in SubResource::ALL {
            assert_eq!(SubResource::from_str(sub.as_str()).unwrap(), sub);
            assert_eq!(sub.to_string(), sub.as_str());
        }

        let mut sorted = SubResource::ALL;
        sorted.sort_by_key(|sub| sub.as_str());
        assert_eq!(sorted, SubResource::ALL);

        let e = SubResource::from_str("ACL").unwrap_err();
        assert_eq!(e.to_string(), "Not a signed S3 sub-resource: ACL");
        assert!(SubResource::from_str("list-type").is_err());
    }

    #[test_log::test]
    fn try_canonicalize_validates() {
        assert_eq!(try_canonicalize(true, "bugait", "/shash").unwrap(), "/bugait/shash");
        assert_eq!(try_canonicalize(false, "bugait", "/bugait/shash").unwrap(), "/bugait/shash");

        match try_canonicalize(true, "", "/x") {
            Err(ResourceError::InvalidBucketName(_)) => (),
            other => panic!("Expected InvalidBucketName; got {:?}", other),
        }

        match try_canonicalize(false, "bugait", "bugait/shash") {
            Err(ResourceError::InvalidURIPath(msg)) => assert_eq!(msg, "Path is not absolute: bugait/shash"),
            other => panic!("Expected InvalidURIPath; got {:?}", other),
        }
    }

    #[test_log::test]
    fn resource_request_sorts_subresources() {
        let req = ResourceRequest::builder()
            .bucket("bugait")
            .path("/shash")
            .subresource(SubResource::VersionId, Some("7"))
            .subresource(SubResource::Acl, None)
            .build()
            .unwrap();

        assert_eq!(req.addressing_mode(), AddressingMode::VirtualHosted);
        assert_eq!(req.bucket(), "bugait");
        assert_eq!(req.path(), "/shash");
        assert_eq!(req.canonicalize(), "/bugait/shash?acl&versionId=7");

        let req = ResourceRequest::builder()
            .addressing_mode(AddressingMode::PathStyle)
            .bucket("bugait")
            .path("/bugait/shash")
            .build()
            .unwrap();
        assert_eq!(req.canonicalize(), "/bugait/shash");
    }

    #[test_log::test]
    fn resource_request_missing_fields() {
        let e = ResourceRequest::builder().path("/shash").build().unwrap_err();
        assert_eq!(e, ResourceError::MissingField("bucket".to_string()));

        let e = ResourceRequest::builder().bucket("bugait").build().unwrap_err();
        assert_eq!(e, ResourceError::MissingField("path".to_string()));
    }
}
