//! Common constants used throughout the crate.
//!
//! Tests that are testing the content of an error code or message should not use these constants;
//! they should use hard-coded strings so the tests are also testing for misspellings.
//!
//! Please keep this file organized alphabetically.

/// Default S3 endpoint suffix used to build virtual-hosted-style hostnames.
pub(crate) const DEFAULT_S3_HOST_SUFFIX: &str = "s3.amazonaws.com";

/// Error code: InternalFailure
pub(crate) const ERR_CODE_INTERNAL_FAILURE: &str = "InternalFailure";

/// Error code: InvalidArgument
pub(crate) const ERR_CODE_INVALID_ARGUMENT: &str = "InvalidArgument";

/// Error code: InvalidBucketName
pub(crate) const ERR_CODE_INVALID_BUCKET_NAME: &str = "InvalidBucketName";

/// Error code: InvalidURI
pub(crate) const ERR_CODE_INVALID_URI: &str = "InvalidURI";

/// Maximum length of an S3 bucket name.
pub(crate) const MAX_BUCKET_NAME_LEN: usize = 63;

/// Minimum length of an S3 bucket name.
pub(crate) const MIN_BUCKET_NAME_LEN: usize = 3;

/// Error message: `"Bucket name must not contain adjacent periods: "`
pub(crate) const MSG_BUCKET_ADJACENT_PERIODS: &str = "Bucket name must not contain adjacent periods: ";

/// Error message: `"Bucket name contains invalid characters: "`
pub(crate) const MSG_BUCKET_INVALID_CHARS: &str = "Bucket name contains invalid characters: ";

/// Error message: `"Bucket name must not be formatted as an IP address: "`
pub(crate) const MSG_BUCKET_IS_IP_ADDRESS: &str = "Bucket name must not be formatted as an IP address: ";

/// Error message: `"Bucket name must be between 3 and 63 characters long: "`
pub(crate) const MSG_BUCKET_LENGTH: &str = "Bucket name must be between 3 and 63 characters long: ";

/// Error message: `"Not a signed S3 sub-resource: "`
pub(crate) const MSG_NOT_A_SUBRESOURCE: &str = "Not a signed S3 sub-resource: ";

/// Error message: `"Path is not absolute: "`
pub(crate) const MSG_PATH_NOT_ABSOLUTE: &str = "Path is not absolute: ";

/// Path separator, also prepended to the bucket in virtual-hosted-style resources.
pub(crate) const SLASH: char = '/';

/// Separator between the resource path and the first sub-resource.
pub(crate) const SUBRESOURCE_FIRST_SEP: char = '?';

/// Separator between subsequent sub-resources.
pub(crate) const SUBRESOURCE_NEXT_SEP: char = '&';
