//! Optional validation of resource inputs.
//!
//! [`canonicalize`][crate::canonicalize] accepts any strings. Callers that want to reject
//! obviously malformed buckets or paths before signing use these checks, or
//! [`try_canonicalize`][crate::try_canonicalize] which applies them.

use {
    crate::{constants::*, ResourceError},
    lazy_static::lazy_static,
    log::trace,
    qualifier_attr::qualifiers,
    regex::Regex,
};

lazy_static! {
    /// Characters permitted in a bucket name; must start and end with a letter or digit.
    static ref BUCKET_NAME: Regex = Regex::new(r"^[a-z0-9][a-z0-9.-]*[a-z0-9]$").unwrap();

    /// Dotted-quad pattern; bucket names may not look like an IPv4 address.
    static ref IPV4_LIKE: Regex = Regex::new(r"^\d{1,3}\.\d{1,3}\.\d{1,3}\.\d{1,3}$").unwrap();
}

/// Verify that `bucket` follows the S3 bucket naming rules.
///
/// The name must be 3 to 63 characters long; consist of lowercase ASCII letters, digits, periods,
/// and hyphens; begin and end with a letter or digit; contain no adjacent periods; and not be
/// formatted as an IPv4 address.
pub fn validate_bucket_name(bucket: &str) -> Result<(), ResourceError> {
    if bucket.len() < MIN_BUCKET_NAME_LEN || bucket.len() > MAX_BUCKET_NAME_LEN {
        trace!("validate_bucket_name: bucket length {} out of range", bucket.len());
        return Err(ResourceError::InvalidBucketName(format!("{}{}", MSG_BUCKET_LENGTH, bucket)));
    }

    if !BUCKET_NAME.is_match(bucket) {
        trace!("validate_bucket_name: bucket {:?} contains invalid characters", bucket);
        return Err(ResourceError::InvalidBucketName(format!("{}{}", MSG_BUCKET_INVALID_CHARS, bucket)));
    }

    if bucket.contains("..") {
        return Err(ResourceError::InvalidBucketName(format!("{}{}", MSG_BUCKET_ADJACENT_PERIODS, bucket)));
    }

    if is_ipv4_like(bucket) {
        return Err(ResourceError::InvalidBucketName(format!("{}{}", MSG_BUCKET_IS_IP_ADDRESS, bucket)));
    }

    Ok(())
}

/// Verify that `path` is absolute.
///
/// An empty path is accepted and refers to the root of the bucket (or service).
pub fn validate_path(path: &str) -> Result<(), ResourceError> {
    if path.is_empty() || path.starts_with(SLASH) {
        Ok(())
    } else {
        trace!("validate_path: path {:?} is not absolute", path);
        Err(ResourceError::InvalidURIPath(format!("{}{}", MSG_PATH_NOT_ABSOLUTE, path)))
    }
}

/// Indicates whether `s` is a dotted quad of one- to three-digit numbers.
#[cfg_attr(any(doc, feature = "unstable"), qualifiers(pub))]
#[cfg_attr(not(any(doc, feature = "unstable")), qualifiers(pub(crate)))]
fn is_ipv4_like(s: &str) -> bool {
    IPV4_LIKE.is_match(s)
}
