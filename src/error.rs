use {
    crate::constants::*,
    derive_builder::UninitializedFieldError,
    http::status::StatusCode,
    scratchstack_errors::ServiceError,
    std::{
        error::Error,
        fmt::{Display, Formatter, Result as FmtResult},
    },
};

/// Error returned when a resource cannot be validated or assembled.
///
/// [`canonicalize`][crate::canonicalize] itself never fails; these errors come only from the
/// validating entry points and from builders that are missing required fields.
#[derive(Clone, Debug, Eq, PartialEq)]
#[non_exhaustive]
pub enum ResourceError {
    /// The bucket name does not follow S3 naming rules. Sample messages:
    /// `Bucket name must be between 3 and 63 characters long: ab`
    /// `Bucket name contains invalid characters: My_Bucket`
    /// `Bucket name must not be formatted as an IP address: 192.168.5.4`
    InvalidBucketName(/* message */ String),

    /// The sub-resource name is not one that participates in the S3 signature.
    InvalidSubResource(/* message */ String),

    /// The URI path is not absolute (it does not begin with `/`).
    InvalidURIPath(/* message */ String),

    /// A builder was asked to build without a required field set.
    MissingField(/* field name */ String),
}

impl ResourceError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::InvalidBucketName(_) => ERR_CODE_INVALID_BUCKET_NAME,
            Self::InvalidSubResource(_) => ERR_CODE_INVALID_ARGUMENT,
            Self::InvalidURIPath(_) => ERR_CODE_INVALID_URI,
            Self::MissingField(_) => ERR_CODE_INTERNAL_FAILURE,
        }
    }

    fn http_status(&self) -> StatusCode {
        match self {
            Self::InvalidBucketName(_) | Self::InvalidSubResource(_) | Self::InvalidURIPath(_) => {
                StatusCode::BAD_REQUEST
            }
            Self::MissingField(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl ServiceError for ResourceError {
    fn error_code(&self) -> &'static str {
        ResourceError::error_code(self)
    }

    fn http_status(&self) -> StatusCode {
        ResourceError::http_status(self)
    }
}

impl Display for ResourceError {
    fn fmt(&self, f: &mut Formatter) -> FmtResult {
        match self {
            Self::InvalidBucketName(msg) => f.write_str(msg),
            Self::InvalidSubResource(msg) => f.write_str(msg),
            Self::InvalidURIPath(msg) => f.write_str(msg),
            Self::MissingField(field) => write!(f, "Required field not set: {}", field),
        }
    }
}

impl Error for ResourceError {}

impl From<UninitializedFieldError> for ResourceError {
    fn from(e: UninitializedFieldError) -> ResourceError {
        ResourceError::MissingField(e.field_name().to_string())
    }
}
