#![no_main]
use {
    arbitrary::Arbitrary,
    libfuzzer_sys::fuzz_target,
    scratchstack_aws_s3_resource::{canonicalize, try_canonicalize, AddressingMode, S3Endpoint},
};

#[derive(Arbitrary, Debug)]
enum Mode {
    VirtualHosted,
    PathStyle,
}

impl From<Mode> for AddressingMode {
    fn from(mode: Mode) -> Self {
        match mode {
            Mode::VirtualHosted => AddressingMode::VirtualHosted,
            Mode::PathStyle => AddressingMode::PathStyle,
        }
    }
}

#[derive(Arbitrary, Debug)]
struct CanonicalizeInput {
    mode: Mode,
    bucket: String,
    path: String,
    host: String,
}

fuzz_target!(|data: CanonicalizeInput| {
    let mode: AddressingMode = data.mode.into();
    let resource = canonicalize(mode, &data.bucket, &data.path);

    match mode {
        AddressingMode::VirtualHosted => assert_eq!(resource.as_str(), format!("/{}{}", data.bucket, data.path)),
        AddressingMode::PathStyle => assert_eq!(resource.as_str(), data.path),
    }

    if let Ok(validated) = try_canonicalize(mode, &data.bucket, &data.path) {
        assert_eq!(validated, resource);
    }

    let endpoint = S3Endpoint::default();
    if let Some(bucket) = endpoint.bucket_from_host(&data.host) {
        assert!(!bucket.is_empty());
    }
});
