//! Prints the canonicalized resource for one virtual-hosted-style and one path-style request.
use {
    log::info,
    scratchstack_aws_s3_resource::{canonicalize, AddressingMode, CanonicalizedResource},
};

/// The requests shown by the demo: addressing mode, bucket, and path.
const REQUESTS: [(AddressingMode, &str, &str); 2] =
    [(AddressingMode::VirtualHosted, "bugait", "/shash"), (AddressingMode::PathStyle, "bugait", "/bugait/shash")];

fn resources() -> Vec<CanonicalizedResource> {
    REQUESTS
        .iter()
        .map(|&(mode, bucket, path)| {
            info!("canonicalizing {:?} request: bucket={} path={}", mode, bucket, path);
            canonicalize(mode, bucket, path)
        })
        .collect()
}

fn main() {
    env_logger::init();

    for resource in resources() {
        println!("{}", resource);
    }
}
