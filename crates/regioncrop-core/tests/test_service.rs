#[allow(dead_code)]
mod common;

use std::path::{Path, PathBuf};

use common::FakeService;
use url::Url;

use regioncrop_core::config::{DimensionSource, DimensionsConfig};
use regioncrop_core::consts::MAX_UPLOAD_FILES;
use regioncrop_core::geometry::Dimensions;
use regioncrop_core::service::{
    locator_filename, parse_base_url, resolver_for, thumbnail_name, upload_batch, ResolveDimensions,
};

#[test]
fn test_upload_caps_at_four_files() {
    let files: Vec<PathBuf> = (0..5).map(|i| PathBuf::from(format!("study{i}.dcm"))).collect();
    let batch = upload_batch(&files);
    assert_eq!(batch.len(), MAX_UPLOAD_FILES);
    assert_eq!(batch, &files[..4]);
}

#[test]
fn test_upload_keeps_small_selection() {
    let files = vec![PathBuf::from("a.dcm"), PathBuf::from("b.dcm")];
    assert_eq!(upload_batch(&files), files.as_slice());
}

#[test]
fn test_locator_filename_is_last_segment() {
    let url = Url::parse("http://server.test/uploads/R_CC.jpg").unwrap();
    assert_eq!(locator_filename(&url).unwrap(), "R_CC.jpg");

    let dir = Url::parse("http://server.test/uploads/").unwrap();
    assert!(locator_filename(&dir).is_err());
}

#[test]
fn test_thumbnail_name() {
    assert_eq!(thumbnail_name(Path::new("/data/R_CC.dcm")).as_deref(), Some("R_CC.jpg"));
    assert_eq!(thumbnail_name(Path::new("notes.txt")), None);
}

#[test]
fn test_base_url_joins_under_path_prefix() {
    let base = parse_base_url("http://server.test/cropper").unwrap();
    assert_eq!(base.join("crop").unwrap().as_str(), "http://server.test/cropper/crop");

    let root = parse_base_url("http://server.test").unwrap();
    assert_eq!(root.join("start-over").unwrap().as_str(), "http://server.test/start-over");
}

#[test]
fn test_fixed_resolver_skips_server() {
    let service = FakeService::new(Some(Dimensions::new(1, 1)), Default::default());
    let config = DimensionsConfig {
        source: DimensionSource::Fixed,
        width: 2736,
        height: 3584,
    };
    let resolver = resolver_for(&config, &service);
    assert_eq!(resolver.resolve("a.jpg").unwrap(), Dimensions::new(2736, 3584));
    assert!(service.dimension_lookups.borrow().is_empty());
}

#[test]
fn test_server_resolver_rejects_zero_dimensions() {
    let service = FakeService::new(Some(Dimensions::new(0, 10)), Default::default());
    let config = DimensionsConfig::default();
    let resolver = resolver_for(&config, &service);
    assert!(resolver.resolve("a.jpg").is_err());
    assert_eq!(service.dimension_lookups.borrow().len(), 1);
}
