use serde_json::json;

use regioncrop_core::error::RegionCropError;
use regioncrop_core::protocol::{CropRequest, CropResponse, StartOverResponse};
use regioncrop_core::scale::{PixelPoint, ScaledRect, ScaledSelection};

#[test]
fn test_rectangle_request_body_is_flat() {
    let req = CropRequest::new(
        "a.jpg",
        ScaledSelection::Rectangle(ScaledRect {
            x: 1,
            y: 2,
            width: 3,
            height: 4,
        }),
    );
    let body = serde_json::to_value(&req).unwrap();
    assert_eq!(
        body,
        json!({"filename": "a.jpg", "x": 1, "y": 2, "width": 3, "height": 4})
    );
}

#[test]
fn test_polygon_request_body_has_points() {
    let req = CropRequest::new(
        "b.jpg",
        ScaledSelection::Polygon(vec![PixelPoint { x: 5, y: 6 }, PixelPoint { x: 7, y: 8 }]),
    );
    let body = serde_json::to_value(&req).unwrap();
    assert_eq!(
        body,
        json!({"filename": "b.jpg", "points": [{"x": 5, "y": 6}, {"x": 7, "y": 8}]})
    );
    assert_eq!(req.filename(), "b.jpg");
}

#[test]
fn test_request_bodies_decode_to_matching_shape() {
    let rect: CropRequest =
        serde_json::from_str(r#"{"filename":"a.jpg","x":1,"y":2,"width":3,"height":4}"#).unwrap();
    assert!(matches!(rect, CropRequest::Rectangle { .. }));

    let poly: CropRequest =
        serde_json::from_str(r#"{"filename":"a.jpg","points":[{"x":1,"y":2}]}"#).unwrap();
    assert!(matches!(poly, CropRequest::Polygon { .. }));
}

#[test]
fn test_crop_success_response() {
    let resp: CropResponse =
        serde_json::from_str(r#"{"cropped_image_path": "uploads/a.jpg"}"#).unwrap();
    assert_eq!(resp.into_result().unwrap(), "uploads/a.jpg");
}

#[test]
fn test_crop_error_response_carries_message() {
    let resp: CropResponse =
        serde_json::from_str(r#"{"error": "Failed to crop DICOM image"}"#).unwrap();
    match resp.into_result() {
        Err(RegionCropError::CropRejected(msg)) => assert_eq!(msg, "Failed to crop DICOM image"),
        other => panic!("expected CropRejected, got {other:?}"),
    }
}

#[test]
fn test_crop_response_without_either_field_is_failure() {
    let resp: CropResponse = serde_json::from_str("{}").unwrap();
    assert!(matches!(
        resp.into_result(),
        Err(RegionCropError::CropRejected(_))
    ));
}

#[test]
fn test_start_over_response() {
    let ok: StartOverResponse = serde_json::from_str(r#"{"success": true}"#).unwrap();
    assert!(ok.into_result().is_ok());

    let refused: StartOverResponse = serde_json::from_str(r#"{"success": false}"#).unwrap();
    assert!(matches!(
        refused.into_result(),
        Err(RegionCropError::StartOverRejected)
    ));

    let missing: StartOverResponse = serde_json::from_str("{}").unwrap();
    assert!(missing.into_result().is_err());
}
