//! Delivery URLs for transformed previews.
//!
//! Transformations run on the asset host. A request becomes a chain of
//! effect segments in the delivery path, e.g.
//! `https://res.cloudinary.com/demo/image/upload/e_grayscale/pets/cat`.

use reqwest::Url;

use assetdrive_core::error::{AppError, ErrorKind};
use assetdrive_core::result::AppResult;
use assetdrive_entity::transform::{TransformFlags, TransformRequest};

/// Delivery host for image assets.
pub const DELIVERY_BASE: &str = "https://res.cloudinary.com";

/// Effect segments for `flags`, in application order.
pub fn effect_segments(flags: &TransformFlags) -> Vec<String> {
    let mut segments = Vec::new();
    if flags.remove_background {
        segments.push("e_background_removal".to_string());
    }
    if let Some(prompt) = flags.background_prompt() {
        segments.push(format!("e_gen_background_replace:prompt_{prompt}"));
    }
    if flags.grayscale {
        segments.push("e_grayscale".to_string());
    }
    segments
}

/// Build the delivery URL rendering `request` for the given cloud.
pub fn delivery_url(cloud_name: &str, request: &TransformRequest) -> AppResult<String> {
    let cloud_name = cloud_name.trim();
    if cloud_name.is_empty() {
        return Err(AppError::configuration(
            "source.cloud_name must be set to build delivery URLs",
        ));
    }
    if request.file_id.trim().is_empty() {
        return Err(AppError::validation("Transform request has no file id"));
    }

    let mut url = Url::parse(DELIVERY_BASE).map_err(|e| {
        AppError::with_source(ErrorKind::Internal, "Invalid delivery base URL", e)
    })?;
    {
        let mut path = url
            .path_segments_mut()
            .map_err(|()| AppError::internal("Delivery base URL cannot hold a path"))?;
        path.pop_if_empty()
            .push(cloud_name)
            .push("image")
            .push("upload");
        for segment in effect_segments(&request.flags) {
            path.push(&segment);
        }
        for part in request.file_id.split('/').filter(|p| !p.is_empty()) {
            path.push(part);
        }
    }
    Ok(url.into())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(flags: TransformFlags) -> TransformRequest {
        TransformRequest {
            file_id: "pets/cat".to_string(),
            flags,
        }
    }

    #[test]
    fn test_identity_has_no_effects() {
        let url = delivery_url("demo", &request(TransformFlags::default())).unwrap();
        assert_eq!(url, "https://res.cloudinary.com/demo/image/upload/pets/cat");
    }

    #[test]
    fn test_all_effects_in_order() {
        let flags = TransformFlags {
            remove_background: true,
            grayscale: true,
            replace_background: Some("  sunny beach ".to_string()),
        };
        let url = delivery_url("demo", &request(flags)).unwrap();
        assert_eq!(
            url,
            "https://res.cloudinary.com/demo/image/upload/e_background_removal/\
             e_gen_background_replace:prompt_sunny%20beach/e_grayscale/pets/cat"
        );
    }

    #[test]
    fn test_missing_cloud_name() {
        let err = delivery_url(" ", &request(TransformFlags::default())).unwrap_err();
        assert_eq!(err.kind, ErrorKind::Configuration);
    }

    #[test]
    fn test_missing_file_id() {
        let mut req = request(TransformFlags::default());
        req.file_id = String::new();
        let err = delivery_url("demo", &req).unwrap_err();
        assert_eq!(err.kind, ErrorKind::Validation);
    }
}
