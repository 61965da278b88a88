//! Image and theme upload endpoints.
//!
//! Uploads go through dedicated Admin endpoints rather than the generic
//! resource paths, and answer with their own envelope shapes, so they
//! get their own handles instead of a [`Resource`](crate::rest::Resource).

use std::sync::Arc;

use serde::Deserialize;
use serde_json::Value;

use crate::clients::{HttpClient, HttpError, UploadFile};
use crate::rest::errors::ResourceError;

/// What an uploaded image is for.
///
/// Ghost validates profile images and icons (dimensions, square shape)
/// differently from ordinary content images.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ImagePurpose {
    /// An ordinary content image.
    #[default]
    Image,
    /// A user or author profile image.
    ProfileImage,
    /// A site icon.
    Icon,
}

impl ImagePurpose {
    /// Returns the value sent in the `purpose` parameter.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Image => "image",
            Self::ProfileImage => "profile_image",
            Self::Icon => "icon",
        }
    }
}

/// A successfully stored image.
#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
pub struct UploadedImage {
    /// Where Ghost serves the image from.
    pub url: String,
    /// The caller-supplied reference, echoed back.
    #[serde(rename = "ref", default)]
    pub reference: Option<String>,
}

/// Handle on the Admin image upload endpoint.
#[derive(Clone, Debug)]
pub struct ImageResource {
    client: Arc<HttpClient>,
}

impl ImageResource {
    pub(crate) const fn new(client: Arc<HttpClient>) -> Self {
        Self { client }
    }

    /// Uploads an image.
    ///
    /// The optional `reference` is an opaque caller-chosen string Ghost
    /// echoes back, useful for correlating bulk uploads.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError`] on request failure or if the response
    /// does not carry an image.
    pub async fn upload(
        &self,
        file: UploadFile,
        purpose: ImagePurpose,
        reference: Option<&str>,
    ) -> Result<UploadedImage, ResourceError> {
        let mut params = vec![("purpose".to_string(), purpose.as_str().to_string())];
        if let Some(reference) = reference {
            params.push(("ref".to_string(), reference.to_string()));
        }
        let body = self
            .client
            .upload("admin/images/upload", &params, &file, None)
            .await?;
        let image = body
            .get("images")
            .and_then(Value::as_array)
            .and_then(|images| images.first())
            .and_then(|image| serde_json::from_value(image.clone()).ok());
        image.ok_or_else(|| unexpected_shape(body))
    }
}

/// Handle on the Admin theme endpoints.
#[derive(Clone, Debug)]
pub struct ThemeResource {
    client: Arc<HttpClient>,
}

impl ThemeResource {
    pub(crate) const fn new(client: Arc<HttpClient>) -> Self {
        Self { client }
    }

    /// Uploads a theme archive, returning the stored theme object.
    ///
    /// The file should be a zip archive; Ghost validates the contents.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError`] on request failure or if the response
    /// does not carry a theme.
    pub async fn upload(&self, file: UploadFile) -> Result<Value, ResourceError> {
        let body = self
            .client
            .upload("admin/themes/upload", &[], &file, None)
            .await?;
        take_first_theme(body)
    }

    /// Activates an installed theme by name.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError`] on request failure or if the response
    /// does not carry a theme.
    pub async fn activate(&self, name: &str) -> Result<Value, ResourceError> {
        let path = format!("admin/themes/{name}/activate");
        let body = self.client.put(&path, &[], None, None).await?;
        take_first_theme(body)
    }
}

fn take_first_theme(mut body: Value) -> Result<Value, ResourceError> {
    let theme = body
        .get_mut("themes")
        .and_then(Value::as_array_mut)
        .and_then(|themes| (!themes.is_empty()).then(|| themes.remove(0)));
    theme.ok_or_else(|| unexpected_shape(body))
}

fn unexpected_shape(body: Value) -> ResourceError {
    ResourceError::Http(HttpError::UnknownShape {
        status_code: 200,
        body,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_purpose_parameter_values() {
        assert_eq!(ImagePurpose::Image.as_str(), "image");
        assert_eq!(ImagePurpose::ProfileImage.as_str(), "profile_image");
        assert_eq!(ImagePurpose::Icon.as_str(), "icon");
        assert_eq!(ImagePurpose::default(), ImagePurpose::Image);
    }

    #[test]
    fn test_uploaded_image_deserializes_ref_field() {
        let image: UploadedImage = serde_json::from_value(json!({
            "url": "https://blog.example.com/content/images/photo.jpg",
            "ref": "upload-1"
        }))
        .unwrap();
        assert_eq!(image.reference.as_deref(), Some("upload-1"));

        let bare: UploadedImage = serde_json::from_value(json!({
            "url": "https://blog.example.com/content/images/photo.jpg"
        }))
        .unwrap();
        assert_eq!(bare.reference, None);
    }

    #[test]
    fn test_take_first_theme_extracts_envelope() {
        let theme = take_first_theme(json!({"themes": [{"name": "casper"}]})).unwrap();
        assert_eq!(theme["name"], "casper");
    }

    #[test]
    fn test_take_first_theme_rejects_empty_envelope() {
        let error = take_first_theme(json!({"themes": []})).unwrap_err();
        assert!(matches!(
            error,
            ResourceError::Http(HttpError::UnknownShape { .. })
        ));
    }
}
