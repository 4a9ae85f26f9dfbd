use serde::Deserialize;
use validator::Validate;

use crate::domain::gallery::{GalleryImage, NewGalleryImage, UpdateGalleryImage};

#[derive(Debug, Clone, Default, Deserialize, Validate)]
/// Form data for adding or editing a gallery image.
pub struct GalleryForm {
    #[validate(length(min = 1, message = "title is required"))]
    pub title: String,
    #[validate(url(message = "invalid image url"))]
    pub image_url: String,
    #[serde(default)]
    pub caption: Option<String>,
    #[serde(default)]
    pub position: u32,
}

impl GalleryForm {
    #[must_use]
    pub fn for_edit(image: Option<&GalleryImage>) -> Self {
        match image {
            Some(image) => Self {
                title: image.title.clone(),
                image_url: image.image_url.clone(),
                caption: image.caption.clone(),
                position: image.position,
            },
            None => Self::default(),
        }
    }
}

impl From<&GalleryForm> for NewGalleryImage {
    fn from(form: &GalleryForm) -> Self {
        NewGalleryImage::new(
            form.title.clone(),
            form.image_url.clone(),
            form.caption.clone(),
            form.position,
        )
    }
}

impl From<&GalleryForm> for UpdateGalleryImage {
    fn from(form: &GalleryForm) -> Self {
        let new = NewGalleryImage::from(form);
        UpdateGalleryImage {
            title: Some(new.title),
            image_url: Some(new.image_url),
            caption: new.caption,
            position: Some(new.position),
        }
    }
}
