use chrono::{NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::types::EntityKey;
use crate::domain::{Keyed, Materialize, Queryable};

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct GalleryImage {
    #[serde(alias = "_id")]
    pub id: EntityKey,
    pub title: String,
    pub image_url: String,
    pub caption: Option<String>,
    pub position: u32,
    pub created_at: NaiveDateTime,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct NewGalleryImage {
    pub title: String,
    pub image_url: String,
    pub caption: Option<String>,
    pub position: u32,
}

impl NewGalleryImage {
    #[must_use]
    pub fn new(title: String, image_url: String, caption: Option<String>, position: u32) -> Self {
        Self {
            title: title.trim().to_string(),
            image_url: image_url.trim().to_string(),
            caption: caption
                .map(|c| c.trim().to_string())
                .filter(|c| !c.is_empty()),
            position,
        }
    }
}

#[derive(Clone, Debug, Serialize, Deserialize, Default)]
pub struct UpdateGalleryImage {
    pub title: Option<String>,
    pub image_url: Option<String>,
    pub caption: Option<String>,
    pub position: Option<u32>,
}

impl Keyed for GalleryImage {
    fn key(&self) -> &EntityKey {
        &self.id
    }
}

impl Queryable for GalleryImage {
    fn haystack(&self) -> Vec<&str> {
        let mut fields = vec![self.title.as_str()];
        if let Some(caption) = &self.caption {
            fields.push(caption);
        }
        fields
    }
}

impl Materialize for GalleryImage {
    type Create = NewGalleryImage;
    type Update = UpdateGalleryImage;

    fn materialize(key: EntityKey, payload: &NewGalleryImage) -> Self {
        Self {
            id: key,
            title: payload.title.clone(),
            image_url: payload.image_url.clone(),
            caption: payload.caption.clone(),
            position: payload.position,
            created_at: Utc::now().naive_utc(),
        }
    }

    fn merge(&mut self, updates: &UpdateGalleryImage) {
        if let Some(title) = &updates.title {
            self.title = title.clone();
        }
        if let Some(image_url) = &updates.image_url {
            self.image_url = image_url.clone();
        }
        if let Some(caption) = &updates.caption {
            self.caption = Some(caption.clone());
        }
        if let Some(position) = updates.position {
            self.position = position;
        }
    }
}
