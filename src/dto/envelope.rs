//! Wire envelopes returned by the admin REST API.
//!
//! Every endpoint wraps its payload in a `{ success, data, ... }` envelope;
//! `success: false` with HTTP 200 still means failure and carries a message.

use serde::Deserialize;

use crate::gateway::{GatewayError, GatewayResult, Page};

#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct PaginationInfo {
    pub total: usize,
    #[serde(rename = "totalPages")]
    pub total_pages: usize,
    pub page: usize,
    pub limit: usize,
}

#[derive(Debug, Deserialize)]
#[serde(bound(deserialize = "E: serde::Deserialize<'de>"))]
pub struct ListEnvelope<E> {
    pub success: bool,
    #[serde(default)]
    pub data: Vec<E>,
    pub pagination: Option<PaginationInfo>,
    #[serde(default)]
    pub message: Option<String>,
}

impl<E> ListEnvelope<E> {
    /// Normalizes the envelope into a [`Page`], computing the page count
    /// locally when the backend omits the pagination block.
    pub fn into_page(self, limit: usize) -> GatewayResult<Page<E>> {
        if !self.success {
            return Err(GatewayError::Api(
                self.message.unwrap_or_else(|| "request failed".to_string()),
            ));
        }
        let (total_items, total_pages) = match self.pagination {
            Some(info) => (info.total, info.total_pages),
            None => {
                let total = self.data.len();
                (total, if limit == 0 { 0 } else { total.div_ceil(limit) })
            }
        };
        Ok(Page {
            items: self.data,
            total_items,
            total_pages,
        })
    }
}

#[derive(Debug, Deserialize)]
pub struct ItemEnvelope<E> {
    pub success: bool,
    pub data: Option<E>,
    #[serde(default)]
    pub message: Option<String>,
}

impl<E> ItemEnvelope<E> {
    pub fn into_entity(self) -> GatewayResult<E> {
        if !self.success {
            return Err(GatewayError::Api(
                self.message.unwrap_or_else(|| "request failed".to_string()),
            ));
        }
        self.data
            .ok_or_else(|| GatewayError::Decode("envelope missing data".to_string()))
    }
}

#[derive(Debug, Deserialize)]
pub struct StatusEnvelope {
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
}

impl StatusEnvelope {
    pub fn into_result(self) -> GatewayResult<()> {
        if self.success {
            Ok(())
        } else {
            Err(GatewayError::Api(
                self.message.unwrap_or_else(|| "request failed".to_string()),
            ))
        }
    }
}
