// Cursor based pagination shared by every list endpoint of the primary API.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PaginationMetaDto {
    #[serde(default)]
    pub next_cursor: Option<u64>,
    pub per_page: u32,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct PaginatedResponseDto<T> {
    pub data: Vec<T>,
    pub meta: PaginationMetaDto,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PaginationMeta {
    // Opaque upstream token. `None` means this was the last page.
    pub next_cursor: Option<u64>,
    pub per_page: u32,
}

impl PaginationMeta {
    pub fn has_next_page(&self) -> bool {
        self.next_cursor.is_some()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PaginatedResponse<T> {
    pub data: Vec<T>,
    pub meta: PaginationMeta,
}

impl<T> PaginatedResponse<T> {
    pub fn has_next_page(&self) -> bool {
        self.meta.has_next_page()
    }
}

pub fn map_pagination_meta(dto: PaginationMetaDto) -> PaginationMeta {
    PaginationMeta {
        next_cursor: dto.next_cursor,
        per_page: dto.per_page,
    }
}

/// Map every DTO of a page with `mapper` and normalize the metadata.
pub fn map_paginated_response<D, E>(
    response: PaginatedResponseDto<D>,
    mapper: impl FnMut(D) -> E,
) -> PaginatedResponse<E> {
    PaginatedResponse {
        data: map_list(response.data, mapper),
        meta: map_pagination_meta(response.meta),
    }
}

pub fn map_list<D, E>(dtos: Vec<D>, mapper: impl FnMut(D) -> E) -> Vec<E> {
    dtos.into_iter().map(mapper).collect()
}
