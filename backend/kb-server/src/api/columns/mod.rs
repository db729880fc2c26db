pub mod column_dto;
pub mod column_list_response;
pub mod column_ref_dto;
pub mod column_response;
#[allow(clippy::module_inception)]
pub mod columns;
pub mod create_column_request;
pub mod update_column_request;
