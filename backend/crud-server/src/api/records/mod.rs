pub mod field_dto;
pub mod form_response;
pub mod record_dto;
pub mod record_list_response;
pub mod record_response;
pub mod records;
