//! Request and response DTOs

mod request;
mod response;

pub use request::{CreateSheetRequest, HashEntryData, HashRequest, SubmitEntryRequest, VerifyRequest};
pub use response::{
    ErrorResponse, HashResponse, HealthResponse, ListEntriesResponse, SubmitEntryResponse,
    VerifyResponse,
};
