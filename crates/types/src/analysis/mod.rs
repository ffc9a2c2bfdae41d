//! Analysis request/response models

pub mod errors;
pub mod request;
pub mod response;

pub use errors::{AnalysisError, AnalysisValidationError};
pub use request::AnalysisRequest;
pub use response::{AnalysisResult, DataPoint, LayerKind, MapLayer, RiskLevel, SourceReport};
