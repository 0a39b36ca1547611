//! Sbiba Heritage AI shared wire types.
//!
//! Serialization shapes for everything that crosses an HTTP boundary:
//! the heritage backend (chat, colorization, artifact metadata) and the
//! third-party avatar-generation API proxied by the gateway.
//!
//! # Design Principles
//!
//! 1. **Minimal dependencies** - only serde, serde_json
//! 2. **No business logic** - pure data types and serialization
//! 3. **WASM compatible** - compiles for native and wasm32 targets

pub mod avatar;
pub mod backend;

pub use avatar::{
    ArtguruEnvelope, AsyncTaskQueue, GenerateData, GenerateRequest, QueueTaskRequest,
    QueueTaskStatus, UploadData, QUEUE_STATUS_FAILED, QUEUE_STATUS_SUCCESS,
};
pub use backend::{ArtifactRecord, ChatAnswer, ChatRequest, ColorationRecord, SourceIdResponse};
