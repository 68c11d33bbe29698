//! Error types for the rendering pipeline.

use std::io;

use thiserror::Error;

use crate::math::vec3::Vec3;

/// Errors produced by the renderer and its vector math.
///
/// Every failure is local: persistent renderer state is left intact, so the
/// caller can correct its input and retry.
#[derive(Error, Debug)]
pub enum RenderError {
    /// Scalar division by zero in vector math. Carries the operand so the
    /// caller can see which vector was being divided.
    #[error("vector division by zero at {vector}")]
    DivideByZero { vector: Vec3 },

    /// A constructor or setter received data violating its shape contract.
    #[error("invalid {argument}: expected {expected}, got {got}")]
    InvalidArgument {
        argument: &'static str,
        expected: &'static str,
        got: String,
    },

    /// `render` was called before the named resource was supplied.
    #[error("{resource} not set: call `{setter}` before rendering")]
    NotInitialized {
        resource: &'static str,
        setter: &'static str,
    },

    /// The output sink rejected a write during the frame flush.
    #[error(transparent)]
    Io(#[from] io::Error),
}

impl RenderError {
    pub(crate) fn invalid(
        argument: &'static str,
        expected: &'static str,
        got: impl Into<String>,
    ) -> Self {
        Self::InvalidArgument {
            argument,
            expected,
            got: got.into(),
        }
    }
}
