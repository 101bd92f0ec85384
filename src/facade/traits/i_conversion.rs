use crate::error::Result;
use crate::models::conversion::{ConversionOutput, ConversionRequest};
use crate::service::host::HostSurface;
use crate::service::traits::i_service::EngineSession;

// Facade interface: runs the conversion stages inside a host surface
#[allow(async_fn_in_trait)]
pub trait ConversionFacadeTrait: Send + Sync {
    type Session: EngineSession;

    /// Runs one conversion.
    /// # Parameters
    /// - surface: render context; receives the engine session once it exists
    /// - request: input and output paths
    /// # Returns
    /// - the written PDF on success, otherwise the first stage failure
    async fn execute_conversion(
        &self,
        surface: &mut HostSurface<Self::Session>,
        request: ConversionRequest,
    ) -> Result<ConversionOutput>;
}
