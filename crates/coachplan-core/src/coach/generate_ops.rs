//! Remote generation operations for the Coach.

use log::warn;

use super::Coach;
use crate::{
    error::{CoachError, Result},
    generator::config::API_KEY_VAR,
    models::Plan,
    params::GeneratePlan,
};

impl Coach {
    /// Validates the parameters and asks the remote generator for a plan.
    ///
    /// # Errors
    ///
    /// * `CoachError::InvalidInput` - When the parameters fail validation
    /// * `CoachError::Configuration` - When no generator is configured
    /// * `CoachError::Generation` - When the remote call or its reply fails
    pub async fn generate_plan(&self, params: &GeneratePlan) -> Result<Plan> {
        let request = params.validate()?;
        let generator = self.generator.as_ref().ok_or_else(|| {
            CoachError::configuration(format!(
                "remote generation is not configured; set {API_KEY_VAR}"
            ))
        })?;

        generator.generate(&request).await.inspect_err(|e| {
            warn!("Generating {} plan failed: {e}", request.sport);
        })
    }
}
