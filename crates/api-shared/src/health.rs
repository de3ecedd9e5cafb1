use crate::dto::HealthRes;

/// Health service shared by every FundLens server surface.
#[derive(Clone, Default)]
pub struct HealthService;

impl HealthService {
    /// Reports the service as healthy.
    ///
    /// # Returns
    /// A `HealthRes` indicating the service is healthy.
    pub fn check_health() -> HealthRes {
        HealthRes {
            ok: true,
            message: "FundLens is alive".into(),
        }
    }
}
