use typed_builder::TypedBuilder;

/// Hardware model the CPU boots as.
///
/// Only the post-boot value of AF differs between the two; everything else
/// about the instruction engine is identical.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Default)]
pub enum Model {
    #[default]
    Dmg,
    /// Enhanced (CGB) hardware, which hands over with A=0x11 so software
    /// can detect it.
    CgbCompat,
}

impl Model {
    pub(crate) fn boot_af(self) -> u16 {
        match self {
            Model::Dmg => 0x0000,
            Model::CgbCompat => 0x1100,
        }
    }
}

/// What `STOP` does when no speed switch has been armed.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Default)]
pub enum StopPolicy {
    /// Raise [`CpuError::UnimplementedSystemMode`](crate::CpuError).
    #[default]
    Fatal,
    /// Treat `STOP` as a two-byte no-op. Hardware would instead wait for a
    /// joypad line to go low; this is a deliberate approximation.
    Ignore,
}

/// Construction-time options for [`Cpu`](crate::Cpu).
///
/// ```
/// use sm83_core::{CpuConfig, Model, StopPolicy};
///
/// let config = CpuConfig::builder()
///     .model(Model::CgbCompat)
///     .stop(StopPolicy::Ignore)
///     .build();
/// assert_eq!(config.model, Model::CgbCompat);
/// ```
#[derive(Copy, Clone, Debug, Eq, PartialEq, Default, TypedBuilder)]
pub struct CpuConfig {
    #[builder(default)]
    pub model: Model,
    #[builder(default)]
    pub stop: StopPolicy,
}
