use crate::cmm::{
    cmm_luminance::{Luminance, TargetLuminance},
    cmm_primaries::{NamedPrimaries, Primaries},
    cmm_transfer_function::TransferFunction,
};

/// The attributes of an image description as reported by the compositor.
///
/// Accumulated from partial info events and frozen when the terminal `done`
/// event arrives. Named primaries are recorded as a tag without expanding
/// them to chromaticities; power-law transfer functions are recorded as
/// unknown.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct DescriptionAttributes {
    pub primaries: Primaries,
    pub named_primaries: Option<NamedPrimaries>,
    pub transfer_function: Option<TransferFunction>,
    pub luminance: Luminance,
    pub target_primaries: Primaries,
    pub target_luminance: TargetLuminance,
    pub max_cll: Option<u32>,
    pub max_fall: Option<u32>,
}

impl DescriptionAttributes {
    /// Renders the human-readable capability summary shown in the UI.
    pub fn summary(&self) -> String {
        let tf = self.transfer_function.map_or("unknown", |tf| tf.label());
        format!(
            "\nColor Primaries:\n\
             \x20 Red:   {:.3}, {:.3}\n\
             \x20 Green: {:.3}, {:.3}\n\
             \x20 Blue:  {:.3}, {:.3}\n\
             \x20 White: {:.3}, {:.3}\n\
             Transfer Function: {}\n\
             Luminance Range: [{:.2}, {:.2}] nits\n\
             Reference Luminance: {:.2} nits\n\
             Target Range: [{:.2}, {:.2}] nits",
            self.primaries.r.x,
            self.primaries.r.y,
            self.primaries.g.x,
            self.primaries.g.y,
            self.primaries.b.x,
            self.primaries.b.y,
            self.primaries.wp.x,
            self.primaries.wp.y,
            tf,
            self.luminance.min,
            self.luminance.max,
            self.luminance.reference,
            self.target_luminance.min,
            self.target_luminance.max,
        )
    }
}
